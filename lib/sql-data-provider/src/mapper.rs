use list_view_core::model::common::SortDirection;
use list_view_core::model::record::Record;
use list_view_core::repository::error::DataLayerError;
use sea_orm::{DbErr, Order};
use serde::Serialize;

pub(crate) fn order_from_sort_direction(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Ascending => Order::Asc,
        SortDirection::Descending => Order::Desc,
    }
}

pub(crate) fn to_data_layer_error(e: DbErr) -> DataLayerError {
    DataLayerError::Db(e.into())
}

pub(crate) fn model_to_record(model: impl Serialize) -> Result<Record, DataLayerError> {
    serde_json::to_value(model)
        .map_err(|error| {
            tracing::warn!("Failed to serialize row: {error}");
            DataLayerError::MappingError
        })
        .and_then(Record::try_from)
}
