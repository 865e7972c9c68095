use list_view_core::model::record::{GetRecordList, RecordListQuery};
use list_view_core::repository::error::DataLayerError;
use list_view_core::repository::record_repository::RecordRepository;
use sea_orm::{EntityTrait, FromQueryResult, PaginatorTrait};
use serde::Serialize;

use super::RecordProvider;
use crate::common::calculate_pages_count;
use crate::list_query_generic::SelectWithListQuery;
use crate::mapper::{model_to_record, to_data_layer_error};

#[async_trait::async_trait]
impl<E, M> RecordRepository for RecordProvider<E, M>
where
    E: EntityTrait,
    E::Model: Sync,
    M: FromQueryResult + Serialize + Send + Sync + 'static,
{
    async fn get_record_list(
        &self,
        query: RecordListQuery,
    ) -> Result<GetRecordList, DataLayerError> {
        let limit = query
            .pagination
            .as_ref()
            .map(|pagination| u64::from(pagination.page_size));

        let query = self.base.clone().with_list_query(&query, self);

        let items_count = query
            .to_owned()
            .count(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let values = query
            .into_model::<M>()
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .into_iter()
            .map(model_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GetRecordList {
            values,
            total_pages: calculate_pages_count(items_count, limit.unwrap_or(items_count)),
            total_items: items_count,
        })
    }
}
