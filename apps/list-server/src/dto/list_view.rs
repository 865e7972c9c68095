use indexmap::IndexMap;
use list_view_core::model::common::SortDirection;
use list_view_core::service::list_view::action::{BulkAction, CreateAction};
use list_view_core::service::list_view::dto::{
    ColumnResponseDTO, FilterResponseDTO, ListRowDTO, ListViewResponseDTO, PaginationDTO,
    RowActionDTO, SortingDTO,
};
use list_view_core::service::list_view::filter::{FilterKind, OptionMap};
use one_dto_mapper::{From, convert_inner};
use serde::Serialize;
use serde_json::Value;

use super::mapper::row_actions_to_rest;

/// Display-ready list: rows plus everything needed to render the grid chrome
#[derive(Clone, Debug, Serialize, From)]
#[from(ListViewResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListViewResponseRestDTO {
    #[from(with_fn = convert_inner)]
    pub rows: Vec<ListRowRestDTO>,
    /// `null` when the view is not paginated
    #[from(with_fn = convert_inner)]
    pub pagination: Option<PaginationRestDTO>,
    #[from(with_fn = convert_inner)]
    pub columns: Vec<ColumnRestDTO>,
    #[from(with_fn = convert_inner)]
    pub filters: Vec<FilterRestDTO>,
    #[from(with_fn = convert_inner)]
    pub bulk_actions: Vec<BulkActionRestDTO>,
    #[from(with_fn = convert_inner)]
    pub create_action: Option<CreateActionRestDTO>,
    #[from(with_fn = convert_inner)]
    pub sorting: Option<SortingRestDTO>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(ListRowDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListRowRestDTO {
    pub values: IndexMap<String, Value>,
    #[from(with_fn = row_actions_to_rest)]
    pub actions: IndexMap<String, Vec<RowActionRestDTO>>,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(RowActionDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RowActionRestDTO {
    pub label: String,
    pub url: String,
    pub style: Option<String>,
    pub confirm: bool,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(PaginationDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginationRestDTO {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(ColumnResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ColumnRestDTO {
    pub field: String,
    pub label: String,
    pub sortable: bool,
    pub searchable: bool,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(FilterResponseDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FilterRestDTO {
    pub key: String,
    pub field: String,
    pub label: String,
    pub kind: FilterKindRestEnum,
    pub options: Option<OptionMap>,
    /// Input the filter is currently applied with
    #[from(with_fn = convert_inner)]
    pub value: Option<FilterInputRestDTO>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, From)]
#[from(FilterKind)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum FilterKindRestEnum {
    Text,
    Select,
    DateRange,
    NumericRange,
    Custom,
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum FilterInputRestDTO {
    Value(String),
    Range {
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        to: Option<String>,
    },
}

#[derive(Clone, Debug, Serialize, From)]
#[from(BulkAction)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BulkActionRestDTO {
    pub key: String,
    pub label: String,
    pub style: Option<String>,
    pub confirm: bool,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(CreateAction)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateActionRestDTO {
    pub url: String,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, From)]
#[from(SortingDTO)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SortingRestDTO {
    pub field: String,
    pub direction: SortDirectionRestEnum,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, From)]
#[from(SortDirection)]
pub(crate) enum SortDirectionRestEnum {
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}
