use indexmap::IndexMap;

use super::column::Column;
use super::dto::{
    ColumnResponseDTO, FilterInput, FilterResponseDTO, ListRowDTO, PaginationDTO, RowActionDTO,
};
use super::filter::Filter;
use crate::model::list_query::ListPagination;
use crate::model::record::Record;
use crate::service::error::ServiceError;

pub(super) fn record_to_row<'a>(
    columns: impl IntoIterator<Item = &'a Column>,
    record: &Record,
) -> Result<ListRowDTO, ServiceError> {
    let mut values = IndexMap::new();
    let mut actions = IndexMap::new();

    for column in columns {
        let raw = record.value_of(&column.field);
        let value = match &column.formatter {
            Some(formatter) => {
                formatter(&raw, record).map_err(|source| ServiceError::Formatter {
                    field: column.field.to_owned(),
                    source,
                })?
            }
            None => raw,
        };
        values.insert(column.field.to_owned(), value);

        if !column.row_actions.is_empty() {
            let resolved = column
                .row_actions
                .iter()
                .map(|action| RowActionDTO {
                    label: action.label.to_owned(),
                    url: action.target.resolve(record),
                    style: action.style.to_owned(),
                    confirm: action.confirm,
                })
                .collect();
            actions.insert(column.field.to_owned(), resolved);
        }
    }

    Ok(ListRowDTO { values, actions })
}

impl From<&Column> for ColumnResponseDTO {
    fn from(column: &Column) -> Self {
        Self {
            field: column.field.to_owned(),
            label: column.label.to_owned(),
            sortable: column.sortable,
            searchable: column.searchable,
        }
    }
}

/// Evaluates the filter options, deferred suppliers included
pub(super) fn filter_to_response(filter: &Filter, value: Option<FilterInput>) -> FilterResponseDTO {
    FilterResponseDTO {
        key: filter.key.to_owned(),
        field: filter.field.to_owned(),
        label: filter.label.to_owned(),
        kind: filter.kind,
        options: filter.options.evaluate(),
        value,
    }
}

pub(super) fn pagination_to_response(
    pagination: &ListPagination,
    total_items: u64,
    total_pages: u64,
) -> PaginationDTO {
    PaginationDTO {
        page: pagination.page + 1,
        per_page: pagination.page_size,
        total_items,
        total_pages,
    }
}
