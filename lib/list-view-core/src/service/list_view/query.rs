use std::str::FromStr;

use indexmap::IndexMap;

use super::ListView;
use super::dto::{FilterInput, ListViewParams, SortingDTO};
use crate::model::common::SortDirection;
use crate::model::list_filter::ListFilterCondition;
use crate::model::list_query::{ListPagination, ListSorting};
use crate::model::record::{RecordFilterValue, RecordListQuery};

/// Outcome of interpreting the request parameters against the declaration
pub(crate) struct ResolvedQuery {
    pub query: RecordListQuery,
    pub sorting: Option<SortingDTO>,
    pub search: Option<String>,
    /// filter key -> normalized input that produced a condition
    pub active_filters: IndexMap<String, FilterInput>,
}

impl ListView {
    pub(crate) fn build_query(&self, params: &ListViewParams) -> ResolvedQuery {
        let sorting = self.resolve_sorting(params);
        let search = self.resolve_search(params);
        let (filter_conditions, active_filters) = self.resolve_filters(params);

        let search_condition = search.as_deref().and_then(|term| self.search_condition(term));

        let filtering = ListFilterCondition::all(
            self.scope
                .iter()
                .cloned()
                .chain(search_condition)
                .chain(filter_conditions),
        );

        let pagination = self.pagination_enabled.then(|| ListPagination {
            page: parse_page(params.page.as_deref()) - 1,
            page_size: self.resolve_page_size(params.per_page.as_deref()),
        });

        ResolvedQuery {
            query: RecordListQuery {
                pagination,
                sorting: sorting.as_ref().map(|sorting| ListSorting {
                    column: sorting.field.to_owned(),
                    direction: Some(sorting.direction),
                }),
                filtering,
            },
            sorting,
            search,
            active_filters,
        }
    }

    /// Request sort applies only to sortable columns, and `order` only
    /// together with it; anything else falls back to the default sort, which
    /// itself is only emitted for a sortable column
    fn resolve_sorting(&self, params: &ListViewParams) -> Option<SortingDTO> {
        let (default_field, default_direction) = &self.default_sort;

        let requested = params
            .sort
            .as_deref()
            .filter(|field| self.is_sortable(field));

        let (field, direction) = match requested {
            Some(field) => {
                let direction = match params.order.as_deref().map(SortDirection::from_str) {
                    Some(Ok(direction)) => direction,
                    Some(Err(_)) => {
                        tracing::debug!("Ignoring invalid sort order {:?}", params.order);
                        *default_direction
                    }
                    None => *default_direction,
                };
                (field, direction)
            }
            None => {
                if params.sort.is_some() {
                    tracing::debug!("Ignoring sort on {:?}, not a sortable column", params.sort);
                }
                (default_field.as_str(), *default_direction)
            }
        };

        if !self.is_sortable(field) {
            tracing::debug!("Default sort on `{field}` skipped, not a sortable column");
            return None;
        }

        Some(SortingDTO {
            field: field.to_owned(),
            direction,
        })
    }

    fn is_sortable(&self, field: &str) -> bool {
        self.columns
            .get(field)
            .is_some_and(|column| column.sortable)
    }

    fn resolve_search(&self, params: &ListViewParams) -> Option<String> {
        if !self.search_enabled {
            return None;
        }

        params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
    }

    /// Partial match of `term` on any searchable column
    fn search_condition(&self, term: &str) -> Option<ListFilterCondition<RecordFilterValue>> {
        let conditions: Vec<_> = self
            .columns
            .values()
            .filter(|column| column.searchable)
            .map(|column| RecordFilterValue::contains(&column.field, term).into())
            .collect();

        if conditions.is_empty() {
            tracing::debug!("Ignoring search term, no searchable columns");
            return None;
        }

        Some(ListFilterCondition::Or(conditions))
    }

    fn resolve_filters(
        &self,
        params: &ListViewParams,
    ) -> (
        Vec<ListFilterCondition<RecordFilterValue>>,
        IndexMap<String, FilterInput>,
    ) {
        let mut conditions = vec![];
        let mut active = IndexMap::new();

        if !self.filters_enabled {
            return (conditions, active);
        }

        for filter in self.filters.values() {
            let Some(input) = params
                .filters
                .get(&filter.key)
                .and_then(FilterInput::normalized)
            else {
                continue;
            };

            match filter.condition(&input) {
                Some(condition) => {
                    conditions.push(condition);
                    active.insert(filter.key.to_owned(), input);
                }
                None => tracing::debug!("Filter `{}` ignored input {input:?}", filter.key),
            }
        }

        (conditions, active)
    }

    /// View page size unless a positive `per_page` override is supplied,
    /// capped by the configured maximum
    fn resolve_page_size(&self, per_page: Option<&str>) -> u32 {
        per_page
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|value| *value > 0)
            .map_or(self.per_page, |value| value.min(self.max_page_size))
    }
}

/// One-based page number, anything else than a positive integer is page 1
pub(crate) fn parse_page(page: Option<&str>) -> u32 {
    page.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}
