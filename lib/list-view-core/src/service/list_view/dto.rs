use indexmap::IndexMap;
use serde_json::Value;

use super::action::{BulkAction, CreateAction};
use super::filter::{FilterKind, OptionMap};
use crate::model::common::SortDirection;

const FILTER_PARAM_PREFIX: &str = "filter_";

/// Value supplied for a single filter
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FilterInput {
    Value(String),
    Range {
        from: Option<String>,
        to: Option<String>,
    },
}

impl FilterInput {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn range(from: Option<&str>, to: Option<&str>) -> Self {
        Self::Range {
            from: from.map(str::to_owned),
            to: to.map(str::to_owned),
        }
    }

    /// Trimmed copy, `None` when nothing usable was supplied
    pub(crate) fn normalized(&self) -> Option<Self> {
        fn non_empty(value: &str) -> Option<String> {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_owned())
        }

        match self {
            Self::Value(value) => non_empty(value).map(Self::Value),
            Self::Range { from, to } => {
                let from = from.as_deref().and_then(non_empty);
                let to = to.as_deref().and_then(non_empty);
                (from.is_some() || to.is_some()).then_some(Self::Range { from, to })
            }
        }
    }
}

/// Raw request parameters of a list view.
///
/// Values are kept as supplied; anything unusable is normalized to defaults
/// during resolution instead of being rejected.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListViewParams {
    pub sort: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
    /// keyed by filter key (the `filter_` prefix stripped)
    pub filters: IndexMap<String, FilterInput>,
}

impl ListViewParams {
    /// Parses `sort=name&order=asc&filter_status=1&filter_created[from]=2024-01-01`.
    ///
    /// Every parameter is parsed on its own: one that cannot be parsed, or
    /// has an unsupported shape (`filter_status[]=1`), is dropped without
    /// affecting the others. A repeated key keeps its last value.
    pub fn from_query_str(query: &str) -> Self {
        let mut raw: IndexMap<String, Value> = IndexMap::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let parsed = serde_qs::Config::new(2, false)
                .deserialize_str::<IndexMap<String, Value>>(pair);

            match parsed {
                Ok(parsed) => {
                    for (key, value) in parsed {
                        merge_param(&mut raw, key, value);
                    }
                }
                Err(error) => {
                    tracing::warn!("Ignoring unparsable list view parameter `{pair}`: {error}");
                }
            }
        }

        let mut result = Self::default();
        for (key, value) in raw {
            let Some(input) = to_filter_input(value) else {
                tracing::debug!("Ignoring list view parameter `{key}` of unsupported shape");
                continue;
            };

            match (key.as_str(), input) {
                ("sort", FilterInput::Value(value)) => result.sort = Some(value),
                ("order", FilterInput::Value(value)) => result.order = Some(value),
                ("search", FilterInput::Value(value)) => result.search = Some(value),
                ("page", FilterInput::Value(value)) => result.page = Some(value),
                ("per_page", FilterInput::Value(value)) => result.per_page = Some(value),
                (key, input) => match key.strip_prefix(FILTER_PARAM_PREFIX) {
                    Some(filter_key) if !filter_key.is_empty() => {
                        result.filters.insert(filter_key.to_owned(), input);
                    }
                    _ => tracing::debug!("Ignoring unknown list view parameter `{key}`"),
                },
            }
        }

        result
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn per_page(mut self, per_page: impl Into<String>) -> Self {
        self.per_page = Some(per_page.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, input: FilterInput) -> Self {
        self.filters.insert(key.into(), input);
        self
    }
}

/// Range bounds of one key accumulate (`[from]` then `[to]`), anything else
/// replaces the previous value
fn merge_param(params: &mut IndexMap<String, Value>, key: String, value: Value) {
    match params.get_mut(&key) {
        Some(Value::Object(bounds)) if value.is_object() => {
            if let Value::Object(value) = value {
                bounds.extend(value);
            }
        }
        _ => {
            params.insert(key, value);
        }
    }
}

/// `None` for shapes other than a plain value or `from`/`to` bounds
fn to_filter_input(value: Value) -> Option<FilterInput> {
    match value {
        Value::String(value) => Some(FilterInput::Value(value)),
        Value::Object(bounds) => {
            let (mut from, mut to) = (None, None);
            for (bound, value) in bounds {
                let Value::String(value) = value else {
                    return None;
                };
                match bound.as_str() {
                    "from" => from = Some(value),
                    "to" => to = Some(value),
                    _ => return None,
                }
            }
            Some(FilterInput::Range { from, to })
        }
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListViewResponseDTO {
    pub rows: Vec<ListRowDTO>,
    /// `None` when pagination is disabled
    pub pagination: Option<PaginationDTO>,
    pub columns: Vec<ColumnResponseDTO>,
    pub filters: Vec<FilterResponseDTO>,
    pub bulk_actions: Vec<BulkAction>,
    pub create_action: Option<CreateAction>,
    /// Ordering actually applied
    pub sorting: Option<SortingDTO>,
    pub search: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListRowDTO {
    /// column field -> rendered value, in column order
    pub values: IndexMap<String, Value>,
    /// column field -> resolved row actions, only for columns declaring any
    pub actions: IndexMap<String, Vec<RowActionDTO>>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowActionDTO {
    pub label: String,
    pub url: String,
    pub style: Option<String>,
    pub confirm: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PaginationDTO {
    /// one-based
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColumnResponseDTO {
    pub field: String,
    pub label: String,
    pub sortable: bool,
    pub searchable: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FilterResponseDTO {
    pub key: String,
    pub field: String,
    pub label: String,
    pub kind: FilterKind,
    pub options: Option<OptionMap>,
    /// Normalized input the filter was applied with
    pub value: Option<FilterInput>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SortingDTO {
    pub field: String,
    pub direction: SortDirection,
}
