use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::config::core_config::ListViewConfig;
use crate::model::common::SortDirection;
use crate::model::list_filter::ListFilterCondition;
use crate::model::record::RecordFilterValue;
use crate::repository::record_repository::RecordRepository;

pub mod action;
pub mod column;
pub mod dto;
pub mod filter;
pub mod service;

pub(crate) mod mapper;
pub(crate) mod query;

use action::{BulkAction, CreateAction};
use column::Column;
use dto::FilterInput;
use filter::{Filter, FilterKind, FilterOptions};

/// Hands out list views seeded from the configured defaults
#[derive(Clone)]
pub struct ListViewService {
    config: Arc<ListViewConfig>,
}

impl ListViewService {
    pub fn new(config: Arc<ListViewConfig>) -> Self {
        Self { config }
    }

    /// New view over `source`, which acts as its base scope
    pub fn list_view(&self, source: Arc<dyn RecordRepository>) -> ListView {
        ListView::with_config(source, &self.config)
    }
}

/// Declared shape of a list view; consumed by [`ListView::resolve`]
pub struct ListView {
    pub(crate) source: Arc<dyn RecordRepository>,
    pub(crate) scope: Option<ListFilterCondition<RecordFilterValue>>,
    pub(crate) columns: IndexMap<String, Column>,
    pub(crate) filters: IndexMap<String, Filter>,
    pub(crate) per_page: u32,
    pub(crate) max_page_size: u32,
    pub(crate) default_sort: (String, SortDirection),
    pub(crate) search_enabled: bool,
    pub(crate) filters_enabled: bool,
    pub(crate) pagination_enabled: bool,
    pub(crate) bulk_actions: Vec<BulkAction>,
    pub(crate) create_action: Option<CreateAction>,
}

impl ListView {
    pub fn new(source: Arc<dyn RecordRepository>) -> Self {
        Self::with_config(source, &ListViewConfig::default())
    }

    pub fn with_config(source: Arc<dyn RecordRepository>, config: &ListViewConfig) -> Self {
        Self {
            source,
            scope: None,
            columns: IndexMap::new(),
            filters: IndexMap::new(),
            per_page: config.default_page_size.max(1),
            max_page_size: config.max_page_size.max(1),
            default_sort: (
                config.default_sort_field.to_owned(),
                config.default_sort_direction,
            ),
            search_enabled: config.search,
            filters_enabled: config.filters,
            pagination_enabled: config.pagination,
            bulk_actions: vec![],
            create_action: None,
        }
    }

    /// Declares a column; re-declaring a field replaces the previous column
    /// while keeping its display position
    pub fn column(&mut self, field: impl Into<String>, label: Option<&str>) -> &mut Column {
        let field = field.into();
        let column = Column::new(field.to_owned(), label.map(str::to_owned));
        match self.columns.entry(field) {
            Entry::Occupied(mut entry) => {
                entry.insert(column);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(column),
        }
    }

    /// Sortable `id` column
    pub fn id(&mut self, label: Option<&str>) -> &mut Column {
        self.column("id", label).sortable()
    }

    /// Declares a filter read from `filter_<key>`; re-declaring a key
    /// replaces the previous filter
    pub fn add_filter(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl Into<FilterOptions>,
        kind: FilterKind,
    ) -> &mut Filter {
        let key = key.into();
        let filter = Filter::new(key.to_owned(), label.into(), options.into(), kind);
        match self.filters.entry(key) {
            Entry::Occupied(mut entry) => {
                entry.insert(filter);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(filter),
        }
    }

    pub fn add_text_filter(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Filter {
        self.add_filter(key, label, FilterOptions::None, FilterKind::Text)
    }

    pub fn add_select_filter(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        options: impl Into<FilterOptions>,
    ) -> &mut Filter {
        self.add_filter(key, label, options, FilterKind::Select)
    }

    pub fn add_date_range_filter(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Filter {
        self.add_filter(key, label, FilterOptions::None, FilterKind::DateRange)
    }

    pub fn add_numeric_range_filter(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
    ) -> &mut Filter {
        self.add_filter(key, label, FilterOptions::None, FilterKind::NumericRange)
    }

    pub fn add_custom_filter<F>(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        predicate: F,
    ) -> &mut Filter
    where
        F: Fn(&FilterInput) -> Option<ListFilterCondition<RecordFilterValue>>
            + Send
            + Sync
            + 'static,
    {
        self.add_filter(key, label, FilterOptions::None, FilterKind::Custom)
            .predicate(predicate)
    }

    /// Constraint every resolution starts from, combined with search and
    /// filters conjunctively
    pub fn scope(&mut self, condition: ListFilterCondition<RecordFilterValue>) -> &mut Self {
        self.scope = Some(condition);
        self
    }

    pub fn per_page(&mut self, per_page: u32) -> &mut Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn default_sort(&mut self, field: impl Into<String>, direction: SortDirection) -> &mut Self {
        self.default_sort = (field.into(), direction);
        self
    }

    pub fn search(&mut self, enabled: bool) -> &mut Self {
        self.search_enabled = enabled;
        self
    }

    pub fn filters(&mut self, enabled: bool) -> &mut Self {
        self.filters_enabled = enabled;
        self
    }

    pub fn pagination(&mut self, enabled: bool) -> &mut Self {
        self.pagination_enabled = enabled;
        self
    }

    pub fn bulk_action(&mut self, key: impl Into<String>, label: impl Into<String>) -> &mut BulkAction {
        self.bulk_actions.push(BulkAction {
            key: key.into(),
            label: label.into(),
            style: None,
            confirm: false,
        });
        let last = self.bulk_actions.len() - 1;
        &mut self.bulk_actions[last]
    }

    pub fn create_action(&mut self, url: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.create_action = Some(CreateAction {
            url: url.into(),
            label: label.into(),
        });
        self
    }
}
