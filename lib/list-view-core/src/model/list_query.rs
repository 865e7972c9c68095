use super::common::SortDirection;
use super::list_filter::{ListFilterCondition, ListFilterValue};

#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery<SortableColumn, FV: ListFilterValue> {
    /// `None` fetches the complete result set
    pub pagination: Option<ListPagination>,
    pub sorting: Option<ListSorting<SortableColumn>>,
    pub filtering: Option<ListFilterCondition<FV>>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListPagination {
    /// zero-based
    pub page: u32,
    pub page_size: u32,
}

impl ListPagination {
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListSorting<SortableColumn> {
    pub column: SortableColumn,
    pub direction: Option<SortDirection>,
}

impl<SortableColumn, FV: ListFilterValue> Default for ListQuery<SortableColumn, FV> {
    fn default() -> Self {
        Self {
            pagination: None,
            sorting: None,
            filtering: None,
        }
    }
}
