use indexmap::IndexMap;
use list_view_core::service::list_view::dto::{FilterInput, RowActionDTO};
use one_dto_mapper::convert_inner;

use super::list_view::{FilterInputRestDTO, RowActionRestDTO};

pub(crate) fn row_actions_to_rest(
    actions: IndexMap<String, Vec<RowActionDTO>>,
) -> IndexMap<String, Vec<RowActionRestDTO>> {
    actions
        .into_iter()
        .map(|(field, actions)| (field, convert_inner(actions)))
        .collect()
}

impl From<FilterInput> for FilterInputRestDTO {
    fn from(value: FilterInput) -> Self {
        match value {
            FilterInput::Value(value) => Self::Value(value),
            FilterInput::Range { from, to } => Self::Range { from, to },
        }
    }
}
