use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    #[strum(serialize = "asc")]
    Ascending,
    #[serde(rename = "DESC")]
    #[strum(serialize = "desc")]
    Descending,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GetListResponse<ResponseItem> {
    pub values: Vec<ResponseItem>,
    pub total_pages: u64,
    pub total_items: u64,
}
