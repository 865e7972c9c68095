pub mod common;
pub mod list_filter;
pub mod list_query;
pub mod record;
