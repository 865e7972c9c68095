use super::error::DataLayerError;
use crate::model::record::{GetRecordList, RecordListQuery};

/// Record source a list view is bound to.
///
/// The implementation carries the base scope (table, pre-applied
/// constraints); the query only refines it.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait RecordRepository: Send + Sync {
    /// Fetches one page (or everything, without pagination) together with
    /// the total count of records matching the query's filtering
    async fn get_record_list(&self, query: RecordListQuery)
    -> Result<GetRecordList, DataLayerError>;
}
