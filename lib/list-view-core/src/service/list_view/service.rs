use super::ListView;
use super::dto::{ColumnResponseDTO, ListViewParams, ListViewResponseDTO};
use super::mapper::{filter_to_response, pagination_to_response, record_to_row};
use super::query::ResolvedQuery;
use crate::service::error::ServiceError;

impl ListView {
    /// Builds the query from `params`, fetches the records from the view's
    /// source and formats them into the display model.
    ///
    /// Invalid or unknown parameters never fail the resolution, they fall
    /// back to defaults. Errors come only from the record source or from a
    /// fallible column formatter.
    ///
    /// # Arguments
    ///
    /// * `params` - raw request parameters
    pub async fn resolve(
        self,
        params: ListViewParams,
    ) -> Result<ListViewResponseDTO, ServiceError> {
        let ResolvedQuery {
            query,
            sorting,
            search,
            mut active_filters,
        } = self.build_query(&params);

        tracing::debug!(
            "Resolving list view: sorting {:?}, pagination {:?}, filtering {:?}",
            query.sorting,
            query.pagination,
            query.filtering
        );

        let pagination = query.pagination;
        let result = self.source.get_record_list(query).await?;

        let rows = result
            .values
            .iter()
            .map(|record| record_to_row(self.columns.values(), record))
            .collect::<Result<Vec<_>, _>>()?;

        let filters = if self.filters_enabled {
            self.filters
                .values()
                .map(|filter| filter_to_response(filter, active_filters.shift_remove(&filter.key)))
                .collect()
        } else {
            vec![]
        };

        Ok(ListViewResponseDTO {
            rows,
            pagination: pagination.map(|pagination| {
                pagination_to_response(&pagination, result.total_items, result.total_pages)
            }),
            columns: self.columns.values().map(ColumnResponseDTO::from).collect(),
            filters,
            bulk_actions: self.bulk_actions,
            create_action: self.create_action,
            sorting,
            search,
        })
    }
}
