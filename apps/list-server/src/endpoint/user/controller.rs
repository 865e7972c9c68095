use axum::extract::State;

use super::view::user_list_view;
use crate::dto::list_view::ListViewResponseRestDTO;
use crate::dto::response::OkOrErrorResponse;
use crate::extractor::ListViewQuery;
use crate::router::AppState;

/// `GET /api/user/v1?search=..&sort=..&order=..&page=..&filter_<key>=..`
pub(crate) async fn get_user_list(
    state: State<AppState>,
    ListViewQuery(params): ListViewQuery,
) -> OkOrErrorResponse<ListViewResponseRestDTO> {
    let result = user_list_view(&state).resolve(params).await;
    OkOrErrorResponse::from_result(result, state, "getting user list")
}
