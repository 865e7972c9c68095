use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use list_view_core::service::list_view::dto::ListViewParams;

/// List view parameters read from the query string.
///
/// Never rejects: a missing or malformed query string resolves the view with
/// default parameters.
pub struct ListViewQuery(pub ListViewParams);

impl<S> FromRequestParts<S> for ListViewQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        Ok(Self(ListViewParams::from_query_str(query)))
    }
}
