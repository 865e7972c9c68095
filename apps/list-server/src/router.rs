#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::response::IntoResponse;
use axum::routing::get;
use list_view_core::config::core_config::AppConfig;
use list_view_core::service::list_view::ListViewService;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span};

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{misc, user};

pub(crate) struct InternalAppState {
    pub data_layer: DataLayer,
    pub list_view_service: ListViewService,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener
        .set_nonblocking(true)
        .expect("Failed to set TCP listener non-blocking");

    let state: AppState = Arc::new(InternalAppState {
        data_layer: DataLayer::build(db_conn),
        list_view_service: ListViewService::new(Arc::new(config.core.list_view)),
        config: Arc::new(config.app),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router(state).into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState) -> Router {
    let api = Router::new().route("/api/user/v1", get(user::controller::get_user_list));

    let technical_endpoints = Router::new().route("/health", get(misc::health_check));

    Router::new()
        .merge(api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    info_span!(
                        "http_request",
                        method = request.method().as_str(),
                        path = request.uri().path(),
                        service = "list-server",
                    )
                })
                .on_request(|request: &Request<_>, _span: &Span| {
                    tracing::debug!(
                        "SERVICE CALL START {} {}",
                        request.method(),
                        request.uri().path()
                    )
                })
                .on_failure(|_, _, _: &_| {}) // override default on_failure handler
                .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                    tracing::debug!("SERVICE CALL END {}", response.status())
                }),
        )
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
