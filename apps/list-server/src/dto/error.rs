use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use list_view_core::service::error::ServiceError;
use one_dto_mapper::From;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize, From)]
#[from("list_view_core::service::error::ErrorCode")]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0054,
    BR_0055,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponseRestDTO {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Cause>,
}

impl ErrorResponseRestDTO {
    pub fn hide_cause(mut self, hide: bool) -> ErrorResponseRestDTO {
        if hide {
            self.cause = None;
        }

        self
    }
}

#[derive(Debug, Serialize)]
pub struct Cause {
    pub message: String,
}

impl Cause {
    pub fn with_message_from_error(error: &impl std::error::Error) -> Cause {
        Cause {
            message: error.to_string(),
        }
    }
}

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        let code = error.error_code();

        Self {
            code: code.into(),
            message: code.message().to_string(),
            cause: Some(Cause::with_message_from_error(error)),
        }
    }
}

impl IntoResponse for ErrorResponseRestDTO {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}
