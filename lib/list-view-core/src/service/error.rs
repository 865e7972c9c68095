use thiserror::Error;

use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Formatting column `{field}` failed: {source}")]
    Formatter {
        field: String,
        source: anyhow::Error,
    },

    #[error(transparent)]
    Repository(#[from] DataLayerError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// Unspecified error
    BR_0000,
    /// Data source unavailable
    BR_0054,
    /// Column formatter failed
    BR_0055,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            Self::BR_0000 => "Unspecified error",
            Self::BR_0054 => "Data source unavailable",
            Self::BR_0055 => "Column formatter failed",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Repository(error) => error.error_code(),
            Self::Formatter { .. } => ErrorCode::BR_0055,
        }
    }
}
