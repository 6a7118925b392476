use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::views;

/// Failure talking to the durable key-value substrate.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("malformed stored value: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Rejection of an editor submission. The message is shown to the editor as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("read time must be a whole number of minutes")]
    InvalidReadTime,

    #[error("unknown entry type {0:?}")]
    UnknownKind(String),
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0} not found")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Storage(err) => {
                tracing::error!(error = %err, "storage failure while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::layout::create_error_page(
                        "500",
                        "Something went wrong while saving your changes.",
                    )
                    .into_string()),
                )
                    .into_response()
            }
            AppError::NotFound(what) => {
                tracing::debug!(%what, "not found");
                (
                    StatusCode::NOT_FOUND,
                    Html(views::layout::create_404_page().into_string()),
                )
                    .into_response()
            }
        }
    }
}
