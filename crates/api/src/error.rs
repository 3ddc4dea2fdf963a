use std::fmt;
use std::num::ParseIntError;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wishlist_db::DbError;

use crate::response::MessageResponse;

/// Which wishlist operation a storage failure belongs to.
///
/// Each operation renders its own fixed failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Get,
    Remove,
}

impl Operation {
    /// Message sent to the client when this operation fails in storage.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Add => "Could not add to wishlist",
            Operation::Get => "Could not get wishlist",
            Operation::Remove => "Could not remove from wishlist",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add_to_wishlist",
            Operation::Get => "get_wishlist",
            Operation::Remove => "remove_from_wishlist",
        };
        f.write_str(name)
    }
}

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{ "message": ... }` with a fixed status and
/// message, and is logged on the way out so the cause is never lost.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body was not a JSON object of the expected shape.
    #[error("request body could not be parsed")]
    RequestParse(#[from] JsonRejection),

    /// The item id path segment could not be extracted, e.g. it was not
    /// valid UTF-8 after percent-decoding.
    #[error("item id path segment could not be read")]
    InvalidPath(#[from] PathRejection),

    /// The item id path segment was empty.
    #[error("ID cannot be empty")]
    MissingId,

    /// The item id path segment was not an integer.
    #[error("invalid wishlist item id {raw:?}")]
    InvalidId {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// The store failed while serving `op`.
    #[error("{op} failed in storage")]
    Storage {
        op: Operation,
        #[source]
        source: DbError,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a store error for `op`. Intended for `map_err`.
    pub fn storage(op: Operation) -> impl FnOnce(DbError) -> Self {
        move |source| AppError::Storage { op, source }
    }

    /// The HTTP status and client-facing message for this error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::RequestParse(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Request Failed"),
            AppError::MissingId => (StatusCode::INTERNAL_SERVER_ERROR, "ID cannot be empty"),
            AppError::InvalidPath(_) | AppError::InvalidId { .. } => {
                (StatusCode::BAD_REQUEST, Operation::Remove.failure_message())
            }
            AppError::Storage { op, .. } => (StatusCode::BAD_REQUEST, op.failure_message()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::RequestParse(rejection) => {
                tracing::warn!(error = %rejection, "Rejected request body");
            }
            AppError::InvalidPath(rejection) => {
                tracing::warn!(error = %rejection, "Rejected item id path segment");
            }
            AppError::MissingId => {
                tracing::warn!("Remove request without an item id");
            }
            AppError::InvalidId { raw, source } => {
                tracing::warn!(id = %raw, error = %source, "Remove request with a non-integer id");
            }
            AppError::Storage { op, source } => {
                tracing::error!(%op, error = ?source, "Storage call failed");
            }
        }

        let (status, message) = self.status_and_message();
        (status, axum::Json(MessageResponse::message(message))).into_response()
    }
}
