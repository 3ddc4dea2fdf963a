//! Shared response envelope for API handlers.
//!
//! Every `/api` response is a JSON object with a `message`; list responses
//! also carry `data`.

use serde::Serialize;

/// `{ "message": ..., "data": ... }` response envelope.
///
/// `data` is omitted from the JSON when `None`.
///
/// # Example
///
/// ```ignore
/// Ok(Json(MessageResponse::with_data("Wishlist fetched successfully", items)))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse<T = ()> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl MessageResponse {
    /// A message-only response.
    pub fn message(message: &'static str) -> Self {
        Self {
            message,
            data: None,
        }
    }
}

impl<T> MessageResponse<T> {
    pub fn with_data(message: &'static str, data: T) -> Self {
        Self {
            message,
            data: Some(data),
        }
    }
}
