//! Response envelope shared by every API endpoint

use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope wrapping every response body.
///
/// `message` and `data` are omitted from the JSON when absent, so failure
/// bodies carry only `succeeded`, `statusCode` and `message`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub succeeded: bool,
    /// HTTP status code associated with the response
    pub status_code: u16,
    /// Additional information about the outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload of the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload
    pub fn success(data: T, status: StatusCode, message: Option<String>) -> Self {
        Self {
            succeeded: true,
            status_code: status.as_u16(),
            message,
            data: Some(data),
        }
    }

    /// Successful response with a message only (update/delete acknowledgements)
    pub fn message_only(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            status_code: status.as_u16(),
            message: Some(message.into()),
            data: None,
        }
    }

    /// Failed response with no payload
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            status_code: status.as_u16(),
            message: Some(message.into()),
            data: None,
        }
    }
}
