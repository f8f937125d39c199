use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationResponseDto;

/// Caller-facing failures of the license operations.
///
/// Every variant carries the exact message shown to the caller, both on the HTTP
/// validation endpoint and in the ephemeral replies of the admin commands. None of
/// them reveal anything about key contents.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LicenseError {
    /// Validation request without a key or hardware id.
    #[error("Missing key or HWID.")]
    BadRequest,

    /// Key string is not present in the store.
    #[error("Invalid key.")]
    NotFound,

    /// Key has a fixed expiry that lies in the past.
    #[error("Key expired.")]
    Expired,

    /// Key is bound to a different hardware id than the one supplied.
    #[error("HWID mismatch.")]
    HardwareMismatch,

    /// Unrecognized duration class passed to key generation.
    ///
    /// # Fields
    /// - The rejected value, kept for logging only
    #[error("Invalid type.")]
    InvalidArgument(String),

    /// Caller is not one of the configured operators.
    #[error("You are not authorized.")]
    Forbidden,
}

impl LicenseError {
    /// HTTP status used when this error reaches the validation endpoint.
    ///
    /// # Returns
    /// - 400 Bad Request - For `BadRequest` and `InvalidArgument`
    /// - 403 Forbidden - For `Expired`, `HardwareMismatch` and `Forbidden`
    /// - 404 Not Found - For `NotFound`
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest | Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Expired | Self::HardwareMismatch | Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

/// Converts license errors into `{ success: false, message }` responses.
impl IntoResponse for LicenseError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ValidationResponseDto::failure(self.to_string())),
        )
            .into_response()
    }
}
