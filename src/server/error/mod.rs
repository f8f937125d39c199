//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses and chat replies. The `AppError`
//! enum serves as the top-level error type that wraps domain-specific errors and
//! implements `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod internal;
pub mod license;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ValidationResponseDto,
    server::error::{config::ConfigError, internal::InternalError, license::LicenseError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `LicenseError` handles its own response mapping, everything else
/// is treated as an internal failure.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Caller-facing license error.
    ///
    /// Delegates to `LicenseError::into_response()` for status code mapping
    /// (400 Bad Request, 403 Forbidden, 404 Not Found).
    #[error(transparent)]
    LicenseErr(#[from] LicenseError),

    /// Internal consistency error.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Filesystem error while reading or writing a persisted document.
    ///
    /// Fatal during startup, 500 Internal Server Error afterwards.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Persisted document could not be serialized or parsed.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Only raised by the public address lookup, which logs and ignores it.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message suitable for showing to a chat user.
    ///
    /// License errors carry their own caller-facing message. Anything else is logged
    /// and replaced with a generic message so internal details never reach Discord.
    pub fn user_message(&self) -> String {
        match self {
            Self::LicenseErr(err) => err.to_string(),
            err => {
                tracing::error!("{}", err);
                "Something went wrong, please try again.".to_string()
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `LicenseErr`, delegated to `LicenseError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::LicenseErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ValidationResponseDto::failure("Internal server error")),
        )
            .into_response()
    }
}
