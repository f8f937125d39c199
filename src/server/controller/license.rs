use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::api::{ValidateKeyDto, ValidationResponseDto},
    server::{
        error::{license::LicenseError, AppError},
        service::license::LicenseService,
        state::AppState,
    },
};

pub static LICENSE_TAG: &str = "license";

/// Validates a key for a hardware id, binding it on first use.
///
/// Bodies that are not valid JSON objects are treated the same as bodies missing a
/// field, so clients only ever see the documented status codes.
#[utoipa::path(
    post,
    path = "/validate",
    tag = LICENSE_TAG,
    request_body = ValidateKeyDto,
    responses(
        (status = 200, description = "Key valid or bound to this hardware id", body = ValidationResponseDto),
        (status = 400, description = "Missing key or hardware id", body = ValidationResponseDto),
        (status = 403, description = "Key expired or bound to another hardware id", body = ValidationResponseDto),
        (status = 404, description = "Unknown key", body = ValidationResponseDto),
        (status = 500, description = "Internal server error", body = ValidationResponseDto)
    ),
)]
pub async fn validate_key(
    State(state): State<AppState>,
    payload: Result<Json<ValidateKeyDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected validation body: {}", rejection);
        LicenseError::BadRequest
    })?;

    let outcome = LicenseService::new(&state.keys)
        .validate(
            payload.key.as_deref().unwrap_or_default(),
            payload.hwid.as_deref().unwrap_or_default(),
            Utc::now(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ValidationResponseDto::success(outcome.message())),
    ))
}
