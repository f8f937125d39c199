use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::api::{ValidateKeyDto, ValidationResponseDto},
    server::{
        controller::license::{self, validate_key},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(license::validate_key),
    components(schemas(ValidateKeyDto, ValidationResponseDto)),
    tags((name = "license", description = "License key validation"))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(validate_key))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
}
