use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /validate`.
///
/// Both fields are optional at the serde level so a body with a missing field is
/// reported as a `BadRequest` by the service instead of being rejected by the
/// extractor with a different status code.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ValidateKeyDto {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub hwid: Option<String>,
}

/// Response body for `POST /validate`, used for successes and failures alike.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ValidationResponseDto {
    pub success: bool,
    pub message: String,
}

impl ValidationResponseDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
