use chrono::{DateTime, Utc};

use crate::server::{
    bot::{
        command::{CHECKKEY, GENKEY, REVOKEKEY},
        state::BotState,
    },
    error::AppError,
    service::key_admin::KeyAdminService,
};

/// A parsed key administration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCommand {
    Generate { duration: String },
    Check { key: String },
    Revoke { key: String },
}

impl KeyCommand {
    /// Builds a command from a slash command name and its single string argument.
    ///
    /// # Returns
    /// - `Some(KeyCommand)` - Known command with its argument
    /// - `None` - Unknown command name or missing argument
    pub fn parse(name: &str, argument: Option<&str>) -> Option<Self> {
        let argument = argument?.trim().to_string();

        match name {
            GENKEY => Some(Self::Generate { duration: argument }),
            CHECKKEY => Some(Self::Check { key: argument }),
            REVOKEKEY => Some(Self::Revoke { key: argument }),
            _ => None,
        }
    }

    /// Runs the command on behalf of `caller` and renders the reply text.
    ///
    /// Authorization is checked before anything else, so unauthorized callers learn
    /// nothing about the keys they name.
    ///
    /// # Arguments
    /// - `state` - Bot state holding the key store and operator list
    /// - `caller` - Discord user id of the invoking user
    /// - `now` - Current time, used as the start of generated keys
    ///
    /// # Returns
    /// - `Ok(String)` - Reply to send privately to the caller
    /// - `Err(LicenseError::Forbidden)` - Caller is not an operator
    /// - `Err(LicenseError::InvalidArgument)` - Unknown duration class
    /// - `Err(LicenseError::NotFound)` - Unknown key for check or revoke
    /// - `Err(AppError::IoErr)` - Registry could not be persisted
    pub async fn execute(
        &self,
        state: &BotState,
        caller: u64,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        state.operators.require(caller)?;

        let service = KeyAdminService::new(&state.keys, &state.key_prefix);

        match self {
            Self::Generate { duration } => {
                let key = service.generate(duration, now).await?;

                Ok(format!("✅ Key generated: `{}`", key))
            }
            Self::Check { key } => {
                let status = service.check(key).await?;
                let binding = match &status.hwid {
                    Some(hwid) => format!("HWID Locked: `{}`", hwid),
                    None => "Not bound".to_string(),
                };

                Ok(format!(
                    "🔑 Key: `{}`\nStatus: {}\nExpires: {}",
                    status.key, binding, status.expiry
                ))
            }
            Self::Revoke { key } => {
                service.revoke(key).await?;

                Ok(format!("❌ Key revoked: `{}`", key))
            }
        }
    }
}
