use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_KEYS_FILE: &str = "./keys.json";
const DEFAULT_CONFIG_FILE: &str = "./config.json";
const DEFAULT_SERVER_INFO_FILE: &str = "./server_info.txt";
const DEFAULT_KEY_PREFIX: &str = "Firebase";

pub struct Config {
    pub discord_token: String,
    pub client_id: u64,
    pub admin_user_ids: Vec<u64>,
    /// Guild for fast slash command registration; commands are global when unset.
    pub guild_id: Option<u64>,
    pub api_port: u16,

    pub keys_file: PathBuf,
    pub config_file: PathBuf,
    pub server_info_file: PathBuf,
    pub key_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let admin_user_ids = parse_id_list("ADMIN_USER_IDS", &required("ADMIN_USER_IDS")?)?;
        if admin_user_ids.is_empty() {
            return Err(ConfigError::MissingEnvVar("ADMIN_USER_IDS".to_string()).into());
        }

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            client_id: parse_var("CLIENT_ID", &required("CLIENT_ID")?)?,
            admin_user_ids,
            guild_id: optional("GUILD_ID")
                .map(|value| parse_var("GUILD_ID", &value))
                .transpose()?,
            api_port: parse_var("API_PORT", &required("API_PORT")?)?,
            keys_file: optional("KEYS_FILE")
                .unwrap_or_else(|| DEFAULT_KEYS_FILE.to_string())
                .into(),
            config_file: optional("CONFIG_FILE")
                .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string())
                .into(),
            server_info_file: optional("SERVER_INFO_FILE")
                .unwrap_or_else(|| DEFAULT_SERVER_INFO_FILE.to_string())
                .into(),
            key_prefix: optional("KEY_PREFIX").unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
        })
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}': {}", value, e),
        })
}

/// Parses a comma separated list of ids, skipping empty entries.
fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| parse_var(name, id))
        .collect()
}
