//! Key record factory for staging the key registry.
//!
//! Records are produced in the persisted layout:
//! `{ "hwid": string | null, "expiry": number | "lifetime" }`.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::factory::helpers::{next_id, DAY_MS};

/// Factory for creating key records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let (key, record) = KeyFactory::new()
///     .hwid("hw1")
///     .expires_at(Utc::now() - Duration::hours(1))
///     .build();
/// ```
pub struct KeyFactory {
    key: String,
    hwid: Option<String>,
    expiry: Value,
}

impl KeyFactory {
    /// Creates a new KeyFactory with default values.
    ///
    /// Defaults:
    /// - key: `"Test-day-{id:08X}"` where id is auto-incremented
    /// - hwid: unbound
    /// - expiry: one day from now
    pub fn new() -> Self {
        Self {
            key: format!("Test-day-{:08X}", next_id()),
            hwid: None,
            expiry: json!(Utc::now().timestamp_millis() + DAY_MS),
        }
    }

    /// Sets the key string.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Binds the record to a hardware id.
    pub fn hwid(mut self, hwid: impl Into<String>) -> Self {
        self.hwid = Some(hwid.into());
        self
    }

    /// Sets a fixed expiry instant.
    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expiry = json!(at.timestamp_millis());
        self
    }

    /// Marks the record as never expiring.
    pub fn lifetime(mut self) -> Self {
        self.expiry = json!("lifetime");
        self
    }

    /// Builds the `(key, record)` pair.
    ///
    /// # Returns
    /// - `(String, Value)` - Key string and its JSON record
    pub fn build(self) -> (String, Value) {
        (
            self.key,
            json!({
                "hwid": self.hwid,
                "expiry": self.expiry,
            }),
        )
    }
}

impl Default for KeyFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates an unbound key record expiring one day from now.
pub fn create_key() -> (String, Value) {
    KeyFactory::new().build()
}
