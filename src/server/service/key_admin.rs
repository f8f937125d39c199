//! Key administration service.
//!
//! Operator-side operations over the key registry: generating new unbound keys,
//! inspecting a key's binding state and revoking keys. Authorization is checked by
//! the caller through `Operators` before any of these run.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::{
    data::key::KeyStore,
    error::{license::LicenseError, AppError},
    model::key::{DurationClass, KeyRecord, KeyStatus},
};

/// Service providing key generation, inspection and revocation.
pub struct KeyAdminService<'a> {
    keys: &'a KeyStore,
    prefix: &'a str,
}

impl<'a> KeyAdminService<'a> {
    /// Creates a new KeyAdminService instance.
    ///
    /// # Arguments
    /// - `keys` - Shared key registry
    /// - `prefix` - Product prefix placed at the start of every generated key
    ///
    /// # Returns
    /// - `KeyAdminService` - New service instance
    pub fn new(keys: &'a KeyStore, prefix: &'a str) -> Self {
        Self { keys, prefix }
    }

    /// Generates and stores a new unbound key.
    ///
    /// The key string is `<prefix>-<duration>-<SUFFIX>`, where the suffix is the first
    /// segment of a random v4 UUID in uppercase hex. Collisions with existing keys are
    /// not checked.
    ///
    /// # Arguments
    /// - `duration` - Requested duration class label (`day`, `week`, `month`, `year`
    ///   or `lifetime`)
    /// - `now` - Current time, the start of the key's validity
    ///
    /// # Returns
    /// - `Ok(String)` - The generated key string
    /// - `Err(LicenseError::InvalidArgument)` - Unknown duration class, store untouched
    /// - `Err(AppError::IoErr)` - Key could not be persisted
    pub async fn generate(&self, duration: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        let class: DurationClass = duration.parse()?;
        let key = self.key_string(class);

        self.keys
            .set(&key, KeyRecord::unbound(class.expiry_from(now)))
            .await?;

        tracing::info!("Generated {} key", class);
        tracing::debug!("Generated key {}", key);

        Ok(key)
    }

    /// Looks up the binding state and expiry of a key.
    ///
    /// # Returns
    /// - `Ok(KeyStatus)` - Key exists
    /// - `Err(LicenseError::NotFound)` - Unknown key
    pub async fn check(&self, key: &str) -> Result<KeyStatus, AppError> {
        let record = self.keys.get(key).await.ok_or(LicenseError::NotFound)?;

        Ok(KeyStatus::from_record(key, record))
    }

    /// Deletes a key permanently.
    ///
    /// # Returns
    /// - `Ok(())` - Key removed and registry saved
    /// - `Err(LicenseError::NotFound)` - Unknown key
    /// - `Err(AppError::IoErr)` - Removal could not be persisted, key kept
    pub async fn revoke(&self, key: &str) -> Result<(), AppError> {
        self.keys
            .delete(key)
            .await?
            .ok_or(LicenseError::NotFound)?;

        tracing::info!("Revoked key");
        tracing::debug!("Revoked key {}", key);

        Ok(())
    }

    fn key_string(&self, class: DurationClass) -> String {
        let (first_segment, _, _, _) = Uuid::new_v4().as_fields();

        format!("{}-{}-{:08X}", self.prefix, class, first_segment)
    }
}
