//! License validation service.
//!
//! Implements the client-facing half of the key lifecycle: a key is bound to the
//! first hardware id that validates it and accepted only for that hardware id until
//! it expires or is revoked.

use chrono::{DateTime, Utc};

use crate::server::{
    data::key::KeyStore,
    error::{license::LicenseError, AppError},
    model::key::ValidationOutcome,
};

/// Service validating keys presented by client applications.
pub struct LicenseService<'a> {
    keys: &'a KeyStore,
}

impl<'a> LicenseService<'a> {
    /// Creates a new LicenseService instance.
    ///
    /// # Arguments
    /// - `keys` - Shared key registry
    ///
    /// # Returns
    /// - `LicenseService` - New service instance
    pub fn new(keys: &'a KeyStore) -> Self {
        Self { keys }
    }

    /// Validates a key for a hardware id, binding it on first use.
    ///
    /// Checks run in a fixed order: presence of both inputs, existence of the key,
    /// expiry, then binding. The lookup, the binding and the save happen under a
    /// single store write lock, so two first-time validations racing for the same key
    /// cannot both bind it.
    ///
    /// # Arguments
    /// - `key` - Key string presented by the client
    /// - `hwid` - Hardware id presented by the client
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(ValidationOutcome::BoundNow)` - Key was unbound and is now bound to `hwid`
    /// - `Ok(ValidationOutcome::AlreadyValid)` - Key already bound to `hwid`
    /// - `Err(LicenseError::BadRequest)` - `key` or `hwid` empty
    /// - `Err(LicenseError::NotFound)` - Unknown key
    /// - `Err(LicenseError::Expired)` - Fixed expiry lies in the past
    /// - `Err(LicenseError::HardwareMismatch)` - Key bound to another hardware id
    /// - `Err(AppError::IoErr)` - Binding could not be persisted
    pub async fn validate(
        &self,
        key: &str,
        hwid: &str,
        now: DateTime<Utc>,
    ) -> Result<ValidationOutcome, AppError> {
        if key.is_empty() || hwid.is_empty() {
            return Err(LicenseError::BadRequest.into());
        }

        let outcome = self
            .keys
            .update(key, |record| {
                let Some(record) = record else {
                    return Err(LicenseError::NotFound.into());
                };

                if record.expiry.has_passed(now) {
                    return Err(LicenseError::Expired.into());
                }

                match &record.hwid {
                    None => {
                        record.hwid = Some(hwid.to_string());
                        Ok(ValidationOutcome::BoundNow)
                    }
                    Some(bound) if bound == hwid => Ok(ValidationOutcome::AlreadyValid),
                    Some(_) => Err(LicenseError::HardwareMismatch.into()),
                }
            })
            .await;

        match &outcome {
            Ok(ValidationOutcome::BoundNow) => {
                tracing::info!("Key bound to hardware id on first validation");
                tracing::debug!("Bound key {} to hwid {}", key, hwid);
            }
            Ok(ValidationOutcome::AlreadyValid) => tracing::debug!("Key {} validated", key),
            Err(AppError::LicenseErr(LicenseError::HardwareMismatch)) => {
                tracing::warn!("Rejected validation: hardware id mismatch");
                tracing::debug!("Key {} presented with hwid {}", key, hwid);
            }
            Err(AppError::LicenseErr(err)) => tracing::debug!("Rejected key {}: {}", key, err),
            Err(_) => {}
        }

        outcome
    }
}
