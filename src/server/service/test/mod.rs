use crate::server::{
    data::{bot_config::BotConfigStore, key::KeyStore},
    error::{license::LicenseError, AppError},
    model::key::{Expiry, KeyRecord, ValidationOutcome},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use test_utils::{builder::TestBuilder, context::TestContext, factory::key::KeyFactory};


const PREFIX: &str = "Firebase";

/// Fixed reference time used as "T0" across service tests.
fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// Loads a key store backed by the context's registry document.
async fn key_store(test: &TestContext) -> KeyStore {
    KeyStore::load(test.keys_path()).await.unwrap()
}

/// Asserts that a result is the given license error.
fn assert_license_err<T: std::fmt::Debug>(result: Result<T, AppError>, expected: LicenseError) {
    match result {
        Err(AppError::LicenseErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
