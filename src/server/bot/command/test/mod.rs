use chrono::{DateTime, TimeZone, Utc};
use test_utils::{builder::TestBuilder, context::TestContext, factory::key::KeyFactory};

use crate::server::{
    bot::{command::key::KeyCommand, state::BotState},
    data::{bot_config::BotConfigStore, key::KeyStore},
    error::{license::LicenseError, AppError},
    middleware::auth::Operators,
};

mod execute;

const OPERATOR: u64 = 100;
const STRANGER: u64 = 200;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

/// Builds bot state over the context's documents with a single operator.
async fn bot_state(test: &TestContext) -> BotState {
    BotState {
        keys: KeyStore::load(test.keys_path()).await.unwrap(),
        bot_config: BotConfigStore::load(test.bot_config_path()).await.unwrap(),
        operators: Operators::new([OPERATOR]),
        key_prefix: "Firebase".to_string(),
        guild_id: None,
    }
}

fn assert_license_err<T: std::fmt::Debug>(result: Result<T, AppError>, expected: LicenseError) {
    match result {
        Err(AppError::LicenseErr(err)) => assert_eq!(err, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
