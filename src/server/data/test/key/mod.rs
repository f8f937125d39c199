use crate::server::{
    data::key::KeyStore,
    error::AppError,
    model::key::{Expiry, KeyRecord},
};
use chrono::{TimeZone, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::key::{create_key, KeyFactory},
};

mod delete;
mod load;
mod set;
mod update;
