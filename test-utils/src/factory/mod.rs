//! Factory methods for creating test documents.
//!
//! This module provides factories for the raw JSON records that make up the persisted
//! documents, reducing boilerplate in tests. Factories produce values in the exact
//! on-disk layout, so they double as checks that the service still reads what it
//! previously wrote.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let unbound = factory::key::create_key();
//! let bound = factory::key::KeyFactory::new()
//!     .key("Firebase-week-0000BEEF")
//!     .hwid("hw1")
//!     .build();
//! ```

pub mod bot_config;
pub mod helpers;
pub mod key;
