//! Licensebot Test Utils
//!
//! Provides shared testing utilities for the licensebot service. This crate offers a
//! builder pattern for staging the persisted JSON documents (key registry and bot
//! configuration) inside an isolated temporary directory, so tests can exercise the
//! real load/save paths without touching the working directory.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for seeding documents before a test runs
//! - **TestContext**: Temporary directory plus the paths of every staged document
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::key::KeyFactory};
//!
//! #[tokio::test]
//! async fn test_key_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_key(KeyFactory::new().hwid("hw1").build())
//!         .build()?;
//!
//!     let store = KeyStore::load(test.keys_path()).await?;
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
