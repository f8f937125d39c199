//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed
//! by the HTTP validation endpoint. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction.

use crate::server::data::key::KeyStore;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `KeyStore` shares its map and document through `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Key registry shared with the Discord bot.
    ///
    /// Both the validation endpoint and the admin commands mutate the same store, so
    /// a key revoked through Discord is rejected by the very next validation call.
    pub keys: KeyStore,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `keys` - Key registry loaded at startup
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(keys: KeyStore) -> Self {
        Self { keys }
    }
}
