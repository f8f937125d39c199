//! Persistence layer for the key registry and the bot configuration.
//!
//! Each store owns its in-memory state behind a `tokio::sync::RwLock` and the JSON
//! document it is loaded from. Documents are read once at startup and rewritten in
//! full after every mutation, before the mutation is reported as successful. A failed
//! write rolls the in-memory state back so memory never runs ahead of the disk.

pub mod bot_config;
pub mod document;
pub mod key;

#[cfg(test)]
mod test;
