//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! license keys, support tickets and the bot configuration singleton. Records are
//! converted to and from their persisted JSON layout at the data boundary and rendered
//! into replies or DTOs at the controller and bot boundaries.

pub mod bot_config;
pub mod key;
pub mod ticket;
