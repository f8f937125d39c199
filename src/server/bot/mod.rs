//! Discord bot front end for key administration, support tickets and welcomes.
//!
//! This module provides the chat-facing half of the service. Operators manage keys
//! through slash commands, members open support tickets through buttons, and new
//! members are greeted in a designated channel. All state lives in the same stores
//! the HTTP validation endpoint uses.
//!
//! The bot is initialized during startup and runs on the main task after the HTTP
//! server has been spawned.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild and channel information
//! - `GUILD_MEMBERS` - Receive member join events (privileged intent)
//! - `GUILD_MESSAGES` - Receive messages for the text triggers
//! - `MESSAGE_CONTENT` - Read the text of those messages (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` are privileged intents and must be
//! explicitly enabled in the Discord Developer Portal for the bot application.

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
pub mod state;
pub mod ticket;
