//! Server-side license API, Discord bot and shared business logic.
//!
//! This module contains the complete backend: the HTTP validation endpoint, the
//! Discord bot, the services both of them call and the JSON document stores behind
//! those services. Axum serves the endpoint and Serenity drives the bot.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Bot Layer** (`bot/`) - Discord event handlers, slash commands and message builders
//! - **Service Layer** (`service/`) - License, key administration, ticket and welcome logic
//! - **Data Layer** (`data/`) - In-memory stores persisted to JSON documents
//! - **Model Layer** (`model/`) - Key records, expiry, bot configuration and tickets
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Operator authorization
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared HTTP handler state
//! - **Startup** (`startup`) - Tracing, HTTP client, store loading and listener binding
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A validation request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes it to the controller
//! 2. **Controller** extracts the body and calls the license service
//! 3. **Service** checks expiry and binding, mutating the key store when binding
//! 4. **Data** persists the registry before the service returns
//! 5. **Controller** converts the outcome or error into the JSON response
//!
//! Slash commands take the same path through the service and data layers, with the
//! bot layer in place of the controller.

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
