//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! transport layers (HTTP controller and Discord bot) and the data layer. Services are
//! responsible for:
//!
//! - **Business Logic**: The key lifecycle (generate, bind on first use, validate,
//!   expire, revoke) and ticket numbering
//! - **Orchestration**: Coordinating store mutations and external lookups
//! - **Domain Models**: Working with domain models rather than DTOs or chat types
//!
//! Every operation whose outcome depends on the clock takes `now` explicitly; only the
//! transport layers read the current time.

pub mod key_admin;
pub mod license;
pub mod public_address;
pub mod ticket;
pub mod welcome;

#[cfg(test)]
mod test;
