//! Wire-level DTOs exchanged with external clients.

pub mod api;
