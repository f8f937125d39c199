//! HTTP request handlers.
//!
//! Controllers extract and validate request data, call into the service layer and
//! convert the result into a response. Errors are returned as `AppError` and mapped
//! to status codes by its `IntoResponse` implementation.

pub mod license;

#[cfg(test)]
mod test;
