use thiserror::Error;

/// Errors that can occur while staging a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write a staged document.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to serialize a staged document.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
