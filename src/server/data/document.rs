use serde::{de::DeserializeOwned, Serialize};
use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use crate::server::error::AppError;

/// A JSON document on disk holding a single value of type `T`.
///
/// Writes are full overwrites with no temporary file or backup; a crash mid-write can
/// leave a truncated document behind, which the next startup reports as a parse error.
pub struct JsonDocument<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the document.
    ///
    /// # Returns
    /// - `Ok(T)` - Parsed document, or `T::default()` when the file does not exist
    /// - `Err(AppError::IoErr)` - File exists but could not be read
    /// - `Err(AppError::JsonErr)` - File content is not a valid document
    pub async fn load(&self) -> Result<T, AppError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "{} not found, starting with defaults",
                    self.path.display()
                );
                Ok(T::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Serializes `value` with two-space indentation and overwrites the document.
    pub async fn save(&self, value: &T) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(value)?;
        tokio::fs::write(&self.path, content).await?;

        Ok(())
    }
}
