use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

const KEYS_FILE_NAME: &str = "keys.json";
const BOT_CONFIG_FILE_NAME: &str = "config.json";
const SERVER_INFO_FILE_NAME: &str = "server_info.txt";

/// Test context owning an isolated temporary directory.
///
/// Every persistence document used by a test lives inside `dir`. The directory and
/// everything in it is removed when the context is dropped, so keep the context alive
/// for as long as the stores under test are in use.
pub struct TestContext {
    /// Temporary directory backing this context.
    pub dir: TempDir,
}

impl TestContext {
    /// Creates a new context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fresh context
    /// - `Err(TestError::Io)` - Failed to create the temporary directory
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// Path of the key registry document.
    pub fn keys_path(&self) -> PathBuf {
        self.dir.path().join(KEYS_FILE_NAME)
    }

    /// Path of the bot configuration document.
    pub fn bot_config_path(&self) -> PathBuf {
        self.dir.path().join(BOT_CONFIG_FILE_NAME)
    }

    /// Path of the plain-text server info file.
    pub fn server_info_path(&self) -> PathBuf {
        self.dir.path().join(SERVER_INFO_FILE_NAME)
    }

    /// Reads a document back as parsed JSON.
    ///
    /// Used by tests to assert on what was actually persisted rather than on
    /// in-memory state.
    ///
    /// # Arguments
    /// - `path` - Document to read, usually one of the `*_path()` values
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed document
    /// - `Err(TestError)` - File missing or not valid JSON
    pub fn read_json(&self, path: impl AsRef<Path>) -> Result<serde_json::Value, TestError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub(crate) fn write(&self, path: impl AsRef<Path>, content: &str) -> Result<(), TestError> {
        std::fs::write(path, content)?;
        Ok(())
    }
}
