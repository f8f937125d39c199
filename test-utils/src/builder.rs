use serde_json::{Map, Value};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with pre-seeded persistence documents.
///
/// Provides a fluent interface for staging the key registry and bot configuration
/// documents in a fresh temporary directory. Documents that are never seeded are not
/// written at all, which lets tests cover the "file does not exist yet" startup path.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory::key::KeyFactory};
///
/// let test = TestBuilder::new()
///     .with_key(KeyFactory::new().lifetime().build())
///     .with_bot_config(BotConfigFactory::new().ticket_counter(7).build())
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Key records to write into the key registry, in insertion order.
    ///
    /// `None` until the first key is added so an empty builder leaves the registry
    /// file absent.
    keys: Option<Map<String, Value>>,

    /// Bot configuration document, if one should be staged.
    bot_config: Option<Value>,

    /// Verbatim content for the key registry, overriding `keys`.
    ///
    /// Used to stage corrupt documents for startup failure tests.
    raw_keys: Option<String>,

    /// Verbatim content for the bot configuration, overriding `bot_config`.
    raw_bot_config: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with nothing staged.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with no documents configured
    pub fn new() -> Self {
        Self {
            keys: None,
            bot_config: None,
            raw_keys: None,
            raw_bot_config: None,
        }
    }

    /// Adds a key record to the staged key registry.
    ///
    /// Accepts the `(key, record)` pair produced by `KeyFactory::build()`. Adding a
    /// key with the same string twice keeps the last record.
    ///
    /// # Arguments
    /// - `entry` - Key string and its JSON record
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_key(mut self, entry: (String, Value)) -> Self {
        let (key, record) = entry;
        self.keys.get_or_insert_with(Map::new).insert(key, record);
        self
    }

    /// Stages an empty key registry document (`{}`).
    pub fn with_empty_keys(mut self) -> Self {
        self.keys.get_or_insert_with(Map::new);
        self
    }

    /// Stages the bot configuration document.
    ///
    /// # Arguments
    /// - `config` - JSON document, typically from `BotConfigFactory::build()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_bot_config(mut self, config: Value) -> Self {
        self.bot_config = Some(config);
        self
    }

    /// Writes the key registry verbatim instead of serializing staged keys.
    pub fn with_raw_keys(mut self, content: impl Into<String>) -> Self {
        self.raw_keys = Some(content.into());
        self
    }

    /// Writes the bot configuration verbatim instead of serializing it.
    pub fn with_raw_bot_config(mut self, content: impl Into<String>) -> Self {
        self.raw_bot_config = Some(content.into());
        self
    }

    /// Builds the test context and writes every staged document to disk.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Temporary directory with staged documents in place
    /// - `Err(TestError::Io)` - Failed to create the directory or write a document
    /// - `Err(TestError::Json)` - Failed to serialize a staged document
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        let keys = match (self.raw_keys, self.keys) {
            (Some(raw), _) => Some(raw),
            (None, Some(keys)) => Some(serde_json::to_string_pretty(&Value::Object(keys))?),
            (None, None) => None,
        };
        if let Some(content) = keys {
            context.write(context.keys_path(), &content)?;
        }

        let bot_config = match (self.raw_bot_config, self.bot_config) {
            (Some(raw), _) => Some(raw),
            (None, Some(config)) => Some(serde_json::to_string_pretty(&config)?),
            (None, None) => None,
        };
        if let Some(content) = bot_config {
            context.write(context.bot_config_path(), &content)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
