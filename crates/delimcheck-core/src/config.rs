use serde::Deserialize;
use thiserror::Error;

/// Configuration validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConfigError {
    /// Description of the validation error.
    pub message: String,
}

/// Scanner configuration options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Marker that introduces a line comment (default: `//`).
    pub comment_marker: String,
}

impl Config {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.comment_marker.is_empty() {
            return Err(ConfigError {
                message: "comment_marker must not be empty".to_string(),
            });
        }
        if self
            .comment_marker
            .chars()
            .any(|c| matches!(c, '"' | '\'' | '{' | '}' | '(' | ')' | '[' | ']'))
        {
            return Err(ConfigError {
                message: format!(
                    "comment_marker must not contain quote or delimiter characters, got {:?}",
                    self.comment_marker
                ),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comment_marker: "//".to_string(),
        }
    }
}
