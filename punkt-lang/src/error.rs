//! Error types for language parameters and pattern construction

use thiserror::Error;

/// Errors raised while building patterns from a [`LanguageConfig`](crate::LanguageConfig)
#[derive(Debug, Error)]
pub enum LanguageError {
    /// A character-class fragment or the filled template failed to compile
    #[error("invalid pattern for {field}: {source}")]
    InvalidPattern {
        /// The configuration part that produced the pattern
        field: &'static str,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The period-context template lacks a required placeholder
    #[error("period context template is missing the {placeholder} placeholder")]
    MissingPlaceholder {
        /// The placeholder that was not found
        placeholder: &'static str,
    },

    /// The compiled pattern does not define a required named group
    #[error("period context pattern has no capture group named {group}")]
    MissingCaptureGroup {
        /// The name of the absent group
        group: &'static str,
    },

    /// Language configuration text could not be parsed
    #[error("failed to parse language config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Language configuration could not be rendered
    #[error("failed to serialize language config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for language operations
pub type Result<T> = std::result::Result<T, LanguageError>;
