//! Language parameter container
//!
//! This module defines [`LanguageConfig`] together with its TOML schema and
//! fluent builder. The defaults describe a generic Latin-alphabet language.

use serde::{Deserialize, Serialize};

use crate::context::{PeriodContext, PeriodContextPattern, PERIOD_CONTEXT_TEMPLATE};
use crate::error::Result;
use crate::language::classes::{self, TokenClasses};

/// Default configuration constants
pub mod defaults {
    /// Characters and short sequences that may terminate a sentence
    pub const SENT_END_CHARS: [&str; 7] = [".", "?", "!", ".\"", ".'", "?\"", ".)"];

    /// Punctuation that suggests an abbreviation when it follows a period-final token
    pub const INTERNAL_PUNCTUATION: &str = ",:;";

    /// Characters that may not start a word token
    pub const WORD_START: &str = r#"[^\("`{\[:;&\#\*@\)}\]\-,]"#;

    /// Characters that may not appear inside a word token
    pub const NON_WORD_CHARS: &str = r#"(?:[?!)’”"';}\]\*:@\({\[])"#;

    /// Embedded TOML document describing the default language
    pub const DEFAULT_TOML: &str = include_str!("../../configs/languages/default.toml");
}

/// Language metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            code: "und".to_string(),
            name: "Generic Latin".to_string(),
        }
    }
}

/// Language specific parameters used to find candidate sentence boundaries
///
/// A config is a plain value: build it once per language and compile the
/// patterns derived from it with [`LanguageConfig::period_context_pattern`]
/// and [`LanguageConfig::token_classes`]. Every field has a default, so a TOML
/// document only needs to list the parameters it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Characters that are candidates for sentence boundaries
    pub sent_end_chars: Vec<String>,
    /// Sentence internal punctuation, which indicates an abbreviation if
    /// preceded by a period-final token
    pub internal_punctuation: String,
    /// Excludes some characters from starting word tokens
    pub word_start: String,
    /// Characters that cannot appear within words
    pub non_word_chars: String,
    /// Pattern template with `{sent_end_chars}` and `{non_word}` placeholders
    pub period_context_template: String,
    pub metadata: Metadata,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            sent_end_chars: defaults::SENT_END_CHARS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            internal_punctuation: defaults::INTERNAL_PUNCTUATION.to_string(),
            word_start: defaults::WORD_START.to_string(),
            non_word_chars: defaults::NON_WORD_CHARS.to_string(),
            period_context_template: PERIOD_CONTEXT_TEMPLATE.to_string(),
            metadata: Metadata::default(),
        }
    }
}

impl LanguageConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder
    pub fn builder() -> LanguageConfigBuilder {
        LanguageConfigBuilder::default()
    }

    /// Parse a configuration from TOML text and validate it
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the embedded default language document
    pub fn embedded_default() -> Result<Self> {
        tracing::debug!("loading embedded default language config");
        Self::from_toml_str(defaults::DEFAULT_TOML)
    }

    /// Render the configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every pattern derived from this config compiles
    pub fn validate(&self) -> Result<()> {
        TokenClasses::new(self)?;
        PeriodContextPattern::new(self)?;
        Ok(())
    }

    /// Escaped sentence-end characters, ready to embed inside `[...]`
    pub fn sent_end_class(&self) -> String {
        classes::sent_end_class(&self.sent_end_chars)
    }

    /// Whether `ch` takes part in any sentence-end sequence
    pub fn is_sentence_end_char(&self, ch: char) -> bool {
        self.sent_end_chars.iter().any(|s| s.contains(ch))
    }

    /// Whether `ch` is internal punctuation
    pub fn is_internal_punctuation(&self, ch: char) -> bool {
        self.internal_punctuation.contains(ch)
    }

    /// Compile the period-context pattern for this config
    pub fn period_context_pattern(&self) -> Result<PeriodContextPattern> {
        PeriodContextPattern::new(self)
    }

    /// Compile the per-token character classes for this config
    pub fn token_classes(&self) -> Result<TokenClasses> {
        TokenClasses::new(self)
    }

    /// Find every candidate boundary context in `text`
    ///
    /// This compiles the pattern on every call. Callers scanning more than one
    /// text should keep the result of [`LanguageConfig::period_context_pattern`]
    /// and call [`PeriodContextPattern::find_all`] instead.
    pub fn find_period_contexts<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        Ok(self.period_context_pattern()?.find_all(text))
    }

    /// Like [`LanguageConfig::find_period_contexts`] but returns match records
    pub fn period_contexts<'t>(&self, text: &'t str) -> Result<Vec<PeriodContext<'t>>> {
        Ok(self.period_context_pattern()?.contexts(text).collect())
    }
}

/// Fluent builder for hand-built language configurations
#[derive(Debug, Default)]
pub struct LanguageConfigBuilder {
    code: Option<String>,
    name: Option<String>,
    sent_end_chars: Option<Vec<String>>,
    internal_punctuation: Option<String>,
    word_start: Option<String>,
    non_word_chars: Option<String>,
    period_context_template: Option<String>,
}

impl LanguageConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language code and display name
    pub fn language(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self.name = Some(name.into());
        self
    }

    /// Set the sentence-end characters and sequences
    pub fn sent_end_chars<I, S>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sent_end_chars = Some(chars.into_iter().map(Into::into).collect());
        self
    }

    /// Set the internal punctuation characters
    pub fn internal_punctuation(mut self, chars: impl Into<String>) -> Self {
        self.internal_punctuation = Some(chars.into());
        self
    }

    /// Set the word-start character class
    pub fn word_start(mut self, class: impl Into<String>) -> Self {
        self.word_start = Some(class.into());
        self
    }

    /// Set the non-word character class
    pub fn non_word_chars(mut self, class: impl Into<String>) -> Self {
        self.non_word_chars = Some(class.into());
        self
    }

    /// Replace the period-context template
    ///
    /// The template must contain the `{sent_end_chars}` and `{non_word}`
    /// placeholders.
    pub fn period_context_template(mut self, template: impl Into<String>) -> Self {
        self.period_context_template = Some(template.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<LanguageConfig> {
        let mut config = LanguageConfig::default();

        if let Some(code) = self.code {
            config.metadata.code = code;
        }
        if let Some(name) = self.name {
            config.metadata.name = name;
        }
        if let Some(chars) = self.sent_end_chars {
            config.sent_end_chars = chars;
        }
        if let Some(chars) = self.internal_punctuation {
            config.internal_punctuation = chars;
        }
        if let Some(class) = self.word_start {
            config.word_start = class;
        }
        if let Some(class) = self.non_word_chars {
            config.non_word_chars = class;
        }
        if let Some(template) = self.period_context_template {
            config.period_context_template = template;
        }

        config.validate()?;
        Ok(config)
    }
}
