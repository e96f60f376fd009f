//! Language parameters and period-context matching for Punkt sentence
//! boundary detection
//!
//! This crate does not decide where sentences end. It finds every place where
//! such a decision has to be made: each token ending in a sentence-end
//! character, together with the character or token that follows it. A
//! boundary classifier consumes these contexts and the remaining language
//! parameters (internal punctuation, word-start and non-word classes).
//!
//! # Architecture
//!
//! - **Language layer**: [`LanguageConfig`] holds the tunable character
//!   classes of one language and can be loaded from TOML.
//! - **Context layer**: [`PeriodContextPattern`] fills the config's template,
//!   compiles it once and scans any number of texts.
//!
//! # Example
//!
//! ```rust
//! use punkt_lang::{AfterTokenKind, LanguageConfig};
//!
//! let config = LanguageConfig::default();
//! let pattern = config.period_context_pattern().unwrap();
//!
//! let text = "He went to the U.S. and stayed.";
//! assert_eq!(pattern.find_all(text), vec!["U.S. and", "stayed."]);
//!
//! let first = pattern.contexts(text).next().unwrap();
//! assert_eq!(first.next_tok, Some("and"));
//! assert_eq!(first.kind(), AfterTokenKind::NextToken);
//! ```

pub mod context;
pub mod error;
pub mod language;

pub use context::{AfterTokenKind, PeriodContext, PeriodContextPattern, PeriodContexts};
pub use error::{LanguageError, Result};
pub use language::{sent_end_class, LanguageConfig, LanguageConfigBuilder, TokenClasses};
