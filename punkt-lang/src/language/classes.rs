//! Character classes derived from a language configuration
//!
//! The sentence-end class feeds the period-context pattern; [`TokenClasses`]
//! answers the per-token questions a boundary classifier asks about the
//! remaining parameters.

use regex::Regex;

use crate::error::{LanguageError, Result};
use crate::language::config::LanguageConfig;

/// Matches tokens containing a word character that is not a digit
const NON_PUNCT: &str = r"[^\W\d]";

/// Escape every sentence-end character for use inside a `[...]` class
///
/// Multi-character entries contribute each of their characters. Order and
/// duplicates are preserved; an empty input produces an empty string.
pub fn sent_end_class<S: AsRef<str>>(sent_end_chars: &[S]) -> String {
    sent_end_chars
        .iter()
        .flat_map(|s| s.as_ref().chars())
        .map(|ch| regex::escape(ch.encode_utf8(&mut [0u8; 4])))
        .collect()
}

/// Compiled token-level character classes for one language
#[derive(Debug, Clone)]
pub struct TokenClasses {
    word_start: Regex,
    non_word: Regex,
    non_punct: Regex,
}

impl TokenClasses {
    /// Compile the classes of `config`
    pub fn new(config: &LanguageConfig) -> Result<Self> {
        let word_start = compile("word_start", &format!("^(?:{})", config.word_start))?;
        let non_word = compile("non_word_chars", &format!("^(?:{})$", config.non_word_chars))?;
        let non_punct = compile("non_punct", NON_PUNCT)?;

        Ok(Self {
            word_start,
            non_word,
            non_punct,
        })
    }

    /// Whether the first character of `token` may start a word
    pub fn can_start_word(&self, token: &str) -> bool {
        self.word_start.is_match(token)
    }

    /// Whether `ch` cannot appear inside a word
    pub fn is_non_word_char(&self, ch: char) -> bool {
        self.non_word.is_match(ch.encode_utf8(&mut [0u8; 4]))
    }

    /// Whether `token` contains a non-digit word character
    pub fn has_non_punct(&self, token: &str) -> bool {
        self.non_punct.is_match(token)
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| LanguageError::InvalidPattern { field, source })
}
