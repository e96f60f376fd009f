//! Compiled period-context pattern and its match records

use regex::{CaptureMatches, Captures, Regex};
use serde::Serialize;

use crate::context::template;
use crate::error::{LanguageError, Result};
use crate::language::LanguageConfig;

/// Name of the group holding whatever follows the sentence-end character
pub const AFTER_TOK: &str = "after_tok";

/// Name of the group holding the token after the whitespace
pub const NEXT_TOK: &str = "next_tok";

/// How a period context continues after its sentence-end character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AfterTokenKind {
    /// A single non-word character such as a closing quote or bracket
    NonWord,
    /// Whitespace followed by the next token
    NextToken,
    /// Nothing but optional whitespace until the end of the text
    EndOfText,
}

/// One candidate sentence-boundary context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodContext<'t> {
    /// The full matched substring
    pub text: &'t str,
    /// The period-final token, up to the start of `after_tok`
    pub token: &'t str,
    /// The region after the sentence-end character (`after_tok` group)
    pub after_tok: &'t str,
    /// The token following the whitespace, if any (`next_tok` group)
    pub next_tok: Option<&'t str>,
    /// Byte offset of the match start in the scanned text
    pub start: usize,
    /// Byte offset one past the match end
    pub end: usize,
}

impl<'t> PeriodContext<'t> {
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        let text = whole.as_str();

        let (after_start, after_tok) = match caps.name(AFTER_TOK) {
            Some(m) => (m.start(), m.as_str()),
            None => (whole.end(), ""),
        };

        Some(Self {
            text,
            token: &text[..after_start - whole.start()],
            after_tok,
            next_tok: caps.name(NEXT_TOK).map(|m| m.as_str()),
            start: whole.start(),
            end: whole.end(),
        })
    }

    /// Which alternative of the after-token region matched
    pub fn kind(&self) -> AfterTokenKind {
        if self.next_tok.is_some() {
            AfterTokenKind::NextToken
        } else if self.after_tok.chars().all(char::is_whitespace) {
            AfterTokenKind::EndOfText
        } else {
            AfterTokenKind::NonWord
        }
    }
}

/// Compiled pattern that finds candidate sentence-boundary contexts
///
/// Construction fills the config's template and compiles it, which is the
/// expensive step. The compiled value is immutable and can be shared across
/// threads; reuse it for every text in the same language.
#[derive(Debug, Clone)]
pub struct PeriodContextPattern {
    regex: Regex,
}

impl PeriodContextPattern {
    /// Build the period-context pattern of `config`
    pub fn new(config: &LanguageConfig) -> Result<Self> {
        if config.sent_end_chars.is_empty() {
            tracing::warn!(
                language = %config.metadata.code,
                "no sentence-end characters configured, period context pattern matches nothing"
            );
        }

        let fragment = template::sent_end_fragment(&config.sent_end_chars);
        let pattern = template::fill(
            &config.period_context_template,
            &fragment,
            &config.non_word_chars,
        )?;

        let regex = Regex::new(&pattern).map_err(|source| LanguageError::InvalidPattern {
            field: "period_context_template",
            source,
        })?;

        if !regex.capture_names().flatten().any(|name| name == AFTER_TOK) {
            return Err(LanguageError::MissingCaptureGroup { group: AFTER_TOK });
        }

        tracing::debug!(
            language = %config.metadata.code,
            pattern = %pattern,
            "compiled period context pattern"
        );

        Ok(Self { regex })
    }

    /// The pattern source text
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// The compiled regex, for callers that need the named groups directly
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    /// All non-overlapping contexts in `text`, left to right
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let found: Vec<&str> = self.regex.find_iter(text).map(|m| m.as_str()).collect();
        tracing::trace!(count = found.len(), bytes = text.len(), "period contexts found");
        found
    }

    /// Lazily iterate over the match records in `text`
    pub fn contexts<'r, 't>(&'r self, text: &'t str) -> PeriodContexts<'r, 't> {
        PeriodContexts {
            captures: self.regex.captures_iter(text),
        }
    }
}

/// Iterator over the [`PeriodContext`] records of one text
#[derive(Debug)]
pub struct PeriodContexts<'r, 't> {
    captures: CaptureMatches<'r, 't>,
}

impl<'r, 't> Iterator for PeriodContexts<'r, 't> {
    type Item = PeriodContext<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.captures.next()?;
        PeriodContext::from_captures(&caps)
    }
}
