//! Period-context template filling

use crate::error::{LanguageError, Result};
use crate::language::sent_end_class;

pub const SENT_END_PLACEHOLDER: &str = "{sent_end_chars}";
pub const NON_WORD_PLACEHOLDER: &str = "{non_word}";

/// Default template for period contexts
///
/// Matches the token which the possible sentence boundary ends, then either a
/// single non-word character, whitespace and the following token, or the end
/// of the text. The token before the boundary is matched lazily so that a
/// closing quote directly after the sentence-end character is reported as the
/// after-token instead of being absorbed into the token.
pub const PERIOD_CONTEXT_TEMPLATE: &str =
    r"\S*?{sent_end_chars}(?P<after_tok>{non_word}|\s+(?P<next_tok>\S+)|\s*\z)";

/// Optional closing quote allowed directly after a sentence-end character
const CLOSING_QUOTE: &str = r#"[’”"']??"#;

/// Class used when a language has no sentence-end characters at all
const EMPTY_CLASS: &str = r"[^\x00-\x{10FFFF}]";

fn is_closing_quote(ch: char) -> bool {
    matches!(ch, '’' | '”' | '"' | '\'')
}

/// Build the `{sent_end_chars}` slot from the configured sentence-end entries
///
/// Runs of single-character entries (`?!`, `...`) are consumed greedily,
/// followed by the tail of any multi-character entry such as the `)` of `.)`.
/// Tails made only of closing quotes are left to the lazy closing-quote
/// suffix so the quote can surface as the after-token. Any single character
/// of the full sentence-end class is the fallback.
pub fn sent_end_fragment<S: AsRef<str>>(sent_end_chars: &[S]) -> String {
    let singles: Vec<&str> = sent_end_chars
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| s.chars().count() == 1)
        .collect();

    let mut tails: Vec<String> = Vec::new();
    for entry in sent_end_chars.iter().map(AsRef::as_ref) {
        let mut chars = entry.chars();
        if chars.next().is_none() {
            continue;
        }
        let tail = chars.as_str();
        if tail.is_empty() || tail.chars().all(is_closing_quote) {
            continue;
        }
        let escaped = regex::escape(tail);
        if !tails.contains(&escaped) {
            tails.push(escaped);
        }
    }
    // Longest tail first so alternation prefers the fullest sequence
    tails.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));

    let mut alternatives = Vec::new();
    let run = sent_end_class(&singles);
    if !run.is_empty() {
        if tails.is_empty() {
            alternatives.push(format!("[{run}]+"));
        } else {
            alternatives.push(format!("[{run}]+(?:{})?", tails.join("|")));
        }
    }
    let class = sent_end_class(sent_end_chars);
    if !class.is_empty() {
        alternatives.push(format!("[{class}]"));
    }

    if alternatives.is_empty() {
        format!("{EMPTY_CLASS}{CLOSING_QUOTE}")
    } else {
        format!("(?:{}){CLOSING_QUOTE}", alternatives.join("|"))
    }
}

/// Substitute both placeholders of `template`
///
/// Surrounding spaces are trimmed from the result; other whitespace is kept.
pub fn fill(template: &str, sent_end_fragment: &str, non_word: &str) -> Result<String> {
    for placeholder in [SENT_END_PLACEHOLDER, NON_WORD_PLACEHOLDER] {
        if !template.contains(placeholder) {
            return Err(LanguageError::MissingPlaceholder { placeholder });
        }
    }

    let filled = template
        .replace(SENT_END_PLACEHOLDER, sent_end_fragment)
        .replace(NON_WORD_PLACEHOLDER, non_word);

    Ok(filled.trim_matches(' ').to_string())
}
