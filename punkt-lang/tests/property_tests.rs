//! Property tests for the sentence-end class and the context finder

use proptest::prelude::*;
use punkt_lang::{sent_end_class, LanguageConfig};
use regex::Regex;

fn sent_end_entries() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[.?!\"')\\]\\[^|*+$\\\\-]{1,2}", 0..8)
}

proptest! {
    #[test]
    fn class_is_concatenation_of_escaped_chars(entries in sent_end_entries()) {
        let expected: String = entries
            .iter()
            .flat_map(|s| s.chars())
            .map(|ch| regex::escape(&ch.to_string()))
            .collect();

        prop_assert_eq!(sent_end_class(&entries), expected);
    }

    #[test]
    fn class_matches_exactly_its_characters(entries in sent_end_entries()) {
        let class = sent_end_class(&entries);
        prop_assume!(!class.is_empty());

        let re = Regex::new(&format!("^[{class}]$")).unwrap();
        for ch in entries.iter().flat_map(|s| s.chars()) {
            prop_assert!(re.is_match(&ch.to_string()));
        }
        for ch in ['a', 'Z', '0', ' ', '\n'] {
            prop_assert!(!re.is_match(&ch.to_string()));
        }
    }

    #[test]
    fn class_is_idempotent(entries in sent_end_entries()) {
        let config = LanguageConfig {
            sent_end_chars: entries,
            ..LanguageConfig::default()
        };
        prop_assert_eq!(config.sent_end_class(), config.sent_end_class());
    }

    #[test]
    fn contexts_are_ordered_and_disjoint(
        text in "[a-zA-Z .?!\"')(\n’”\u{a0}\u{2003}]{0,80}"
    ) {
        let pattern = LanguageConfig::default().period_context_pattern().unwrap();
        let contexts: Vec<_> = pattern.contexts(&text).collect();

        for pair in contexts.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
            prop_assert!(pair[0].end <= pair[1].start);
        }
        for context in &contexts {
            prop_assert_eq!(&text[context.start..context.end], context.text);
            prop_assert!(context.text.ends_with(context.after_tok));
            if let Some(next) = context.next_tok {
                prop_assert!(context.after_tok.ends_with(next));
            }
        }

        let found = pattern.find_all(&text);
        let texts: Vec<_> = contexts.iter().map(|c| c.text).collect();
        prop_assert_eq!(found, texts);
    }

    #[test]
    fn unicode_spaces_separate_next_token(
        word in "[a-z]{1,8}",
        terminators in "[.?!]{1,3}",
        space in "[ \u{a0}\u{2003}\u{3000}]",
        next in "[A-Z][a-z]{0,8}",
    ) {
        let text = format!("{word}{terminators}{space}{next}");
        let pattern = LanguageConfig::default().period_context_pattern().unwrap();
        let contexts: Vec<_> = pattern.contexts(&text).collect();

        prop_assert_eq!(contexts.len(), 1);
        prop_assert_eq!(contexts[0].next_tok, Some(next.as_str()));
        prop_assert_eq!(contexts[0].token, format!("{word}{terminators}"));
    }

    #[test]
    fn closing_quote_surfaces_as_after_token(
        word in "[a-z]{1,8}",
        terminators in "[.?!]{1,3}",
        quote in "[’”\"']",
    ) {
        let text = format!("{word}{terminators}{quote} Next");
        let pattern = LanguageConfig::default().period_context_pattern().unwrap();
        let context = pattern.contexts(&text).next().unwrap();

        prop_assert_eq!(context.after_tok, quote.as_str());
        prop_assert_eq!(context.next_tok, None);
    }

    #[test]
    fn text_without_sentence_end_chars_has_no_contexts(text in "[a-zA-Z0-9 ,;:\n]{0,80}") {
        let pattern = LanguageConfig::default().period_context_pattern().unwrap();
        prop_assert!(pattern.find_all(&text).is_empty());
    }
}
