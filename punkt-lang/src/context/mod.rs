//! Period-context matching
//!
//! A period context is the substring around a candidate sentence-end
//! character together with whatever follows it. The pattern is assembled from
//! a template and the character classes of a [`LanguageConfig`](crate::LanguageConfig).

mod pattern;
mod template;

pub use pattern::{
    AfterTokenKind, PeriodContext, PeriodContextPattern, PeriodContexts, AFTER_TOK, NEXT_TOK,
};
pub use template::PERIOD_CONTEXT_TEMPLATE;
