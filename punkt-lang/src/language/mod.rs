//! Language parameters for Punkt sentence boundary detection

pub mod classes;
pub mod config;

pub use classes::{sent_end_class, TokenClasses};
pub use config::{defaults, LanguageConfig, LanguageConfigBuilder, Metadata};
