//! Core library for legibility.
//!
//! Classic readability formulas for English text: Flesch Reading Ease
//! (original and revised), Flesch-Kincaid Grade Level, Dale-Chall, Gunning
//! Fog, SMOG and FORCAST.
//!
//! # Modules
//!
//! - [`tokenizer`] - Sentence and word tokenization
//! - [`syllables`] - Syllable estimation
//! - [`stats`] - Text statistics shared by every formula
//! - [`metrics`] - The formulas themselves
//! - [`word_list`] - Dale-Chall reference word lists
//! - [`readability`] - One-call report over selected formulas
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use legibility_core::{Passage, metrics};
//!
//! let passage = Passage::analyze("The cat sat on the mat. It was happy.").unwrap();
//! assert_eq!(passage.stats().total_sentences, 2);
//!
//! let grade = metrics::flesch_kincaid_grade(passage.stats()).unwrap();
//! assert!(grade.is_finite());
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod dictionaries;
pub mod error;
pub mod markdown;
pub mod metrics;
pub mod readability;
pub mod sampling;
pub mod stats;
pub mod syllables;
pub mod text;
pub mod tokenizer;
pub mod word_list;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, ReadabilityError, ReadabilityResult};
pub use metrics::Formula;
pub use readability::{ReadabilityReport, ScoreOptions, Scores, check_readability};
pub use stats::{Passage, TextStats, Word};
pub use tokenizer::{RuleTokenizer, Sentence, Token, Tokenizer};
pub use word_list::{WordList, WordListSource};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
