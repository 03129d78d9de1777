//! Text statistics.
//!
//! [`Passage::analyze`] tokenizes the text once and derives every count the
//! formulas need from the same canonical word list: the alphabetic tokens,
//! in reading order. Word totals, syllable totals and the mono/bisyllabic
//! split therefore always agree with each other.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ReadabilityError, ReadabilityResult};
use crate::syllables;
use crate::tokenizer::{RuleTokenizer, Sentence, Tokenizer};

/// Aggregate counts for a text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Number of alphabetic word tokens.
    pub total_words: usize,
    /// Number of sentences.
    pub total_sentences: usize,
    /// Words per sentence, or `0.0` when there are no sentences.
    pub average_sentence_length: f64,
    /// Sum of estimated syllables over all words.
    pub total_syllables: usize,
    /// Words with exactly one estimated syllable.
    pub total_monosyllabic_words: usize,
    /// Words with two or more estimated syllables.
    pub total_bisyllabic_words: usize,
}

impl TextStats {
    /// Compute statistics for `text` with the default tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabilityError::InvalidInput`] if `text` is empty or blank.
    pub fn compute(text: &str) -> ReadabilityResult<Self> {
        Passage::analyze(text).map(|p| p.stats)
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Words: {}", self.total_words)?;
        writeln!(f, "Total Sentences: {}", self.total_sentences)?;
        writeln!(
            f,
            "Average Sentence Length: {:.2}",
            self.average_sentence_length
        )?;
        writeln!(f, "Total Syllables: {}", self.total_syllables)?;
        writeln!(
            f,
            "Total Monosyllabic Words: {}",
            self.total_monosyllabic_words
        )?;
        write!(f, "Total Bisyllabic Words: {}", self.total_bisyllabic_words)
    }
}

/// A word together with its syllable estimate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word as it appears in the text.
    pub text: String,
    /// Estimated syllable count (always at least 1).
    pub syllables: usize,
}

/// A tokenized text with its statistics.
///
/// Built once; every formula reads from the same snapshot.
#[derive(Debug, Clone)]
pub struct Passage {
    sentences: Vec<Vec<Word>>,
    stats: TextStats,
}

impl Passage {
    /// Tokenize and measure `text` with [`RuleTokenizer`].
    ///
    /// # Errors
    ///
    /// Returns [`ReadabilityError::InvalidInput`] if `text` is empty or blank.
    pub fn analyze(text: &str) -> ReadabilityResult<Self> {
        Self::analyze_with(text, &RuleTokenizer)
    }

    /// Tokenize and measure `text` with a caller-supplied tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`ReadabilityError::InvalidInput`] if `text` is empty or blank.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze_with(text: &str, tokenizer: &dyn Tokenizer) -> ReadabilityResult<Self> {
        if text.trim().is_empty() {
            return Err(ReadabilityError::InvalidInput);
        }

        let sentences: Vec<Vec<Word>> = tokenizer
            .tokenize(text)
            .iter()
            .map(measure_sentence)
            .collect();

        let total_sentences = sentences.len();
        let words = sentences.iter().flatten();
        let mut total_words = 0;
        let mut total_syllables = 0;
        let mut total_monosyllabic_words = 0;
        let mut total_bisyllabic_words = 0;
        for word in words {
            total_words += 1;
            total_syllables += word.syllables;
            match word.syllables {
                1 => total_monosyllabic_words += 1,
                n if n >= 2 => total_bisyllabic_words += 1,
                _ => {}
            }
        }

        let average_sentence_length = if total_sentences > 0 {
            total_words as f64 / total_sentences as f64
        } else {
            0.0
        };

        let stats = TextStats {
            total_words,
            total_sentences,
            average_sentence_length,
            total_syllables,
            total_monosyllabic_words,
            total_bisyllabic_words,
        };
        tracing::debug!(
            words = stats.total_words,
            sentences = stats.total_sentences,
            syllables = stats.total_syllables,
            "measured passage"
        );

        Ok(Self { sentences, stats })
    }

    /// The statistics snapshot.
    pub const fn stats(&self) -> &TextStats {
        &self.stats
    }

    /// Words grouped by sentence.
    pub fn sentences(&self) -> &[Vec<Word>] {
        &self.sentences
    }

    /// All words in reading order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.sentences.iter().flatten()
    }
}

fn measure_sentence(sentence: &Sentence) -> Vec<Word> {
    sentence
        .words()
        .map(|w| Word {
            text: w.to_string(),
            syllables: syllables::estimate(w),
        })
        .collect()
}
