//! Readability formulas.
//!
//! Each formula is a pure function over a [`TextStats`] snapshot or an
//! analyzed [`Passage`]. Formulas that would divide by zero or sample from an
//! empty population return [`ReadabilityError::InsufficientData`] instead of
//! producing `NaN` or infinity.
//!
//! SMOG and FORCAST sample the text. Pass `Some(seed)` for reproducible
//! results; each formula builds its own generator from the seed, so the order
//! in which formulas are evaluated does not change their values.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ReadabilityError, ReadabilityResult};
use crate::sampling;
use crate::stats::{Passage, TextStats};
use crate::word_list::WordList;

/// Sentences sampled for SMOG.
pub const SMOG_SAMPLE_SENTENCES: usize = 30;

/// Words sampled for FORCAST.
pub const FORCAST_SAMPLE_WORDS: usize = 150;

/// A readability formula.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Formula {
    /// Flesch Reading Ease (0--100, higher is easier).
    FleschReadingEase,
    /// Revised Flesch Reading Ease, based on monosyllabic word count.
    FleschReadingEaseRevised,
    /// Flesch-Kincaid Grade Level (US school grade).
    FleschKincaidGrade,
    /// Dale-Chall, based on a list of familiar words.
    DaleChall,
    /// Gunning Fog index.
    GunningFog,
    /// SMOG grade, from a sample of sentences.
    Smog,
    /// FORCAST grade, from a sample of words.
    Forcast,
}

impl Formula {
    /// Every formula, in report order.
    pub const ALL: [Self; 7] = [
        Self::FleschReadingEase,
        Self::FleschReadingEaseRevised,
        Self::FleschKincaidGrade,
        Self::DaleChall,
        Self::GunningFog,
        Self::Smog,
        Self::Forcast,
    ];

    /// Returns the formula's kebab-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FleschReadingEase => "flesch-reading-ease",
            Self::FleschReadingEaseRevised => "flesch-reading-ease-revised",
            Self::FleschKincaidGrade => "flesch-kincaid-grade",
            Self::DaleChall => "dale-chall",
            Self::GunningFog => "gunning-fog",
            Self::Smog => "smog",
            Self::Forcast => "forcast",
        }
    }

    /// Human-readable label for reports.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FleschReadingEase => "Flesch Reading Ease",
            Self::FleschReadingEaseRevised => "Flesch Reading Ease (revised)",
            Self::FleschKincaidGrade => "Flesch-Kincaid Grade",
            Self::DaleChall => "Dale-Chall",
            Self::GunningFog => "Gunning Fog",
            Self::Smog => "SMOG",
            Self::Forcast => "FORCAST",
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn insufficient(formula: Formula, reason: &'static str) -> ReadabilityError {
    ReadabilityError::InsufficientData { formula, reason }
}

/// Flesch Reading Ease.
///
/// `206.835 - 1.015 * ASL - 84.6 * (syllables / words)`
///
/// # Errors
///
/// Returns [`ReadabilityError::InsufficientData`] when the text has no words.
pub fn flesch_reading_ease(stats: &TextStats) -> ReadabilityResult<f64> {
    if stats.total_words == 0 {
        return Err(insufficient(Formula::FleschReadingEase, "no words"));
    }
    let syllables_per_word = stats.total_syllables as f64 / stats.total_words as f64;
    Ok(206.835 - 1.015 * stats.average_sentence_length - 84.6 * syllables_per_word)
}

/// Revised Flesch Reading Ease.
///
/// `1.599 * monosyllabic - 1.015 * ASL - 31.517`. Always defined.
pub fn flesch_reading_ease_revised(stats: &TextStats) -> f64 {
    1.599 * stats.total_monosyllabic_words as f64 - 1.015 * stats.average_sentence_length - 31.517
}

/// Flesch-Kincaid Grade Level.
///
/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`
///
/// # Errors
///
/// Returns [`ReadabilityError::InsufficientData`] when the text has no words
/// or no sentences.
pub fn flesch_kincaid_grade(stats: &TextStats) -> ReadabilityResult<f64> {
    if stats.total_words == 0 {
        return Err(insufficient(Formula::FleschKincaidGrade, "no words"));
    }
    if stats.total_sentences == 0 {
        return Err(insufficient(Formula::FleschKincaidGrade, "no sentences"));
    }
    let words = stats.total_words as f64;
    let words_per_sentence = words / stats.total_sentences as f64;
    let syllables_per_word = stats.total_syllables as f64 / words;
    Ok(0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59)
}

/// Dale-Chall score.
///
/// `64 - 0.95 * (words - overlap) - 0.69 * ASL`, where `overlap` is the number
/// of distinct lowercased words that appear in `list`. Depends only on the
/// set of words, so reordering sentences leaves it unchanged.
#[tracing::instrument(skip_all, fields(list_len = list.len()))]
pub fn dale_chall(passage: &Passage, list: &WordList) -> f64 {
    let stats = passage.stats();
    let unique: HashSet<String> = passage.words().map(|w| w.text.to_lowercase()).collect();
    let overlap = unique.iter().filter(|w| list.contains(w)).count();
    let unfamiliar = stats.total_words as f64 - overlap as f64;
    tracing::debug!(overlap, "dale-chall overlap");
    64.0 - 0.95 * unfamiliar - 0.69 * stats.average_sentence_length
}

/// Gunning Fog index.
///
/// `0.4 * (ASL + bisyllabic)`. Always defined.
pub fn gunning_fog(stats: &TextStats) -> f64 {
    0.4 * (stats.average_sentence_length + stats.total_bisyllabic_words as f64)
}

/// SMOG grade.
///
/// Samples up to 30 sentences and returns `3 + sqrt(n)`, where `n` counts the
/// words of two or more syllables in the sample.
///
/// # Errors
///
/// Returns [`ReadabilityError::InsufficientData`] when the text has no
/// sentences.
#[tracing::instrument(skip(passage))]
pub fn smog(passage: &Passage, seed: Option<u64>) -> ReadabilityResult<f64> {
    let sentences = passage.sentences();
    if sentences.is_empty() {
        return Err(insufficient(Formula::Smog, "no sentences"));
    }
    let mut rng = sampling::rng(seed);
    let polysyllables = sampling::sample(sentences, SMOG_SAMPLE_SENTENCES, &mut rng)
        .into_iter()
        .flatten()
        .filter(|w| w.syllables >= 2)
        .count();
    Ok(3.0 + (polysyllables as f64).sqrt())
}

/// FORCAST grade.
///
/// Samples up to 150 words and returns `20 - m / 10`, where `m` counts the
/// monosyllabic words in the sample.
///
/// # Errors
///
/// Returns [`ReadabilityError::InsufficientData`] when the text has no words.
#[tracing::instrument(skip(passage))]
pub fn forcast(passage: &Passage, seed: Option<u64>) -> ReadabilityResult<f64> {
    let words: Vec<_> = passage.words().collect();
    if words.is_empty() {
        return Err(insufficient(Formula::Forcast, "no words"));
    }
    let mut rng = sampling::rng(seed);
    let monosyllables = sampling::sample(&words, FORCAST_SAMPLE_WORDS, &mut rng)
        .into_iter()
        .filter(|w| w.syllables == 1)
        .count();
    Ok(20.0 - monosyllables as f64 / 10.0)
}
