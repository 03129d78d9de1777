//! Readability report.
//!
//! [`check_readability`] analyzes a text once and runs the selected formulas
//! over the shared [`Passage`]. Lower grades are more readable; a typical
//! target is a Flesch-Kincaid grade of 8 or less for user docs and 12 or less
//! for technical docs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ReadabilityResult;
use crate::markdown;
use crate::metrics::{self, Formula};
use crate::sampling;
use crate::stats::{Passage, TextStats};
use crate::word_list::{self, WordListSource};

/// What to compute and how.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreOptions {
    /// Strip markdown formatting before analysis.
    pub strip_markdown: bool,
    /// Formulas to compute. `None` computes all of them.
    pub formulas: Option<Vec<Formula>>,
    /// Seed for SMOG and FORCAST sampling. `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Familiar-word list for Dale-Chall.
    pub word_list: WordListSource,
    /// Maximum acceptable Flesch-Kincaid grade.
    pub max_grade: Option<f64>,
}

impl ScoreOptions {
    fn selected(&self) -> Vec<Formula> {
        let mut formulas = self
            .formulas
            .clone()
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| Formula::ALL.to_vec());
        formulas.sort_unstable();
        formulas.dedup();
        formulas
    }
}

/// Scores for the formulas that were computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Scores {
    /// Flesch Reading Ease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flesch_reading_ease: Option<f64>,
    /// Revised Flesch Reading Ease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flesch_reading_ease_revised: Option<f64>,
    /// Flesch-Kincaid Grade Level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flesch_kincaid_grade: Option<f64>,
    /// Dale-Chall.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dale_chall: Option<f64>,
    /// Gunning Fog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gunning_fog: Option<f64>,
    /// SMOG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smog: Option<f64>,
    /// FORCAST.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forcast: Option<f64>,
}

impl Scores {
    /// The score for `formula`, if it was computed.
    pub const fn get(&self, formula: Formula) -> Option<f64> {
        match formula {
            Formula::FleschReadingEase => self.flesch_reading_ease,
            Formula::FleschReadingEaseRevised => self.flesch_reading_ease_revised,
            Formula::FleschKincaidGrade => self.flesch_kincaid_grade,
            Formula::DaleChall => self.dale_chall,
            Formula::GunningFog => self.gunning_fog,
            Formula::Smog => self.smog,
            Formula::Forcast => self.forcast,
        }
    }

    const fn slot(&mut self, formula: Formula) -> &mut Option<f64> {
        match formula {
            Formula::FleschReadingEase => &mut self.flesch_reading_ease,
            Formula::FleschReadingEaseRevised => &mut self.flesch_reading_ease_revised,
            Formula::FleschKincaidGrade => &mut self.flesch_kincaid_grade,
            Formula::DaleChall => &mut self.dale_chall,
            Formula::GunningFog => &mut self.gunning_fog,
            Formula::Smog => &mut self.smog,
            Formula::Forcast => &mut self.forcast,
        }
    }

    /// Computed scores in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Formula, f64)> + '_ {
        Formula::ALL
            .into_iter()
            .filter_map(|f| self.get(f).map(|score| (f, score)))
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Counts the scores were computed from.
    #[serde(flatten)]
    pub stats: TextStats,
    /// Selected formula scores.
    pub scores: Scores,
    /// Seed used for SMOG and FORCAST sampling.
    pub seed: u64,
    /// Maximum acceptable grade (if provided).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<f64>,
    /// Whether the Flesch-Kincaid grade exceeds the maximum.
    pub over_max: bool,
}

/// Check readability of text.
///
/// # Errors
///
/// Returns [`ReadabilityError::InvalidInput`](crate::ReadabilityError::InvalidInput)
/// for blank text (after markdown stripping, if requested), the first
/// formula's error when a selected formula cannot be computed, or
/// [`ReadabilityError::ResourceLoad`](crate::ReadabilityError::ResourceLoad)
/// when Dale-Chall is selected and its word list cannot be read.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn check_readability(
    text: &str,
    options: &ScoreOptions,
) -> ReadabilityResult<ReadabilityReport> {
    let prose = if options.strip_markdown {
        markdown::strip_to_prose(text)
    } else {
        text.to_string()
    };

    let passage = Passage::analyze(&prose)?;
    let stats = passage.stats();
    let seed = options.seed.unwrap_or_else(sampling::fresh_seed);

    let mut scores = Scores::default();
    for formula in options.selected() {
        let score = match formula {
            Formula::FleschReadingEase => metrics::flesch_reading_ease(stats)?,
            Formula::FleschReadingEaseRevised => metrics::flesch_reading_ease_revised(stats),
            Formula::FleschKincaidGrade => metrics::flesch_kincaid_grade(stats)?,
            Formula::DaleChall => {
                let list = word_list::shared(&options.word_list)?;
                metrics::dale_chall(&passage, &list)
            }
            Formula::GunningFog => metrics::gunning_fog(stats),
            Formula::Smog => metrics::smog(&passage, Some(seed))?,
            Formula::Forcast => metrics::forcast(&passage, Some(seed))?,
        };
        *scores.slot(formula) = Some(score);
    }

    let over_max = match (options.max_grade, scores.flesch_kincaid_grade) {
        (Some(max), Some(grade)) => grade > max,
        _ => false,
    };
    tracing::debug!(seed, over_max, "scored passage");

    Ok(ReadabilityReport {
        stats: stats.clone(),
        scores,
        seed,
        max_grade: options.max_grade,
        over_max,
    })
}
