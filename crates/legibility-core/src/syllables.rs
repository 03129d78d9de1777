//! Syllable estimation.
//!
//! Counts vowel groups, then corrects for common English exceptions: silent
//! endings subtract a syllable ("make", "jumped", "social") and split vowel
//! pairs add one ("piano", "quiet", "table"). No pronunciation dictionary is
//! consulted, so the result is an estimate.

use regex::{Regex, RegexSet};
use std::sync::LazyLock;

static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]+").expect("valid regex"));

/// Each matching pattern removes one syllable.
static SILENT: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        // silent final e: make, the, whale
        r"[^aeiouy]e$",
        // silent -ed: jumped, played (but not wanted, needed)
        r"[^aeioutd]ed$",
        // silent -es: makes, times (but not boxes, pages, places)
        r"[^aeiouycgsxz]es$",
        // lovely, namely
        r"[^aeiouy]ely$",
        r"cial",
        r"tia",
        r"[cgst]ion",
        r"[cgt]ious",
    ])
    .expect("valid regex set")
});

/// Each matching pattern adds one syllable.
static SPLIT: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"ia",
        r"io",
        r"iu",
        r"[^gq]ua",
        r"iet",
        // consonant + le: table, little (offsets the silent e)
        r"[^aeiouy]le$",
        r"[^aeiouy]les$",
        // going, being, playing
        r"[aeiouy]ing$",
        r"eat(?:e|ion)$",
        r".[^aeiouy]ea$",
        r"[^aeiouy]ism$",
        r"^mc",
        // didn't, couldn't with the apostrophe removed
        r"dnt$",
    ])
    .expect("valid regex set")
});

/// Estimate the number of syllables in an English word.
///
/// Non-alphabetic characters are ignored, so `"Cat!"` counts like `"cat"`.
/// Returns 0 for input without letters; otherwise at least 1.
pub fn estimate(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if word.is_empty() {
        return 0;
    }

    let groups = VOWEL_GROUP.find_iter(&word).count();
    let silent = SILENT.matches(&word).iter().count();
    let split = SPLIT.matches(&word).iter().count();

    (groups + split).saturating_sub(silent).max(1)
}
