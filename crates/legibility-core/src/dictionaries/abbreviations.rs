//! Abbreviation dictionary for sentence boundary detection.
//!
//! Titles ("Dr.", "Mrs.") are followed by a name, so a period after one
//! never ends a sentence. The remaining abbreviations overlap with ordinary
//! words ("sat", "no", "in"), so a period after them only ends a sentence
//! when the next word is capitalized.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Titles and honorifics that precede a name.
pub static TITLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "messrs", "mmes", "msgr", "hon",
        "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen", "rep", "gov",
        "pres", "st",
    ]
    .into_iter()
    .collect()
});

/// Abbreviations that may or may not close a sentence.
pub static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Academic degrees
    set.extend([
        "esq", "phd", "md", "dds", "b.a", "b.s", "m.a", "m.s", "m.b.a", "ph.d", "m.d", "j.d",
        "ll.b", "ll.m", "d.d.s", "d.v.m", "pharm.d", "ed.d", "psy.d",
    ]);

    // Common abbreviations
    set.extend([
        "etc", "vs", "e.g", "i.e", "al", "cf", "viz", "ibid", "n.b", "p.s", "r.s.v.p",
    ]);

    // Time and dates
    set.extend([
        "a.m", "p.m", "b.c", "a.d", "c.e", "b.c.e", "jan", "feb", "mar", "apr", "jun", "jul",
        "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "tues", "wed", "thu", "thur",
        "thurs", "fri", "sat", "sun",
    ]);

    // Locations and geography
    set.extend([
        "ave", "blvd", "rd", "ct", "ln", "pl", "ter", "apt", "ste", "rm", "fl", "bldg", "dept",
        "u.s", "u.k", "u.s.a", "e.u", "n.y", "calif", "fla", "mass", "penn", "wash",
    ]);

    // Business and organizations
    set.extend([
        "inc", "corp", "ltd", "llc", "co", "bros", "assn", "div", "mfg", "dist", "intl",
    ]);

    // Units of measurement
    set.extend([
        "oz", "lb", "lbs", "kg", "mg", "ml", "cm", "mm", "km", "in", "ft", "yd", "mi", "sq", "cu",
        "mph", "kph", "rpm", "hp",
    ]);

    // Technical and scientific
    set.extend([
        "vol", "no", "nos", "pp", "par", "sec", "ch", "fig", "eq", "est", "approx", "min", "max",
        "avg",
    ]);

    // Miscellaneous
    set.extend(["misc", "nr", "ref", "refs", "ed", "eds", "trans", "supp", "app", "encl"]);

    set
});

fn normalize(word: &str) -> String {
    word.to_lowercase().trim_matches('.').to_string()
}

/// Check if a word is a title that is always followed by a name.
pub fn is_title(word: &str) -> bool {
    TITLES.contains(normalize(word).as_str())
}

/// Check if a word is any known abbreviation, titles included.
pub fn is_abbreviation(word: &str) -> bool {
    let word = normalize(word);
    TITLES.contains(word.as_str()) || ABBREVIATIONS.contains(word.as_str())
}
