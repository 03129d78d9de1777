//! Sentence segmentation.
//!
//! A character scan with context-based boundary detection: titles,
//! abbreviations, initials, decimals, URLs and ellipses do not end a
//! sentence. This is what [`RuleTokenizer`](crate::tokenizer::RuleTokenizer)
//! uses before splitting each sentence into word tokens.

use regex::Regex;
use std::sync::LazyLock;

use crate::dictionaries::abbreviations::{is_abbreviation, is_title};

/// Regex for initials (J.K., U.S.A., etc.).
static INITIALS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]\.)+[A-Z]?$").expect("valid regex"));

/// Split text into sentences.
///
/// Every non-blank stretch of text ends up in exactly one sentence, so a
/// single word with no terminator is one sentence. A fragment without any
/// alphanumeric character (a stray "--" or closing quote) is folded into the
/// sentence before it.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut sentences: Vec<String> = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);

        if is_sentence_terminator(ch) {
            let context = extract_context(&chars, i);

            if is_sentence_boundary(&context, &current) {
                // Closing quotes and brackets stay with the sentence they close
                while let Some(&next) = chars.get(i + 1) {
                    if !is_closer(next) {
                        break;
                    }
                    current.push(next);
                    i += 1;
                }
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        }

        i += 1;
    }

    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim();
    if sentence.is_empty() {
        return;
    }
    if sentence.chars().any(char::is_alphanumeric) {
        sentences.push(sentence.to_string());
    } else if let Some(last) = sentences.last_mut() {
        last.push(' ');
        last.push_str(sentence);
    } else {
        sentences.push(sentence.to_string());
    }
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

const fn is_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}')
}

/// Context around a potential sentence boundary.
struct SentenceContext {
    punctuation: char,
    word_before: String,
    /// The character right after the terminator, whitespace included.
    next_raw: Option<char>,
    /// The first non-whitespace character after the terminator.
    char_after: Option<char>,
    is_end_of_text: bool,
}

fn extract_context(chars: &[char], pos: usize) -> SentenceContext {
    let before = get_word_before(chars, pos);

    let mut after_start = pos + 1;
    while after_start < chars.len() && chars[after_start].is_whitespace() {
        after_start += 1;
    }

    // Skip opening quotes/brackets so `. "The` still sees the capital
    let mut first = after_start;
    while first < chars.len() && matches!(chars[first], '"' | '\'' | '(' | '[' | '\u{201C}') {
        first += 1;
    }

    SentenceContext {
        punctuation: chars[pos],
        word_before: before,
        next_raw: chars.get(pos + 1).copied(),
        char_after: chars.get(first).copied(),
        is_end_of_text: after_start >= chars.len(),
    }
}

fn get_word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;

    // Skip back past punctuation and whitespace
    while i > 0 {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    // Collect the word
    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn is_sentence_boundary(context: &SentenceContext, current_sentence: &str) -> bool {
    if context.is_end_of_text {
        return true;
    }

    // "?!", "..." and friends: the last terminator in the run decides
    if let Some(next) = context.next_raw {
        if is_sentence_terminator(next) {
            return false;
        }
        // Inside a token: 3.14, example.com, e.g
        if next.is_alphanumeric() {
            return false;
        }
    }

    if context.punctuation == '!' || context.punctuation == '?' {
        return true;
    }

    if current_sentence.ends_with("...") {
        return false;
    }

    if is_title(&context.word_before) || is_likely_initial(&context.word_before) {
        return false;
    }

    let next_is_upper = context.char_after.is_some_and(char::is_uppercase);

    if is_abbreviation(&context.word_before) {
        return next_is_upper;
    }

    // A lowercase continuation means the period was not terminal
    !context.char_after.is_some_and(char::is_lowercase)
}

fn is_likely_initial(word: &str) -> bool {
    let word = word.trim_end_matches('.');
    if word.chars().count() == 1 {
        return word.chars().next().is_some_and(char::is_uppercase);
    }
    INITIALS_PATTERN.is_match(word)
}
