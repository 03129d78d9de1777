//! Sentence and word tokenization.
//!
//! Scoring consumes text through the [`Tokenizer`] trait: an ordered list of
//! [`Sentence`]s, each an ordered list of [`Token`]s flagged as alphabetic or
//! not. [`RuleTokenizer`] is the built-in implementation; callers with a
//! better segmenter can plug in their own.

use serde::{Deserialize, Serialize};

use crate::text;

/// Contraction suffixes split off as separate tokens ("don't" -> "do", "n't").
const CONTRACTION_SUFFIXES: &[&str] = &["n't", "'s", "'re", "'ll", "'ve", "'d", "'m"];

/// A word-like unit of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token text as it appears in the input.
    pub text: String,
    /// `true` when the token is non-empty and made only of alphabetic characters.
    pub is_alpha: bool,
}

impl Token {
    /// Create a token, deriving the alphabetic flag from its text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self { text, is_alpha }
    }
}

/// An ordered sequence of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Tokens in reading order.
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Alphabetic tokens of this sentence, in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.is_alpha)
            .map(|t| t.text.as_str())
    }
}

/// Segments text into sentences of tokens.
///
/// Implementations must be deterministic: the same input always yields the
/// same sentences and tokens.
pub trait Tokenizer {
    /// Split `text` into sentences.
    fn tokenize(&self, text: &str) -> Vec<Sentence>;
}

/// Rule-based English tokenizer.
///
/// Sentences come from [`text::split_sentences`]. Within a sentence, words
/// are split on whitespace; leading and trailing punctuation, contraction
/// suffixes and joiners between words (hyphens, dashes, slashes, ellipses,
/// inner apostrophes) become tokens of their own.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTokenizer;

impl Tokenizer for RuleTokenizer {
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    fn tokenize(&self, text: &str) -> Vec<Sentence> {
        let sentences: Vec<Sentence> = text::split_sentences(text)
            .iter()
            .map(|s| Sentence {
                tokens: tokenize_words(s),
            })
            .collect();
        tracing::trace!(sentences = sentences.len(), "tokenized text");
        sentences
    }
}

/// Split one sentence into tokens.
pub fn tokenize_words(sentence: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for chunk in sentence.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }
    tokens
}

fn split_chunk(chunk: &str, tokens: &mut Vec<Token>) {
    let chars: Vec<char> = chunk.chars().collect();

    let mut start = 0;
    while start < chars.len() && !chars[start].is_alphanumeric() {
        tokens.push(Token::new(chars[start]));
        start += 1;
    }

    let mut end = chars.len();
    let mut trailing = Vec::new();
    while end > start && !chars[end - 1].is_alphanumeric() {
        trailing.push(Token::new(chars[end - 1]));
        end -= 1;
    }
    trailing.reverse();

    split_core(&chars[start..end], tokens);
    tokens.extend(trailing);
}

const fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

/// A lone period between word characters stays inside the word
/// ("3.14", "example.com", "a.m"); a run of periods is an ellipsis.
fn is_inner_period(chars: &[char], i: usize) -> bool {
    chars[i] == '.'
        && i > 0
        && chars[i - 1] != '.'
        && chars.get(i + 1).is_some_and(|&next| next != '.')
}

/// Split the inside of a chunk on dashes, slashes, ellipses and other
/// joiners. Each run of joiners becomes one token.
fn split_core(chars: &[char], tokens: &mut Vec<Token>) {
    let is_word_char = |i: usize| {
        chars[i].is_alphanumeric() || is_apostrophe(chars[i]) || is_inner_period(chars, i)
    };

    let mut i = 0;
    while i < chars.len() {
        let word_start = i;
        while i < chars.len() && is_word_char(i) {
            i += 1;
        }
        let word: String = chars[word_start..i].iter().collect();
        push_word(&word, tokens);

        let sep_start = i;
        while i < chars.len() && !is_word_char(i) {
            i += 1;
        }
        if i > sep_start {
            tokens.push(Token::new(chars[sep_start..i].iter().collect::<String>()));
        }
    }
}

/// Push a word, splitting off a contraction suffix and any other apostrophes.
fn push_word(word: &str, tokens: &mut Vec<Token>) {
    if word.is_empty() {
        return;
    }
    let (stem, suffix) = split_contraction(word);

    let mut part = String::new();
    for ch in stem.chars() {
        if is_apostrophe(ch) {
            if !part.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut part)));
            }
            tokens.push(Token::new(ch));
        } else {
            part.push(ch);
        }
    }
    if !part.is_empty() {
        tokens.push(Token::new(part));
    }

    if let Some(suffix) = suffix {
        tokens.push(Token::new(suffix));
    }
}

/// Separate a trailing contraction, ignoring case and accepting straight or
/// curly apostrophes.
fn split_contraction(word: &str) -> (&str, Option<&str>) {
    for suffix in CONTRACTION_SUFFIXES {
        let len = suffix.chars().count();
        let Some((at, _)) = word.char_indices().rev().nth(len - 1) else {
            continue;
        };
        if at == 0 {
            continue;
        }
        let tail = &word[at..];
        let matches = tail.chars().zip(suffix.chars()).all(|(actual, expected)| {
            actual.to_ascii_lowercase() == expected || (expected == '\'' && is_apostrophe(actual))
        });
        if matches {
            return (&word[..at], Some(tail));
        }
    }
    (word, None)
}
