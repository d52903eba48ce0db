//! Heuristic explainer. Swaps jargon for plain words, drops filler phrases,
//! and cuts overly long sentences.
//!
//! Pure and deterministic: no I/O, no shared state.

use serde::{Deserialize, Serialize};

use crate::explain::rules::SimplifierRules;

pub const EMPTY_INPUT_MESSAGE: &str = "Please provide some text to explain.";
pub const LONG_SENTENCE_TIP: &str = "Long sentence shortened for clarity";

const SHORT_PREFIX: &str = "In simple terms: ";
const GIST_PREFIX: &str = "Here's the gist: ";

/// Unchanged text below this many words gets the short prefix.
const GIST_WORD_THRESHOLD: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub original: String,
    pub explanation: String,
    pub tips: Option<Vec<String>>,
}

/// Simplifies `text` against `rules`.
///
/// Whitespace-only input is not an error: it yields a guidance message and
/// echoes the input back untrimmed.
pub fn explain(text: &str, rules: &SimplifierRules) -> ExplainResponse {
    let original = text.trim();
    if original.is_empty() {
        return ExplainResponse {
            original: text.to_string(),
            explanation: EMPTY_INPUT_MESSAGE.to_string(),
            tips: None,
        };
    }

    let simplified = replace_jargon(original, rules.jargon);

    let mut tips = Vec::new();
    let mut sentences = Vec::new();
    for sentence in split_sentences(&simplified) {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            continue;
        }
        let sentence = remove_fillers(sentence, rules.fillers);
        let words: Vec<&str> = sentence.split_whitespace().collect();
        if words.len() > rules.max_sentence_words {
            tips.push(LONG_SENTENCE_TIP.to_string());
            sentences.push(format!(
                "{}…",
                words[..rules.max_sentence_words].join(" ")
            ));
        } else {
            sentences.push(sentence);
        }
    }

    let mut explanation = sentences.join(" ");
    if explanation == original {
        let prefix = if explanation.split_whitespace().count() < GIST_WORD_THRESHOLD {
            SHORT_PREFIX
        } else {
            GIST_PREFIX
        };
        explanation.insert_str(0, prefix);
    }

    ExplainResponse {
        original: original.to_string(),
        explanation,
        tips: if tips.is_empty() { None } else { Some(tips) },
    }
}

/// Applies each pair in order, lowercase form first, then the capitalized
/// form. Every pass sees the output of the previous one.
fn replace_jargon(text: &str, jargon: &[(&str, &str)]) -> String {
    let mut simplified = text.to_string();
    for (phrase, replacement) in jargon {
        simplified = simplified
            .replace(phrase, replacement)
            .replace(&capitalize(phrase), &capitalize(replacement));
    }
    simplified
}

/// Deletes fillers without tidying the whitespace they leave behind.
fn remove_fillers(sentence: &str, fillers: &[&str]) -> String {
    let mut cleaned = sentence.to_string();
    for filler in fillers {
        cleaned = cleaned.replace(filler, "").replace(&capitalize(filler), "");
    }
    cleaned
}

/// Splits on whitespace runs that directly follow `.`, `!` or `?`.
/// Punctuation stays with its sentence; the whitespace run is dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            let mut end = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = j + next.len_utf8();
                chars.next();
            }
            sentences.push(&text[start..i]);
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }
    sentences.push(&text[start..]);
    sentences
}

/// Uppercases the first character, leaving the rest as-is.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
