//! Fixed rewrite tables for the heuristic explainer.
//!
//! Jargon pairs are applied in order, so a later key can rewrite text that an
//! earlier replacement produced. Keep new entries below any key whose output
//! they are meant to see.

/// Immutable set of tables the simplifier runs against.
#[derive(Debug, Clone, Copy)]
pub struct SimplifierRules<'a> {
    /// Ordered `(phrase, replacement)` pairs, all lowercase.
    pub jargon: &'a [(&'a str, &'a str)],
    /// Phrases deleted outright from each sentence, all lowercase.
    pub fillers: &'a [&'a str],
    /// Sentences with more words than this are cut down to this many.
    pub max_sentence_words: usize,
}

const JARGON: &[(&str, &str)] = &[
    ("utilize", "use"),
    ("leverage", "use"),
    ("in the event that", "if"),
    ("notwithstanding", "despite"),
    ("commence", "start"),
    ("terminate", "end"),
    ("endeavor", "try"),
    ("subsequent", "next"),
    ("prior to", "before"),
    ("pursuant to", "under"),
    ("facilitate", "help"),
    ("endeavour", "try"),
    ("approximately", "about"),
    ("modality", "way"),
    ("methodology", "method"),
    ("mitigate", "reduce"),
    ("ameliorate", "improve"),
    ("expedite", "speed up"),
    ("commensurate", "matching"),
    ("aforementioned", "mentioned above"),
    ("henceforth", "from now on"),
    ("therein", "in it"),
    ("thereof", "of it"),
    ("heretofore", "until now"),
];

const FILLERS: &[&str] = &[
    "it should be noted that",
    "for the avoidance of doubt",
    "in order to",
    "as per",
    "with respect to",
];

pub const MAX_SENTENCE_WORDS: usize = 24;

pub const DEFAULT_RULES: SimplifierRules<'static> = SimplifierRules {
    jargon: JARGON,
    fillers: FILLERS,
    max_sentence_words: MAX_SENTENCE_WORDS,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jargon_keys_are_unique() {
        for (i, (key, _)) in JARGON.iter().enumerate() {
            assert!(
                !JARGON[i + 1..].iter().any(|(other, _)| other == key),
                "duplicate jargon key '{key}'"
            );
        }
    }

    #[test]
    fn test_tables_are_lowercase() {
        for (key, replacement) in JARGON {
            assert_eq!(*key, key.to_lowercase());
            assert_eq!(*replacement, replacement.to_lowercase());
        }
        for filler in FILLERS {
            assert_eq!(*filler, filler.to_lowercase());
        }
    }

    #[test]
    fn test_default_rules_use_fixed_tables() {
        assert_eq!(DEFAULT_RULES.jargon.len(), 24);
        assert_eq!(DEFAULT_RULES.fillers.len(), 5);
        assert_eq!(DEFAULT_RULES.max_sentence_words, 24);
        assert_eq!(DEFAULT_RULES.jargon[0], ("utilize", "use"));
    }
}
