// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two tokenizers, on purpose.
//!
//! The search index splits on every punctuation character, hyphens included,
//! so "stone-age" is indexed as `stone` and `age` and either word finds it.
//! The terms index keeps hyphenated words whole, because a suggestion list
//! that offers "multi" and "word" instead of "multi-word" reads badly.
//!
//! Term extraction also uses two character sets: one for splitting and a
//! narrower one for trimming token edges. Colons are never split on, only
//! trimmed from the edges of a token.

use crate::util::normalize_term;

/// Characters that separate terms in the terms index (besides whitespace).
pub const TERM_DELIMITERS: &[char] = &[
    ',', ';', '.', '(', ')', '"', '\'', '[', ']', '{', '}', '!', '?',
];

/// Characters stripped from the edges of an extracted term.
pub const TERM_EDGE_PUNCTUATION: &[char] = &['!', '?', '.', ':', ';', ',', '\''];

/// Split field text for the search index: whitespace and punctuation separate
/// tokens, and every token is normalized.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_search_separator)
        .filter(|s| !s.is_empty())
        .map(normalize_term)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract raw (not yet lowercased) terms for the terms index.
///
/// # Example
///
/// ```
/// use catalog_search::tokenize::extract_terms;
///
/// let terms = extract_terms("A multi-word (test), it's: done!");
/// assert_eq!(terms, vec!["A", "multi-word", "test", "it", "s", "done"]);
/// ```
pub fn extract_terms(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || TERM_DELIMITERS.contains(&c))
        .map(|term| term.trim_matches(|c: char| TERM_EDGE_PUNCTUATION.contains(&c)))
        .filter(|term| !term.is_empty())
        .collect()
}

fn is_search_separator(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || is_unicode_punctuation(c)
}

fn is_unicode_punctuation(c: char) -> bool {
    matches!(c,
        '\u{00A1}' | '\u{00A7}' | '\u{00AB}' | '\u{00B6}' | '\u{00B7}' | '\u{00BB}' | '\u{00BF}' |
        '\u{2010}'..='\u{2027}' |  // dashes, quotes, bullets, ellipsis
        '\u{2030}'..='\u{205E}' |  // per-mille, primes, misc punctuation
        '\u{3001}'..='\u{3003}' |  // CJK comma and full stops
        '\u{3008}'..='\u{3011}' |  // CJK brackets
        '\u{FF01}'..='\u{FF0F}'    // fullwidth ASCII punctuation
    )
}
