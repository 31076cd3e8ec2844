//! Term correction over non-code text.
//!
//! Wires the span protector, the whole-text code classifier, and the term
//! table together into the single rewrite entry point, [`fix_translation`].

use crate::{
    classify::looks_like_code,
    protect::{extract_protected_spans, restore_protected_spans},
    terms::TermMap,
};

/// Rewrites every known wrong term in `text` to its correct counterpart
/// without touching protected code regions.
///
/// Empty text and whole-text code blocks are returned unchanged. Otherwise
/// fenced blocks and inline code spans are replaced by placeholders, the
/// term table is applied longest-key-first as literal (non-regex) substring
/// replacements over the working copy, and the protected spans are restored
/// byte-identical at the end.
///
/// Longest-first ordering is what makes overlapping keys safe: a shorter key
/// applied first could corrupt a longer match before it is ever seen.
pub fn fix_translation(terms: &TermMap, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    if looks_like_code(text) {
        return text.to_string();
    }

    let (mut working, spans) = extract_protected_spans(text);

    for (wrong, correct) in terms.replacements() {
        if working.contains(wrong.as_str()) {
            working = working.replace(wrong.as_str(), correct);
        }
    }

    restore_protected_spans(&working, &spans)
}
