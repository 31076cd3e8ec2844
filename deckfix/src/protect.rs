//! Code span protection.
//!
//! Isolates fenced code blocks and inline code spans behind positional
//! placeholder tokens so later rewriting passes cannot mutate them, and
//! restores the original spans afterwards. Extraction and restoration are a
//! pure two-pass pair: `extract_protected_spans` returns the working text
//! plus the ordered span list, `restore_protected_spans` consumes them.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A triple-backtick pair and everything between, newlines included.
    static ref CODE_FENCE_REGEX: Regex = Regex::new(r"(?s)```.*?```").unwrap();
    /// Backtick-delimited span with no embedded newline.
    static ref INLINE_CODE_REGEX: Regex = Regex::new(r"`[^`\n]+`").unwrap();
}

/// Placeholder for the span at `index`. Opaque to term correction: it
/// contains no characters that occur in any term key.
fn placeholder(index: usize) -> String {
    format!("__PROTECTED_{index}__")
}

/// Replaces every fenced code block and every inline code span with a unique
/// placeholder and returns the working text plus the removed spans in
/// occurrence order.
///
/// Fences are matched before inline spans so a fence's internal backticks
/// are never matched a second time. Unbalanced backticks simply fail to
/// match and the text passes through unprotected.
pub fn extract_protected_spans(text: &str) -> (String, Vec<String>) {
    let mut spans = Vec::new();
    let working = protect_matches(&CODE_FENCE_REGEX, text, &mut spans);
    let working = protect_matches(&INLINE_CODE_REGEX, &working, &mut spans);
    (working, spans)
}

fn protect_matches(pattern: &Regex, text: &str, spans: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for matched in pattern.find_iter(text) {
        out.push_str(&text[last..matched.start()]);
        out.push_str(&placeholder(spans.len()));
        spans.push(matched.as_str().to_string());
        last = matched.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Substitutes each placeholder back with its original span. Every
/// placeholder is restored exactly once and the restored content is not
/// transformed further.
///
/// Restoration runs highest index first: a span whose content happens to
/// look like a lower-numbered placeholder must not be rescanned after it has
/// been put back.
pub fn restore_protected_spans(text: &str, spans: &[String]) -> String {
    let mut restored = text.to_string();
    for (index, span) in spans.iter().enumerate().rev() {
        restored = restored.replacen(&placeholder(index), span, 1);
    }
    restored
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_fence_is_protected_and_restored() {
        let text = "설명 ```if (x) { y(); }``` 끝";
        let (working, spans) = extract_protected_spans(text);
        assert_eq!(working, "설명 __PROTECTED_0__ 끝");
        assert_eq!(spans, vec!["```if (x) { y(); }```".to_string()]);
        assert_eq!(restore_protected_spans(&working, &spans), text);
    }

    #[test]
    fn test_multiline_fence_is_one_span() {
        let text = indoc! {"
            before
            ```
            for i in range(10):
                print(i)
            ```
            after"};
        let (working, spans) = extract_protected_spans(text);
        assert_eq!(spans.len(), 1);
        assert!(!working.contains("```"));
        assert_eq!(restore_protected_spans(&working, &spans), text);
    }

    #[test]
    fn test_inline_code_is_protected() {
        let text = "자바의 `HashMap` 클래스";
        let (working, spans) = extract_protected_spans(text);
        assert_eq!(working, "자바의 __PROTECTED_0__ 클래스");
        assert_eq!(spans, vec!["`HashMap`".to_string()]);
    }

    #[test]
    fn test_fence_matched_before_inline() {
        // The fence's own backticks must not be re-matched as inline spans.
        let text = "```a``` 그리고 `b`";
        let (working, spans) = extract_protected_spans(text);
        assert_eq!(spans, vec!["```a```".to_string(), "`b`".to_string()]);
        assert_eq!(working, "__PROTECTED_0__ 그리고 __PROTECTED_1__");
        assert_eq!(restore_protected_spans(&working, &spans), text);
    }

    #[test]
    fn test_unmatched_backtick_degrades_to_no_protection() {
        let text = "짝이 맞지 않는 ` 백틱";
        let (working, spans) = extract_protected_spans(text);
        assert_eq!(working, text);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_inline_span_does_not_cross_newlines() {
        let text = "`first\nsecond`";
        let (working, spans) = extract_protected_spans(text);
        assert_eq!(working, text);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_multiple_spans_keep_occurrence_order() {
        let text = "`a` 다음 `b` 다음 `c`";
        let (working, spans) = extract_protected_spans(text);
        assert_eq!(
            spans,
            vec!["`a`".to_string(), "`b`".to_string(), "`c`".to_string()]
        );
        assert_eq!(restore_protected_spans(&working, &spans), text);
    }

    #[test]
    fn test_empty_text() {
        let (working, spans) = extract_protected_spans("");
        assert_eq!(working, "");
        assert!(spans.is_empty());
    }

    #[test]
    fn test_restore_does_not_retrigger_on_restored_content() {
        // A span whose content looks like a placeholder must restore cleanly.
        let text = "x `__PROTECTED_1__` y `z`";
        let (working, spans) = extract_protected_spans(text);
        assert_eq!(restore_protected_spans(&working, &spans), text);
    }
}
