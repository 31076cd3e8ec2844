//! Heuristic text classifiers.
//!
//! Four independent predicates over plain strings:
//!
//! - [`looks_like_code`] — the whole block is code/pseudocode and must not
//!   be touched by term correction.
//! - [`is_translated_code`] — the block is code whose keywords were
//!   translated word-by-word into Korean while the punctuation survived.
//! - [`is_english_heavy`] — a "translated" field is still overwhelmingly
//!   source-language text.
//! - [`is_code_content`] — the text contains code somewhere (weaker signal
//!   for short fields).
//!
//! All detection is line/token based; nothing here parses code
//! syntactically. Empty input is never code.

use lazy_static::lazy_static;
use regex::Regex;

/// Minimum non-empty lines before the code-line ratio is trusted.
const MIN_RATIO_LINES: usize = 3;

/// Share of code-looking lines at which a multi-line block counts as code.
const CODE_LINE_RATIO: f64 = 0.5;

/// Minimum non-whitespace characters before English-heaviness is judged.
const MIN_ENGLISH_HEAVY_LEN: usize = 20;

/// ASCII-letter share above which a target field counts as untranslated.
const ENGLISH_HEAVY_RATIO: f64 = 0.7;

/// Distinct weak indicators required for a code-content verdict.
const WEAK_INDICATOR_THRESHOLD: usize = 2;

lazy_static! {
    /// Per-line code signal: declaration/control-flow keywords, structural
    /// symbols, or comparison/arrow operators.
    static ref CODE_SIGNAL_REGEX: Regex = Regex::new(
        r"\b(def|class|for|while|if|else|elif|return|try|except|switch|case|break|continue|public|private|protected|static|void|int|long|double|float|new)\b|[{}();=\[\]]|==|!=|<=|>=|->|=>"
    )
    .unwrap();
}

/// Punctuation that translated prose has no reason to contain. At least one
/// must be present before a mistranslated-code verdict is possible. The
/// spaced comparison operators cover conditionals whose assignment-free
/// guards (`x > 0`) survive translation.
const CODE_SYNTAX_MARKERS: &[&str] = &["()", "{}", "[]", "= ", ";", "->", "> ", "< "];

/// Korean renderings of code keywords produced by word-by-word translation:
/// if/else, return, range, row/col assignments, True/False/None, while/for,
/// class/function, import/from, try/except, len/print/input.
const TRANSLATED_CODE_KEYWORDS: &[&str] = &[
    "만약 ",
    "만약(",
    "그렇지 않으면",
    "반환 ",
    "반환(",
    "범위(",
    "범위 (",
    "의 범위",
    "행 =",
    "열 =",
    "참:",
    "거짓:",
    "없음:",
    "없음)",
    "없음,",
    "동안 ",
    "동안(",
    "위해 ",
    "클래스 ",
    "함수 ",
    "가져오기 ",
    "에서 ",
    "시도:",
    "예외:",
    "길이(",
    "인쇄(",
    "입력(",
];

/// Punctuation pairs unambiguous in prose; any one is enough.
const STRONG_CODE_INDICATORS: &[&str] = &["{", "}", "();", "->", "=>", "==", "!=", "&&", "||"];

/// Declaration keywords and method-call fragments; two distinct ones are
/// required.
const WEAK_CODE_INDICATORS: &[&str] = &[
    "void ", "int ", "return ", "if (", "for (", "while (", "def ", "class ", "function ",
    "const ", "let ", "var ", "public ", "private ", "static ", "import ", "from ", "= new ",
    ".get(", ".set(", ".add(",
];

/// Whether an entire text block should be treated as code/pseudocode and
/// left untouched by terminology correction.
///
/// A fence delimiter anywhere settles it immediately. Otherwise the verdict
/// is a per-line ratio: at least `MIN_RATIO_LINES` non-empty lines with
/// `CODE_LINE_RATIO` of them matching the code signal, or a single
/// non-empty line matching it. Short prose legitimately contains the odd
/// brace or semicolon, hence the minimum-line guard.
pub fn looks_like_code(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if text.contains("```") {
        return true;
    }

    let mut total_lines = 0usize;
    let mut code_like_lines = 0usize;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        total_lines += 1;
        if CODE_SIGNAL_REGEX.is_match(line) {
            code_like_lines += 1;
        }
    }

    if total_lines >= MIN_RATIO_LINES
        && (code_like_lines as f64) / (total_lines as f64) >= CODE_LINE_RATIO
    {
        return true;
    }

    total_lines == 1 && CODE_SIGNAL_REGEX.is_match(text)
}

/// Whether a target-language text looks like source code that was
/// incorrectly translated word-by-word: structural punctuation from the
/// original code remains, intermixed with Korean keyword translations.
///
/// Recall-oriented. A false positive merely rolls a correct but
/// oddly-phrased translation back to the source text; a false negative
/// leaves corrupted code in the deck.
pub fn is_translated_code(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if !CODE_SYNTAX_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
    {
        return false;
    }
    TRANSLATED_CODE_KEYWORDS
        .iter()
        .any(|keyword| text.contains(keyword))
}

/// Whether a "translated" field is still overwhelmingly source-language
/// text, i.e. the translation step silently failed.
///
/// A proxy for "no target-language script present", not language
/// identification: the ASCII-letter share of the non-whitespace characters
/// must exceed `ENGLISH_HEAVY_RATIO` over at least
/// `MIN_ENGLISH_HEAVY_LEN` characters. Code fragments and proper nouns
/// embedded in a genuine translation rarely dominate a long field.
pub fn is_english_heavy(text: &str) -> bool {
    let mut letters = 0usize;
    let mut total = 0usize;
    for ch in text.chars() {
        if ch.is_whitespace() {
            continue;
        }
        total += 1;
        if ch.is_ascii_alphabetic() {
            letters += 1;
        }
    }
    total >= MIN_ENGLISH_HEAVY_LEN && (letters as f64) / (total as f64) > ENGLISH_HEAVY_RATIO
}

/// Whether a text of any length contains code.
///
/// Two-tier signal: any strong indicator decides immediately; otherwise at
/// least `WEAK_INDICATOR_THRESHOLD` distinct weak indicators must be
/// present. Used where [`looks_like_code`] would be too strict, e.g. a
/// single short answer field.
pub fn is_code_content(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if STRONG_CODE_INDICATORS
        .iter()
        .any(|indicator| text.contains(indicator))
    {
        return true;
    }
    let weak = WEAK_CODE_INDICATORS
        .iter()
        .filter(|indicator| text.contains(*indicator))
        .count();
    weak >= WEAK_INDICATOR_THRESHOLD
}
