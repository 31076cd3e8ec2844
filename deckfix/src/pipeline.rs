//! Row decision pipeline.
//!
//! Composes the classifiers and the term correction engine per record field:
//! roll a mistranslated-code field back to its source text, leave whole-text
//! code untouched, correct terminology everywhere else, and optionally
//! re-translate fields the translation pass silently skipped.

use std::{thread, time::Duration};

use log::{info, warn};

use crate::{
    classify::{is_code_content, is_english_heavy, is_translated_code},
    correct::fix_translation,
    error::Error,
    protect::{extract_protected_spans, restore_protected_spans},
    terms::TermMap,
    traits::Translator,
    types::{Deck, DiffSample, FixReport, PreviewReport, RetranslateReport, Schema},
};

/// Snippets shorter than this that are mostly code are not worth
/// translating at all.
const SHORT_SNIPPET_LEN: usize = 500;

/// Truncation width (in chars) for preview samples.
const PREVIEW_WIDTH: usize = 120;

/// Applies the correction pass to every record in place.
///
/// Per (source, target) field pair: if the target looks like word-by-word
/// translated code and a non-empty source exists, the target is replaced by
/// the source verbatim and no term correction runs on it; otherwise the
/// target goes through [`fix_translation`], which itself leaves whole-text
/// code untouched.
pub fn fix_deck(deck: &mut Deck, terms: &TermMap, schema: &Schema) -> Result<FixReport, Error> {
    let columns = schema.resolve(deck)?;
    let mut report = FixReport::default();

    for record in &mut deck.records {
        report.rows += 1;
        for (source_idx, target_idx) in columns.pairs() {
            let source = record.get(source_idx).to_string();
            let target = record.get(target_idx).to_string();

            if is_translated_code(&target) && !source.is_empty() {
                record.set(target_idx, source.clone());
                report.rollbacks += 1;
                if source != target {
                    report.changed += 1;
                }
            } else {
                let fixed = fix_translation(terms, &target);
                if fixed != target {
                    report.changed += 1;
                }
                record.set(target_idx, fixed);
            }
        }
    }

    Ok(report)
}

/// Computes the same per-field decisions as [`fix_deck`] without mutating
/// anything, collecting up to `limit` before/after samples.
pub fn preview_fixes(
    deck: &Deck,
    terms: &TermMap,
    schema: &Schema,
    limit: usize,
) -> Result<PreviewReport, Error> {
    let columns = schema.resolve(deck)?;
    let mut report = PreviewReport::default();

    for (row, record) in deck.records.iter().enumerate() {
        report.rows += 1;
        let mut row_changed = false;

        let fields = [
            ("question", columns.question_source, columns.question_target),
            ("answer", columns.answer_source, columns.answer_target),
        ];
        for (label, source_idx, target_idx) in fields {
            let source = record.get(source_idx);
            let before = record.get(target_idx);

            let after = if is_translated_code(before) && !source.is_empty() {
                source.to_string()
            } else {
                fix_translation(terms, before)
            };

            if after != before {
                row_changed = true;
                if report.samples.len() < limit {
                    report.samples.push(DiffSample {
                        row: row + 1,
                        field: label.to_string(),
                        before: truncate_chars(before, PREVIEW_WIDTH),
                        after: truncate_chars(&after, PREVIEW_WIDTH),
                    });
                }
            }
        }

        if row_changed {
            report.changed_rows += 1;
        }
    }

    Ok(report)
}

/// Re-translates fields the original translation pass left untouched, then
/// runs term correction over both target fields of every row.
///
/// A field qualifies for re-translation when its source counterpart is
/// non-empty, the target is still English-heavy, and the target equals the
/// source verbatim; answer fields additionally require the source not to be
/// code content. A fixed `delay` is honored after every collaborator call.
/// Collaborator failures are logged and counted; the field keeps its
/// pre-call value and the batch continues. `limit` bounds how many rows may
/// be re-translated (`None` means all).
pub fn retranslate_missing<T: Translator + ?Sized>(
    deck: &mut Deck,
    terms: &TermMap,
    schema: &Schema,
    translator: &T,
    delay: Duration,
    limit: Option<usize>,
) -> Result<RetranslateReport, Error> {
    let columns = schema.resolve(deck)?;
    let mut report = RetranslateReport::default();
    let total = deck.len();

    for (row, record) in deck.records.iter_mut().enumerate() {
        report.rows += 1;
        let mut row_retranslated = false;

        let under_limit = limit.is_none_or(|max| report.retranslated < max);
        if under_limit {
            let question_source = record.get(columns.question_source).to_string();
            let question_target = record.get(columns.question_target).to_string();
            if needs_retranslation(&question_source, &question_target, false) {
                info!("[{}/{}] re-translating question", row + 1, total);
                match translate_preserving_code(translator, &question_source) {
                    Ok(replacement) => {
                        record.set(columns.question_target, replacement);
                        row_retranslated = true;
                        thread::sleep(delay);
                    }
                    Err(err) => {
                        warn!("row {}: question re-translation failed: {err}", row + 1);
                        report.failures += 1;
                    }
                }
            }

            let answer_source = record.get(columns.answer_source).to_string();
            let answer_target = record.get(columns.answer_target).to_string();
            if needs_retranslation(&answer_source, &answer_target, true) {
                info!("[{}/{}] re-translating answer", row + 1, total);
                match translate_preserving_code(translator, &answer_source) {
                    Ok(replacement) => {
                        record.set(columns.answer_target, replacement);
                        row_retranslated = true;
                        thread::sleep(delay);
                    }
                    Err(err) => {
                        warn!("row {}: answer re-translation failed: {err}", row + 1);
                        report.failures += 1;
                    }
                }
            }
        }

        if row_retranslated {
            report.retranslated += 1;
        }

        // Term cleanup applies to every row, re-translated or not.
        for target_idx in [columns.question_target, columns.answer_target] {
            let value = record.get(target_idx).to_string();
            record.set(target_idx, fix_translation(terms, &value));
        }
    }

    Ok(report)
}

fn needs_retranslation(source: &str, target: &str, skip_code_source: bool) -> bool {
    !source.is_empty()
        && target == source
        && is_english_heavy(target)
        && !(skip_code_source && is_code_content(source))
}

/// Translates `text` while keeping code regions intact.
///
/// Short snippets that are mostly code are returned unchanged without
/// calling the collaborator. Otherwise fenced blocks and inline spans are
/// protected, the working text goes through the collaborator, and the
/// original spans are restored into the result.
pub fn translate_preserving_code<T: Translator + ?Sized>(
    translator: &T,
    text: &str,
) -> Result<String, Error> {
    if text.is_empty() {
        return Ok(String::new());
    }

    if is_code_content(text) && text.chars().count() < SHORT_SNIPPET_LEN {
        let lines: Vec<&str> = text.lines().collect();
        let code_lines = lines.iter().filter(|line| is_code_content(line)).count();
        if code_lines * 2 > lines.len() {
            return Ok(text.to_string());
        }
    }

    let (working, spans) = extract_protected_spans(text);
    let translated = translator.translate(&working)?;
    Ok(restore_protected_spans(&translated, &spans))
}

fn truncate_chars(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardRecord;

    fn deck_with_rows(rows: &[[&str; 5]]) -> Deck {
        Deck {
            headers: vec![
                "question_en".to_string(),
                "question_ko".to_string(),
                "answer_en".to_string(),
                "answer_ko".to_string(),
                "category".to_string(),
            ],
            records: rows
                .iter()
                .map(|row| CardRecord {
                    values: row.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        }
    }

    struct EchoTranslator;

    impl Translator for EchoTranslator {
        fn translate(&self, text: &str) -> Result<String, Error> {
            Ok(format!("번역됨: {text}"))
        }
    }

    struct FailingTranslator;

    impl Translator for FailingTranslator {
        fn translate(&self, _text: &str) -> Result<String, Error> {
            Err(Error::translation_error("socket closed"))
        }
    }

    #[test]
    fn test_fix_deck_rolls_back_translated_code() {
        let mut deck = deck_with_rows(&[[
            "What does this do?",
            "이것은 무엇을 하나요?",
            "if x > 0: return True",
            "만약 x > 0: 반환 참",
            "CS",
        ]]);
        let report = fix_deck(&mut deck, &TermMap::builtin(), &Schema::default()).unwrap();
        assert_eq!(report.rollbacks, 1);
        assert_eq!(deck.records[0].get(3), "if x > 0: return True");
    }

    #[test]
    fn test_fix_deck_no_rollback_without_source() {
        let mut deck = deck_with_rows(&[["Q", "질문", "", "만약 x > 0: 반환 참", "CS"]]);
        let report = fix_deck(&mut deck, &TermMap::builtin(), &Schema::default()).unwrap();
        assert_eq!(report.rollbacks, 0);
        assert_eq!(deck.records[0].get(3), "만약 x > 0: 반환 참");
    }

    #[test]
    fn test_fix_deck_corrects_terms_and_counts_rows() {
        let mut deck = deck_with_rows(&[
            ["Q1", "해시맵을 사용한다", "A1", "괜찮은 답변입니다", "CS"],
            ["Q2", "정상 질문", "A2", "정상 답변", "CS"],
        ]);
        let report = fix_deck(&mut deck, &TermMap::builtin(), &Schema::default()).unwrap();
        assert_eq!(report.rows, 2);
        assert_eq!(report.changed, 1);
        assert_eq!(deck.records[0].get(1), "HashMap을 사용한다");
        assert_eq!(deck.records[1].get(1), "정상 질문");
    }

    #[test]
    fn test_fix_deck_preserves_passthrough_fields() {
        let mut deck = deck_with_rows(&[["Q", "질문", "A", "답변", "네트워크"]]);
        fix_deck(&mut deck, &TermMap::builtin(), &Schema::default()).unwrap();
        assert_eq!(deck.records[0].get(0), "Q");
        assert_eq!(deck.records[0].get(2), "A");
        assert_eq!(deck.records[0].get(4), "네트워크");
    }

    #[test]
    fn test_fix_deck_missing_column_fails_before_processing() {
        let mut deck = deck_with_rows(&[["Q", "질문", "A", "답변", "CS"]]);
        deck.headers[1] = "question_jp".to_string();
        let result = fix_deck(&mut deck, &TermMap::builtin(), &Schema::default());
        assert!(matches!(result, Err(Error::MissingColumn { .. })));
        // Nothing was touched.
        assert_eq!(deck.records[0].get(1), "질문");
    }

    #[test]
    fn test_preview_reports_without_mutating() {
        let deck = deck_with_rows(&[["Q", "해시맵을 사용한다", "A", "답변", "CS"]]);
        let report = preview_fixes(&deck, &TermMap::builtin(), &Schema::default(), 10).unwrap();
        assert_eq!(report.changed_rows, 1);
        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].field, "question");
        assert_eq!(report.samples[0].after, "HashMap을 사용한다");
        assert_eq!(deck.records[0].get(1), "해시맵을 사용한다");
    }

    #[test]
    fn test_preview_limit_bounds_samples_not_counts() {
        let deck = deck_with_rows(&[
            ["Q1", "해시맵 하나", "A1", "답변", "CS"],
            ["Q2", "해시맵 둘", "A2", "답변", "CS"],
            ["Q3", "해시맵 셋", "A3", "답변", "CS"],
        ]);
        let report = preview_fixes(&deck, &TermMap::builtin(), &Schema::default(), 2).unwrap();
        assert_eq!(report.changed_rows, 3);
        assert_eq!(report.samples.len(), 2);
    }

    #[test]
    fn test_retranslate_english_heavy_identical_field() {
        let source = "A binary search tree is a node-based structure for ordered data.";
        let mut deck = deck_with_rows(&[[source, source, "답", "답", "CS"]]);
        let terms = TermMap::from_pairs(Vec::<(&str, &str)>::new());
        let report = retranslate_missing(
            &mut deck,
            &terms,
            &Schema::default(),
            &EchoTranslator,
            Duration::ZERO,
            None,
        )
        .unwrap();
        assert_eq!(report.retranslated, 1);
        assert_eq!(report.failures, 0);
        assert_eq!(deck.records[0].get(1), format!("번역됨: {source}"));
        // Answer was already Korean and identical-to-source checks failed.
        assert_eq!(deck.records[0].get(3), "답");
    }

    #[test]
    fn test_retranslate_skips_code_answers() {
        let code = "int count = 0; return count + accumulatedValue;";
        let mut deck = deck_with_rows(&[["Q", "질문", code, code, "CS"]]);
        let terms = TermMap::from_pairs(Vec::<(&str, &str)>::new());
        let report = retranslate_missing(
            &mut deck,
            &terms,
            &Schema::default(),
            &EchoTranslator,
            Duration::ZERO,
            None,
        )
        .unwrap();
        assert_eq!(report.retranslated, 0);
        assert_eq!(deck.records[0].get(3), code);
    }

    #[test]
    fn test_retranslate_failure_keeps_value_and_continues() {
        let source = "Explain the difference between processes and threads in detail.";
        let mut deck = deck_with_rows(&[
            [source, source, "답", "답", "CS"],
            ["Q2", "해시맵 설명", "A2", "답2", "CS"],
        ]);
        let report = retranslate_missing(
            &mut deck,
            &TermMap::builtin(),
            &Schema::default(),
            &FailingTranslator,
            Duration::ZERO,
            None,
        )
        .unwrap();
        assert_eq!(report.retranslated, 0);
        assert_eq!(report.failures, 1);
        assert_eq!(deck.records[0].get(1), source);
        // The rest of the batch still got term correction.
        assert_eq!(deck.records[1].get(1), "HashMap 설명");
    }

    #[test]
    fn test_retranslate_limit_bounds_rows() {
        let s1 = "First untranslated question about distributed consensus algorithms.";
        let s2 = "Second untranslated question about database index structures here.";
        let mut deck = deck_with_rows(&[[s1, s1, "답", "답", "CS"], [s2, s2, "답", "답", "CS"]]);
        let terms = TermMap::from_pairs(Vec::<(&str, &str)>::new());
        let report = retranslate_missing(
            &mut deck,
            &terms,
            &Schema::default(),
            &EchoTranslator,
            Duration::ZERO,
            Some(1),
        )
        .unwrap();
        assert_eq!(report.retranslated, 1);
        assert_eq!(deck.records[0].get(1), format!("번역됨: {s1}"));
        assert_eq!(deck.records[1].get(1), s2);
    }

    #[test]
    fn test_retranslate_applies_term_cleanup_to_all_rows() {
        let mut deck = deck_with_rows(&[["Q", "레디스 캐시", "A", "도커 컨테이너", "CS"]]);
        let report = retranslate_missing(
            &mut deck,
            &TermMap::builtin(),
            &Schema::default(),
            &EchoTranslator,
            Duration::ZERO,
            None,
        )
        .unwrap();
        assert_eq!(report.retranslated, 0);
        assert_eq!(deck.records[0].get(1), "Redis 캐시");
        assert_eq!(deck.records[0].get(3), "Docker 컨테이너");
    }

    #[test]
    fn test_translate_preserving_code_restores_spans() {
        let text = "Use `HashMap` for lookups";
        let result = translate_preserving_code(&EchoTranslator, text).unwrap();
        assert_eq!(result, "번역됨: Use `HashMap` for lookups");
    }

    #[test]
    fn test_translate_preserving_code_skips_short_code() {
        let text = "if (x == 0) { return; }\nwhile (ready()) { poll(); }";
        let result = translate_preserving_code(&EchoTranslator, text).unwrap();
        assert_eq!(result, text);
    }

    #[test]
    fn test_translate_preserving_code_empty_is_noop() {
        let result = translate_preserving_code(&FailingTranslator, "").unwrap();
        assert_eq!(result, "");
    }
}
