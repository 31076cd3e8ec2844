//! Core types for deckfix: decks, records, schema binding, and run reports.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An ordered collection of bilingual card records together with the header
/// row that defines their schema.
///
/// Column names, column order, and row order are preserved exactly through a
/// processing pass: one record in, one record out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Column names in input order.
    pub headers: Vec<String>,

    /// All records, in input order.
    pub records: Vec<CardRecord>,
}

impl Deck {
    /// Returns the position of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Number of records in the deck.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A single card row. Values are positional and aligned with the deck
/// headers; columns the pipeline does not know about pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub values: Vec<String>,
}

impl CardRecord {
    /// Returns the value at a column index, or `""` for a short row.
    pub fn get(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or("")
    }

    /// Overwrites the value at a column index. Out-of-range indices are
    /// ignored rather than growing the row.
    pub fn set(&mut self, index: usize, value: String) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }
}

/// The four required column names, derived from the configured source and
/// target language codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub question_source: String,
    pub question_target: String,
    pub answer_source: String,
    pub answer_target: String,
}

impl Schema {
    /// Builds the column names for a (source, target) language pair, e.g.
    /// `("en", "ko")` gives `question_en` / `question_ko` / `answer_en` /
    /// `answer_ko`.
    pub fn for_languages(source: &str, target: &str) -> Self {
        Schema {
            question_source: format!("question_{source}"),
            question_target: format!("question_{target}"),
            answer_source: format!("answer_{source}"),
            answer_target: format!("answer_{target}"),
        }
    }

    /// Resolves the schema against a deck header once, before any row is
    /// processed. A missing required column is a fatal configuration error.
    pub fn resolve(&self, deck: &Deck) -> Result<ColumnSet, Error> {
        let find = |name: &str| {
            deck.column_index(name).ok_or_else(|| Error::MissingColumn {
                column: name.to_string(),
                present: deck.headers.clone(),
            })
        };
        Ok(ColumnSet {
            question_source: find(&self.question_source)?,
            question_target: find(&self.question_target)?,
            answer_source: find(&self.answer_source)?,
            answer_target: find(&self.answer_target)?,
        })
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::for_languages("en", "ko")
    }
}

/// Column indices of the required fields within one deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSet {
    pub question_source: usize,
    pub question_target: usize,
    pub answer_source: usize,
    pub answer_target: usize,
}

impl ColumnSet {
    /// The (source, target) index pairs in question-then-answer order.
    pub fn pairs(&self) -> [(usize, usize); 2] {
        [
            (self.question_source, self.question_target),
            (self.answer_source, self.answer_target),
        ]
    }
}

/// Counters accumulated by a correction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixReport {
    /// Rows processed.
    pub rows: usize,
    /// Target fields whose text changed.
    pub changed: usize,
    /// Target fields replaced verbatim by their source counterpart.
    pub rollbacks: usize,
}

/// Counters accumulated by a re-translation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RetranslateReport {
    /// Rows processed.
    pub rows: usize,
    /// Rows with at least one field re-translated.
    pub retranslated: usize,
    /// Collaborator failures recovered (field left unchanged).
    pub failures: usize,
}

/// Result of a dry-run preview: counts plus a bounded number of samples.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PreviewReport {
    /// Rows inspected.
    pub rows: usize,
    /// Rows that a correction pass would change.
    pub changed_rows: usize,
    /// Up to `limit` before/after samples.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub samples: Vec<DiffSample>,
}

/// One before/after field diff from a preview run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSample {
    /// 1-based row number.
    pub row: usize,
    /// Which field changed (`question` or `answer`).
    pub field: String,
    pub before: String,
    pub after: String,
}
