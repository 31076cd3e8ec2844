#![forbid(unsafe_code)]
//! Post-processing toolkit for machine-translated bilingual flashcard decks.
//!
//! An automated translation pass over a flashcard corpus leaves three kinds
//! of damage behind: technical terms rendered phonetically or literally
//! (해시맵 for `HashMap`), source code translated word-by-word into the
//! target language, and fields the translator silently skipped. This crate
//! decides, per text field, whether to keep the translated text, correct its
//! terminology, or roll back to the original source-language text — without
//! ever touching code regions.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use deckfix::{Deck, Schema, TermMap, fix_deck};
//!
//! let mut deck = Deck::read_from("cards_translated.csv")?;
//! let report = fix_deck(&mut deck, &TermMap::builtin(), &Schema::default())?;
//! deck.write_to("cards_fixed.csv")?;
//! println!("{} rows, {} rollbacks", report.rows, report.rollbacks);
//! # Ok::<(), deckfix::Error>(())
//! ```
//!
//! # Components
//!
//! - [`protect`] — isolates fenced blocks and inline code spans behind
//!   placeholders so rewriting passes cannot mutate them.
//! - [`classify`] — heuristic predicates: whole-text code, mistranslated
//!   code, English-heavy fields, partial code content.
//! - [`terms`] / [`correct`] — the ordered wrong→correct term table and the
//!   protected substitution pass over non-code text.
//! - [`pipeline`] — per-record decisions (keep / correct / roll back) plus
//!   the re-translation sub-pipeline driven by a [`Translator`]
//!   collaborator.
//! - [`formats`] — CSV deck I/O with byte-for-byte schema preservation.
//!
//! All classification is heuristic and line/token based; nothing here parses
//! code syntactically, and no guarantee is made about the linguistic quality
//! of the target-language text.

pub mod classify;
pub mod correct;
pub mod error;
pub mod formats;
pub mod pipeline;
pub mod protect;
pub mod terms;
pub mod traits;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    classify::{is_code_content, is_english_heavy, is_translated_code, looks_like_code},
    correct::fix_translation,
    error::Error,
    pipeline::{fix_deck, preview_fixes, retranslate_missing, translate_preserving_code},
    terms::TermMap,
    traits::Translator,
    types::{
        CardRecord, Deck, DiffSample, FixReport, PreviewReport, RetranslateReport, Schema,
    },
};
