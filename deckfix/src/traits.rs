//! Seams to external collaborators.

use crate::error::Error;

/// A translation backend exposing a single text-to-text operation.
///
/// Retry, backoff, and rate limiting are entirely the implementation's
/// concern. The pipeline only inserts a fixed delay between calls and treats
/// any failure as non-fatal for the batch: the field keeps its pre-call
/// value and processing continues.
pub trait Translator {
    /// Translates `text` from the configured source language into the
    /// configured target language.
    fn translate(&self, text: &str) -> Result<String, Error>;
}
