//! All error types for the deckfix crate.
//!
//! These are returned from all fallible operations (deck I/O, schema
//! resolution, term table loading, translation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing required column `{column}` (present columns: {present:?})")]
    MissingColumn {
        column: String,
        present: Vec<String>,
    },

    #[error("invalid terms file: {0}")]
    InvalidTerms(String),

    #[error("translation failed: {0}")]
    Translation(String),
}

impl Error {
    /// Creates a new translation error from any displayable cause.
    pub fn translation_error(message: impl Into<String>) -> Self {
        Error::Translation(message.into())
    }

    /// Creates a new invalid-terms error.
    pub fn invalid_terms(message: impl Into<String>) -> Self {
        Error::InvalidTerms(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_column_error() {
        let error = Error::MissingColumn {
            column: "question_ko".to_string(),
            present: vec!["question_en".to_string()],
        };
        let display = error.to_string();
        assert!(display.contains("question_ko"));
        assert!(display.contains("question_en"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_translation_error() {
        let error = Error::translation_error("connection reset");
        assert_eq!(error.to_string(), "translation failed: connection reset");
    }

    #[test]
    fn test_invalid_terms_error() {
        let error = Error::invalid_terms("not an object");
        assert_eq!(error.to_string(), "invalid terms file: not an object");
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ nope }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }
}
