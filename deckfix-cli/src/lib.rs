//! CLI library surface, exposed for integration tests.

pub mod fix;
pub mod preview;
pub mod retranslate;
pub mod translator;

pub use translator::PapagoTranslator;

use deckfix::{Error, TermMap};

/// Loads the built-in term table, or an external JSON table when a path is
/// given.
pub fn load_terms(path: Option<&str>) -> Result<TermMap, Error> {
    match path {
        Some(path) => TermMap::read_from(path),
        None => Ok(TermMap::builtin()),
    }
}
