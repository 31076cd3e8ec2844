use std::time::Duration;

use deckfix::{Deck, Error, Schema, retranslate_missing};

use crate::{load_terms, translator::PapagoTranslator};

#[derive(Debug, Clone)]
pub struct RetranslateOptions {
    pub input: String,
    pub output: Option<String>,
    pub delay: f64,
    pub limit: Option<usize>,
    pub source_lang: String,
    pub target_lang: String,
    pub terms: Option<String>,
    pub json: bool,
}

pub fn run(options: RetranslateOptions) -> Result<(), Error> {
    let terms = load_terms(options.terms.as_deref())?;
    let schema = Schema::for_languages(&options.source_lang, &options.target_lang);
    let translator = PapagoTranslator::new(&options.source_lang, &options.target_lang)?;

    let mut deck = Deck::read_from(&options.input)?;
    let report = retranslate_missing(
        &mut deck,
        &terms,
        &schema,
        &translator,
        Duration::from_secs_f64(options.delay),
        options.limit,
    )?;

    let output = options.output.as_deref().unwrap_or(&options.input);
    deck.write_to(output)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Done: {} rows processed ({} re-translated, {} failures)",
            report.rows, report.retranslated, report.failures
        );
        println!("Saved: {output}");
    }
    Ok(())
}
