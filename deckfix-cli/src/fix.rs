use deckfix::{Deck, Error, Schema, fix_deck};

use crate::load_terms;

#[derive(Debug, Clone)]
pub struct FixOptions {
    pub input: String,
    pub output: Option<String>,
    pub source_lang: String,
    pub target_lang: String,
    pub terms: Option<String>,
    pub json: bool,
}

pub fn run(options: FixOptions) -> Result<(), Error> {
    let terms = load_terms(options.terms.as_deref())?;
    let schema = Schema::for_languages(&options.source_lang, &options.target_lang);

    let mut deck = Deck::read_from(&options.input)?;
    let report = fix_deck(&mut deck, &terms, &schema)?;

    let output = options.output.as_deref().unwrap_or(&options.input);
    deck.write_to(output)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Done: {} rows processed ({} fields corrected, {} code rollbacks)",
            report.rows, report.changed, report.rollbacks
        );
        println!("Saved: {output}");
    }
    Ok(())
}
