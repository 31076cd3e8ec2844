use deckfix::{Deck, Error, Schema, preview_fixes};

use crate::load_terms;

#[derive(Debug, Clone)]
pub struct PreviewOptions {
    pub input: String,
    pub limit: usize,
    pub source_lang: String,
    pub target_lang: String,
    pub terms: Option<String>,
}

pub fn run(options: PreviewOptions) -> Result<(), Error> {
    let terms = load_terms(options.terms.as_deref())?;
    let schema = Schema::for_languages(&options.source_lang, &options.target_lang);

    let deck = Deck::read_from(&options.input)?;
    let report = preview_fixes(&deck, &terms, &schema, options.limit)?;

    for sample in &report.samples {
        println!("\n=== row {} ({}) ===", sample.row, sample.field);
        println!("before: {}", sample.before);
        println!("after:  {}", sample.after);
    }

    println!(
        "\n{} of {} rows would change.",
        report.changed_rows, report.rows
    );
    Ok(())
}
