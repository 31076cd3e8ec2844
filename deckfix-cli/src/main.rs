use clap::{Parser, Subcommand};

use deckfix_cli::{fix, preview, retranslate};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply terminology corrections and code rollbacks, then rewrite the deck.
    Fix {
        /// The input CSV to process
        #[arg(short, long)]
        input: String,

        /// The output CSV (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<String>,

        /// Source language code used in column names
        #[arg(long, default_value = "en")]
        source_lang: String,

        /// Target language code used in column names
        #[arg(long, default_value = "ko")]
        target_lang: String,

        /// JSON file of wrong->correct term mappings replacing the built-in table
        #[arg(long)]
        terms: Option<String>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show before/after diffs without writing anything.
    Preview {
        /// The input CSV to inspect
        #[arg(short, long)]
        input: String,

        /// Maximum number of diffs to print
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Source language code used in column names
        #[arg(long, default_value = "en")]
        source_lang: String,

        /// Target language code used in column names
        #[arg(long, default_value = "ko")]
        target_lang: String,

        /// JSON file of wrong->correct term mappings replacing the built-in table
        #[arg(long)]
        terms: Option<String>,
    },

    /// Re-translate fields the translation pass left untouched.
    Retranslate {
        /// The input CSV to process
        #[arg(short, long)]
        input: String,

        /// The output CSV (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<String>,

        /// Delay in seconds between translation calls
        #[arg(short, long, default_value_t = 0.3)]
        delay: f64,

        /// Stop after this many re-translated rows
        #[arg(short, long)]
        limit: Option<usize>,

        /// Source language code used in column names
        #[arg(long, default_value = "en")]
        source_lang: String,

        /// Target language code used in column names
        #[arg(long, default_value = "ko")]
        target_lang: String,

        /// JSON file of wrong->correct term mappings replacing the built-in table
        #[arg(long)]
        terms: Option<String>,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let result = match args.commands {
        Commands::Fix {
            input,
            output,
            source_lang,
            target_lang,
            terms,
            json,
        } => fix::run(fix::FixOptions {
            input,
            output,
            source_lang,
            target_lang,
            terms,
            json,
        }),
        Commands::Preview {
            input,
            limit,
            source_lang,
            target_lang,
            terms,
        } => preview::run(preview::PreviewOptions {
            input,
            limit,
            source_lang,
            target_lang,
            terms,
        }),
        Commands::Retranslate {
            input,
            output,
            delay,
            limit,
            source_lang,
            target_lang,
            terms,
            json,
        } => retranslate::run(retranslate::RetranslateOptions {
            input,
            output,
            delay,
            limit,
            source_lang,
            target_lang,
            terms,
            json,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
