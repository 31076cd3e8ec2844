//! CSV deck reading and writing.
//!
//! The header row defines the record schema. Column names, column order, and
//! row order are preserved exactly: the writer emits the header it was given
//! and every record positionally, after the full batch has been assembled in
//! memory.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::{
    error::Error,
    types::{CardRecord, Deck},
};

impl Deck {
    /// Parse a deck from any reader. The first row is the header; an input
    /// without a header row is a configuration error surfaced as
    /// [`Error::CsvParse`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        let headers = rdr.headers()?.iter().map(str::to_string).collect();
        let mut records = Vec::new();
        for result in rdr.records() {
            let record = result?;
            records.push(CardRecord {
                values: record.iter().map(str::to_string).collect(),
            });
        }
        Ok(Deck { headers, records })
    }

    /// Parse a deck from a file path.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a deck from an in-memory string.
    pub fn parse_str(s: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(s))
    }

    /// Write the deck to any writer (file, memory, etc.).
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::WriterBuilder::new().from_writer(writer);
        wtr.write_record(&self.headers)?;
        for record in &self.records {
            wtr.write_record(&record.values)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the deck to a file path in a single batch.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }
}
