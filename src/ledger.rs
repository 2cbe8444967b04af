use crate::errors::LedgerError;
use crate::models::{RateQuote, format_amount};
use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const HEADER: [&str; 4] = ["Timestamp", "Source", "Buy", "Sell"];

/// Append-only CSV file of every stored quote.
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with its header row. Returns `false` without
    /// touching anything if the file already exists.
    pub fn ensure_header(&self) -> Result<bool, LedgerError> {
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(LedgerError::Io(e)),
        };

        let mut writer = Self::writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;

        Ok(true)
    }

    /// Writes one row. The file is opened and closed on every call.
    pub fn append(&self, quote: &RateQuote) -> Result<(), LedgerError> {
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = Self::writer(file);
        writer.write_record([
            quote.formatted_timestamp(),
            quote.source.to_string(),
            format_amount(quote.buy),
            format_amount(quote.sell),
        ])?;
        writer.flush()?;

        Ok(())
    }

    fn writer(file: File) -> csv::Writer<File> {
        csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(file)
    }
}
