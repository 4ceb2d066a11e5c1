//! Delimited-text transaction feed
//!
//! Input files have a header line followed by one record per line, e.g.
//!
//! ```text
//! time, id1, id2, amount, message
//! 2016-11-02 09:49:29, 52575, 1120, 25.32, Spam
//! ```
//!
//! Only the two user columns are read; everything else on the line,
//! including any delimiters inside a trailing message, is ignored. Lines are
//! decoded lossily, so a non-UTF-8 byte outside the user columns is harmless.

use crate::config::DetectorConfig;
use crate::error::{FeedError, ParseError};
use paymo_domain::{Transaction, TransactionFeed, UserId};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Column layout of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    /// Field delimiter
    pub delimiter: char,
    /// Zero-based column of the paying user
    pub source_field: usize,
    /// Zero-based column of the receiving user
    pub destination_field: usize,
}

impl From<&DetectorConfig> for RecordLayout {
    fn from(config: &DetectorConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            source_field: config.source_field,
            destination_field: config.destination_field,
        }
    }
}

impl RecordLayout {
    /// Fields a record needs to hold both user columns
    pub fn min_fields(&self) -> usize {
        self.source_field.max(self.destination_field) + 1
    }
}

impl Default for RecordLayout {
    fn default() -> Self {
        RecordLayout::from(&DetectorConfig::default())
    }
}

/// Parse one record into a transaction
///
/// `line_number` is only used for error reporting.
pub fn parse_record(
    line: &str,
    line_number: usize,
    layout: &RecordLayout,
) -> Result<Transaction, ParseError> {
    let fields: Vec<&str> = line.split(layout.delimiter).collect();
    let expected = layout.min_fields();
    if fields.len() < expected {
        return Err(ParseError::MissingField {
            line: line_number,
            expected,
            found: fields.len(),
        });
    }

    let user = |field: usize| -> Result<UserId, ParseError> {
        fields[field].parse::<UserId>().map_err(|_| ParseError::InvalidUser {
            line: line_number,
            field,
            value: fields[field].trim().to_string(),
        })
    };

    Ok(Transaction {
        source: user(layout.source_field)?,
        destination: user(layout.destination_field)?,
    })
}

/// Transaction feed over any buffered reader
pub struct CsvFeed<R> {
    reader: R,
    layout: RecordLayout,
    has_header: bool,
    skip_malformed: bool,
    line_number: usize,
    skipped: usize,
    buf: Vec<u8>,
}

impl CsvFeed<BufReader<File>> {
    /// Open a transaction file
    pub fn open<P: AsRef<Path>>(path: P, config: &DetectorConfig) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), config))
    }
}

impl<R: BufRead> CsvFeed<R> {
    /// Wrap a reader using the layout and skipping rules from `config`
    pub fn new(reader: R, config: &DetectorConfig) -> Self {
        Self {
            reader,
            layout: RecordLayout::from(config),
            has_header: config.has_header,
            skip_malformed: config.skip_malformed,
            line_number: 0,
            skipped: 0,
            buf: Vec::new(),
        }
    }

    /// Lines consumed so far, header included
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    /// Malformed lines skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> TransactionFeed for CsvFeed<R> {
    type Error = FeedError;

    fn next_transaction(&mut self) -> Result<Option<Transaction>, Self::Error> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            if self.has_header && self.line_number == 1 {
                continue;
            }
            let decoded = String::from_utf8_lossy(&self.buf);
            let line = decoded.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            match parse_record(line, self.line_number, &self.layout) {
                Ok(transaction) => return Ok(Some(transaction)),
                Err(e) if self.skip_malformed => {
                    warn!("Skipping malformed record: {}", e);
                    self.skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
