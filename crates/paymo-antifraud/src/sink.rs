//! Line-per-verdict output

use paymo_domain::{Verdict, VerdictSink};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one verdict token per line
pub struct LineSink<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl LineSink<File> {
    /// Create (or truncate) an output file
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> LineSink<W> {
    /// Wrap any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    /// Verdicts written so far
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> VerdictSink for LineSink<W> {
    type Error = io::Error;

    fn emit(&mut self, verdict: Verdict) -> Result<(), Self::Error> {
        writeln!(self.writer, "{}", verdict)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}
