//! Buffered trace writer.
//!
//! Formats each address as one `XXX\n` record and counts the lines written.
//! The sink is owned for the whole run and released when the writer is finished
//! or dropped, including on early error returns.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::common::Addr;

/// Line-oriented writer of trace records.
#[derive(Debug)]
pub struct TraceWriter<W: Write> {
    inner: BufWriter<W>,
    lines: usize,
}

impl TraceWriter<File> {
    /// Creates (or truncates) the trace file at `path`.
    ///
    /// Parent directories are not created; a missing directory is reported as
    /// the underlying I/O error.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        File::create(path).map(Self::new)
    }
}

impl<W: Write> TraceWriter<W> {
    /// Wraps an arbitrary sink.
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
            lines: 0,
        }
    }

    /// Writes one address record.
    #[inline]
    pub fn write_addr(&mut self, addr: Addr) -> io::Result<()> {
        writeln!(self.inner, "{addr}")?;
        self.lines += 1;
        Ok(())
    }

    /// Writes every address of `addrs` in order.
    pub fn write_all<I>(&mut self, addrs: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = Addr>,
    {
        let before = self.lines;
        for addr in addrs {
            self.write_addr(addr)?;
        }
        Ok(self.lines - before)
    }

    /// Lines written so far.
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Flushes buffered records and returns the underlying sink.
    pub fn finish(self) -> io::Result<W> {
        self.inner.into_inner().map_err(io::IntoInnerError::into_error)
    }
}
