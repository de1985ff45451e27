//! Line sinks that receive rendered tree lines

use std::io::{self, Write};

/// Append-only destination for rendered lines, written in traversal order.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Collects lines in memory.
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes each line followed by `\n` to any writer.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush buffered lines and hand the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }
}
