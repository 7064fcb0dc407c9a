//! GridPrinter: writes rendered grid rows to stdout.
//!
//! Rows are encoded into a byte buffer with crossterm commands first and
//! then flushed in one write, the same way a full-frame redraw works.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{style::Print, QueueableCommand};

use crate::core::Grid;

/// Buffered stdout writer for rendered grids
pub struct GridPrinter {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl GridPrinter {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    /// Render `grid` and emit each row as one line
    pub fn draw(&mut self, grid: &Grid) -> Result<()> {
        self.buf.clear();
        encode_rows_into(&grid.render(), &mut self.buf)?;
        self.flush_buf()
    }

    /// Emit pre-rendered text (e.g. a JSON snapshot) followed by a newline
    pub fn print_line(&mut self, line: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(line))?;
        self.buf.queue(Print('\n'))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        let mut lock = self.stdout.lock();
        lock.write_all(&self.buf)?;
        lock.flush()?;
        Ok(())
    }
}

impl Default for GridPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `grid` to stdout
pub fn draw(grid: &Grid) -> Result<()> {
    GridPrinter::new().draw(grid)
}

/// Encode rows, each followed by a newline, into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_rows_into(rows: &[String], out: &mut Vec<u8>) -> Result<()> {
    for row in rows {
        out.queue(Print(row))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}
