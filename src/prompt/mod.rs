//! Interactive prompting over standard input
//!
//! The whole user interface is a handful of sequential text prompts.
//! The prompter is generic over its reader and writer so unit tests can
//! drive it with in-memory cursors instead of a live terminal.

use std::io::{BufRead, Write};

use crate::error::{ExtractError, ExtractResult};
use crate::scanner::VideoFile;

/// Sequential prompter over a reader/writer pair
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print the zero-indexed listing of discovered files
    pub fn print_files(&mut self, files: &[VideoFile]) -> ExtractResult<()> {
        writeln!(self.writer, "Available files:")?;
        for (index, file) in files.iter().enumerate() {
            writeln!(self.writer, "{}: {}", index, file.name)?;
        }
        Ok(())
    }

    /// Prompt for a file index in `[0, count)`.
    ///
    /// Non-numeric or out-of-range input is an invalid selection that
    /// ends the run; there is no retry loop.
    pub fn select_file(&mut self, count: usize) -> ExtractResult<usize> {
        let input = self.prompt("Pick a file by entering its number: ")?;
        let index: usize = input.parse().map_err(|_| ExtractError::InvalidSelection {
            input: input.clone(),
        })?;

        if index >= count {
            return Err(ExtractError::InvalidSelection { input });
        }

        Ok(index)
    }

    /// Print `message` without a trailing newline and read one line
    pub fn prompt(&mut self, message: &str) -> ExtractResult<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}
