//! Interactive input acquisition.
//!
//! Generic over the reader and writer so the prompt cycle can be driven
//! from tests without a terminal.

use std::io::{self, BufRead, Write};

/// Write `prompt` to `writer`, then read one line from `reader`.
///
/// The line terminator is stripped. End of input yields an empty string,
/// which the computations reject as invalid.
pub fn read_value<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(writer, "{prompt} ")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
