//! Read-process-respond loop connecting a [`Table`] to line-oriented I/O.

use crate::table::Table;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

/// Prompt written before each line in interactive mode.
pub const PROMPT: &str = "> ";

/// Options for [`run`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleOptions {
    /// Write [`PROMPT`] before reading each line.
    pub prompt: bool,
    /// Write the table map after each command.
    pub show_map: bool,
}

/// Feeds every line of `input` to `table` and writes responses to `output`.
///
/// Lines are decoded lossily, so bytes that are not valid UTF-8 reach the
/// table as replacement characters instead of ending the session. Returns the
/// number of lines processed once `input` is exhausted.
pub fn run<R, W>(
    table: &mut Table,
    mut input: R,
    mut output: W,
    options: ConsoleOptions,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut processed = 0;
    let mut buf = Vec::new();
    loop {
        if options.prompt {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        processed += 1;

        if let Some(response) = table.process_command(&line) {
            writeln!(output, "{response}")?;
        }
        if options.show_map {
            writeln!(output, "{}", table.map())?;
        }
    }
    if options.prompt {
        writeln!(output)?;
    }
    output.flush()?;
    tracing::info!(lines = processed, "input exhausted");
    Ok(processed)
}

/// Strips the `\n` or `\r\n` terminator and decodes the rest lossily.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw)
}
