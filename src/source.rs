//! Buffered line input with a little lookahead.
//!
//! Multi-line steps need to know, after each line, whether the user is done:
//! the block ends when the next byte is a line terminator (a blank line) or
//! when input is exhausted.

use std::io::{BufRead, ErrorKind};

use crate::error::InputError;

/// Wraps any [`BufRead`] and reads it line by line.
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    /// Read lines from an already buffered reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read one line without its terminator (`\n` or `\r\n`).
    ///
    /// Returns [`InputError::Eof`] when nothing is left to read, and
    /// [`InputError::Unterminated`] with the text read so far when input ends
    /// before a `\n`.
    pub fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        if !line.ends_with('\n') {
            return Err(InputError::Unterminated(line));
        }
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Whether the current block of lines is over.
    ///
    /// End of input counts as the end of the block. A blank line (`\n` or
    /// `\r\n`) also does, and its terminator is consumed. Any other byte stays
    /// in the buffer for the next [`read_line`](Self::read_line).
    pub fn is_block_end(&mut self) -> Result<bool, InputError> {
        let terminator = match self.lookahead()? {
            (None, _) => return Ok(true),
            (Some(b'\n'), _) => 1,
            // a `\r` whose `\n` is not buffered yet is read as content
            (Some(b'\r'), Some(b'\n')) => 2,
            _ => return Ok(false),
        };
        self.reader.consume(terminator);
        Ok(true)
    }

    /// The next two buffered bytes, without consuming them.
    fn lookahead(&mut self) -> Result<(Option<u8>, Option<u8>), InputError> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok((buf.first().copied(), buf.get(1).copied())),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
