//! String reads: null-terminated, length-delimited and aligned forms.
//!
//! All of these hand back `&str` slices borrowed from the underlying
//! buffer. Failure is atomic: a consumed length prefix is rolled back along
//! with everything else, so the cursor never ends up between a prefix and a
//! payload it could not read.

use crate::error::{ReadError, Result};
use crate::Reader;

impl<'a> Reader<'a> {
    /// Reads a null-terminated UTF-8 string, consuming the terminator.
    ///
    /// Scans forward from the cursor for a zero byte. Fails with
    /// [`ReadError::UnterminatedString`] if none exists before the end of
    /// the buffer, or [`ReadError::InvalidUtf8`] if the bytes up to the
    /// terminator are not valid UTF-8.
    pub fn read_cstr(&mut self) -> Result<&'a str> {
        let rest = &self.data()[self.position()..];
        let Some(terminator) = rest.iter().position(|&byte| byte == 0) else {
            return Err(ReadError::UnterminatedString {
                start: self.position(),
            });
        };
        let text = str_from_utf8(&rest[..terminator])?;
        // text + terminator
        self.advance(terminator + 1);
        Ok(text)
    }

    /// Reads a length-delimited UTF-8 string: a 4-byte signed length prefix
    /// (in the reader's byte order) followed by that many payload bytes.
    pub fn read_str(&mut self) -> Result<&'a str> {
        self.rewind_on_err(|r| {
            let length = r.read_count()?;
            str_from_utf8(r.read_slice(length)?)
        })
    }

    /// Reads exactly `length` bytes as a UTF-8 string, with no prefix.
    pub fn read_str_exact(&mut self, length: usize) -> Result<&'a str> {
        self.rewind_on_err(|r| str_from_utf8(r.read_slice(length)?))
    }

    /// Reads a length-delimited string, then pads the cursor forward to the
    /// next 4-byte boundary relative to where this read began.
    ///
    /// Pad bytes are discarded without validation, and padding clamps to
    /// the buffer end. On failure the cursor reflects no padding advance.
    pub fn read_str_aligned(&mut self) -> Result<&'a str> {
        let start = self.position();
        let text = self.read_str()?;
        let consumed = self.position() - start;
        let padding = consumed.next_multiple_of(4) - consumed;
        self.advance(usize::min(padding, self.remaining()));
        Ok(text)
    }
}

fn str_from_utf8(bytes: &[u8]) -> Result<&str> {
    core::str::from_utf8(bytes).map_err(|error| ReadError::InvalidUtf8 { error })
}
