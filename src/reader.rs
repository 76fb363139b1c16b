//! The cursor type and fixed-width scalar reads.

use crate::error::{ReadError, Result};
use crate::f16::f16_to_f32;
use crate::Endian;

/// A cursor over a borrowed byte buffer.
///
/// Holds the full buffer, the current read position and the byte order, and
/// decodes values at the cursor in constant time per call. The buffer is
/// never copied; the lifetime parameter ties the reader (and every `&str`
/// it hands out) to the caller's bytes.
///
/// # Failure policy
///
/// Scalar and string reads are atomic: on any error the cursor stays where
/// it was, and the reader remains usable. Array reads advance through their
/// count prefix and successfully decoded elements before failing, so after
/// a failed array read the cursor sits at the end of the last element that
/// decoded. Callers that inspect the cursor after a failed array read rely
/// on this.
///
/// # Example
///
/// ```
/// use bytecursor::{Endian, Reader};
///
/// let data = [0x00, 0x00, 0x00, 0x2a];
/// let mut reader = Reader::with_endian(&data, Endian::Big);
/// assert_eq!(reader.read_i32().unwrap(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    position: usize,
    endian: Endian,
}

// Generates one scalar read method per multi-byte integer type. Decoding is
// a plain byte reassembly; two's complement falls out of `from_*_bytes` for
// the signed widths.
macro_rules! impl_read_int {
    ($($name:ident -> $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Reads a `", stringify!($ty), "` at the cursor, honoring the reader's byte order.")]
            #[inline]
            pub fn $name(&mut self) -> Result<$ty> {
                const SIZE: usize = core::mem::size_of::<$ty>();
                let Ok(bytes) = self.read_slice(SIZE)?.try_into() else {
                    unreachable!()
                };
                Ok(match self.endian {
                    Endian::Little => <$ty>::from_le_bytes(bytes),
                    Endian::Big => <$ty>::from_be_bytes(bytes),
                })
            }
        )+
    };
}

impl<'a> Reader<'a> {
    /// Creates a little-endian reader positioned at the start of `data`.
    #[inline]
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            position: 0,
            endian: Endian::Little,
        }
    }

    /// Creates a reader with an explicit byte order, positioned at the start.
    #[inline]
    #[must_use]
    pub const fn with_endian(data: &'a [u8], endian: Endian) -> Self {
        Self {
            data,
            position: 0,
            endian,
        }
    }

    /// Creates a reader starting at a caller-supplied offset.
    ///
    /// Fails with [`ReadError::OutOfRange`] if `position > data.len()`; the
    /// check happens here rather than at the first read.
    pub fn with_position(data: &'a [u8], endian: Endian, position: usize) -> Result<Self> {
        if position > data.len() {
            return Err(ReadError::OutOfRange {
                position,
                length: data.len(),
            });
        }
        Ok(Self {
            data,
            position,
            endian,
        })
    }

    /// The whole underlying buffer, independent of the cursor.
    #[inline]
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Total length of the underlying buffer.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying buffer is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current cursor position, as an offset from the buffer start.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// The byte order this reader decodes with.
    #[inline]
    #[must_use]
    pub const fn endian(&self) -> Endian {
        self.endian
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// Fails with [`ReadError::OutOfRange`] if `position > len()`, leaving
    /// the cursor untouched.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(ReadError::OutOfRange {
                position,
                length: self.data.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Advances the cursor by `count` bytes without decoding them.
    #[inline]
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.read_slice(count).map(|_| ())
    }

    /// Advances the cursor to the next multiple of `alignment`, relative to
    /// the buffer start, clamped to the buffer end. Returns the new
    /// position. `alignment <= 1` is a no-op.
    pub fn align_to(&mut self, alignment: usize) -> usize {
        if alignment > 1 {
            let aligned = self.position.next_multiple_of(alignment);
            self.position = usize::min(aligned, self.data.len());
        }
        self.position
    }

    /// Reads the next `length` bytes as a raw slice of the buffer.
    ///
    /// Every decode funnels through here: the bounds check happens before
    /// the cursor moves, so a failed read consumes nothing.
    #[inline]
    pub fn read_slice(&mut self, length: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if length > available {
            return Err(ReadError::OutOfBounds {
                needed: length,
                available,
            });
        }
        let slice = &self.data[self.position..self.position + length];
        self.position += length;
        Ok(slice)
    }

    /// Reads one byte as a boolean; any nonzero value is `true`.
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_slice(1)?[0] != 0)
    }

    /// Reads a `u8` at the cursor.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_slice(1)?[0])
    }

    /// Reads an `i8` at the cursor.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_slice(1)?[0] as i8)
    }

    impl_read_int! {
        read_u16 -> u16,
        read_i16 -> i16,
        read_u32 -> u32,
        read_i32 -> i32,
        read_u64 -> u64,
        read_i64 -> i64,
    }

    /// Reads an IEEE-754 binary16 value, widened losslessly to `f32`.
    #[inline]
    pub fn read_f16(&mut self) -> Result<f32> {
        Ok(f16_to_f32(self.read_u16()?))
    }

    /// Reads an IEEE-754 binary32 value.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    /// Reads an IEEE-754 binary64 value.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_u64()?))
    }

    /// Reads a variable-length integer: 7-bit groups, least-significant
    /// group first, high bit of each byte flagging continuation.
    ///
    /// Fails with [`ReadError::VarIntTooLong`] if the continuation bit is
    /// still set after ten bytes, and with [`ReadError::OutOfBounds`] if
    /// the buffer ends mid-varint. The cursor is restored on either
    /// failure.
    pub fn read_varint(&mut self) -> Result<u64> {
        let start = self.position;
        self.rewind_on_err(|r| {
            let mut value = 0u64;
            let mut shift = 0u32;
            loop {
                let byte = r.read_u8()?;
                value |= u64::from(byte & 0x7f) << shift;
                if byte & 0x80 == 0 {
                    return Ok(value);
                }
                shift += 7;
                if shift >= 64 {
                    return Err(ReadError::VarIntTooLong { start });
                }
            }
        })
    }

    /// Reads a 4-byte signed count prefix, rejecting negative values.
    pub(crate) fn read_count(&mut self) -> Result<usize> {
        let count = self.read_i32()?;
        if count < 0 {
            return Err(ReadError::NegativeCount { count });
        }
        Ok(count as usize)
    }

    /// Moves the cursor forward by `count` bytes already known to be in
    /// bounds.
    #[inline]
    pub(crate) fn advance(&mut self, count: usize) {
        debug_assert!(count <= self.remaining());
        self.position += count;
    }

    /// Runs `read`, restoring the cursor to its prior position on error.
    pub(crate) fn rewind_on_err<T>(
        &mut self,
        read: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let start = self.position;
        let result = read(self);
        if result.is_err() {
            self.position = start;
        }
        result
    }
}
