//! Allocating reads: count-prefixed arrays and LSB extraction.

use alloc::vec::Vec;

use crate::error::{ReadError, Result};
use crate::{Endian, Reader};

// Generates one array read method per scalar type: a 4-byte signed count
// prefix followed by that many sequential element reads.
macro_rules! impl_read_array {
    ($($name:ident => $read:ident -> $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!(
                "Reads a count-prefixed array via [`Reader::",
                stringify!($read),
                "`]."
            )]
            pub fn $name(&mut self) -> Result<Vec<$ty>> {
                self.read_sequence(Self::$read)
            }
        )+
    };
}

impl<'a> Reader<'a> {
    impl_read_array! {
        read_bool_array => read_bool -> bool,
        read_u8_array => read_u8 -> u8,
        read_i8_array => read_i8 -> i8,
        read_u16_array => read_u16 -> u16,
        read_i16_array => read_i16 -> i16,
        read_u32_array => read_u32 -> u32,
        read_i32_array => read_i32 -> i32,
        read_u64_array => read_u64 -> u64,
        read_i64_array => read_i64 -> i64,
        read_f16_array => read_f16 -> f32,
        read_f32_array => read_f32 -> f32,
        read_f64_array => read_f64 -> f64,
        read_cstr_array => read_cstr -> &'a str,
        read_str_array => read_str -> &'a str,
        read_str_aligned_array => read_str_aligned -> &'a str,
    }

    /// Reads a count prefix, then `count` elements produced by `read`.
    ///
    /// On element failure the whole read fails, but the cursor keeps the
    /// advance made by the prefix and the elements that decoded before the
    /// failing one.
    fn read_sequence<T>(&mut self, mut read: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        let count = self.read_count()?;
        // every element consumes at least one byte
        let mut values = Vec::with_capacity(usize::min(count, self.remaining()));
        for _ in 0..count {
            values.push(read(self)?);
        }
        Ok(values)
    }

    /// Extracts the least-significant bit of each of the next `length`
    /// bytes, packed eight per output byte.
    ///
    /// Consumes `(length / 8) * 8` bytes but requires the full `length` to
    /// be available. Under [`Endian::Little`] the first byte of a group
    /// lands in the high bit of the output byte; under [`Endian::Big`] in
    /// the low bit.
    pub fn read_lsb(&mut self, length: usize) -> Result<Vec<u8>> {
        let available = self.remaining();
        if length > available {
            return Err(ReadError::OutOfBounds {
                needed: length,
                available,
            });
        }
        Ok(self.extract_lsb(length / 8))
    }

    /// [`Reader::read_lsb`] over all bytes remaining past the cursor.
    pub fn read_lsb_to_end(&mut self) -> Vec<u8> {
        self.extract_lsb(self.remaining() / 8)
    }

    fn extract_lsb(&mut self, groups: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(groups);
        for _ in 0..groups {
            // group count is bounded by the remaining bytes
            let Ok(chunk) = self.read_slice(8) else {
                unreachable!()
            };
            let mut packed = 0u8;
            for (i, &byte) in chunk.iter().enumerate() {
                let bit = match self.endian() {
                    Endian::Little => 7 - i,
                    Endian::Big => i,
                };
                packed |= (byte & 1) << bit;
            }
            out.push(packed);
        }
        out
    }
}
