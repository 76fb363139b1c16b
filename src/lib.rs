//! A cursor-based binary reader over borrowed byte buffers.
//!
//! [`Reader`] pairs an immutable byte slice with a read position and a byte
//! order, and exposes typed decode operations: fixed-width integers, floats
//! (including half precision), booleans, C-style and length-delimited
//! strings, and count-prefixed arrays of any of these. Every read validates
//! bounds before touching the buffer and advances the cursor by exactly the
//! bytes it consumed.
//!
//! The buffer is borrowed, never copied; string reads hand back `&str`
//! slices of the original bytes, so a `Reader` is cheap to construct even
//! over very large blobs.
//!
//! # Example
//!
//! ```
//! use bytecursor::Reader;
//!
//! let data = [0x2a, 0x00, 0x01, 0x68, 0x69, 0x00];
//! let mut reader = Reader::new(&data);
//!
//! assert_eq!(reader.read_u16().unwrap(), 42);
//! assert!(reader.read_bool().unwrap());
//! assert_eq!(reader.read_cstr().unwrap(), "hi");
//! assert_eq!(reader.remaining(), 0);
//! ```
//!
//! Multi-byte values honor the byte order chosen at construction:
//!
//! ```
//! use bytecursor::{Endian, Reader};
//!
//! let mut reader = Reader::with_endian(&[0x12, 0x34], Endian::Big);
//! assert_eq!(reader.read_u16().unwrap(), 0x1234);
//! ```

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod endian;
mod error;
mod f16;
mod reader;
mod strings;

#[cfg(feature = "alloc")]
mod arrays;

pub use endian::Endian;
pub use error::{ReadError, Result};
pub use reader::Reader;

#[cfg(test)]
mod tests;
