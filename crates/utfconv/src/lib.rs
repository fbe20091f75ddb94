//! A codec between UTF-32LE code points and UTF-8 byte sequences, plus a
//! whole-file converter that drives it.
//!
//! The codec is three stateless operations:
//!
//! - [`encode`] turns one code point into a [`Utf8Sequence`] of 1 to 4 bytes.
//! - [`decode`] reads one sequence out of a buffer at an absolute position and
//!   returns the code point together with the position of the next sequence.
//! - [`convert_file`] rewrites a whole file from one encoding to the other.
//!
//! ```rust
//! let euro = utfconv::encode(0x20AC).unwrap();
//! assert_eq!(&*euro, &[0xE2, 0x82, 0xAC]);
//!
//! let (code_point, next) = utfconv::decode(&euro, 0).unwrap();
//! assert_eq!((code_point, next), (0x20AC, 3));
//! ```
//!
//! Both directions are permissive by default: surrogate code points and
//! overlong sequences pass through unchanged. Stricter behaviour is opt-in via
//! [`EncoderOptions`] and [`DecoderOptions`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
#[cfg(feature = "std")]
mod convert;
mod decoder;
mod encoder;
mod error;
mod options;
mod sequence;

#[cfg(test)]
mod tests;

pub use buffer::{ConversionStats, convert_buffer, utf8_to_utf32le, utf32le_to_utf8};
#[cfg(feature = "std")]
pub use convert::{convert_file, convert_file_with};
pub use decoder::{CodePoints, decode, decode_with};
pub use encoder::{encode, encode_into, encode_with, sequence_len};
pub use error::{CodecError, ConversionError, ErrorKind, ErrorSource};
pub use options::{ConvertOptions, DecoderOptions, Direction, EncoderOptions, ParseDirectionError};
pub use sequence::Utf8Sequence;

/// Largest Unicode scalar value, `U+10FFFF`.
pub const MAX_CODE_POINT: u32 = 0x0010_FFFF;

/// Width in bytes of one UTF-32LE unit.
pub const UTF32_UNIT_LEN: usize = 4;
