use core::iter::FusedIterator;

use crate::{
    CodecError, DecoderOptions, MAX_CODE_POINT,
    encoder::{MAX_ONE_BYTE, MAX_THREE_BYTE, MAX_TWO_BYTE, is_surrogate},
};

/// Sequence length and payload bits of a lead byte.
#[inline]
fn classify_lead(byte: u8) -> Option<(usize, u32)> {
    let bits = u32::from(byte);
    match byte {
        0x00..=0x7F => Some((1, bits)),
        0xC0..=0xDF => Some((2, bits & 0x1F)),
        0xE0..=0xEF => Some((3, bits & 0x0F)),
        0xF0..=0xF7 => Some((4, bits & 0x07)),
        // 0x80..=0xBF are continuation bytes, 0xF8..=0xFF have no meaning.
        _ => None,
    }
}

/// Smallest value that needs a `len`-byte sequence.
const fn min_for_len(len: usize) -> u32 {
    match len {
        1 => 0,
        2 => MAX_ONE_BYTE + 1,
        3 => MAX_TWO_BYTE + 1,
        _ => MAX_THREE_BYTE + 1,
    }
}

/// Decodes the sequence starting at `position` in `buffer`.
///
/// Returns the code point and the position right after the sequence, so
/// repeated calls starting from `0` tile the buffer:
///
/// ```rust
/// let input = "A€".as_bytes();
/// let (a, next) = utfconv::decode(input, 0).unwrap();
/// let (euro, end) = utfconv::decode(input, next).unwrap();
/// assert_eq!((a, euro, end), (0x41, 0x20AC, input.len()));
/// ```
///
/// Overlong forms, surrogates and values above `U+10FFFF` are returned as
/// decoded; see [`decode_with`] to reject them.
///
/// # Errors
///
/// [`CodecError::InvalidLeadByte`] if the byte at `position` cannot start a
/// sequence, [`CodecError::TruncatedSequence`] if the buffer ends first, and
/// [`CodecError::InvalidContinuationByte`] if a following byte is not
/// `10xxxxxx`.
///
/// # Panics
///
/// Panics if `position >= buffer.len()`. Callers check for the end of input
/// before asking for the next code point.
pub fn decode(buffer: &[u8], position: usize) -> Result<(u32, usize), CodecError> {
    decode_with(buffer, position, &DecoderOptions::default())
}

/// Decodes the sequence starting at `position`, applying the extra checks
/// enabled in `options`.
///
/// # Errors
///
/// Everything [`decode`] reports, plus [`CodecError::OverlongEncoding`],
/// [`CodecError::SurrogateCodePoint`] and [`CodecError::InvalidCodePoint`] when
/// the matching option is set.
///
/// # Panics
///
/// Panics if `position >= buffer.len()`.
pub fn decode_with(
    buffer: &[u8],
    position: usize,
    options: &DecoderOptions,
) -> Result<(u32, usize), CodecError> {
    let lead = buffer[position];
    let Some((len, mut code_point)) = classify_lead(lead) else {
        return Err(CodecError::InvalidLeadByte {
            byte: lead,
            offset: position,
        });
    };

    for offset in position + 1..position + len {
        let Some(&byte) = buffer.get(offset) else {
            return Err(CodecError::TruncatedSequence {
                offset: position,
                expected: len,
                available: buffer.len() - position,
            });
        };
        if byte & 0b1100_0000 != 0b1000_0000 {
            return Err(CodecError::InvalidContinuationByte { byte, offset });
        }
        code_point = (code_point << 6) | u32::from(byte & 0b0011_1111);
    }

    if options.reject_overlong && code_point < min_for_len(len) {
        return Err(CodecError::OverlongEncoding {
            code_point,
            offset: position,
            len,
        });
    }
    if options.reject_surrogates && is_surrogate(code_point) {
        return Err(CodecError::SurrogateCodePoint {
            code_point,
            offset: Some(position),
        });
    }
    if options.reject_out_of_range && code_point > MAX_CODE_POINT {
        return Err(CodecError::InvalidCodePoint {
            code_point,
            offset: Some(position),
        });
    }

    Ok((code_point, position + len))
}

/// Iterator over every code point in a UTF-8 buffer.
///
/// Yields `(offset, code_point)` pairs. After the first error it yields that
/// error once and then ends.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    buffer: &'a [u8],
    position: usize,
    options: DecoderOptions,
    failed: bool,
}

impl<'a> CodePoints<'a> {
    /// Iterates `buffer` with the permissive default options.
    #[must_use]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_options(buffer, DecoderOptions::default())
    }

    /// Iterates `buffer`, applying the checks enabled in `options`.
    #[must_use]
    pub fn with_options(buffer: &'a [u8], options: DecoderOptions) -> Self {
        Self {
            buffer,
            position: 0,
            options,
            failed: false,
        }
    }

    /// Absolute offset of the next sequence.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for CodePoints<'_> {
    type Item = Result<(usize, u32), CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.position >= self.buffer.len() {
            return None;
        }
        let start = self.position;
        match decode_with(self.buffer, start, &self.options) {
            Ok((code_point, next)) => {
                self.position = next;
                Some(Ok((start, code_point)))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        // The next item may be an error that ends iteration.
        let remaining = self.buffer.len() - self.position;
        (usize::from(remaining != 0), Some(remaining))
    }
}

impl FusedIterator for CodePoints<'_> {}
