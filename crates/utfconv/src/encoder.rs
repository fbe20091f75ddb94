use alloc::vec::Vec;

use crate::{CodecError, EncoderOptions, MAX_CODE_POINT, Utf8Sequence};

// Lead-byte prefixes by sequence length.
const TAG_TWO: u8 = 0b1100_0000;
const TAG_THREE: u8 = 0b1110_0000;
const TAG_FOUR: u8 = 0b1111_0000;
const TAG_CONT: u8 = 0b1000_0000;
const MASK_CONT: u32 = 0b0011_1111;

pub(crate) const MAX_ONE_BYTE: u32 = 0x7F;
pub(crate) const MAX_TWO_BYTE: u32 = 0x7FF;
pub(crate) const MAX_THREE_BYTE: u32 = 0xFFFF;

pub(crate) fn is_surrogate(code_point: u32) -> bool {
    (0xD800..=0xDFFF).contains(&code_point)
}

/// Number of UTF-8 bytes `code_point` encodes to, or `None` above `U+10FFFF`.
#[must_use]
pub const fn sequence_len(code_point: u32) -> Option<usize> {
    match code_point {
        0..=MAX_ONE_BYTE => Some(1),
        0x80..=MAX_TWO_BYTE => Some(2),
        0x800..=MAX_THREE_BYTE => Some(3),
        0x1_0000..=MAX_CODE_POINT => Some(4),
        _ => None,
    }
}

/// Encodes one code point as UTF-8.
///
/// Surrogates (`U+D800..=U+DFFF`) are encoded like any other 3-byte value; use
/// [`encode_with`] and [`EncoderOptions::strict`] to refuse them.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCodePoint`] if `code_point > 0x10FFFF`.
pub fn encode(code_point: u32) -> Result<Utf8Sequence, CodecError> {
    encode_with(code_point, &EncoderOptions::default())
}

/// Encodes one code point as UTF-8 using `options`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCodePoint`] above `U+10FFFF`, and
/// [`CodecError::SurrogateCodePoint`] for surrogates when
/// `options.reject_surrogates` is set.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_with(code_point: u32, options: &EncoderOptions) -> Result<Utf8Sequence, CodecError> {
    let Some(len) = sequence_len(code_point) else {
        return Err(CodecError::InvalidCodePoint {
            code_point,
            offset: None,
        });
    };
    if options.reject_surrogates && is_surrogate(code_point) {
        return Err(CodecError::SurrogateCodePoint {
            code_point,
            offset: None,
        });
    }

    // The `as u8` casts keep the low 8 bits; every value is masked or shifted
    // into range first.
    let cont = |shift: u32| TAG_CONT | ((code_point >> shift) & MASK_CONT) as u8;
    let bytes = match len {
        1 => [code_point as u8, 0, 0, 0],
        2 => [TAG_TWO | (code_point >> 6) as u8, cont(0), 0, 0],
        3 => [TAG_THREE | (code_point >> 12) as u8, cont(6), cont(0), 0],
        _ => [TAG_FOUR | (code_point >> 18) as u8, cont(12), cont(6), cont(0)],
    };
    Ok(Utf8Sequence::from_parts(bytes, len))
}

/// Encodes `code_point` and appends the bytes to `out`, returning how many
/// were written.
///
/// # Errors
///
/// As [`encode_with`]. On error `out` is left untouched.
pub fn encode_into(
    code_point: u32,
    options: &EncoderOptions,
    out: &mut Vec<u8>,
) -> Result<usize, CodecError> {
    let sequence = encode_with(code_point, options)?;
    out.extend_from_slice(&sequence);
    Ok(sequence.len())
}
