//! Whole-buffer conversion between UTF-32LE and UTF-8.
//!
//! Both directions append to a caller-owned output buffer and stop at the
//! first failing unit. Whatever was produced before the failure stays in the
//! output, so a file writer can persist the partial result.

use alloc::vec::Vec;

use crate::{
    CodePoints, ConversionError, ConvertOptions, DecoderOptions, Direction, EncoderOptions,
    ErrorSource, UTF32_UNIT_LEN, encoder::encode_into,
};

/// Counters reported by a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Code points converted.
    pub code_points: usize,
    /// Input bytes consumed.
    pub bytes_read: usize,
    /// Output bytes produced.
    pub bytes_written: usize,
}

/// Converts a UTF-32LE buffer to UTF-8.
///
/// ```rust
/// let input = [0x41, 0, 0, 0, 0xAC, 0x20, 0, 0];
/// let utf8 = utfconv::utf32le_to_utf8(&input, &Default::default()).unwrap();
/// assert_eq!(utf8, "A€".as_bytes());
/// ```
///
/// # Errors
///
/// Fails on the first code point the encoder rejects, or with
/// [`ErrorSource::TruncatedInput`] if the length is not a multiple of four.
pub fn utf32le_to_utf8(input: &[u8], options: &EncoderOptions) -> Result<Vec<u8>, ConversionError> {
    let mut out = Vec::with_capacity(input.len() / UTF32_UNIT_LEN);
    encode_units(input, options, &mut out)?;
    Ok(out)
}

/// Converts a UTF-8 buffer to UTF-32LE.
///
/// # Errors
///
/// Fails on the first sequence the decoder rejects.
pub fn utf8_to_utf32le(input: &[u8], options: &DecoderOptions) -> Result<Vec<u8>, ConversionError> {
    let mut out = Vec::with_capacity(input.len() * UTF32_UNIT_LEN);
    decode_units(input, options, &mut out)?;
    Ok(out)
}

/// Converts `input` in the given direction, appending to `out`.
///
/// On error `out` holds the output of every unit before the failing one.
///
/// # Errors
///
/// As [`utf32le_to_utf8`] or [`utf8_to_utf32le`], depending on `direction`.
pub fn convert_buffer(
    input: &[u8],
    direction: Direction,
    options: &ConvertOptions,
    out: &mut Vec<u8>,
) -> Result<ConversionStats, ConversionError> {
    match direction {
        Direction::Utf32ToUtf8 => encode_units(input, &options.encoder, out),
        Direction::Utf8ToUtf32 => decode_units(input, &options.decoder, out),
    }
}

fn encode_units(
    input: &[u8],
    options: &EncoderOptions,
    out: &mut Vec<u8>,
) -> Result<ConversionStats, ConversionError> {
    let mut stats = ConversionStats::default();
    let units = input.chunks_exact(UTF32_UNIT_LEN);
    let remaining = units.remainder().len();

    for (index, unit) in units.enumerate() {
        let offset = index * UTF32_UNIT_LEN;
        let code_point = u32::from_le_bytes([unit[0], unit[1], unit[2], unit[3]]);
        stats.bytes_written +=
            encode_into(code_point, options, out).map_err(|err| ConversionError::at(offset, err))?;
        stats.code_points += 1;
        stats.bytes_read = offset + UTF32_UNIT_LEN;
    }

    if remaining != 0 {
        return Err(ConversionError::at(
            input.len() - remaining,
            ErrorSource::TruncatedInput { remaining },
        ));
    }
    Ok(stats)
}

fn decode_units(
    input: &[u8],
    options: &DecoderOptions,
    out: &mut Vec<u8>,
) -> Result<ConversionStats, ConversionError> {
    let mut stats = ConversionStats::default();
    let mut code_points = CodePoints::with_options(input, *options);

    while let Some(item) = code_points.next() {
        // A failed step leaves the cursor on the offending sequence.
        let (_, code_point) =
            item.map_err(|err| ConversionError::at(code_points.position(), err))?;
        out.extend_from_slice(&code_point.to_le_bytes());
        stats.code_points += 1;
        stats.bytes_written += UTF32_UNIT_LEN;
    }
    stats.bytes_read = code_points.position();
    Ok(stats)
}
