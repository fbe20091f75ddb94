use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{
    CodePoints, DecoderOptions, EncoderOptions, MAX_CODE_POINT, decode, encode, utf8_to_utf32le,
    utf32le_to_utf8,
};

/// Any value in `0..=0x10FFFF`, surrogates included.
#[derive(Debug, Clone, Copy)]
struct AnyCodePoint(u32);

impl Arbitrary for AnyCodePoint {
    fn arbitrary(g: &mut Gen) -> Self {
        // Bias towards the length boundaries, where off-by-one bugs live.
        let edges = [0x7F, 0x80, 0x7FF, 0x800, 0xD7FF, 0xD800, 0xDFFF, 0xFFFF, 0x1_0000];
        if bool::arbitrary(g) {
            let edge = *g.choose(&edges).unwrap_or(&0);
            return Self(edge);
        }
        Self(u32::arbitrary(g) % (MAX_CODE_POINT + 1))
    }
}

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: `decode(encode(c), 0)` returns `c` and the full sequence length.
#[test]
fn encode_decode_roundtrip_quickcheck() {
    fn prop(c: AnyCodePoint) -> bool {
        let sequence = encode(c.0).unwrap();
        decode(&sequence, 0) == Ok((c.0, sequence.len()))
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(AnyCodePoint) -> bool);
}

/// Property: converting a Rust string's UTF-8 to UTF-32LE and back is the
/// identity, and matches `char` for every unit.
#[test]
fn string_roundtrip_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(s: String) -> bool {
        let utf32 = utf8_to_utf32le(s.as_bytes(), &DecoderOptions::strict()).unwrap();
        let expected: Vec<u8> = s.chars().flat_map(|c| (c as u32).to_le_bytes()).collect();
        if utf32 != expected {
            return false;
        }
        utf32le_to_utf8(&utf32, &EncoderOptions::strict()).unwrap() == s.as_bytes()
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: decoding a concatenation of encoded sequences tiles the buffer
/// with no gaps or overlaps.
#[test]
fn decode_tiles_concatenation_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(code_points: Vec<AnyCodePoint>) -> bool {
        let mut buffer = Vec::new();
        let mut starts = Vec::new();
        for c in &code_points {
            starts.push(buffer.len());
            buffer.extend_from_slice(&encode(c.0).unwrap());
        }

        let decoded: Result<Vec<_>, _> = CodePoints::new(&buffer).collect();
        let Ok(decoded) = decoded else {
            return false;
        };
        let expected: Vec<_> = starts
            .into_iter()
            .zip(code_points.iter().map(|c| c.0))
            .collect();
        decoded == expected
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<AnyCodePoint>) -> bool);
}

/// Property: the decoder never panics on arbitrary bytes when called with a
/// valid position, and always makes progress on success.
#[test]
fn decode_arbitrary_bytes_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, start: usize) -> bool {
        if bytes.is_empty() {
            return true;
        }
        let position = start % bytes.len();
        match decode(&bytes, position) {
            Ok((_, next)) => next > position && next <= bytes.len() && next - position <= 4,
            Err(_) => true,
        }
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Vec<u8>, usize) -> bool);
}
