#![allow(missing_docs)]

use std::{error::Error, fmt::Write};

use insta::assert_snapshot;
use utfconv::{
    CodecError, DecoderOptions, EncoderOptions, decode, decode_with, encode, encode_with,
    utf8_to_utf32le, utf32le_to_utf8,
};

#[test]
fn snapshot_codec_error_messages() {
    assert_snapshot!(encode(0x11_0000).unwrap_err(), @"invalid code point 0x110000: above U+10FFFF");
    assert_snapshot!(
        encode_with(0xD800, &EncoderOptions::strict()).unwrap_err(),
        @"surrogate code point U+D800 is not a scalar value"
    );
    assert_snapshot!(decode(&[0x80], 0).unwrap_err(), @"invalid lead byte 0x80 at offset 0");
    assert_snapshot!(
        decode(&[0xC0, 0x00], 0).unwrap_err(),
        @"invalid continuation byte 0x00 at offset 1"
    );
    assert_snapshot!(
        decode(&[0xE2, 0x82], 0).unwrap_err(),
        @"truncated sequence at offset 0: expected 3 bytes, 2 available"
    );
    assert_snapshot!(
        decode_with(&[0xE0, 0x81, 0x81], 0, &DecoderOptions::strict()).unwrap_err(),
        @"overlong 3-byte encoding of U+0041 at offset 0"
    );
    assert_snapshot!(
        decode_with(&[0x41, 0xED, 0xB0, 0x80], 1, &DecoderOptions::strict()).unwrap_err(),
        @"surrogate code point U+DC00 is not a scalar value at offset 1"
    );
    assert_snapshot!(
        decode_with(&[0xF5, 0x80, 0x80, 0x80], 0, &DecoderOptions::strict()).unwrap_err(),
        @"invalid code point 0x140000: above U+10FFFF at offset 0"
    );
}

fn chain(err: &dyn Error) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        write!(text, ": {cause}").unwrap();
        source = cause.source();
    }
    text
}

#[test]
fn snapshot_conversion_error_messages() {
    let err = utf32le_to_utf8(&[0x41, 0, 0, 0, 0x42], &EncoderOptions::default()).unwrap_err();
    assert_snapshot!(err, @"conversion failed at byte 4");
    assert_snapshot!(
        chain(&err),
        @"conversion failed at byte 4: truncated input: 1 trailing bytes do not form a 4-byte unit"
    );
    assert_snapshot!(
        chain(&utf8_to_utf32le(b"ok\xC3", &DecoderOptions::default()).unwrap_err()),
        @"conversion failed at byte 2: truncated sequence at offset 2: expected 2 bytes, 1 available"
    );
}

#[test]
fn snapshot_sequence_formatting() {
    let euro = encode(0x20AC).unwrap();
    assert_snapshot!(format!("{euro:X}"), @"E2 82 AC");
    assert_snapshot!(format!("{euro:?}"), @"Utf8Sequence(E2 82 AC)");
}

#[test]
fn codec_errors_are_comparable() {
    let err = decode(&[0xF0, 0x90], 0).unwrap_err();
    assert_eq!(
        err,
        CodecError::TruncatedSequence {
            offset: 0,
            expected: 4,
            available: 2
        }
    );
}
