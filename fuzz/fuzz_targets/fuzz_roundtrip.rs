#![no_main]

use libfuzzer_sys::fuzz_target;
use utfconv::{DecoderOptions, EncoderOptions, utf8_to_utf32le, utf32le_to_utf8};

/// Interpret the input as UTF-32LE; whatever converts must come back
/// unchanged.
fn roundtrip(data: &[u8]) {
    let whole = data.len() - data.len() % 4;
    let data = &data[..whole];

    let Ok(utf8) = utf32le_to_utf8(data, &EncoderOptions::default()) else {
        return;
    };
    let back = utf8_to_utf32le(&utf8, &DecoderOptions::default())
        .expect("encoder output always decodes");
    assert_eq!(back, data);

    if let Ok(s) = std::str::from_utf8(&utf8) {
        assert_eq!(s.chars().count() * 4, data.len());
    }
}

fuzz_target!(|data: &[u8]| roundtrip(data));
