#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfconv::{CodePoints, DecoderOptions, decode_with};

#[derive(Debug, Arbitrary)]
struct Input {
    strict: bool,
    bytes: Vec<u8>,
}

fn decoder(input: Input) {
    let options = if input.strict {
        DecoderOptions::strict()
    } else {
        DecoderOptions::default()
    };

    // Strict decoding must agree with the standard library on where the first
    // error is.
    let valid_up_to = match std::str::from_utf8(&input.bytes) {
        Ok(s) => s.len(),
        Err(err) => err.valid_up_to(),
    };

    let mut position = 0;
    for item in CodePoints::with_options(&input.bytes, options) {
        match item {
            Ok((offset, code_point)) => {
                assert_eq!(offset, position);
                let (again, next) = decode_with(&input.bytes, offset, &options)
                    .expect("decoding is deterministic");
                assert_eq!(again, code_point);
                assert!(next > offset && next - offset <= 4);
                position = next;
            }
            Err(_) => break,
        }
    }

    if input.strict {
        assert_eq!(position, valid_up_to);
    } else {
        assert!(position >= valid_up_to);
    }
}

fuzz_target!(|input: Input| decoder(input));
