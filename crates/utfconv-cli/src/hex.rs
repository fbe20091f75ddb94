//! Hex parsing for the `encode` and `decode` arguments.

use anyhow::{Context, Result, bail};

fn strip_prefix(input: &str) -> &str {
    let input = input.trim();
    ["0x", "0X", "U+", "u+"]
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix))
        .unwrap_or(input)
}

fn is_hex(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parses a code point written as hex, with an optional `0x` or `U+` prefix.
pub fn parse_code_point(input: &str) -> Result<u32> {
    let digits = strip_prefix(input);
    if digits.is_empty() {
        bail!("empty code point");
    }
    if !is_hex(digits) {
        bail!("invalid hex code point '{input}'");
    }
    u32::from_str_radix(digits, 16).with_context(|| format!("invalid hex code point '{input}'"))
}

/// Parses one byte per argument; an argument may also hold several
/// space-separated bytes.
pub fn parse_bytes<S: AsRef<str>>(args: &[S]) -> Result<Vec<u8>> {
    args.iter()
        .flat_map(|arg| arg.as_ref().split_whitespace())
        .map(|token| {
            let digits = strip_prefix(token);
            if !is_hex(digits) || digits.len() > 2 {
                bail!("'{token}' is not a hex byte");
            }
            u8::from_str_radix(digits, 16).with_context(|| format!("'{token}' is not a hex byte"))
        })
        .collect()
}
