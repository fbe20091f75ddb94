#![allow(clippy::struct_excessive_bools)]

use core::{fmt, str::FromStr};

use thiserror::Error;

/// Configuration options for [`encode_with`](crate::encode_with).
///
/// # Default
///
/// All options default to `false`, which encodes every value up to `U+10FFFF`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Whether to refuse UTF-16 surrogate code points (`U+D800..=U+DFFF`).
    ///
    /// When `false` the encoder writes them as ordinary 3-byte sequences
    /// (sometimes called WTF-8 or CESU-style output).
    ///
    /// # Default
    ///
    /// `false`
    pub reject_surrogates: bool,
}

impl EncoderOptions {
    /// Options that only produce well-formed UTF-8.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            reject_surrogates: true,
        }
    }
}

/// Configuration options for [`decode_with`](crate::decode_with).
///
/// The structural checks (lead byte, continuation bytes, truncation) are
/// always performed. These flags add checks on the decoded value.
///
/// # Examples
///
/// ```rust
/// use utfconv::{CodecError, DecoderOptions, decode, decode_with};
///
/// // `C1 81` is an overlong two-byte form of 'A'.
/// assert_eq!(decode(&[0xC1, 0x81], 0), Ok((0x41, 2)));
/// assert_eq!(
///     decode_with(&[0xC1, 0x81], 0, &DecoderOptions::strict()),
///     Err(CodecError::OverlongEncoding { code_point: 0x41, offset: 0, len: 2 }),
/// );
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Whether to refuse sequences longer than the shortest form of the value
    /// they carry.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_overlong: bool,

    /// Whether to refuse sequences that decode to a UTF-16 surrogate.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_surrogates: bool,

    /// Whether to refuse 4-byte sequences that decode above `U+10FFFF`.
    ///
    /// A leading `F4`..`F7` byte can carry values up to `0x1F_FFFF`. When
    /// `false` those values are returned as is.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_out_of_range: bool,
}

impl DecoderOptions {
    /// Options that accept only well-formed UTF-8.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            reject_overlong: true,
            reject_surrogates: true,
            reject_out_of_range: true,
        }
    }
}

/// Options for the buffer and file converters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Used for the UTF-32LE to UTF-8 direction.
    pub encoder: EncoderOptions,
    /// Used for the UTF-8 to UTF-32LE direction.
    pub decoder: DecoderOptions,
}

impl ConvertOptions {
    /// Strict options for both directions.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            encoder: EncoderOptions::strict(),
            decoder: DecoderOptions::strict(),
        }
    }
}

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Read 4-byte little-endian code points, write UTF-8.
    Utf32ToUtf8,
    /// Read UTF-8, write 4-byte little-endian code points.
    Utf8ToUtf32,
}

impl Direction {
    /// Stable name, also accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf32ToUtf8 => "utf32-to-utf8",
            Self::Utf8ToUtf32 => "utf8-to-utf32",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`Direction`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown direction '{0}', expected 'utf32-to-utf8' or 'utf8-to-utf32'")]
pub struct ParseDirectionError(alloc::string::String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf32-to-utf8" | "u32-to-u8" | "utf32" => Ok(Self::Utf32ToUtf8),
            "utf8-to-utf32" | "u8-to-u32" | "utf8" => Ok(Self::Utf8ToUtf32),
            _ => Err(ParseDirectionError(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("utf32-to-utf8", Direction::Utf32ToUtf8)]
    #[case("UTF8-to-UTF32", Direction::Utf8ToUtf32)]
    #[case("u32-to-u8", Direction::Utf32ToUtf8)]
    #[case("utf8", Direction::Utf8ToUtf32)]
    fn parses_direction(#[case] input: &str, #[case] expected: Direction) {
        assert_eq!(input.parse::<Direction>(), Ok(expected));
    }

    #[test]
    fn direction_display_round_trips() {
        for direction in [Direction::Utf32ToUtf8, Direction::Utf8ToUtf32] {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn rejects_unknown_direction() {
        let err = "latin1".parse::<Direction>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown direction 'latin1', expected 'utf32-to-utf8' or 'utf8-to-utf32'"
        );
    }

    #[test]
    fn defaults_are_permissive() {
        let options = ConvertOptions::default();
        assert!(!options.encoder.reject_surrogates);
        assert!(!options.decoder.reject_overlong);
        assert!(!options.decoder.reject_surrogates);
        assert!(!options.decoder.reject_out_of_range);
    }
}
