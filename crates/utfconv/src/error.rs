use thiserror::Error;

/// Failure of a single encode or decode step.
///
/// Offsets are absolute positions into the buffer handed to the decoder. The
/// encoder works on a single value and leaves them empty.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The value is above `U+10FFFF` and has no UTF-8 form.
    #[error("invalid code point 0x{code_point:X}: above U+10FFFF{}", AtOffset(.offset))]
    InvalidCodePoint {
        /// The rejected value.
        code_point: u32,
        /// Start of the sequence that decoded to it, if any.
        offset: Option<usize>,
    },

    /// A UTF-16 surrogate was found while surrogates are being rejected.
    #[error("surrogate code point U+{code_point:04X} is not a scalar value{}", AtOffset(.offset))]
    SurrogateCodePoint {
        /// The surrogate, in `0xD800..=0xDFFF`.
        code_point: u32,
        /// Start of the sequence that decoded to it, if any.
        offset: Option<usize>,
    },

    /// The byte at `offset` cannot start a sequence.
    #[error("invalid lead byte 0x{byte:02X} at offset {offset}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Position of `byte`.
        offset: usize,
    },

    /// The byte at `offset` does not match `10xxxxxx`.
    #[error("invalid continuation byte 0x{byte:02X} at offset {offset}")]
    InvalidContinuationByte {
        /// The offending byte.
        byte: u8,
        /// Position of `byte`, not of the lead byte.
        offset: usize,
    },

    /// The buffer ended inside the sequence starting at `offset`.
    #[error(
        "truncated sequence at offset {offset}: expected {expected} bytes, {available} available"
    )]
    TruncatedSequence {
        /// Start of the sequence.
        offset: usize,
        /// Length announced by the lead byte.
        expected: usize,
        /// Bytes left in the buffer from `offset`.
        available: usize,
    },

    /// The sequence at `offset` uses more bytes than `code_point` needs.
    #[error("overlong {len}-byte encoding of U+{code_point:04X} at offset {offset}")]
    OverlongEncoding {
        /// The decoded value.
        code_point: u32,
        /// Start of the sequence.
        offset: usize,
        /// Length of the sequence.
        len: usize,
    },
}

/// The underlying cause of a [`ConversionError`].
#[derive(Debug, Error)]
pub enum ErrorSource {
    /// The encoder or decoder rejected a unit.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// The UTF-32LE input does not end on a 4-byte boundary.
    #[error("truncated input: {remaining} trailing bytes do not form a 4-byte unit")]
    TruncatedInput {
        /// Length of the incomplete final unit.
        remaining: usize,
    },
    /// Reading the input or writing the output failed.
    #[cfg(feature = "std")]
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Error returned by the converters.
///
/// Conversions abort on the first failing unit. The message only names the
/// position; the cause is [`core::error::Error::source`], also available as
/// [`ConversionError::cause`] and [`ConversionError::kind`].
#[derive(Debug, Error)]
#[error("conversion failed{}", AtByte(.offset))]
pub struct ConversionError {
    pub(crate) source: ErrorSource,
    pub(crate) offset: Option<usize>,
}

impl ConversionError {
    pub(crate) fn at(offset: usize, source: impl Into<ErrorSource>) -> Self {
        Self {
            source: source.into(),
            offset: Some(offset),
        }
    }

    #[cfg(feature = "std")]
    pub(crate) fn io(err: std::io::Error) -> Self {
        Self {
            source: ErrorSource::Io(err),
            offset: None,
        }
    }

    /// Byte offset into the input of the unit that failed, if the failure is
    /// tied to a position.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// The cause this conversion was aborted with.
    #[must_use]
    pub fn cause(&self) -> &ErrorSource {
        &self.source
    }

    /// The codec error behind this failure, if there is one.
    #[must_use]
    pub fn codec_error(&self) -> Option<CodecError> {
        match self.source {
            ErrorSource::Codec(err) => Some(err),
            _ => None,
        }
    }

    /// Kind of the original failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match &self.source {
            ErrorSource::Codec(err) => match err {
                CodecError::InvalidCodePoint { .. } => ErrorKind::InvalidCodePoint,
                CodecError::SurrogateCodePoint { .. } => ErrorKind::SurrogateCodePoint,
                CodecError::InvalidLeadByte { .. } => ErrorKind::InvalidLeadByte,
                CodecError::InvalidContinuationByte { .. } => ErrorKind::InvalidContinuationByte,
                CodecError::TruncatedSequence { .. } => ErrorKind::TruncatedSequence,
                CodecError::OverlongEncoding { .. } => ErrorKind::OverlongEncoding,
            },
            ErrorSource::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            #[cfg(feature = "std")]
            ErrorSource::Io(_) => ErrorKind::Io,
        }
    }
}

/// Field-less mirror of every failure a conversion can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// [`CodecError::InvalidCodePoint`]
    InvalidCodePoint,
    /// [`CodecError::SurrogateCodePoint`]
    SurrogateCodePoint,
    /// [`CodecError::InvalidLeadByte`]
    InvalidLeadByte,
    /// [`CodecError::InvalidContinuationByte`]
    InvalidContinuationByte,
    /// [`CodecError::TruncatedSequence`]
    TruncatedSequence,
    /// [`CodecError::OverlongEncoding`]
    OverlongEncoding,
    /// [`ErrorSource::TruncatedInput`]
    TruncatedInput,
    /// An I/O failure in the file converter.
    Io,
}

struct AtOffset<'a>(&'a Option<usize>);

impl core::fmt::Display for AtOffset<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self.0 {
            Some(offset) => write!(f, " at offset {offset}"),
            None => Ok(()),
        }
    }
}

struct AtByte<'a>(&'a Option<usize>);

impl core::fmt::Display for AtByte<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self.0 {
            Some(offset) => write!(f, " at byte {offset}"),
            None => Ok(()),
        }
    }
}
