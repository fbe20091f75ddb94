use core::{fmt, ops::Deref};

/// One encoded code point: up to four UTF-8 bytes held inline.
///
/// Derefs to the encoded bytes, so it can be compared with and appended like a
/// `&[u8]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf8Sequence {
    bytes: [u8; 4],
    len: u8,
}

impl Utf8Sequence {
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_parts(bytes: [u8; 4], len: usize) -> Self {
        debug_assert!((1..=4).contains(&len), "sequence length {len} out of range");
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Number of bytes in the sequence, between 1 and 4.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }
}

impl Deref for Utf8Sequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Utf8Sequence {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for Utf8Sequence {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Utf8Sequence {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

// Hex dump, e.g. `Utf8Sequence(E2 82 AC)`.
impl fmt::Debug for Utf8Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Utf8Sequence(")?;
        fmt::UpperHex::fmt(self, f)?;
        f.write_str(")")
    }
}

/// Space-separated upper-case hex bytes, e.g. `E2 82 AC`.
impl fmt::UpperHex for Utf8Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}
