use std::fmt;

/// Four-byte ASCII chunk identifier.
///
/// A newtype rather than a bare `[u8; 4]` so the known tags can live as
/// associated constants and unrecognized tags still print legibly in
/// error messages. Note that `fsk ` really does carry a trailing space
/// on the wire — the constant preserves it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub(crate) [u8; 4]);

impl Tag {
    /// Tape description / title record.
    pub const FUJI: Self = Self(*b"FUJI");

    /// Baud rate for subsequent FSK data.
    pub const BAUD: Self = Self(*b"baud");

    /// FSK-encoded data record. The trailing space is part of the tag.
    pub const FSK: Self = Self(*b"fsk ");

    /// Standard data record.
    pub const DATA: Self = Self(*b"data");

    /// PWM block marker (turbo loaders).
    pub const PWMC: Self = Self(*b"pwmc");

    /// PWM raw pulse-length record.
    pub const PWML: Self = Self(*b"pwml");

    /// PWM bit-duration settings record.
    pub const PWMD: Self = Self(*b"pwmd");

    /// PWM sample-rate / bit-order settings record.
    pub const PWMS: Self = Self(*b"pwms");

    /// Create a tag from the raw header bytes.
    #[must_use]
    pub fn from_raw(raw: [u8; 4]) -> Self {
        Self(raw)
    }

    /// Get the underlying four bytes.
    #[must_use]
    pub fn raw(self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for Tag {
    /// Renders the tag as ASCII, escaping anything non-printable, so a
    /// corrupt tag like `\x00\xFFab` still produces a readable message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() || b == b' ' {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{b:02X}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}
