use crate::error::WireError;
use crate::tag::Tag;

/// Chunk header size in bytes (fixed).
pub const HEADER_SIZE: usize = 8;

/// Chunk frame — one raw record from a CAS stream.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────┐
/// │ Offset │ Size    │ Description                      │
/// ├────────┼─────────┼──────────────────────────────────┤
/// │ 0x00   │ 4 bytes │ Tag (ASCII)                      │
/// │ 0x04   │ 2 bytes │ Payload length (u16 LE)          │
/// │ 0x06   │ 2 bytes │ Aux (meaning is tag-dependent)   │
/// │ 0x08   │ length  │ Payload                          │
/// └────────┴─────────┴──────────────────────────────────┘
/// ```
///
/// A CAS file is nothing but these frames back to back — no file
/// header, no magic number, no terminator. The stream ends when the
/// buffer does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkFrame {
    /// The four-byte chunk identifier.
    pub tag: Tag,

    /// The two aux bytes. Interpretation depends on the tag: a baud
    /// rate, a silence duration, two PWM durations, or bit-order flags.
    pub aux: [u8; 2],

    /// The payload bytes (`length` bytes from the wire; may be empty).
    pub payload: Vec<u8>,
}

impl ChunkFrame {
    /// Read one chunk frame from the front of the provided byte slice.
    ///
    /// # Returns
    ///
    /// `(frame, bytes_consumed)` where `bytes_consumed` is always
    /// `8 + length`.
    ///
    /// # Errors
    ///
    /// - [`WireError::TruncatedHeader`] if fewer than 8 bytes remain.
    /// - [`WireError::TruncatedPayload`] if the declared length runs
    ///   past the end of the slice. Per the format's framing invariant
    ///   (`8 + length <= remaining`), this fails fast rather than
    ///   truncating the payload.
    pub fn read_from(buf: &[u8]) -> Result<(Self, usize), WireError> {
        if buf.len() < HEADER_SIZE {
            return Err(WireError::TruncatedHeader {
                offset: 0,
                available: buf.len(),
            });
        }

        let tag = Tag::from_raw([buf[0], buf[1], buf[2], buf[3]]);
        let length = u16::from_le_bytes([buf[4], buf[5]]);
        let aux = [buf[6], buf[7]];

        let end = HEADER_SIZE + usize::from(length);
        if buf.len() < end {
            return Err(WireError::TruncatedPayload {
                offset: HEADER_SIZE,
                declared: length,
                available: buf.len() - HEADER_SIZE,
            });
        }

        let payload = buf[HEADER_SIZE..end].to_vec();

        Ok((Self { tag, aux, payload }, end))
    }

    /// The payload length as it appeared in the header.
    ///
    /// Always equal to `self.payload.len()`; kept as a `u16` accessor
    /// because that is the width the header field and the rendered
    /// descriptions use.
    #[must_use]
    pub fn length(&self) -> u16 {
        // payload was sized from the u16 header field, so this cannot truncate
        u16::try_from(self.payload.len()).unwrap_or(u16::MAX)
    }

    /// The aux bytes interpreted as a little-endian u16 — the reading
    /// used by the baud-rate and silence-duration tags.
    #[must_use]
    pub fn aux_u16(&self) -> u16 {
        u16::from_le_bytes(self.aux)
    }
}
