use cas_wire::{Tag, WireError};

/// Errors that can occur while decoding a CAS chunk stream.
///
/// Every variant names the chunk it failed on by zero-based index, and
/// by tag where one was recognized, so the diagnostic points at the
/// exact record and the exact constraint that broke. All of these are
/// unrecoverable: the tag set is closed and the constraints are part of
/// the format, so decoding stops at the first violation — no skipping,
/// no partial-chunk output, no aggregation.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Frame(WireError)   ← header or payload ran off the end of the buffer
///   ├── UnknownTag         ← no dispatch rule matches the four tag bytes
///   ├── LengthMismatch     ← tag requires an exact payload length (baud: 0, pwms: 2)
///   ├── OddLength          ← pwml payloads are u16 pairs, so length must be even
///   └── InvalidText        ← FUJI payload is not valid UTF-8
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A truncation error from the wire layer while framing this chunk.
    ///
    /// The inner [`WireError`] distinguishes a short header from a
    /// payload that overruns the buffer; its offsets are relative to
    /// the start of the failing chunk.
    #[error("chunk {index}: {source}")]
    Frame {
        index: usize,
        #[source]
        source: WireError,
    },

    /// The four tag bytes match none of the known chunk types.
    ///
    /// The CAS tag set is closed, so an unrecognized tag means the file
    /// is not a CAS stream (or is corrupt) — it is never skipped.
    #[error("chunk {index}: unknown tag '{tag}'")]
    UnknownTag { index: usize, tag: Tag },

    /// A tag that requires an exact payload length got something else.
    #[error("chunk {index} ({tag}): payload length must be {expected}, got {actual}")]
    LengthMismatch {
        index: usize,
        tag: Tag,
        expected: u16,
        actual: u16,
    },

    /// A `pwml` chunk with an odd payload length.
    #[error("chunk {index} ({tag}): payload length must be even, got {actual}")]
    OddLength { index: usize, tag: Tag, actual: u16 },

    /// A `FUJI` chunk whose payload is not valid UTF-8 text.
    #[error("chunk {index} ({tag}): payload is not valid UTF-8 text")]
    InvalidText { index: usize, tag: Tag },
}
