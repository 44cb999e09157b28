use crate::chunk::Chunk;
use crate::error::DecodeError;
use crate::reader::ChunkReader;

/// The result of decoding a complete CAS buffer.
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ DecodedTape                                          │
/// │   chunks: Vec<Chunk>       ← ordered, wire order     │
/// │   last_sample: Option<u16> ← final pwms sample value │
/// └──────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct DecodedTape {
    /// Every chunk in the stream, in wire order.
    pub chunks: Vec<Chunk>,

    /// The last `pwms` sample value seen, if any chunk carried one.
    pub last_sample: Option<u16>,
}

/// Whole-buffer CAS decoder — all-or-nothing.
///
/// Drains a [`ChunkReader`] over the full buffer and returns every
/// chunk, or the first error with nothing else. Use this when partial
/// output is unwanted (validation, tests); use [`ChunkReader`] directly
/// when chunks should be consumed as they decode (the dump command, so
/// lines printed before a malformed chunk stay printed).
///
/// # Example
///
/// ```rust
/// use cas_decoder::CasDecoder;
///
/// let buf = b"pwmd\x00\x00\x0A\x14";
/// let tape = CasDecoder::decode(buf).unwrap();
/// assert_eq!(tape.chunks.len(), 1);
/// ```
pub struct CasDecoder;

impl CasDecoder {
    /// Decode a complete CAS buffer into its chunk sequence.
    ///
    /// An empty buffer is a valid zero-chunk tape.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`] from the first malformed chunk: truncation,
    /// unknown tag, or a tag-specific constraint violation.
    pub fn decode(buf: &[u8]) -> Result<DecodedTape, DecodeError> {
        let mut reader = ChunkReader::new(buf);
        let mut chunks = Vec::new();

        for decoded in reader.by_ref() {
            chunks.push(decoded?.chunk);
        }

        Ok(DecodedTape {
            chunks,
            last_sample: reader.last_sample(),
        })
    }
}
