use cas_wire::ChunkFrame;

use crate::chunk::Chunk;
use crate::error::DecodeError;

/// One fully decoded chunk, as yielded by [`ChunkReader`].
///
/// Carries both views of the record: `frame` is the raw wire form
/// (tag, aux, payload bytes — what a hex dump wants), `chunk` is the
/// typed interpretation (what a listing wants).
#[derive(Clone, Debug)]
pub struct DecodedChunk {
    /// Zero-based position in the stream.
    pub index: usize,

    /// Byte offset of the chunk's header within the buffer.
    pub offset: usize,

    /// The raw frame.
    pub frame: ChunkFrame,

    /// The typed interpretation.
    pub chunk: Chunk,
}

/// Pull decoder over an in-memory CAS buffer.
///
/// Walks the buffer head-to-tail, yielding one decoded chunk at a time
/// until the buffer is exhausted. The whole input lives in memory up
/// front — CAS files are tape images measured in kilobytes, so there is
/// nothing to stream from disk.
///
/// Decoding a chunk takes three steps, and any of them can fail:
///
/// ```text
///   frame   ChunkFrame::read_from   ← truncated header / payload
///   classify Chunk::from_frame      ← unknown tag, constraint violation
///   advance  cursor += 8 + length   ← (payload skipped even when unread)
/// ```
///
/// Errors are terminal: after yielding `Err`, the iterator is fused and
/// yields nothing further. Chunks already yielded stay yielded — that
/// is what lets a dump print every valid record before the bad one.
///
/// # Example
///
/// ```rust
/// use cas_decoder::ChunkReader;
///
/// let buf = b"baud\x00\x00\x58\x02";
/// for decoded in ChunkReader::new(buf) {
///     println!("{}", decoded.unwrap().chunk);
/// }
/// ```
pub struct ChunkReader<'a> {
    buf: &'a [u8],
    cursor: usize,
    index: usize,
    last_sample: Option<u16>,
    failed: bool,
}

impl<'a> ChunkReader<'a> {
    /// Create a reader over the given buffer. An empty buffer is a
    /// valid (zero-chunk) stream.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            cursor: 0,
            index: 0,
            last_sample: None,
            failed: false,
        }
    }

    /// Bytes consumed so far. After a clean run this equals the buffer
    /// length exactly (every chunk accounts for `8 + length` bytes).
    #[must_use]
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// The most recently decoded `pwms` sample value.
    ///
    /// Carried across chunks for future consumers; the current tooling
    /// only prints it.
    #[must_use]
    pub fn last_sample(&self) -> Option<u16> {
        self.last_sample
    }

    fn read_next(&mut self) -> Option<Result<DecodedChunk, DecodeError>> {
        if self.failed || self.cursor >= self.buf.len() {
            return None;
        }

        let offset = self.cursor;
        let index = self.index;

        let (frame, consumed) = match ChunkFrame::read_from(&self.buf[offset..]) {
            Ok(ok) => ok,
            Err(source) => {
                self.failed = true;
                return Some(Err(DecodeError::Frame { index, source }));
            }
        };

        let chunk = match Chunk::from_frame(index, &frame) {
            Ok(chunk) => chunk,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };

        if let Some(sample) = chunk.sample() {
            self.last_sample = Some(sample);
        }

        self.cursor += consumed;
        self.index += 1;

        Some(Ok(DecodedChunk {
            index,
            offset,
            frame,
            chunk,
        }))
    }
}

impl Iterator for ChunkReader<'_> {
    type Item = Result<DecodedChunk, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next()
    }
}
