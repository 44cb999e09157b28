/// Errors raised while framing chunks out of a raw byte buffer.
///
/// Both variants are truncation conditions and both are fatal: a CAS
/// stream is a closed sequence of back-to-back chunks, so running out of
/// bytes mid-chunk means the input is malformed, never "done early".
/// Offsets are relative to the start of the chunk being read.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Fewer than 8 bytes remain where a chunk header is expected.
    #[error("unexpected end of input at offset {offset}: header needs 8 bytes, {available} remain")]
    TruncatedHeader { offset: usize, available: usize },

    /// The header's declared payload length runs past the end of the buffer.
    #[error(
        "payload truncated at offset {offset}: header declares {declared} bytes, {available} remain"
    )]
    TruncatedPayload {
        offset: usize,
        declared: u16,
        available: usize,
    },
}
