//! Test support for the CAS workspace: byte-level chunk synthesis.
//!
//! The production crates deliberately have no write path, so the tests
//! build their inputs here, one header field at a time. Keeping the
//! builders this low-level means a test can also produce deliberately
//! broken streams (bad lengths, stray bytes) that a real encoder would
//! refuse to emit.

/// Synthesize one raw chunk: 8-byte header followed by the payload.
///
/// The length field is derived from the payload, so a well-formed chunk
/// comes out by construction; corrupt streams are made by truncating or
/// splicing the returned bytes.
#[must_use]
pub fn chunk(tag: &[u8; 4], aux: [u8; 2], payload: &[u8]) -> Vec<u8> {
    let length = u16::try_from(payload.len()).expect("payload too long for a chunk");

    let mut buf = Vec::with_capacity(8 + payload.len());
    buf.extend_from_slice(tag);
    buf.extend_from_slice(&length.to_le_bytes());
    buf.extend_from_slice(&aux);
    buf.extend_from_slice(payload);
    buf
}

/// Concatenate chunks into one tape buffer.
#[must_use]
pub fn tape(chunks: &[Vec<u8>]) -> Vec<u8> {
    chunks.iter().flatten().copied().collect()
}

/// A representative tape prefix: title, baud rate, FSK leader, and a
/// standard 132-byte data record.
#[must_use]
pub fn typical_tape() -> Vec<u8> {
    tape(&[
        chunk(b"FUJI", [0, 0], b"BALLBLAZER"),
        chunk(b"baud", [0x58, 0x02], &[]),
        chunk(b"fsk ", [0xF4, 0x01], &[0x55; 10]),
        chunk(b"data", [0x64, 0x00], &[0xAA; 132]),
    ])
}
