//! Conformance tests: rendered chunk descriptions pinned with insta.
//!
//! The dump output is the tool's contract — scripts downstream parse
//! these lines — so every tag's template is pinned here as an inline
//! snapshot. A diff means either a deliberate format change (accept via
//! `cargo insta review`) or an accidental regression.

use cas_decoder::{CasDecoder, ChunkReader};
use cas_tests::{chunk, tape};
use insta::assert_snapshot;

/// Decode a single synthesized chunk and render its description line.
fn render_one(buf: &[u8]) -> String {
    let decoded = CasDecoder::decode(buf).unwrap();
    assert_eq!(decoded.chunks.len(), 1);
    decoded.chunks[0].to_string()
}

// ── Per-tag templates ─────────────────────────────────────────────────────────

#[test]
fn fuji_line() {
    let line = render_one(&chunk(b"FUJI", [0, 0], b"HELLO"));
    assert_snapshot!(line, @"FUJI 'HELLO'");
}

#[test]
fn baud_line() {
    let line = render_one(&chunk(b"baud", [0x58, 0x02], &[]));
    assert_snapshot!(line, @"Baud rate: 600");
}

#[test]
fn fsk_line() {
    let line = render_one(&chunk(b"fsk ", [0xF4, 0x01], &[0u8; 10]));
    assert_snapshot!(line, @"FSK, silence 500 ms, length 10");
}

#[test]
fn data_line() {
    let line = render_one(&chunk(b"data", [0x64, 0x00], &[0u8; 132]));
    assert_snapshot!(line, @"DATA, silence 100 ms, length 132");
}

#[test]
fn pwmc_line() {
    let line = render_one(&chunk(b"pwmc", [0x32, 0x00], &[0u8; 6]));
    assert_snapshot!(line, @"PWMC, silence 50 ms, length 6");
}

#[test]
fn pwml_line() {
    let line = render_one(&chunk(b"pwml", [0x00, 0x00], &[0u8; 4]));
    assert_snapshot!(line, @"PWML, silence 0 ms, length 4");
}

#[test]
fn pwmd_line() {
    let line = render_one(&chunk(b"pwmd", [10, 20], &[]));
    assert_snapshot!(line, @"PWMD, 0 duration 10, 1 duration 20, length 0");
}

#[test]
fn pwms_line_msb() {
    // aux[0] = 0b0000_0101: bit 2 → MSB, bits 0-1 → 01; sample 0x1234.
    let line = render_one(&chunk(b"pwms", [0b0000_0101, 0], &[0x34, 0x12]));
    assert_snapshot!(line, @"PWMS, bit order MSB, pwm bit order 01, sample 4660");
}

#[test]
fn pwms_line_lsb_pads_pwm_order() {
    // bits 0-1 = 00 must render both digits, not collapse to "0".
    let line = render_one(&chunk(b"pwms", [0b0000_0000, 0], &[0x01, 0x00]));
    assert_snapshot!(line, @"PWMS, bit order LSB, pwm bit order 00, sample 1");
}

// ── Whole-dump ordering ───────────────────────────────────────────────────────

#[test]
fn full_tape_dump() {
    let buf = tape(&[
        chunk(b"FUJI", [0, 0], b"BALLBLAZER"),
        chunk(b"baud", [0x58, 0x02], &[]),
        chunk(b"fsk ", [0xF4, 0x01], &[0u8; 10]),
        chunk(b"data", [0x64, 0x00], &[0u8; 132]),
        chunk(b"pwmc", [0x32, 0x00], &[0u8; 6]),
        chunk(b"pwml", [0x00, 0x00], &[0u8; 4]),
        chunk(b"pwmd", [10, 20], &[]),
        chunk(b"pwms", [0b0000_0101, 0], &[0x34, 0x12]),
    ]);

    let lines: Vec<String> = ChunkReader::new(&buf)
        .map(|d| d.unwrap().chunk.to_string())
        .collect();

    assert_snapshot!(lines.join("\n"), @r"
    FUJI 'BALLBLAZER'
    Baud rate: 600
    FSK, silence 500 ms, length 10
    DATA, silence 100 ms, length 132
    PWMC, silence 50 ms, length 6
    PWML, silence 0 ms, length 4
    PWMD, 0 duration 10, 1 duration 20, length 0
    PWMS, bit order MSB, pwm bit order 01, sample 4660
    ");
}
