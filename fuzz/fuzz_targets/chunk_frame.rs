#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: ChunkFrame::read_from frame parsing.
//
// Catches bugs in:
// - Short-header handling (< 8 bytes)
// - Declared payload lengths past the end of the buffer
// - Consumed-byte accounting
fuzz_target!(|data: &[u8]| {
    if let Ok((frame, consumed)) = cas_wire::ChunkFrame::read_from(data) {
        assert_eq!(consumed, 8 + frame.payload.len());
        assert!(consumed <= data.len());
    }
});
