#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: whole-buffer tape decode.
//
// Catches bugs in:
// - Cursor advancement across back-to-back chunks
// - Tag dispatch and constraint checks on arbitrary headers
// - Panics in the Display rendering of decoded chunks
fuzz_target!(|data: &[u8]| {
    if let Ok(tape) = cas_decoder::CasDecoder::decode(data) {
        for chunk in &tape.chunks {
            let _ = chunk.to_string();
        }
    }
});
