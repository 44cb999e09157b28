/// Implementation of `cas dump`.
///
/// Reads a CAS file and prints one description line per chunk, in wire
/// order. Decoding is streaming, so on a malformed chunk every prior
/// line has already reached stdout; the error propagates to `main`,
/// which prints the diagnostic to stderr and exits 1.
///
/// # Output format
///
/// ```text
/// FUJI 'BALLBLAZER'
/// Baud rate: 600
/// FSK, silence 500 ms, length 10
/// DATA, silence 100 ms, length 132
/// PWMS, bit order MSB, pwm bit order 01, sample 4660
/// ```
use std::fs;

use anyhow::{Context, Result};
use cas_decoder::ChunkReader;

use crate::DumpArgs;

/// Run the `cas dump` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any chunk is
/// malformed (truncated, unknown tag, or constraint violation).
pub fn run(args: &DumpArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    for decoded in ChunkReader::new(&bytes) {
        let decoded = decoded.with_context(|| format!("in {}", args.file.display()))?;

        println!("{}", decoded.chunk);

        if args.show_hex && !decoded.frame.payload.is_empty() {
            print_hex(&decoded.frame.payload);
        }
    }

    Ok(())
}

/// Print a payload as `offset  hex  ascii` lines, 16 bytes per line.
fn print_hex(payload: &[u8]) {
    for (i, row) in payload.chunks(16).enumerate() {
        let offset = i * 16;
        let hex: String = row
            .iter()
            .fold(String::with_capacity(row.len() * 3), |mut s, b| {
                use std::fmt::Write as _;
                if !s.is_empty() {
                    s.push(' ');
                }
                let _ = write!(s, "{b:02x}");
                s
            });
        let ascii: String = row
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        println!("    {offset:04x}  {hex:<47}  {ascii}");
    }
}
