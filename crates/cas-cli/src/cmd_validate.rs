/// Implementation of `cas validate`.
///
/// Attempts a full decode of the CAS file and reports either a series
/// of success checkmarks (`✓`) or a diagnostic failure line (`✗`). The
/// command exits with code 0 on a valid file and code 1 on any error
/// (the main dispatcher converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Framing: 12 chunks, every header and payload within bounds
/// ✓ Tags: all chunk tags recognized
/// ✓ Constraints: tag-specific length rules hold
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: chunk 3 (baud): payload length must be 0, got 4
/// ```
///
/// Unlike `dump`, validation is all-or-nothing: it uses the
/// whole-buffer decoder and prints no per-chunk output.
use std::fs;

use anyhow::{Context, Result, anyhow};
use cas_decoder::CasDecoder;

use crate::ValidateArgs;

/// Run the `cas validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if the CAS stream
/// fails any structural check.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match CasDecoder::decode(&bytes) {
        Ok(tape) => {
            println!(
                "✓ Framing: {} chunk{}, every header and payload within bounds",
                tape.chunks.len(),
                if tape.chunks.len() == 1 { "" } else { "s" }
            );
            println!("✓ Tags: all chunk tags recognized");
            println!("✓ Constraints: tag-specific length rules hold");
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {e}");
            Err(anyhow!("validation failed for {}", args.file.display()))
        }
    }
}
