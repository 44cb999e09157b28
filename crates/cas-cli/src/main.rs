/// CAS command-line tool — list, validate, and post-process cassette
/// tape images for Atari 8-bit systems.
///
/// # Command overview
///
/// ```text
/// cas <COMMAND> [OPTIONS]
///
/// Commands:
///   dump       Print a one-line description of every chunk in a CAS file
///   validate   Check a CAS file for structural correctness
///   bootgen    Emit a C header fragment from a 256-byte boot-sector image
///   help       Print help information
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                            |
/// |------|----------------------------------------------------|
/// | 0    | Success                                            |
/// | 1    | Error (I/O failure, malformed chunk, bad input)    |
///
/// All error details are written to stderr so stdout can be piped cleanly;
/// `dump` keeps every line it printed before a malformed chunk.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod cmd_bootgen;
mod cmd_dump;
mod cmd_validate;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// The CAS cassette-image command-line tool.
#[derive(Parser)]
#[command(name = "cas", version, about = "CAS cassette image toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Print a one-line description of every chunk in a CAS file.
    Dump(DumpArgs),
    /// Check a CAS file for structural correctness.
    Validate(ValidateArgs),
    /// Emit a C header fragment from a boot-sector image and its reloc listing.
    Bootgen(BootgenArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `cas dump`.
///
/// Walks the file chunk by chunk and prints one description line per
/// chunk, in wire order. Decoding is streaming: when a malformed chunk
/// is hit, everything before it has already been printed and stays on
/// stdout, the diagnostic goes to stderr, and the exit code is 1.
#[derive(clap::Args)]
pub struct DumpArgs {
    /// Path to the `.cas` file to dump.
    pub file: PathBuf,

    /// Show a raw hex dump of each chunk's payload (16 bytes per line).
    #[arg(long)]
    pub show_hex: bool,
}

/// Arguments for `cas validate`.
///
/// Attempts a full decode of the CAS file and reports either a set of
/// success checkmarks or a diagnostic error. The process exits with
/// code 0 on success and code 1 on any structural problem.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Path to the `.cas` file to validate.
    pub file: PathBuf,
}

/// Arguments for `cas bootgen`.
///
/// Reads a 256-byte boot-sector image plus the assembler's relocation
/// listing and emits a C source fragment with the boot-loader byte
/// array, the relocation-offset array, and a count constant.
#[derive(clap::Args)]
pub struct BootgenArgs {
    /// Path to the binary boot-sector image (must be exactly 256 bytes).
    pub image: PathBuf,

    /// Path to the relocation listing (lines starting with `reloc`).
    pub relocs: PathBuf,

    /// Write the fragment to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dump(args) => cmd_dump::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
        Commands::Bootgen(args) => cmd_bootgen::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
