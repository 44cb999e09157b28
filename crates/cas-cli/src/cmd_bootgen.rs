/// Implementation of `cas bootgen`.
///
/// Converts a 256-byte boot-sector image and its relocation listing
/// into a C source fragment ready to paste into firmware:
///
/// ```text
/// const uint8_t boot_loader[256] = {
///     0x00,0x03,0x00,0x07,...        (16 values per line)
/// };
///
/// const uint8_t boot_reloc[2] = {
///     0x10,0x35
/// };
///
/// const int boot_reloc_count = 2;
/// ```
///
/// The relocation listing is the assembler's text output: every line
/// starting with `reloc` carries the relocated byte offset as two hex
/// digits in columns 6-7 (right after the keyword and its separator).
/// All other lines are ignored.
use std::fs;

use anyhow::{Context, Result, bail};

use crate::BootgenArgs;

/// Required size of the boot-sector image.
const BOOT_IMAGE_SIZE: usize = 256;

/// Column where the two reloc hex digits start.
const RELOC_HEX_COLUMN: usize = 6;

/// Values per line in the emitted array literals.
const VALUES_PER_LINE: usize = 16;

/// Run the `cas bootgen` command.
///
/// # Errors
///
/// Returns an error if either input cannot be read, the image is not
/// exactly 256 bytes, or a `reloc` line does not carry two hex digits
/// at the expected column.
pub fn run(args: &BootgenArgs) -> Result<()> {
    let image =
        fs::read(&args.image).with_context(|| format!("cannot read {}", args.image.display()))?;
    if image.len() != BOOT_IMAGE_SIZE {
        bail!(
            "boot image {} must be exactly {BOOT_IMAGE_SIZE} bytes, got {}",
            args.image.display(),
            image.len()
        );
    }

    let listing = fs::read_to_string(&args.relocs)
        .with_context(|| format!("cannot read {}", args.relocs.display()))?;
    let relocs = parse_reloc_offsets(&listing)
        .with_context(|| format!("in {}", args.relocs.display()))?;

    let fragment = render_fragment(&image, &relocs);

    match &args.output {
        Some(path) => fs::write(path, fragment)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => print!("{fragment}"),
    }

    Ok(())
}

/// Extract relocation offsets from the assembler listing.
///
/// Lines not starting with `reloc` are ignored; a `reloc` line that is
/// too short or carries non-hex characters at the expected column is a
/// hard error naming the line number.
fn parse_reloc_offsets(listing: &str) -> Result<Vec<u8>> {
    let mut offsets = Vec::new();

    for (lineno, line) in listing.lines().enumerate() {
        if !line.starts_with("reloc") {
            continue;
        }

        let digits = line
            .get(RELOC_HEX_COLUMN..RELOC_HEX_COLUMN + 2)
            .with_context(|| format!("line {}: reloc entry too short", lineno + 1))?;
        let offset = u8::from_str_radix(digits, 16)
            .with_context(|| format!("line {}: '{digits}' is not a hex byte", lineno + 1))?;

        offsets.push(offset);
    }

    Ok(offsets)
}

/// Render the complete C fragment: boot array, reloc array, count.
///
/// A listing with no `reloc` lines is valid; the reloc array is omitted
/// entirely in that case (a zero-length array with an empty initializer
/// is not ISO C) and only the count constant is emitted.
fn render_fragment(image: &[u8], relocs: &[u8]) -> String {
    let mut out = String::new();

    out.push_str(&render_byte_array("boot_loader", image));
    out.push('\n');
    if !relocs.is_empty() {
        out.push_str(&render_byte_array("boot_reloc", relocs));
        out.push('\n');
    }
    out.push_str(&format!("const int boot_reloc_count = {};\n", relocs.len()));

    out
}

/// Render one `const uint8_t name[N] = { ... };` literal, 16 values per
/// line, tab-indented, no comma after the final value.
fn render_byte_array(name: &str, bytes: &[u8]) -> String {
    let mut s = format!("const uint8_t {name}[{}] = {{\n", bytes.len());

    for (i, b) in bytes.iter().enumerate() {
        if i % VALUES_PER_LINE == 0 {
            s.push('\t');
        }
        s.push_str(&format!("0x{b:02X}"));
        if i + 1 < bytes.len() {
            s.push(',');
        }
        if (i + 1) % VALUES_PER_LINE == 0 || i + 1 == bytes.len() {
            s.push('\n');
        }
    }

    s.push_str("};\n");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_array_is_sixteen_per_line() {
        let image: Vec<u8> = (0..=255).collect();
        let rendered = render_byte_array("boot_loader", &image);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "const uint8_t boot_loader[256] = {");
        assert_eq!(
            lines[1],
            "\t0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0A,0x0B,0x0C,0x0D,0x0E,0x0F,"
        );
        // 256 values -> 16 full lines, last value has no trailing comma.
        assert_eq!(lines.len(), 18);
        assert!(lines[16].ends_with("0xFF"));
        assert_eq!(lines[17], "};");
    }

    #[test]
    fn short_array_single_line() {
        let rendered = render_byte_array("boot_reloc", &[0x10, 0x35, 0x77]);
        assert_eq!(
            rendered,
            "const uint8_t boot_reloc[3] = {\n\t0x10,0x35,0x77\n};\n"
        );
    }

    #[test]
    fn reloc_lines_extracted_others_ignored() {
        let listing = "\
; boot sector relocation map
reloc 10 lda #$00
header stuff
reloc 35 jmp ($0a)
reloc ff sta $0244
";
        let offsets = parse_reloc_offsets(listing).unwrap();
        assert_eq!(offsets, vec![0x10, 0x35, 0xFF]);
    }

    #[test]
    fn reloc_line_too_short_errors_with_line_number() {
        let err = parse_reloc_offsets("reloc").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn reloc_non_hex_errors() {
        let err = parse_reloc_offsets("reloc zz lda").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn fragment_contains_count_constant() {
        let image = vec![0u8; 256];
        let fragment = render_fragment(&image, &[0x04]);
        assert!(fragment.contains("const uint8_t boot_loader[256] = {"));
        assert!(fragment.contains("const uint8_t boot_reloc[1] = {"));
        assert!(fragment.ends_with("const int boot_reloc_count = 1;\n"));
    }

    #[test]
    fn no_relocs_omits_the_array() {
        let image = vec![0u8; 256];
        let fragment = render_fragment(&image, &[]);
        assert!(!fragment.contains("boot_reloc["));
        assert!(fragment.ends_with("const int boot_reloc_count = 0;\n"));
    }
}
