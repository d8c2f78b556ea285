//! Hexdump command implementation.
//!
//! Displays raw save bytes in traditional hexdump format, useful for
//! locating fields that are not in a schema yet.

use std::path::Path;

use anyhow::{Result, bail};
use slims_core::{ByteBuffer, format_hexdump};

use super::hex_utils::{format_hex_offset, parse_hex_offset};

/// Run the hexdump command
pub fn run(file: &Path, offset: &str, length: usize, ascii: bool) -> Result<()> {
    let buffer = ByteBuffer::load(file)?;
    let start = parse_hex_offset(offset)?;
    if start >= buffer.len() {
        bail!(
            "Offset {} is past the end of the file ({} bytes)",
            format_hex_offset(start),
            buffer.len()
        );
    }

    let end = start.saturating_add(length).min(buffer.len());
    println!(
        "Hexdump of {} at {} ({} bytes):",
        file.display(),
        format_hex_offset(start),
        end - start
    );
    println!();

    for line in format_hexdump(&buffer.as_bytes()[start..end], start, ascii) {
        println!("{}", line);
    }

    Ok(())
}
