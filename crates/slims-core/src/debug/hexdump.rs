//! Hexdump formatting.
//!
//! ```text
//! 0x000024: 48 65 6C 6C 6F 20 57 6F  72 6C 64 00 00 00 00 00  |Hello World.....|
//! ```

use std::fmt::Write;

const BYTES_PER_LINE: usize = 16;

/// Format `bytes` as hexdump lines, labelling each with `base + position`
pub fn format_hexdump(bytes: &[u8], base: usize, ascii: bool) -> Vec<String> {
    bytes
        .chunks(BYTES_PER_LINE)
        .enumerate()
        .map(|(i, chunk)| format_line(chunk, base + i * BYTES_PER_LINE, ascii))
        .collect()
}

fn format_line(chunk: &[u8], offset: usize, ascii: bool) -> String {
    let mut line = format!("0x{:06X}: ", offset);

    for j in 0..BYTES_PER_LINE {
        if j == 8 {
            line.push(' ');
        }
        match chunk.get(j) {
            Some(byte) => {
                let _ = write!(line, "{:02X} ", byte);
            }
            // Padding for incomplete lines
            None => line.push_str("   "),
        }
    }

    if ascii {
        line.push_str(" |");
        for byte in chunk {
            if (0x20..0x7F).contains(byte) {
                line.push(*byte as char);
            } else {
                line.push('.');
            }
        }
        for _ in chunk.len()..BYTES_PER_LINE {
            line.push(' ');
        }
        line.push('|');
    }

    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_line_with_ascii() {
        let lines = format_hexdump(b"Hello World\0\0\0\0\0", 0x24, true);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0],
            "0x000024: 48 65 6C 6C 6F 20 57 6F  72 6C 64 00 00 00 00 00  |Hello World.....|"
        );
    }

    #[test]
    fn test_short_last_line_is_padded() {
        let lines = format_hexdump(&[0xAB; 18], 0, true);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("0x000010: AB AB "));
        assert!(lines[1].ends_with("|..              |"));
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_without_ascii() {
        let lines = format_hexdump(&[1, 2, 3], 0x100, false);
        assert_eq!(lines, vec!["0x000100: 01 02 03".to_string()]);
    }
}
