//! Hex offset parsing and formatting utilities.

use anyhow::Result;

/// Parse a hex offset string (with or without 0x prefix).
pub fn parse_hex_offset(s: &str) -> Result<usize> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    usize::from_str_radix(digits, 16)
        .map_err(|e| anyhow::anyhow!("Invalid hex offset '{}': {}", s, e))
}

/// Format an offset as a hex string with 0x prefix.
pub fn format_hex_offset(offset: usize) -> String {
    format!("0x{:X}", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_offset_with_prefix() {
        assert_eq!(parse_hex_offset("0x1C2").unwrap(), 0x1C2);
        assert_eq!(parse_hex_offset("0X1C2").unwrap(), 0x1C2);
    }

    #[test]
    fn test_parse_hex_offset_without_prefix() {
        assert_eq!(parse_hex_offset("24").unwrap(), 0x24);
        assert_eq!(parse_hex_offset("AAAAC").unwrap(), 0xAAAAC);
    }

    #[test]
    fn test_parse_hex_offset_invalid() {
        assert!(parse_hex_offset("GHIJK").is_err());
        assert!(parse_hex_offset("0xZZZ").is_err());
        assert!(parse_hex_offset("").is_err());
    }

    #[test]
    fn test_format_hex_offset() {
        assert_eq!(format_hex_offset(0x24), "0x24");
        assert_eq!(format_hex_offset(0), "0x0");
    }
}
