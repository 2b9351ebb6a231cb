//! Text encoding, measurement and line breaking

pub mod encoding;
mod font;
pub mod metrics;
mod wrap;

pub use encoding::{encode_win_ansi, is_win_ansi_encodable};
pub use font::Font;
pub use metrics::helvetica_text_width;
pub use wrap::wrap_text;

use std::fmt::Write;

/// Escape single-byte text for a PDF literal string `( ... )`.
pub fn escape_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'(' => out.push_str("\\("),
            b')' => out.push_str("\\)"),
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            // Printable ASCII is written as is
            0x20..=0x7E => out.push(byte as char),
            // Everything else as an octal escape
            _ => write!(&mut out, "\\{byte:03o}").unwrap(),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_delimiters() {
        assert_eq!(escape_literal(b"a(b)c\\"), "a\\(b\\)c\\\\");
    }

    #[test]
    fn test_escape_high_bytes_as_octal() {
        assert_eq!(escape_literal(&encode_win_ansi("Société")), "Soci\\351t\\351");
    }

    #[test]
    fn test_escape_control_characters() {
        assert_eq!(escape_literal(b"a\nb\tc"), "a\\nb\\tc");
    }
}
