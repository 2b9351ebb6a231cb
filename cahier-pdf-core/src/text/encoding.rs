//! WinAnsiEncoding (Windows-1252) for simple fonts

/// Code points of the 0x80..=0x9F block, which is where Windows-1252
/// departs from Latin-1.
const WIN_ANSI_C1: [(u8, char); 27] = [
    (0x80, '\u{20AC}'), // Euro sign
    (0x82, '\u{201A}'), // Single low quotation mark
    (0x83, '\u{0192}'), // Latin small letter f with hook
    (0x84, '\u{201E}'), // Double low quotation mark
    (0x85, '\u{2026}'), // Horizontal ellipsis
    (0x86, '\u{2020}'), // Dagger
    (0x87, '\u{2021}'), // Double dagger
    (0x88, '\u{02C6}'), // Circumflex accent
    (0x89, '\u{2030}'), // Per mille sign
    (0x8A, '\u{0160}'), // Latin capital letter S with caron
    (0x8B, '\u{2039}'), // Single left angle quotation mark
    (0x8C, '\u{0152}'), // Latin capital ligature OE
    (0x8E, '\u{017D}'), // Latin capital letter Z with caron
    (0x91, '\u{2018}'), // Left single quotation mark
    (0x92, '\u{2019}'), // Right single quotation mark
    (0x93, '\u{201C}'), // Left double quotation mark
    (0x94, '\u{201D}'), // Right double quotation mark
    (0x95, '\u{2022}'), // Bullet
    (0x96, '\u{2013}'), // En dash
    (0x97, '\u{2014}'), // Em dash
    (0x98, '\u{02DC}'), // Small tilde
    (0x99, '\u{2122}'), // Trade mark sign
    (0x9A, '\u{0161}'), // Latin small letter s with caron
    (0x9B, '\u{203A}'), // Single right angle quotation mark
    (0x9C, '\u{0153}'), // Latin small ligature oe
    (0x9E, '\u{017E}'), // Latin small letter z with caron
    (0x9F, '\u{0178}'), // Latin capital letter Y with diaeresis
];

/// Encode text to WinAnsi bytes. Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

/// Byte for one character, `?` when the code page has no slot for it.
pub fn win_ansi_byte(ch: char) -> u8 {
    match ch as u32 {
        0x00..=0x7F | 0xA0..=0xFF => ch as u8,
        _ => WIN_ANSI_C1
            .iter()
            .find(|(_, c)| *c == ch)
            .map(|(byte, _)| *byte)
            .unwrap_or(b'?'),
    }
}

/// Character for one WinAnsi byte. Undefined slots map to `None`.
pub fn win_ansi_char(byte: u8) -> Option<char> {
    match byte {
        0x00..=0x7F | 0xA0..=0xFF => Some(byte as char),
        _ => WIN_ANSI_C1
            .iter()
            .find(|(b, _)| *b == byte)
            .map(|(_, ch)| *ch),
    }
}

/// True when every character has its own slot in the code page.
pub fn is_win_ansi_encodable(text: &str) -> bool {
    text.chars().all(|ch| ch == '?' || win_ansi_byte(ch) != b'?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode_win_ansi("Kah-Digital"), b"Kah-Digital".to_vec());
    }

    #[test]
    fn test_latin1_accents() {
        assert_eq!(encode_win_ansi("détaillé"), vec![b'd', 0xE9, b't', b'a', b'i', b'l', b'l', 0xE9]);
        assert_eq!(encode_win_ansi("à"), vec![0xE0]);
    }

    #[test]
    fn test_c1_block() {
        assert_eq!(encode_win_ansi("€"), vec![0x80]);
        assert_eq!(encode_win_ansi("\u{2019}"), vec![0x92]);
        assert_eq!(encode_win_ansi("\u{2013}"), vec![0x96]);
    }

    #[test]
    fn test_unmapped_becomes_question_mark() {
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
        assert!(!is_win_ansi_encodable("日本"));
        assert!(is_win_ansi_encodable("Prix: 2 900 € ?"));
    }

    #[test]
    fn test_char_lookup_round_trips_defined_slots() {
        for byte in 0x20u8..=0xFF {
            if let Some(ch) = win_ansi_char(byte) {
                assert_eq!(win_ansi_byte(ch), byte, "byte {byte:#x}");
            }
        }
        assert_eq!(win_ansi_char(0x81), None);
        assert_eq!(win_ansi_char(0x8D), None);
    }
}
