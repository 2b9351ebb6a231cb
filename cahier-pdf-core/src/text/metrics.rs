use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// Character width information for a standard PDF font.
/// All widths are in 1/1000 of a unit (font size 1.0)
pub struct StandardMetrics {
    widths: HashMap<char, u16>,
    default_width: u16,
}

impl StandardMetrics {
    fn new(default_width: u16) -> Self {
        Self {
            widths: HashMap::new(),
            default_width,
        }
    }

    fn with_widths(mut self, widths: &[(char, u16)]) -> Self {
        for &(ch, width) in widths {
            self.widths.insert(ch, width);
        }
        self
    }

    /// Width of `ch`. Accented letters without their own entry use the
    /// width of their base letter (`é` measures like `e`).
    pub fn char_width(&self, ch: char) -> u16 {
        if let Some(width) = self.widths.get(&ch) {
            return *width;
        }
        ch.to_string()
            .nfd()
            .next()
            .and_then(|base| self.widths.get(&base))
            .copied()
            .unwrap_or(self.default_width)
    }
}

lazy_static::lazy_static! {
    /// Helvetica widths from the Adobe AFM, ASCII plus the WinAnsi
    /// punctuation that does not decompose to an ASCII base.
    pub static ref HELVETICA: StandardMetrics = StandardMetrics::new(556).with_widths(&[
        (' ', 278), ('!', 278), ('"', 355), ('#', 556), ('$', 556), ('%', 889),
        ('&', 667), ('\'', 191), ('(', 333), (')', 333), ('*', 389), ('+', 584),
        (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
        ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
        ('8', 556), ('9', 556), (':', 278), (';', 278), ('<', 584), ('=', 584),
        ('>', 584), ('?', 556), ('@', 1015), ('A', 667), ('B', 667), ('C', 722),
        ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
        ('J', 500), ('K', 667), ('L', 556), ('M', 833), ('N', 722), ('O', 778),
        ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
        ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 278),
        ('\\', 278), (']', 278), ('^', 469), ('_', 556), ('`', 333), ('a', 556),
        ('b', 556), ('c', 500), ('d', 556), ('e', 556), ('f', 278), ('g', 556),
        ('h', 556), ('i', 222), ('j', 222), ('k', 500), ('l', 222), ('m', 833),
        ('n', 556), ('o', 556), ('p', 556), ('q', 556), ('r', 333), ('s', 500),
        ('t', 278), ('u', 556), ('v', 500), ('w', 722), ('x', 500), ('y', 500),
        ('z', 500), ('{', 334), ('|', 260), ('}', 334), ('~', 584),
        ('\u{A0}', 278), ('«', 556), ('»', 556), ('°', 400), ('©', 737),
        ('®', 737), ('ß', 611), ('æ', 889), ('Æ', 1000), ('ø', 611), ('Ø', 778),
        ('œ', 944), ('Œ', 1000), ('€', 556), ('\u{2013}', 556), ('\u{2014}', 1000),
        ('\u{2018}', 222), ('\u{2019}', 222), ('\u{201C}', 333), ('\u{201D}', 333),
        ('\u{2022}', 350), ('\u{2026}', 1000),
    ]);
}

/// Width of `text` set in Helvetica at `font_size`.
pub fn helvetica_text_width(text: &str, font_size: f64) -> f64 {
    let width_units: u32 = text.chars().map(|ch| HELVETICA.char_width(ch) as u32).sum();

    (width_units as f64 / 1000.0) * font_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_with_widths() {
        let widths = [('A', 600), ('B', 700)];
        let metrics = StandardMetrics::new(500).with_widths(&widths);

        assert_eq!(metrics.char_width('A'), 600);
        assert_eq!(metrics.char_width('B'), 700);
        assert_eq!(metrics.char_width('Z'), 500);
    }

    #[test]
    fn test_measure_text_helvetica() {
        // H 722 + e 556 + l 222 + l 222 + o 556 = 2278 units
        let width = helvetica_text_width("Hello", 12.0);
        assert!((width - 27.336).abs() < 0.01);
    }

    #[test]
    fn test_accented_letters_use_base_width() {
        assert_eq!(HELVETICA.char_width('é'), HELVETICA.char_width('e'));
        assert_eq!(HELVETICA.char_width('Ç'), HELVETICA.char_width('C'));
        assert_eq!(HELVETICA.char_width('ï'), 222);
    }

    #[test]
    fn test_unknown_characters_use_default() {
        assert_eq!(HELVETICA.char_width('日'), 556);
    }

    #[test]
    fn test_empty_text_has_no_width() {
        assert_eq!(helvetica_text_width("", 9.0), 0.0);
    }
}
