//! TrueType font parser for extracting font information

use crate::error::PdfError;
use crate::Result;
use std::collections::HashMap;

use super::{FontDescriptor, FontFlags, FontMetrics};

/// Character to glyph index mapping plus advance widths
#[derive(Debug, Clone, Default)]
pub struct GlyphMapping {
    /// Map from Unicode code point to glyph index
    char_to_glyph: HashMap<u32, u16>,
    /// Advance widths in font units, indexed by glyph id
    advances: Vec<u16>,
}

impl GlyphMapping {
    /// Get glyph index for a character
    pub fn char_to_glyph(&self, ch: char) -> Option<u16> {
        self.char_to_glyph.get(&(ch as u32)).copied()
    }

    /// Add a mapping
    pub fn add_mapping(&mut self, ch: char, glyph: u16) {
        self.char_to_glyph.insert(ch as u32, glyph);
    }

    /// Get glyph width in font units. Glyphs past the end of `hmtx` share
    /// the last advance, as the format requires.
    pub fn glyph_width(&self, glyph: u16) -> Option<u16> {
        self.advances
            .get(glyph as usize)
            .or_else(|| self.advances.last())
            .copied()
    }

    /// Get character width in font units
    pub fn char_width(&self, ch: char) -> Option<u16> {
        self.char_to_glyph(ch)
            .and_then(|glyph| self.glyph_width(glyph))
    }

    /// Width of the `.notdef` glyph, used for unmapped characters
    pub fn missing_width(&self) -> u16 {
        self.glyph_width(0).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.char_to_glyph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.char_to_glyph.is_empty()
    }
}

/// TTF table record
#[derive(Debug, Clone)]
struct TableRecord {
    offset: u32,
    length: u32,
}

/// TrueType font parser
pub struct TtfParser<'a> {
    data: &'a [u8],
    tables: HashMap<[u8; 4], TableRecord>,
}

impl<'a> TtfParser<'a> {
    /// Create a new TTF parser
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut parser = TtfParser {
            data,
            tables: HashMap::new(),
        };
        parser.parse_table_directory()?;
        Ok(parser)
    }

    /// Parse the table directory
    fn parse_table_directory(&mut self) -> Result<()> {
        if self.data.len() < 12 {
            return Err(PdfError::FontError("TTF header too small".into()));
        }

        let num_tables = read_u16(self.data, 4)?;

        let mut offset = 12;
        for _ in 0..num_tables {
            let record = self
                .data
                .get(offset..offset + 16)
                .ok_or_else(|| PdfError::FontError("Invalid table directory".into()))?;

            let tag = [record[0], record[1], record[2], record[3]];
            let table_offset = read_u32(record, 8)?;
            let length = read_u32(record, 12)?;
            self.tables.insert(
                tag,
                TableRecord {
                    offset: table_offset,
                    length,
                },
            );

            offset += 16;
        }

        Ok(())
    }

    /// Get table data by tag
    fn get_table(&self, tag: &[u8; 4]) -> Option<&'a [u8]> {
        self.tables.get(tag).and_then(|record| {
            let start = record.offset as usize;
            let end = start.checked_add(record.length as usize)?;
            self.data.get(start..end)
        })
    }

    fn require_table(&self, tag: &[u8; 4]) -> Result<&'a [u8]> {
        self.get_table(tag).ok_or_else(|| {
            PdfError::FontError(format!(
                "Missing {} table",
                String::from_utf8_lossy(tag)
            ))
        })
    }

    /// Extract font metrics from the font
    pub fn extract_metrics(&self) -> Result<FontMetrics> {
        let head_table = self.require_table(b"head")?;
        if head_table.len() < 54 {
            return Err(PdfError::FontError("Invalid head table".into()));
        }
        let units_per_em = read_u16(head_table, 18)?;
        if units_per_em == 0 {
            return Err(PdfError::FontError("unitsPerEm is zero".into()));
        }

        let hhea_table = self.require_table(b"hhea")?;
        if hhea_table.len() < 36 {
            return Err(PdfError::FontError("Invalid hhea table".into()));
        }
        let ascent = read_i16(hhea_table, 4)?;
        let descent = read_i16(hhea_table, 6)?;
        let line_gap = read_i16(hhea_table, 8)?;

        // OS/2 version 2+ carries real cap and x heights
        let (cap_height, x_height) = match self.get_table(b"OS/2") {
            Some(os2) if os2.len() >= 90 && read_u16(os2, 0)? >= 2 => {
                (read_i16(os2, 88)?, read_i16(os2, 86)?)
            }
            _ => ((i32::from(ascent) * 7 / 10) as i16, ascent / 2),
        };

        Ok(FontMetrics {
            units_per_em,
            ascent,
            descent,
            line_gap,
            cap_height,
            x_height,
        })
    }

    /// Create font descriptor from the font
    pub fn create_descriptor(&self) -> Result<FontDescriptor> {
        let font_name = self.extract_font_name()?;
        let metrics = self.extract_metrics()?;
        let flags = self.extract_font_flags()?;
        let italic_angle = self.extract_italic_angle()?;

        let head_table = self.require_table(b"head")?;
        let x_min = read_i16(head_table, 36)?;
        let y_min = read_i16(head_table, 38)?;
        let x_max = read_i16(head_table, 40)?;
        let y_max = read_i16(head_table, 42)?;

        Ok(FontDescriptor {
            font_family: font_name.clone(),
            font_name,
            flags,
            font_bbox: [
                metrics.to_glyph_space(x_min),
                metrics.to_glyph_space(y_min),
                metrics.to_glyph_space(x_max),
                metrics.to_glyph_space(y_max),
            ],
            italic_angle,
            ascent: metrics.to_glyph_space(metrics.ascent),
            descent: metrics.to_glyph_space(metrics.descent),
            cap_height: metrics.to_glyph_space(metrics.cap_height),
            stem_v: 80.0,
            missing_width: 0.0,
        })
    }

    /// PostScript name (name id 6), falling back to the full name (id 4).
    pub fn extract_font_name(&self) -> Result<String> {
        let name_table = self.require_table(b"name")?;
        if name_table.len() < 6 {
            return Err(PdfError::FontError("Invalid name table".into()));
        }

        let count = read_u16(name_table, 2)? as usize;
        let string_offset = read_u16(name_table, 4)? as usize;
        let mut full_name = None;

        for i in 0..count {
            let record = 6 + i * 12;
            let platform_id = read_u16(name_table, record)?;
            let name_id = read_u16(name_table, record + 6)?;
            let length = read_u16(name_table, record + 8)? as usize;
            let offset = read_u16(name_table, record + 10)? as usize;
            if name_id != 6 && name_id != 4 {
                continue;
            }

            let start = string_offset + offset;
            let Some(raw) = name_table.get(start..start + length) else {
                continue;
            };
            let decoded = match platform_id {
                // Unicode and Windows names are UTF-16BE
                0 | 3 => {
                    let units: Vec<u16> = raw
                        .chunks_exact(2)
                        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                        .collect();
                    String::from_utf16_lossy(&units)
                }
                _ => raw.iter().map(|&b| b as char).collect(),
            };
            let cleaned = sanitize_pdf_name(&decoded);
            if cleaned.is_empty() {
                continue;
            }
            if name_id == 6 {
                return Ok(cleaned);
            }
            full_name.get_or_insert(cleaned);
        }

        full_name.ok_or_else(|| PdfError::FontError("Font has no usable name".into()))
    }

    /// Extract font flags
    fn extract_font_flags(&self) -> Result<FontFlags> {
        let mut flags = FontFlags::NONSYMBOLIC;

        if let Some(post_table) = self.get_table(b"post") {
            if post_table.len() >= 16 && read_u32(post_table, 12)? != 0 {
                flags |= FontFlags::FIXED_PITCH;
            }
        }

        if let Some(head_table) = self.get_table(b"head") {
            // macStyle bit 1 is italic
            if read_u16(head_table, 44)? & 0x2 != 0 {
                flags |= FontFlags::ITALIC;
            }
        }

        Ok(flags)
    }

    /// Italic angle from `post`, a 16.16 fixed-point value.
    fn extract_italic_angle(&self) -> Result<f64> {
        match self.get_table(b"post") {
            Some(post_table) if post_table.len() >= 8 => {
                Ok(read_u32(post_table, 4)? as i32 as f64 / 65536.0)
            }
            _ => Ok(0.0),
        }
    }

    /// Extract character to glyph mapping from a format 4 cmap subtable
    pub fn extract_glyph_mapping(&self) -> Result<GlyphMapping> {
        let mut mapping = GlyphMapping::default();

        let cmap_table = self.require_table(b"cmap")?;
        let subtable = self.find_unicode_subtable(cmap_table)?;
        parse_cmap_format4(subtable, &mut mapping)?;

        self.extract_glyph_widths(&mut mapping)?;

        Ok(mapping)
    }

    /// Locate the Windows Unicode BMP (3, 1) or Unicode (0, *) subtable.
    fn find_unicode_subtable(&self, cmap_table: &'a [u8]) -> Result<&'a [u8]> {
        let num_tables = read_u16(cmap_table, 2)? as usize;
        let mut fallback = None;

        for i in 0..num_tables {
            let record = 4 + i * 8;
            let platform_id = read_u16(cmap_table, record)?;
            let encoding_id = read_u16(cmap_table, record + 2)?;
            let offset = read_u32(cmap_table, record + 4)? as usize;
            let Some(subtable) = cmap_table.get(offset..) else {
                continue;
            };
            if read_u16(subtable, 0)? != 4 {
                continue;
            }
            match (platform_id, encoding_id) {
                (3, 1) => return Ok(subtable),
                (0, _) => {
                    fallback.get_or_insert(subtable);
                }
                _ => {}
            }
        }

        fallback.ok_or_else(|| PdfError::FontError("No format 4 Unicode cmap".into()))
    }

    /// Extract glyph widths from hmtx table
    fn extract_glyph_widths(&self, mapping: &mut GlyphMapping) -> Result<()> {
        let hhea_table = self.require_table(b"hhea")?;
        let num_h_metrics = read_u16(hhea_table, 34)? as usize;
        let hmtx_table = self.require_table(b"hmtx")?;

        mapping.advances = (0..num_h_metrics)
            .map_while(|glyph| read_u16(hmtx_table, glyph * 4).ok())
            .collect();

        if mapping.advances.is_empty() {
            return Err(PdfError::FontError("hmtx has no metrics".into()));
        }
        Ok(())
    }
}

fn parse_cmap_format4(subtable: &[u8], mapping: &mut GlyphMapping) -> Result<()> {
    let seg_count = read_u16(subtable, 6)? as usize / 2;
    let end_codes = 14;
    let start_codes = end_codes + seg_count * 2 + 2;
    let id_deltas = start_codes + seg_count * 2;
    let id_range_offsets = id_deltas + seg_count * 2;

    for seg in 0..seg_count {
        let end = read_u16(subtable, end_codes + seg * 2)?;
        let start = read_u16(subtable, start_codes + seg * 2)?;
        let delta = read_u16(subtable, id_deltas + seg * 2)?;
        let range_offset_pos = id_range_offsets + seg * 2;
        let range_offset = read_u16(subtable, range_offset_pos)? as usize;

        if start > end {
            continue;
        }
        for code in start..=end {
            if code == 0xFFFF {
                break;
            }
            let glyph = if range_offset == 0 {
                code.wrapping_add(delta)
            } else {
                let glyph_pos = range_offset_pos + range_offset + (code - start) as usize * 2;
                match read_u16(subtable, glyph_pos) {
                    Ok(0) | Err(_) => continue,
                    Ok(raw) => raw.wrapping_add(delta),
                }
            };
            if glyph == 0 {
                continue;
            }
            if let Some(ch) = char::from_u32(code as u32) {
                mapping.add_mapping(ch, glyph);
            }
        }
    }

    Ok(())
}

/// Keep the characters that are legal unescaped in a PDF name.
fn sanitize_pdf_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_graphic() && !"()<>[]{}/%#".contains(*c))
        .collect()
}

fn read_u16(data: &[u8], offset: usize) -> Result<u16> {
    data.get(offset..offset + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .ok_or_else(|| PdfError::FontError(format!("Unexpected end of data at {offset}")))
}

fn read_i16(data: &[u8], offset: usize) -> Result<i16> {
    read_u16(data, offset).map(|v| v as i16)
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    data.get(offset..offset + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| PdfError::FontError(format!("Unexpected end of data at {offset}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::test_font::build_test_font;

    #[test]
    fn test_glyph_mapping() {
        let mut mapping = GlyphMapping::default();
        mapping.add_mapping('A', 65);
        mapping.add_mapping('B', 66);

        assert_eq!(mapping.char_to_glyph('A'), Some(65));
        assert_eq!(mapping.char_to_glyph('C'), None);
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_widths_past_hmtx_reuse_last_advance() {
        let mapping = GlyphMapping {
            char_to_glyph: HashMap::new(),
            advances: vec![500, 600],
        };
        assert_eq!(mapping.glyph_width(1), Some(600));
        assert_eq!(mapping.glyph_width(40), Some(600));
        assert_eq!(mapping.missing_width(), 500);
    }

    #[test]
    fn test_parse_synthetic_font() {
        let data = build_test_font(2000, 1200);
        let parser = TtfParser::new(&data).unwrap();

        let metrics = parser.extract_metrics().unwrap();
        assert_eq!(metrics.units_per_em, 2000);
        assert_eq!(metrics.ascent, 1900);
        assert_eq!(metrics.descent, -500);

        let mapping = parser.extract_glyph_mapping().unwrap();
        assert_eq!(mapping.char_to_glyph(' '), Some(1));
        assert_eq!(mapping.char_to_glyph('A'), Some(0x41 - 0x1F));
        assert_eq!(mapping.char_width('A'), Some(1200));
        assert_eq!(mapping.char_width(' '), Some(600));
        assert_eq!(mapping.char_width('é'), Some(1200));
        assert_eq!(mapping.char_to_glyph('\u{20AC}'), None);

        assert_eq!(parser.extract_font_name().unwrap(), "TestSans-Regular");
    }

    #[test]
    fn test_descriptor_is_scaled_to_glyph_space() {
        let data = build_test_font(2000, 1000);
        let descriptor = TtfParser::new(&data).unwrap().create_descriptor().unwrap();
        assert_eq!(descriptor.font_name, "TestSans-Regular");
        assert_eq!(descriptor.ascent, 950.0);
        assert_eq!(descriptor.descent, -250.0);
        assert!(descriptor.flags.contains(FontFlags::NONSYMBOLIC));
        assert!(!descriptor.flags.contains(FontFlags::FIXED_PITCH));
    }

    #[test]
    fn test_cap_height_estimate_for_large_em_square() {
        // No OS/2 table, so cap and x heights come from the hhea ascent
        let data = build_test_font(8192, 4000);
        let metrics = TtfParser::new(&data).unwrap().extract_metrics().unwrap();
        assert_eq!(metrics.ascent, 7782);
        assert_eq!(metrics.cap_height, 5447);
        assert_eq!(metrics.x_height, 3891);
    }

    #[test]
    fn test_truncated_font_is_an_error() {
        assert!(TtfParser::new(&[0, 1, 0, 0]).is_err());

        let mut data = build_test_font(1000, 500);
        data.truncate(40);
        let parser = TtfParser::new(&data);
        assert!(parser.is_err() || parser.unwrap().extract_metrics().is_err());
    }

    #[test]
    fn test_sanitize_pdf_name() {
        assert_eq!(sanitize_pdf_name("Noto Sans (Regular)"), "NotoSansRegular");
    }
}
