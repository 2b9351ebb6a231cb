//! Synthetic TrueType files for tests
//!
//! The generated font maps U+0020..=U+00FF to glyphs 1..=224, every glyph
//! `advance` units wide except the space, which is half as wide.

const FIRST_CODE: u16 = 0x20;
const LAST_CODE: u16 = 0xFF;

/// Build a minimal but well-formed TrueType font.
pub(crate) fn build_test_font(units_per_em: u16, advance: u16) -> Vec<u8> {
    let num_glyphs = LAST_CODE - FIRST_CODE + 2;
    let tables: Vec<(&[u8; 4], Vec<u8>)> = vec![
        (b"cmap", cmap_table()),
        (b"head", head_table(units_per_em)),
        (b"hhea", hhea_table(units_per_em, num_glyphs)),
        (b"hmtx", hmtx_table(num_glyphs, advance)),
        (b"maxp", maxp_table(num_glyphs)),
        (b"name", name_table("TestSans-Regular")),
        (b"post", post_table()),
    ];

    let mut font = Vec::new();
    font.extend(0x0001_0000u32.to_be_bytes());
    font.extend((tables.len() as u16).to_be_bytes());
    font.extend([0x00, 0x40, 0x00, 0x02, 0x00, 0x30]); // search hints, unused

    let mut offset = 12 + tables.len() * 16;
    let mut body = Vec::new();
    for (tag, data) in &tables {
        font.extend(tag.iter());
        font.extend(0u32.to_be_bytes()); // checksum
        font.extend((offset as u32).to_be_bytes());
        font.extend((data.len() as u32).to_be_bytes());

        body.extend(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
        offset = 12 + tables.len() * 16 + body.len();
    }
    font.extend(body);
    font
}

fn head_table(units_per_em: u16) -> Vec<u8> {
    let mut t = vec![0u8; 54];
    t[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    t[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
    t[18..20].copy_from_slice(&units_per_em.to_be_bytes());
    t[36..38].copy_from_slice(&(-(units_per_em as i16 / 10)).to_be_bytes());
    t[38..40].copy_from_slice(&(-(units_per_em as i16 / 4)).to_be_bytes());
    t[40..42].copy_from_slice(&(units_per_em as i16).to_be_bytes());
    t[42..44].copy_from_slice(&(units_per_em as i16).to_be_bytes());
    t
}

fn hhea_table(units_per_em: u16, num_metrics: u16) -> Vec<u8> {
    let mut t = vec![0u8; 36];
    let ascent = (units_per_em as i32 * 95 / 100) as i16;
    let descent = -(units_per_em as i16 / 4);
    t[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    t[4..6].copy_from_slice(&ascent.to_be_bytes());
    t[6..8].copy_from_slice(&descent.to_be_bytes());
    t[34..36].copy_from_slice(&num_metrics.to_be_bytes());
    t
}

fn hmtx_table(num_glyphs: u16, advance: u16) -> Vec<u8> {
    let mut t = Vec::new();
    for glyph in 0..num_glyphs {
        let width = if glyph == 1 { advance / 2 } else { advance };
        t.extend(width.to_be_bytes());
        t.extend(0i16.to_be_bytes());
    }
    t
}

fn maxp_table(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    t.extend(0x0000_5000u32.to_be_bytes());
    t.extend(num_glyphs.to_be_bytes());
    t
}

fn cmap_table() -> Vec<u8> {
    // One real segment plus the mandatory 0xFFFF terminator
    let seg_count: u16 = 2;
    let mut sub = Vec::new();
    sub.extend(4u16.to_be_bytes()); // format
    sub.extend((16 + seg_count * 8).to_be_bytes()); // length
    sub.extend(0u16.to_be_bytes()); // language
    sub.extend((seg_count * 2).to_be_bytes());
    sub.extend([0x00, 0x04, 0x00, 0x01, 0x00, 0x00]); // search hints
    sub.extend(LAST_CODE.to_be_bytes());
    sub.extend(0xFFFFu16.to_be_bytes());
    sub.extend(0u16.to_be_bytes()); // reservedPad
    sub.extend(FIRST_CODE.to_be_bytes());
    sub.extend(0xFFFFu16.to_be_bytes());
    sub.extend((1u16.wrapping_sub(FIRST_CODE)).to_be_bytes()); // code 0x20 -> glyph 1
    sub.extend(1u16.to_be_bytes());
    sub.extend(0u16.to_be_bytes());
    sub.extend(0u16.to_be_bytes());

    let mut t = Vec::new();
    t.extend(0u16.to_be_bytes()); // version
    t.extend(1u16.to_be_bytes()); // numTables
    t.extend(3u16.to_be_bytes()); // Windows
    t.extend(1u16.to_be_bytes()); // Unicode BMP
    t.extend(12u32.to_be_bytes());
    t.extend(sub);
    t
}

fn name_table(postscript_name: &str) -> Vec<u8> {
    let encoded: Vec<u8> = postscript_name
        .encode_utf16()
        .flat_map(|unit| unit.to_be_bytes())
        .collect();

    let mut t = Vec::new();
    t.extend(0u16.to_be_bytes()); // format
    t.extend(1u16.to_be_bytes()); // count
    t.extend(18u16.to_be_bytes()); // string storage offset
    t.extend(3u16.to_be_bytes()); // platform
    t.extend(1u16.to_be_bytes()); // encoding
    t.extend(0x0409u16.to_be_bytes()); // language
    t.extend(6u16.to_be_bytes()); // PostScript name
    t.extend((encoded.len() as u16).to_be_bytes());
    t.extend(0u16.to_be_bytes());
    t.extend(encoded);
    t
}

fn post_table() -> Vec<u8> {
    let mut t = vec![0u8; 32];
    t[0..4].copy_from_slice(&0x0003_0000u32.to_be_bytes());
    t
}
