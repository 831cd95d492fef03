//! Metrics for the two standard Type1 faces the renderer uses.
//!
//! Standard 14 fonts are never embedded, so layout measures text with the
//! advance widths published in the Adobe AFM files (units of 1/1000 em).

use orcamento_style::font::FontWeight;

/// Ascender of the Helvetica family, in 1/1000 em.
pub const ASCENT: f32 = 718.0;
/// Descender of the Helvetica family, in 1/1000 em (positive value).
pub const DESCENT: f32 = 207.0;

/// Width used for characters with no entry in the tables.
const DEFAULT_WIDTH: u16 = 556;
const BULLET_WIDTH: u16 = 350;

/// Advance widths for U+0020..=U+007E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Maps accented Latin-1 letters to the unaccented letter whose width they share.
fn base_letter(ch: char) -> Option<char> {
    let base = match ch {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'º' => 'o',
        'ª' => 'a',
        '\u{a0}' => ' ',
        _ => return None,
    };
    Some(base)
}

/// Advance width of one character, in 1/1000 em.
pub fn char_width(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    let ch = base_letter(ch).unwrap_or(ch);
    match ch as u32 {
        code @ 0x20..=0x7e => table[(code - 0x20) as usize],
        0x2022 => BULLET_WIDTH,
        _ => DEFAULT_WIDTH,
    }
}

/// Width of a string set at `size` points.
pub fn text_width(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, weight) as u32).sum();
    units as f32 * size / 1000.0
}

/// Distance from the top of a line box to the baseline, centring the glyph
/// extent inside the leading.
pub fn baseline_offset(size: f32, leading: f32) -> f32 {
    let extent = (ASCENT + DESCENT) * size / 1000.0;
    (leading - extent) / 2.0 + ASCENT * size / 1000.0
}
