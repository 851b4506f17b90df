use std::collections::HashMap;

use pdf_writer::{Name, Pdf, Ref};

use crate::model::FontStyle;

pub(crate) struct FontEntry {
    pub(crate) pdf_name: String,
    pub(crate) font_ref: Ref,
    /// Advance widths in 1000-units for WinAnsi bytes 32..=255.
    pub(crate) widths_1000: Vec<f32>,
    pub(crate) ascender_ratio: f32,
}

impl FontEntry {
    pub(crate) fn char_width_1000(&self, ch: char) -> f32 {
        let byte = char_to_winansi(ch);
        if byte >= 32 {
            self.widths_1000[(byte - 32) as usize]
        } else {
            0.0
        }
    }

    pub(crate) fn word_width(&self, word: &str, font_size: f32) -> f32 {
        word.chars()
            .map(|ch| self.char_width_1000(ch) * font_size / 1000.0)
            .sum()
    }

    pub(crate) fn space_width(&self, font_size: f32) -> f32 {
        self.char_width_1000(' ') * font_size / 1000.0
    }
}

pub(crate) type FontSet = HashMap<FontStyle, FontEntry>;

/// Map a single Unicode char to its WinAnsi byte, or 0 if unmappable.
fn char_to_winansi(c: char) -> u8 {
    match c as u32 {
        0x0020..=0x007F => c as u8,
        0x00A0..=0x00FF => c as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => 0,
    }
}

/// Convert a UTF-8 string to WinAnsi (Windows-1252) bytes for PDF Str encoding.
/// Characters outside the code page are dropped.
pub(crate) fn to_winansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(char_to_winansi)
        .filter(|&b| b != 0)
        .collect()
}

/// Helvetica AFM widths for printable ASCII (32..=126).
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // space../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722, 667,
    611, 722, 667, 944, 667, 667, 611, // A-Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333, 500,
    278, 556, 500, 722, 500, 500, 500, // a-z
    334, 260, 334, 584, // {..~
];

/// Helvetica-Bold AFM widths for printable ASCII (32..=126).
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // space../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722, 667,
    611, 722, 667, 944, 667, 667, 611, // A-Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389, 556,
    333, 611, 556, 778, 556, 556, 500, // a-z
    389, 280, 389, 584, // {..~
];

/// Widths for WinAnsi 32..=255. The upper half is approximated from the
/// unaccented base letters, which is close enough for line breaking.
fn proportional_widths(ascii: &[u16; 95], upper: f32, lower: f32) -> Vec<f32> {
    (32u8..=255u8)
        .map(|b| match b {
            32..=126 => ascii[(b - 32) as usize] as f32,
            0x80 => 556.0,                 // euro
            0x95 => 350.0,                 // bullet
            0x96 => 556.0,                 // en dash
            0x97 => 1000.0,                // em dash
            0xA0 => 278.0,                 // no-break space
            0xC0..=0xDE => upper,          // accented capitals
            0xDF..=0xFF => lower,          // accented lowercase
            _ => 556.0,
        })
        .collect()
}

fn courier_widths() -> Vec<f32> {
    vec![600.0; 224]
}

fn base_font(style: FontStyle) -> &'static [u8] {
    match style {
        FontStyle::Regular => b"Helvetica",
        FontStyle::Bold => b"Helvetica-Bold",
        FontStyle::Italic => b"Helvetica-Oblique",
        FontStyle::Mono => b"Courier",
    }
}

/// Register the four base-14 fonts the document uses. Nothing is embedded;
/// every conforming viewer ships these.
pub(crate) fn register_fonts(pdf: &mut Pdf, alloc: &mut impl FnMut() -> Ref) -> FontSet {
    let styles = [FontStyle::Regular, FontStyle::Bold, FontStyle::Italic, FontStyle::Mono];
    styles
        .into_iter()
        .enumerate()
        .map(|(i, style)| {
            let font_ref = alloc();
            pdf.type1_font(font_ref)
                .base_font(Name(base_font(style)))
                .encoding_predefined(Name(b"WinAnsiEncoding"));

            let (widths_1000, ascender_ratio) = match style {
                FontStyle::Regular | FontStyle::Italic => {
                    (proportional_widths(&HELVETICA_ASCII, 667.0, 556.0), 0.718)
                }
                FontStyle::Bold => {
                    (proportional_widths(&HELVETICA_BOLD_ASCII, 722.0, 611.0), 0.718)
                }
                FontStyle::Mono => (courier_widths(), 0.629),
            };

            log::debug!(
                "register_fonts: F{} = {}",
                i + 1,
                String::from_utf8_lossy(base_font(style)),
            );

            (
                style,
                FontEntry {
                    pdf_name: format!("F{}", i + 1),
                    font_ref,
                    widths_1000,
                    ascender_ratio,
                },
            )
        })
        .collect()
}
