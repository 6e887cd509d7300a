//! Base-14 font handling
//!
//! Documents produced by this crate only use the standard Helvetica family,
//! which every PDF viewer ships. Nothing is embedded; text is written in
//! WinAnsiEncoding and measured with the Adobe AFM advance widths below.

use lopdf::{Dictionary, Object};

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Helvetica advance widths for WinAnsi codes 32..=126 (1/1000 em)
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

/// Helvetica-Bold advance widths for WinAnsi codes 32..=126 (1/1000 em)
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a..m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n..z
    389, 280, 389, 584, // {..~
];

/// Width used for codes without a metric entry
const DEFAULT_WIDTH: u16 = 556;

/// One of the four Helvetica faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum StandardFont {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl StandardFont {
    /// Pick the face for a weight/style combination
    pub fn from_variant(weight: FontWeight, style: FontStyle) -> Self {
        match (weight, style) {
            (FontWeight::Regular, FontStyle::Normal) => StandardFont::Helvetica,
            (FontWeight::Bold, FontStyle::Normal) => StandardFont::HelveticaBold,
            (FontWeight::Regular, FontStyle::Italic) => StandardFont::HelveticaOblique,
            (FontWeight::Bold, FontStyle::Italic) => StandardFont::HelveticaBoldOblique,
        }
    }

    /// PostScript name written as `/BaseFont`
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Page resource name (e.g. "F1")
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::HelveticaOblique => "F3",
            StandardFont::HelveticaBoldOblique => "F4",
        }
    }

    fn is_bold(&self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique
        )
    }

    /// Advance width of a single WinAnsi code in 1/1000 em
    ///
    /// Oblique faces share the metrics of their upright counterparts.
    pub fn glyph_width(&self, code: u8) -> u16 {
        let table = if self.is_bold() {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };

        match code {
            32..=126 => table[(code - 32) as usize],
            0x91 | 0x92 => {
                if self.is_bold() {
                    278
                } else {
                    222
                }
            }
            0x93 | 0x94 => {
                if self.is_bold() {
                    500
                } else {
                    333
                }
            }
            0x95 => 350,
            0x96 => 556,
            0x85 | 0x97 => 1000,
            0xA0 => 278,
            _ => match latin1_base_letter(code) {
                Some(base) => table[(base - 32) as usize],
                None => DEFAULT_WIDTH,
            },
        }
    }

    /// Width of already-encoded text in 1/1000 em
    pub fn encoded_width(&self, encoded: &[u8]) -> u32 {
        encoded.iter().map(|&c| self.glyph_width(c) as u32).sum()
    }

    /// Width of text in points at the given size
    pub fn text_width_points(&self, text: &str, font_size: f32) -> f32 {
        self.encoded_width(&encode_win_ansi(text)) as f32 * font_size / 1000.0
    }

    /// Font dictionary for this face
    pub fn to_pdf_dictionary(&self) -> Dictionary {
        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"Font".to_vec()));
        dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        dict.set(
            "BaseFont",
            Object::Name(self.base_font().as_bytes().to_vec()),
        );
        dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        dict
    }
}

/// Encode text as WinAnsi bytes
///
/// Latin-1 characters map to themselves; the common typographic quotes,
/// dashes, bullet and ellipsis map to their cp1252 slots. Anything else
/// becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

fn encode_char(c: char) -> u8 {
    match c {
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2026}' => 0x85,
        '\t' => b' ',
        c if (' '..='~').contains(&c) => c as u8,
        c if ('\u{A0}'..='\u{FF}').contains(&c) => c as u32 as u8,
        _ => b'?',
    }
}

/// Unaccented ASCII letter for an accented Latin-1 code
fn latin1_base_letter(code: u8) -> Option<u8> {
    let base = match code {
        0xC0..=0xC5 => b'A',
        0xC7 => b'C',
        0xC8..=0xCB => b'E',
        0xCC..=0xCF => b'I',
        0xD1 => b'N',
        0xD2..=0xD6 | 0xD8 => b'O',
        0xD9..=0xDC => b'U',
        0xDD => b'Y',
        0xE0..=0xE5 => b'a',
        0xE7 => b'c',
        0xE8..=0xEB => b'e',
        0xEC..=0xEF => b'i',
        0xF1 => b'n',
        0xF2..=0xF6 | 0xF8 => b'o',
        0xF9..=0xFC => b'u',
        0xFD | 0xFF => b'y',
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_variant() {
        assert_eq!(
            StandardFont::from_variant(FontWeight::Regular, FontStyle::Normal),
            StandardFont::Helvetica
        );
        assert_eq!(
            StandardFont::from_variant(FontWeight::Bold, FontStyle::Italic),
            StandardFont::HelveticaBoldOblique
        );
    }

    #[test]
    fn test_ascii_widths() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.glyph_width(b' '), 278);
        assert_eq!(font.glyph_width(b'W'), 944);
        assert_eq!(font.glyph_width(b'i'), 222);
        assert_eq!(font.glyph_width(b'~'), 584);
        assert_eq!(StandardFont::HelveticaBold.glyph_width(b'i'), 278);
    }

    #[test]
    fn test_oblique_shares_metrics() {
        for code in 32u8..=126 {
            assert_eq!(
                StandardFont::Helvetica.glyph_width(code),
                StandardFont::HelveticaOblique.glyph_width(code)
            );
        }
    }

    #[test]
    fn test_text_width_points() {
        // "Hi" = 722 + 222 = 944 units -> 9.44pt at 10pt
        let width = StandardFont::Helvetica.text_width_points("Hi", 10.0);
        assert!((width - 9.44).abs() < 1e-4);
    }

    #[test]
    fn test_encode_latin1_and_quotes() {
        assert_eq!(encode_win_ansi("Niño"), vec![b'N', b'i', 0xF1, b'o']);
        assert_eq!(encode_win_ansi("B\u{2019}laan"), b"B\x92laan".to_vec());
        assert_eq!(encode_win_ansi("漢"), b"?".to_vec());
    }

    #[test]
    fn test_accented_letter_uses_base_width() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.glyph_width(0xF1), font.glyph_width(b'n'));
        assert_eq!(font.glyph_width(0xD1), font.glyph_width(b'N'));
    }

    #[test]
    fn test_font_dictionary() {
        let dict = StandardFont::HelveticaBold.to_pdf_dictionary();
        assert_eq!(
            dict.get(b"BaseFont").unwrap().as_name().unwrap(),
            b"Helvetica-Bold"
        );
        assert_eq!(
            dict.get(b"Encoding").unwrap().as_name().unwrap(),
            b"WinAnsiEncoding"
        );
    }
}
