//! The PDF standard faces that every viewer ships with.
//!
//! These are never embedded, so certificates render identically on any machine
//! without font files being installed. Text is WinAnsi encoded (one byte per
//! character) and measured from the faces' published advance widths.

use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// Advance widths in 1/1000 em for the printable ASCII range (0x20..=0x7E)
type WidthTable = [u16; 95];

#[rustfmt::skip]
const HELVETICA: WidthTable = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: WidthTable = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: WidthTable = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_ITALIC: WidthTable = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 675, 675, 675, 500, 920,
    611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833,
    667, 722, 611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556,
    389, 278, 389, 422, 500, 333,
    500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722,
    500, 500, 500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389,
    400, 275, 400, 541,
];

/// A standard face available in every PDF viewer
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesItalic,
}

impl BuiltinFont {
    pub fn all() -> &'static [BuiltinFont] {
        &[
            BuiltinFont::Helvetica,
            BuiltinFont::HelveticaBold,
            BuiltinFont::TimesRoman,
            BuiltinFont::TimesItalic,
        ]
    }

    /// The PostScript name of the face, which is also the name used to select it in
    /// templates and settings
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::TimesRoman => "Times-Roman",
            BuiltinFont::TimesItalic => "Times-Italic",
        }
    }

    pub fn from_name(name: &str) -> Option<BuiltinFont> {
        BuiltinFont::all()
            .iter()
            .copied()
            .find(|font| font.name().eq_ignore_ascii_case(name.trim()))
    }

    fn widths(&self) -> &'static WidthTable {
        match self {
            BuiltinFont::Helvetica => &HELVETICA,
            BuiltinFont::HelveticaBold => &HELVETICA_BOLD,
            BuiltinFont::TimesRoman => &TIMES_ROMAN,
            BuiltinFont::TimesItalic => &TIMES_ITALIC,
        }
    }

    /// Width of `text` at `size`. Characters are measured exactly as [`Self::encode`]
    /// will draw them, so unencodable characters count as `?`.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| self.byte_width(encode_char(ch)) as u32)
            .sum();
        size * (units as f32 / 1000.0)
    }

    fn byte_width(&self, byte: u8) -> u16 {
        let table = self.widths();
        let ascii_width = |ch: char| table[(ch as u8 - 0x20) as usize];

        match byte {
            0x20..=0x7e => table[(byte - 0x20) as usize],
            0xa0 => ascii_width(' '),
            // accented latin-1 letters are as wide as their base letter in these faces
            0xa1..=0xff => ascii_width(base_letter(byte as char).unwrap_or('o')),
            0x82 | 0x91 | 0x92 => ascii_width('\''),
            0x84 | 0x93 | 0x94 => ascii_width('"'),
            0x85 => ascii_width('.') * 3,
            0x96 => ascii_width('-'),
            0x97 => ascii_width('M'),
            _ => ascii_width('o'),
        }
    }

    /// Encode text as WinAnsi bytes; characters outside the encoding become `?`
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars().map(encode_char).collect()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(font_index));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

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
        _ => return None,
    };
    Some(base)
}

/// Map a character onto its WinAnsiEncoding byte
fn encode_char(ch: char) -> u8 {
    match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        '„' => 0x84,
        '…' => 0x85,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        _ => b'?',
    }
}
