//! Fonts used to set certificate text.
//!
//! A [`Font`] is either one of the PDF standard faces ([`BuiltinFont`]), which need
//! no font files and are always available, or an embedded TrueType face
//! ([`TrueTypeFont`]) loaded from a path listed in the settings file.
//! [`FontLibrary`] holds every face known at startup and hands out a [`FontSet`]
//! that assigns a face to each [`FontRole`](crate::layout::FontRole).

mod builtin;
mod library;
mod truetype;

pub use builtin::*;
pub use library::*;
pub use truetype::*;

use crate::error::CertificateError;
use crate::refs::ObjectReferences;
use crate::units::Pt;
use pdf_writer::Pdf;

pub enum Font {
    Builtin(BuiltinFont),
    TrueType(TrueTypeFont),
}

impl Font {
    /// Parse a TrueType / OpenType font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<Font, CertificateError> {
        TrueTypeFont::load(bytes).map(Font::TrueType)
    }

    pub fn name(&self) -> String {
        match self {
            Font::Builtin(font) => font.name().to_string(),
            Font::TrueType(font) => font.name(),
        }
    }

    /// Width of `text` set at `size`, measured glyph by glyph exactly as it will be drawn
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Builtin(font) => font.width_of_text(text, size),
            Font::TrueType(font) => font.width_of_text(text, size),
        }
    }

    /// The bytes of a PDF string that draws `text` in this font
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Builtin(font) => font.encode(text),
            Font::TrueType(font) => font.encode(text),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        match self {
            Font::Builtin(font) => font.write(refs, font_index, writer),
            Font::TrueType(font) => font.write(refs, font_index, writer),
        }
    }
}

impl From<BuiltinFont> for Font {
    fn from(font: BuiltinFont) -> Self {
        Font::Builtin(font)
    }
}
