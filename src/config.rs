//! Settings file (`cert-gen.toml`) describing where certificates go and how they look.
//!
//! Every field has a default, so an empty file (or no file at all) reproduces the
//! built-in certificate design.

use crate::certificate::Locale;
use crate::error::CertificateError;
use crate::pagesize::Paper;
use crate::units::{Cm, Pt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory certificates are written into; created on demand
    pub output_dir: PathBuf,
    /// Root that relative logo and seal paths are resolved against
    pub assets_dir: PathBuf,
    pub locale: Locale,
    /// Base of the URL encoded in QR codes, e.g. `https://example.org/validar`
    pub validation_base_url: Option<String>,
    pub paper: Paper,
    pub layout: LayoutSettings,
    pub fonts: FontSettings,
    pub signature: SignatureSettings,
    /// The design used when neither the organisation nor a template says otherwise
    pub branding: BrandingDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            output_dir: PathBuf::from("certificados"),
            assets_dir: PathBuf::from("."),
            locale: Locale::default(),
            validation_base_url: None,
            paper: Paper::default(),
            layout: LayoutSettings::default(),
            fonts: FontSettings::default(),
            signature: SignatureSettings::default(),
            branding: BrandingDefaults::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(contents: &str) -> Result<Settings, CertificateError> {
        toml::from_str(contents).map_err(Into::into)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, CertificateError> {
        let contents = std::fs::read_to_string(path)?;
        Settings::from_toml(&contents)
    }

    /// Resolve an asset path from branding against `assets_dir`
    pub fn asset_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.assets_dir.join(path)
        }
    }
}

/// Geometry of the certificate page. Distances are in centimetres, font sizes in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub logo_width_cm: f32,
    /// Distance from the top edge down to the bottom of the logo is
    /// `logo_top_cm + logo_offset_cm`
    pub logo_top_cm: f32,
    pub logo_offset_cm: f32,
    /// Gap between the bottom of the logo and the title block
    pub logo_padding_cm: f32,

    pub outer_border_cm: f32,
    pub outer_border_width_pt: f32,
    pub inner_border_cm: f32,
    pub inner_border_width_pt: f32,

    /// Gaps between the logo block and the title baseline
    pub title_offset_cm: f32,
    pub title_gap_cm: f32,
    /// Gap between the title baseline and the first body line
    pub body_offset_cm: f32,
    pub line_height_cm: f32,
    /// Horizontal margin on each side of the body text
    pub text_margin_cm: f32,

    /// Height of the signature line above the bottom edge
    pub signature_baseline_cm: f32,
    pub signature_name_offset_cm: f32,
    pub signature_label_offset_cm: f32,
    pub signature_line_cm: f32,
    pub signature_line_width_pt: f32,

    pub seal_height_cm: f32,
    pub seal_x_cm: f32,
    pub seal_y_cm: f32,

    pub qr_size_cm: f32,
    /// Distance from the right edge to the right side of the QR code
    pub qr_right_cm: f32,
    /// Distance from the bottom edge to the bottom of the QR code
    pub qr_bottom_cm: f32,
    pub qr_caption_offset_cm: f32,
    pub identifier_bottom_cm: f32,

    pub title_size_pt: f32,
    pub body_size_pt: f32,
    pub signature_size_pt: f32,
    pub label_size_pt: f32,
    pub caption_size_pt: f32,
    pub identifier_size_pt: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            logo_width_cm: 4.5,
            logo_top_cm: 6.0,
            logo_offset_cm: 1.6,
            logo_padding_cm: 0.2,
            outer_border_cm: 1.5,
            outer_border_width_pt: 3.0,
            inner_border_cm: 2.0,
            inner_border_width_pt: 1.0,
            title_offset_cm: 0.3,
            title_gap_cm: 0.8,
            body_offset_cm: 2.0,
            line_height_cm: 0.8,
            text_margin_cm: 3.0,
            signature_baseline_cm: 4.5,
            signature_name_offset_cm: 0.3,
            signature_label_offset_cm: 0.5,
            signature_line_cm: 6.0,
            signature_line_width_pt: 1.0,
            seal_height_cm: 3.0,
            seal_x_cm: 2.5,
            seal_y_cm: 2.5,
            qr_size_cm: 3.0,
            qr_right_cm: 2.5,
            qr_bottom_cm: 2.9,
            qr_caption_offset_cm: 0.4,
            identifier_bottom_cm: 0.8,
            title_size_pt: 32.0,
            body_size_pt: 16.0,
            signature_size_pt: 22.0,
            label_size_pt: 9.0,
            caption_size_pt: 7.0,
            identifier_size_pt: 6.0,
        }
    }
}

impl LayoutSettings {
    pub(crate) fn cm(value: f32) -> Pt {
        Cm(value).into()
    }
}

/// TrueType faces registered next to the built-in standard faces, keyed by the name
/// branding uses to refer to them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub faces: BTreeMap<String, PathBuf>,
}

/// Signatory printed when the organisation does not name one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureSettings {
    pub name: String,
    pub label: String,
}

impl Default for SignatureSettings {
    fn default() -> Self {
        SignatureSettings {
            name: "Ana Rita Vieira".to_string(),
            label: "Mindset & Wellness".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingDefaults {
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub logo_path: Option<PathBuf>,
    pub seal_path: Option<PathBuf>,
    pub include_logo: bool,
    pub include_qr: bool,
    pub font_title: String,
    pub font_body: String,
    pub font_body_bold: String,
    pub font_signature: String,
}

impl Default for BrandingDefaults {
    fn default() -> Self {
        BrandingDefaults {
            primary_color: "#9DB5A5".to_string(),
            secondary_color: "#C8B8D8".to_string(),
            text_color: "#1f2937".to_string(),
            logo_path: Some(PathBuf::from("Logos/ana_rita_m&w_logo_trnsp.png")),
            seal_path: None,
            include_logo: true,
            include_qr: false,
            font_title: "Helvetica-Bold".to_string(),
            font_body: "Helvetica".to_string(),
            font_body_bold: "Helvetica-Bold".to_string(),
            font_signature: "Times-Italic".to_string(),
        }
    }
}
