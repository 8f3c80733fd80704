use crate::colour::Colour;
use crate::config::Settings;
use crate::models::{Organization, TemplateConfig};
use std::path::PathBuf;

const BUILTIN_PRIMARY: Colour = Colour::RGB {
    r: 0x9D as f32 / 255.0,
    g: 0xB5 as f32 / 255.0,
    b: 0xA5 as f32 / 255.0,
};
const BUILTIN_SECONDARY: Colour = Colour::RGB {
    r: 0xC8 as f32 / 255.0,
    g: 0xB8 as f32 / 255.0,
    b: 0xD8 as f32 / 255.0,
};
const BUILTIN_TEXT: Colour = Colour::RGB {
    r: 0x1f as f32 / 255.0,
    g: 0x29 as f32 / 255.0,
    b: 0x37 as f32 / 255.0,
};

/// The look of one certificate, resolved from the organisation, the template and the
/// configured defaults. Colours are always valid once resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandingConfig {
    pub primary_colour: Colour,
    pub secondary_colour: Colour,
    pub text_colour: Colour,
    pub logo_path: Option<PathBuf>,
    pub seal_path: Option<PathBuf>,
    pub include_logo: bool,
    pub include_qr: bool,
    pub font_title: String,
    pub font_body: String,
    pub font_body_bold: String,
    pub font_signature: String,
    pub signature_name: String,
    pub signature_label: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        BrandingConfig::resolve(None, None, &Settings::default())
    }
}

impl BrandingConfig {
    /// Combine the sources in precedence order. The organisation wins for colours,
    /// artwork and signatory; the template wins for everything else; settings fill
    /// the gaps. Blank values count as unset, and colours that fail to parse are
    /// skipped with a warning.
    pub fn resolve(
        organization: Option<&Organization>,
        template: Option<&TemplateConfig>,
        settings: &Settings,
    ) -> BrandingConfig {
        let defaults = &settings.branding;
        let org = |f: fn(&Organization) -> Option<&String>| organization.and_then(f);
        let tpl = |f: fn(&TemplateConfig) -> Option<&String>| template.and_then(f);

        let primary_colour = first_colour(
            [
                org(|o| o.primary_color.as_ref()),
                tpl(|t| t.primary_color.as_ref()),
                Some(&defaults.primary_color),
            ],
            BUILTIN_PRIMARY,
        );
        let secondary_colour = first_colour(
            [
                org(|o| o.secondary_color.as_ref()),
                tpl(|t| t.secondary_color.as_ref()),
                Some(&defaults.secondary_color),
            ],
            BUILTIN_SECONDARY,
        );
        let text_colour = first_colour(
            [tpl(|t| t.text_color.as_ref()), Some(&defaults.text_color)],
            BUILTIN_TEXT,
        );

        let logo_path = organization
            .and_then(|o| o.logo_path.clone())
            .or_else(|| template.and_then(|t| t.logo_path.clone()))
            .or_else(|| defaults.logo_path.clone())
            .filter(|p| !p.as_os_str().is_empty());
        let seal_path = organization
            .and_then(|o| o.seal_path.clone())
            .or_else(|| template.and_then(|t| t.seal_path.clone()))
            .or_else(|| defaults.seal_path.clone())
            .filter(|p| !p.as_os_str().is_empty());

        let font = |f: fn(&TemplateConfig) -> Option<&String>, default: &String| {
            non_blank(tpl(f)).unwrap_or(default).clone()
        };

        let signature_name = non_blank(org(|o| o.signature_name.as_ref()))
            .unwrap_or(&settings.signature.name)
            .clone();
        let signature_label = non_blank(org(|o| o.signature_role.as_ref()))
            .or_else(|| non_blank(organization.map(|o| &o.name)))
            .unwrap_or(&settings.signature.label)
            .clone();

        BrandingConfig {
            primary_colour,
            secondary_colour,
            text_colour,
            logo_path,
            seal_path,
            include_logo: template
                .and_then(|t| t.include_logo)
                .unwrap_or(defaults.include_logo),
            include_qr: template
                .and_then(|t| t.include_qr)
                .unwrap_or(defaults.include_qr),
            font_title: font(|t| t.font_title.as_ref(), &defaults.font_title),
            font_body: font(|t| t.font_body.as_ref(), &defaults.font_body),
            font_body_bold: font(|t| t.font_body_bold.as_ref(), &defaults.font_body_bold),
            font_signature: font(|t| t.font_signature.as_ref(), &defaults.font_signature),
            signature_name,
            signature_label,
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<&String> {
    value.filter(|s| !s.trim().is_empty())
}

fn first_colour<const N: usize>(candidates: [Option<&String>; N], fallback: Colour) -> Colour {
    for candidate in candidates.into_iter().flatten() {
        if candidate.trim().is_empty() {
            continue;
        }
        match Colour::from_hex(candidate) {
            Ok(colour) => return colour,
            Err(e) => log::warn!("Ignoring branding colour: {e}"),
        }
    }
    fallback
}
