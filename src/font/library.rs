use super::{BuiltinFont, Font};
use crate::branding::BrandingConfig;
use crate::config::FontSettings;
use crate::layout::{FontRole, MeasureText};
use crate::units::Pt;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Every face available to certificates, resolved once at startup.
///
/// Faces configured in the settings file are looked up first, then the built-in
/// standard faces. Configured faces may shadow built-in names.
pub struct FontLibrary {
    faces: HashMap<String, Arc<Font>>,
    builtins: HashMap<BuiltinFont, Arc<Font>>,
}

impl Default for FontLibrary {
    fn default() -> Self {
        FontLibrary::builtin()
    }
}

impl FontLibrary {
    /// A library holding only the built-in standard faces
    pub fn builtin() -> FontLibrary {
        let builtins = BuiltinFont::all()
            .iter()
            .map(|&font| (font, Arc::new(Font::Builtin(font))))
            .collect();

        FontLibrary {
            faces: HashMap::new(),
            builtins,
        }
    }

    /// Load the faces listed in the settings. Relative paths are resolved against
    /// `base_dir`. Faces that cannot be read or parsed are logged and skipped; the
    /// built-in faces remain available as a fallback.
    pub fn load(settings: &FontSettings, base_dir: &Path) -> FontLibrary {
        let mut library = FontLibrary::builtin();

        for (name, path) in settings.faces.iter() {
            let path = if path.is_absolute() {
                path.clone()
            } else {
                base_dir.join(path)
            };

            let loaded = std::fs::read(&path)
                .map_err(Into::into)
                .and_then(Font::load);
            match loaded {
                Ok(font) => {
                    log::info!("Registered font {name} from {}", path.display());
                    library.register(name, font);
                }
                Err(e) => {
                    log::warn!("Could not load font {name} from {}: {e}", path.display());
                }
            }
        }

        library
    }

    pub fn register<S: Into<String>>(&mut self, name: S, font: Font) {
        self.faces.insert(name.into(), Arc::new(font));
    }

    /// Look a face up by name
    pub fn get(&self, name: &str) -> Option<Arc<Font>> {
        self.faces.get(name).cloned().or_else(|| {
            BuiltinFont::from_name(name).and_then(|font| self.builtins.get(&font).cloned())
        })
    }

    fn builtin_face(&self, font: BuiltinFont) -> Arc<Font> {
        self.builtins
            .get(&font)
            .cloned()
            .unwrap_or_else(|| Arc::new(Font::Builtin(font)))
    }

    fn resolve(&self, role: FontRole, name: &str) -> Arc<Font> {
        self.get(name).unwrap_or_else(|| {
            let fallback = default_face(role);
            log::warn!(
                "Unknown font face {name:?} for {role:?} text, using {}",
                fallback.name()
            );
            self.builtin_face(fallback)
        })
    }

    /// Assign a face to every role, following the branding's choices
    pub fn font_set(&self, branding: &BrandingConfig) -> FontSet {
        FontSet {
            title: self.resolve(FontRole::Title, &branding.font_title),
            body: self.resolve(FontRole::Body, &branding.font_body),
            body_bold: self.resolve(FontRole::BodyBold, &branding.font_body_bold),
            signature: self.resolve(FontRole::Signature, &branding.font_signature),
        }
    }
}

/// The built-in face used for a role when nothing else is configured
pub fn default_face(role: FontRole) -> BuiltinFont {
    match role {
        FontRole::Title | FontRole::BodyBold => BuiltinFont::HelveticaBold,
        FontRole::Body => BuiltinFont::Helvetica,
        FontRole::Signature => BuiltinFont::TimesItalic,
    }
}

/// The faces used by one certificate, one per [`FontRole`]. Used both to wrap body
/// text and to draw it, so measurements always agree with the rendered output.
#[derive(Clone)]
pub struct FontSet {
    title: Arc<Font>,
    body: Arc<Font>,
    body_bold: Arc<Font>,
    signature: Arc<Font>,
}

impl FontSet {
    /// The default faces for every role
    pub fn builtin() -> FontSet {
        let bold = Arc::new(Font::Builtin(default_face(FontRole::BodyBold)));
        FontSet {
            title: bold.clone(),
            body: Arc::new(Font::Builtin(default_face(FontRole::Body))),
            body_bold: bold,
            signature: Arc::new(Font::Builtin(default_face(FontRole::Signature))),
        }
    }

    pub fn get(&self, role: FontRole) -> &Arc<Font> {
        match role {
            FontRole::Title => &self.title,
            FontRole::Body => &self.body,
            FontRole::BodyBold => &self.body_bold,
            FontRole::Signature => &self.signature,
        }
    }
}

impl MeasureText for FontSet {
    fn text_width(&self, font: FontRole, size: Pt, text: &str) -> Pt {
        self.get(font).width_of_text(text, size)
    }
}
