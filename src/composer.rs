//! Lays a certificate out on a landscape page.
//!
//! Items are added to the page back to front: logo, borders, title, body,
//! signature block, seal and finally the QR block. Optional artwork that cannot be
//! loaded is logged and left out; it never fails the certificate.

use crate::branding::BrandingConfig;
use crate::colour::Colour;
use crate::config::{LayoutSettings, Settings};
use crate::document::Document;
use crate::error::CertificateError;
use crate::font::{Font, FontSet};
use crate::image::Image;
use crate::info::Info;
use crate::layout::{centred_start, wrap_runs, FontRole, Margins, MeasureText, TextRun};
use crate::page::{ImageLayout, Page, Shape, SpanFont, SpanLayout, StrokeLayout};
use crate::rect::Rect;
use crate::units::{Cm, Pt};
use ::image::DynamicImage;
use id_arena::Id;
use std::path::Path;
use std::sync::Arc;

/// The QR code drawn in validation mode, with its caption and the certificate id
pub struct QrBlock {
    pub image: DynamicImage,
    pub caption: String,
    pub identifier: String,
}

/// Everything printed on one certificate
pub struct CertificateContent {
    pub title: String,
    pub body: Vec<TextRun>,
    pub qr: Option<QrBlock>,
}

struct RoleFonts {
    title: Id<Arc<Font>>,
    body: Id<Arc<Font>>,
    body_bold: Id<Arc<Font>>,
    signature: Id<Arc<Font>>,
}

impl RoleFonts {
    fn get(&self, role: FontRole) -> Id<Arc<Font>> {
        match role {
            FontRole::Title => self.title,
            FontRole::Body => self.body,
            FontRole::BodyBold => self.body_bold,
            FontRole::Signature => self.signature,
        }
    }
}

pub struct Composer<'a> {
    settings: &'a Settings,
    fonts: &'a FontSet,
    branding: &'a BrandingConfig,
}

impl<'a> Composer<'a> {
    pub fn new(settings: &'a Settings, fonts: &'a FontSet, branding: &'a BrandingConfig) -> Self {
        Composer {
            settings,
            fonts,
            branding,
        }
    }

    fn layout(&self) -> &LayoutSettings {
        &self.settings.layout
    }

    pub fn compose(
        &self,
        content: &CertificateContent,
        info: Info,
    ) -> Result<Document, CertificateError> {
        let layout = self.layout();
        let cm = LayoutSettings::cm;

        let mut doc = Document::default();
        doc.set_info(info);
        let role_fonts = RoleFonts {
            title: doc.add_font(self.fonts.get(FontRole::Title).clone()),
            body: doc.add_font(self.fonts.get(FontRole::Body).clone()),
            body_bold: doc.add_font(self.fonts.get(FontRole::BodyBold).clone()),
            signature: doc.add_font(self.fonts.get(FontRole::Signature).clone()),
        };

        let mut page = Page::new(self.settings.paper.landscape());
        let page_width = page.width();
        let page_height = page.height();

        let mut current_y = page_height - cm(layout.logo_top_cm + layout.logo_offset_cm);

        if self.branding.include_logo {
            if let Some(logo) = self.branding.logo_path.as_deref() {
                let width = cm(layout.logo_width_cm);
                if let Some(image) = self.load_asset(logo, "logo") {
                    let height = width / image.aspect_ratio();
                    let x = centred_start(width, page_width);
                    page.add_image(ImageLayout {
                        image_id: doc.add_image(image),
                        position: Rect::from_origin(x, current_y, width, height),
                    });
                    current_y -= cm(layout.logo_padding_cm);
                    log::debug!(
                        "Logo placed at {:.1}x{:.1}cm",
                        Cm::from(width).0,
                        Cm::from(height).0
                    );
                }
            }
        }

        page.add_stroke(StrokeLayout {
            shape: Shape::Rect(page.media_box.inset(&Margins::all(Cm(layout.outer_border_cm)))),
            colour: self.branding.primary_colour,
            line_width: Pt(layout.outer_border_width_pt),
        });
        page.add_stroke(StrokeLayout {
            shape: Shape::Rect(page.media_box.inset(&Margins::all(Cm(layout.inner_border_cm)))),
            colour: self.branding.secondary_colour,
            line_width: Pt(layout.inner_border_width_pt),
        });

        current_y -= cm(layout.title_offset_cm + layout.title_gap_cm);
        page.add_span(self.centred_span(
            &role_fonts,
            &TextRun::new(
                content.title.as_str(),
                FontRole::Title,
                Pt(layout.title_size_pt),
                self.branding.primary_colour,
            ),
            page_width,
            current_y,
        ));

        current_y -= cm(layout.body_offset_cm);
        let max_width = page_width - cm(layout.text_margin_cm) * 2.0;
        let lines = wrap_runs(&content.body, max_width, self.fonts);
        log::debug!("Body wrapped into {} lines", lines.len());
        for line in lines.iter() {
            let mut x = line.centred_start(page_width);
            let mut spans = Vec::with_capacity(line.runs().len());
            for run in line.runs() {
                spans.push(SpanLayout {
                    text: run.text.clone(),
                    font: SpanFont {
                        id: role_fonts.get(run.font),
                        size: run.size,
                    },
                    colour: run.colour,
                    coords: (x, current_y),
                });
                x += self.fonts.run_width(run);
            }
            page.add_spans(spans);
            current_y -= cm(layout.line_height_cm);
        }

        self.signature_block(&mut page, &role_fonts);

        if let Some(seal) = self.branding.seal_path.as_deref() {
            if let Some(image) = self.load_asset(seal, "seal") {
                let height = cm(layout.seal_height_cm);
                let width = height * image.aspect_ratio();
                page.add_image(ImageLayout {
                    image_id: doc.add_image(image),
                    position: Rect::from_origin(
                        cm(layout.seal_x_cm),
                        cm(layout.seal_y_cm),
                        width,
                        height,
                    ),
                });
            }
        }

        if let Some(qr) = content.qr.as_ref() {
            self.qr_block(&mut doc, &mut page, &role_fonts, qr);
        }

        doc.add_page(page);
        Ok(doc)
    }

    fn signature_block(&self, page: &mut Page, role_fonts: &RoleFonts) {
        let layout = self.layout();
        let cm = LayoutSettings::cm;
        let page_width = page.width();
        let text_colour = self.branding.text_colour;

        let baseline = cm(layout.signature_baseline_cm);
        let centre = page_width / 2.0;
        let half_line = cm(layout.signature_line_cm) / 2.0;

        page.add_span(self.centred_span(
            role_fonts,
            &TextRun::new(
                self.branding.signature_name.as_str(),
                FontRole::Signature,
                Pt(layout.signature_size_pt),
                text_colour,
            ),
            page_width,
            baseline + cm(layout.signature_name_offset_cm),
        ));
        page.add_stroke(StrokeLayout {
            shape: Shape::Line {
                from: (centre - half_line, baseline),
                to: (centre + half_line, baseline),
            },
            colour: text_colour,
            line_width: Pt(layout.signature_line_width_pt),
        });
        page.add_span(self.centred_span(
            role_fonts,
            &TextRun::new(
                self.branding.signature_label.as_str(),
                FontRole::Body,
                Pt(layout.label_size_pt),
                text_colour,
            ),
            page_width,
            baseline - cm(layout.signature_label_offset_cm),
        ));
    }

    fn qr_block(&self, doc: &mut Document, page: &mut Page, role_fonts: &RoleFonts, qr: &QrBlock) {
        let layout = self.layout();
        let cm = LayoutSettings::cm;
        let page_width = page.width();
        let text_colour = self.branding.text_colour;

        let size = cm(layout.qr_size_cm);
        let x = page_width - cm(layout.qr_right_cm) - size;
        let y = cm(layout.qr_bottom_cm);
        page.add_image(ImageLayout {
            image_id: doc.add_image(Image::new_raster(qr.image.clone())),
            position: Rect::from_origin(x, y, size, size),
        });

        let caption = TextRun::new(
            qr.caption.as_str(),
            FontRole::Body,
            Pt(layout.caption_size_pt),
            text_colour,
        );
        let caption_width = self.fonts.run_width(&caption);
        page.add_span(SpanLayout {
            text: caption.text.clone(),
            font: SpanFont {
                id: role_fonts.get(caption.font),
                size: caption.size,
            },
            colour: caption.colour,
            coords: (
                x + centred_start(caption_width, size),
                y - cm(layout.qr_caption_offset_cm),
            ),
        });

        page.add_span(self.centred_span(
            role_fonts,
            &TextRun::new(
                qr.identifier.as_str(),
                FontRole::Body,
                Pt(layout.identifier_size_pt),
                Colour::new_grey(0.5),
            ),
            page_width,
            cm(layout.identifier_bottom_cm),
        ));
    }

    fn centred_span(
        &self,
        role_fonts: &RoleFonts,
        run: &TextRun,
        page_width: Pt,
        baseline: Pt,
    ) -> SpanLayout {
        let width = self.fonts.run_width(run);
        SpanLayout {
            text: run.text.clone(),
            font: SpanFont {
                id: role_fonts.get(run.font),
                size: run.size,
            },
            colour: run.colour,
            coords: (centred_start(width, page_width), baseline),
        }
    }

    fn load_asset(&self, path: &Path, what: &str) -> Option<Image> {
        let path = self.settings.asset_path(path);
        if !path.exists() {
            log::warn!("{what} not found: {}", path.display());
            return None;
        }
        match Image::new_from_disk(&path) {
            Ok(image) => {
                log::info!("{what} added from {}", path.display());
                Some(image)
            }
            Err(e) => {
                log::warn!("Could not add {what} from {}: {e}", path.display());
                None
            }
        }
    }
}
