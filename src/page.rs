use crate::colour::Colour;
use crate::content::render_contents;
use crate::error::CertificateError;
use crate::font::Font;
use crate::image::Image;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};
use std::sync::Arc;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Arc<Font>>,
    pub size: Pt,
}

/// A run of text placed at a baseline position
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Shape {
    Rect(Rect),
    Line { from: (Pt, Pt), to: (Pt, Pt) },
}

/// An outlined shape
#[derive(Clone, PartialEq, Debug)]
pub struct StrokeLayout {
    pub shape: Shape,
    pub colour: Colour,
    pub line_width: Pt,
}

/// Drawing operations, painted in the order they were added to the page
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
    Stroke(StrokeLayout),
}

pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The drawing operations, back to front
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: Rect::from_origin(Pt(0.0), Pt(0.0), size.0, size.1),
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Add several spans as one text block; they share a graphics state in the output
    pub fn add_spans(&mut self, spans: Vec<SpanLayout>) {
        if !spans.is_empty() {
            self.contents.push(PageContents::Text(spans));
        }
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    pub fn add_stroke(&mut self, stroke: StrokeLayout) {
        self.contents.push(PageContents::Stroke(stroke));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Arc<Font>>,
        images: &Arena<Image>,
        writer: &mut Pdf,
    ) -> Result<(), CertificateError> {
        let id = refs.get(RefType::Page(page_index)).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, "page ref missing")
        })?;
        let parent = refs.get(RefType::PageTree).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, "page tree missing")
        })?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            if let Some(image_ref) = refs.get(RefType::Image(image_id.index())) {
                resource_xobjects.pair(
                    Name(format!("I{}", image_id.index()).as_bytes()),
                    image_ref,
                );
            }
        }
        resource_xobjects.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, fonts)?;
        writer.stream(content_id, rendered.as_slice());

        Ok(())
    }
}
