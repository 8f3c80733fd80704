use crate::{
    error::CertificateError,
    font::Font,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::sync::Arc;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Arc<Font>>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, so any page can refer to it by the returned id. Adding the same face
    /// twice returns the id it was first given.
    pub fn add_font(&mut self, font: Arc<Font>) -> Id<Arc<Font>> {
        if let Some((id, _)) = self.fonts.iter().find(|(_, f)| Arc::ptr_eq(f, &font)) {
            return id;
        }
        self.fonts.alloc(font)
    }

    /// Add an image to the document structure, returning the id pages use to place it
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Render the whole document into memory
    pub fn to_bytes(self) -> Result<Vec<u8>, CertificateError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        // page refs are generated up front so the page tree can list them
        let page_refs: Vec<Ref> = page_order
            .iter()
            .enumerate()
            .map(|(i, _id)| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (i, font) in fonts.iter() {
            font.write(&mut refs, i.index(), &mut writer);
        }

        for (i, image) in images.iter() {
            image.write(&mut refs, i.index(), &mut writer)?;
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, "page missing")
            })?;
            page.write(&mut refs, page_index, &fonts, &images, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        Ok(writer.finish())
    }
}
