mod batch;
pub use batch::*;

mod branding;
pub use branding::*;

mod certificate;
pub use certificate::*;

mod colour;
pub use colour::*;

mod composer;
pub use composer::*;

mod config;
pub use config::*;

mod content;

/// Sending certificates by email through a pluggable transport
pub mod delivery;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (most text) on pages
pub mod layout;

mod models;
pub use models::*;

mod page;
pub use page::*;

pub mod pagesize;

mod qr;
pub use qr::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod store;
pub use store::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
