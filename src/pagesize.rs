//! Pre-defined page sizes for the paper formats certificates are printed on.
//!
//! Sizes are given in portrait orientation (width, height) where width ≤ height.
//! Certificates are always laid out in landscape, see [`Paper::landscape`].

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// The same size turned so that width ≥ height
pub fn landscape((width, height): PageSize) -> PageSize {
    if width >= height {
        (width, height)
    } else {
        (height, width)
    }
}

/// Paper formats selectable from the settings file
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paper {
    #[default]
    A4,
    A5,
    Letter,
}

impl Paper {
    /// The landscape canvas for this paper format
    pub fn landscape(self) -> PageSize {
        match self {
            Paper::A4 => landscape(A4),
            Paper::A5 => landscape(A5),
            Paper::Letter => landscape(LETTER),
        }
    }
}
