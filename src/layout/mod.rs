//! Text measurement and line wrapping for certificate bodies.
//!
//! A certificate body is an ordered list of [`TextRun`]s, each with its own face,
//! size and colour (the participant's name in bold brand colour, the connective
//! prose in the regular text colour, and so on). [`wrap_runs`] packs those runs
//! into [`Line`]s that fit the page's content width; the composer then centres
//! each line and draws its runs left to right.
//!
//! # Example
//!
//! ```
//! use cert_gen::layout::{wrap_runs, FontRole, TextRun};
//! use cert_gen::{colours, FontSet, Pt};
//!
//! let fonts = FontSet::builtin();
//! let runs = vec![
//!     TextRun::new("Certificamos que ", FontRole::Body, Pt(16.0), colours::BLACK),
//!     TextRun::new("Maria Silva,", FontRole::BodyBold, Pt(16.0), colours::BLACK),
//! ];
//! let lines = wrap_runs(&runs, Pt(500.0), &fonts);
//! assert_eq!(lines.len(), 1);
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
