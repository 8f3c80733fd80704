//! Physical length units.
//!
//! Everything that ends up in the PDF is expressed in [`Pt`] (1/72 of an inch).
//! Layout settings are authored in centimetres, so [`Cm`] converts into points
//! with `.into()`.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// PDF points; the unit of the PDF coordinate space
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

/// Centimetres
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, Sub, Display)]
#[display("{_0}cm")]
pub struct Cm(pub f32);

const POINTS_PER_INCH: f32 = 72.0;
const CM_PER_INCH: f32 = 2.54;

impl From<Cm> for Pt {
    fn from(cm: Cm) -> Self {
        Pt(cm.0 * POINTS_PER_INCH / CM_PER_INCH)
    }
}

impl From<Pt> for Cm {
    fn from(pt: Pt) -> Self {
        Cm(pt.0 * CM_PER_INCH / POINTS_PER_INCH)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// Dividing two lengths yields a plain ratio
impl Div<Pt> for Pt {
    type Output = f32;

    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

impl Pt {
    pub fn max(self, other: Pt) -> Pt {
        Pt(self.0.max(other.0))
    }

    pub fn min(self, other: Pt) -> Pt {
        Pt(self.0.min(other.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_convert_centimetres() {
        let pt: Pt = Cm(2.54).into();
        assert!((pt.0 - 72.0).abs() < 1e-4);

        let cm: Cm = Pt(72.0).into();
        assert!((cm.0 - 2.54).abs() < 1e-4);
    }

    #[test]
    fn can_do_arithmetic() {
        let total: Pt = [Pt(1.0), Pt(2.5), Pt(0.5)].into_iter().sum();
        assert_eq!(total, Pt(4.0));
        assert_eq!(Pt(10.0) - Pt(4.0), Pt(6.0));
        assert_eq!(Pt(3.0) * 2.0, Pt(6.0));
        assert_eq!(Pt(3.0) / 2.0, Pt(1.5));
        assert_eq!(Pt(3.0) / Pt(2.0), 1.5);
    }
}
