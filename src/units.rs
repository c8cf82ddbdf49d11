use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, MulAssign, Sub, SubAssign, Sum};
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Neg};

/// A distance in SVG user units (CSS pixels). All laid out geometry, font sizes,
/// letter spacing and padding are expressed in this unit.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    MulAssign,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
    Sum,
    Serialize,
    Deserialize,
)]
#[display("{_0}px")]
#[serde(transparent)]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    /// The larger of two distances
    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    /// The smaller of two distances
    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Round up to the next whole pixel, as used for document dimensions
    pub fn ceil(self) -> u32 {
        self.0.max(0.0).ceil() as u32
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Mul<Px> for f32 {
    type Output = Px;

    fn mul(self, rhs: Px) -> Px {
        Px(self * rhs.0)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Px {
        Px(-self.0)
    }
}
