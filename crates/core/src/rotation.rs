//! Quarter-turn rotations, counter-clockwise.

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Zero,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Zero,
        Rotation::Quarter,
        Rotation::Half,
        Rotation::ThreeQuarter,
    ];

    /// One more quarter turn counter-clockwise.
    pub fn ccw(self) -> Self {
        match self {
            Self::Zero => Self::Quarter,
            Self::Quarter => Self::Half,
            Self::Half => Self::ThreeQuarter,
            Self::ThreeQuarter => Self::Zero,
        }
    }

    /// One quarter turn back (clockwise).
    pub fn cw(self) -> Self {
        match self {
            Self::Zero => Self::ThreeQuarter,
            Self::ThreeQuarter => Self::Half,
            Self::Half => Self::Quarter,
            Self::Quarter => Self::Zero,
        }
    }

    pub fn flip(self) -> Self {
        self.ccw().ccw()
    }

    /// Rotation equal to applying `self` and then `next`.
    pub fn then(self, next: Rotation) -> Self {
        let mut out = self;
        for _ in 0..next.quarters() {
            out = out.ccw();
        }
        out
    }

    /// The rotation that undoes `self`.
    pub fn inverse(self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::Quarter => Self::ThreeQuarter,
            Self::Half => Self::Half,
            Self::ThreeQuarter => Self::Quarter,
        }
    }

    pub fn quarters(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::Quarter => 1,
            Self::Half => 2,
            Self::ThreeQuarter => 3,
        }
    }

    pub fn degrees(self) -> u16 {
        self.quarters() as u16 * 90
    }

    pub fn from_degrees(degrees: u16) -> Result<Self, CoreError> {
        match degrees {
            0 => Ok(Self::Zero),
            90 => Ok(Self::Quarter),
            180 => Ok(Self::Half),
            270 => Ok(Self::ThreeQuarter),
            other => Err(CoreError::InvalidRotation(other)),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = CoreError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Self::from_degrees(degrees)
    }
}
