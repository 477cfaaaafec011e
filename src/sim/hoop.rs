use glam::Vec3A;

use crate::consts::{court, hoop};

/// One of the two hoops, named by the sign of its `x` coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HoopSide {
    Negative,
    #[default]
    Positive,
}

impl HoopSide {
    /// The hoop nearer to `x`. A ball exactly at half court aims at the positive hoop.
    #[must_use]
    pub fn nearest(x: f32) -> Self {
        if (x - court::HALF_LENGTH).abs() <= (x + court::HALF_LENGTH).abs() {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    #[inline]
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }

    /// `x` of the baseline under this hoop
    #[inline]
    #[must_use]
    pub fn baseline_x(self) -> f32 {
        self.sign() * court::HALF_LENGTH
    }

    #[inline]
    #[must_use]
    pub fn backboard_x(self) -> f32 {
        self.sign() * (court::HALF_LENGTH - hoop::BOARD_OFFSET)
    }

    #[inline]
    #[must_use]
    pub fn rim_center(self) -> Vec3A {
        Vec3A::new(
            self.sign() * (court::HALF_LENGTH - hoop::RIM_OFFSET),
            hoop::RIM_HEIGHT,
            0.0,
        )
    }
}

impl TryFrom<u8> for HoopSide {
    type Error = ();
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Negative),
            1 => Ok(Self::Positive),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_hoop() {
        assert_eq!(HoopSide::nearest(3.0), HoopSide::Positive);
        assert_eq!(HoopSide::nearest(-0.5), HoopSide::Negative);
        assert_eq!(HoopSide::nearest(-20.0), HoopSide::Negative);
        assert_eq!(HoopSide::nearest(0.0), HoopSide::Positive);
        assert_eq!(HoopSide::nearest(-0.0), HoopSide::Positive);
    }

    #[test]
    fn hoop_layout() {
        assert_eq!(HoopSide::Positive.baseline_x(), 15.0);
        assert!((HoopSide::Positive.backboard_x() - 13.975).abs() < 1e-5);
        assert!((HoopSide::Negative.backboard_x() + 13.975).abs() < 1e-5);

        let rim = HoopSide::Negative.rim_center();
        assert!((rim.x + 13.625).abs() < 1e-5);
        assert_eq!(rim.y, hoop::RIM_HEIGHT);
        assert_eq!(rim.z, 0.0);

        // the rim hangs in front of the board, toward half court
        assert!(HoopSide::Positive.rim_center().x < HoopSide::Positive.backboard_x());
    }
}
