use std::ops::{Deref, DerefMut};

use glam::{Mat3A, Vec3A};

use crate::{
    consts::ball,
    sim::{HoopSide, PhysState, ShotPhase},
};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallState {
    pub phys: PhysState,
    /// Unit axis of the visual spin
    pub spin_axis: Vec3A,
    /// Visual spin rate in rad/s
    pub spin_speed: f32,
    pub phase: ShotPhase,
    /// Hoop chosen at launch; `None` until the first shot
    pub target: Option<HoopSide>,
}

impl Default for BallState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BallState {
    /// Idle at center court
    pub const DEFAULT: Self = Self {
        phys: PhysState {
            pos: ball::REST_POS,
            vel: Vec3A::ZERO,
            rot_mat: Mat3A::IDENTITY,
        },
        spin_axis: Vec3A::X,
        spin_speed: 0.0,
        phase: ShotPhase::Idle,
        target: None,
    };

    #[inline]
    #[must_use]
    pub const fn is_flying(&self) -> bool {
        self.phase.is_flying()
    }

    #[inline]
    #[must_use]
    pub const fn has_scored(&self) -> bool {
        self.phase.has_scored()
    }

    /// The hoop collision checks run against
    #[inline]
    #[must_use]
    pub fn active_hoop(&self) -> HoopSide {
        self.target.unwrap_or_else(|| HoopSide::nearest(self.pos.x))
    }
}

impl Deref for BallState {
    type Target = PhysState;
    fn deref(&self) -> &Self::Target {
        &self.phys
    }
}

impl DerefMut for BallState {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.phys
    }
}
