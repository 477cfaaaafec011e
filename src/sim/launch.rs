use glam::Vec3A;

use crate::{
    consts::hoop,
    sim::{HoopSide, SessionConfig},
};

/// Inputs of one shot, fixed at the moment of launch
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotParameters {
    /// In `[0, 1]`; clamped by the controls before it gets here
    pub power: f32,
    pub target: HoopSide,
}

impl ShotParameters {
    /// Aims at the hoop nearest to `pos`.
    #[must_use]
    pub fn plan(pos: Vec3A, power: f32) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&power),
            "shot power must be pre-clamped to [0, 1], got {power}"
        );

        Self {
            power,
            target: HoopSide::nearest(pos.x),
        }
    }

    /// Point on the target hoop the shot is aimed at: rim height on the baseline
    #[inline]
    #[must_use]
    pub fn aim_point(&self) -> Vec3A {
        Vec3A::new(self.target.baseline_x(), hoop::RIM_HEIGHT, 0.0)
    }

    /// Launch velocity for a ball at `pos`.
    ///
    /// The aim vector gets a fixed upward bias before normalizing, so every shot is a high lob
    /// no matter the distance, and the speed depends only on the power.
    #[must_use]
    pub fn launch_velocity(&self, pos: Vec3A, config: &SessionConfig) -> Vec3A {
        let mut aim = self.aim_point() - pos;
        aim.y += config.launch_up_bias;

        let dir = aim.try_normalize().unwrap_or(Vec3A::Y);
        dir * (self.power * config.max_launch_speed)
    }
}
