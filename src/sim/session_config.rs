use glam::Vec3A;

use crate::consts::{self, ball, shot};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub gravity: Vec3A,
    pub restitution: f32,
    /// Floor rebounds slower than this end the flight
    pub settle_speed: f32,
    pub launch_up_bias: f32,
    pub max_launch_speed: f32,
    /// Fixed simulation rate in ticks per second, between 15 and 120
    pub tick_rate: u8,
    /// Most ticks a single `GameSession::advance` call may run.
    /// Time beyond that is dropped so a stalled host cannot queue up seconds of catch-up.
    pub max_ticks_per_advance: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SessionConfig {
    pub const MIN_TICK_RATE: u8 = 15;
    pub const MAX_TICK_RATE: u8 = 120;

    pub const DEFAULT: Self = Self {
        gravity: Vec3A::new(0.0, consts::GRAVITY_Y, 0.0),
        restitution: consts::RESTITUTION,
        settle_speed: ball::SETTLE_SPEED,
        launch_up_bias: shot::UP_BIAS,
        max_launch_speed: shot::MAX_SPEED,
        tick_rate: consts::TICK_RATE,
        max_ticks_per_advance: 8,
    };

    #[inline]
    #[must_use]
    pub fn tick_time(&self) -> f32 {
        1.0 / f32::from(self.tick_rate)
    }
}
