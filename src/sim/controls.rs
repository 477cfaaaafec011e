use crate::consts::{controls, shot};

/// Direction of a single ball nudge while lining up a shot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nudge {
    /// -x
    Left,
    /// +x
    Right,
    /// -z
    Up,
    /// +z
    Down,
}

/// Player intents, produced by the input layer and consumed once per tick before physics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Ignored while the ball is flying
    MoveBall { dx: f32, dz: f32 },
    AdjustPower(f32),
    /// Ignored while the ball is flying
    Launch,
    /// Always allowed; keeps the cumulative stats
    Reset,
}

impl Command {
    #[must_use]
    pub const fn nudge(nudge: Nudge) -> Self {
        let (dx, dz) = match nudge {
            Nudge::Left => (-controls::MOVE_STEP, 0.0),
            Nudge::Right => (controls::MOVE_STEP, 0.0),
            Nudge::Up => (0.0, -controls::MOVE_STEP),
            Nudge::Down => (0.0, controls::MOVE_STEP),
        };

        Self::MoveBall { dx, dz }
    }

    #[must_use]
    pub const fn power_up() -> Self {
        Self::AdjustPower(shot::POWER_STEP)
    }

    #[must_use]
    pub const fn power_down() -> Self {
        Self::AdjustPower(-shot::POWER_STEP)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotControls {
    pub power: f32,
}

impl Default for ShotControls {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ShotControls {
    pub const DEFAULT: Self = Self {
        power: shot::DEFAULT_POWER,
    };

    pub(crate) fn clamp_fix(&mut self) {
        self.power = self.power.clamp(0.0, 1.0);
    }

    /// Power rounded to a whole percent, as shown on the scoreboard
    #[must_use]
    pub fn power_percent(&self) -> u32 {
        (self.power * 100.0).round() as u32
    }
}
