use crate::sim::{BallState, HoopSide, ShotControls, ShotStats};

/// Snapshot of a session for the scoreboard and status panels
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub tick_rate: u8,
    pub tick_count: u64,
    pub ball: BallState,
    pub controls: ShotControls,
    pub stats: ShotStats,
}

impl GameState {
    #[must_use]
    pub const fn ball_status(&self) -> &'static str {
        if self.ball.is_flying() {
            "Ball in flight..."
        } else {
            "Ball ready to shoot"
        }
    }

    #[must_use]
    pub fn target_info(&self) -> String {
        match self.ball.target {
            Some(side) if self.ball.is_flying() => {
                let name = match side {
                    HoopSide::Negative => "left",
                    HoopSide::Positive => "right",
                };
                format!("Shooting toward {name} hoop")
            }
            _ => "Aim for the nearest hoop!".to_owned(),
        }
    }

    /// Simulated seconds since the session started
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.tick_count as f64 / f64::from(self.tick_rate)
    }
}
