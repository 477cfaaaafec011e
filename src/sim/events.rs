use crate::sim::{Contact, MissReason};

/// Everything the UI, audio or telemetry layers may want to react to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    ShotAttempted,
    ShotMade { points: u32 },
    ShotMissed { reason: MissReason },
    Contact(Contact),
    BallReset,
}

impl GameEvent {
    /// Feedback text for the end of a shot
    #[must_use]
    pub const fn feedback(&self) -> Option<&'static str> {
        match self {
            Self::ShotMade { .. } => Some("SHOT MADE!"),
            Self::ShotMissed { .. } => Some("MISSED SHOT!"),
            _ => None,
        }
    }
}
