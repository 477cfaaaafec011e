/// Why a flight ended without a make
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissReason {
    /// The ball stopped bouncing on the floor
    Settled,
    /// The ball crossed a baseline by more than the out-of-bounds margin
    OutOfBounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Made,
    Missed(MissReason),
}

/// Lifecycle of a single shot.
///
/// ```text
/// Idle | Settled --launch--> Flying
/// Flying --make--> Scored
/// Flying --finish--> Settled(Missed)
/// Scored --finish--> Settled(Made)
/// any --reset--> Idle
/// ```
///
/// Each flight reports exactly one outcome: `Made` when entering `Scored`,
/// or `Missed` when finishing straight from `Flying`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotPhase {
    #[default]
    Idle,
    Flying,
    /// Went through the rim and is still falling
    Scored,
    Settled(ShotOutcome),
}

impl ShotPhase {
    #[inline]
    #[must_use]
    pub const fn is_flying(self) -> bool {
        matches!(self, Self::Flying | Self::Scored)
    }

    #[inline]
    #[must_use]
    pub const fn has_scored(self) -> bool {
        matches!(self, Self::Scored | Self::Settled(ShotOutcome::Made))
    }

    /// The outcome of the last flight, once it has ended
    #[must_use]
    pub const fn outcome(self) -> Option<ShotOutcome> {
        match self {
            Self::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Starts a new flight. Returns false if the ball is already in the air.
    pub(crate) fn launch(&mut self) -> bool {
        if self.is_flying() {
            return false;
        }

        *self = Self::Flying;
        true
    }

    /// Returns true only for the first make of a flight
    pub(crate) fn register_make(&mut self) -> bool {
        if *self != Self::Flying {
            return false;
        }

        *self = Self::Scored;
        true
    }

    /// Ends the flight, returning the outcome if it has not been reported yet.
    pub(crate) fn finish(&mut self, reason: MissReason) -> Option<ShotOutcome> {
        match *self {
            Self::Flying => {
                let outcome = ShotOutcome::Missed(reason);
                *self = Self::Settled(outcome);
                Some(outcome)
            }
            Self::Scored => {
                *self = Self::Settled(ShotOutcome::Made);
                None
            }
            Self::Idle | Self::Settled(_) => None,
        }
    }

    #[must_use]
    pub const fn to_code(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Flying => 1,
            Self::Scored => 2,
            Self::Settled(ShotOutcome::Made) => 3,
            Self::Settled(ShotOutcome::Missed(MissReason::Settled)) => 4,
            Self::Settled(ShotOutcome::Missed(MissReason::OutOfBounds)) => 5,
        }
    }
}

impl TryFrom<u8> for ShotPhase {
    type Error = ();
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Idle),
            1 => Ok(Self::Flying),
            2 => Ok(Self::Scored),
            3 => Ok(Self::Settled(ShotOutcome::Made)),
            4 => Ok(Self::Settled(ShotOutcome::Missed(MissReason::Settled))),
            5 => Ok(Self::Settled(ShotOutcome::Missed(MissReason::OutOfBounds))),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_is_reported_once() {
        let mut phase = ShotPhase::Idle;
        assert!(phase.launch());
        assert!(!phase.launch());

        assert_eq!(
            phase.finish(MissReason::Settled),
            Some(ShotOutcome::Missed(MissReason::Settled))
        );
        assert_eq!(phase.finish(MissReason::OutOfBounds), None);
        assert!(!phase.is_flying());
        assert!(!phase.has_scored());
    }

    #[test]
    fn make_suppresses_later_miss() {
        let mut phase = ShotPhase::Idle;
        phase.launch();

        assert!(phase.register_make());
        assert!(!phase.register_make());
        assert!(phase.is_flying());
        assert!(phase.has_scored());

        assert_eq!(phase.finish(MissReason::OutOfBounds), None);
        assert_eq!(phase.outcome(), Some(ShotOutcome::Made));
        assert!(phase.has_scored());

        // relaunching clears the scored flag
        assert!(phase.launch());
        assert!(!phase.has_scored());
    }

    #[test]
    fn idle_ball_cannot_score_or_finish() {
        let mut phase = ShotPhase::Idle;
        assert!(!phase.register_make());
        assert_eq!(phase.finish(MissReason::Settled), None);
        assert_eq!(phase, ShotPhase::Idle);
    }

    #[test]
    fn codes_cover_every_phase() {
        for code in 0..=5 {
            let phase = ShotPhase::try_from(code).unwrap();
            assert_eq!(phase.to_code(), code);
        }
        assert!(ShotPhase::try_from(6).is_err());
    }
}
