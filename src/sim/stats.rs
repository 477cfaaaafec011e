use ahash::AHashMap;

use crate::sim::Surface;

/// Session totals. Survive `Command::Reset`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotStats {
    pub attempts: u32,
    pub makes: u32,
    pub score: u32,
    /// Contacts during the current (or last) flight
    flight_contacts: AHashMap<Surface, u32>,
}

impl ShotStats {
    /// Percentage of attempts made, rounded; 0 before the first attempt
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }

        (self.makes as f32 / self.attempts as f32 * 100.0).round() as u32
    }

    #[must_use]
    pub fn flight_contacts(&self, surface: Surface) -> u32 {
        self.flight_contacts.get(&surface).copied().unwrap_or(0)
    }

    pub(crate) fn record_attempt(&mut self) {
        self.attempts += 1;
        self.flight_contacts.clear();
    }

    pub(crate) fn record_make(&mut self, points: u32) {
        self.makes += 1;
        self.score += points;
    }

    pub(crate) fn record_contact(&mut self, surface: Surface) {
        *self.flight_contacts.entry(surface).or_insert(0) += 1;
    }
}
