//! Fixed-step flight integration.

use glam::Vec3A;
use log::debug;

use crate::sim::PhysState;

/// Semi-implicit Euler: velocity first, then position with the new velocity.
#[inline]
pub fn integrate(phys: &mut PhysState, gravity: Vec3A, dt: f32) {
    phys.vel += gravity * dt;
    phys.pos += phys.vel * dt;
}

/// Turns variable host frame times into whole fixed-length ticks.
#[derive(Clone, Copy, Debug)]
pub struct TickAccumulator {
    tick_time: f32,
    pending: f32,
    max_ticks: u32,
}

impl TickAccumulator {
    /// Slack for frame times that land a hair under a whole tick
    const EPSILON: f32 = 1e-6;

    #[must_use]
    pub const fn new(tick_time: f32, max_ticks: u32) -> Self {
        Self {
            tick_time,
            pending: 0.0,
            max_ticks,
        }
    }

    /// Simulated time not yet covered by a tick
    #[inline]
    #[must_use]
    pub const fn pending(&self) -> f32 {
        self.pending
    }

    /// Adds `elapsed` seconds and returns how many ticks to run now.
    pub fn push(&mut self, elapsed: f32) -> u32 {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }

        self.pending += elapsed;

        // saturating float -> int cast
        let due = ((self.pending + Self::EPSILON) / self.tick_time).floor() as u32;

        if due > self.max_ticks {
            // the excess is dropped, so only the partial tick carries over
            self.pending = self.pending.rem_euclid(self.tick_time);
            debug!(
                "Dropping {} ticks, host fell {:.3}s behind",
                due - self.max_ticks,
                (due - self.max_ticks) as f32 * self.tick_time
            );
            self.max_ticks
        } else {
            self.pending = (self.pending - due as f32 * self.tick_time).max(0.0);
            due
        }
    }
}
