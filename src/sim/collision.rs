//! Contact checks against simplified court proxies: the floor plane, a box around the
//! backboard, and a ring at rim height.
//!
//! Every check runs each tick, in a fixed order, against the post-integration position.
//! Several can fire in the same tick.

use arrayvec::ArrayVec;
use glam::Vec3A;
use log::debug;

use crate::{
    consts::{ball, court, hoop},
    math,
    sim::{BallState, HoopSide, MissReason, SessionConfig, ShotOutcome},
};

/// At most one contact of each kind per tick
pub const MAX_CONTACTS_PER_TICK: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Surface {
    Floor,
    Backboard,
    Rim,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Contact {
    /// `settled` is set when the rebound was too slow and the ball came to rest
    Floor { settled: bool },
    Backboard,
    RimBounce,
    /// Dropped cleanly through the rim
    RimMake,
    OutOfBounds,
}

impl Contact {
    #[must_use]
    pub const fn surface(self) -> Option<Surface> {
        match self {
            Self::Floor { .. } => Some(Surface::Floor),
            Self::Backboard => Some(Surface::Backboard),
            Self::RimBounce | Self::RimMake => Some(Surface::Rim),
            Self::OutOfBounds => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub contacts: ArrayVec<Contact, MAX_CONTACTS_PER_TICK>,
    /// Set on the tick the shot is decided; never twice per flight
    pub outcome: Option<ShotOutcome>,
}

impl TickReport {
    fn record(&mut self, contact: Contact) {
        debug!("Ball contact: {contact:?}");
        self.contacts.push(contact);
    }

    #[must_use]
    pub fn contains(&self, contact: Contact) -> bool {
        self.contacts.contains(&contact)
    }
}

/// Detects and resolves all contacts for one tick, in order:
/// floor, backboard, rim make, rim bounce, out of bounds.
pub fn resolve_contacts(
    state: &mut BallState,
    target: HoopSide,
    config: &SessionConfig,
) -> TickReport {
    let mut report = TickReport::default();

    resolve_floor(state, config, &mut report);
    resolve_backboard(state, target, config, &mut report);

    let rim_center = target.rim_center();
    let offset = math::horizontal_offset(state.pos, rim_center);
    let horiz_dist = offset.length();
    let height_gap = (state.pos.y - rim_center.y).abs();

    // The make and bounce bands are split at this distance, so a tick can't hit both
    let inner_radius = hoop::RIM_RADIUS - ball::RADIUS;

    if state.vel.y < 0.0
        && height_gap < ball::RADIUS
        && horiz_dist < inner_radius
        && state.phase.register_make()
    {
        state.vel = Vec3A::new(0.0, -hoop::MADE_DROP_SPEED, 0.0);
        report.record(Contact::RimMake);
        report.outcome = Some(ShotOutcome::Made);
    }

    if height_gap < hoop::RIM_BOUNCE_BAND_Y
        && horiz_dist > inner_radius
        && horiz_dist < hoop::RIM_RADIUS + ball::RADIUS
    {
        let normal = offset / horiz_dist;
        state.vel = math::reflect_damped(state.vel, normal, config.restitution);
        report.record(Contact::RimBounce);
    }

    if state.pos.x.abs() > court::HALF_LENGTH + court::OUT_OF_BOUNDS_MARGIN && state.is_flying() {
        state.vel = Vec3A::ZERO;
        report.record(Contact::OutOfBounds);
        report.outcome = report
            .outcome
            .or(state.phase.finish(MissReason::OutOfBounds));
    }

    report
}

fn resolve_floor(state: &mut BallState, config: &SessionConfig, report: &mut TickReport) {
    if state.pos.y > court::FLOOR_Y {
        return;
    }

    state.pos.y = court::FLOOR_Y;
    state.vel.y *= -config.restitution;

    let settled = state.vel.y.abs() < config.settle_speed;
    if settled {
        state.vel = Vec3A::ZERO;
        report.outcome = state.phase.finish(MissReason::Settled);
    }

    report.record(Contact::Floor { settled });
}

fn resolve_backboard(
    state: &mut BallState,
    target: HoopSide,
    config: &SessionConfig,
    report: &mut TickReport,
) {
    // No position correction, the ball may sink into the board for a tick or two
    if (state.pos.x - target.backboard_x()).abs() < ball::RADIUS
        && (state.pos.y - hoop::RIM_HEIGHT).abs() < hoop::BOARD_HALF_HEIGHT
        && state.pos.z.abs() < hoop::BOARD_HALF_WIDTH
    {
        state.vel.x *= -config.restitution;
        report.record(Contact::Backboard);
    }
}
