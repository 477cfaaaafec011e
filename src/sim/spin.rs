//! Cosmetic ball spin. Nothing here feeds back into the flight.

use glam::{Mat3A, Vec3A};

use crate::{consts::ball, sim::BallState};

/// Derives the spin from the current velocity and rolls `rot_mat` forward by one tick.
///
/// The axis is `vel x up`, so the ball appears to roll along its direction of travel.
/// A (nearly) vertical velocity keeps the previous axis and speed.
pub fn update_spin(state: &mut BallState, dt: f32) {
    let axis = state.vel.cross(Vec3A::Y);
    if axis.length_squared() > ball::SPIN_AXIS_EPSILON_SQ {
        state.spin_axis = axis.normalize();
        state.spin_speed = state.vel.length() / ball::RADIUS;
    }

    let angle = state.spin_speed * dt;
    if angle != 0.0 {
        state.rot_mat = Mat3A::from_axis_angle(state.spin_axis.into(), angle) * state.rot_mat;
    }
}
