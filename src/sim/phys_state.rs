use glam::{Mat3A, Vec3A};

/// Default is not implemented for this struct,
/// the resting pose lives in `BallState::DEFAULT`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysState {
    pub pos: Vec3A,
    pub vel: Vec3A,
    /// Visual orientation of the ball mesh; never read by collision code
    pub rot_mat: Mat3A,
}

impl PhysState {
    /// Mirrors the state across the half-court line, swapping which hoop is nearer.
    #[must_use]
    pub fn get_mirrored_x(mut self) -> Self {
        const MIRROR_SCALE: Vec3A = Vec3A::new(-1.0, 1.0, 1.0);
        const MIRROR: Mat3A = Mat3A::from_cols(Vec3A::NEG_X, Vec3A::Y, Vec3A::Z);

        self.pos *= MIRROR_SCALE;
        self.vel *= MIRROR_SCALE;
        self.rot_mat = MIRROR * self.rot_mat * MIRROR;

        self
    }
}
