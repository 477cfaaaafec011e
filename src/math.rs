use glam::Vec3A;

const XZ_MASK: Vec3A = Vec3A::new(1.0, 0.0, 1.0);

/// Offset from `center` to `pos` projected onto the floor plane
#[inline]
#[must_use]
pub fn horizontal_offset(pos: Vec3A, center: Vec3A) -> Vec3A {
    (pos - center) * XZ_MASK
}

/// Reflects `vel` about the unit `normal`, scaling the reflected part by `restitution`.
///
/// With a restitution of 1 this is a mirror reflection.
#[inline]
#[must_use]
pub fn reflect_damped(vel: Vec3A, normal: Vec3A, restitution: f32) -> Vec3A {
    debug_assert!(normal.is_normalized());
    vel - normal * (2.0 * vel.dot(normal) * restitution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_offset_ignores_height() {
        let offset = horizontal_offset(Vec3A::new(3.0, 10.0, -1.0), Vec3A::new(1.0, 3.05, 1.0));
        assert_eq!(offset, Vec3A::new(2.0, 0.0, -2.0));
    }

    #[test]
    fn reflect_damped_keeps_tangential_motion() {
        let vel = Vec3A::new(-2.0, 1.0, 3.0);
        let out = reflect_damped(vel, Vec3A::X, 0.5);

        // normal part: -2 - 2 * (-2) * 0.5 = 0
        assert!(out.x.abs() < 1e-6);
        assert_eq!(out.y, 1.0);
        assert_eq!(out.z, 3.0);

        let mirrored = reflect_damped(vel, Vec3A::X, 1.0);
        assert_eq!(mirrored, Vec3A::new(2.0, 1.0, 3.0));
    }
}
