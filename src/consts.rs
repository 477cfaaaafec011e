//! Court, hoop and ball dimensions. Units are meters and seconds, `y` is up
//! and the hoops sit at both ends of the `x` axis.

pub const GRAVITY_Y: f32 = -9.8;

/// Velocity retention on every floor, backboard and rim contact
pub const RESTITUTION: f32 = 0.7;

pub const TICK_RATE: u8 = 60;

/// Points awarded for a made shot
pub const SHOT_POINTS: u32 = 2;

pub mod court {
    pub const LENGTH: f32 = 30.0;
    pub const WIDTH: f32 = 15.0;
    pub const HALF_LENGTH: f32 = LENGTH / 2.0;

    /// Lowest height of the ball center, i.e. the ball resting on the floor
    pub const FLOOR_Y: f32 = super::ball::RADIUS + super::ball::REST_CLEARANCE;

    /// How far past either baseline the ball may travel before the shot is dead
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 5.0;
}

pub mod hoop {
    pub const RIM_HEIGHT: f32 = 3.05;
    pub const RIM_RADIUS: f32 = 0.35;

    pub const BOARD_THICKNESS: f32 = 0.05;
    /// Length of the support arm between the pole and the backboard
    pub const ARM_LENGTH: f32 = 1.0;
    /// Gap between the backboard face and the rim center
    pub const RIM_DISTANCE: f32 = 0.35;

    /// Distance from the baseline to the backboard contact plane
    pub const BOARD_OFFSET: f32 = ARM_LENGTH + BOARD_THICKNESS / 2.0;
    /// Distance from the baseline to the rim center
    pub const RIM_OFFSET: f32 = BOARD_OFFSET + RIM_DISTANCE;

    /// Backboard contact box, measured from the rim height and the court center line
    pub const BOARD_HALF_HEIGHT: f32 = 1.0;
    pub const BOARD_HALF_WIDTH: f32 = 1.0;

    /// Vertical band around the rim in which the ball can glance off the ring
    pub const RIM_BOUNCE_BAND_Y: f32 = 0.1;

    /// Speed the ball drops through the net at after a make
    pub const MADE_DROP_SPEED: f32 = 1.0;
}

pub mod ball {
    use glam::Vec3A;

    pub const RADIUS: f32 = 0.24;
    pub const REST_CLEARANCE: f32 = 0.1;
    pub const REST_POS: Vec3A = Vec3A::new(0.0, super::court::FLOOR_Y, 0.0);

    /// Rebound speed below which a floor contact ends the flight
    pub const SETTLE_SPEED: f32 = 1.0;

    /// Minimum squared length of `vel x up` before the spin axis is updated
    pub const SPIN_AXIS_EPSILON_SQ: f32 = 1e-6;
}

pub mod shot {
    /// Added to the aim vector's height before normalizing, lofting every shot
    pub const UP_BIAS: f32 = 30.0;
    /// Launch speed at full power
    pub const MAX_SPEED: f32 = 30.0;

    pub const DEFAULT_POWER: f32 = 0.3;
    pub const POWER_STEP: f32 = 0.03;
}

pub mod controls {
    pub const MOVE_STEP: f32 = 0.5;
    /// Visual roll applied to the ball per nudge, in radians
    pub const ROLL_ANGLE: f32 = 0.2;

    pub const MAX_X: f32 = super::court::WIDTH / 2.0 - 1.0;
    pub const MAX_Z: f32 = super::court::LENGTH / 2.0 - 1.0;
}
