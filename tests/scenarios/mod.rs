use hoopsim::{glam::Vec3A, *};

/// Upper bound for any flight at full power: several bounces, each under two seconds
pub const MAX_FLIGHT_TICKS: u32 = 5000;

pub const EPS: f32 = 1e-4;

pub fn new_session() -> GameSession {
    hoopsim::logging::init_for_test();
    GameSession::new()
}

pub fn idle_ball_at(pos: Vec3A) -> BallState {
    BallState {
        phys: PhysState {
            pos,
            ..BallState::DEFAULT.phys
        },
        ..BallState::DEFAULT
    }
}

pub fn flying_ball(pos: Vec3A, vel: Vec3A, target: HoopSide) -> BallState {
    BallState {
        phys: PhysState {
            pos,
            vel,
            ..BallState::DEFAULT.phys
        },
        phase: ShotPhase::Flying,
        target: Some(target),
        ..BallState::DEFAULT
    }
}

/// Steps until the ball is no longer flying and returns how many ticks that took.
pub fn run_flight(session: &mut GameSession) -> u32 {
    for tick in 1..=MAX_FLIGHT_TICKS {
        session.step(1);
        if !session.ball().is_flying() {
            return tick;
        }
    }

    panic!(
        "flight did not end within {MAX_FLIGHT_TICKS} ticks, ball: {:?}",
        session.ball()
    );
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct OutcomeCount {
    pub made: usize,
    pub missed: usize,
}

pub fn count_outcomes(events: &[GameEvent]) -> OutcomeCount {
    let mut count = OutcomeCount::default();
    for event in events {
        match event {
            GameEvent::ShotMade { .. } => count.made += 1,
            GameEvent::ShotMissed { .. } => count.missed += 1,
            _ => {}
        }
    }

    count
}

pub fn assert_near(a: Vec3A, b: Vec3A) {
    assert!((a - b).length() < EPS, "{a} != {b}");
}
