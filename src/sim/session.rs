use std::{collections::VecDeque, mem};

use glam::Mat3A;
use log::{debug, info, warn};

use crate::{
    consts::{self, controls},
    render_frame::BallFrame,
    sim::{
        BallState, Command, GameEvent, GameState, PhysState, SessionConfig, ShotControls,
        ShotOutcome, ShotParameters, ShotStats, TickAccumulator,
        collision::{self, TickReport},
        integrator, spin,
    },
};

/// One player's shooting session: the ball, the power setting and the running score.
///
/// The host feeds it commands and frame times; everything else happens in fixed ticks.
pub struct GameSession {
    config: SessionConfig,
    accumulator: TickAccumulator,
    tick_count: u64,
    ball: BallState,
    controls: ShotControls,
    stats: ShotStats,
    commands: VecDeque<Command>,
    events: Vec<GameEvent>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_config(SessionConfig::DEFAULT)
    }

    pub fn new_with_config(config: SessionConfig) -> Self {
        assert!(
            config.tick_rate >= SessionConfig::MIN_TICK_RATE,
            "tick_rate must be at least {}",
            SessionConfig::MIN_TICK_RATE
        );
        assert!(
            config.tick_rate <= SessionConfig::MAX_TICK_RATE,
            "tick_rate must not be greater than {}",
            SessionConfig::MAX_TICK_RATE
        );
        // Both are needed for every flight to end
        assert!(config.gravity.y < 0.0, "gravity must point down");
        assert!(
            (0.0..1.0).contains(&config.restitution),
            "restitution must be in [0, 1)"
        );

        Self {
            accumulator: TickAccumulator::new(config.tick_time(), config.max_ticks_per_advance),
            config,
            tick_count: 0,
            ball: BallState::DEFAULT,
            controls: ShotControls::DEFAULT,
            stats: ShotStats::default(),
            commands: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queues a command for the start of the next tick.
    pub fn queue_command(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    /// Runs `ticks` fixed steps.
    pub fn step(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.internal_step();
        }
    }

    /// Feeds `elapsed` seconds of host time in, running however many whole ticks are due.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let ticks = self.accumulator.push(elapsed);
        self.step(ticks);
        ticks
    }

    /// Events produced since the last call, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    #[inline]
    #[must_use]
    pub const fn ball(&self) -> &BallState {
        &self.ball
    }

    /// Replaces the ball state outright, e.g. to replay a saved frame.
    pub fn set_ball_state(&mut self, state: BallState) {
        self.ball = state;
    }

    #[inline]
    #[must_use]
    pub const fn controls(&self) -> ShotControls {
        self.controls
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &ShotStats {
        &self.stats
    }

    #[inline]
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn get_game_state(&self) -> GameState {
        GameState {
            tick_rate: self.config.tick_rate,
            tick_count: self.tick_count,
            ball: self.ball,
            controls: self.controls,
            stats: self.stats.clone(),
        }
    }

    #[must_use]
    pub fn ball_frame(&self) -> BallFrame {
        BallFrame::from_ball(self.tick_count, &self.ball)
    }

    fn internal_step(&mut self) {
        while let Some(command) = self.commands.pop_front() {
            self.apply_command(command);
        }

        if self.ball.is_flying() {
            let dt = self.config.tick_time();

            integrator::integrate(&mut self.ball.phys, self.config.gravity, dt);
            spin::update_spin(&mut self.ball, dt);

            let target = self.ball.active_hoop();
            let report = collision::resolve_contacts(&mut self.ball, target, &self.config);
            self.apply_report(report);
        }

        self.tick_count += 1;
    }

    fn apply_command(&mut self, command: Command) {
        match command {
            Command::MoveBall { dx, dz } => {
                if !(dx.is_finite() && dz.is_finite()) {
                    warn!("Ignoring non-finite move ({dx}, {dz})");
                    return;
                }
                self.move_ball(dx, dz);
            }
            Command::AdjustPower(delta) => {
                if !delta.is_finite() {
                    warn!("Ignoring non-finite power change {delta}");
                    return;
                }
                self.controls.power += delta;
                self.controls.clamp_fix();
            }
            Command::Launch => self.launch(),
            Command::Reset => self.reset(),
        }
    }

    fn move_ball(&mut self, dx: f32, dz: f32) {
        if self.ball.is_flying() {
            return;
        }

        let ball = &mut self.ball;

        // only the moved axis is bounded, on the side it moves toward
        if dx != 0.0 {
            ball.pos.x = nudge_axis(ball.pos.x, dx, controls::MAX_X);
            // roll against the direction of travel
            ball.rot_mat *= Mat3A::from_rotation_z(-dx.signum() * controls::ROLL_ANGLE);
        }
        if dz != 0.0 {
            ball.pos.z = nudge_axis(ball.pos.z, dz, controls::MAX_Z);
            ball.rot_mat *= Mat3A::from_rotation_x(-dz.signum() * controls::ROLL_ANGLE);
        }
    }

    fn launch(&mut self) {
        if self.ball.is_flying() {
            debug!("Ignoring launch, ball already in flight");
            return;
        }

        let params = ShotParameters::plan(self.ball.pos, self.controls.power);
        self.ball.vel = params.launch_velocity(self.ball.pos, &self.config);
        self.ball.target = Some(params.target);
        self.ball.phase.launch();

        self.stats.record_attempt();
        self.events.push(GameEvent::ShotAttempted);

        info!(
            "Shot launched with power {}% toward hoop at x={}",
            self.controls.power_percent(),
            params.target.baseline_x()
        );
    }

    fn reset(&mut self) {
        // the mesh keeps whatever orientation it had
        self.ball = BallState {
            phys: PhysState {
                rot_mat: self.ball.rot_mat,
                ..BallState::DEFAULT.phys
            },
            ..BallState::DEFAULT
        };
        self.controls = ShotControls::DEFAULT;
        self.events.push(GameEvent::BallReset);

        info!("Ball reset to center court");
    }

    fn apply_report(&mut self, report: TickReport) {
        for contact in report.contacts {
            if let Some(surface) = contact.surface() {
                self.stats.record_contact(surface);
            }
            self.events.push(GameEvent::Contact(contact));
        }

        match report.outcome {
            Some(ShotOutcome::Made) => {
                self.stats.record_make(consts::SHOT_POINTS);
                self.events.push(GameEvent::ShotMade {
                    points: consts::SHOT_POINTS,
                });
                info!(
                    "Shot made! {}/{} ({} points)",
                    self.stats.makes, self.stats.attempts, self.stats.score
                );
            }
            Some(ShotOutcome::Missed(reason)) => {
                self.events.push(GameEvent::ShotMissed { reason });
                info!("Shot missed ({reason:?})");
            }
            None => {}
        }
    }
}

/// Moves `value` by `delta`, stopping at `limit` on the side it is moving toward.
fn nudge_axis(value: f32, delta: f32, limit: f32) -> f32 {
    if delta < 0.0 {
        (value + delta).max(-limit)
    } else {
        (value + delta).min(limit)
    }
}
