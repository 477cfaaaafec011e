mod ball_state;
pub mod collision;
mod controls;
mod events;
mod game_state;
mod hoop;
pub mod integrator;
mod launch;
mod phys_state;
mod session;
mod session_config;
mod shot_phase;
pub mod spin;
mod stats;

pub use ball_state::*;
pub use collision::{Contact, Surface, TickReport};
pub use controls::*;
pub use events::*;
pub use game_state::*;
pub use hoop::*;
pub use integrator::TickAccumulator;
pub use launch::*;
pub use phys_state::*;
pub use session::*;
pub use session_config::*;
pub use shot_phase::*;
pub use stats::*;
