pub use glam;

pub mod consts;
pub mod logging;
pub mod math;
pub mod render_frame;
pub mod sim;

pub use sim::*;
