mod frame_renderer;
mod simulation;

pub use frame_renderer::*;
pub use simulation::*;
