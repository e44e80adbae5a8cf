use crate::models::Body;
use crate::utils::SimulationError;

/// Receives a read-only snapshot of the bodies every time the driver decides to draw.
///
/// `step` is the number of completed steps, `0` for the initial state.
pub trait FrameRenderer {
    fn render(&mut self, bodies: &[Body], step: usize) -> Result<(), SimulationError>;
}
