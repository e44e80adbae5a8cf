use std::fmt;
use std::error::Error;

/// Represents errors that can occur while setting up or running a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Indicates an invalid mass value (e.g., negative, zero or non-finite mass).
    InvalidMass,
    /// Indicates an octant with a non-positive or non-finite half length.
    InvalidOctant,
    /// Indicates a configuration value outside of its valid range.
    InvalidConfiguration(String),
    /// Indicates that a simulation was requested without any bodies.
    EmptySystem,
    /// A body picked up a NaN or infinite position or velocity during a step.
    NonFiniteState { step: usize, body: usize },
    /// Writing a rendered frame failed.
    RenderError(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::InvalidMass => write!(f, "Invalid mass value"),
            SimulationError::InvalidOctant => write!(f, "Invalid octant half length"),
            SimulationError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            SimulationError::EmptySystem => write!(f, "Simulation has no bodies"),
            SimulationError::NonFiniteState { step, body } => {
                write!(f, "Body {} has a non-finite state after step {}", body, step)
            }
            SimulationError::RenderError(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl Error for SimulationError {}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        SimulationError::RenderError(err.to_string())
    }
}
