use crate::models::{Octant, Vector3};
use crate::utils::SimulationConfig;

/// Newtonian gravitational constant (m^3 kg^-1 s^-2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-11;
/// Metres in one astronomical unit.
pub const AU_IN_METERS: f64 = 1.496e11;
/// Mass of the sun in kg.
pub const SOLAR_MASS: f64 = 2.0e30;

/// Drag contributions below this are dropped.
pub const DRAG_CUTOFF: f64 = 1e-4;
/// Deepest level the tree subdivides to before grouping bodies into a bucket.
pub const MAX_TREE_DEPTH: usize = 64;

pub const DEFAULT_SYSTEM_SIZE: f64 = 3.5;

const ROOT_CENTER_Z: f64 = 0.1374;
const ROOT_HALF_LENGTH: f64 = 30.0 * DEFAULT_SYSTEM_SIZE;

pub const DEFAULT_SIMULATION_CONFIG: SimulationConfig = SimulationConfig {
    gravitational_constant: GRAVITATIONAL_CONSTANT,
    to_meters: AU_IN_METERS,
    central_mass: SOLAR_MASS,
    extra_mass: 1.5,
    softening: 0.015 * AU_IN_METERS,
    time_step: 3.0 * 32.0 * 1024.0,
    opening_threshold: 0.75,
    num_bodies: 32 * 1024,
    step_count: 16_000,
    render_interval: 1,
    drag: None,
    system_size: DEFAULT_SYSTEM_SIZE,
    system_thickness: 0.08,
    inner_bound: 0.3,
    root_octant: Octant {
        center: Vector3::new(0.0, 0.0, ROOT_CENTER_Z),
        half_length: ROOT_HALF_LENGTH,
        min: Vector3::new(-ROOT_HALF_LENGTH, -ROOT_HALF_LENGTH, ROOT_CENTER_Z - ROOT_HALF_LENGTH),
        max: Vector3::new(ROOT_HALF_LENGTH, ROOT_HALF_LENGTH, ROOT_CENTER_Z + ROOT_HALF_LENGTH),
    },
    seed: 0,
};
