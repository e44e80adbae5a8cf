//! Pairwise force law used by both the exact central pass and the tree traversal.
//!
//! Every routine here writes a velocity change (acceleration already multiplied by the time
//! step) into `Body::acceleration`. Only the target's accumulator is written, except in
//! [`mutual_interaction`] which updates both bodies of a pair.
use crate::models::{Body, PointMass, Vector3};
use crate::utils::{SimulationConfig, DRAG_CUTOFF};

/// Separation between two points in metres together with the softened, time step scaled
/// gravity magnitude `F = dt * G * m1 * m2 / ((d^2 + eps^2) * d)`.
struct Pull {
    separation: Vector3,
    distance: f64,
    magnitude: f64,
}

fn pull(
    target_position: Vector3,
    target_mass: f64,
    source_position: Vector3,
    source_mass: f64,
    config: &SimulationConfig,
) -> Option<Pull> {
    let separation = (target_position - source_position) * config.to_meters;
    let distance = separation.magnitude();
    if distance == 0.0 {
        return None;
    }
    let softening_sq = config.softening * config.softening;
    let magnitude = config.time_step * config.gravitational_constant * target_mass * source_mass
        / ((distance * distance + softening_sq) * distance);
    Some(Pull { separation, distance, magnitude })
}

/// Applies the pull of an aggregate (or any point mass) onto `target`.
///
/// Coincident points contribute nothing.
///
/// # Examples
///
/// ```
/// use rs_nbody::barnes_hut::direct_interaction;
/// use rs_nbody::models::{Body, PointMass, Vector3};
/// use rs_nbody::utils::SimulationConfig;
///
/// let config = SimulationConfig::default();
/// let mut planet = Body::new(Vector3::new(1.0, 0.0, 0.0), Vector3::ZERO, 6.0e24).unwrap();
/// let sun = PointMass::new(Vector3::ZERO, 2.0e30);
///
/// direct_interaction(&mut planet, &sun, &config);
/// // pulled towards the origin
/// assert!(planet.acceleration.x < 0.0);
/// assert_eq!(planet.acceleration.y, 0.0);
/// ```
pub fn direct_interaction(target: &mut Body, source: &PointMass, config: &SimulationConfig) {
    if let Some(p) = pull(target.position, target.mass, source.position, source.mass, config) {
        target.acceleration -= p.separation * (p.magnitude / target.mass);
    }
}

/// Interaction between two real bodies: gravity plus the optional drag term.
pub fn pairwise_interaction(target: &mut Body, source: &Body, config: &SimulationConfig) {
    let Some(p) = pull(target.position, target.mass, source.position, source.mass, config) else {
        return;
    };
    target.acceleration -= p.separation * (p.magnitude / target.mass);

    if let Some(factor) = config.drag {
        if let Some(drag) = drag_contribution(target, source, p.distance, factor, config) {
            target.acceleration += drag;
        }
    }
}

/// Velocity damping towards `source`, fading exponentially with separation.
///
/// `distance` is in metres. Returns `None` once the damping falls below [`DRAG_CUTOFF`].
pub fn drag_contribution(
    target: &Body,
    source: &Body,
    distance: f64,
    factor: f64,
    config: &SimulationConfig,
) -> Option<Vector3> {
    let friction = 0.5 / 2.0_f64.powf(factor * (distance + config.softening) / config.to_meters);
    if friction > DRAG_CUTOFF {
        Some((source.velocity - target.velocity) * (friction / 2.0))
    } else {
        None
    }
}

/// Exact symmetric interaction: both bodies receive equal and opposite forces.
pub fn mutual_interaction(a: &mut Body, b: &mut Body, config: &SimulationConfig) {
    if let Some(p) = pull(a.position, a.mass, b.position, b.mass, config) {
        a.acceleration -= p.separation * (p.magnitude / a.mass);
        b.acceleration += p.separation * (p.magnitude / b.mass);
    }
}

/// Exact O(N) gravity contribution on `bodies[target_index]` from every other body.
///
/// This is the reference the tree approximates. Drag is not included.
pub fn direct_sum(bodies: &[Body], target_index: usize, config: &SimulationConfig) -> Option<Vector3> {
    let mut target = *bodies.get(target_index)?;
    target.acceleration = Vector3::ZERO;
    for (i, source) in bodies.iter().enumerate() {
        if i != target_index {
            direct_interaction(&mut target, &PointMass::from(source), config);
        }
    }
    Some(target.acceleration)
}
