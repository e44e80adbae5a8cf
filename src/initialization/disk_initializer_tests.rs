use approx::assert_relative_eq;

use crate::initialization::DiskInitializer;
use crate::models::Vector3;
use crate::utils::{SimulationConfig, SimulationError};

fn config(num_bodies: usize, seed: u64) -> SimulationConfig {
    SimulationConfig::default().with_num_bodies(num_bodies).with_seed(seed)
}

#[test]
fn test_generate_count_and_star() {
    let config = config(256, 1);
    let bodies = DiskInitializer::generate(&config).expect("Failed to generate disk");

    assert_eq!(bodies.len(), 256);
    assert_eq!(bodies[0].position, Vector3::ZERO);
    assert_eq!(bodies[0].velocity, Vector3::ZERO);
    assert_eq!(bodies[0].mass, config.central_mass);
    assert!(bodies.iter().all(|b| b.acceleration == Vector3::ZERO));
}

#[test]
fn test_generate_is_deterministic() {
    let first = DiskInitializer::generate(&config(128, 7)).expect("Failed to generate disk");
    let second = DiskInitializer::generate(&config(128, 7)).expect("Failed to generate disk");
    let other = DiskInitializer::generate(&config(128, 8)).expect("Failed to generate disk");

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_disk_mass_is_split_evenly() {
    let config = config(1000, 2);
    let bodies = DiskInitializer::generate(&config).expect("Failed to generate disk");

    let each = config.extra_mass * config.central_mass / 1000.0;
    assert!(bodies[1..].iter().all(|b| b.mass == each));
    let disk_mass: f64 = bodies[1..].iter().map(|b| b.mass).sum();
    assert_relative_eq!(disk_mass, each * 999.0, max_relative = 1e-12);
    assert!(disk_mass < config.extra_mass * config.central_mass);
}

#[test]
fn test_bodies_lie_in_disk() {
    let config = config(500, 3);
    let bodies = DiskInitializer::generate(&config).expect("Failed to generate disk");
    let min_radius = (config.system_size * config.inner_bound).sqrt();

    for body in &bodies[1..] {
        let radius = (body.position.x * body.position.x + body.position.y * body.position.y).sqrt();
        assert!(radius >= min_radius - 1e-12 && radius <= config.system_size + 1e-12, "radius {}", radius);
        assert!(body.position.z.abs() <= config.system_thickness / 2.0);
        assert!(config.root_octant.contains(&body.position));
        assert_eq!(body.velocity.z, 0.0);
    }
}

#[test]
fn test_velocities_are_circular_and_prograde() {
    let config = config(200, 4);
    let initializer = DiskInitializer::new(&config).expect("Failed to create initializer");
    let bodies = initializer.clone().bodies();

    for body in &bodies[1..] {
        let radius = (body.position.x * body.position.x + body.position.y * body.position.y).sqrt();
        // Velocity is perpendicular to the radius vector.
        let radial = body.position.x * body.velocity.x + body.position.y * body.velocity.y;
        assert!(radial.abs() <= 1e-9 * radius * body.speed());
        assert_relative_eq!(body.speed(), initializer.orbital_speed(radius), max_relative = 1e-12);
        // Clockwise seen from +z.
        let angular = body.position.x * body.velocity.y - body.position.y * body.velocity.x;
        assert!(angular < 0.0);
    }
}

#[test]
fn test_orbital_speed_at_inner_bound_is_keplerian() {
    let config = SimulationConfig::default();
    let initializer = DiskInitializer::new(&config).expect("Failed to create initializer");
    let r = config.inner_bound;
    let kepler = (config.gravitational_constant * config.central_mass / (r * config.to_meters)).sqrt();
    assert_relative_eq!(initializer.orbital_speed(r), kepler, max_relative = 1e-12);
}

#[test]
fn test_single_body_is_just_the_star() {
    let bodies = DiskInitializer::generate(&config(1, 0)).expect("Failed to generate disk");
    assert_eq!(bodies.len(), 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let bad = config(0, 0);
    assert!(matches!(
        DiskInitializer::generate(&bad),
        Err(SimulationError::InvalidConfiguration(_))
    ));
}
