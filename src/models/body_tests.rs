use approx::assert_relative_eq;
use crate::models::{Body, PointMass, Vector3};
use crate::utils::SimulationError;

#[test]
fn test_new_valid() {
    let body = Body::new(Vector3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 10.0, 0.0), 5.0)
        .expect("Failed to create body with valid parameters");
    assert_eq!(body.position, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(body.acceleration, Vector3::ZERO);
    assert_eq!(body.mass, 5.0);
}

#[test]
fn test_new_invalid_mass() {
    for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        match Body::new(Vector3::ZERO, Vector3::ZERO, mass) {
            Err(SimulationError::InvalidMass) => (),
            other => panic!("Expected InvalidMass for mass {}, got {:?}", mass, other),
        }
    }
}

#[test]
fn test_integrate_applies_and_resets_accumulator() {
    let to_meters = 1.0e3;
    let time_step = 10.0;
    let mut body = Body::new(Vector3::ZERO, Vector3::new(1.0, 0.0, -2.0), 1.0)
        .expect("Failed to create body");
    body.acceleration = Vector3::new(1.0, 1.0, 0.0);

    body.integrate(time_step, to_meters);

    // v = (2, 1, -2) m/s, displacement = v * dt / to_meters
    assert_eq!(body.velocity, Vector3::new(2.0, 1.0, -2.0));
    assert_relative_eq!(body.position.x, 0.02, epsilon = 1e-15);
    assert_relative_eq!(body.position.y, 0.01, epsilon = 1e-15);
    assert_relative_eq!(body.position.z, -0.02, epsilon = 1e-15);
    assert_eq!(body.acceleration, Vector3::ZERO);
}

#[test]
fn test_is_finite() {
    let mut body = Body::new(Vector3::ZERO, Vector3::ZERO, 1.0).expect("Failed to create body");
    assert!(body.is_finite());
    body.velocity.y = f64::NAN;
    assert!(!body.is_finite());
}

#[test]
fn test_point_mass_merge_weighted() {
    let mut aggregate = PointMass::new(Vector3::new(1.0, 1.0, 1.0), 3.0);
    aggregate.merge(Vector3::new(5.0, -3.0, 1.0), 1.0);
    assert_relative_eq!(aggregate.mass, 4.0);
    assert_relative_eq!(aggregate.position.x, 2.0);
    assert_relative_eq!(aggregate.position.y, 0.0);
    assert_relative_eq!(aggregate.position.z, 1.0);
}

#[test]
fn test_point_mass_merge_zero_mass_uses_midpoint() {
    let mut aggregate = PointMass::new(Vector3::new(0.0, 0.0, 0.0), 0.0);
    aggregate.merge(Vector3::new(2.0, 4.0, -6.0), 0.0);
    assert_eq!(aggregate.mass, 0.0);
    assert_eq!(aggregate.position, Vector3::new(1.0, 2.0, -3.0));
}
