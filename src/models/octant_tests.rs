use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Direction, Octant, Vector3};
use crate::utils::SimulationConfig;

fn unit_octant() -> Octant {
    Octant::new(Vector3::ZERO, 1.0).expect("Failed to create octant")
}

#[test]
fn test_octant_new_rejects_bad_half_length() {
    assert!(Octant::new(Vector3::ZERO, 0.0).is_err());
    assert!(Octant::new(Vector3::ZERO, -1.0).is_err());
    assert!(Octant::new(Vector3::ZERO, f64::NAN).is_err());
}

#[test]
fn test_octant_contains() {
    let octant = unit_octant();

    assert!(octant.contains(&Vector3::new(0.0, 0.0, 0.0)));
    assert!(octant.contains(&Vector3::new(-1.0, -1.0, -1.0))); // lower corner is inclusive
    assert!(octant.contains(&Vector3::new(0.99, 0.99, 0.99)));

    assert!(!octant.contains(&Vector3::new(1.0, 0.0, 0.0))); // upper faces are exclusive
    assert!(!octant.contains(&Vector3::new(0.0, 1.0, 0.0)));
    assert!(!octant.contains(&Vector3::new(0.0, 0.0, 1.0)));
    assert!(!octant.contains(&Vector3::new(-1.1, 0.0, 0.0)));
}

#[test]
fn test_child_octants() {
    let octant = Octant::new(Vector3::new(2.0, 2.0, 2.0), 2.0).expect("Failed to create octant");

    let unw = octant.child_octant(Direction::UpperNorthWest);
    assert_eq!(unw.center, Vector3::new(1.0, 3.0, 3.0));
    assert_eq!(unw.half_length, 1.0);

    let dse = octant.child_octant(Direction::LowerSouthEast);
    assert_eq!(dse.center, Vector3::new(3.0, 1.0, 1.0));
    assert_eq!(dse.half_length, 1.0);

    for direction in Direction::ALL {
        assert_eq!(octant.child_octant(direction).side_length(), 2.0);
    }
}

#[test]
fn test_direction_index_matches_order() {
    for (i, direction) in Direction::ALL.iter().enumerate() {
        assert_eq!(direction.index(), i);
        let rebuilt = Direction::from_halves(direction.is_upper(), direction.is_north(), direction.is_east());
        assert_eq!(rebuilt, *direction);
    }
}

#[test]
fn test_children_partition_the_parent() {
    let octant = unit_octant();
    let samples = [-1.0, -0.75, -0.5, -0.25, 0.0, 0.25, 0.5, 0.75, 0.875];

    for &x in &samples {
        for &y in &samples {
            for &z in &samples {
                let point = Vector3::new(x, y, z);
                let containing: Vec<Direction> = Direction::ALL
                    .iter()
                    .copied()
                    .filter(|d| octant.child_octant(*d).contains(&point))
                    .collect();
                assert_eq!(containing.len(), 1, "point {:?} is in {:?}", point, containing);
                assert_eq!(containing[0], octant.direction_of(&point));
            }
        }
    }
}

#[test]
fn test_boundary_point_goes_to_upper_north_east() {
    let octant = unit_octant();
    assert_eq!(octant.direction_of(&Vector3::ZERO), Direction::UpperNorthEast);
    assert_eq!(octant.direction_of(&Vector3::new(-0.1, 0.0, -0.1)), Direction::LowerNorthWest);
}

#[test]
fn test_children_partition_an_off_origin_parent_near_its_planes() {
    let root = SimulationConfig::default().root_octant;
    let mut rng = StdRng::seed_from_u64(12);

    for _ in 0..20_000 {
        let mut jitter = |c: f64| c + rng.random_range(-1e-12..1e-12);
        let point = Vector3::new(jitter(root.center.x), jitter(root.center.y), jitter(root.center.z));

        // Walk a few levels down, always re-checking the child that routing picked.
        let mut octant = root;
        for _ in 0..4 {
            assert!(octant.contains(&point));
            let containing: Vec<Direction> = Direction::ALL
                .iter()
                .copied()
                .filter(|d| octant.child_octant(*d).contains(&point))
                .collect();
            assert_eq!(containing, vec![octant.direction_of(&point)], "point {:?}", point);
            octant = octant.child_octant(containing[0]);
        }
    }
}

#[test]
fn test_child_faces_come_from_parent() {
    let root = SimulationConfig::default().root_octant;
    let upper = root.child_octant(Direction::UpperNorthEast);
    let lower = root.child_octant(Direction::LowerSouthWest);

    assert_eq!(upper.min, root.center);
    assert_eq!(upper.max, root.max);
    assert_eq!(lower.min, root.min);
    assert_eq!(lower.max, root.center);
    assert_eq!(upper.half_length, root.half_length / 2.0);
}
