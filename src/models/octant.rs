use crate::models::Vector3;
use crate::utils::SimulationError;

/// One of the eight subdivisions of an [`Octant`].
///
/// Upper/lower splits on z, north/south on y and east/west on x. A coordinate equal to the
/// parent center belongs to the upper, north or east half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    UpperNorthWest,
    UpperNorthEast,
    UpperSouthWest,
    UpperSouthEast,
    LowerNorthWest,
    LowerNorthEast,
    LowerSouthWest,
    LowerSouthEast,
}

impl Direction {
    /// Fixed order in which children are created and visited.
    pub const ALL: [Direction; 8] = [
        Direction::UpperNorthWest,
        Direction::UpperNorthEast,
        Direction::UpperSouthWest,
        Direction::UpperSouthEast,
        Direction::LowerNorthWest,
        Direction::LowerNorthEast,
        Direction::LowerSouthWest,
        Direction::LowerSouthEast,
    ];

    pub fn from_halves(upper: bool, north: bool, east: bool) -> Self {
        match (upper, north, east) {
            (true, true, false) => Direction::UpperNorthWest,
            (true, true, true) => Direction::UpperNorthEast,
            (true, false, false) => Direction::UpperSouthWest,
            (true, false, true) => Direction::UpperSouthEast,
            (false, true, false) => Direction::LowerNorthWest,
            (false, true, true) => Direction::LowerNorthEast,
            (false, false, false) => Direction::LowerSouthWest,
            (false, false, true) => Direction::LowerSouthEast,
        }
    }

    /// Position of this direction in [`Direction::ALL`], used as the child slot index.
    pub fn index(self) -> usize {
        match self {
            Direction::UpperNorthWest => 0,
            Direction::UpperNorthEast => 1,
            Direction::UpperSouthWest => 2,
            Direction::UpperSouthEast => 3,
            Direction::LowerNorthWest => 4,
            Direction::LowerNorthEast => 5,
            Direction::LowerSouthWest => 6,
            Direction::LowerSouthEast => 7,
        }
    }

    pub fn is_upper(self) -> bool {
        self.index() < 4
    }

    pub fn is_north(self) -> bool {
        matches!(self.index(), 0 | 1 | 4 | 5)
    }

    pub fn is_east(self) -> bool {
        self.index() % 2 == 1
    }
}

/// An axis aligned cube given by its center and half the length of one side.
///
/// The cube covers `[min, max)` on every axis: closed on its lower faces and open on its upper
/// faces, so two neighbouring octants never both contain a point on their shared face.
/// A child's faces are copied from its parent's faces and center rather than recomputed,
/// so a point routed by [`Octant::direction_of`] always lies inside the chosen child.
///
/// # Examples
///
/// ```
/// use rs_nbody::models::{Direction, Octant, Vector3};
///
/// let octant = Octant::new(Vector3::ZERO, 1.0).expect("Failed to create octant");
/// assert!(octant.contains(&Vector3::new(-1.0, 0.5, 0.0)));
/// assert!(!octant.contains(&Vector3::new(1.0, 0.5, 0.0)));
///
/// let child = octant.child_octant(Direction::UpperNorthEast);
/// assert_eq!(child.center, Vector3::new(0.5, 0.5, 0.5));
/// assert_eq!(child.half_length, 0.5);
/// assert_eq!(child.min, octant.center);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Octant {
    pub center: Vector3,
    pub half_length: f64,
    /// Lower corner, inclusive.
    pub min: Vector3,
    /// Upper corner, exclusive.
    pub max: Vector3,
}

impl Octant {
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidOctant`] if `half_length` is not a positive finite number.
    pub fn new(center: Vector3, half_length: f64) -> Result<Self, SimulationError> {
        if !half_length.is_finite() || half_length <= 0.0 || !center.is_finite() {
            return Err(SimulationError::InvalidOctant);
        }
        let half = Vector3::new(half_length, half_length, half_length);
        Ok(Octant {
            center,
            half_length,
            min: center - half,
            max: center + half,
        })
    }

    pub fn side_length(&self) -> f64 {
        2.0 * self.half_length
    }

    pub fn contains(&self, point: &Vector3) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
            && point.z >= self.min.z
            && point.z < self.max.z
    }

    /// The child direction a point falls into, decided against the center only.
    ///
    /// Every point is assigned to exactly one direction, including points on the
    /// dividing planes.
    pub fn direction_of(&self, point: &Vector3) -> Direction {
        Direction::from_halves(
            point.z >= self.center.z,
            point.y >= self.center.y,
            point.x >= self.center.x,
        )
    }

    pub fn child_octant(&self, direction: Direction) -> Octant {
        let split = |min: f64, center: f64, max: f64, upper: bool| {
            if upper {
                (center, max)
            } else {
                (min, center)
            }
        };
        let (min_x, max_x) = split(self.min.x, self.center.x, self.max.x, direction.is_east());
        let (min_y, max_y) = split(self.min.y, self.center.y, self.max.y, direction.is_north());
        let (min_z, max_z) = split(self.min.z, self.center.z, self.max.z, direction.is_upper());

        let min = Vector3::new(min_x, min_y, min_z);
        let max = Vector3::new(max_x, max_y, max_z);
        Octant {
            center: (min + max) * 0.5,
            half_length: self.half_length / 2.0,
            min,
            max,
        }
    }
}
