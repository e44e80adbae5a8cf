use crate::models::Vector3;
use crate::utils::SimulationError;

/// A point mass in the simulation.
///
/// Positions are kept in astronomical units while velocities are SI (m/s).
/// `acceleration` is the per step accumulator written by the force passes. The force law
/// already multiplies by the time step, so integration adds it straight onto the velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector3,
    pub velocity: Vector3,
    pub acceleration: Vector3,
    pub mass: f64,
}

impl Body {
    /// Creates a body with an empty acceleration accumulator.
    ///
    /// # Errors
    ///
    /// Returns an error if `mass` is non-positive or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::models::{Body, Vector3};
    ///
    /// let body = Body::new(Vector3::new(1.0, 0.0, 0.0), Vector3::ZERO, 2.0e30)
    ///     .expect("Failed to create body");
    /// assert_eq!(body.acceleration, Vector3::ZERO);
    ///
    /// assert!(Body::new(Vector3::ZERO, Vector3::ZERO, 0.0).is_err());
    /// ```
    pub fn new(position: Vector3, velocity: Vector3, mass: f64) -> Result<Self, SimulationError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimulationError::InvalidMass);
        }
        Ok(Body {
            position,
            velocity,
            acceleration: Vector3::ZERO,
            mass,
        })
    }

    /// Adds the accumulated acceleration to the velocity, advances the position by
    /// `velocity * time_step` (converted back to AU) and clears the accumulator.
    pub fn integrate(&mut self, time_step: f64, to_meters: f64) {
        self.velocity += self.acceleration;
        self.position += self.velocity * (time_step / to_meters);
        self.acceleration = Vector3::ZERO;
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

/// Position and mass of a subtree collapsed into one pseudo body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub position: Vector3,
    pub mass: f64,
}

impl PointMass {
    pub fn new(position: Vector3, mass: f64) -> Self {
        Self { position, mass }
    }

    /// Folds another point into this one, keeping the mass weighted centroid.
    ///
    /// When the summed mass is exactly zero the centroid falls back to the midpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::models::{PointMass, Vector3};
    ///
    /// let mut aggregate = PointMass::new(Vector3::new(0.0, 0.0, 0.0), 1.0);
    /// aggregate.merge(Vector3::new(3.0, 0.0, 0.0), 2.0);
    /// assert_eq!(aggregate.mass, 3.0);
    /// assert_eq!(aggregate.position.x, 2.0);
    /// ```
    pub fn merge(&mut self, position: Vector3, mass: f64) {
        let total = self.mass + mass;
        if total == 0.0 {
            self.position = (self.position + position) * 0.5;
        } else {
            self.position = (position * mass + self.position * self.mass) / total;
        }
        self.mass = total;
    }
}

impl From<&Body> for PointMass {
    fn from(body: &Body) -> Self {
        PointMass::new(body.position, body.mass)
    }
}
