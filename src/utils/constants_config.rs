use crate::models::Octant;
use crate::utils::{
    DEFAULT_SIMULATION_CONFIG,
    errors::SimulationError
};

/// Every constant the simulation reads, passed explicitly instead of living in globals.
///
/// Lengths that describe the disk (`system_size`, `system_thickness`, `inner_bound`) and the
/// root octant are in astronomical units. `softening` is in metres and `time_step` in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub gravitational_constant: f64,
    /// Length unit to metres conversion factor.
    pub to_meters: f64,
    /// Mass of the central star (kg).
    pub central_mass: f64,
    /// Total disk mass as a multiple of `central_mass`.
    pub extra_mass: f64,
    pub softening: f64,
    pub time_step: f64,
    /// Opening angle: a node is treated as a point mass when `side / dist` is below this.
    pub opening_threshold: f64,
    pub num_bodies: usize,
    pub step_count: usize,
    pub render_interval: usize,
    /// Drag factor for pairwise interactions, `None` disables drag.
    pub drag: Option<f64>,
    pub system_size: f64,
    pub system_thickness: f64,
    pub inner_bound: f64,
    pub root_octant: Octant,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONFIG
    }
}

impl SimulationConfig {
    pub fn with_opening_threshold(mut self, opening_threshold: f64) -> Self {
        self.opening_threshold = opening_threshold;
        self
    }

    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_drag(mut self, drag: Option<f64>) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_num_bodies(mut self, num_bodies: usize) -> Self {
        self.num_bodies = num_bodies;
        self
    }

    pub fn with_step_count(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    pub fn with_render_interval(mut self, render_interval: usize) -> Self {
        self.render_interval = render_interval;
        self
    }

    pub fn with_root_octant(mut self, root_octant: Octant) -> Self {
        self.root_octant = root_octant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks every field is in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::utils::SimulationConfig;
    ///
    /// assert!(SimulationConfig::default().validate().is_ok());
    /// assert!(SimulationConfig::default().with_render_interval(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("gravitational_constant", self.gravitational_constant),
            ("to_meters", self.to_meters),
            ("central_mass", self.central_mass),
            ("time_step", self.time_step),
            ("system_size", self.system_size),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        let non_negative = [
            ("extra_mass", self.extra_mass),
            ("softening", self.softening),
            ("opening_threshold", self.opening_threshold),
            ("system_thickness", self.system_thickness),
            ("inner_bound", self.inner_bound),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{} must be non-negative, got {}", name, value)));
            }
        }

        if self.inner_bound >= self.system_size {
            return Err(invalid(format!(
                "inner_bound ({}) must be smaller than system_size ({})",
                self.inner_bound, self.system_size
            )));
        }
        if self.num_bodies == 0 {
            return Err(invalid("num_bodies must be at least 1".to_string()));
        }
        if self.render_interval == 0 {
            return Err(invalid("render_interval must be at least 1".to_string()));
        }
        if let Some(factor) = self.drag {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(invalid(format!("drag factor must be positive, got {}", factor)));
            }
        }
        let root = self.root_octant;
        Octant::new(root.center, root.half_length)?;
        let ordered = root.min.x < root.max.x && root.min.y < root.max.y && root.min.z < root.max.z;
        if !ordered || !root.min.is_finite() || !root.max.is_finite() {
            return Err(SimulationError::InvalidOctant);
        }

        Ok(())
    }
}

fn invalid(msg: String) -> SimulationError {
    SimulationError::InvalidConfiguration(msg)
}
