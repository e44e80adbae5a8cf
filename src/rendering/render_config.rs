use crate::utils::{SimulationConfig, SimulationError};

/// Image and splat settings for [`PpmRenderer`](crate::rendering::PpmRenderer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    /// Visible half width of the image, in multiples of `system_size`.
    pub render_scale: f64,
    /// Side of the square splat drawn for each body, in pixels.
    pub dot_size: usize,
    pub particle_brightness: f64,
    pub particle_sharpness: f64,
    /// Speed range (m/s) above the minimum that the colour ramp spans.
    pub max_velocity_color: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 1024,
            height: 1024,
            render_scale: 2.5,
            dot_size: 8,
            particle_brightness: 0.35,
            particle_sharpness: 1.0,
            max_velocity_color: 40_000.0,
        }
    }
}

impl RenderConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_dot_size(mut self, dot_size: usize) -> Self {
        self.dot_size = dot_size;
        self
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.width <= 2 * self.dot_size || self.height <= 2 * self.dot_size {
            return Err(SimulationError::InvalidConfiguration(format!(
                "image {}x{} is too small for dot size {}",
                self.width, self.height, self.dot_size
            )));
        }
        let positive = [
            ("render_scale", self.render_scale),
            ("particle_brightness", self.particle_brightness),
            ("max_velocity_color", self.max_velocity_color),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Maps a coordinate in AU onto `[0, size)`, the origin landing in the middle.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_nbody::rendering::RenderConfig;
    ///
    /// let config = RenderConfig::default();
    /// assert_eq!(config.to_pixel_space(0.0, 1024, 3.5), 512.0);
    /// assert_eq!(config.to_pixel_space(3.5 * 2.5, 1024, 3.5), 1024.0);
    /// ```
    pub fn to_pixel_space(&self, p: f64, size: usize, system_size: f64) -> f64 {
        (size as f64 / 2.0) * (1.0 + p / (system_size * self.render_scale))
    }

    /// Slowest speed that still gets drawn.
    pub fn min_velocity(config: &SimulationConfig) -> f64 {
        let total_mass = config.central_mass + config.extra_mass * config.central_mass;
        (0.8 * config.gravitational_constant * total_mass / (config.system_size * config.to_meters)).sqrt()
    }

    /// RGB colour for a body moving at `speed`, or `None` below `min_velocity`.
    ///
    /// Slow bodies are blue, the middle of the range green and fast ones red.
    pub fn speed_color(&self, speed: f64, min_velocity: f64) -> Option<[f64; 3]> {
        if speed < min_velocity {
            return None;
        }
        let portion = ((speed - min_velocity) / self.max_velocity_color).sqrt();
        Some([
            clamp(4.0 * (portion - 0.333)),
            clamp((4.0 * portion).min(4.0 * (1.0 - portion))),
            clamp(4.0 * (0.5 - portion)),
        ])
    }
}

/// Clamps `x` into `[0, 1]`.
pub fn clamp(x: f64) -> f64 {
    x.min(1.0).max(0.0)
}
