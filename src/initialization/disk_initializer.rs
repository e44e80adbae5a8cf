use std::f64::consts::PI;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Body, Vector3};
use crate::utils::{SimulationConfig, SimulationError};

/// Samples a thin disk of equal mass bodies on circular orbits around a star.
///
/// Body 0 is the star: `central_mass` at rest at the origin. The other `num_bodies - 1`
/// bodies each weigh `extra_mass * central_mass / num_bodies` and orbit with the circular
/// speed for the star plus the disk mass inside their radius.
///
/// The same seed always yields the same bodies.
///
/// # Examples
///
/// ```
/// use rs_nbody::initialization::DiskInitializer;
/// use rs_nbody::utils::SimulationConfig;
///
/// let config = SimulationConfig::default().with_num_bodies(100).with_seed(42);
/// let bodies = DiskInitializer::generate(&config).unwrap();
///
/// assert_eq!(bodies.len(), 100);
/// assert_eq!(bodies[0].mass, config.central_mass);
/// assert_eq!(bodies, DiskInitializer::generate(&config).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DiskInitializer {
    config: SimulationConfig,
    rng: StdRng,
}

impl DiskInitializer {
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self {
            config: *config,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Shorthand for `DiskInitializer::new(config)?.bodies()`.
    pub fn generate(config: &SimulationConfig) -> Result<Vec<Body>, SimulationError> {
        Ok(DiskInitializer::new(config)?.bodies())
    }

    /// Mass of every disk body.
    pub fn disk_body_mass(&self) -> f64 {
        self.config.extra_mass * self.config.central_mass / self.config.num_bodies as f64
    }

    /// Circular orbital speed (m/s) at `radius` AU, counting the disk mass inside the radius.
    pub fn orbital_speed(&self, radius: f64) -> f64 {
        let c = &self.config;
        let enclosed = c.central_mass + ((radius - c.inner_bound) / c.system_size) * c.extra_mass * c.central_mass;
        (c.gravitational_constant * enclosed / (radius * c.to_meters)).sqrt()
    }

    /// Consumes the generator and returns `num_bodies` bodies, the star first.
    pub fn bodies(mut self) -> Vec<Body> {
        let count = self.config.num_bodies;
        let mut bodies = Vec::with_capacity(count);
        bodies.push(Body {
            position: Vector3::ZERO,
            velocity: Vector3::ZERO,
            acceleration: Vector3::ZERO,
            mass: self.config.central_mass,
        });

        let mass = self.disk_body_mass();
        for _ in 1..count {
            let body = self.disk_body(mass);
            bodies.push(body);
        }

        let disk_mass = mass * (count - 1) as f64;
        info!("{} AU thick disk of {} bodies", self.config.system_thickness, count - 1);
        info!("Total disk mass: {:e} kg, each body: {:e} kg", disk_mass, mass);
        bodies
    }

    fn disk_body(&mut self, mass: f64) -> Body {
        let c = self.config;
        let angle = self.rng.random_range(0.0..200.0 * PI);
        let radius = c.system_size.sqrt() * self.rng.random_range(c.inner_bound..c.system_size).sqrt();
        let height = self.rng.random_range(0.0..c.system_thickness.max(f64::MIN_POSITIVE)) - c.system_thickness / 2.0;
        let speed = self.orbital_speed(radius);

        let (sin, cos) = angle.sin_cos();
        Body {
            position: Vector3::new(radius * cos, radius * sin, height),
            velocity: Vector3::new(speed * sin, -speed * cos, 0.0),
            acceleration: Vector3::ZERO,
            mass,
        }
    }
}
