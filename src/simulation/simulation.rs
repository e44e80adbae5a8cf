//! Time stepping for a star and its disk.
//!
//! Each step runs four passes over the body array:
//!
//! 1. the central body interacts exactly with every other body,
//! 2. a fresh [`BarnesHutTree`] is built over the remaining bodies,
//! 3. every remaining body walks the tree to pick up the approximate disk forces,
//! 4. accelerations are integrated into velocities and positions and reset.
//!
//! Passes 1, 3 and 4 run in parallel with Rayon. The tree build is sequential.
//!
//! # Example
//!
//! ```
//! use rs_nbody::models::{Body, Vector3};
//! use rs_nbody::simulation::Simulation;
//! use rs_nbody::utils::SimulationConfig;
//!
//! let config = SimulationConfig::default().with_step_count(3);
//! let bodies = vec![
//!     Body::new(Vector3::ZERO, Vector3::ZERO, 2.0e30).unwrap(),
//!     Body::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, -29_800.0, 0.0), 6.0e24).unwrap(),
//!     Body::new(Vector3::new(-1.5, 0.0, 0.0), Vector3::new(0.0, 24_000.0, 0.0), 6.4e23).unwrap(),
//! ];
//!
//! let mut sim = Simulation::new(bodies, config).expect("Failed to create simulation");
//! sim.run(None).expect("Simulation failed");
//! assert_eq!(sim.current_step(), 3);
//! assert_eq!(sim.central_index(), 0);
//! ```
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::barnes_hut::{mutual_interaction, BarnesHutTree, InteractionStats};
use crate::models::{Body, Vector3};
use crate::simulation::FrameRenderer;
use crate::utils::{SimulationConfig, SimulationError};

pub struct Simulation {
    bodies: Vec<Body>,
    config: SimulationConfig,
    central: usize,
    step: usize,
}

impl Simulation {
    /// Creates a simulation over `bodies`.
    ///
    /// The most massive body (the first one on ties) becomes the central body.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, `bodies` is empty, or a body has a
    /// non-positive mass or non-finite state.
    pub fn new(bodies: Vec<Body>, config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        if bodies.is_empty() {
            return Err(SimulationError::EmptySystem);
        }
        for (i, body) in bodies.iter().enumerate() {
            if !body.mass.is_finite() || body.mass <= 0.0 {
                return Err(SimulationError::InvalidMass);
            }
            if !body.is_finite() {
                return Err(SimulationError::NonFiniteState { step: 0, body: i });
            }
        }

        let central = bodies
            .iter()
            .enumerate()
            .fold(0, |best, (i, body)| if body.mass > bodies[best].mass { i } else { best });

        Ok(Simulation { bodies, config, central, step: 0 })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn into_bodies(self) -> Vec<Body> {
        self.bodies
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn central_index(&self) -> usize {
        self.central
    }

    /// Number of steps completed so far.
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Builds the tree a step would use for the current body positions.
    pub fn build_tree(&self) -> BarnesHutTree {
        BarnesHutTree::build(self.config.root_octant, &self.bodies, Some(self.central))
    }

    /// Renders the initial state, then runs `config.step_count` steps, handing the bodies to
    /// `renderer` after every `config.render_interval` steps.
    pub fn run(&mut self, mut renderer: Option<&mut dyn FrameRenderer>) -> Result<(), SimulationError> {
        info!(
            "Running {} steps over {} bodies (theta = {})",
            self.config.step_count,
            self.bodies.len(),
            self.config.opening_threshold
        );
        if let Some(r) = renderer.as_deref_mut() {
            r.render(&self.bodies, self.step)?;
        }

        for _ in 0..self.config.step_count {
            self.step()?;
            if self.step % self.config.render_interval == 0 {
                if let Some(r) = renderer.as_deref_mut() {
                    r.render(&self.bodies, self.step)?;
                }
            }
        }

        info!("Finished after {} steps", self.step);
        Ok(())
    }

    /// Advances the simulation by one time step.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::NonFiniteState`] if any body ends the step with a NaN or
    /// infinite position or velocity. The bodies are left as they were computed.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let step = self.step + 1;
        debug!("Beginning timestep {}", step);

        debug!("Calculating force from the central body...");
        self.central_pass();

        debug!("Building octree...");
        let tree = self.build_tree();
        if tree.escaped() > 0 {
            warn!("{} bodies left the root octant and are ignored by the tree", tree.escaped());
        }

        debug!("Calculating particle interactions...");
        let stats = self.tree_pass(&tree);
        debug!(
            "Tree of {} nodes: {} opened, {} approximated, {} direct",
            tree.len(),
            stats.opened,
            stats.approximated,
            stats.direct
        );
        drop(tree);

        let central_acceleration = self.bodies[self.central].acceleration;
        debug!(
            "Central body acceleration: ({:e}, {:e}, {:e})",
            central_acceleration.x, central_acceleration.y, central_acceleration.z
        );

        debug!("Updating particle positions...");
        self.integrate();
        self.step = step;

        if let Some(body) = self.bodies.par_iter().position_first(|b| !b.is_finite()) {
            return Err(SimulationError::NonFiniteState { step, body });
        }
        Ok(())
    }

    /// Exact interaction between the central body and every other body.
    ///
    /// Each iteration owns its body; its share of the central body's acceleration is
    /// returned and the shares are summed once the parallel loop is done.
    pub(crate) fn central_pass(&mut self) {
        let central_index = self.central;
        let central = self.bodies[central_index];
        let config = &self.config;

        let pull_on_central = self
            .bodies
            .par_iter_mut()
            .enumerate()
            .filter(|(i, _)| *i != central_index)
            .map(|(_, body)| {
                let mut share = central;
                share.acceleration = Vector3::ZERO;
                mutual_interaction(&mut share, body, config);
                share.acceleration
            })
            .reduce(|| Vector3::ZERO, |a, b| a + b);

        self.bodies[central_index].acceleration += pull_on_central;
    }

    /// Approximate disk forces from the tree. The tree is only read here.
    fn tree_pass(&mut self, tree: &BarnesHutTree) -> InteractionStats {
        let central_index = self.central;
        let config = &self.config;

        self.bodies
            .par_iter_mut()
            .enumerate()
            .filter(|(i, body)| *i != central_index && tree.contains(&body.position))
            .map(|(i, body)| tree.interact_with_stats(i, body, config))
            .reduce(InteractionStats::default, |a, b| a + b)
    }

    fn integrate(&mut self) {
        let time_step = self.config.time_step;
        let to_meters = self.config.to_meters;
        self.bodies
            .par_iter_mut()
            .for_each(|body| body.integrate(time_step, to_meters));
    }
}
