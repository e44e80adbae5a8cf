//! Generates a small disk, advances it a few steps and writes a single frame.
//!
//! ```text
//! cargo run --example disk_snapshot -- snapshot
//! ```
use std::env;

use rs_nbody::initialization::DiskInitializer;
use rs_nbody::rendering::{FrameOutput, PpmRenderer, RenderConfig};
use rs_nbody::simulation::{FrameRenderer, Simulation};
use rs_nbody::utils::{SimulationConfig, SimulationError};

fn main() -> Result<(), SimulationError> {
    env_logger::init();

    let dir = env::args().nth(1).unwrap_or_else(|| "snapshot".to_string());
    let config = SimulationConfig::default()
        .with_num_bodies(4_096)
        .with_step_count(20)
        .with_render_interval(20);

    let bodies = DiskInitializer::generate(&config)?;
    let mut sim = Simulation::new(bodies, config)?;
    sim.run(None)?;

    let render = RenderConfig::default().with_size(512, 512);
    let mut renderer = PpmRenderer::new(render, &config, FrameOutput::directory(&dir)?)?;
    renderer.render(sim.bodies(), sim.current_step())?;

    println!("Wrote {}/{}", dir, renderer.frame_name(sim.current_step()));
    Ok(())
}
