use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use rs_nbody::initialization::DiskInitializer;
use rs_nbody::rendering::{FrameOutput, PpmRenderer, RenderConfig};
use rs_nbody::simulation::{FrameRenderer, Simulation};
use rs_nbody::utils::SimulationConfig;

/// Barnes-Hut simulation of a star and its disk, rendered as PPM frames.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Stream frames into this named pipe instead of writing files
    #[arg(short, long)]
    pipe: Option<PathBuf>,

    /// Directory for StepNNNNN.ppm frames
    #[arg(short, long, default_value = "images")]
    output: PathBuf,

    /// Number of bodies, the central star included
    #[arg(short = 'n', long)]
    bodies: Option<usize>,

    /// Number of steps to run
    #[arg(short, long)]
    steps: Option<usize>,

    /// Render every N steps
    #[arg(short, long)]
    render_interval: Option<usize>,

    /// Opening threshold; 0 sums every body exactly
    #[arg(long)]
    theta: Option<f64>,

    /// Enable drag between nearby bodies with this falloff factor (e.g. 25)
    #[arg(long)]
    drag: Option<f64>,

    /// Seed for the disk generator
    #[arg(long)]
    seed: Option<u64>,

    /// Run without writing frames
    #[arg(long)]
    no_render: bool,
}

impl Args {
    fn config(&self) -> SimulationConfig {
        let mut config = SimulationConfig::default().with_drag(self.drag);
        if let Some(bodies) = self.bodies {
            config = config.with_num_bodies(bodies);
        }
        if let Some(steps) = self.steps {
            config = config.with_step_count(steps);
        }
        if let Some(interval) = self.render_interval {
            config = config.with_render_interval(interval);
        }
        if let Some(theta) = self.theta {
            config = config.with_opening_threshold(theta);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    config.validate()?;

    let bodies = DiskInitializer::generate(&config)?;
    let mut sim = Simulation::new(bodies, config)?;

    let mut renderer = if args.no_render {
        None
    } else {
        let output = match &args.pipe {
            Some(pipe) => FrameOutput::pipe(pipe)?,
            None => FrameOutput::directory(&args.output)?,
        };
        Some(PpmRenderer::new(RenderConfig::default(), &config, output)?)
    };

    sim.run(renderer.as_mut().map(|r| r as &mut dyn FrameRenderer))?;
    info!("Done after {} steps", sim.current_step());
    Ok(())
}
