use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::models::Body;
use crate::rendering::{clamp, RenderConfig};
use crate::simulation::FrameRenderer;
use crate::utils::{SimulationConfig, SimulationError};

/// Where finished frames go.
#[derive(Debug)]
pub enum FrameOutput {
    /// One `StepNNNNN.ppm` file per frame inside the directory.
    Directory(PathBuf),
    /// Every frame streamed one after the other, e.g. into a named pipe read by an encoder.
    Pipe(File),
}

impl FrameOutput {
    /// Uses `path` as the frame directory, creating it if needed.
    pub fn directory(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        fs::create_dir_all(path.as_ref())?;
        Ok(FrameOutput::Directory(path.as_ref().to_path_buf()))
    }

    /// Opens an existing file or FIFO for writing.
    pub fn pipe(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let file = OpenOptions::new().write(true).open(path.as_ref()).map_err(|e| {
            SimulationError::RenderError(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Ok(FrameOutput::Pipe(file))
    }
}

/// Header of a binary RGB PPM image.
pub fn ppm_header(width: usize, height: usize) -> String {
    format!("P6\n{} {}\n255\n", width, height)
}

/// Draws the x/y projection of the bodies as soft dots coloured by speed and writes it as
/// a binary PPM.
#[derive(Debug)]
pub struct PpmRenderer {
    config: RenderConfig,
    system_size: f64,
    render_interval: usize,
    min_velocity: f64,
    output: FrameOutput,
    hd_image: Vec<f64>,
    image: Vec<u8>,
    frames_written: usize,
}

impl PpmRenderer {
    /// # Errors
    ///
    /// Returns an error if either configuration does not validate.
    pub fn new(
        config: RenderConfig,
        simulation: &SimulationConfig,
        output: FrameOutput,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        simulation.validate()?;
        let pixels = config.width * config.height * 3;
        Ok(PpmRenderer {
            config,
            system_size: simulation.system_size,
            render_interval: simulation.render_interval,
            min_velocity: RenderConfig::min_velocity(simulation),
            output,
            hd_image: vec![0.0; pixels],
            image: vec![0; pixels],
            frames_written: 0,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn min_velocity(&self) -> f64 {
        self.min_velocity
    }

    /// RGB bytes of the last drawn frame, row by row.
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// File name used for the frame of `step` when writing to a directory.
    pub fn frame_name(&self, step: usize) -> String {
        format!("Step{:05}.ppm", step / self.render_interval)
    }

    /// Clears the buffers and draws every visible body into the byte image.
    pub fn draw(&mut self, bodies: &[Body]) {
        self.hd_image.iter_mut().for_each(|v| *v = 0.0);

        let (width, height) = (self.config.width, self.config.height);
        let dot = self.config.dot_size as f64;
        for body in bodies {
            let x = self.config.to_pixel_space(body.position.x, width, self.system_size);
            let y = self.config.to_pixel_space(body.position.y, height, self.system_size);
            if x.trunc() > dot && x.trunc() < width as f64 - dot && y.trunc() > dot && y.trunc() < height as f64 - dot {
                if let Some(color) = self.config.speed_color(body.speed(), self.min_velocity) {
                    self.splat(x, y, color);
                }
            }
        }

        for (byte, value) in self.image.iter_mut().zip(&self.hd_image) {
            *byte = (255.0 * clamp(*value)) as u8;
        }
    }

    /// Adds a `dot_size` square of light centred on pixel coordinates `(x, y)`.
    fn splat(&mut self, x: f64, y: f64, color: [f64; 3]) {
        let half = (self.config.dot_size / 2) as i64;
        let sharpness = self.config.particle_sharpness;
        let (x_floor, y_floor) = (x.floor(), y.floor());
        let width = self.config.width as i64;
        let height = self.config.height as i64;

        for i in -half..half {
            for j in -half..half {
                let dx = sharpness * (x_floor + i as f64 - x);
                let dy = sharpness * (y_floor + j as f64 - y);
                let factor =
                    self.config.particle_brightness / (((dx * dx).exp() + (dy * dy).exp()).powf(0.75) + 1.0);

                let px = x_floor as i64 + i;
                let py = y_floor as i64 + j;
                if px < 0 || py < 0 || px >= width || py >= height {
                    continue;
                }
                let pixel = 3 * (px + width * py) as usize;
                for (channel, c) in color.iter().enumerate() {
                    self.hd_image[pixel + channel] += c * factor;
                }
            }
        }
    }

    fn write_frame(&mut self, step: usize) -> Result<(), SimulationError> {
        let header = ppm_header(self.config.width, self.config.height);
        let name = self.frame_name(step);
        match &mut self.output {
            FrameOutput::Pipe(file) => {
                file.write_all(header.as_bytes())?;
                file.write_all(&self.image)?;
                file.flush()?;
            }
            FrameOutput::Directory(dir) => {
                let path = dir.join(name);
                let mut file = File::create(&path)?;
                file.write_all(header.as_bytes())?;
                file.write_all(&self.image)?;
                debug!("Wrote {}", path.display());
            }
        }
        self.frames_written += 1;
        Ok(())
    }
}

impl FrameRenderer for PpmRenderer {
    fn render(&mut self, bodies: &[Body], step: usize) -> Result<(), SimulationError> {
        info!("Writing frame {}", step / self.render_interval);
        debug!("Rendering {} bodies...", bodies.len());
        self.draw(bodies);
        self.write_frame(step)
    }
}
