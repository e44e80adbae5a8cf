#[cfg(feature = "renderer")]
mod render_config;
#[cfg(feature = "renderer")]
mod ppm_renderer;

#[cfg(feature = "renderer")]
pub use render_config::*;
#[cfg(feature = "renderer")]
pub use ppm_renderer::*;
