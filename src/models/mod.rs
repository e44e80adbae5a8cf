mod vector_3d;
mod body;
mod octant;

pub use vector_3d::*;
pub use body::*;
pub use octant::*;

#[cfg(test)]
mod body_tests;
#[cfg(test)]
mod octant_tests;
