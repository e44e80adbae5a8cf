#[cfg(feature = "initializer")]
mod disk_initializer;

#[cfg(feature = "initializer")]
pub use disk_initializer::*;

#[cfg(test)]
#[cfg(feature = "initializer")]
mod disk_initializer_tests;
