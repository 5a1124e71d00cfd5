mod particle_set;
mod distributions;

pub use particle_set::*;

#[cfg(test)]
mod particle_set_tests;
#[cfg(test)]
mod distributions_tests;
