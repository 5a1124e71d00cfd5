use std::fmt;
use std::error::Error;

/// Represents errors that can occur while evaluating gravitational accelerations.
///
/// Only caller errors (broken preconditions) are reported here. Numeric degeneracies such as
/// coincident particles with zero softening are absorbed locally and never surface as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GravityError {
    /// Two per-particle arrays (positions and masses, or two acceleration sets) differ in length.
    MismatchedLengths { expected: usize, found: usize },
    /// A particle has a negative or non-finite mass.
    InvalidMass { index: usize, mass: f64 },
    /// A particle has a NaN or infinite coordinate.
    NonFinitePosition { index: usize },
    /// A particle lies outside the root cube the octree was asked to cover.
    ParticleOutsideRoot { index: usize, position: [f64; 3] },
    /// The root half-width is not a finite, strictly positive number.
    InvalidHalfWidth(f64),
    /// The root center has a NaN or infinite coordinate.
    InvalidCenter([f64; 3]),
    /// The softening length is negative or non-finite.
    InvalidSoftening(f64),
    /// The opening angle is negative or NaN.
    InvalidTheta(f64),
    /// The gravitational constant is NaN or infinite.
    InvalidGravitationalConstant(f64),
    /// The octree was built for a different particle count than the one being evaluated.
    TreeMismatch { tree: usize, particles: usize },
    /// A particle sampler was given an unusable shape.
    InvalidSampler(String),
}

impl fmt::Display for GravityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GravityError::MismatchedLengths { expected, found } => {
                write!(f, "Mismatched array lengths: expected {}, found {}", expected, found)
            }
            GravityError::InvalidMass { index, mass } => {
                write!(f, "Invalid mass value {} for particle {}", mass, index)
            }
            GravityError::NonFinitePosition { index } => {
                write!(f, "Non-finite position for particle {}", index)
            }
            GravityError::ParticleOutsideRoot { index, position } => {
                write!(f, "Particle {} at {:?} lies outside the root cube", index, position)
            }
            GravityError::InvalidHalfWidth(hw) => write!(f, "Invalid root half-width: {}", hw),
            GravityError::InvalidCenter(c) => write!(f, "Invalid root center: {:?}", c),
            GravityError::InvalidSoftening(eps) => write!(f, "Invalid softening length: {}", eps),
            GravityError::InvalidTheta(theta) => write!(f, "Invalid opening angle: {}", theta),
            GravityError::InvalidGravitationalConstant(g) => {
                write!(f, "Invalid gravitational constant: {}", g)
            }
            GravityError::TreeMismatch { tree, particles } => {
                write!(f, "Octree holds {} particles but {} were supplied", tree, particles)
            }
            GravityError::InvalidSampler(msg) => write!(f, "Invalid sampler: {}", msg),
        }
    }
}


impl Error for GravityError {}
