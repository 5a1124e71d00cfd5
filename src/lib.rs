//! Gravitational acceleration fields for sets of point masses.
//!
//! Two interchangeable evaluators share one softened force law:
//!
//! - [`gravity::brute_force`]: exact O(N²) summation, the reference.
//! - [`gravity::barnes_hut`]: monopole approximation over an [`gravity::Octree`] built with
//!   [`gravity::build_octree`], controlled by the opening angle `θ`.
//!
//! Both take positions as `(x, y, z)` rows and masses in the same order, and return one
//! acceleration row per particle.
pub mod utils;
pub mod particles;
pub mod gravity;

pub use gravity::{barnes_hut, brute_force, build_octree, AccelerationEvaluator, BarnesHut, BruteForce, Octree};
pub use particles::ParticleSet;
pub use utils::{GravityConfig, GravityError};

/// ### General helper function
/// - Asserts that two floating point numbers are approximately equal.
///
/// ### Arguments
///
/// * `a` - The first floating point number.
/// * `b` - The second floating point number.
/// * `epsilon` - The maximum difference between `a` and `b` for them to be considered equal.
/// * `optional_message` - An optional message to display if the assertion fails.
///
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!((a - b).abs() < epsilon, "a: {:?},\nb: {:?},\nepsilon: {:?},\n message: {:?}", a, b, epsilon, message),
        None => assert!((a - b).abs() < epsilon, "Expected {} to be approximately equal to {} (epsilon: {})", a, b, epsilon),
    }
}
