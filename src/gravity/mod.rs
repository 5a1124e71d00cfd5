mod octree;
mod brute_force;
mod barnes_hut;
mod evaluator;
mod accuracy;

pub use octree::*;
pub use brute_force::*;
pub use barnes_hut::*;
pub use evaluator::*;
pub use accuracy::*;

use crate::utils::Vec3;

/// Computes one acceleration per particle. Each index owns its output slot, so the work is
/// spread over the rayon pool when the `parallel` feature is enabled.
#[cfg(feature = "parallel")]
pub(crate) fn for_each_particle<F>(n: usize, f: F) -> Vec<Vec3>
where
    F: Fn(usize) -> Vec3 + Sync + Send,
{
    use rayon::prelude::*;
    (0..n).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn for_each_particle<F>(n: usize, f: F) -> Vec<Vec3>
where
    F: Fn(usize) -> Vec3 + Sync + Send,
{
    (0..n).map(f).collect()
}

#[cfg(test)]
mod test_support;
