use approx::relative_eq;
use rand::{rngs::StdRng, SeedableRng};
use crate::particles::ParticleSet;
use crate::utils::Vec3;

pub const PARTICLE_COUNTS: [usize; 4] = [2, 10, 100, 1000];
pub const LARGE_PARTICLE_COUNTS: [usize; 2] = [5000, 10000];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Side length used for an `n`-particle cube: `floor(sqrt(n))`.
pub fn cube_length(n: usize) -> f64 {
    (n as f64).sqrt().floor()
}

/// `n` unit masses at rest, uniform in a cube of side [`cube_length`] centered at the origin.
pub fn unit_cuboid(n: usize, seed: u64) -> ParticleSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let side = cube_length(n);
    let mut set = ParticleSet::with_capacity(n);
    set.add_cuboid(n, [0.0; 3], side, side, side, |_| [0.0; 3], |_| 1.0, &mut rng)
        .expect("valid cuboid");
    set
}

/// Component-wise comparison passing when either the absolute or the relative difference is
/// within `tolerance`.
pub fn assert_accelerations_close(actual: &[Vec3], expected: &[Vec3], tolerance: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        for k in 0..3 {
            assert!(
                relative_eq!(a[k], e[k], epsilon = tolerance, max_relative = tolerance),
                "particle {} axis {}: {} vs {}",
                i, k, a[k], e[k]
            );
        }
    }
}
