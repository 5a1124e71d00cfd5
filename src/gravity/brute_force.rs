use log::debug;
use crate::gravity::for_each_particle;
use crate::particles::validate_particles;
use crate::utils::{
    softened_acceleration, vec3_add_assign, vec3_norm_squared, vec3_sub, GravityConfig,
    GravityError, Vec3, ZERO_VEC3,
};

/// Exact softened-gravity accelerations by direct summation over all ordered pairs.
///
/// For every particle `i` this sums `g * m_j * (r_j - r_i) / (|r_j - r_i|² + ε²)^(3/2)` over
/// `j != i`, always in increasing `j`, so repeated calls with the same input are bit-identical
/// whether or not the outer loop runs in parallel. Coincident particles with `ε = 0`, and pairs
/// whose force magnitude overflows `f64`, contribute exactly zero.
///
/// # Errors
///
/// Returns an error if the arrays differ in length, a mass is negative or non-finite, a
/// position is non-finite, `g` is non-finite, or `epsilon` is negative or non-finite.
///
/// # Examples
///
/// ```
/// use rs_gravity::gravity::brute_force;
///
/// let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
/// let masses = [1.0, 1.0];
///
/// let accelerations = brute_force(&positions, &masses, 1.0, 0.0).unwrap();
/// assert_eq!(accelerations, vec![[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]]);
/// ```
pub fn brute_force(positions: &[Vec3], masses: &[f64], g: f64, epsilon: f64) -> Result<Vec<Vec3>, GravityError> {
    GravityConfig { g, softening: epsilon, theta: 0.0 }.validate()?;
    validate_particles(positions, masses)?;
    debug!("Brute-force evaluation of {} particles", positions.len());

    let eps2 = epsilon * epsilon;
    Ok(for_each_particle(positions.len(), |i| {
        let target = positions[i];
        let mut acc = ZERO_VEC3;
        for (j, (&source, &mass)) in positions.iter().zip(masses).enumerate() {
            if j != i {
                vec3_add_assign(&mut acc, softened_acceleration(target, source, mass, g, eps2));
            }
        }
        acc
    }))
}

/// Exact softened-gravity accelerations using a symmetric pair loop.
///
/// Each unordered pair is visited once and applied to both particles (Newton's third law),
/// halving the number of kernel evaluations. Always serial. Used as an independent
/// cross-check of [`brute_force`]; the two agree to rounding error, not bit-for-bit.
pub fn brute_force_pairwise(positions: &[Vec3], masses: &[f64], g: f64, epsilon: f64) -> Result<Vec<Vec3>, GravityError> {
    GravityConfig { g, softening: epsilon, theta: 0.0 }.validate()?;
    validate_particles(positions, masses)?;
    debug!("Pairwise brute-force evaluation of {} particles", positions.len());

    let n = positions.len();
    let eps2 = epsilon * epsilon;
    let mut acc = vec![ZERO_VEC3; n];
    for i in 0..n {
        let pi = positions[i];
        let mi = masses[i];
        for j in (i + 1)..n {
            let d = vec3_sub(positions[j], pi);
            let r2 = vec3_norm_squared(d) + eps2;
            if r2 == 0.0 {
                continue;
            }
            let inv_r = 1.0 / r2.sqrt();
            let fi = g * masses[j] / r2;
            let fj = g * mi / r2;
            for k in 0..3 {
                let unit = d[k] * inv_r;
                if fi.is_finite() {
                    acc[i][k] += unit * fi;
                }
                if fj.is_finite() {
                    acc[j][k] -= unit * fj;
                }
            }
        }
    }
    Ok(acc)
}
