use crate::utils::{mean_and_std_dev, vec3_norm, vec3_sub, GravityError, Vec3};

/// Mean and population standard deviation of the per-particle relative error of `approx`
/// against `reference`.
///
/// The error for particle `i` is `|approx_i - reference_i| / |reference_i|`, or the absolute
/// error `|approx_i - reference_i|` when the reference acceleration is exactly zero.
///
/// # Examples
///
/// ```
/// use rs_gravity::gravity::relative_error;
///
/// let reference = [[1.0, 0.0, 0.0], [0.0, 2.0, 0.0]];
/// let approx = [[1.1, 0.0, 0.0], [0.0, 2.2, 0.0]];
///
/// let (mean, std_dev) = relative_error(&approx, &reference).unwrap();
/// assert!((mean - 0.1).abs() < 1e-12);
/// assert!(std_dev < 1e-12);
/// ```
pub fn relative_error(approx: &[Vec3], reference: &[Vec3]) -> Result<(f64, f64), GravityError> {
    if approx.len() != reference.len() {
        return Err(GravityError::MismatchedLengths { expected: reference.len(), found: approx.len() });
    }
    let errors: Vec<f64> = approx
        .iter()
        .zip(reference)
        .map(|(&a, &r)| {
            let diff = vec3_norm(vec3_sub(a, r));
            let scale = vec3_norm(r);
            if scale > 0.0 { diff / scale } else { diff }
        })
        .collect();
    Ok(mean_and_std_dev(&errors))
}
