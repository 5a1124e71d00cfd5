/// A position, velocity or acceleration in 3D, stored as an `(x, y, z)` row.
pub type Vec3 = [f64; 3];

pub const ZERO_VEC3: Vec3 = [0.0, 0.0, 0.0];

#[inline]
pub fn vec3_sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn vec3_add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn vec3_scale(v: Vec3, s: f64) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

#[inline]
pub fn vec3_add_assign(acc: &mut Vec3, v: Vec3) {
    acc[0] += v[0];
    acc[1] += v[1];
    acc[2] += v[2];
}

#[inline]
pub fn vec3_norm_squared(v: Vec3) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

#[inline]
pub fn vec3_norm(v: Vec3) -> f64 {
    vec3_norm_squared(v).sqrt()
}

/// Softened Newtonian acceleration felt at `target` due to a point mass at `source`.
///
/// Computes `g * mass * (source - target) / (|source - target|² + ε²)^(3/2)` where
/// `eps2 = ε²`. When the softened distance vanishes (coincident points and `ε = 0`, or a
/// squared separation that underflows) or the magnitude overflows `f64`, the contribution is
/// exactly zero instead of NaN/∞. Any separation whose square is still representable gives a
/// finite result.
///
/// # Example
/// ```
/// use rs_gravity::utils::softened_acceleration;
///
/// let a = softened_acceleration([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], 1.0, 1.0, 0.0);
/// assert_eq!(a, [1.0, 0.0, 0.0]);
///
/// let coincident = softened_acceleration([2.0, 2.0, 2.0], [2.0, 2.0, 2.0], 1.0, 1.0, 0.0);
/// assert_eq!(coincident, [0.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn softened_acceleration(target: Vec3, source: Vec3, mass: f64, g: f64, eps2: f64) -> Vec3 {
    let d = vec3_sub(source, target);
    let r2 = vec3_norm_squared(d) + eps2;
    if r2 == 0.0 {
        return ZERO_VEC3;
    }
    // Unit direction times magnitude, so a tiny but representable separation stays finite.
    let magnitude = g * mass / r2;
    if !magnitude.is_finite() {
        return ZERO_VEC3;
    }
    vec3_scale(vec3_scale(d, 1.0 / r2.sqrt()), magnitude)
}

/// Arithmetic mean and population standard deviation of `values`. Empty input yields `(0, 0)`.
pub fn mean_and_std_dev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
