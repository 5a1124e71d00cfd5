// src/utils/constants_config.rs
use crate::utils::{
    DEFAULT_GRAVITY_CONFIG,
    errors::GravityError
};

/// Parameters shared by both evaluators.
///
/// * `g` - The gravitational constant. Zero and negative (repulsive) values are allowed.
/// * `softening` - The softening length `ε`, added in quadrature to every pair separation.
/// * `theta` - The Barnes-Hut opening angle. Ignored by the brute-force evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityConfig {
    pub g: f64,
    pub softening: f64,
    pub theta: f64,
}


impl Default for GravityConfig {
    fn default() -> Self {
        DEFAULT_GRAVITY_CONFIG
    }
}

impl GravityConfig {
    /// Creates a configuration, falling back to the defaults for every `None`.
    ///
    /// # Example
    /// ```
    /// use rs_gravity::utils::GravityConfig;
    ///
    /// let config = GravityConfig::new(Some(6.674e-11), None, Some(0.75));
    /// assert_eq!(config.softening, 1.0e-3);
    /// assert_eq!(config.theta, 0.75);
    /// ```
    pub fn new(
        g: Option<f64>,
        softening: Option<f64>,
        theta: Option<f64>,
    ) -> Self {
        let default = DEFAULT_GRAVITY_CONFIG;
        Self {
            g: g.unwrap_or(default.g),
            softening: softening.unwrap_or(default.softening),
            theta: theta.unwrap_or(default.theta),
        }
    }

    /// Returns a copy with a different opening angle.
    pub fn with_theta(self, theta: f64) -> Self {
        Self { theta, ..self }
    }

    /// Checks that `g` is finite, `softening` is finite and non-negative, and `theta` is
    /// non-negative (infinity is accepted and means "always approximate").
    pub fn validate(&self) -> Result<(), GravityError> {
        if !self.g.is_finite() { return Err(GravityError::InvalidGravitationalConstant(self.g)); }
        if !self.softening.is_finite() || self.softening < 0.0 { return Err(GravityError::InvalidSoftening(self.softening)); }
        if self.theta.is_nan() || self.theta < 0.0 { return Err(GravityError::InvalidTheta(self.theta)); }
        Ok(())
    }
}
