use crate::gravity::{barnes_hut, brute_force, Cube, Octree};
use crate::particles::ParticleSet;
use crate::utils::{GravityConfig, GravityError, Vec3};

/// Something a time stepper can ask for accelerations once per step.
///
/// Implementations keep no state between calls: every call sees only the positions and masses
/// it is given and returns one acceleration per particle, in the same order.
pub trait AccelerationEvaluator {
    fn accelerations(&self, positions: &[Vec3], masses: &[f64]) -> Result<Vec<Vec3>, GravityError>;

    fn evaluate(&self, particles: &ParticleSet) -> Result<Vec<Vec3>, GravityError> {
        self.accelerations(particles.positions(), particles.masses())
    }
}

/// Exact O(N²) evaluator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BruteForce {
    pub config: GravityConfig,
}

impl BruteForce {
    pub fn new(config: GravityConfig) -> Self {
        Self { config }
    }
}

impl AccelerationEvaluator for BruteForce {
    fn accelerations(&self, positions: &[Vec3], masses: &[f64]) -> Result<Vec<Vec3>, GravityError> {
        brute_force(positions, masses, self.config.g, self.config.softening)
    }
}

/// Barnes-Hut evaluator that builds a fresh octree on every call.
///
/// With `root` set, particles outside that cube are rejected. Without it, each call uses the
/// cube enclosing the current positions.
///
/// # Examples
///
/// ```
/// use rs_gravity::gravity::{AccelerationEvaluator, BarnesHut};
/// use rs_gravity::utils::GravityConfig;
///
/// let evaluator = BarnesHut::new(GravityConfig::default());
/// let accelerations = evaluator
///     .accelerations(&[[0.0, 0.0, 0.0], [3.0, 4.0, 0.0]], &[2.0, 0.0])
///     .unwrap();
/// assert_eq!(accelerations[0], [0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BarnesHut {
    pub config: GravityConfig,
    pub root: Option<Cube>,
}

impl BarnesHut {
    pub fn new(config: GravityConfig) -> Self {
        Self { config, root: None }
    }

    pub fn with_root(config: GravityConfig, root: Cube) -> Self {
        Self { config, root: Some(root) }
    }
}

impl AccelerationEvaluator for BarnesHut {
    fn accelerations(&self, positions: &[Vec3], masses: &[f64]) -> Result<Vec<Vec3>, GravityError> {
        let root = self.root.unwrap_or_else(|| Cube::enclosing(positions));
        let tree = Octree::build(positions, masses, root.center, root.half_width)?;
        barnes_hut(&tree, positions, masses, self.config.g, self.config.softening, self.config.theta)
    }
}
