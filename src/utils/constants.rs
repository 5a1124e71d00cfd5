use crate::utils;

pub const DEFAULT_GRAVITY_CONFIG: utils::GravityConfig = utils::GravityConfig {
    g: 1.0,
    softening: 1.0e-3,
    theta: 0.5,
};

/// Octree depth past which coincident (or numerically indistinguishable) particles are bucketed
/// into one leaf instead of subdividing further.
pub const MAX_OCTREE_DEPTH: usize = 96;

/// Relative padding applied by [`crate::gravity::Cube::enclosing`] so boundary particles sit
/// strictly inside the root.
pub const ROOT_CUBE_PADDING: f64 = 1.0e-9;
