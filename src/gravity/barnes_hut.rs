//! # Barnes-Hut evaluation
//!
//! Walks a frozen [`Octree`] once per evaluation point. At each node:
//!
//! - **Leaf**: exact softened interaction with every particle in the bucket, skipping the
//!   evaluation particle itself.
//! - **Internal, far away**: if the node's side length `s` and the distance `d` from the
//!   evaluation point to the node's center of mass satisfy `s / d < θ`, the whole subtree acts
//!   as one point mass at its center of mass.
//! - **Internal, too close**: descend into the children in octant order.
//!
//! The test is evaluated as `s < θ·d`, so `d = 0` never approximates and `θ = 0` degrades to
//! the exact pairwise sum.
//!
//! On top of the plain `s / d < θ` rule, a node whose cube contains the evaluation point is
//! always opened. For `θ ≤ 1/√3` the two rules pick the same nodes (such a node always has
//! `d ≤ √3·s/2`). Above that they differ: the plain rule may fold a particle's own mass into a
//! monopole, this one never does.

use log::debug;
use crate::gravity::{for_each_particle, NodeId, NodeKind, Octree};
use crate::particles::validate_particles;
use crate::utils::{
    softened_acceleration, vec3_add_assign, vec3_norm, vec3_sub, GravityConfig, GravityError,
    Vec3, ZERO_VEC3,
};

impl Octree {
    /// Approximate acceleration at `position` from every particle in the tree except `exclude`.
    ///
    /// `positions` and `masses` must be the arrays the tree was built from. `eps2` is the
    /// squared softening length.
    #[allow(clippy::too_many_arguments)]
    pub fn acceleration_at(
        &self,
        position: Vec3,
        exclude: Option<usize>,
        positions: &[Vec3],
        masses: &[f64],
        g: f64,
        eps2: f64,
        theta: f64,
    ) -> Vec3 {
        let mut acc = ZERO_VEC3;
        self.accumulate(self.root(), position, exclude, positions, masses, g, eps2, theta, &mut acc);
        acc
    }

    #[allow(clippy::too_many_arguments)]
    fn accumulate(
        &self,
        id: NodeId,
        position: Vec3,
        exclude: Option<usize>,
        positions: &[Vec3],
        masses: &[f64],
        g: f64,
        eps2: f64,
        theta: f64,
        acc: &mut Vec3,
    ) {
        let node = self.node(id);
        if node.mass == 0.0 {
            return;
        }

        match &node.kind {
            NodeKind::Leaf { .. } => {
                for &j in self.leaf_particles(id) {
                    if Some(j) != exclude {
                        vec3_add_assign(acc, softened_acceleration(position, positions[j], masses[j], g, eps2));
                    }
                }
            }
            NodeKind::Internal { children } => {
                let d = vec3_norm(vec3_sub(node.center_of_mass, position));
                if node.cube.side_length() < theta * d && !node.cube.contains(position) {
                    vec3_add_assign(acc, softened_acceleration(position, node.center_of_mass, node.mass, g, eps2));
                } else {
                    for &child in children.iter().flatten() {
                        self.accumulate(child, position, exclude, positions, masses, g, eps2, theta, acc);
                    }
                }
            }
        }
    }
}

/// Approximate accelerations for every particle of the set `tree` was built from.
///
/// Uses the same force law as [`crate::gravity::brute_force`]; with `theta = 0` the result
/// equals it up to summation-order rounding.
///
/// # Errors
///
/// Returns an error for invalid particle arrays, a non-finite `g`, an invalid `epsilon`, a
/// negative or NaN `theta`, or when `positions` does not have the tree's particle count.
///
/// # Examples
///
/// ```
/// use rs_gravity::gravity::{barnes_hut, build_octree};
///
/// let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]];
/// let masses = [1.0, 1.0];
///
/// let tree = build_octree(&positions, &masses, [0.5, 0.0, 0.0], 1.0).unwrap();
/// let accelerations = barnes_hut(&tree, &positions, &masses, 1.0, 0.0, 0.5).unwrap();
/// assert_eq!(accelerations, vec![[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0]]);
/// ```
pub fn barnes_hut(
    tree: &Octree,
    positions: &[Vec3],
    masses: &[f64],
    g: f64,
    epsilon: f64,
    theta: f64,
) -> Result<Vec<Vec3>, GravityError> {
    GravityConfig { g, softening: epsilon, theta }.validate()?;
    validate_particles(positions, masses)?;
    if tree.particle_count() != positions.len() {
        return Err(GravityError::TreeMismatch { tree: tree.particle_count(), particles: positions.len() });
    }
    debug!("Barnes-Hut evaluation of {} particles, theta = {}", positions.len(), theta);

    let eps2 = epsilon * epsilon;
    Ok(for_each_particle(positions.len(), |i| {
        tree.acceleration_at(positions[i], Some(i), positions, masses, g, eps2, theta)
    }))
}
