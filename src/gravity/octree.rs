//! # Octree
//!
//! Arena-allocated octree over a particle set. Nodes live in one `Vec` and refer to their
//! children by index; particles are never copied into the tree. Each leaf owns a contiguous
//! range of `order`, a permutation of particle indices grouped by leaf.
//!
//! Construction happens in two independent passes:
//!
//! 1. **Partition** (top-down): a node holding more than one particle is split into up to 8
//!    octants. Empty octants get no child node. Coincident particles, or particles that cannot be
//!    separated before the cube reaches floating-point resolution, stay together in a single
//!    leaf bucket.
//! 2. **Aggregate** (bottom-up): every node gets its total mass and mass-weighted center of
//!    mass. Nodes are created in pre-order, so a reverse sweep over the arena visits children
//!    before their parent.
//!
//! After [`Octree::build`] returns the tree is read-only.

use std::ops::Range;
use log::{debug, trace, warn};
use crate::particles::validate_particles;
use crate::utils::{
    vec3_add, vec3_scale, GravityError, Vec3, MAX_OCTREE_DEPTH, ROOT_CUBE_PADDING, ZERO_VEC3,
};

/// Index of a node in [`Octree::nodes`].
pub type NodeId = usize;

/// An axis-aligned cube given by its center and half the length of one side.
///
/// Containment is closed on every face.
///
/// # Examples
///
/// ```
/// use rs_gravity::gravity::Cube;
///
/// let cube = Cube::new([0.0, 0.0, 0.0], 1.0).unwrap();
/// assert!(cube.contains([1.0, -1.0, 0.5]));
/// assert!(!cube.contains([1.5, 0.0, 0.0]));
///
/// // Octant bits: x -> 1, y -> 2, z -> 4, set when the coordinate is >= the center.
/// assert_eq!(cube.octant_of([0.5, -0.5, 0.5]), 0b101);
/// assert_eq!(cube.child(0b101).center, [0.5, -0.5, 0.5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub center: Vec3,
    pub half_width: f64,
}

impl Cube {
    /// Creates a cube, rejecting a non-finite center or a half-width that is not strictly
    /// positive and finite.
    pub fn new(center: Vec3, half_width: f64) -> Result<Self, GravityError> {
        if !half_width.is_finite() || half_width <= 0.0 {
            return Err(GravityError::InvalidHalfWidth(half_width));
        }
        if center.iter().any(|c| !c.is_finite()) {
            return Err(GravityError::InvalidCenter(center));
        }
        Ok(Self { center, half_width })
    }

    /// The smallest cube around `positions`, padded slightly so that every position is
    /// contained despite rounding. An empty slice, or a single point, gets a unit half-width.
    pub fn enclosing(positions: &[Vec3]) -> Self {
        if positions.is_empty() {
            return Self { center: ZERO_VEC3, half_width: 1.0 };
        }
        let mut min = [f64::INFINITY; 3];
        let mut max = [f64::NEG_INFINITY; 3];
        for p in positions {
            for k in 0..3 {
                min[k] = min[k].min(p[k]);
                max[k] = max[k].max(p[k]);
            }
        }
        let center = [
            0.5 * (min[0] + max[0]),
            0.5 * (min[1] + max[1]),
            0.5 * (min[2] + max[2]),
        ];
        let mut half = 0.0_f64;
        let mut magnitude = 0.0_f64;
        for k in 0..3 {
            half = half.max(max[k] - center[k]).max(center[k] - min[k]);
            magnitude = magnitude.max(center[k].abs());
        }
        let half_width = if half > 0.0 {
            half * (1.0 + ROOT_CUBE_PADDING) + magnitude * f64::EPSILON
        } else {
            1.0
        };
        Self { center, half_width }
    }

    pub fn side_length(&self) -> f64 {
        2.0 * self.half_width
    }

    pub fn contains(&self, p: Vec3) -> bool {
        (0..3).all(|k| (p[k] - self.center[k]).abs() <= self.half_width)
    }

    /// Octant index of `p`: bit 0 for x, bit 1 for y, bit 2 for z, set on the upper side.
    #[inline]
    pub fn octant_of(&self, p: Vec3) -> usize {
        let mut idx = 0;
        if p[0] >= self.center[0] { idx |= 1; }
        if p[1] >= self.center[1] { idx |= 2; }
        if p[2] >= self.center[2] { idx |= 4; }
        idx
    }

    /// The sub-cube for `octant`, using the same bit layout as [`Cube::octant_of`].
    pub fn child(&self, octant: usize) -> Cube {
        let hw = 0.5 * self.half_width;
        let offset = |bit: usize, c: f64| if octant & bit == 0 { c - hw } else { c + hw };
        Cube {
            center: [
                offset(1, self.center[0]),
                offset(2, self.center[1]),
                offset(4, self.center[2]),
            ],
            half_width: hw,
        }
    }

    /// False once halving would no longer move a child center away from this center on some
    /// axis, i.e. the cube has reached floating-point resolution.
    pub fn can_subdivide(&self) -> bool {
        let hw = 0.5 * self.half_width;
        hw > 0.0 && self.center.iter().all(|&c| c + hw != c && c - hw != c)
    }
}

/// What a node holds: a range of `order` (leaf) or up to 8 children (internal).
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Zero, one, or (for a degenerate bucket) several particles.
    Leaf { start: usize, end: usize },
    /// Children indexed by octant. Empty octants are `None`.
    Internal { children: [Option<NodeId>; 8] },
}

#[derive(Clone, Debug, PartialEq)]
pub struct OctreeNode {
    pub cube: Cube,
    /// Sum of the masses in this subtree.
    pub mass: f64,
    /// Mass-weighted mean position of this subtree; the cube center when `mass` is zero.
    pub center_of_mass: Vec3,
    pub kind: NodeKind,
}

impl OctreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Child node ids in octant order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        let children: &[Option<NodeId>] = match &self.kind {
            NodeKind::Internal { children } => children,
            NodeKind::Leaf { .. } => &[],
        };
        children.iter().flatten().copied()
    }
}

/// A Barnes-Hut octree built for one snapshot of a particle set.
///
/// # Examples
///
/// ```
/// use rs_gravity::gravity::Octree;
///
/// let positions = [[-0.5, -0.5, -0.5], [0.5, 0.5, 0.5], [0.5, -0.5, 0.5]];
/// let masses = [1.0, 2.0, 3.0];
///
/// let tree = Octree::build(&positions, &masses, [0.0, 0.0, 0.0], 1.0).unwrap();
/// assert_eq!(tree.particle_count(), 3);
/// assert_eq!(tree.total_mass(), 6.0);
/// ```
#[derive(Clone, Debug)]
pub struct Octree {
    nodes: Vec<OctreeNode>,
    order: Vec<usize>,
    particle_count: usize,
    depth: usize,
    bucket_count: usize,
}

impl Octree {
    /// Builds and aggregates a tree over `positions` inside the root cube
    /// (`root_center`, `root_half_width`).
    ///
    /// # Errors
    ///
    /// Returns an error if the arrays differ in length, a mass is negative or non-finite, a
    /// position is non-finite, the root cube is invalid, or any particle lies outside the root
    /// cube. Out-of-root particles are rejected, never clamped; use [`Cube::enclosing`] to
    /// obtain a root that covers the whole set.
    pub fn build(
        positions: &[Vec3],
        masses: &[f64],
        root_center: Vec3,
        root_half_width: f64,
    ) -> Result<Self, GravityError> {
        validate_particles(positions, masses)?;
        let root = Cube::new(root_center, root_half_width)?;
        let mut tree = Self::partition(positions, root)?;
        tree.aggregate(positions, masses);
        debug!(
            "Built octree: {} particles, {} nodes, depth {}, {} degenerate buckets",
            tree.particle_count,
            tree.nodes.len(),
            tree.depth,
            tree.bucket_count
        );
        Ok(tree)
    }

    /// Top-down pass: fixes the tree shape. Aggregates are left at zero.
    pub(crate) fn partition(positions: &[Vec3], root: Cube) -> Result<Self, GravityError> {
        if let Some(index) = positions.iter().position(|&p| !root.contains(p)) {
            warn!("Particle {} at {:?} lies outside root cube {:?}", index, positions[index], root);
            return Err(GravityError::ParticleOutsideRoot { index, position: positions[index] });
        }

        let n = positions.len();
        let mut tree = Self {
            nodes: Vec::with_capacity(2 * n + 1),
            order: (0..n).collect(),
            particle_count: n,
            depth: 0,
            bucket_count: 0,
        };
        let mut scratch = vec![0usize; n];
        tree.split(positions, root, 0..n, 0, &mut scratch);
        Ok(tree)
    }

    fn split(
        &mut self,
        positions: &[Vec3],
        cube: Cube,
        range: Range<usize>,
        depth: usize,
        scratch: &mut [usize],
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(OctreeNode {
            cube,
            mass: 0.0,
            center_of_mass: ZERO_VEC3,
            kind: NodeKind::Leaf { start: range.start, end: range.end },
        });
        self.depth = self.depth.max(depth);

        if range.len() <= 1 {
            return id;
        }

        let members = &self.order[range.clone()];
        let first = positions[members[0]];
        let coincident = members.iter().all(|&i| positions[i] == first);
        if coincident || depth >= MAX_OCTREE_DEPTH || !cube.can_subdivide() {
            trace!("Bucketing {} particles at depth {} (coincident: {})", range.len(), depth, coincident);
            self.bucket_count += 1;
            return id;
        }

        // Counting sort of this node's particle indices by octant.
        let mut counts = [0usize; 8];
        for &i in members {
            counts[cube.octant_of(positions[i])] += 1;
        }
        let mut offsets = [0usize; 8];
        for o in 1..8 {
            offsets[o] = offsets[o - 1] + counts[o - 1];
        }
        let mut cursor = offsets;
        let buffer = &mut scratch[..range.len()];
        for &i in members {
            let o = cube.octant_of(positions[i]);
            buffer[cursor[o]] = i;
            cursor[o] += 1;
        }
        self.order[range.clone()].copy_from_slice(buffer);

        let mut children = [None; 8];
        for o in 0..8 {
            if counts[o] == 0 {
                continue;
            }
            let start = range.start + offsets[o];
            let child = self.split(positions, cube.child(o), start..start + counts[o], depth + 1, scratch);
            children[o] = Some(child);
        }
        self.nodes[id].kind = NodeKind::Internal { children };
        id
    }

    /// Bottom-up pass: fills in mass and center of mass for every node.
    pub(crate) fn aggregate(&mut self, positions: &[Vec3], masses: &[f64]) {
        for id in (0..self.nodes.len()).rev() {
            let mut mass = 0.0;
            let mut weighted = ZERO_VEC3;
            match &self.nodes[id].kind {
                NodeKind::Leaf { start, end } => {
                    for &i in &self.order[*start..*end] {
                        mass += masses[i];
                        weighted = vec3_add(weighted, vec3_scale(positions[i], masses[i]));
                    }
                }
                NodeKind::Internal { children } => {
                    for &child in children.iter().flatten() {
                        let c = &self.nodes[child];
                        mass += c.mass;
                        weighted = vec3_add(weighted, vec3_scale(c.center_of_mass, c.mass));
                    }
                }
            }
            let node = &mut self.nodes[id];
            node.mass = mass;
            node.center_of_mass = if mass > 0.0 {
                vec3_scale(weighted, 1.0 / mass)
            } else {
                node.cube.center
            };
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &OctreeNode {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[OctreeNode] {
        &self.nodes
    }

    /// Indices of the particles stored directly in `id`; empty for internal nodes.
    pub fn leaf_particles(&self, id: NodeId) -> &[usize] {
        match self.nodes[id].kind {
            NodeKind::Leaf { start, end } => &self.order[start..end],
            NodeKind::Internal { .. } => &[],
        }
    }

    pub fn particle_count(&self) -> usize {
        self.particle_count
    }

    /// Deepest level reached, with the root at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of leaves holding more than one particle.
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn root_cube(&self) -> Cube {
        self.nodes[0].cube
    }

    pub fn total_mass(&self) -> f64 {
        self.nodes[0].mass
    }

    pub fn center_of_mass(&self) -> Vec3 {
        self.nodes[0].center_of_mass
    }
}

/// Builds an octree over the particle set inside the given root cube.
///
/// See [`Octree::build`] for the error conditions.
pub fn build_octree(
    positions: &[Vec3],
    masses: &[f64],
    root_center: Vec3,
    root_half_width: f64,
) -> Result<Octree, GravityError> {
    Octree::build(positions, masses, root_center, root_half_width)
}
