use log::warn;
use crate::gravity::Cube;
use crate::utils::{GravityError, Vec3};

/// An ordered collection of point masses.
///
/// Insertion order defines particle identity: index `i` in `positions`, `velocities` and
/// `masses` always refers to the same particle. Velocities are carried for the caller's
/// time integrator; the evaluators only read positions and masses.
///
/// # Examples
///
/// ```
/// use rs_gravity::particles::ParticleSet;
///
/// let mut set = ParticleSet::new();
/// set.add_particle([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 1.0).unwrap();
/// set.add_particle([1.0, 0.0, 0.0], [0.0, 0.0, 0.0], 2.0).unwrap();
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.total_mass(), 3.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSet {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    masses: Vec<f64>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            masses: Vec::with_capacity(capacity),
        }
    }

    /// Appends one particle and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the mass is negative or non-finite, or if the position is not finite.
    pub fn add_particle(&mut self, position: Vec3, velocity: Vec3, mass: f64) -> Result<usize, GravityError> {
        let index = self.positions.len();
        if !mass.is_finite() || mass < 0.0 {
            return Err(GravityError::InvalidMass { index, mass });
        }
        if position.iter().any(|c| !c.is_finite()) {
            return Err(GravityError::NonFinitePosition { index });
        }
        self.positions.push(position);
        self.velocities.push(velocity);
        self.masses.push(mass);
        Ok(index)
    }

    pub fn clear_particles(&mut self) {
        self.positions.clear();
        self.velocities.clear();
        self.masses.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Mutable access for integrators that advance positions in place.
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn velocities_mut(&mut self) -> &mut [Vec3] {
        &mut self.velocities
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// The smallest padded cube enclosing every particle, suitable as an octree root.
    pub fn bounding_cube(&self) -> Cube {
        Cube::enclosing(&self.positions)
    }
}

/// Checks the preconditions shared by every evaluator: equal array lengths, finite positions,
/// and finite non-negative masses.
pub fn validate_particles(positions: &[Vec3], masses: &[f64]) -> Result<(), GravityError> {
    if positions.len() != masses.len() {
        warn!("Rejecting particle set: {} positions vs {} masses", positions.len(), masses.len());
        return Err(GravityError::MismatchedLengths { expected: positions.len(), found: masses.len() });
    }
    for (index, (position, &mass)) in positions.iter().zip(masses).enumerate() {
        if !mass.is_finite() || mass < 0.0 {
            warn!("Rejecting particle set: particle {} has mass {}", index, mass);
            return Err(GravityError::InvalidMass { index, mass });
        }
        if position.iter().any(|c| !c.is_finite()) {
            warn!("Rejecting particle set: particle {} has a non-finite position", index);
            return Err(GravityError::NonFinitePosition { index });
        }
    }
    Ok(())
}
