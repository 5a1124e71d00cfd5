use crate::particles::{validate_particles, ParticleSet};
use crate::utils::GravityError;

#[test]
fn test_add_particle_preserves_order() {
    let mut set = ParticleSet::new();
    assert!(set.is_empty());
    assert_eq!(set.add_particle([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], 1.0), Ok(0));
    assert_eq!(set.add_particle([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], 2.5), Ok(1));

    assert_eq!(set.len(), 2);
    assert_eq!(set.positions()[1], [1.0, 2.0, 3.0]);
    assert_eq!(set.velocities()[0], [1.0, 0.0, 0.0]);
    assert_eq!(set.masses(), &[1.0, 2.5]);
    assert_eq!(set.total_mass(), 3.5);
}

#[test]
fn test_add_particle_rejects_bad_input() {
    let mut set = ParticleSet::new();
    assert_eq!(
        set.add_particle([0.0; 3], [0.0; 3], -1.0),
        Err(GravityError::InvalidMass { index: 0, mass: -1.0 })
    );
    assert!(matches!(
        set.add_particle([0.0; 3], [0.0; 3], f64::NAN),
        Err(GravityError::InvalidMass { index: 0, .. })
    ));
    assert_eq!(
        set.add_particle([f64::INFINITY, 0.0, 0.0], [0.0; 3], 1.0),
        Err(GravityError::NonFinitePosition { index: 0 })
    );
    assert!(set.is_empty());

    // Zero mass is allowed.
    assert_eq!(set.add_particle([0.0; 3], [0.0; 3], 0.0), Ok(0));
}

#[test]
fn test_clear_particles() {
    let mut set = ParticleSet::new();
    set.add_particle([0.0; 3], [0.0; 3], 1.0).unwrap();
    set.clear_particles();
    assert!(set.is_empty());
    assert!(set.velocities().is_empty());
    assert!(set.masses().is_empty());
}

#[test]
fn test_bounding_cube_contains_set() {
    let mut set = ParticleSet::new();
    set.add_particle([-3.0, 0.0, 1.0], [0.0; 3], 1.0).unwrap();
    set.add_particle([5.0, 2.0, -1.0], [0.0; 3], 1.0).unwrap();
    let cube = set.bounding_cube();
    assert!(set.positions().iter().all(|&p| cube.contains(p)));
    assert_eq!(cube.center, [1.0, 1.0, 0.0]);
    assert!(cube.half_width >= 4.0);
}

#[test]
fn test_validate_particles() {
    assert!(validate_particles(&[], &[]).is_ok());
    assert!(validate_particles(&[[0.0; 3]], &[0.0]).is_ok());
    assert_eq!(
        validate_particles(&[[0.0; 3]], &[1.0, 1.0]),
        Err(GravityError::MismatchedLengths { expected: 1, found: 2 })
    );
    assert_eq!(
        validate_particles(&[[0.0; 3], [0.0, 0.0, f64::NAN]], &[1.0, 1.0]),
        Err(GravityError::NonFinitePosition { index: 1 })
    );
}
