use rand::{rngs::StdRng, SeedableRng};
use crate::particles::ParticleSet;
use crate::utils::{vec3_norm, vec3_sub, GravityError};

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn test_cuboid_stays_in_box() {
    let mut set = ParticleSet::new();
    let center = [5.0, 0.0, -2.0];
    set.add_cuboid(1000, center, 2.0, 4.0, 0.5, |_| [0.0; 3], |_| 1.0, &mut rng()).unwrap();
    assert_eq!(set.len(), 1000);
    for p in set.positions() {
        assert!((p[0] - center[0]).abs() <= 1.0);
        assert!((p[1] - center[1]).abs() <= 2.0);
        assert!((p[2] - center[2]).abs() <= 0.25);
    }
}

#[test]
fn test_sphere_stays_in_ball_and_fills_it() {
    let mut set = ParticleSet::new();
    let center = [0.0, -5.0, 0.0];
    set.add_sphere(2000, center, 1.0, |_| [0.0; 3], |_| 1.0, &mut rng()).unwrap();
    let radii: Vec<f64> = set.positions().iter().map(|&p| vec3_norm(vec3_sub(p, center))).collect();
    assert!(radii.iter().all(|&r| r <= 1.0 + 1e-12));
    // Uniform volume density puts 1/8 of the points inside half the radius.
    let inner = radii.iter().filter(|&&r| r < 0.5).count() as f64 / radii.len() as f64;
    assert!((inner - 0.125).abs() < 0.03, "inner fraction {}", inner);
}

#[test]
fn test_cylinder_stays_in_cylinder() {
    let mut set = ParticleSet::new();
    let center = [5.0, 0.0, 0.0];
    set.add_cylinder(1000, center, 1.0, 0.1, |_| [0.0; 3], |_| 1.0, &mut rng()).unwrap();
    for p in set.positions() {
        let dx = p[0] - center[0];
        let dy = p[1] - center[1];
        assert!((dx * dx + dy * dy).sqrt() <= 1.0 + 1e-12);
        assert!((p[2] - center[2]).abs() <= 0.05);
    }
}

#[test]
fn test_velocity_and_mass_functions_see_position() {
    let mut set = ParticleSet::new();
    set.add_sphere(
        100,
        [0.0; 3],
        2.0,
        |p| [-p[1], p[0], 0.0],
        |p| 4.0 / 3.0 * std::f64::consts::PI * vec3_norm(p).powi(3),
        &mut rng(),
    )
    .unwrap();
    for ((p, v), m) in set.positions().iter().zip(set.velocities()).zip(set.masses()) {
        assert_eq!(*v, [-p[1], p[0], 0.0]);
        assert!(*m >= 0.0);
    }
}

#[test]
fn test_samplers_append() {
    let mut set = ParticleSet::new();
    let mut rng = rng();
    set.add_cuboid(10, [0.0; 3], 1.0, 1.0, 1.0, |_| [0.0; 3], |_| 1.0, &mut rng).unwrap();
    set.add_sphere(20, [3.0, 0.0, 0.0], 1.0, |_| [0.0; 3], |_| 2.0, &mut rng).unwrap();
    set.add_cylinder(30, [-3.0, 0.0, 0.0], 1.0, 1.0, |_| [0.0; 3], |_| 3.0, &mut rng).unwrap();
    assert_eq!(set.len(), 60);
    assert_eq!(set.total_mass(), 10.0 + 40.0 + 90.0);
}

#[test]
fn test_invalid_shapes_and_masses() {
    let mut set = ParticleSet::new();
    assert!(matches!(
        set.add_sphere(5, [0.0; 3], -1.0, |_| [0.0; 3], |_| 1.0, &mut rng()),
        Err(GravityError::InvalidSampler(_))
    ));
    assert!(matches!(
        set.add_cylinder(5, [0.0; 3], 1.0, f64::NAN, |_| [0.0; 3], |_| 1.0, &mut rng()),
        Err(GravityError::InvalidSampler(_))
    ));
    assert!(matches!(
        set.add_cuboid(5, [0.0; 3], 1.0, 1.0, 1.0, |_| [0.0; 3], |_| -1.0, &mut rng()),
        Err(GravityError::InvalidMass { index: 0, .. })
    ));
    assert!(set.is_empty());
}

#[test]
fn test_same_seed_same_particles() {
    let mut a = ParticleSet::new();
    let mut b = ParticleSet::new();
    a.add_cuboid(50, [0.0; 3], 1.0, 1.0, 1.0, |_| [0.0; 3], |_| 1.0, &mut rng()).unwrap();
    b.add_cuboid(50, [0.0; 3], 1.0, 1.0, 1.0, |_| [0.0; 3], |_| 1.0, &mut rng()).unwrap();
    assert_eq!(a, b);
}
