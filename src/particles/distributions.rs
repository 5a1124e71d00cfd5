// Random particle-set generators. Each sampler draws `n` positions uniformly inside a shape
// and asks the caller for the velocity and mass of every sampled position.

use std::f64::consts::PI;
use rand::Rng;
use crate::particles::ParticleSet;
use crate::utils::{GravityError, Vec3};

fn check_dimension(name: &str, value: f64) -> Result<(), GravityError> {
    if !value.is_finite() || value < 0.0 {
        return Err(GravityError::InvalidSampler(format!("{} must be finite and non-negative, got {}", name, value)));
    }
    Ok(())
}

impl ParticleSet {
    /// Adds `n` particles uniformly distributed in an axis-aligned box of side lengths
    /// `(lx, ly, lz)` centered at `center`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use rs_gravity::particles::ParticleSet;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut set = ParticleSet::new();
    /// set.add_cuboid(100, [0.0, 0.0, 0.0], 2.0, 2.0, 2.0, |_| [0.0; 3], |_| 1.0, &mut rng).unwrap();
    ///
    /// assert_eq!(set.len(), 100);
    /// assert!(set.positions().iter().all(|p| p.iter().all(|c| c.abs() <= 1.0)));
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn add_cuboid<R, V, M>(
        &mut self,
        n: usize,
        center: Vec3,
        lx: f64,
        ly: f64,
        lz: f64,
        velocity: V,
        mass: M,
        rng: &mut R,
    ) -> Result<(), GravityError>
    where
        R: Rng + ?Sized,
        V: Fn(Vec3) -> Vec3,
        M: Fn(Vec3) -> f64,
    {
        check_dimension("lx", lx)?;
        check_dimension("ly", ly)?;
        check_dimension("lz", lz)?;
        for _ in 0..n {
            let position = [
                center[0] + (rng.random::<f64>() - 0.5) * lx,
                center[1] + (rng.random::<f64>() - 0.5) * ly,
                center[2] + (rng.random::<f64>() - 0.5) * lz,
            ];
            self.add_particle(position, velocity(position), mass(position))?;
        }
        Ok(())
    }

    /// Adds `n` particles uniformly distributed inside a ball of the given radius.
    pub fn add_sphere<R, V, M>(
        &mut self,
        n: usize,
        center: Vec3,
        radius: f64,
        velocity: V,
        mass: M,
        rng: &mut R,
    ) -> Result<(), GravityError>
    where
        R: Rng + ?Sized,
        V: Fn(Vec3) -> Vec3,
        M: Fn(Vec3) -> f64,
    {
        check_dimension("radius", radius)?;
        for _ in 0..n {
            // r ∝ u^(1/3) keeps the volume density uniform
            let r = radius * rng.random::<f64>().cbrt();
            let cos_theta = 2.0 * rng.random::<f64>() - 1.0;
            let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
            let phi = 2.0 * PI * rng.random::<f64>();
            let position = [
                center[0] + r * sin_theta * phi.cos(),
                center[1] + r * sin_theta * phi.sin(),
                center[2] + r * cos_theta,
            ];
            self.add_particle(position, velocity(position), mass(position))?;
        }
        Ok(())
    }

    /// Adds `n` particles uniformly distributed inside a cylinder whose axis is parallel to `z`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_cylinder<R, V, M>(
        &mut self,
        n: usize,
        center: Vec3,
        radius: f64,
        height: f64,
        velocity: V,
        mass: M,
        rng: &mut R,
    ) -> Result<(), GravityError>
    where
        R: Rng + ?Sized,
        V: Fn(Vec3) -> Vec3,
        M: Fn(Vec3) -> f64,
    {
        check_dimension("radius", radius)?;
        check_dimension("height", height)?;
        for _ in 0..n {
            let r = radius * rng.random::<f64>().sqrt();
            let phi = 2.0 * PI * rng.random::<f64>();
            let position = [
                center[0] + r * phi.cos(),
                center[1] + r * phi.sin(),
                center[2] + (rng.random::<f64>() - 0.5) * height,
            ];
            self.add_particle(position, velocity(position), mass(position))?;
        }
        Ok(())
    }
}
