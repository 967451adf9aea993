//! Particle state store
//!
//! Positions and velocities live in two flat `[x, y, z, x, y, z, ...]`
//! arrays (SoA by component triple) so the renderer can view `positions`
//! directly as a `Float32Array` with stride 3.

use crate::core::math::Vec3;
use crate::core::random::next_centered;

pub struct ParticleStore {
    positions: Vec<f32>,
    velocities: Vec<f32>,
    count: usize,
}

impl ParticleStore {
    /// Seed `count` particles uniformly in the cube `[-radius, radius]^3`.
    ///
    /// Each velocity component is uniform over a window of width
    /// `initial_speed` centred on zero.
    pub fn initialize(count: usize, radius: f32, initial_speed: f32, rng: &mut u32) -> Self {
        let mut positions = vec![0.0f32; count * 3];
        let mut velocities = vec![0.0f32; count * 3];

        for p in positions.iter_mut() {
            *p = next_centered(rng, radius);
        }
        for v in velocities.iter_mut() {
            *v = next_centered(rng, initial_speed * 0.5);
        }

        Self {
            positions,
            velocities,
            count,
        }
    }

    /// Store with every particle at the origin and at rest
    pub fn zeroed(count: usize) -> Self {
        Self {
            positions: vec![0.0; count * 3],
            velocities: vec![0.0; count * 3],
            count,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::read(&self.positions, i)
    }

    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::read(&self.velocities, i)
    }

    /// Overwrite one particle. Returns false if `i` is out of range.
    pub fn set_particle(&mut self, i: usize, position: Vec3, velocity: Vec3) -> bool {
        if i >= self.count {
            return false;
        }
        position.write(&mut self.positions, i);
        velocity.write(&mut self.velocities, i);
        true
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    /// Both arrays, for the integrator
    pub(crate) fn split_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.positions, &mut self.velocities)
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    /// Free both arrays; the store is empty afterwards
    pub fn dispose(&mut self) {
        self.positions = Vec::new();
        self.velocities = Vec::new();
        self.count = 0;
    }

    pub fn memory_bytes(&self) -> usize {
        (self.positions.capacity() + self.velocities.capacity()) * std::mem::size_of::<f32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_fills_cube_and_speed_window() {
        let mut rng = 99;
        let store = ParticleStore::initialize(80, 2.0, 0.005, &mut rng);
        assert_eq!(store.count(), 80);
        assert_eq!(store.positions().len(), 240);
        assert_eq!(store.velocities().len(), 240);
        assert!(store.positions().iter().all(|p| p.abs() <= 2.0));
        assert!(store.velocities().iter().all(|v| v.abs() <= 0.0025));
        // Not all particles land in the same spot
        assert_ne!(store.position(0), store.position(1));
    }

    #[test]
    fn initialize_zero_count_is_empty() {
        let mut rng = 1;
        let store = ParticleStore::initialize(0, 2.0, 0.005, &mut rng);
        assert_eq!(store.count(), 0);
        assert!(store.positions().is_empty());
    }

    #[test]
    fn set_particle_bounds_checked() {
        let mut store = ParticleStore::zeroed(2);
        assert!(store.set_particle(1, Vec3::new(0.5, 0.0, -0.5), Vec3::new(0.01, 0.0, 0.0)));
        assert!(!store.set_particle(2, Vec3::zero(), Vec3::zero()));
        assert_eq!(store.position(1), Vec3::new(0.5, 0.0, -0.5));
        assert_eq!(store.velocity(1).x, 0.01);
    }

    #[test]
    fn dispose_releases_storage() {
        let mut store = ParticleStore::zeroed(10);
        store.dispose();
        assert_eq!(store.count(), 0);
        assert_eq!(store.memory_bytes(), 0);
    }
}
