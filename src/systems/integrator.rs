//! One-frame integration: drift, wall reflection, pointer repulsion.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::Vec2;
use crate::domain::config::NetworkConfig;
use crate::systems::particles::ParticleStore;

/// Below this many particles the rayon split costs more than it saves
#[cfg(feature = "parallel")]
const PARALLEL_MIN_PARTICLES: usize = 4096;

#[derive(Clone, Copy, Debug)]
pub struct IntegratorParams {
    pub radius: f32,
    pub pointer_scale: f32,
    pub pointer_radius: f32,
    pub pointer_gain: f32,
}

impl From<&NetworkConfig> for IntegratorParams {
    fn from(config: &NetworkConfig) -> Self {
        Self {
            radius: config.radius,
            pointer_scale: config.pointer_scale,
            pointer_radius: config.pointer_radius,
            pointer_gain: config.pointer_gain,
        }
    }
}

/// Advance every particle by exactly one frame.
///
/// `pointer` is in normalized device coordinates; `None` (or a non-finite
/// value) applies no repulsion.
pub fn step(store: &mut ParticleStore, pointer: Option<Vec2>, params: &IntegratorParams) {
    let target = pointer
        .filter(|p| p.is_finite())
        .map(|p| p * params.pointer_scale);

    let (positions, velocities) = store.split_mut();

    #[cfg(feature = "parallel")]
    {
        if positions.len() / 3 >= PARALLEL_MIN_PARTICLES {
            positions
                .par_chunks_exact_mut(3)
                .zip(velocities.par_chunks_exact_mut(3))
                .for_each(|(p, v)| integrate_particle(p, v, target, params));
            return;
        }
    }

    for (p, v) in positions.chunks_exact_mut(3).zip(velocities.chunks_exact_mut(3)) {
        integrate_particle(p, v, target, params);
    }
}

/// `p` and `v` are one particle's xyz triples
#[inline(always)]
fn integrate_particle(p: &mut [f32], v: &mut [f32], target: Option<Vec2>, params: &IntegratorParams) {
    let radius = params.radius;

    for axis in 0..3 {
        let next = *fast!(p, [axis]) + *fast!(v, [axis]);
        fast!(p, [axis] = next);
        // Reflect on the post-move position; the overshoot is kept and
        // undone by the reversed velocity on the next frame.
        if next.abs() > radius {
            let flipped = -*fast!(v, [axis]);
            fast!(v, [axis] = flipped);
        }
    }

    if let Some(t) = target {
        let dx = t.x - *fast!(p, [0]);
        let dy = t.y - *fast!(p, [1]);
        if Vec2::new(dx, dy).length() < params.pointer_radius {
            let gain = params.pointer_gain;
            let x = *fast!(p, [0]) - dx * gain;
            let y = *fast!(p, [1]) - dy * gain;
            fast!(p, [0] = x);
            fast!(p, [1] = y);
        }
    }
}
