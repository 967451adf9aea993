use crate::core::line_buffer::LineBuffer;
use crate::core::random::{entropy_seed, sanitize_seed};
use crate::domain::config::NetworkConfig;
use crate::systems::integrator::IntegratorParams;
use crate::systems::particles::ParticleStore;

use super::perf_stats::PerfStats;
use super::{DriverState, NetworkCore};

pub(super) fn create_network_core(config: NetworkConfig) -> NetworkCore {
    let mut rng_state = config.seed.map(sanitize_seed).unwrap_or_else(entropy_seed);
    let particles = ParticleStore::initialize(
        config.count(),
        config.radius,
        config.initial_speed,
        &mut rng_state,
    );

    console_log!(
        "plexus: {} particles, radius {}, {} line slots",
        config.count,
        config.radius,
        config.max_connections
    );

    NetworkCore {
        params: IntegratorParams::from(&config),
        particles,
        lines: LineBuffer::new(config.max_connections()),
        pointer: None,
        state: DriverState::Idle,
        frame: 0,
        rotation_y: 0.0,
        positions_changed: true,
        lines_changed: false,
        was_overflowing: false,
        rng_state,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    }
}

/// Fresh particles, same buffers for lines; frame counter and rotation keep
/// running so the host sees no discontinuity besides the new layout.
pub(super) fn reseed(core: &mut NetworkCore, seed: u32) {
    if !core.state.can_tick() {
        return;
    }
    core.rng_state = sanitize_seed(seed);
    core.particles = ParticleStore::initialize(
        core.config.count(),
        core.config.radius,
        core.config.initial_speed,
        &mut core.rng_state,
    );
    core.lines.clear();
    core.positions_changed = true;
    core.lines_changed = true;
}
