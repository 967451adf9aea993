use crate::core::line_buffer::LineBuffer;
use crate::core::math::{Vec2, Vec3};
use crate::domain::config::NetworkConfig;
use crate::systems::integrator::IntegratorParams;

use super::perf_stats::PerfStats;
use super::NetworkCore;

pub(super) fn enable_perf_metrics(core: &mut NetworkCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &NetworkCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_pointer(core: &mut NetworkCore, x: f32, y: f32) {
    core.pointer = Some(Vec2::new(x, y));
}

pub(super) fn clear_pointer(core: &mut NetworkCore) {
    core.pointer = None;
}

pub(super) fn set_particle(core: &mut NetworkCore, i: usize, position: Vec3, velocity: Vec3) -> bool {
    if !core.state.can_tick() {
        return false;
    }
    let ok = core.particles.set_particle(i, position, velocity);
    if ok {
        core.positions_changed = true;
    }
    ok
}

pub(super) fn load_config_json(core: &mut NetworkCore, json: &str) -> Result<(), String> {
    if !core.state.can_tick() {
        return Err("network has been disposed".to_string());
    }

    let config = match NetworkConfig::from_json(json) {
        Ok(c) => c,
        Err(e) => {
            console_warn!("plexus: config rejected: {}", e);
            return Err(e);
        }
    };

    let seed = config.seed.unwrap_or(core.rng_state);
    if config.max_connections() != core.lines.capacity() {
        core.lines = LineBuffer::new(config.max_connections());
    }
    core.params = IntegratorParams::from(&config);
    core.config = config;
    core.was_overflowing = false;
    core.reseed(seed);
    Ok(())
}
