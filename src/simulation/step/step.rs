use std::f32::consts::TAU;

use crate::systems::{integrator, proximity};

use super::{DriverState, NetworkCore, PerfTimer};

pub(super) fn tick(core: &mut NetworkCore) -> bool {
    if !core.state.can_tick() {
        return false;
    }

    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    core.state = DriverState::Stepping;

    // Pointer is sampled once per tick; the host may update it any time
    // between ticks.
    let pointer = core.pointer;

    if perf_on {
        let t0 = PerfTimer::start();
        integrator::step(&mut core.particles, pointer, &core.params);
        core.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrator::step(&mut core.particles, pointer, &core.params);
    }

    let connections = if perf_on {
        let t0 = PerfTimer::start();
        let n = proximity::rebuild_connections(
            core.particles.positions(),
            core.config.connection_distance,
            &mut core.lines,
        );
        core.perf_stats.connections_ms = t0.elapsed_ms();
        n
    } else {
        proximity::rebuild_connections(
            core.particles.positions(),
            core.config.connection_distance,
            &mut core.lines,
        )
    };

    // Warn on the transition only; a saturated buffer is steady state for
    // dense configs.
    let overflowing = core.lines.overflow_count() > 0;
    if overflowing && !core.was_overflowing {
        console_warn!(
            "plexus: line buffer full ({} slots), dropped {} pairs",
            core.lines.capacity(),
            core.lines.overflow_count()
        );
    }
    core.was_overflowing = overflowing;

    core.rotation_y = (core.rotation_y + core.config.rotation_speed).rem_euclid(TAU);
    core.positions_changed = true;
    core.lines_changed = true;
    core.state = DriverState::Published;
    core.frame += 1;

    if perf_on {
        core.perf_stats.particle_count = core.particles.count() as u32;
        core.perf_stats.connections = connections as u32;
        core.perf_stats.overflowed_pairs = core.lines.overflow_count() as u32;
        core.perf_stats.line_buffer_usage = if core.lines.capacity() > 0 {
            connections as f32 / core.lines.capacity() as f32
        } else {
            0.0
        };
        core.perf_stats.memory_bytes = (core.particles.memory_bytes()
            + core.lines.positions().len() * std::mem::size_of::<f32>()
            + core.lines.indices().len() * std::mem::size_of::<u32>())
            as u32;
        core.perf_stats.frame = core.frame as u32;
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    true
}

pub(super) fn dispose(core: &mut NetworkCore) {
    if core.state == DriverState::TornDown {
        return;
    }
    core.state = DriverState::TornDown;
    core.particles.dispose();
    core.lines.release();
    core.pointer = None;
    core.positions_changed = false;
    core.lines_changed = false;
    core.perf_stats.reset();
    console_log!("plexus: disposed after {} frames", core.frame);
}
