//! Network - particle network background simulation
//!
//! NetworkCore owns the particle store and the line buffer and sequences
//! one tick per display refresh:
//! pointer -> integrator -> proximity graph -> publish.
//!
//! The host (JS renderer) reads positions and line segments straight out of
//! wasm memory through the pointers exposed in render/, and tells the core
//! where the pointer is before each tick.

use crate::core::line_buffer::LineBuffer;
use crate::core::math::{Vec2, Vec3};
use crate::domain::config::NetworkConfig;
use crate::systems::integrator::IntegratorParams;
use crate::systems::particles::ParticleStore;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "driver/state.rs"]
mod state;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{AbiLayout, Network};
pub use perf_stats::PerfStats;
pub use state::DriverState;

use perf_timer::PerfTimer;

pub(crate) struct AbiLayoutData {
    pub(crate) positions_ptr: *const f32,
    pub(crate) positions_len_elements: usize,
    pub(crate) positions_len_bytes: usize,
    pub(crate) line_positions_ptr: *const f32,
    pub(crate) line_positions_len_elements: usize,
    pub(crate) line_positions_len_bytes: usize,
    pub(crate) line_indices_ptr: *const u32,
    pub(crate) line_indices_len_elements: usize,
    pub(crate) line_indices_len_bytes: usize,
}

/// The simulation state for one mounted background
pub struct NetworkCore {
    config: NetworkConfig,
    params: IntegratorParams,
    particles: ParticleStore,
    lines: LineBuffer,

    // Input
    pointer: Option<Vec2>,

    // Driver
    state: DriverState,
    frame: u64,
    rotation_y: f32,
    positions_changed: bool,
    lines_changed: bool,
    was_overflowing: bool,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl NetworkCore {
    /// Network with the reference tuning
    pub fn new() -> Self {
        init::create_network_core(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_network_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = NetworkConfig::from_json(json)?;
        Ok(init::create_network_core(config))
    }

    /// Replace the configuration and reseed. On error the running
    /// simulation is left untouched.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_config_json(self, json)
    }

    pub fn get_config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Re-run particle initialization with the given seed
    pub fn reseed(&mut self, seed: u32) {
        init::reseed(self, seed);
    }

    pub fn particle_count(&self) -> usize {
        self.particles.count()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.state == DriverState::TornDown
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Pointer in normalized device coordinates, read on the next tick
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        settings::set_pointer(self, x, y);
    }

    /// Pointer left the view: no repulsion until set again
    pub fn clear_pointer(&mut self) {
        settings::clear_pointer(self);
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Place one particle explicitly (host scripting and tests)
    pub fn set_particle(&mut self, i: usize, position: Vec3, velocity: Vec3) -> bool {
        settings::set_particle(self, i, position, velocity)
    }

    pub fn particle_position(&self, i: usize) -> Option<Vec3> {
        (i < self.particles.count()).then(|| self.particles.position(i))
    }

    pub fn particle_velocity(&self, i: usize) -> Option<Vec3> {
        (i < self.particles.count()).then(|| self.particles.velocity(i))
    }

    /// Advance one frame. Returns false once torn down.
    pub fn tick(&mut self) -> bool {
        step::tick(self)
    }

    /// Stop the simulation and free its buffers. Further ticks are no-ops.
    pub fn dispose(&mut self) {
        step::dispose(self);
    }

    /// Scene rotation around Y (radians, wrapped to [0, 2π))
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Offset for the parallax layer; zero without a pointer
    pub fn parallax_offset(&self) -> Vec2 {
        match self.pointer {
            Some(p) if p.is_finite() => p * self.config.parallax_gain,
            _ => Vec2::zero(),
        }
    }

    // === RENDER API ===

    pub fn connection_count(&self) -> usize {
        self.lines.count
    }

    pub fn max_connections(&self) -> usize {
        self.lines.capacity()
    }

    /// Pairs dropped last tick because the line buffer was full
    pub fn overflowed_pairs(&self) -> usize {
        self.lines.overflow_count()
    }

    /// Vertex count for the line draw range (two per segment)
    pub fn line_draw_count(&self) -> usize {
        render_extract::line_draw_count(self)
    }

    pub fn connection(&self, n: usize) -> Option<(Vec3, Vec3)> {
        self.lines.segment(n)
    }

    pub fn connection_pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.lines.pairs()
    }

    pub fn positions(&self) -> &[f32] {
        self.particles.positions()
    }

    pub fn line_positions(&self) -> &[f32] {
        self.lines.positions()
    }

    pub fn line_indices(&self) -> &[u32] {
        self.lines.indices()
    }

    /// Read-and-clear: true if positions changed since the last call
    pub fn take_positions_changed(&mut self) -> bool {
        render_extract::take_positions_changed(self)
    }

    /// Read-and-clear: true if the line buffer changed since the last call
    pub fn take_lines_changed(&mut self) -> bool {
        render_extract::take_lines_changed(self)
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.particles.positions_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.particles.positions().len()
    }

    pub fn line_positions_ptr(&self) -> *const f32 {
        self.lines.positions_ptr()
    }

    pub fn line_positions_len(&self) -> usize {
        self.lines.positions().len()
    }

    pub fn line_indices_ptr(&self) -> *const u32 {
        self.lines.indices_ptr()
    }

    pub fn line_indices_len(&self) -> usize {
        self.lines.indices().len()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        render_extract::abi_layout_data(self)
    }
}

impl Default for NetworkCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
