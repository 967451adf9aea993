use wasm_bindgen::prelude::*;

/// Timing and size snapshot of the last tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) connections_ms: f64,
    pub(super) particle_count: u32,
    pub(super) connections: u32,
    pub(super) overflowed_pairs: u32,
    pub(super) line_buffer_usage: f32,
    pub(super) memory_bytes: u32,
    pub(super) frame: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn connections_ms(&self) -> f64 { self.connections_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn connections(&self) -> u32 { self.connections }
    #[wasm_bindgen(getter)]
    pub fn overflowed_pairs(&self) -> u32 { self.overflowed_pairs }
    /// Fraction of line slots used, 0..=1
    #[wasm_bindgen(getter)]
    pub fn line_buffer_usage(&self) -> f32 { self.line_buffer_usage }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 { self.frame }
}
