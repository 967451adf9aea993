use wasm_bindgen::prelude::*;

use crate::core::math::Vec3;

use super::perf_stats::PerfStats;
use super::{DriverState, NetworkCore};

/// Pointer/length table for building typed-array views over wasm memory.
///
/// Re-query after `load_config` or `dispose`: both may move the buffers.
#[wasm_bindgen]
pub struct AbiLayout {
    positions_ptr: u32,
    positions_len_elements: u32,
    positions_len_bytes: u32,
    line_positions_ptr: u32,
    line_positions_len_elements: u32,
    line_positions_len_bytes: u32,
    line_indices_ptr: u32,
    line_indices_len_elements: u32,
    line_indices_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn positions_len_elements(&self) -> u32 { self.positions_len_elements }
    #[wasm_bindgen(getter)]
    pub fn positions_len_bytes(&self) -> u32 { self.positions_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn line_positions_ptr(&self) -> u32 { self.line_positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn line_positions_len_elements(&self) -> u32 { self.line_positions_len_elements }
    #[wasm_bindgen(getter)]
    pub fn line_positions_len_bytes(&self) -> u32 { self.line_positions_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn line_indices_ptr(&self) -> u32 { self.line_indices_ptr }
    #[wasm_bindgen(getter)]
    pub fn line_indices_len_elements(&self) -> u32 { self.line_indices_len_elements }
    #[wasm_bindgen(getter)]
    pub fn line_indices_len_bytes(&self) -> u32 { self.line_indices_len_bytes }
}

#[wasm_bindgen]
pub struct Network {
    core: NetworkCore,
}

#[wasm_bindgen]
impl Network {
    /// Create a network with the reference tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: NetworkCore::new(),
        }
    }

    /// Create a network from a JSON config (camelCase keys, all optional)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<Network, JsValue> {
        let core = NetworkCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.get_config_json()
    }

    pub fn reseed(&mut self, seed: u32) {
        self.core.reseed(seed);
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> DriverState { self.core.state() }

    #[wasm_bindgen(getter)]
    pub fn disposed(&self) -> bool { self.core.is_disposed() }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === INPUT ===

    /// Pointer in normalized device coordinates (-1..1)
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.core.set_pointer(x, y);
    }

    pub fn clear_pointer(&mut self) {
        self.core.clear_pointer();
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_particle(&mut self, i: usize, x: f32, y: f32, z: f32, vx: f32, vy: f32, vz: f32) -> bool {
        self.core
            .set_particle(i, Vec3::new(x, y, z), Vec3::new(vx, vy, vz))
    }

    // === FRAME DRIVER ===

    /// Advance one frame; call from requestAnimationFrame.
    /// Returns false once disposed.
    pub fn tick(&mut self) -> bool {
        self.core.tick()
    }

    /// Stop and free buffers (call on unmount)
    pub fn dispose(&mut self) {
        self.core.dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_y(&self) -> f32 { self.core.rotation_y() }

    #[wasm_bindgen(getter)]
    pub fn parallax_x(&self) -> f32 { self.core.parallax_offset().x }

    #[wasm_bindgen(getter)]
    pub fn parallax_y(&self) -> f32 { self.core.parallax_offset().y }

    // === RENDER API ===

    #[wasm_bindgen(getter)]
    pub fn connection_count(&self) -> usize { self.core.connection_count() }

    #[wasm_bindgen(getter)]
    pub fn max_connections(&self) -> usize { self.core.max_connections() }

    #[wasm_bindgen(getter)]
    pub fn overflowed_pairs(&self) -> usize { self.core.overflowed_pairs() }

    /// Vertex count for `geometry.setDrawRange(0, n)`
    pub fn line_draw_count(&self) -> usize {
        self.core.line_draw_count()
    }

    pub fn take_positions_changed(&mut self) -> bool {
        self.core.take_positions_changed()
    }

    pub fn take_lines_changed(&mut self) -> bool {
        self.core.take_lines_changed()
    }

    /// Get pointer to particle positions (xyz, stride 3)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    /// Get pointer to line segment endpoints (6 floats per segment)
    pub fn line_positions_ptr(&self) -> *const f32 {
        self.core.line_positions_ptr()
    }

    pub fn line_positions_len(&self) -> usize {
        self.core.line_positions_len()
    }

    /// Get pointer to segment particle indices (2 per segment)
    pub fn line_indices_ptr(&self) -> *const u32 {
        self.core.line_indices_ptr()
    }

    pub fn line_indices_len(&self) -> usize {
        self.core.line_indices_len()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            positions_ptr: data.positions_ptr as u32,
            positions_len_elements: data.positions_len_elements as u32,
            positions_len_bytes: data.positions_len_bytes as u32,
            line_positions_ptr: data.line_positions_ptr as u32,
            line_positions_len_elements: data.line_positions_len_elements as u32,
            line_positions_len_bytes: data.line_positions_len_bytes as u32,
            line_indices_ptr: data.line_indices_ptr as u32,
            line_indices_len_elements: data.line_indices_len_elements as u32,
            line_indices_len_bytes: data.line_indices_len_bytes as u32,
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl Network {
    /// Borrow the core (native callers and tests)
    pub fn core(&self) -> &NetworkCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut NetworkCore {
        &mut self.core
    }
}
