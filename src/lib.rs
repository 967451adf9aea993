//! Plexus Engine - particle network background simulation in WASM
//!
//! A fixed population of particles drifts inside a cube, bounces off its
//! walls and shies away from the pointer; every pair closer than the
//! connection distance is drawn as a line. The JS side owns the canvas and
//! reads the buffers straight out of wasm memory.
//!
//! Layout:
//! - core/        - safety/logging macros, random source, math, line buffer
//! - domain/      - configuration
//! - systems/     - particle store, integrator, proximity graph
//! - simulation/  - frame driver, perf metrics, render extraction, wasm API

// Macros first so the modules below can use them
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// JS must await initThreadPool(n) before the first tick when built with threads
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("plexus engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub use crate::core::math::{Vec2, Vec3};
pub use domain::config::NetworkConfig;
pub use simulation::{AbiLayout, DriverState, Network, NetworkCore, PerfStats};
