//! Browser smoke test: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use plexus_engine::Network;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn ticks_and_exposes_buffers() {
    plexus_engine::init();
    let mut network = Network::new();
    network.set_pointer(0.0, 0.0);
    assert!(network.tick());

    let abi = network.abi_layout();
    assert_eq!(abi.positions_len_elements(), 300);
    assert_eq!(abi.positions_len_bytes(), 1200);
    assert!(network.line_draw_count() <= 2 * network.max_connections());

    network.dispose();
    assert!(!network.tick());
}
