use wasm_bindgen::prelude::*;

/// Frame driver lifecycle.
///
/// `Idle -> Stepping -> Published` on every tick; `Published` drops back to
/// `Idle` once the renderer has taken both change flags, or implicitly at
/// the start of the next tick. `TornDown` is terminal.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle = 0,
    Stepping = 1,
    Published = 2,
    TornDown = 3,
}

impl DriverState {
    pub fn can_tick(self) -> bool {
        self != DriverState::TornDown
    }
}
