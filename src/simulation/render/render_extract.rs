use crate::core::line_buffer::INDICES_PER_LINE;

use super::{AbiLayoutData, DriverState, NetworkCore};

pub(super) fn line_draw_count(core: &NetworkCore) -> usize {
    core.lines.count * INDICES_PER_LINE
}

pub(super) fn take_positions_changed(core: &mut NetworkCore) -> bool {
    let changed = core.positions_changed;
    core.positions_changed = false;
    settle_if_consumed(core);
    changed
}

pub(super) fn take_lines_changed(core: &mut NetworkCore) -> bool {
    let changed = core.lines_changed;
    core.lines_changed = false;
    settle_if_consumed(core);
    changed
}

/// Published -> Idle once the renderer has picked up everything
fn settle_if_consumed(core: &mut NetworkCore) {
    if core.state == DriverState::Published && !core.positions_changed && !core.lines_changed {
        core.state = DriverState::Idle;
    }
}

pub(super) fn abi_layout_data(core: &NetworkCore) -> AbiLayoutData {
    let positions_len = core.positions_len();
    let line_positions_len = core.line_positions_len();
    let line_indices_len = core.line_indices_len();
    AbiLayoutData {
        positions_ptr: core.positions_ptr(),
        positions_len_elements: positions_len,
        positions_len_bytes: positions_len * std::mem::size_of::<f32>(),
        line_positions_ptr: core.line_positions_ptr(),
        line_positions_len_elements: line_positions_len,
        line_positions_len_bytes: line_positions_len * std::mem::size_of::<f32>(),
        line_indices_ptr: core.line_indices_ptr(),
        line_indices_len_elements: line_indices_len,
        line_indices_len_bytes: line_indices_len * std::mem::size_of::<u32>(),
    }
}
