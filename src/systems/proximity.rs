//! Proximity graph: every particle pair closer than the connection distance
//! becomes one line segment for this frame.
//!
//! The scan is exhaustive over `i < j` in ascending order. Once the line
//! buffer is full the remaining pairs of the frame are skipped, so with a
//! saturated buffer the lowest-indexed pairs win.

use crate::core::line_buffer::LineBuffer;
use crate::core::math::Vec3;

/// Rebuild `lines` from `positions` (flat xyz). Returns the active count.
pub fn rebuild_connections(positions: &[f32], threshold: f32, lines: &mut LineBuffer) -> usize {
    lines.clear();
    let count = positions.len() / 3;

    for i in 0..count {
        let a = Vec3::new(
            *fast!(positions, [i * 3]),
            *fast!(positions, [i * 3 + 1]),
            *fast!(positions, [i * 3 + 2]),
        );
        for j in (i + 1)..count {
            let b = Vec3::new(
                *fast!(positions, [j * 3]),
                *fast!(positions, [j * 3 + 1]),
                *fast!(positions, [j * 3 + 2]),
            );
            // Strict: a pair exactly at the threshold is not connected
            if (a - b).length() < threshold {
                lines.push(i as u32, a, j as u32, b);
            }
        }
    }

    lines.count
}
