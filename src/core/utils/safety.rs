//! Checked-in-debug indexing for the per-frame hot loops
//!
//! Debug builds index normally and panic with the usual bounds message.
//! Release builds use `get_unchecked` because every index in the integrator
//! and proximity scan is derived from `0..count` against buffers sized
//! `3 * count` at construction.
//!
//! Usage:
//! ```rust
//! use plexus_engine::fast;
//!
//! let positions = vec![0.5f32, -1.0, 2.0];
//! let y = *fast!(positions, [1]);
//! assert_eq!(y, -1.0);
//!
//! let mut velocities = vec![0.0f32; 3];
//! fast!(velocities, [2] = 0.004);
//! assert_eq!(velocities[2], 0.004);
//! ```

/// Slice access that is bounds-checked only with `debug_assertions`.
///
/// `fast!(buf, [i])` yields `&buf[i]`; `fast!(buf, [i] = value)` stores.
/// Callers own the invariant `i < buf.len()`.
#[macro_export]
macro_rules! fast {
    ($buf:expr, [$i:expr]) => {{
        #[cfg(debug_assertions)]
        let slot = &$buf[$i];
        // SAFETY: caller guarantees `$i < $buf.len()`
        #[cfg(not(debug_assertions))]
        let slot = unsafe { $buf.get_unchecked($i) };
        slot
    }};

    ($buf:expr, [$i:expr] = $value:expr) => {{
        let value = $value;
        #[cfg(debug_assertions)]
        {
            $buf[$i] = value;
        }
        // SAFETY: caller guarantees `$i < $buf.len()`
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$buf.get_unchecked_mut($i) = value };
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn reads_component() {
        let pos = vec![1.0f32, 2.0, 3.0];
        assert_eq!(*fast!(pos, [2]), 3.0);
    }

    #[test]
    fn writes_component() {
        let mut vel = vec![0.0f32; 6];
        fast!(vel, [4] = -0.25);
        assert_eq!(vel[4], -0.25);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_range_panics_in_debug() {
        let pos = vec![0.0f32; 3];
        let _ = *fast!(pos, [3]);
    }
}
