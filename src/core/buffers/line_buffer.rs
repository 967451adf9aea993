use crate::core::math::Vec3;

/// Floats per segment: two xyz endpoints
pub const FLOATS_PER_LINE: usize = 6;
/// Indices per segment: (i, j)
pub const INDICES_PER_LINE: usize = 2;

// Fixed-size segment buffer: allocated once, the cursor is reset every frame.
// The renderer reads `positions[..count * 6]` and ignores the tail.

/// Fixed-capacity line segment buffer
pub struct LineBuffer {
    positions: Vec<f32>,
    indices: Vec<u32>,
    pub count: usize,
    capacity: usize,
    overflow_count: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: vec![0.0; capacity * FLOATS_PER_LINE],
            indices: vec![0; capacity * INDICES_PER_LINE],
            count: 0,
            capacity,
            overflow_count: 0,
        }
    }

    /// Push segment - dropped silently (and counted) when full
    #[inline(always)]
    pub fn push(&mut self, i: u32, a: Vec3, j: u32, b: Vec3) -> bool {
        if self.count >= self.capacity {
            self.overflow_count += 1;
            return false;
        }

        let o = self.count * FLOATS_PER_LINE;
        fast!(self.positions, [o] = a.x);
        fast!(self.positions, [o + 1] = a.y);
        fast!(self.positions, [o + 2] = a.z);
        fast!(self.positions, [o + 3] = b.x);
        fast!(self.positions, [o + 4] = b.y);
        fast!(self.positions, [o + 5] = b.z);

        let k = self.count * INDICES_PER_LINE;
        fast!(self.indices, [k] = i);
        fast!(self.indices, [k + 1] = j);

        self.count += 1;
        true
    }

    /// Reset cursor - memory stays allocated
    #[inline(always)]
    pub fn clear(&mut self) {
        self.count = 0;
        self.overflow_count = 0;
    }

    /// Drop storage on teardown
    pub fn release(&mut self) {
        self.positions = Vec::new();
        self.indices = Vec::new();
        self.count = 0;
        self.capacity = 0;
        self.overflow_count = 0;
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn overflow_count(&self) -> usize {
        self.overflow_count
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity
    }

    /// Endpoints of segment `n` if it is active
    pub fn segment(&self, n: usize) -> Option<(Vec3, Vec3)> {
        if n >= self.count {
            return None;
        }
        let o = n * FLOATS_PER_LINE;
        Some((
            Vec3::read(&self.positions[o..o + 3], 0),
            Vec3::read(&self.positions[o + 3..o + 6], 0),
        ))
    }

    /// Particle indices of segment `n` if it is active
    pub fn pair(&self, n: usize) -> Option<(u32, u32)> {
        if n >= self.count {
            return None;
        }
        let k = n * INDICES_PER_LINE;
        Some((self.indices[k], self.indices[k + 1]))
    }

    /// Active pairs in scan order
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.indices[..self.count * INDICES_PER_LINE]
            .chunks_exact(INDICES_PER_LINE)
            .map(|p| (p[0], p[1]))
    }

    /// Whole backing store, including the inactive tail
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn indices_ptr(&self) -> *const u32 {
        self.indices.as_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_writes_endpoints_and_indices() {
        let mut buf = LineBuffer::new(2);
        assert!(buf.push(0, Vec3::new(1.0, 2.0, 3.0), 4, Vec3::new(-1.0, -2.0, -3.0)));
        assert_eq!(buf.count, 1);
        assert_eq!(&buf.positions()[..6], &[1.0, 2.0, 3.0, -1.0, -2.0, -3.0]);
        assert_eq!(buf.pair(0), Some((0, 4)));
        assert_eq!(buf.pair(1), None);
    }

    #[test]
    fn full_buffer_drops_and_counts() {
        let mut buf = LineBuffer::new(1);
        assert!(buf.push(0, Vec3::zero(), 1, Vec3::zero()));
        assert!(!buf.push(0, Vec3::zero(), 2, Vec3::zero()));
        assert!(!buf.push(1, Vec3::zero(), 2, Vec3::zero()));
        assert_eq!(buf.count, 1);
        assert_eq!(buf.overflow_count(), 2);
        assert_eq!(buf.positions().len(), 6);
    }

    #[test]
    fn clear_keeps_allocation() {
        let mut buf = LineBuffer::new(4);
        buf.push(0, Vec3::zero(), 1, Vec3::zero());
        let ptr = buf.positions_ptr();
        buf.clear();
        assert_eq!(buf.count, 0);
        assert_eq!(buf.positions_ptr(), ptr);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn zero_capacity_never_accepts() {
        let mut buf = LineBuffer::new(0);
        assert!(buf.is_full());
        assert!(!buf.push(0, Vec3::zero(), 1, Vec3::zero()));
        assert_eq!(buf.overflow_count(), 1);
    }
}
