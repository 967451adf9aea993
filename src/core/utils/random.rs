/// Fallback seed when no entropy source is available (must be non-zero)
pub const DEFAULT_SEED: u32 = 12345;

/// Xorshift32 random number generator
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in [0, 1)
#[inline]
pub fn next_unit(state: &mut u32) -> f32 {
    // Top 24 bits fill the f32 mantissa exactly
    (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32
}

/// Uniform float in [-half_width, half_width)
#[inline]
pub fn next_centered(state: &mut u32, half_width: f32) -> f32 {
    (next_unit(state) - 0.5) * 2.0 * half_width
}

/// Xorshift has a fixed point at zero
pub fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { DEFAULT_SEED } else { seed }
}

/// Seed for runs without an explicit one: `Math.random` in the browser,
/// the fixed default elsewhere so native tests are reproducible.
pub fn entropy_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        sanitize_seed((js_sys::Math::random() * u32::MAX as f64) as u32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_SEED
    }
}
