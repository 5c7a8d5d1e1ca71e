//! Random source for piece selection.
//!
//! The session only needs "a number in `[0, bound)`", expressed by
//! [`RandomSource`]. [`SimpleRng`] is the deterministic LCG used by the game;
//! a seed of the process start time gives varied games, a fixed seed gives
//! reproducible ones for tests and replays.

/// Source of bounded random integers.
pub trait RandomSource {
    /// Return an integer in `[0, bound)`. `bound` must be non-zero.
    fn next_int(&mut self, bound: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock. Used when no explicit seed is configured.
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle with a short period; take the high half.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.next_range(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        let first = rng.next_u32();
        let second = rng.next_u32();
        assert_ne!(first, second);
    }

    #[test]
    fn test_next_int_stays_in_bounds() {
        let mut rng = SimpleRng::new(42);
        for bound in 1..20u32 {
            for _ in 0..200 {
                assert!(rng.next_int(bound) < bound);
            }
        }
    }

    #[test]
    fn test_next_int_covers_small_ranges() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_int(7) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value should appear: {:?}", seen);

        let mut seen4 = [false; 4];
        for _ in 0..200 {
            seen4[rng.next_int(4) as usize] = true;
        }
        assert!(seen4.iter().all(|s| *s));
    }
}
