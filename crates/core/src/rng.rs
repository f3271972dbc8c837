//! RNG module - small deterministic generator for food placement
//!
//! A seeded LCG keeps runs reproducible in tests and benchmarks while still
//! looking random to a player (the runner seeds it from the clock).

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits, which have a much longer period than the low bits
    /// of a power-of-two LCG.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(20) < 20);
        }
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.next_range(1), 0);
    }

    #[test]
    fn test_next_range_covers_small_domain() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 20];
        for _ in 0..2000 {
            seen[rng.next_range(20) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every column should eventually appear");
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }
}
