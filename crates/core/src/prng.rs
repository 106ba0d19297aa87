//! Seedable Xorshift64 PRNG, the randomness capability behind grid jitter.
//!
//! Grid generation takes one of these by `&mut` instead of reaching for an
//! ambient global generator: tests inject a fixed seed for deterministic
//! meshes, and concurrent generations each own their state so parallel
//! renders cannot correlate. Same seed, same sequence, on every platform
//! (pure integer arithmetic in the core step).

use serde::{Deserialize, Serialize};

/// Xorshift64 PRNG with the standard (13, 7, 17) shift triple.
///
/// Seed 0 is the all-zeros fixed point of xorshift and is replaced with a
/// non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG. A seed of 0 is replaced with the fallback.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1), using the top 53 bits for full mantissa
    /// precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max). With `min == max` this always returns
    /// `min`, which is what zero-variance jitter wants.
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_7() {
        // Golden value for xorshift64(seed=7, shifts=13,7,17). If this test
        // breaks, the algorithm changed and any saved pattern spec replays
        // with a different jitter.
        let mut rng = Xorshift64::new(7);
        assert_eq!(rng.next_u64(), 7_575_888_327);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0, "seed=0 guard failed");
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn same_seed_produces_identical_sequences() {
        let mut a = Xorshift64::new(2026);
        let mut b = Xorshift64::new(2026);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "diverged at index {i}");
        }
    }

    #[test]
    fn next_f64_stays_in_the_unit_interval() {
        let mut rng = Xorshift64::new(12345);
        for i in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "next_f64() = {v} at iteration {i}");
        }
    }

    #[test]
    fn next_range_with_equal_bounds_is_constant() {
        let mut rng = Xorshift64::new(1);
        for _ in 0..100 {
            assert_eq!(rng.next_range(5.0, 5.0), 5.0);
        }
    }

    #[test]
    fn serialization_round_trip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64(), "diverged at {i}");
        }
    }

    // -- property-based --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_range_in_bounds_for_any_seed_and_range(
                seed: u64,
                min in -1e6_f64..1e6,
                max in -1e6_f64..1e6,
            ) {
                prop_assume!(min < max);
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(min, max);
                    prop_assert!(v >= min && v < max, "next_range({min}, {max}) = {v}");
                }
            }

            #[test]
            fn next_f64_approximate_uniformity(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                let mut buckets = [0u32; 10];
                for _ in 0..10_000 {
                    let idx = (rng.next_f64() * 10.0).min(9.0) as usize;
                    buckets[idx] += 1;
                }
                // Loose bound (expected ~1000 per bucket) to avoid flakiness.
                for (i, &count) in buckets.iter().enumerate() {
                    prop_assert!(count >= 500, "bucket {i} has {count} of 10000");
                }
            }
        }
    }
}
