//! RNG oracle for deterministic random rolls.
//!
//! Death-scatter outcomes (delete vs eject, impulse hints) must be
//! reproducible from a seed so that replays and tests observe identical
//! inventories. The oracle is stateless: every roll derives from an
//! explicit seed computed with [`compute_seed`].

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform roll in `[0, 1)`.
    ///
    /// Used for probability checks such as the death-scatter deletion roll.
    fn roll_unit(&self, seed: u64) -> f32 {
        // 24 mantissa bits keep the conversion exact.
        (self.next_u32(seed) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform roll in `[-1, 1)`.
    fn roll_signed_unit(&self, seed: u64) -> f32 {
        self.roll_unit(seed) * 2.0 - 1.0
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output permuted out of 64-bit LCG state. Small,
/// fast, and statistically solid, which is all the scatter rolls need.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output function (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one roll inside a larger transaction.
///
/// # Arguments
///
/// * `base_seed` - Seed of the owning transaction (e.g. one death event)
/// * `ordinal` - Index of the element being visited (e.g. slot ordinal)
/// * `context` - Distinguishes multiple independent rolls per element
///   (`0`: outcome roll, `1`/`2`: impulse components, ...)
pub fn compute_seed(base_seed: u64, ordinal: u64, context: u32) -> u64 {
    // SplitMix64/FxHash-style mixing constants.
    let mut hash = base_seed;
    hash ^= ordinal.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step.
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
