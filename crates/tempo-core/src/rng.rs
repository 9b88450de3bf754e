//! Palette shuffle RNG.
//!
//! # Determinism strategy
//!
//! The only randomness in a render pass is the one-time shuffle of the base
//! palette.  `PaletteRng` wraps a `SmallRng` so the source is explicit and
//! injected rather than global:
//!
//! - `Some(seed)` → `SmallRng::seed_from_u64(seed)`: the same seed always
//!   yields the same shuffle, so two builds of the same input produce
//!   identical colors.
//! - `None` → seeded from OS entropy: a fresh shuffle every run.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Seedable RNG used once per render pass to shuffle the palette.
pub struct PaletteRng(SmallRng);

impl PaletteRng {
    /// Deterministic RNG from a fixed seed.
    pub fn new(seed: u64) -> Self {
        PaletteRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        PaletteRng(SmallRng::from_entropy())
    }

    /// `new(seed)` when a seed is configured, otherwise `from_entropy()`.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
