//! PRNG source abstraction.
//!
//! All sampling primitives in this crate draw from the [`RandomSource`]
//! capability trait rather than a concrete generator, so any conforming
//! implementation can be swapped in. [`ChaChaSource`] is the standard
//! implementation: a ChaCha8 stream cipher RNG whose output for a given
//! seed is stable across platforms and releases.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment used to decorrelate derived seeds.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Entropy base used when the system clock reads before the Unix epoch.
const FALLBACK_ENTROPY: u64 = 0x853c_49e6_748f_ea9b;

/// Capability interface for seedable random sources.
///
/// Subsequent draws after [`reseed`](RandomSource::reseed) are a pure
/// deterministic function of the seed and the call order. Snapshots are
/// opaque saved states; restoring one resumes the stream exactly where the
/// snapshot was taken.
pub trait RandomSource {
    /// Opaque saved generator state.
    type Snapshot: Clone;

    /// Produce the next 64 uniformly distributed bits.
    fn next_u64(&mut self) -> u64;

    /// Reset the internal state from a 64-bit seed.
    fn reseed(&mut self, seed: u64);

    /// Capture the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Resume from a previously captured state.
    fn restore(&mut self, snapshot: Self::Snapshot);

    /// Produce a uniform float in `[0, 1)` with 53 bits of precision.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Produce a uniform integer in `[0, bound)`.
    ///
    /// Uses rejection sampling when the 64-bit range does not divide
    /// evenly by `bound`, so no value is favoured by modulo bias.
    /// Callers must validate `bound > 0`; a zero bound yields zero.
    fn next_below(&mut self, bound: u64) -> u64 {
        if bound <= 1 {
            return 0;
        }
        let zone = (u64::MAX / bound) * bound;
        loop {
            let raw = self.next_u64();
            if raw < zone {
                return raw % bound;
            }
        }
    }
}

/// Standard random source backed by the ChaCha8 stream cipher.
///
/// Chosen over `rand`'s `StdRng` because the ChaCha stream for a given
/// seed is documented as reproducible across platforms and crate
/// versions, which the library's golden-output guarantees rely on.
#[derive(Clone)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
}

/// Saved [`ChaChaSource`] state.
#[derive(Clone)]
pub struct ChaChaSnapshot(ChaCha8Rng);

impl ChaChaSource {
    /// Create a source with an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from process entropy.
    ///
    /// See [`entropy_seed`] for how the seed is derived.
    pub fn from_entropy() -> Self {
        Self::from_seed(entropy_seed())
    }
}

impl RandomSource for ChaChaSource {
    type Snapshot = ChaChaSnapshot;

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    fn snapshot(&self) -> ChaChaSnapshot {
        ChaChaSnapshot(self.rng.clone())
    }

    fn restore(&mut self, snapshot: ChaChaSnapshot) {
        self.rng = snapshot.0;
    }
}

impl fmt::Debug for ChaChaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaChaSource").finish_non_exhaustive()
    }
}

impl fmt::Debug for ChaChaSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChaChaSnapshot").finish_non_exhaustive()
    }
}

/// Derive a fresh seed from process entropy.
///
/// The time base is read once per process and cached; subsequent calls
/// advance an atomic counter and mix it in, so concurrent callers never
/// receive the same seed. The returned seed should be logged by callers
/// that need to reproduce an unseeded run.
pub fn entropy_seed() -> u64 {
    static BASE: OnceLock<u64> = OnceLock::new();
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let base = *BASE.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(FALLBACK_ENTROPY)
    });
    let count = COUNTER.fetch_add(1, Ordering::Relaxed);
    splitmix64(base ^ count.wrapping_mul(GOLDEN_GAMMA))
}

/// SplitMix64 finalizer, used to spread entropy over all 64 bits.
fn splitmix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut source1 = ChaChaSource::from_seed(42);
        let mut source2 = ChaChaSource::from_seed(42);

        for _ in 0..100 {
            assert_eq!(source1.next_u64(), source2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut source1 = ChaChaSource::from_seed(42);
        let mut source2 = ChaChaSource::from_seed(43);

        let draws1: Vec<u64> = (0..8).map(|_| source1.next_u64()).collect();
        let draws2: Vec<u64> = (0..8).map(|_| source2.next_u64()).collect();
        assert_ne!(draws1, draws2);
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut source = ChaChaSource::from_seed(42);
        let first: Vec<u64> = (0..4).map(|_| source.next_u64()).collect();

        source.reseed(42);
        let second: Vec<u64> = (0..4).map(|_| source.next_u64()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_restore_resumes() {
        let mut source = ChaChaSource::from_seed(42);
        source.next_u64();

        let snapshot = source.snapshot();
        let expected: Vec<u64> = (0..4).map(|_| source.next_u64()).collect();

        source.restore(snapshot);
        let resumed: Vec<u64> = (0..4).map(|_| source.next_u64()).collect();
        assert_eq!(expected, resumed);
    }

    #[test]
    fn test_next_f64_unit_interval() {
        let mut source = ChaChaSource::from_seed(42);
        for _ in 0..1000 {
            let value = source.next_f64();
            assert!((0.0..1.0).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn test_next_below_bounds() {
        let mut source = ChaChaSource::from_seed(42);
        for bound in [1, 2, 3, 7, 10, 1000, u64::from(u32::MAX)] {
            for _ in 0..100 {
                assert!(source.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_next_below_zero_bound() {
        let mut source = ChaChaSource::from_seed(42);
        assert_eq!(source.next_below(0), 0);
    }

    #[test]
    fn test_entropy_seed_unique_per_call() {
        let first = entropy_seed();
        let second = entropy_seed();
        assert_ne!(first, second);
    }
}
