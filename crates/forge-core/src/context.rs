//! Seed lifecycle management.
//!
//! [`RandomContext`] owns a random source together with the seed that
//! produced its current stream. It is the only carried state in the core:
//! there is no process-wide default generator. Callers construct a context
//! explicitly (or via the facade crate) and pass it to the sampling
//! primitives, which accept it directly because the context implements
//! [`RandomSource`] by delegation.

use std::ops::{Deref, DerefMut};

use crate::source::{entropy_seed, ChaChaSource, RandomSource};

/// Saved seed and generator state for one scope level.
struct ScopeFrame<S: RandomSource> {
    seed: u64,
    snapshot: S::Snapshot,
}

/// A seedable generation context with scoped save/restore.
///
/// Two contexts created with the same seed produce byte-identical outputs
/// for identical call sequences. Each context exclusively owns its state;
/// independent contexts never interleave, so concurrent workers can each
/// hold their own without coordination.
pub struct RandomContext<S: RandomSource = ChaChaSource> {
    source: S,
    seed: u64,
    scopes: Vec<ScopeFrame<S>>,
}

impl RandomContext<ChaChaSource> {
    /// Create a context with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_source(ChaChaSource::from_seed(seed), seed)
    }

    /// Create a context seeded from process entropy.
    ///
    /// The seed actually used is available via [`seed`](Self::seed) so a
    /// run can be reproduced later.
    pub fn from_entropy() -> Self {
        Self::with_seed(entropy_seed())
    }
}

impl<S: RandomSource> RandomContext<S> {
    /// Wrap a custom source, reseeding it so the context's recorded seed
    /// and the source's state agree.
    pub fn from_source(mut source: S, seed: u64) -> Self {
        source.reseed(seed);
        Self {
            source,
            seed,
            scopes: Vec::new(),
        }
    }

    /// The seed that produced the current stream. Does not mutate state.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Apply an explicit seed, or draw an entropy seed when `None`.
    ///
    /// Returns the seed actually used, so an auto-generated seed can be
    /// logged and replayed against a failing run.
    pub fn set_seed(&mut self, seed: Option<u64>) -> u64 {
        let applied = seed.unwrap_or_else(entropy_seed);
        self.seed = applied;
        self.source.reseed(applied);
        tracing::debug!(seed = applied, explicit = seed.is_some(), "reseeded context");
        applied
    }

    /// Begin a seed scope: save the current seed and generator state,
    /// then apply `seed`.
    ///
    /// Must be paired with [`end_seed_scope`](Self::end_seed_scope).
    /// Prefer [`seed_scope`](Self::seed_scope), which pairs the calls
    /// through an RAII guard.
    pub fn begin_seed_scope(&mut self, seed: u64) {
        self.scopes.push(ScopeFrame {
            seed: self.seed,
            snapshot: self.source.snapshot(),
        });
        self.seed = seed;
        self.source.reseed(seed);
    }

    /// End the innermost seed scope, restoring the saved seed and
    /// generator state. A call without an open scope is a no-op.
    pub fn end_seed_scope(&mut self) {
        if let Some(frame) = self.scopes.pop() {
            self.seed = frame.seed;
            self.source.restore(frame.snapshot);
        }
    }

    /// Begin a seed scope guarded by an RAII token.
    ///
    /// The guard dereferences to the context; when it drops — on every
    /// exit path, including early returns and panics — the enclosing
    /// state is restored, so draws inside the scope cannot shift the
    /// caller's subsequent stream position. Scopes nest: each guard
    /// restores to the state of the immediately enclosing scope.
    pub fn seed_scope(&mut self, seed: u64) -> SeedScope<'_, S> {
        self.begin_seed_scope(seed);
        SeedScope { ctx: self }
    }

    /// Run a closure under a scoped seed and restore afterwards.
    pub fn with_seed_scope<T>(&mut self, seed: u64, f: impl FnOnce(&mut Self) -> T) -> T {
        let mut scope = self.seed_scope(seed);
        f(&mut scope)
    }
}

impl<S: RandomSource> RandomSource for RandomContext<S> {
    type Snapshot = S::Snapshot;

    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.source.reseed(seed);
    }

    fn snapshot(&self) -> S::Snapshot {
        self.source.snapshot()
    }

    /// Restores the generator stream only; the recorded seed is managed
    /// by the seed-scope machinery.
    fn restore(&mut self, snapshot: S::Snapshot) {
        self.source.restore(snapshot);
    }
}

/// RAII guard for a seed scope. Restores the enclosing state on drop.
pub struct SeedScope<'a, S: RandomSource> {
    ctx: &'a mut RandomContext<S>,
}

impl<S: RandomSource> Deref for SeedScope<'_, S> {
    type Target = RandomContext<S>;

    fn deref(&self) -> &RandomContext<S> {
        self.ctx
    }
}

impl<S: RandomSource> DerefMut for SeedScope<'_, S> {
    fn deref_mut(&mut self) -> &mut RandomContext<S> {
        self.ctx
    }
}

impl<S: RandomSource> Drop for SeedScope<'_, S> {
    fn drop(&mut self) {
        self.ctx.end_seed_scope();
    }
}
