//! Seeded value-generation core for the mockforge library.
//!
//! Everything above this crate — names, addresses, internet artifacts —
//! is string assembly over four primitive call classes provided here:
//! bounded numeric sampling, finite-set choice, templated string
//! generation, and transliteration fallback. All of them draw from the
//! [`RandomSource`] capability trait, so a context with a given seed
//! reproduces the same outputs for the same call sequence, byte for byte.
//!
//! # Architecture
//!
//! ```text
//! RandomContext (seed lifecycle, scoped save/restore)
//!        │ implements
//!        ▼
//! RandomSource (next_u64 / next_f64 / next_below)
//!        │ drawn on by
//!        ▼
//! ┌──────────────┬──────────────┬───────────────┬───────────────┐
//! │ sample::     │ sample::     │ sample::      │ translit      │
//! │ numeric      │ choice       │ pattern/regex │ (PRNG-free)   │
//! └──────────────┴──────────────┴───────────────┴───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use forge_core::{int_range, pick, RandomContext};
//!
//! let mut ctx = RandomContext::with_seed(42);
//! let age = int_range(&mut ctx, 18, 80).unwrap();
//! let color = pick(&mut ctx, &["red", "green", "blue"]).unwrap();
//! assert!((18..=80).contains(&age));
//!
//! // The same seed replays the same draws.
//! let mut replay = RandomContext::with_seed(42);
//! assert_eq!(int_range(&mut replay, 18, 80).unwrap(), age);
//! assert_eq!(pick(&mut replay, &["red", "green", "blue"]).unwrap(), color);
//! ```

pub mod context;
pub mod error;
pub mod sample;
pub mod source;
pub mod translit;

// Re-exports for convenience
pub use context::{RandomContext, SeedScope};
pub use error::GenError;
pub use sample::choice::{pick, pick_set, pick_weighted, shuffle, Weighted};
pub use sample::numeric::{float_range, float_with_precision, int_multiple_of, int_range};
pub use sample::pattern::{digit_string, fill_template, PatternToken, Template};
pub use sample::regex::from_regex;
pub use source::{entropy_seed, ChaChaSnapshot, ChaChaSource, RandomSource};
pub use translit::{
    ensure_nonempty, fallback_token, transliterate, TransliterationMap, FALLBACK_TOKEN_LEN,
};
