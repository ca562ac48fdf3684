//! Error types for the value-generation core.
//!
//! Every invariant violation is a programmer error surfaced immediately at
//! the point of detection, with the offending inputs in the message so a
//! failing call can be reproduced. No component catches and retries: a
//! failure must be as reproducible as a success.

/// Error type for generation operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenError {
    /// Lower bound exceeds upper bound, or a scaled range cannot be
    /// represented.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Selection requested over zero candidates.
    #[error("no candidates to select from")]
    EmptyInput,

    /// Without-replacement pick count exceeds the population size.
    #[error("cannot select {requested} distinct values from {available} candidates")]
    InvalidCount {
        /// Number of distinct values requested
        requested: usize,
        /// Number of candidates available
        available: usize,
    },

    /// A constraint (multiple-of, decimal precision) has no satisfying
    /// value in the requested range.
    #[error("no valid value: {0}")]
    NoValidValue(String),

    /// Pattern grammar exceeds the supported regex subset.
    #[error("unsupported pattern: {0}")]
    UnsupportedPattern(String),

    /// Option weight is not positive and finite.
    #[error("invalid weight {0}: weights must be positive and finite")]
    InvalidWeight(f64),
}
