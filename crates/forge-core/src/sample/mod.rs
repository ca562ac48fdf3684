//! Sampling primitives over the random-source capability.
//!
//! Each submodule covers one class of draw: bounded numerics, finite-set
//! choice, placeholder templates, and the regex-subset string generator.

pub mod choice;
pub mod numeric;
pub mod pattern;
pub mod regex;
