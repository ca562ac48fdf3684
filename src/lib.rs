//! Deterministic fake data generation for testing and prototyping.
//!
//! Given a seed, mockforge produces reproducible fake values — names,
//! addresses, email addresses, IP addresses, coordinates — plus a YAML
//! blueprint layer for generating whole records. The same seed and call
//! sequence always produce byte-identical output, which is what makes
//! generated fixtures usable in snapshot tests.
//!
//! # Architecture
//!
//! ```text
//! Blueprint (YAML)            MockForge (facade)
//!        │                          │
//!        ▼                          ▼
//! ┌─────────────────┐      ┌──────────────────────┐
//! │ RecordGenerator │      │ domain modules:      │
//! │  - ctx (seeded) │─────▶│ person / internet /  │
//! │  - index        │      │ address / time/ident │
//! └─────────────────┘      └──────────┬───────────┘
//!                                     │ draw from
//!                                     ▼
//!                    forge-core (samplers, templates,
//!                    transliteration) + forge-locales
//!                    (datasets, transliteration table)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mockforge::{Blueprint, RecordGenerator};
//!
//! let blueprint = Blueprint::from_yaml(r#"
//! seed: 42
//! fields:
//!   - name: id
//!     generator:
//!       type: uuid_v4
//!   - name: email
//!     generator:
//!       type: email
//!   - name: age
//!     generator:
//!       type: int_range
//!       min: 18
//!       max: 80
//! "#).unwrap();
//!
//! let mut generator = RecordGenerator::new(blueprint);
//! let record = generator.next_record().unwrap();
//! assert!((18..=80).contains(&record.get("age").unwrap().as_i64().unwrap()));
//! ```

pub mod address;
pub mod blueprint;
pub mod generator;
pub mod ident;
pub mod internet;
pub mod person;
pub mod time;
pub mod value;

// Re-exports for convenience
pub use blueprint::{Blueprint, BlueprintError, FieldDef, FieldSpec, Record, RecordGenerator};
pub use generator::MockForge;
pub use value::Value;

// Core surface, re-exported so consumers rarely need forge-core directly
pub use forge_core::{
    digit_string, ensure_nonempty, entropy_seed, fallback_token, fill_template, float_range,
    float_with_precision, from_regex, int_multiple_of, int_range, pick, pick_set, pick_weighted,
    shuffle, transliterate, ChaChaSource, GenError, PatternToken, RandomContext, RandomSource,
    SeedScope, Template, TransliterationMap, Weighted,
};
pub use forge_locales::{lookup as lookup_locale, lookup_or_default, LocaleData};
