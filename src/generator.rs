//! The top-level generator facade.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use forge_core::{GenError, RandomContext};
use forge_locales::{default_locale, lookup_or_default, LocaleData};

use crate::{address, ident, internet, person, time};

/// Deterministic fake-data generator.
///
/// Owns a seeded [`RandomContext`] and a locale, and exposes the domain
/// generators as methods. There is no shared global instance: every
/// `MockForge` is independent, so two instances never interleave their
/// streams and each can live on its own thread.
///
/// # Example
///
/// ```rust
/// use mockforge::MockForge;
///
/// let mut forge = MockForge::with_seed(42);
/// let name = forge.full_name().unwrap();
/// let email = forge.email().unwrap();
///
/// // Re-seeding replays the exact same values.
/// forge.reseed(Some(42));
/// assert_eq!(forge.full_name().unwrap(), name);
/// assert_eq!(forge.email().unwrap(), email);
/// ```
pub struct MockForge {
    ctx: RandomContext,
    locale: &'static LocaleData,
}

impl MockForge {
    /// Create a generator seeded from process entropy.
    ///
    /// The seed actually used is available via [`seed`](Self::seed).
    pub fn new() -> Self {
        Self {
            ctx: RandomContext::from_entropy(),
            locale: default_locale(),
        }
    }

    /// Create a generator with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            ctx: RandomContext::with_seed(seed),
            locale: default_locale(),
        }
    }

    /// Switch the locale, falling back to `en` for unknown codes.
    pub fn with_locale(mut self, code: &str) -> Self {
        self.locale = lookup_or_default(code);
        self
    }

    /// The active locale dataset.
    pub fn locale(&self) -> &'static LocaleData {
        self.locale
    }

    /// The seed driving the current stream.
    pub fn seed(&self) -> u64 {
        self.ctx.seed()
    }

    /// Apply an explicit seed, or a fresh entropy seed when `None`.
    /// Returns the seed actually used.
    pub fn reseed(&mut self, seed: Option<u64>) -> u64 {
        self.ctx.set_seed(seed)
    }

    /// Run a closure under a scoped seed; the prior stream position is
    /// restored afterwards, so the scope cannot disturb later draws.
    pub fn with_seed_scope<T>(&mut self, seed: u64, f: impl FnOnce(&mut Self) -> T) -> T {
        self.ctx.begin_seed_scope(seed);
        let out = f(self);
        self.ctx.end_seed_scope();
        out
    }

    /// Borrow the underlying context for direct use of the core
    /// sampling primitives.
    pub fn context(&mut self) -> &mut RandomContext {
        &mut self.ctx
    }

    /// Generate a given name.
    pub fn first_name(&mut self) -> Result<&'static str, GenError> {
        person::first_name(&mut self.ctx, self.locale)
    }

    /// Generate a family name.
    pub fn last_name(&mut self) -> Result<&'static str, GenError> {
        person::last_name(&mut self.ctx, self.locale)
    }

    /// Generate a full name.
    pub fn full_name(&mut self) -> Result<String, GenError> {
        person::full_name(&mut self.ctx, self.locale)
    }

    /// Generate an ASCII username.
    pub fn username(&mut self) -> Result<String, GenError> {
        internet::username(&mut self.ctx, self.locale)
    }

    /// Generate an email address.
    pub fn email(&mut self) -> Result<String, GenError> {
        internet::email(&mut self.ctx, self.locale)
    }

    /// Generate an IPv4 address.
    pub fn ipv4(&mut self) -> Result<String, GenError> {
        internet::ipv4(&mut self.ctx)
    }

    /// Generate a password of the given length.
    pub fn password(&mut self, length: usize) -> Result<String, GenError> {
        internet::password(&mut self.ctx, length)
    }

    /// Generate a building number.
    pub fn building_number(&mut self) -> Result<String, GenError> {
        address::building_number(&mut self.ctx)
    }

    /// Generate a street address.
    pub fn street_address(&mut self) -> Result<String, GenError> {
        address::street_address(&mut self.ctx, self.locale)
    }

    /// Generate a city name.
    pub fn city(&mut self) -> Result<&'static str, GenError> {
        address::city(&mut self.ctx, self.locale)
    }

    /// Generate a postal code.
    pub fn zip_code(&mut self) -> Result<String, GenError> {
        address::zip_code(&mut self.ctx)
    }

    /// Generate a latitude.
    pub fn latitude(&mut self) -> Result<f64, GenError> {
        address::latitude(&mut self.ctx)
    }

    /// Generate a longitude.
    pub fn longitude(&mut self) -> Result<f64, GenError> {
        address::longitude(&mut self.ctx)
    }

    /// Generate a UUID v4 from the stream.
    pub fn uuid(&mut self) -> Uuid {
        ident::uuid_v4(&mut self.ctx)
    }

    /// Generate a timestamp between two instants.
    pub fn datetime_between(
        &mut self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, GenError> {
        time::datetime_between(&mut self.ctx, start, end)
    }
}

impl Default for MockForge {
    fn default() -> Self {
        Self::new()
    }
}
