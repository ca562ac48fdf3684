//! Internet artifact generation: usernames, email addresses, IP
//! addresses, passwords.
//!
//! Usernames and email local parts are derived from locale name data, so
//! non-Latin locales flow through the transliteration fallback: a
//! Cyrillic name romanizes, and a name with no ASCII rendering at all
//! becomes its stable hash token.

use forge_core::{
    digit_string, ensure_nonempty, int_range, pick, shuffle, transliterate, GenError,
    RandomSource, TransliterationMap,
};
use forge_locales::{transliteration_map, LocaleData};

const USERNAME_SEPARATORS: &[&str] = &[".", "_"];

/// Probability of appending a two-digit suffix to a username.
const USERNAME_SUFFIX_CHANCE: f64 = 0.5;

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*";

/// Minimum password length, one position per character class.
const PASSWORD_MIN_LEN: usize = 4;

/// Generate a username from locale name data.
///
/// Both name parts are transliterated, stripped to ASCII alphanumerics
/// and lowercased; a part with no usable rendering falls back to its
/// deterministic hash token. Roughly half of usernames carry a two-digit
/// suffix.
pub fn username<R: RandomSource>(rng: &mut R, locale: &LocaleData) -> Result<String, GenError> {
    let map = transliteration_map();
    let first = username_part(pick(rng, locale.first_names)?, map);
    let last = username_part(pick(rng, locale.last_names)?, map);
    let separator = *pick(rng, USERNAME_SEPARATORS)?;

    let mut name = format!("{first}{separator}{last}");
    if rng.next_f64() < USERNAME_SUFFIX_CHANCE {
        name.push_str(&digit_string(rng, 2, true));
    }
    Ok(name)
}

fn username_part(raw: &str, map: &TransliterationMap) -> String {
    let ascii = transliterate(raw, map);
    let cleaned: String = ascii.chars().filter(char::is_ascii_alphanumeric).collect();
    ensure_nonempty(&cleaned, raw).to_lowercase()
}

/// Pick a mail domain from the locale dataset.
pub fn domain<R: RandomSource>(
    rng: &mut R,
    locale: &LocaleData,
) -> Result<&'static str, GenError> {
    pick(rng, locale.domains).map(|d| *d)
}

/// Generate an email address: username at a locale mail domain.
pub fn email<R: RandomSource>(rng: &mut R, locale: &LocaleData) -> Result<String, GenError> {
    let user = username(rng, locale)?;
    let host = domain(rng, locale)?;
    Ok(format!("{user}@{host}"))
}

/// Generate a dotted-quad IPv4 address.
///
/// First and last octets avoid 0 and 255, which read as network and
/// broadcast addresses.
pub fn ipv4<R: RandomSource>(rng: &mut R) -> Result<String, GenError> {
    let a = int_range(rng, 1, 254)?;
    let b = int_range(rng, 0, 255)?;
    let c = int_range(rng, 0, 255)?;
    let d = int_range(rng, 1, 254)?;
    Ok(format!("{a}.{b}.{c}.{d}"))
}

/// Generate a password of exactly `length` characters containing at
/// least one lowercase letter, uppercase letter, digit and symbol.
///
/// Lengths below four cannot satisfy the class guarantee and fail with
/// [`GenError::InvalidRange`].
pub fn password<R: RandomSource>(rng: &mut R, length: usize) -> Result<String, GenError> {
    if length < PASSWORD_MIN_LEN {
        return Err(GenError::InvalidRange(format!(
            "password length {length} < minimum {PASSWORD_MIN_LEN}"
        )));
    }

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for class in [LOWER, UPPER, DIGITS, SYMBOLS] {
        chars.push(char::from(*pick(rng, class)?));
    }

    let all: Vec<u8> = [LOWER, UPPER, DIGITS, SYMBOLS].concat();
    for _ in PASSWORD_MIN_LEN..length {
        chars.push(char::from(*pick(rng, &all)?));
    }

    // The guaranteed class characters must not sit at fixed positions.
    shuffle(rng, &mut chars);
    Ok(chars.into_iter().collect())
}
