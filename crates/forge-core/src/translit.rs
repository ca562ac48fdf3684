//! Unicode-to-ASCII transliteration with a deterministic fallback.
//!
//! Identity-generating consumers (usernames, email local parts) need an
//! ASCII rendering of arbitrary input. Characters are resolved through an
//! externally supplied [`TransliterationMap`]; anything unmapped keeps the
//! ASCII content of its compatibility decomposition, and anything left
//! over is dropped. When nothing survives — entirely CJK or emoji input —
//! the fallback is a short hash token that is a pure function of the
//! input bytes, so identical inputs produce identical tokens within a run
//! and across runs, independent of any PRNG state.

use std::collections::HashMap;

use sha2::{Digest, Sha256};
use unicode_normalization::char::decompose_compatible;

/// Length of the hashed fallback token.
pub const FALLBACK_TOKEN_LEN: usize = 6;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Immutable character-to-ASCII mapping.
///
/// Built once at startup from an external dataset and shared read-only by
/// all consumers.
#[derive(Debug, Clone, Default)]
pub struct TransliterationMap {
    entries: HashMap<char, String>,
}

impl TransliterationMap {
    /// Build a map from character/replacement pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(c, replacement)| (c, replacement.into()))
                .collect(),
        }
    }

    /// Look up the replacement for a character.
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    /// Number of mapped characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Convert `input` to its ASCII rendering.
///
/// ASCII characters pass through unchanged. Non-ASCII characters are
/// resolved through `map`, falling back to the ASCII portion of their
/// NFKD decomposition (which strips accents from Latin letters); a
/// character with neither is dropped.
pub fn transliterate(input: &str, map: &TransliterationMap) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(replacement) = map.lookup(c) {
            out.push_str(replacement);
        } else {
            decompose_compatible(c, |decomposed| {
                if decomposed.is_ascii() {
                    out.push(decomposed);
                }
            });
        }
    }
    out
}

/// Return `candidate` unless it is empty or whitespace-only, in which
/// case return the deterministic fallback token for `original`.
pub fn ensure_nonempty(candidate: &str, original: &str) -> String {
    if candidate.trim().is_empty() {
        fallback_token(original)
    } else {
        candidate.to_string()
    }
}

/// Deterministic short token for input with no usable transliteration.
///
/// [`FALLBACK_TOKEN_LEN`] lowercase alphanumerics derived from the
/// SHA-256 digest of the input bytes. Never consults the PRNG.
pub fn fallback_token(original: &str) -> String {
    let digest = Sha256::digest(original.as_bytes());
    let mut acc = 0u64;
    for byte in digest.iter().take(8) {
        acc = (acc << 8) | u64::from(*byte);
    }

    let base = TOKEN_ALPHABET.len() as u64;
    let mut token = String::with_capacity(FALLBACK_TOKEN_LEN);
    for _ in 0..FALLBACK_TOKEN_LEN {
        token.push(char::from(TOKEN_ALPHABET[(acc % base) as usize]));
        acc /= base;
    }
    token
}
