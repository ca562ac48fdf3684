//! Placeholder-template string generation.
//!
//! Templates use `#` for a digit, `?` for a lowercase letter and `*` for a
//! lowercase alphanumeric; every other character passes through literally.
//! Number strings suppress a leading zero by default, so a generated
//! building number never reads "042".

use crate::source::RandomSource;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALPHANUMERICS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// One template position: a placeholder or a literal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternToken {
    /// `#`: a decimal digit
    Digit,
    /// `?`: a lowercase letter
    Letter,
    /// `*`: a lowercase letter or digit
    Alphanumeric,
    /// Any other character, emitted unchanged
    Literal(char),
}

/// An ordered sequence of tokens, consumed left to right. Each
/// placeholder is resolved independently against the random source.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    tokens: Vec<PatternToken>,
    allow_leading_zero: bool,
}

impl Template {
    /// Parse a template string. Never fails: unrecognized characters are
    /// literals.
    pub fn parse(pattern: &str) -> Self {
        let tokens = pattern
            .chars()
            .map(|c| match c {
                '#' => PatternToken::Digit,
                '?' => PatternToken::Letter,
                '*' => PatternToken::Alphanumeric,
                other => PatternToken::Literal(other),
            })
            .collect();
        Self {
            tokens,
            allow_leading_zero: false,
        }
    }

    /// Permit the first digit placeholder to resolve to zero.
    pub fn allow_leading_zero(mut self, allow: bool) -> Self {
        self.allow_leading_zero = allow;
        self
    }

    /// The parsed token sequence.
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    /// Resolve every placeholder and return the generated string.
    pub fn realize<R: RandomSource>(&self, rng: &mut R) -> String {
        let mut out = String::with_capacity(self.tokens.len());
        let mut suppress_zero = !self.allow_leading_zero;
        for token in &self.tokens {
            match token {
                PatternToken::Digit => {
                    let low = u64::from(suppress_zero);
                    suppress_zero = false;
                    let digit = low + rng.next_below(10 - low);
                    out.push(char::from(b'0' + digit as u8));
                }
                PatternToken::Letter => {
                    let index = rng.next_below(LETTERS.len() as u64) as usize;
                    out.push(char::from(LETTERS[index]));
                }
                PatternToken::Alphanumeric => {
                    let index = rng.next_below(ALPHANUMERICS.len() as u64) as usize;
                    out.push(char::from(ALPHANUMERICS[index]));
                }
                PatternToken::Literal(c) => out.push(*c),
            }
        }
        out
    }
}

/// Parse and realize a template in one step, with the default
/// leading-zero suppression.
pub fn fill_template<R: RandomSource>(rng: &mut R, pattern: &str) -> String {
    Template::parse(pattern).realize(rng)
}

/// Generate a string of exactly `len` decimal digits.
///
/// Unless `allow_leading_zero` is set, the first digit is drawn from 1-9.
pub fn digit_string<R: RandomSource>(rng: &mut R, len: usize, allow_leading_zero: bool) -> String {
    let mut out = String::with_capacity(len);
    for position in 0..len {
        let low = u64::from(position == 0 && !allow_leading_zero);
        let digit = low + rng.next_below(10 - low);
        out.push(char::from(b'0' + digit as u8));
    }
    out
}
