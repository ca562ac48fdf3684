//! Bounded numeric sampling.
//!
//! All bounds are inclusive. A degenerate range (`min == max`) returns
//! that value with probability 1; an inverted range is an error.

use crate::error::GenError;
use crate::source::RandomSource;

/// Sample a uniform integer in `[min, max]`.
pub fn int_range<R: RandomSource>(rng: &mut R, min: i64, max: i64) -> Result<i64, GenError> {
    if min > max {
        return Err(GenError::InvalidRange(format!("min {min} > max {max}")));
    }
    if min == max {
        return Ok(min);
    }

    let span = max.wrapping_sub(min) as u64;
    if span == u64::MAX {
        // Full i64 domain: every 64-bit draw is already in range.
        return Ok(rng.next_u64() as i64);
    }
    let offset = rng.next_below(span + 1);
    Ok(min.wrapping_add(offset as i64))
}

/// Sample a uniform integer in `[min, max]` divisible by `multiple_of`.
///
/// Negative steps are normalized by magnitude, since `x % -n == 0` exactly
/// when `x % n == 0`. A zero step, or a range containing no multiple,
/// fails with [`GenError::NoValidValue`].
pub fn int_multiple_of<R: RandomSource>(
    rng: &mut R,
    min: i64,
    max: i64,
    multiple_of: i64,
) -> Result<i64, GenError> {
    if min > max {
        return Err(GenError::InvalidRange(format!("min {min} > max {max}")));
    }
    if multiple_of == 0 {
        return Err(GenError::NoValidValue(format!(
            "no multiple of 0 in [{min}, {max}]"
        )));
    }

    // Work in i128 so |i64::MIN| and full-width spans stay representable.
    let step = (multiple_of as i128).abs();
    let lo = {
        let quotient = (min as i128).div_euclid(step);
        if (min as i128).rem_euclid(step) == 0 {
            quotient
        } else {
            quotient + 1
        }
    };
    let hi = (max as i128).div_euclid(step);
    if lo > hi {
        return Err(GenError::NoValidValue(format!(
            "no multiple of {multiple_of} in [{min}, {max}]"
        )));
    }

    let index = int_range(rng, lo as i64, hi as i64)?;
    Ok((index as i128 * step) as i64)
}

/// Sample a uniform float in `[min, max]`.
///
/// Bounds must be finite and ordered; otherwise the call fails with
/// [`GenError::InvalidRange`].
pub fn float_range<R: RandomSource>(rng: &mut R, min: f64, max: f64) -> Result<f64, GenError> {
    check_float_bounds(min, max)?;
    if min == max {
        return Ok(min);
    }

    let span = max - min;
    if span.is_finite() {
        Ok(min + rng.next_f64() * span)
    } else {
        // Span exceeds f64::MAX; sample around the midpoint at half scale.
        let mid = min / 2.0 + max / 2.0;
        let half_span = max / 2.0 - min / 2.0;
        Ok(mid + (rng.next_f64() - 0.5) * 2.0 * half_span)
    }
}

/// Sample a uniform float in `[min, max]` carrying at most `precision`
/// fractional decimal digits.
///
/// The draw is an integer over the decimal-scaled range, divided back
/// down, so the result is exact at the requested precision. Fails with
/// [`GenError::InvalidRange`] if the scaled range cannot be represented,
/// and [`GenError::NoValidValue`] if the range is too narrow to contain
/// any value at that precision.
pub fn float_with_precision<R: RandomSource>(
    rng: &mut R,
    min: f64,
    max: f64,
    precision: u32,
) -> Result<f64, GenError> {
    check_float_bounds(min, max)?;

    let scale = 10f64.powi(precision as i32);
    let scaled_min = (min * scale).ceil();
    let scaled_max = (max * scale).floor();
    if !scaled_min.is_finite()
        || !scaled_max.is_finite()
        || scaled_min < i64::MIN as f64
        || scaled_max > i64::MAX as f64
    {
        return Err(GenError::InvalidRange(format!(
            "range [{min}, {max}] overflows when scaled to {precision} decimal digits"
        )));
    }
    if scaled_min > scaled_max {
        return Err(GenError::NoValidValue(format!(
            "no value with {precision} decimal digits in [{min}, {max}]"
        )));
    }

    let scaled = int_range(rng, scaled_min as i64, scaled_max as i64)?;
    Ok(scaled as f64 / scale)
}

fn check_float_bounds(min: f64, max: f64) -> Result<(), GenError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GenError::InvalidRange(format!(
            "non-finite bound in [{min}, {max}]"
        )));
    }
    if min > max {
        return Err(GenError::InvalidRange(format!("min {min} > max {max}")));
    }
    Ok(())
}
