//! Date/time generation.

use chrono::{DateTime, Utc};
use forge_core::{int_range, GenError, RandomSource};

/// Generate a uniform timestamp between `start` and `end` (inclusive,
/// whole-second resolution). `start` after `end` fails with
/// [`GenError::InvalidRange`].
pub fn datetime_between<R: RandomSource>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<DateTime<Utc>, GenError> {
    let seconds = int_range(rng, start.timestamp(), end.timestamp())?;
    Ok(DateTime::from_timestamp(seconds, 0).unwrap_or(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::RandomContext;

    fn parse(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_datetime_between_containment() {
        let mut ctx = RandomContext::with_seed(42);
        let start = parse("2020-01-01T00:00:00Z");
        let end = parse("2024-12-31T23:59:59Z");

        for _ in 0..100 {
            let value = datetime_between(&mut ctx, start, end).unwrap();
            assert!(value >= start && value <= end);
        }
    }

    #[test]
    fn test_datetime_between_degenerate() {
        let mut ctx = RandomContext::with_seed(42);
        let instant = parse("2022-06-15T12:00:00Z");
        assert_eq!(datetime_between(&mut ctx, instant, instant).unwrap(), instant);
    }

    #[test]
    fn test_datetime_between_inverted() {
        let mut ctx = RandomContext::with_seed(42);
        let start = parse("2024-01-01T00:00:00Z");
        let end = parse("2020-01-01T00:00:00Z");
        assert!(matches!(
            datetime_between(&mut ctx, start, end),
            Err(GenError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_deterministic_generation() {
        let start = parse("2020-01-01T00:00:00Z");
        let end = parse("2024-12-31T23:59:59Z");

        let mut ctx1 = RandomContext::with_seed(42);
        let mut ctx2 = RandomContext::with_seed(42);
        assert_eq!(
            datetime_between(&mut ctx1, start, end).unwrap(),
            datetime_between(&mut ctx2, start, end).unwrap()
        );
    }
}
