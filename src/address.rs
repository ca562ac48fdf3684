//! Address generation: building numbers, streets, cities, postal codes
//! and geographic coordinates.

use forge_core::{fill_template, float_with_precision, pick, GenError, RandomSource, Template};
use forge_locales::LocaleData;

/// Decimal digits carried by generated coordinates.
///
/// A domain policy, not a sampler default: four digits puts neighbouring
/// coordinates about eleven metres apart, plenty for fake map pins.
pub const GEO_PRECISION: u32 = 4;

const BUILDING_NUMBER_TEMPLATES: &[&str] = &["#", "##", "###", "####"];

/// Generate a building number of one to four digits, never starting
/// with zero.
pub fn building_number<R: RandomSource>(rng: &mut R) -> Result<String, GenError> {
    let template = *pick(rng, BUILDING_NUMBER_TEMPLATES)?;
    Ok(fill_template(rng, template))
}

/// Pick a street name from the locale dataset.
pub fn street_name<R: RandomSource>(
    rng: &mut R,
    locale: &LocaleData,
) -> Result<&'static str, GenError> {
    pick(rng, locale.street_names).map(|street| *street)
}

/// Compose a street address: building number and street name.
pub fn street_address<R: RandomSource>(
    rng: &mut R,
    locale: &LocaleData,
) -> Result<String, GenError> {
    let number = building_number(rng)?;
    let street = street_name(rng, locale)?;
    Ok(format!("{number} {street}"))
}

/// Pick a city from the locale dataset.
pub fn city<R: RandomSource>(rng: &mut R, locale: &LocaleData) -> Result<&'static str, GenError> {
    pick(rng, locale.cities).map(|city| *city)
}

/// Generate a five-digit postal code. Postal codes may begin with zero.
pub fn zip_code<R: RandomSource>(rng: &mut R) -> Result<String, GenError> {
    Ok(Template::parse("#####").allow_leading_zero(true).realize(rng))
}

/// Generate a latitude in `[-90, 90]` at [`GEO_PRECISION`] digits.
pub fn latitude<R: RandomSource>(rng: &mut R) -> Result<f64, GenError> {
    float_with_precision(rng, -90.0, 90.0, GEO_PRECISION)
}

/// Generate a longitude in `[-180, 180]` at [`GEO_PRECISION`] digits.
pub fn longitude<R: RandomSource>(rng: &mut R) -> Result<f64, GenError> {
    float_with_precision(rng, -180.0, 180.0, GEO_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::RandomContext;
    use forge_locales::lookup_or_default;

    #[test]
    fn test_building_number_never_starts_with_zero() {
        let mut ctx = RandomContext::with_seed(42);
        for _ in 0..1000 {
            let number = building_number(&mut ctx).unwrap();
            assert!((1..=4).contains(&number.len()));
            assert!(number.chars().all(|c| c.is_ascii_digit()));
            assert!(!number.starts_with('0'), "leading zero in {number}");
        }
    }

    #[test]
    fn test_street_address_shape() {
        let mut ctx = RandomContext::with_seed(42);
        let locale = lookup_or_default("en");

        let address = street_address(&mut ctx, locale).unwrap();
        let (number, street) = address.split_once(' ').unwrap();
        assert!(number.chars().all(|c| c.is_ascii_digit()));
        assert!(locale.street_names.contains(&street));
    }

    #[test]
    fn test_zip_code_allows_leading_zero() {
        let mut ctx = RandomContext::with_seed(42);

        let mut saw_leading_zero = false;
        for _ in 0..1000 {
            let zip = zip_code(&mut ctx).unwrap();
            assert_eq!(zip.len(), 5);
            assert!(zip.chars().all(|c| c.is_ascii_digit()));
            saw_leading_zero |= zip.starts_with('0');
        }
        assert!(saw_leading_zero);
    }

    #[test]
    fn test_coordinates_in_bounds() {
        let mut ctx = RandomContext::with_seed(42);
        let scale = 10f64.powi(GEO_PRECISION as i32);

        for _ in 0..200 {
            let lat = latitude(&mut ctx).unwrap();
            assert!((-90.0..=90.0).contains(&lat));
            let scaled = lat * scale;
            assert!((scaled - scaled.round()).abs() < 1e-6);

            let lon = longitude(&mut ctx).unwrap();
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let locale = lookup_or_default("fr");

        let mut ctx1 = RandomContext::with_seed(42);
        let mut ctx2 = RandomContext::with_seed(42);
        for _ in 0..20 {
            assert_eq!(
                street_address(&mut ctx1, locale).unwrap(),
                street_address(&mut ctx2, locale).unwrap()
            );
        }
    }
}
