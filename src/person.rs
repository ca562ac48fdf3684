//! Person name generation.

use forge_core::{pick, GenError, RandomSource};
use forge_locales::LocaleData;

/// Pick a given name from the locale dataset.
pub fn first_name<R: RandomSource>(
    rng: &mut R,
    locale: &LocaleData,
) -> Result<&'static str, GenError> {
    pick(rng, locale.first_names).map(|name| *name)
}

/// Pick a family name from the locale dataset.
pub fn last_name<R: RandomSource>(
    rng: &mut R,
    locale: &LocaleData,
) -> Result<&'static str, GenError> {
    pick(rng, locale.last_names).map(|name| *name)
}

/// Compose a full name from independently picked given and family names.
pub fn full_name<R: RandomSource>(rng: &mut R, locale: &LocaleData) -> Result<String, GenError> {
    let first = first_name(rng, locale)?;
    let last = last_name(rng, locale)?;
    Ok(format!("{first} {last}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::RandomContext;
    use forge_locales::lookup_or_default;

    #[test]
    fn test_names_come_from_dataset() {
        let mut ctx = RandomContext::with_seed(42);
        let locale = lookup_or_default("en");

        for _ in 0..50 {
            let first = first_name(&mut ctx, locale).unwrap();
            assert!(locale.first_names.contains(&first));
            let last = last_name(&mut ctx, locale).unwrap();
            assert!(locale.last_names.contains(&last));
        }
    }

    #[test]
    fn test_full_name_shape() {
        let mut ctx = RandomContext::with_seed(42);
        let locale = lookup_or_default("en");

        let name = full_name(&mut ctx, locale).unwrap();
        let mut parts = name.split(' ');
        assert!(locale.first_names.contains(&parts.next().unwrap()));
        assert!(locale.last_names.contains(&parts.next().unwrap()));
    }

    #[test]
    fn test_deterministic_generation() {
        let locale = lookup_or_default("fr");

        let mut ctx1 = RandomContext::with_seed(42);
        let mut ctx2 = RandomContext::with_seed(42);
        for _ in 0..20 {
            assert_eq!(
                full_name(&mut ctx1, locale).unwrap(),
                full_name(&mut ctx2, locale).unwrap()
            );
        }
    }
}
