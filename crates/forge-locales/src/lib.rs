//! Locale datasets for the mockforge library.
//!
//! Each locale supplies immutable arrays of source material — names,
//! mail domains, street names, cities — that the domain modules pick
//! from. The arrays are static lookup tables: the generation core only
//! ever reads them. Locales that write names outside ASCII (`ru`) are
//! included deliberately so the transliteration fallback path is
//! exercised by real data.

mod en;
mod fr;
mod ru;
mod translit;

pub use translit::transliteration_map;

/// Immutable dataset for one locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleData {
    /// Locale code ("en", "fr", ...)
    pub code: &'static str,
    /// Given names
    pub first_names: &'static [&'static str],
    /// Family names
    pub last_names: &'static [&'static str],
    /// Mail domains (reserved documentation/test domains only)
    pub domains: &'static [&'static str],
    /// Street names, without numbers
    pub street_names: &'static [&'static str],
    /// City names
    pub cities: &'static [&'static str],
}

/// Look up a locale by code. Matching is case-insensitive.
pub fn lookup(code: &str) -> Option<&'static LocaleData> {
    match code.to_ascii_lowercase().as_str() {
        "en" => Some(&en::EN),
        "fr" => Some(&fr::FR),
        "ru" => Some(&ru::RU),
        _ => None,
    }
}

/// Look up a locale by code, falling back to `en` for unknown codes.
pub fn lookup_or_default(code: &str) -> &'static LocaleData {
    lookup(code).unwrap_or(&en::EN)
}

/// The default locale.
pub fn default_locale() -> &'static LocaleData {
    &en::EN
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::transliterate;

    #[test]
    fn test_lookup_known_locales() {
        assert_eq!(lookup("en").unwrap().code, "en");
        assert_eq!(lookup("fr").unwrap().code, "fr");
        assert_eq!(lookup("ru").unwrap().code, "ru");
        assert_eq!(lookup("EN").unwrap().code, "en");
    }

    #[test]
    fn test_lookup_unknown_locale() {
        assert!(lookup("xx").is_none());
        assert_eq!(lookup_or_default("xx").code, "en");
    }

    #[test]
    fn test_datasets_are_populated() {
        for locale in [lookup("en"), lookup("fr"), lookup("ru")] {
            let locale = locale.unwrap();
            assert!(!locale.first_names.is_empty(), "{}", locale.code);
            assert!(!locale.last_names.is_empty(), "{}", locale.code);
            assert!(!locale.domains.is_empty(), "{}", locale.code);
            assert!(!locale.street_names.is_empty(), "{}", locale.code);
            assert!(!locale.cities.is_empty(), "{}", locale.code);
        }
    }

    #[test]
    fn test_transliteration_map_covers_cyrillic() {
        let map = transliteration_map();
        assert_eq!(map.lookup('ж'), Some("zh"));
        assert_eq!(map.lookup('Щ'), Some("Shch"));
        assert!(map.lookup('q').is_none());
    }

    #[test]
    fn test_all_names_transliterate_to_ascii() {
        let map = transliteration_map();
        for locale in [lookup("en"), lookup("fr"), lookup("ru")] {
            let locale = locale.unwrap();
            for name in locale.first_names.iter().chain(locale.last_names) {
                let ascii = transliterate(name, map);
                assert!(!ascii.trim().is_empty(), "no rendering for {name}");
                assert!(ascii.is_ascii());
            }
        }
    }
}
