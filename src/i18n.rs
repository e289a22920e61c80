//! Internationalization (i18n) module
//!
//! Translation catalogs live in `locales/*.yml` and are compiled in by
//! `rust-i18n`. The active language is never stored globally: callers pass
//! the locale code explicitly to `t!(key, locale = code)`.
//! Log messages remain in English.

use crate::error::{Error, Result};

/// Fallback language
pub const DEFAULT_LOCALE: &str = "en";

/// A supported interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleOption {
    /// Language code, e.g. `es`
    pub code: &'static str,
    /// Translation key of the language's display name
    pub name_key: &'static str,
}

/// Supported languages, in menu order
pub const LOCALES: [LocaleOption; 2] = [
    LocaleOption {
        code: "en",
        name_key: "language.english",
    },
    LocaleOption {
        code: "es",
        name_key: "language.spanish",
    },
];

/// Reduce a system locale such as `es_AR.UTF-8` or `en-US` to a supported code
pub fn normalize(locale: &str) -> Option<&'static str> {
    let lowered = locale.trim().to_lowercase();
    let language = lowered.split(['-', '_', '.']).next().unwrap_or_default();
    LOCALES.iter().find(|l| l.code == language).map(|l| l.code)
}

/// Validate a user-supplied language code
pub fn parse_locale(code: &str) -> Result<&'static str> {
    normalize(code).ok_or_else(|| Error::UnsupportedLocale(code.to_string()))
}

/// Detect the interface language from the operating system
pub fn detect_locale() -> &'static str {
    sys_locale::get_locale()
        .as_deref()
        .and_then(normalize)
        .unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_i18n::t;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("en-US"), Some("en"));
        assert_eq!(normalize("es_AR.UTF-8"), Some("es"));
        assert_eq!(normalize("ES"), Some("es"));
        assert_eq!(normalize("fr-FR"), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn test_parse_locale_rejects_unknown() {
        assert_eq!(parse_locale("es").unwrap(), "es");
        assert!(matches!(
            parse_locale("de"),
            Err(Error::UnsupportedLocale(code)) if code == "de"
        ));
    }

    #[test]
    fn test_detect_locale_is_supported() {
        let code = detect_locale();
        assert!(LOCALES.iter().any(|l| l.code == code));
    }

    #[test]
    fn test_english_translation() {
        assert_eq!(t!("menu.choose_language", locale = "en"), "Choose language");
    }

    #[test]
    fn test_spanish_translation() {
        assert_eq!(t!("menu.choose_language", locale = "es"), "Elige un idioma");
    }

    #[test]
    fn test_every_language_has_a_name() {
        for option in LOCALES {
            for code in LOCALES.map(|l| l.code) {
                let name = t!(option.name_key, locale = code);
                assert_ne!(name, option.name_key, "{} missing in {}", option.name_key, code);
            }
        }
    }
}
