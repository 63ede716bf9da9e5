//! Collaborators consulted for the current locale and user.

use msgrepo_core::Locale;
use std::env;

/// Environment variables consulted for the platform locale, in order.
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Locale used when the platform does not name a usable one.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Supplies the locale used when a caller does not pass one explicitly.
pub trait LocaleProvider: Send + Sync {
    fn current_locale(&self) -> Locale;
}

/// Supplies the name of the user on whose behalf the process is acting.
pub trait PrincipalProvider: Send + Sync {
    fn current_user_name(&self) -> Option<String>;
}

/// Reads the locale from the process environment on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformLocaleProvider;

impl LocaleProvider for PlatformLocaleProvider {
    fn current_locale(&self) -> Locale {
        platform_locale()
    }
}

/// Always returns the same locale.
#[derive(Clone, Debug)]
pub struct FixedLocaleProvider(pub Locale);

impl LocaleProvider for FixedLocaleProvider {
    fn current_locale(&self) -> Locale {
        self.0.clone()
    }
}

/// No user is ever known.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPrincipal;

impl PrincipalProvider for NoPrincipal {
    fn current_user_name(&self) -> Option<String> {
        None
    }
}

/// Always reports the same user.
#[derive(Clone, Debug)]
pub struct FixedPrincipal(pub String);

impl PrincipalProvider for FixedPrincipal {
    fn current_user_name(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// The locale named by `LC_ALL`, `LC_MESSAGES` or `LANG`, else `en`.
pub fn platform_locale() -> Locale {
    let values: Vec<Option<String>> = LOCALE_ENV_VARS
        .iter()
        .map(|name| env::var(name).ok())
        .collect();
    select_locale(values.iter().map(Option::as_deref))
}

/// Picks the first usable locale string; `C` and `POSIX` are skipped.
pub fn select_locale<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Locale {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .filter(|value| {
            let base = value.split(['.', '@']).next().unwrap_or_default();
            base != "C" && base != "POSIX"
        })
        .find_map(|value| value.parse::<Locale>().ok())
        .unwrap_or_else(|| Locale::new(FALLBACK_LANGUAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn select_locale_prefers_first_usable_value() {
        assert_eq!(
            select_locale([None, Some("de_CH.UTF-8"), Some("fr_FR")]),
            Locale::from_parts("de", "CH", "")
        );
    }

    #[test]
    fn select_locale_skips_posix_and_invalid_values() {
        assert_eq!(
            select_locale([Some("C.UTF-8"), Some("POSIX"), Some("12"), Some("nl_NL")]),
            Locale::from_parts("nl", "NL", "")
        );
    }

    #[test]
    fn select_locale_falls_back_to_english() {
        assert_eq!(select_locale([None, Some(""), None]), Locale::new("en"));
    }

    #[test]
    #[serial]
    fn platform_locale_reads_environment() {
        temp_env::with_vars(
            [
                ("LC_ALL", None),
                ("LC_MESSAGES", Some("it_IT.UTF-8")),
                ("LANG", Some("en_US.UTF-8")),
            ],
            || {
                assert_eq!(platform_locale(), Locale::from_parts("it", "IT", ""));
            },
        );
    }

    #[test]
    fn fixed_providers_return_their_values() {
        let locale = FixedLocaleProvider(Locale::new("de"));
        assert_eq!(locale.current_locale(), Locale::new("de"));
        assert_eq!(
            FixedPrincipal("alice".to_string()).current_user_name(),
            Some("alice".to_string())
        );
        assert_eq!(NoPrincipal.current_user_name(), None);
    }
}
