use crate::error::LocaleParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A language with an optional country and an optional variant.
///
/// Empty components are stored as `None`, so `Locale::from_parts("de", "", "JEAF")`
/// has no country. Languages are lower-cased and countries upper-cased; variants
/// are kept as written.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "RawLocale")]
pub struct Locale {
    language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    variant: Option<String>,
}

#[derive(Deserialize)]
struct RawLocale {
    language: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    variant: Option<String>,
}

impl TryFrom<RawLocale> for Locale {
    type Error = LocaleParseError;

    fn try_from(raw: RawLocale) -> Result<Self, Self::Error> {
        Locale::try_from_parts(
            &raw.language,
            raw.country.as_deref().unwrap_or_default(),
            raw.variant.as_deref().unwrap_or_default(),
        )
    }
}

impl Locale {
    /// A language-only locale.
    ///
    /// # Panics
    ///
    /// Panics if `language` is not a valid language subtag. Use [`str::parse`]
    /// or [`Locale::try_from_parts`] for untrusted input.
    pub fn new(language: &str) -> Self {
        Self::from_parts(language, "", "")
    }

    /// Builds a locale from its three components; empty strings mean absent.
    ///
    /// # Panics
    ///
    /// Panics on invalid components, like [`Locale::new`].
    pub fn from_parts(language: &str, country: &str, variant: &str) -> Self {
        match Self::try_from_parts(language, country, variant) {
            Ok(locale) => locale,
            Err(err) => panic!("invalid locale: {err}"),
        }
    }

    pub fn try_from_parts(
        language: &str,
        country: &str,
        variant: &str,
    ) -> Result<Self, LocaleParseError> {
        let language = language.trim();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LocaleParseError::InvalidLanguage(language.to_string()));
        }

        let country = country.trim();
        if !country.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LocaleParseError::InvalidCountry(country.to_string()));
        }

        let variant = variant.trim();
        if !variant
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(LocaleParseError::InvalidVariant(variant.to_string()));
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            country: (!country.is_empty()).then(|| country.to_ascii_uppercase()),
            variant: (!variant.is_empty()).then(|| variant.to_string()),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Returns a copy with the country replaced.
    pub fn with_country(mut self, country: &str) -> Self {
        let country = country.trim();
        self.country = (!country.is_empty()).then(|| country.to_ascii_uppercase());
        self
    }

    /// Returns a copy with the variant replaced.
    pub fn with_variant(mut self, variant: &str) -> Self {
        let variant = variant.trim();
        self.variant = (!variant.is_empty()).then(|| variant.to_string());
        self
    }

    /// The same language and country, without a variant.
    pub fn without_variant(&self) -> Self {
        Self {
            language: self.language.clone(),
            country: self.country.clone(),
            variant: None,
        }
    }

    /// The bare language.
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            country: None,
            variant: None,
        }
    }

    /// Candidate locales to try for this request, most specific first.
    ///
    /// See [`crate::fallback::fallback_locales`].
    pub fn fallback_chain(&self) -> Vec<Locale> {
        crate::fallback::fallback_locales(self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        match (&self.country, &self.variant) {
            (None, None) => Ok(()),
            (Some(country), None) => write!(f, "_{country}"),
            (country, Some(variant)) => {
                write!(f, "_{}_{variant}", country.as_deref().unwrap_or_default())
            },
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Accepts `de`, `de_CH`, `de_CH_JEAF`, `de__JEAF`, `de-CH` and POSIX
    /// forms such as `de_CH.UTF-8@euro`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let base = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or_default();
        if base.is_empty() {
            return Err(LocaleParseError::Empty);
        }

        let mut parts = base.splitn(3, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.next().unwrap_or_default();

        Self::try_from_parts(language, country, variant)
    }
}

impl From<&LanguageIdentifier> for Locale {
    fn from(lang: &LanguageIdentifier) -> Self {
        let variant = lang
            .variants()
            .map(|v| v.as_str().to_string())
            .collect::<Vec<_>>()
            .join("_");
        Self {
            language: lang.language.as_str().to_ascii_lowercase(),
            country: lang.region.map(|r| r.as_str().to_ascii_uppercase()),
            variant: (!variant.is_empty()).then_some(variant),
        }
    }
}
