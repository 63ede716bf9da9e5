#![allow(dead_code)]

use msgrepo::{FixedLocaleProvider, Locale, Repository, SearchPathSource};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// A repository over the fixture catalogs with English as current and trace locale.
pub fn repository() -> Repository {
    Repository::builder()
        .source(Arc::new(SearchPathSource::new([fixtures_dir()])))
        .locale_provider(Arc::new(FixedLocaleProvider(Locale::new("en"))))
        .trace_locale(Locale::new("en"))
        .build()
}

pub fn locale(language: &str, country: &str, variant: &str) -> Locale {
    Locale::from_parts(language, country, variant)
}
