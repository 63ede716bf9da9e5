use crate::locale::Locale;

/// Returns the ordered candidate list for a requested locale.
///
/// The requested locale comes first, then the same language and country
/// without the variant, then the bare language. Absent components are never
/// widened: a request without a country never yields a candidate carrying one,
/// so a variant-bearing entry is only reachable through an exact match.
pub fn fallback_locales(requested: &Locale) -> Vec<Locale> {
    let mut locales = vec![requested.clone()];

    for candidate in [requested.without_variant(), requested.language_only()] {
        if !locales.contains(&candidate) {
            locales.push(candidate);
        }
    }

    locales
}

/// Picks the first available locale from the fallback chain.
///
/// Returns `None` when only the default template would apply.
pub fn resolve_fallback_locale<'a, I>(requested: &Locale, available: I) -> Option<&'a Locale>
where
    I: IntoIterator<Item = &'a Locale>,
    I::IntoIter: Clone,
{
    let available = available.into_iter();
    fallback_locales(requested)
        .into_iter()
        .find_map(|candidate| available.clone().find(|lang| **lang == candidate))
}
