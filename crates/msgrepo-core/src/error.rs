use crate::locale::Locale;
use thiserror::Error;

/// Errors raised while parsing a [`crate::Template`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TemplateError {
    /// A `{` without a matching `}`.
    #[error("unclosed placeholder starting at byte {offset}")]
    UnclosedPlaceholder { offset: usize },

    /// A `}` that does not close a placeholder and is not doubled.
    #[error("unmatched '}}' at byte {offset}")]
    UnmatchedClosingBrace { offset: usize },

    /// A placeholder whose index is empty or not a decimal number.
    #[error("placeholder at byte {offset} has invalid index '{found}'")]
    InvalidIndex { offset: usize, found: String },
}

/// Errors raised while parsing a [`Locale`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum LocaleParseError {
    #[error("locale string is empty")]
    Empty,

    #[error("invalid language '{0}'")]
    InvalidLanguage(String),

    #[error("invalid country '{0}'")]
    InvalidCountry(String),

    #[error("invalid variant '{0}'")]
    InvalidVariant(String),
}

/// Errors raised while assembling a [`crate::MessageDefinition`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DefinitionError {
    /// The same locale was given twice for one code.
    #[error("message {id} defines locale '{locale}' more than once")]
    DuplicateLocale { id: u32, locale: Locale },

    /// A default or localized template failed to parse.
    #[error("message {id} has an invalid template{}: {source}", display_locale(.locale))]
    InvalidTemplate {
        id: u32,
        locale: Option<Locale>,
        #[source]
        source: TemplateError,
    },
}

fn display_locale(locale: &Option<Locale>) -> String {
    match locale {
        Some(locale) => format!(" for locale '{locale}'"),
        None => String::new(),
    }
}
