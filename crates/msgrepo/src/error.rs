use msgrepo_core::{CodeKind, Locale, TemplateError};
use msgrepo_toml::{CatalogError, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A catalog resource is malformed.
    #[error("failed to parse catalog resource '{resource}': {source}")]
    Parse {
        resource: String,
        #[source]
        source: CatalogError,
    },

    /// No source location provides the resource.
    #[error("catalog resource '{resource}' not found (searched: {})", .searched.join(", "))]
    ResourceNotFound {
        resource: String,
        searched: Vec<String>,
    },

    /// The resource exists but could not be read.
    #[error("failed to read catalog resource '{resource}': {source}")]
    Io {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// The id is already registered with a different definition.
    #[error("message id {id} is already registered with a different definition{}", in_resource(.resource))]
    DuplicateCode { id: u32, resource: Option<String> },

    /// The locale is already mapped to a different template for this id.
    #[error("message id {id} already maps locale '{locale}' to a different template{}", in_resource(.resource))]
    DuplicateLocale {
        id: u32,
        locale: Locale,
        resource: Option<String>,
    },

    /// A default or localized template is not a valid pattern.
    #[error("message id {id} has an invalid template{}{}: {source}", for_locale(.locale), in_resource(.resource))]
    InvalidTemplate {
        id: u32,
        locale: Option<Locale>,
        resource: Option<String>,
        #[source]
        source: TemplateError,
    },

    /// Two ids claim the same symbolic name.
    #[error("message name '{name}' is used by ids {first} and {second}")]
    DuplicateName { name: String, first: u32, second: u32 },

    #[error("unknown message id {0}")]
    UnknownCode(u32),

    #[error("unknown message name '{0}'")]
    UnknownName(String),

    /// The id exists but was registered as another kind.
    #[error("message id {id} is registered as {actual}, not {expected}")]
    WrongKind {
        id: u32,
        expected: CodeKind,
        actual: CodeKind,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn in_resource(resource: &Option<String>) -> String {
    match resource {
        Some(resource) => format!(" (resource '{resource}')"),
        None => String::new(),
    }
}

fn for_locale(locale: &Option<Locale>) -> String {
    match locale {
        Some(locale) => format!(" for locale '{locale}'"),
        None => String::new(),
    }
}

/// Errors reported by a [`crate::ResourceSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("resource not found")]
    NotFound { searched: Vec<String> },

    #[error("failed to read '{origin}': {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },
}
