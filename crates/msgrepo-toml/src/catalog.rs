//! The catalog resource document.

use msgrepo_core::{
    Code, CodeKind, DefinitionError, ErrorCode, InfoCode, Locale, LocaleParseError,
    LocalizedString, MessageDefinition, TraceLevel,
};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not valid TOML or does not match the catalog schema.
    #[error("invalid catalog document: {0}")]
    Syntax(#[from] toml::de::Error),

    /// An error entry without a severity.
    #[error("message {id} is an error but has no severity")]
    MissingSeverity { id: u32 },

    /// A severity on an info or localized-string entry.
    #[error("message {id} of kind '{kind}' must not declare a severity")]
    UnexpectedSeverity { id: u32, kind: CodeKind },

    /// A locale tag that cannot be parsed.
    #[error("message {id} has an invalid locale: {source}")]
    InvalidLocale {
        id: u32,
        #[source]
        source: LocaleParseError,
    },

    /// The same id appears twice in one document.
    #[error("message {id} is defined more than once in the same catalog")]
    DuplicateId { id: u32 },

    /// A duplicate locale or an unparseable template inside one entry.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

/// A parsed catalog resource.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    #[serde(default, rename = "message")]
    pub messages: Vec<CatalogEntry>,
}

/// One `[[message]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub id: u32,
    pub kind: CodeKind,
    #[serde(default)]
    pub severity: Option<TraceLevel>,
    #[serde(default)]
    pub name: Option<String>,
    pub text: String,
    #[serde(default, rename = "locale")]
    pub locales: Vec<LocaleEntry>,
}

/// One `[[message.locale]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleEntry {
    pub language: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub variant: Option<String>,
    pub text: String,
}

impl CatalogDocument {
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Validates every entry and converts the document into definitions.
    ///
    /// Fails on the first invalid entry; duplicate ids inside the document
    /// are rejected here, conflicts with other catalogs are not.
    pub fn into_definitions(self) -> Result<Vec<MessageDefinition>, CatalogError> {
        let mut seen = HashSet::new();
        let mut definitions = Vec::with_capacity(self.messages.len());

        for entry in self.messages {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId { id: entry.id });
            }
            definitions.push(entry.into_definition()?);
        }

        Ok(definitions)
    }
}

impl CatalogEntry {
    fn code(&self) -> Result<Code, CatalogError> {
        match (self.kind, self.severity) {
            (CodeKind::Error, Some(level)) => Ok(ErrorCode::new(self.id, level).into()),
            (CodeKind::Error, None) => Err(CatalogError::MissingSeverity { id: self.id }),
            (kind, Some(_)) => Err(CatalogError::UnexpectedSeverity { id: self.id, kind }),
            (CodeKind::Info, None) => Ok(InfoCode::new(self.id).into()),
            (CodeKind::LocalizedString, None) => Ok(LocalizedString::new(self.id).into()),
        }
    }

    pub fn into_definition(self) -> Result<MessageDefinition, CatalogError> {
        let mut definition = MessageDefinition::from_text(self.code()?, &self.text)?;
        if let Some(name) = self.name {
            definition = definition.with_name(name);
        }

        for entry in self.locales {
            let locale = Locale::try_from_parts(
                &entry.language,
                entry.country.as_deref().unwrap_or_default(),
                entry.variant.as_deref().unwrap_or_default(),
            )
            .map_err(|source| CatalogError::InvalidLocale {
                id: self.id,
                source,
            })?;
            definition.add_locale_text(locale, &entry.text)?;
        }

        Ok(definition)
    }
}
