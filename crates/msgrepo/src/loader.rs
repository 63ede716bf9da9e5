use crate::error::{RepositoryError, SourceError};
use crate::source::ResourceSource;
use msgrepo_core::{DefinitionError, MessageDefinition};
use msgrepo_toml::{CatalogDocument, CatalogError};
use std::sync::Arc;

/// Reads named catalog resources and turns them into definitions.
///
/// The loader only validates a resource in isolation; conflicts with
/// definitions that are already registered are the repository's concern.
#[derive(Clone)]
pub struct ResourceLoader {
    source: Arc<dyn ResourceSource>,
}

impl ResourceLoader {
    pub fn new(source: Arc<dyn ResourceSource>) -> Self {
        Self { source }
    }

    pub fn load(&self, name: &str) -> Result<Vec<MessageDefinition>, RepositoryError> {
        let text = self.source.read(name).map_err(|err| match err {
            SourceError::NotFound { searched } => RepositoryError::ResourceNotFound {
                resource: name.to_string(),
                searched,
            },
            SourceError::Io { source, .. } => RepositoryError::Io {
                resource: name.to_string(),
                source,
            },
        })?;

        tracing::debug!("Parsing catalog resource '{}' from {}", name, text.origin);
        parse_catalog(name, &text.content)
    }
}

/// Parses catalog text on behalf of the resource `name`.
pub fn parse_catalog(name: &str, content: &str) -> Result<Vec<MessageDefinition>, RepositoryError> {
    CatalogDocument::parse(content)
        .and_then(CatalogDocument::into_definitions)
        .map_err(|err| catalog_error(name, err))
}

fn catalog_error(resource: &str, err: CatalogError) -> RepositoryError {
    let resource = resource.to_string();
    match err {
        CatalogError::DuplicateId { id } => RepositoryError::DuplicateCode {
            id,
            resource: Some(resource),
        },
        CatalogError::Definition(DefinitionError::DuplicateLocale { id, locale }) => {
            RepositoryError::DuplicateLocale {
                id,
                locale,
                resource: Some(resource),
            }
        },
        CatalogError::Definition(DefinitionError::InvalidTemplate { id, locale, source }) => {
            RepositoryError::InvalidTemplate {
                id,
                locale,
                resource: Some(resource),
                source,
            }
        },
        other => RepositoryError::Parse {
            resource,
            source: other,
        },
    }
}
