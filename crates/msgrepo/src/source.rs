//! Where catalog resources come from.

use crate::error::SourceError;
use fs_err as fs;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Extension appended to resource names that do not carry one.
pub const CATALOG_EXTENSION: &str = "toml";

/// The text of a catalog resource and where it was found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceText {
    pub origin: String,
    pub content: String,
}

/// Locates a named catalog resource and yields its text.
pub trait ResourceSource: Send + Sync {
    fn read(&self, name: &str) -> Result<ResourceText, SourceError>;
}

/// `core` maps to `core.toml`; names that already end in `.toml` are kept.
pub fn resource_file_name(name: &str) -> String {
    let suffix = format!(".{CATALOG_EXTENSION}");
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}

/// Reads `<dir>/<name>.toml` from the first directory that has it.
#[derive(Clone, Debug, Default)]
pub struct SearchPathSource {
    dirs: Vec<PathBuf>,
}

impl SearchPathSource {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl ResourceSource for SearchPathSource {
    fn read(&self, name: &str) -> Result<ResourceText, SourceError> {
        let file_name = resource_file_name(name);
        let mut searched = Vec::with_capacity(self.dirs.len());

        for dir in &self.dirs {
            let path = dir.join(&file_name);
            if !path.is_file() {
                searched.push(path.display().to_string());
                continue;
            }

            let origin = path.display().to_string();
            return fs::read_to_string(&path)
                .map(|content| ResourceText {
                    origin: origin.clone(),
                    content,
                })
                .map_err(|source| SourceError::Io { origin, source });
        }

        Err(SourceError::NotFound { searched })
    }
}

/// Resources compiled into the binary with `rust-embed`.
pub struct EmbeddedSource<T: RustEmbed> {
    _phantom: PhantomData<T>,
}

impl<T: RustEmbed> Default for EmbeddedSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RustEmbed> EmbeddedSource<T> {
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Resource names available in the embedded folder.
    pub fn resource_names() -> Vec<String> {
        let suffix = format!(".{CATALOG_EXTENSION}");
        let mut names: Vec<String> = T::iter()
            .filter_map(|path| path.strip_suffix(&suffix).map(str::to_string))
            .collect();
        names.sort();
        names
    }
}

impl<T: RustEmbed + Send + Sync> ResourceSource for EmbeddedSource<T> {
    fn read(&self, name: &str) -> Result<ResourceText, SourceError> {
        let file_path = resource_file_name(name);
        let file = T::get(&file_path).ok_or_else(|| SourceError::NotFound {
            searched: vec![format!("embedded:{file_path}")],
        })?;

        let origin = format!("embedded:{file_path}");
        let content = String::from_utf8(file.data.into_owned()).map_err(|e| SourceError::Io {
            origin: origin.clone(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;

        Ok(ResourceText { origin, content })
    }
}

/// In-memory resources keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.resources.insert(name.into(), content.into());
    }
}

impl ResourceSource for MemorySource {
    fn read(&self, name: &str) -> Result<ResourceText, SourceError> {
        self.resources
            .get(name)
            .map(|content| ResourceText {
                origin: format!("memory:{name}"),
                content: content.clone(),
            })
            .ok_or_else(|| SourceError::NotFound {
                searched: vec![format!("memory:{name}")],
            })
    }
}
