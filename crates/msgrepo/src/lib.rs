#![doc = include_str!("../README.md")]

mod coded_error;
mod error;
pub mod loader;
pub mod provider;
mod repository;
pub mod source;
pub mod trace;

pub use coded_error::CodedError;
pub use error::{RepositoryError, SourceError};
pub use loader::ResourceLoader;
pub use provider::{
    FixedLocaleProvider, FixedPrincipal, LocaleProvider, NoPrincipal, PlatformLocaleProvider,
    PrincipalProvider,
};
pub use repository::{LoadOutcome, MergeSummary, Repository};
pub use source::{EmbeddedSource, MemorySource, ResourceSource, ResourceText, SearchPathSource};

pub use msgrepo_core::{
    Code, CodeKind, ErrorCode, InfoCode, Locale, Localized, LocalizedString, MessageDefinition,
    Template, TraceLevel,
};

pub use msgrepo_toml::{CONFIG_FILE_NAME, ConfigError, MsgRepoConfig};
