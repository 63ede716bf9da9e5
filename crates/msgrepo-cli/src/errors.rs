//! CLI error types rendered through miette.

// Fields in these structs are read by miette's Diagnostic derive macro
#![allow(unused)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use msgrepo::{ConfigError, RepositoryError};
use msgrepo_generate::GenerateError;
use std::path::PathBuf;
use thiserror::Error;

/// Neither `msgrepo.toml` nor `--search-path` told us where catalogs live.
#[derive(Debug, Diagnostic, Error)]
#[error("msgrepo.toml configuration file not found")]
#[diagnostic(
    code(msgrepo::config::not_found),
    help(
        "Create a msgrepo.toml next to your catalogs, for example:\n\n  \
          search_path = [\"catalogs\"]\n  \
          resources = [\"core\"]\n\n\
         or pass --search-path <DIR>"
    )
)]
pub struct ConfigNotFoundError {
    /// Where the lookup started.
    pub start: PathBuf,
}

/// A catalog resource that is not valid TOML or does not match the schema.
#[derive(Debug, Diagnostic, Error)]
#[error("failed to parse catalog resource '{resource}'")]
#[diagnostic(code(msgrepo::catalog::syntax))]
pub struct CatalogSyntaxError {
    pub resource: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("error occurred here")]
    pub span: Option<SourceSpan>,

    #[help]
    pub help: String,
}

/// No resource to work on.
#[derive(Debug, Diagnostic, Error)]
#[error("no catalog resources to load")]
#[diagnostic(
    code(msgrepo::check::no_resources),
    help("Name resources on the command line or list them under `resources` in msgrepo.toml")
)]
pub struct NoResourcesError;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    ConfigNotFound(#[from] ConfigNotFoundError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    CatalogSyntax(#[from] CatalogSyntaxError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    NoResources(#[from] NoResourcesError),

    #[error(transparent)]
    #[diagnostic(code(msgrepo::config))]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(msgrepo::repository))]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    #[diagnostic(code(msgrepo::generate))]
    Generate(#[from] GenerateError),

    #[error("{0}")]
    #[diagnostic(code(msgrepo::other))]
    Other(String),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::Other(format!("{err:#}"))
    }
}
