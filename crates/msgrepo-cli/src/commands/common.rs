//! Configuration lookup and repository construction shared by all commands.

use crate::errors::{CatalogSyntaxError, CliError, ConfigNotFoundError};
use anyhow::Context as _;
use clap::Args;
use miette::NamedSource;
use msgrepo::{
    ConfigError, MsgRepoConfig, PrincipalProvider, Repository, RepositoryError, ResourceSource as _,
    SearchPathSource,
};
use msgrepo_toml::CatalogError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Options accepted by every command.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Path to msgrepo.toml (default: searched upwards from the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to search for catalog resources; replaces the configured search path
    #[arg(long = "search-path", global = true, value_name = "DIR")]
    pub search_path: Vec<PathBuf>,

    /// Log what is being loaded
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Extra resources to load on top of the configured ones.
#[derive(Args, Clone, Debug, Default)]
pub struct ResourceArgs {
    /// Resource to load in addition to the configured list
    #[arg(short, long = "resource", value_name = "NAME")]
    pub resources: Vec<String>,
}

/// The effective configuration for one CLI invocation.
#[derive(Debug)]
pub struct Workspace {
    pub config: MsgRepoConfig,
}

impl Workspace {
    pub fn discover(global: &GlobalArgs) -> Result<Self, CliError> {
        let cwd = std::env::current_dir().context("cannot determine the current directory")?;
        Self::discover_from(global, &cwd)
    }

    /// Resolves the configuration relative to `cwd`.
    ///
    /// `--config` must exist. Without it a missing `msgrepo.toml` is fine as
    /// long as `--search-path` says where catalogs are.
    pub fn discover_from(global: &GlobalArgs, cwd: &Path) -> Result<Self, CliError> {
        let found = match &global.config {
            Some(path) => MsgRepoConfig::read_from_path(cwd.join(path)).map(Some),
            None => match MsgRepoConfig::discover(cwd) {
                Ok(config) => Ok(Some(config)),
                Err(ConfigError::NotFound) => Ok(None),
                Err(err) => Err(err),
            },
        };

        let mut config = match found {
            Ok(Some(config)) => config,
            Ok(None) if !global.search_path.is_empty() => MsgRepoConfig::default(),
            Ok(None) | Err(ConfigError::NotFound) => {
                return Err(ConfigNotFoundError {
                    start: global
                        .config
                        .as_ref()
                        .map_or_else(|| cwd.to_path_buf(), |path| cwd.join(path)),
                }
                .into());
            },
            Err(err) => return Err(err.into()),
        };

        if !global.search_path.is_empty() {
            config.search_path = global.search_path.iter().map(|dir| cwd.join(dir)).collect();
        }

        tracing::debug!(
            "Catalog search path: {:?}",
            config.resolved_search_path()
        );
        Ok(Self { config })
    }

    pub fn source(&self) -> SearchPathSource {
        SearchPathSource::new(self.config.resolved_search_path())
    }

    /// Builds the repository and loads the configured resources followed by
    /// `extra`.
    pub fn repository(
        &self,
        extra: &[String],
        principal_provider: Option<Arc<dyn PrincipalProvider>>,
    ) -> Result<Repository, CliError> {
        let repository = Repository::from_config(&self.config, principal_provider)
            .map_err(|err| self.diagnose(err))?;
        for resource in extra {
            repository
                .load_resource(resource)
                .map_err(|err| self.diagnose(err))?;
        }
        Ok(repository)
    }

    /// Attaches the offending source text to catalog syntax errors.
    pub fn diagnose(&self, err: RepositoryError) -> CliError {
        match err {
            RepositoryError::Parse {
                resource,
                source: CatalogError::Syntax(syntax),
            } => match self.source().read(&resource) {
                Ok(text) => CatalogSyntaxError {
                    resource,
                    src: NamedSource::new(text.origin, text.content),
                    span: syntax.span().map(Into::into),
                    help: syntax.message().to_string(),
                }
                .into(),
                Err(_) => CliError::Repository(RepositoryError::Parse {
                    resource,
                    source: CatalogError::Syntax(syntax),
                }),
            },
            other => other.into(),
        }
    }
}
