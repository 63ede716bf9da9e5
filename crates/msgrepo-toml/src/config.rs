use fs_err as fs;
use msgrepo_core::{Locale, LocaleParseError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up by [`MsgRepoConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "msgrepo.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("msgrepo.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A configured locale is not a valid locale string.
    #[error("Invalid locale '{name}' in configuration")]
    InvalidLocale {
        /// The invalid locale string.
        name: String,
        #[source]
        source: LocaleParseError,
    },
}

/// The repository configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MsgRepoConfig {
    /// Directories searched, in order, for `<resource>.toml`.
    /// Relative entries are resolved against the configuration file's directory.
    #[serde(default)]
    pub search_path: Vec<PathBuf>,
    /// Resources loaded when a repository is built from this configuration.
    #[serde(default)]
    pub resources: Vec<String>,
    /// Locale used when no explicit locale is passed (e.g. "de_CH").
    #[serde(default)]
    pub default_locale: Option<String>,
    /// Locale used for trace lines.
    #[serde(default)]
    pub trace_locale: Option<String>,
    /// Whether trace lines include the current user name.
    #[serde(default)]
    pub show_current_user_in_traces: bool,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl MsgRepoConfig {
    /// Reads the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound);
        }

        let content = fs::read_to_string(path)?;

        let mut config: MsgRepoConfig = toml::from_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    /// Looks for `msgrepo.toml` in `start` and its ancestors.
    pub fn discover(start: &Path) -> Result<Self, ConfigError> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
            .ok_or(ConfigError::NotFound)
            .and_then(Self::read_from_path)
    }

    /// The directory the configuration was read from, if any.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Search path with relative entries resolved against [`Self::base_dir`].
    ///
    /// An empty search path resolves to the base directory itself.
    pub fn resolved_search_path(&self) -> Vec<PathBuf> {
        let base = self.base_dir.clone().unwrap_or_default();
        if self.search_path.is_empty() {
            return vec![base];
        }
        self.search_path
            .iter()
            .map(|dir| if dir.is_absolute() { dir.clone() } else { base.join(dir) })
            .collect()
    }

    /// The configured default locale.
    pub fn default_locale(&self) -> Result<Option<Locale>, ConfigError> {
        parse_optional_locale(self.default_locale.as_deref())
    }

    /// The configured trace locale.
    pub fn trace_locale(&self) -> Result<Option<Locale>, ConfigError> {
        parse_optional_locale(self.trace_locale.as_deref())
    }
}

fn parse_optional_locale(value: Option<&str>) -> Result<Option<Locale>, ConfigError> {
    value
        .map(|name| {
            name.parse::<Locale>()
                .map_err(|source| ConfigError::InvalidLocale {
                    name: name.to_string(),
                    source,
                })
        })
        .transpose()
}
