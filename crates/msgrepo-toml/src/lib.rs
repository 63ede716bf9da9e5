#![doc = include_str!("../README.md")]

pub mod catalog;
mod config;

pub use catalog::{CatalogDocument, CatalogEntry, CatalogError, LocaleEntry};
pub use config::{CONFIG_FILE_NAME, ConfigError, MsgRepoConfig};
