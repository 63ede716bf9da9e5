#![doc = include_str!("../README.md")]

pub mod code;
pub mod definition;
pub mod error;
pub mod fallback;
pub mod locale;
pub mod pattern;

pub use code::{Code, CodeKind, ErrorCode, InfoCode, Localized, LocalizedString, TraceLevel};
pub use definition::MessageDefinition;
pub use error::{DefinitionError, LocaleParseError, TemplateError};
pub use fallback::{fallback_locales, resolve_fallback_locale};
pub use locale::Locale;
pub use pattern::Template;
