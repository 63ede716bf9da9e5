//! Identities of localizable content.

use serde::{Deserialize, Deserializer, Serialize, de};
use strum::{Display, EnumString, IntoStaticStr};

/// Severity attached to an [`ErrorCode`].
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TraceLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

// Catalogs accept any casing, matching `FromStr`.
impl<'de> Deserialize<'de> for TraceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value
            .parse()
            .map_err(|_| de::Error::custom(format!("unknown severity '{value}'")))
    }
}

/// The kind of a registered code.
#[derive(
    Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CodeKind {
    Info,
    Error,
    LocalizedString,
}

/// Anything that can be looked up in a message repository.
pub trait Localized {
    /// The repository-wide unique localization id.
    fn localization_id(&self) -> u32;
}

/// An informational message code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct InfoCode {
    id: u32,
}

impl InfoCode {
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    pub const fn id(&self) -> u32 {
        self.id
    }
}

/// An error code with its trace level.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ErrorCode {
    id: u32,
    level: TraceLevel,
}

impl ErrorCode {
    pub const fn new(id: u32, level: TraceLevel) -> Self {
        Self { id, level }
    }

    pub const fn id(&self) -> u32 {
        self.id
    }

    pub const fn level(&self) -> TraceLevel {
        self.level
    }
}

/// Handle for plain localized text that is neither a message nor an error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LocalizedString {
    id: u32,
}

impl LocalizedString {
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    pub const fn id(&self) -> u32 {
        self.id
    }
}

/// Any of the three code kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Code {
    Info(InfoCode),
    Error(ErrorCode),
    LocalizedString(LocalizedString),
}

impl Code {
    pub const fn id(&self) -> u32 {
        match self {
            Code::Info(code) => code.id(),
            Code::Error(code) => code.id(),
            Code::LocalizedString(code) => code.id(),
        }
    }

    pub const fn kind(&self) -> CodeKind {
        match self {
            Code::Info(_) => CodeKind::Info,
            Code::Error(_) => CodeKind::Error,
            Code::LocalizedString(_) => CodeKind::LocalizedString,
        }
    }

    /// The trace level, present for error codes only.
    pub const fn level(&self) -> Option<TraceLevel> {
        match self {
            Code::Error(code) => Some(code.level()),
            _ => None,
        }
    }
}

impl Localized for InfoCode {
    fn localization_id(&self) -> u32 {
        self.id
    }
}

impl Localized for ErrorCode {
    fn localization_id(&self) -> u32 {
        self.id
    }
}

impl Localized for LocalizedString {
    fn localization_id(&self) -> u32 {
        self.id
    }
}

impl Localized for Code {
    fn localization_id(&self) -> u32 {
        self.id()
    }
}

impl Localized for u32 {
    fn localization_id(&self) -> u32 {
        *self
    }
}

impl<T: Localized + ?Sized> Localized for &T {
    fn localization_id(&self) -> u32 {
        (**self).localization_id()
    }
}

impl From<InfoCode> for Code {
    fn from(code: InfoCode) -> Self {
        Code::Info(code)
    }
}

impl From<ErrorCode> for Code {
    fn from(code: ErrorCode) -> Self {
        Code::Error(code)
    }
}

impl From<LocalizedString> for Code {
    fn from(code: LocalizedString) -> Self {
        Code::LocalizedString(code)
    }
}
