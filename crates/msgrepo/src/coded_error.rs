use crate::repository::Repository;
use crate::trace::unknown_message_fallback;
use msgrepo_core::{Code, Locale, Localized as _};
use std::error::Error;
use std::fmt;

type BoxedCause = Box<dyn Error + Send + Sync + 'static>;

/// An error carrying a registered code, its parameters and an optional cause.
///
/// The text is rendered once, when the error is created. Error codes display
/// as `[<LEVEL> <id>] <text>`; other kinds display the bare text. A code the
/// repository does not know displays only its `[ID-<id>]` fallback text.
#[derive(Debug)]
pub struct CodedError {
    code: Code,
    params: Vec<String>,
    message: String,
    resolved: bool,
    cause: Option<BoxedCause>,
}

impl CodedError {
    /// Renders `code` in the repository's current locale.
    pub fn new<I, S>(repository: &Repository, code: impl Into<Code>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::in_locale(repository, code, &repository.current_locale(), params)
    }

    /// Renders `code` in an explicit locale.
    pub fn in_locale<I, S>(
        repository: &Repository,
        code: impl Into<Code>,
        locale: &Locale,
        params: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let code = code.into();
        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        let (message, resolved) = match repository.message(code, locale, params.as_slice()) {
            Ok(message) => (message, true),
            Err(_) => (unknown_message_fallback(code.localization_id()), false),
        };

        Self {
            code,
            params,
            message,
            resolved,
            cause: None,
        }
    }

    /// Attaches the underlying cause.
    pub fn with_cause(mut self, cause: impl Into<BoxedCause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// The rendered text without the code tag.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Code::Error(code) if self.resolved => {
                write!(f, "[{} {}] {}", code.level(), code.id(), self.message)
            },
            _ => f.write_str(&self.message),
        }
    }
}

impl Error for CodedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}
