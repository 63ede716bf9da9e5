use crate::code::Code;
use crate::error::DefinitionError;
use crate::fallback::resolve_fallback_locale;
use crate::locale::Locale;
use crate::pattern::Template;

/// A code bound to its default template and its localized overrides.
///
/// Locale entries keep their insertion order and are unique per definition.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageDefinition {
    code: Code,
    name: Option<String>,
    default: Template,
    localized: Vec<(Locale, Template)>,
}

impl MessageDefinition {
    pub fn new(code: impl Into<Code>, default: Template) -> Self {
        Self {
            code: code.into(),
            name: None,
            default,
            localized: Vec::new(),
        }
    }

    /// Parses the default template and builds a definition from raw text.
    pub fn from_text(code: impl Into<Code>, default: &str) -> Result<Self, DefinitionError> {
        let code = code.into();
        let default = Template::parse(default).map_err(|source| {
            DefinitionError::InvalidTemplate {
                id: code.id(),
                locale: None,
                source,
            }
        })?;
        Ok(Self::new(code, default))
    }

    /// Sets the symbolic name used for generated constants and name lookups.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a parsed localized template.
    pub fn add_locale(&mut self, locale: Locale, template: Template) -> Result<(), DefinitionError> {
        if self.localized.iter().any(|(existing, _)| *existing == locale) {
            return Err(DefinitionError::DuplicateLocale {
                id: self.id(),
                locale,
            });
        }
        self.localized.push((locale, template));
        Ok(())
    }

    /// Parses `text` and adds it for `locale`.
    pub fn add_locale_text(&mut self, locale: Locale, text: &str) -> Result<(), DefinitionError> {
        let template = Template::parse(text).map_err(|source| {
            DefinitionError::InvalidTemplate {
                id: self.id(),
                locale: Some(locale.clone()),
                source,
            }
        })?;
        self.add_locale(locale, template)
    }

    /// Builder-style variant of [`MessageDefinition::add_locale_text`].
    pub fn with_locale_text(mut self, locale: Locale, text: &str) -> Result<Self, DefinitionError> {
        self.add_locale_text(locale, text)?;
        Ok(self)
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn id(&self) -> u32 {
        self.code.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn default_template(&self) -> &Template {
        &self.default
    }

    /// Localized templates in insertion order.
    pub fn localized(&self) -> impl Iterator<Item = (&Locale, &Template)> {
        self.localized.iter().map(|(locale, template)| (locale, template))
    }

    /// The template registered for exactly `locale`, without fallback.
    pub fn locale_template(&self, locale: &Locale) -> Option<&Template> {
        self.localized
            .iter()
            .find(|(existing, _)| existing == locale)
            .map(|(_, template)| template)
    }

    /// Resolves the best template for `requested`.
    ///
    /// Walks [`Locale::fallback_chain`] and falls back to the default
    /// template, so this never fails.
    pub fn template_for(&self, requested: &Locale) -> &Template {
        resolve_fallback_locale(requested, self.localized.iter().map(|(locale, _)| locale))
            .and_then(|locale| self.locale_template(locale))
            .unwrap_or(&self.default)
    }

    /// Resolves and formats the text for `locale`.
    pub fn render<S: AsRef<str>>(&self, locale: &Locale, params: &[S]) -> String {
        self.template_for(locale).format(params)
    }
}
