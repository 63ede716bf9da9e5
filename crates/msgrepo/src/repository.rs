//! The message repository store.

use crate::error::RepositoryError;
use crate::loader::ResourceLoader;
use crate::provider::{
    FixedLocaleProvider, LocaleProvider, NoPrincipal, PlatformLocaleProvider, PrincipalProvider,
    platform_locale,
};
use crate::source::{MemorySource, ResourceSource, SearchPathSource};
use crate::trace::{self, TraceSettings};
use bon::bon;
use msgrepo_core::{
    Code, CodeKind, ErrorCode, InfoCode, Locale, Localized, LocalizedString,
    MessageDefinition,
};
use msgrepo_toml::MsgRepoConfig;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// What a merge changed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MergeSummary {
    /// Ids registered for the first time.
    pub inserted: usize,
    /// Definitions that were already present.
    pub unchanged: usize,
}

/// Result of [`Repository::load_resource`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadOutcome {
    Loaded(MergeSummary),
    /// The resource name was loaded before; nothing changed.
    AlreadyLoaded,
}

#[derive(Default)]
struct Store {
    definitions: BTreeMap<u32, Arc<MessageDefinition>>,
    names: HashMap<String, u32>,
    loaded_resources: HashSet<String>,
}

impl Store {
    /// Validates the whole batch against the current contents and commits it
    /// only if every definition is acceptable.
    fn merge(
        &mut self,
        incoming: Vec<Arc<MessageDefinition>>,
        resource: Option<&str>,
    ) -> Result<MergeSummary, RepositoryError> {
        let mut staged: BTreeMap<u32, Arc<MessageDefinition>> = BTreeMap::new();
        let mut staged_names: HashMap<String, u32> = HashMap::new();
        let mut summary = MergeSummary::default();

        for definition in incoming {
            let id = definition.id();
            let current = staged
                .get(&id)
                .or_else(|| self.definitions.get(&id))
                .cloned();

            let accepted = match current {
                None => {
                    summary.inserted += 1;
                    definition
                },
                Some(existing) if Arc::ptr_eq(&existing, &definition) || existing == definition => {
                    summary.unchanged += 1;
                    continue;
                },
                Some(_) => {
                    return Err(RepositoryError::DuplicateCode {
                        id,
                        resource: resource.map(str::to_string),
                    });
                },
            };

            if let Some(name) = accepted.name() {
                let owner = staged_names
                    .get(name)
                    .or_else(|| self.names.get(name))
                    .copied();
                match owner {
                    Some(first) if first != id => {
                        return Err(RepositoryError::DuplicateName {
                            name: name.to_string(),
                            first,
                            second: id,
                        });
                    },
                    _ => {
                        staged_names.insert(name.to_string(), id);
                    },
                }
            }

            staged.insert(id, accepted);
        }

        self.definitions.extend(staged);
        self.names.extend(staged_names);
        Ok(summary)
    }
}

/// Process-lifetime table of message definitions.
///
/// Reads take a shared lock and run concurrently; every merge holds the
/// exclusive lock for its whole commit, so readers see either none or all of
/// a resource. Share it with `Arc<Repository>`.
pub struct Repository {
    store: RwLock<Store>,
    loader: ResourceLoader,
    locale_provider: Arc<dyn LocaleProvider>,
    principal_provider: Arc<dyn PrincipalProvider>,
    trace: TraceSettings,
}

#[bon]
impl Repository {
    /// Creates an empty repository.
    ///
    /// Unset collaborators default to an empty in-memory source, the platform
    /// locale and no principal. The trace locale defaults to the platform
    /// locale.
    #[builder]
    pub fn new(
        source: Option<Arc<dyn ResourceSource>>,
        locale_provider: Option<Arc<dyn LocaleProvider>>,
        principal_provider: Option<Arc<dyn PrincipalProvider>>,
        trace_locale: Option<Locale>,
        #[builder(default)] show_current_user_in_traces: bool,
    ) -> Self {
        let source = source.unwrap_or_else(|| Arc::new(MemorySource::new()));
        Self {
            store: RwLock::new(Store::default()),
            loader: ResourceLoader::new(source),
            locale_provider: locale_provider.unwrap_or_else(|| Arc::new(PlatformLocaleProvider)),
            principal_provider: principal_provider.unwrap_or_else(|| Arc::new(NoPrincipal)),
            trace: TraceSettings::new(
                trace_locale.unwrap_or_else(platform_locale),
                show_current_user_in_traces,
            ),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Repository {
    /// Builds a repository from `msgrepo.toml` settings and loads the
    /// configured resources in order.
    pub fn from_config(
        config: &MsgRepoConfig,
        principal_provider: Option<Arc<dyn PrincipalProvider>>,
    ) -> Result<Self, RepositoryError> {
        let locale_provider: Arc<dyn LocaleProvider> = match config.default_locale()? {
            Some(locale) => Arc::new(FixedLocaleProvider(locale)),
            None => Arc::new(PlatformLocaleProvider),
        };

        let repository = Self::builder()
            .source(Arc::new(SearchPathSource::new(config.resolved_search_path())))
            .locale_provider(locale_provider)
            .maybe_principal_provider(principal_provider)
            .maybe_trace_locale(config.trace_locale()?)
            .show_current_user_in_traces(config.show_current_user_in_traces)
            .build();

        for resource in &config.resources {
            repository.load_resource(resource)?;
        }

        Ok(repository)
    }

    /// Loads and merges a named catalog resource.
    ///
    /// A name that was loaded before is skipped. A failing resource leaves the
    /// repository unchanged and may be retried.
    pub fn load_resource(&self, name: &str) -> Result<LoadOutcome, RepositoryError> {
        if self.store.read().loaded_resources.contains(name) {
            tracing::warn!("Catalog resource '{}' already loaded, skipping", name);
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let definitions: Vec<Arc<MessageDefinition>> =
            self.loader.load(name)?.into_iter().map(Arc::new).collect();

        let mut store = self.store.write();
        if store.loaded_resources.contains(name) {
            return Ok(LoadOutcome::AlreadyLoaded);
        }
        let summary = store.merge(definitions, Some(name))?;
        store.loaded_resources.insert(name.to_string());
        drop(store);

        tracing::info!(
            "Loaded catalog resource '{}': {} new, {} unchanged",
            name,
            summary.inserted,
            summary.unchanged
        );
        Ok(LoadOutcome::Loaded(summary))
    }

    /// Merges definitions, typically taken from another repository's
    /// [`Repository::all_messages`].
    ///
    /// Identical definitions are skipped. Any other definition that reuses a
    /// registered id is rejected and nothing from the batch is committed.
    pub fn add_all_messages<I>(&self, definitions: I) -> Result<MergeSummary, RepositoryError>
    where
        I: IntoIterator,
        I::Item: Into<Arc<MessageDefinition>>,
    {
        let definitions: Vec<Arc<MessageDefinition>> =
            definitions.into_iter().map(Into::into).collect();
        let summary = self.store.write().merge(definitions, None)?;
        tracing::debug!(
            "Merged definitions: {} new, {} unchanged",
            summary.inserted,
            summary.unchanged
        );
        Ok(summary)
    }

    pub fn exists_message(&self, id: u32) -> bool {
        self.store.read().definitions.contains_key(&id)
    }

    /// The stored definition for `id`.
    pub fn definition(&self, id: u32) -> Result<Arc<MessageDefinition>, RepositoryError> {
        self.store
            .read()
            .definitions
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::UnknownCode(id))
    }

    /// The stored code for `id`, whatever its kind.
    pub fn localized_object(&self, id: u32) -> Result<Code, RepositoryError> {
        self.definition(id).map(|definition| definition.code())
    }

    pub fn message_id(&self, id: u32) -> Result<InfoCode, RepositoryError> {
        match self.localized_object(id)? {
            Code::Info(code) => Ok(code),
            other => Err(wrong_kind(id, CodeKind::Info, other)),
        }
    }

    pub fn error_code(&self, id: u32) -> Result<ErrorCode, RepositoryError> {
        match self.localized_object(id)? {
            Code::Error(code) => Ok(code),
            other => Err(wrong_kind(id, CodeKind::Error, other)),
        }
    }

    pub fn localized_string(&self, id: u32) -> Result<LocalizedString, RepositoryError> {
        match self.localized_object(id)? {
            Code::LocalizedString(code) => Ok(code),
            other => Err(wrong_kind(id, CodeKind::LocalizedString, other)),
        }
    }

    /// Looks a code up by the symbolic name given in its catalog.
    pub fn code_by_name(&self, name: &str) -> Result<Code, RepositoryError> {
        let id = self
            .store
            .read()
            .names
            .get(name)
            .copied()
            .ok_or_else(|| RepositoryError::UnknownName(name.to_string()))?;
        self.localized_object(id)
    }

    /// Snapshot of every definition, ordered by id.
    pub fn all_messages(&self) -> Vec<Arc<MessageDefinition>> {
        self.store.read().definitions.values().cloned().collect()
    }

    /// Names of the resources loaded so far, sorted.
    pub fn loaded_resources(&self) -> Vec<String> {
        let mut names: Vec<String> = self.store.read().loaded_resources.iter().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.store.read().definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().definitions.is_empty()
    }

    /// Resolves the template for `locale` and substitutes `params`.
    pub fn message<S: AsRef<str>>(
        &self,
        code: impl Localized,
        locale: &Locale,
        params: &[S],
    ) -> Result<String, RepositoryError> {
        let definition = self.definition(code.localization_id())?;
        Ok(definition.render(locale, params))
    }

    /// [`Repository::message`] in the locale reported by the locale provider.
    pub fn message_in_current_locale<S: AsRef<str>>(
        &self,
        code: impl Localized,
        params: &[S],
    ) -> Result<String, RepositoryError> {
        self.message(code, &self.current_locale(), params)
    }

    pub fn current_locale(&self) -> Locale {
        self.locale_provider.current_locale()
    }

    /// The trace line for `code`; never fails.
    pub fn trace_message(&self, code: impl Localized) -> String {
        self.trace_message_with_params::<&str>(code, &[])
    }

    /// The trace line for `code` with parameters substituted; never fails.
    pub fn trace_message_with_params<S: AsRef<str>>(
        &self,
        code: impl Localized,
        params: &[S],
    ) -> String {
        let id = code.localization_id();
        let locale = self.trace.locale();

        let text = match self.definition(id) {
            Ok(definition) => definition.render(&locale, params),
            Err(_) => {
                tracing::warn!("Trace requested for unknown message id {}", id);
                trace::UNKNOWN_MESSAGE_TEXT.to_string()
            },
        };

        let user = self
            .trace
            .show_current_user()
            .then(|| self.principal_provider.current_user_name().unwrap_or_default());

        trace::format_trace_line(id, user.as_deref(), &text)
    }

    pub fn trace_locale(&self) -> Locale {
        Locale::clone(&self.trace.locale())
    }

    /// Changes the trace locale for all subsequent trace lines.
    pub fn set_trace_locale(&self, locale: Locale) {
        self.trace.set_locale(locale);
    }

    pub fn show_current_user_in_traces(&self) -> bool {
        self.trace.show_current_user()
    }

    /// Toggles the user column for all subsequent trace lines.
    pub fn set_show_current_user_in_traces(&self, show: bool) {
        self.trace.set_show_current_user(show);
    }
}

fn wrong_kind(id: u32, expected: CodeKind, actual: Code) -> RepositoryError {
    RepositoryError::WrongKind {
        id,
        expected,
        actual: actual.kind(),
    }
}
