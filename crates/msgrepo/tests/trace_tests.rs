mod common;

use common::{fixtures_dir, locale};
use msgrepo::{
    CodedError, ErrorCode, FixedLocaleProvider, FixedPrincipal, InfoCode, Locale, PrincipalProvider,
    Repository, SearchPathSource, TraceLevel,
};
use std::error::Error as _;
use std::io;
use std::sync::Arc;

fn repository_with_user(user: Option<&str>) -> Repository {
    let repository = Repository::builder()
        .source(Arc::new(SearchPathSource::new([fixtures_dir()])))
        .locale_provider(Arc::new(FixedLocaleProvider(Locale::new("en"))))
        .maybe_principal_provider(
            user.map(|name| Arc::new(FixedPrincipal(name.to_string())) as Arc<dyn PrincipalProvider>),
        )
        .trace_locale(Locale::new("en"))
        .build();
    repository.load_resource("core").unwrap();
    repository
}

#[test]
fn unknown_id_renders_fallback_line() {
    let repository = repository_with_user(None);
    assert_eq!(
        repository.trace_message(9999999u32),
        "[9999999] Unable to return real message. ID is unknown"
    );
}

#[test]
fn known_id_is_padded_and_rendered_in_trace_locale() {
    let repository = repository_with_user(None);
    assert_eq!(repository.trace_message(1003u32), "[   1003] Cancel");

    repository.set_trace_locale(Locale::new("de"));
    assert_eq!(repository.trace_message(1003u32), "[   1003] Abbrechen");
    assert_eq!(
        repository.trace_message_with_params(1001u32, &["pObject"]),
        "[   1001] Parameter 'pObject' darf nicht null sein."
    );
}

#[test]
fn trace_locale_is_independent_of_current_locale() {
    let repository = repository_with_user(None);
    repository.set_trace_locale(locale("de", "CH", ""));

    assert_eq!(
        repository
            .message_in_current_locale(2000u32, &[] as &[&str])
            .unwrap(),
        "default"
    );
    assert_eq!(repository.trace_message(2000u32), "[   2000] de_CH");
}

#[test]
fn user_column_follows_flag() {
    let repository = repository_with_user(Some("alice"));
    assert_eq!(repository.trace_message(1003u32), "[   1003] Cancel");

    repository.set_show_current_user_in_traces(true);
    assert_eq!(
        repository.trace_message(1003u32),
        "[   1003] alice               Cancel"
    );
}

#[test]
fn unknown_user_keeps_column_width() {
    let repository = repository_with_user(None);
    repository.set_show_current_user_in_traces(true);

    assert_eq!(
        repository.trace_message(1003u32),
        format!("[   1003] {}Cancel", " ".repeat(msgrepo::trace::TRACE_USER_WIDTH))
    );
}

#[test]
fn coded_error_displays_level_and_id() {
    let repository = repository_with_user(None);
    let error = CodedError::new(
        &repository,
        ErrorCode::new(1001, TraceLevel::Error),
        ["pObject"],
    );

    assert_eq!(
        error.to_string(),
        "[ERROR 1001] Parameter 'pObject' must not be null."
    );
    assert_eq!(error.params(), ["pObject"]);
    assert!(error.source().is_none());
}

#[test]
fn coded_error_in_explicit_locale_keeps_cause() {
    let repository = repository_with_user(None);
    let error = CodedError::in_locale(
        &repository,
        ErrorCode::new(1001, TraceLevel::Error),
        &Locale::new("de"),
        ["x"],
    )
    .with_cause(io::Error::other("disk gone"));

    assert_eq!(error.message(), "Parameter 'x' darf nicht null sein.");
    assert_eq!(error.source().unwrap().to_string(), "disk gone");
}

#[test]
fn coded_error_for_unknown_code_uses_fallback_text() {
    let repository = repository_with_user(None);
    let error = CodedError::new(&repository, InfoCode::new(4242), Vec::<String>::new());

    assert_eq!(
        error.to_string(),
        "[ID-4242] Unable to return real message. ID is unknown"
    );
}

#[test]
fn coded_error_for_unknown_error_code_is_not_double_tagged() {
    let repository = repository_with_user(None);
    let error = CodedError::new(
        &repository,
        ErrorCode::new(4242, TraceLevel::Error),
        ["ignored"],
    );

    assert_eq!(
        error.to_string(),
        "[ID-4242] Unable to return real message. ID is unknown"
    );
    assert_eq!(error.code().level(), Some(TraceLevel::Error));
}
