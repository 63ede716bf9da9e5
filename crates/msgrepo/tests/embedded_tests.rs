use msgrepo::{
    EmbeddedSource, FixedLocaleProvider, Locale, Repository, RepositoryError, ResourceSource as _,
};
use rust_embed::RustEmbed;
use std::sync::Arc;

#[derive(RustEmbed)]
#[folder = "tests/fixtures/"]
struct Fixtures;

fn repository() -> Repository {
    Repository::builder()
        .source(Arc::new(EmbeddedSource::<Fixtures>::new()))
        .locale_provider(Arc::new(FixedLocaleProvider(Locale::new("de"))))
        .trace_locale(Locale::new("en"))
        .build()
}

#[test]
fn lists_embedded_resource_names() {
    let names = EmbeddedSource::<Fixtures>::resource_names();
    assert!(names.contains(&"core".to_string()));
    assert!(names.contains(&"extra".to_string()));
    assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn loads_embedded_catalog() {
    let repository = repository();
    repository.load_resource("core").unwrap();

    assert_eq!(
        repository
            .message_in_current_locale(1003u32, &[] as &[&str])
            .unwrap(),
        "Abbrechen"
    );
    assert_eq!(repository.trace_message(1003u32), "[   1003] Cancel");
}

#[test]
fn reports_embedded_origin() {
    let text = EmbeddedSource::<Fixtures>::new().read("extra").unwrap();
    assert_eq!(text.origin, "embedded:extra.toml");
}

#[test]
fn missing_embedded_resource_is_not_found() {
    assert!(matches!(
        repository().load_resource("absent"),
        Err(RepositoryError::ResourceNotFound { ref searched, .. })
            if searched == &["embedded:absent.toml".to_string()]
    ));
}
