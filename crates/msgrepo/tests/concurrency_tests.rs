mod common;

use common::repository;
use msgrepo::Locale;
use std::sync::Arc;
use std::thread;

#[test]
fn readers_see_whole_resources_while_loading() {
    let repository = Arc::new(repository());
    repository.load_resource("core").unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let repository = Arc::clone(&repository);
            thread::spawn(move || {
                for _ in 0..500 {
                    assert_eq!(
                        repository
                            .message(1003u32, &Locale::new("de"), &[] as &[&str])
                            .unwrap(),
                        "Abbrechen"
                    );
                    // extra.toml holds two ids; both or neither must be visible.
                    let ids: Vec<u32> =
                        repository.all_messages().iter().map(|d| d.id()).collect();
                    assert!(ids.len() == 4 || ids.len() == 6, "partial snapshot: {ids:?}");
                }
            })
        })
        .collect();

    let writer = {
        let repository = Arc::clone(&repository);
        thread::spawn(move || repository.load_resource("extra").unwrap())
    };

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert!(repository.exists_message(3001));
    assert!(repository.exists_message(3002));
}

#[test]
fn concurrent_loads_of_same_resource_commit_once() {
    let repository = Arc::new(repository());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repository = Arc::clone(&repository);
            thread::spawn(move || repository.load_resource("core").unwrap())
        })
        .collect();

    let loaded = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|outcome| matches!(outcome, msgrepo::LoadOutcome::Loaded(_)))
        .count();

    assert_eq!(loaded, 1);
    assert_eq!(repository.len(), 4);
}
