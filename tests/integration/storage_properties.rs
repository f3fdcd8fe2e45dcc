use conftree::{Storage, StoreError};
use proptest::prelude::*;

fn conflict(path: &str) -> StoreError {
    StoreError::PathConflict {
        path: path.to_string(),
    }
}

#[test]
fn key_then_index_conflicts() {
    let mut storage = Storage::new();
    let f = storage.add_file("app.toml").unwrap();
    storage.set("a.b", "v1", f).unwrap();
    assert_eq!(storage.set("a[0]", "v2", f), Err(conflict("a[0]")));
}

#[test]
fn value_then_child_conflicts() {
    let mut storage = Storage::new();
    storage.set("a.b", "v", 0).unwrap();
    assert_eq!(storage.set("a.b.c", "v2", 0), Err(conflict("a.b.c")));
}

#[test]
fn child_then_value_conflicts() {
    let mut storage = Storage::new();
    storage.set("a.b.c", "v", 0).unwrap();
    assert_eq!(storage.set("a.b", "v2", 0), Err(conflict("a.b")));
    assert!(storage.get("a.b").is_none());
}

#[test]
fn overwrite_keeps_latest_value_and_file() {
    let mut storage = Storage::new();
    let f1 = storage.add_file("base.yaml").unwrap();
    let f2 = storage.add_file("override.yaml").unwrap();
    storage.set("a.b", "v1", f1).unwrap();
    storage.set("a.b", "v2", f2).unwrap();

    assert!(storage.has("a.b"));
    let info = storage.get("a.b").unwrap();
    assert_eq!(info.value, "v2");
    assert_eq!(storage.file_name(info.file), Some("override.yaml"));
}

#[test]
fn sub_keys_are_sorted() {
    let mut storage = Storage::new();
    storage.set("a.b", "1", 0).unwrap();
    storage.set("a.c", "2", 0).unwrap();
    storage.set("a.a", "3", 0).unwrap();
    assert_eq!(storage.sub_keys("a").unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn missing_is_not_an_error_but_value_path_is() {
    let empty = Storage::new();
    assert_eq!(empty.sub_keys("x"), Ok(Vec::new()));

    let mut storage = Storage::new();
    storage.set("a.b", "v", 0).unwrap();
    assert_eq!(
        storage.sub_keys("a.b"),
        Err(StoreError::NotFound {
            path: "a.b".to_string()
        })
    );
    assert_eq!(
        storage.sub_keys("a.b").unwrap_err().to_string(),
        "property path a.b not found"
    );
}

#[test]
fn add_file_dedups() {
    let mut storage = Storage::new();
    let first = storage.add_file("one.json").unwrap();
    assert_eq!(storage.add_file("one.json").unwrap(), first);
    assert_eq!(storage.add_file("two.json").unwrap(), first + 1);
}

#[test]
fn raw_views_track_storage() {
    let mut storage = Storage::new();
    let f = storage.add_file("app.toml").unwrap();
    storage.set("list[0]", "x", f).unwrap();
    storage.set("list[1]", "y", f).unwrap();

    assert_eq!(storage.raw_data().len(), 2);
    assert_eq!(storage.raw_file().get("app.toml"), Some(&f));
    assert_eq!(storage.keys(), vec!["list[0]", "list[1]"]);
}

proptest! {
    #[test]
    fn has_never_fails(input in "\\PC{0,24}") {
        let mut storage = Storage::new();
        storage.set("a.b[0].c", "v", 0).unwrap();
        let _ = storage.has(&input);
    }

    #[test]
    fn every_stored_key_is_reachable(
        keys in prop::collection::vec("[a-c](\\.[a-c]|\\[[0-2]\\]){0,3}", 1..20)
    ) {
        let mut storage = Storage::new();
        for key in &keys {
            let _ = storage.set(key, "v", 0);
        }
        for key in storage.keys() {
            prop_assert!(storage.has(key));
            prop_assert!(storage.sub_keys(key).is_err());
        }
    }
}
