use conftree::{SharedStorage, Storage, StoreError};
use serde_json::json;
use std::thread;

#[test]
fn loaders_share_one_file_table() {
    let shared = SharedStorage::from(Storage::with_max_files(4));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                let mut doc = json!({ "parts": {} });
                doc["parts"][i.to_string()] = json!(i);
                shared
                    .load_value(&format!("part{}.json", i), &doc)
                    .unwrap()
            })
        })
        .collect();
    let mut ids: Vec<u16> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2, 3]);

    assert!(matches!(
        shared.add_file("part4.json"),
        Err(StoreError::TooManyFiles { limit: 4, .. })
    ));
    assert_eq!(shared.sub_keys("parts").unwrap(), vec!["0", "1", "2", "3"]);
}

#[test]
fn guards_allow_batched_work() {
    let shared = SharedStorage::default();
    {
        let mut storage = shared.write();
        let f = storage.add_file("batch.toml").unwrap();
        for i in 0..3 {
            storage.set(&format!("items[{}]", i), i.to_string(), f).unwrap();
        }
    }
    let storage = shared.read();
    assert_eq!(storage.len(), 3);
    assert!(storage.has("items[2]"));
}
