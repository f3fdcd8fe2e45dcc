use conftree::{join_path, split_path, PathError, PathSegment, PathType};
use proptest::prelude::*;

fn key_elem() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_-]{0,8}"
}

fn index_elem() -> impl Strategy<Value = String> {
    "[0-9]{1,6}"
}

fn tail_segment() -> impl Strategy<Value = PathSegment> {
    prop_oneof![
        key_elem().prop_map(PathSegment::key),
        index_elem().prop_map(PathSegment::index),
    ]
}

fn valid_path() -> impl Strategy<Value = Vec<PathSegment>> {
    (tail_segment(), prop::collection::vec(tail_segment(), 0..8)).prop_map(|(head, tail)| {
        let mut segments = vec![head];
        segments.extend(tail);
        segments
    })
}

proptest! {
    #[test]
    fn split_then_join_is_identity(segments in valid_path()) {
        let path = join_path(&segments);
        let decoded = split_path(&path).unwrap();
        prop_assert_eq!(&decoded, &segments);
        prop_assert_eq!(join_path(&decoded), path);
    }

    #[test]
    fn split_never_yields_empty_elements(input in "[a-z.\\[\\]0-9]{0,16}") {
        if let Ok(segments) = split_path(&input) {
            prop_assert!(!segments.is_empty());
            prop_assert!(segments.iter().all(|s| !s.elem.is_empty()));
            prop_assert_eq!(join_path(&segments), input);
        }
    }
}

#[test]
fn documented_examples_decode() {
    let decoded = split_path("server.hosts[0].name").unwrap();
    let kinds: Vec<PathType> = decoded.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![PathType::Key, PathType::Key, PathType::Index, PathType::Key]
    );
}

#[test]
fn index_first_paths_round_trip() {
    let segments = vec![PathSegment::index("0"), PathSegment::key("a")];
    let path = join_path(&segments);
    assert_eq!(path, "[0].a");
    assert_eq!(split_path(&path).unwrap(), segments);
}

#[test]
fn syntax_errors_report_the_path() {
    let err = split_path("a.[0]").unwrap_err();
    assert_eq!(
        err,
        PathError::Syntax {
            path: "a.[0]".to_string(),
            offset: 2,
            reason: "'[' directly after '.'",
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid path 'a.[0]' at byte 2: '[' directly after '.'"
    );
}
