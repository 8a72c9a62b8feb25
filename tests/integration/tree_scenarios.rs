//! Walk scenarios: truncation, depth limits, unreadable branches

use super::test_utils::{build_fixture, MemoryReader};
use std::num::NonZeroUsize;
use std::path::Path;
use tree_pro::error::WalkError;
use tree_pro::tree::{group_identical, NodeState, WalkOptions, Walker};

/// pkg/{a,b} each hold one .go file; scripts holds three shell scripts.
#[test]
fn test_end_to_end_grouping_and_file_limit() {
    let temp_dir = build_fixture(&[
        "pkg/a/f.go",
        "pkg/b/f.go",
        "scripts/x.sh",
        "scripts/y.sh",
        "scripts/z.sh",
    ]);

    let tree = Walker::new(WalkOptions::unlimited().with_max_files(2))
        .walk(temp_dir.path())
        .unwrap();

    let pkg = tree.child("pkg").unwrap();
    let groups = group_identical(&pkg.children);
    assert_eq!(groups.len(), 1);
    let members: Vec<&str> = groups[0].members.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(members, vec!["a", "b"]);

    let scripts = tree.child("scripts").unwrap();
    let shown: Vec<&str> = scripts.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(shown, vec!["x.sh", "y.sh"]);
    assert_eq!(scripts.hidden_file_count, 1);
    assert_eq!(scripts.immediate_file_count, 3);

    assert_eq!(tree.total_dir_count, 4);
    assert_eq!(tree.total_file_count, 5);
}

#[test]
fn test_depth_limit_one_records_markers() {
    let temp_dir = build_fixture(&["a/x.txt", "b/y.txt"]);

    let options = WalkOptions::unlimited().with_max_depth(NonZeroUsize::new(1).unwrap());
    let tree = Walker::new(options).walk(temp_dir.path()).unwrap();

    assert_eq!(tree.immediate_dir_count, 2);
    assert_eq!(tree.total_dir_count, 2);
    assert_eq!(tree.total_file_count, 0);
    for name in ["a", "b"] {
        let marker = tree.child(name).unwrap();
        assert!(marker.is_depth_limited());
        assert!(marker.files.is_empty());
        assert!(marker.children.is_empty());
    }
    // Markers never collapse into one another
    assert_eq!(group_identical(&tree.children).len(), 2);
}

#[test]
fn test_depth_limit_two_expands_one_level() {
    let temp_dir = build_fixture(&["a/x.txt", "a/inner/deep.txt"]);

    let options = WalkOptions::unlimited().with_max_depth(NonZeroUsize::new(2).unwrap());
    let tree = Walker::new(options).walk(temp_dir.path()).unwrap();

    let a = tree.child("a").unwrap();
    assert_eq!(a.state, NodeState::Read);
    assert_eq!(a.files.len(), 1);
    let inner = a.child("inner").unwrap();
    assert!(inner.is_depth_limited());
    assert_eq!(inner.depth, 2);
    assert_eq!(tree.total_dir_count, 2);
    assert_eq!(tree.total_file_count, 1);
}

#[test]
fn test_permission_denied_subdirectory() {
    let reader = MemoryReader::new()
        .dir("/ws", &["locked/", "empty/", "src/", "Cargo.toml"])
        .denied("/ws/locked")
        .dir("/ws/empty", &[])
        .dir("/ws/src", &["lib.rs", "main.rs"]);

    let tree = Walker::with_reader(reader, WalkOptions::unlimited())
        .walk(Path::new("/ws"))
        .unwrap();

    let locked = tree.child("locked").unwrap();
    assert!(locked.is_permission_error());
    assert_eq!(locked.immediate_file_count, 0);
    assert_eq!(locked.total_dir_count, 0);
    assert_ne!(locked.signature, tree.child("empty").unwrap().signature);

    assert_eq!(tree.total_dir_count, 3);
    assert_eq!(tree.total_file_count, 3);
}

#[test]
fn test_broken_subdirectory_keeps_siblings() {
    let reader = MemoryReader::new()
        .dir("/ws", &["a/", "b/", "c/"])
        .dir("/ws/a", &["one.txt"])
        .broken("/ws/b", "Input/output error")
        .dir("/ws/c", &["two.txt"]);

    let tree = Walker::with_reader(reader, WalkOptions::unlimited())
        .walk(Path::new("/ws"))
        .unwrap();

    let b = tree.child("b").unwrap();
    assert_eq!(b.error().unwrap().message, "Input/output error");
    assert!(!b.is_permission_error());
    assert_eq!(tree.child("a").unwrap().files.len(), 1);
    assert_eq!(tree.child("c").unwrap().files.len(), 1);
    assert_eq!(tree.total_file_count, 2);
}

#[test]
fn test_root_failures_are_fatal() {
    let reader = MemoryReader::new().denied("/ws");
    let err = Walker::with_reader(reader, WalkOptions::unlimited())
        .walk(Path::new("/ws"))
        .unwrap_err();
    assert!(matches!(err, WalkError::RootUnreadable { .. }));
    assert!(err.is_permission_denied());

    let temp_dir = build_fixture(&["file.txt"]);
    let err = Walker::new(WalkOptions::unlimited())
        .walk(&temp_dir.path().join("file.txt"))
        .unwrap_err();
    assert!(matches!(err, WalkError::RootNotADirectory { .. }));

    let err = Walker::new(WalkOptions::unlimited())
        .walk(&temp_dir.path().join("missing"))
        .unwrap_err();
    assert!(matches!(err, WalkError::RootNotFound { .. }));
}

#[test]
fn test_counts_survive_file_limit() {
    let temp_dir = build_fixture(&[
        "a.txt", "b.txt", "c.txt", "d/e.txt", "d/f.txt", "d/g.txt",
    ]);

    let limited = Walker::new(WalkOptions::unlimited().with_max_files(1))
        .walk(temp_dir.path())
        .unwrap();
    let unlimited = Walker::new(WalkOptions::unlimited())
        .walk(temp_dir.path())
        .unwrap();

    assert_eq!(limited.total_file_count, unlimited.total_file_count);
    assert_eq!(limited.total_dir_count, unlimited.total_dir_count);
    assert_eq!(limited.hidden_file_count, 2);
    assert_eq!(limited.child("d").unwrap().hidden_file_count, 2);
    assert_eq!(limited.signature, unlimited.signature);
}
