//! Rendered output for real directory trees

use super::test_utils::{build_fixture, MemoryReader};
use std::path::Path;
use tree_pro::cli::{format_tree_json, format_tree_text};
use tree_pro::render::{Palette, TreePrinter};
use tree_pro::tree::{WalkOptions, Walker};

#[test]
fn test_text_output_collapses_and_truncates() {
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

    let output = TreePrinter::new(Palette::plain(), Some(1))
        .render("root/", &tree)
        .unwrap();

    let expected = "\
root/
├── pkg/
│   ├── a/
│   │   └── f.go
│   └── ... (1 identical dirs)
└── scripts/
    ├── x.sh
    ├── y.sh
    └── ... [0 directories, 3 files, showing first 2]
[5 directories, 5 files]
";
    assert_eq!(output, expected);
}

#[test]
fn test_unlimited_dirs_expand_every_member() {
    let temp_dir = build_fixture(&["a/f.go", "b/f.go", "c/f.go"]);
    let tree = Walker::new(WalkOptions::unlimited())
        .walk(temp_dir.path())
        .unwrap();

    let output = TreePrinter::new(Palette::plain(), None)
        .render(".", &tree)
        .unwrap();

    assert!(!output.contains("identical dirs"));
    assert_eq!(output.matches("f.go").count(), 3);
    assert!(output.ends_with("[4 directories, 3 files]\n"));
}

#[test]
fn test_unreadable_branch_annotation() {
    let reader = MemoryReader::new()
        .dir("/ws", &["locked/", "open/"])
        .denied("/ws/locked")
        .dir("/ws/open", &["f.txt"]);
    let tree = Walker::with_reader(reader, WalkOptions::unlimited())
        .walk(Path::new("/ws"))
        .unwrap();

    let output = format_tree_text("/ws", &tree, None, false).unwrap();

    let expected = "\
/ws/
├── locked [Permission denied]
└── open/
    └── f.txt
[3 directories, 1 files]
";
    assert_eq!(output, expected);
}

#[test]
fn test_json_output_reports_counts_and_states() {
    let temp_dir = build_fixture(&["src/lib.rs", "src/main.rs", "Cargo.toml"]);
    let tree = Walker::new(WalkOptions::unlimited().with_max_files(1))
        .walk(temp_dir.path())
        .unwrap();

    let json = format_tree_json(&tree).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["state"], "read");
    assert_eq!(value["total_dir_count"], 1);
    assert_eq!(value["total_file_count"], 3);
    let src = &value["children"][0];
    assert_eq!(src["name"], "src");
    assert_eq!(src["hidden_file_count"], 1);
    assert!(src["signature"].as_str().unwrap().starts_with("d:"));
}
