//! Property-based tests for count and truncation invariants on real trees

use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;
use tree_pro::render::{display_items, DisplayItem};
use tree_pro::tree::{group_identical, DirectoryNode, WalkOptions, Walker};

const EXTENSIONS: &[&str] = &["rs", "go", "md", "TXT", ""];

/// (directory slot, extension index) per file; slot 0 is the root.
fn layout() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..4, 0..EXTENSIONS.len()), 0..24)
}

fn materialize(files: &[(usize, usize)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for slot in 1..4 {
        fs::create_dir(temp_dir.path().join(format!("d{}", slot))).unwrap();
    }
    fs::create_dir(temp_dir.path().join("d1").join("nested")).unwrap();

    for (i, (slot, ext)) in files.iter().enumerate() {
        let dir = match slot {
            0 => temp_dir.path().to_path_buf(),
            n => temp_dir.path().join(format!("d{}", n)),
        };
        let name = match EXTENSIONS[*ext] {
            "" => format!("f{}", i),
            ext => format!("f{}.{}", i, ext),
        };
        fs::write(dir.join(name), "").unwrap();
    }
    temp_dir
}

fn check_node(node: &DirectoryNode, max_files: usize) {
    assert!(node.files.len() <= max_files);
    assert_eq!(node.files.len() + node.hidden_file_count, node.immediate_file_count);
    assert_eq!(node.immediate_dir_count, node.children.len());
    assert_eq!(
        node.total_dir_count,
        node.immediate_dir_count
            + node.children.iter().map(|c| c.total_dir_count).sum::<usize>()
    );
    assert_eq!(
        node.total_file_count,
        node.immediate_file_count
            + node.children.iter().map(|c| c.total_file_count).sum::<usize>()
    );
    for child in &node.children {
        check_node(child, max_files);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_truncation_never_changes_counts_or_signatures(
        files in layout(),
        max_files in 0usize..4,
    ) {
        let temp_dir = materialize(&files);

        let limited = Walker::new(WalkOptions::unlimited().with_max_files(max_files))
            .walk(temp_dir.path())
            .unwrap();
        let full = Walker::new(WalkOptions::unlimited())
            .walk(temp_dir.path())
            .unwrap();

        check_node(&limited, max_files);
        prop_assert_eq!(limited.total_file_count, files.len());
        prop_assert_eq!(limited.total_dir_count, 4);
        prop_assert_eq!(limited.total_file_count, full.total_file_count);
        prop_assert_eq!(&limited.signature, &full.signature);
    }

    #[test]
    fn test_display_items_account_for_every_directory(
        files in layout(),
        max_dirs in 1usize..4,
    ) {
        let temp_dir = materialize(&files);
        let tree = Walker::new(WalkOptions::unlimited())
            .walk(temp_dir.path())
            .unwrap();

        let mut shown = 0;
        let mut collapsed = 0;
        for item in display_items(&tree, Some(max_dirs)) {
            match item {
                DisplayItem::Directory(_) => shown += 1,
                DisplayItem::Collapsed { count } => collapsed += count,
                _ => {}
            }
        }

        prop_assert_eq!(shown + collapsed, tree.immediate_dir_count);

        let groups = group_identical(&tree.children);
        let expected_shown: usize = groups.iter().map(|g| g.len().min(max_dirs)).sum();
        prop_assert_eq!(shown, expected_shown);
        prop_assert_eq!(groups.iter().map(|g| g.len()).sum::<usize>(), tree.children.len());
    }
}
