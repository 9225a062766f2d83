//! Integration tests for recursive fixture loading.

use fixture_fs::{Error, FixtureLoader, LoadOptions};
use fixture_test_utils::FixtureTree;
use pretty_assertions::assert_eq;
use std::path::Path;

const SIMPLE: &str = ".\na\n.\nb\n.\n";

#[test]
fn test_load_single_file() {
    let tree = FixtureTree::new().with_file("simple.txt", SIMPLE);
    let path = tree.path("simple.txt");

    let file = FixtureLoader::new().load_file(&path).unwrap().unwrap();
    assert_eq!(file.path, path);
    assert_eq!(file.fixtures.len(), 1);
    assert!(file.meta.is_none());
}

#[test]
fn test_load_file_without_fixtures_is_none() {
    let tree = FixtureTree::new().with_file("readme.md", "# nothing to see\n");
    let result = FixtureLoader::new().load_file(&tree.path("readme.md")).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_load_on_file_path_yields_one_result() {
    let tree = FixtureTree::new().with_file("simple.txt", SIMPLE);
    let files = FixtureLoader::new().load(tree.path("simple.txt")).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn test_meta_is_decoded_as_yaml() {
    let tree = FixtureTree::new().with_file(
        "meta.txt",
        "---\ndesc: 123\nskip: true\n---\n.\n123\n.\n456\n.\n",
    );

    let files = FixtureLoader::new().load(tree.root()).unwrap();
    assert_eq!(files.len(), 1);

    let meta = files[0].meta.as_ref().unwrap();
    assert_eq!(meta["desc"], serde_yaml::Value::from(123));
    assert_eq!(meta["skip"], serde_yaml::Value::Bool(true));
    assert_eq!(files[0].fixtures[0].first.text, "123\n");
    assert_eq!(files[0].fixtures[0].second.text, "456\n");
}

#[test]
fn test_broken_meta_does_not_fail_the_walk() {
    let tree = FixtureTree::new().with_file("broken.txt", "---\nkey: [oops\n---\n.\na\n.\nb\n.\n");

    let files = FixtureLoader::new().load(tree.root()).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].meta.is_none());
}

#[test]
fn test_directory_callback_runs_once_per_decoded_file() {
    let tree = FixtureTree::new()
        .with_file("one.txt", SIMPLE)
        .with_file("two.txt", "---\ndesc: meta only\n---\n")
        .with_file("nested/three.txt", SIMPLE)
        .with_file("nested/deeper/four.txt", SIMPLE)
        .with_file("notes.md", "no separators here\n")
        .with_file("truncated.txt", ".\nnever closed\n");
    tree.create_dir("empty");
    tree.assert_file_exists("nested/deeper/four.txt");

    let mut seen = Vec::new();
    let files = FixtureLoader::new()
        .load_with(tree.root(), |file| seen.push(file.path.clone()))
        .unwrap();

    assert_eq!(seen.len(), 4);
    assert_eq!(files.len(), 4);
    let from_callback: Vec<&Path> = seen.iter().map(|p| p.as_path()).collect();
    let from_result: Vec<&Path> = files.iter().map(|f| f.path()).collect();
    assert_eq!(from_callback, from_result);
}

#[test]
fn test_nested_results_are_flattened() {
    let tree = FixtureTree::new()
        .with_file("a/b/c/deep.txt", SIMPLE)
        .with_file("a/shallow.txt", SIMPLE);

    let files = FixtureLoader::new().load(tree.root()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.fixtures.len() == 1));
}

#[test]
fn test_empty_directory_yields_empty_vec() {
    let tree = FixtureTree::new();
    let files = FixtureLoader::new().load(tree.root()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_missing_path_is_an_error() {
    let tree = FixtureTree::new();
    let result = FixtureLoader::new().load(tree.path("does-not-exist"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_custom_separators_apply_to_every_file() {
    let tree = FixtureTree::new()
        .with_file("dots.txt", SIMPLE)
        .with_file("tildes.txt", "~\nx\n~\ny\n~\n");

    let loader = FixtureLoader::with_options(LoadOptions::from_spec("~"));
    let files = loader.load(tree.root()).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].fixtures[0].kind, "~");
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_skipped() {
    let tree = FixtureTree::new().with_file("real/simple.txt", SIMPLE);
    tree.create_dir("links");
    tree.symlink("real/simple.txt", "links/file-link.txt");
    tree.symlink("real", "links/dir-link");

    let files = FixtureLoader::new().load(tree.path("links")).unwrap();
    assert!(files.is_empty());

    let files = FixtureLoader::new().load(tree.root()).unwrap();
    assert_eq!(files.len(), 1);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_aborts_walk() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = FixtureTree::new();
    let path = tree.write_file("locked.txt", SIMPLE);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits, so only assert when the read really fails.
    if fs::read(&path).is_err() {
        let result = FixtureLoader::new().load(tree.root());
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
}
