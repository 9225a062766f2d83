//! Loader behaviour over the checked-in reference fixtures.

use fixture_fs::{FixtureFile, FixtureLoader};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/generator")
}

fn load_one(name: &str) -> FixtureFile {
    FixtureLoader::new()
        .load_file(&fixtures_dir().join(name))
        .unwrap()
        .unwrap_or_else(|| panic!("{name} should decode"))
}

#[test]
fn test_parses_meta() {
    let file = load_one("meta.txt");

    let meta = file.meta.as_ref().unwrap();
    assert_eq!(meta["desc"], serde_yaml::Value::from(123));
    assert_eq!(meta["skip"], serde_yaml::Value::Bool(true));

    assert_eq!(file.fixtures.len(), 1);
    assert_eq!(file.fixtures[0].first.text, "123\n");
    assert_eq!(file.fixtures[0].second.text, "456\n");
}

#[test]
fn test_parses_headers() {
    let file = load_one("headers.txt");
    assert_eq!(file.fixtures.len(), 3);

    assert_eq!(file.fixtures[0].header, "");
    assert_eq!(file.fixtures[0].first.text, "123\n");
    assert_eq!(file.fixtures[0].second.text, "456\n");

    assert_eq!(file.fixtures[1].header, "header1");
    assert_eq!(file.fixtures[1].first.text, "qwe\n");
    assert_eq!(file.fixtures[1].second.text, "rty\n");

    assert_eq!(file.fixtures[2].header, "header2");
    assert_eq!(file.fixtures[2].first.text, "zxc\n");
    assert_eq!(file.fixtures[2].second.text, "vbn\n");
}

#[test]
fn test_parses_multilines() {
    let file = load_one("multilines.txt");
    assert_eq!(file.fixtures.len(), 1);

    assert_eq!(file.fixtures[0].header, "");
    assert_eq!(file.fixtures[0].first.text, "123\n \n456\n");
    assert_eq!(file.fixtures[0].second.text, "789\n\n098\n");
}

#[test]
fn test_empty_block_has_no_trailing_newline() {
    let file = load_one("empty.txt");
    assert_eq!(file.fixtures[0].first.text, "a\n");
    assert_eq!(file.fixtures[0].second.text, "");
}

#[test]
fn test_unterminated_fixture_is_not_decoded() {
    let result = FixtureLoader::new()
        .load_file(&fixtures_dir().join("unterminated.fixture"))
        .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_scans_directory() {
    let mut files = 0;
    FixtureLoader::new()
        .load_with(fixtures_dir(), |_| files += 1)
        .unwrap();
    assert_eq!(files, 4);
}
