//! Harness run over the checked-in reference fixtures.

use fixture_fs::LoadOptions;
use fixture_harness::{assert_fixtures, collect, run};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/generator")
}

fn known_outputs() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("123\n", "456\n"),
        ("qwe\n", "rty\n"),
        ("zxc\n", "vbn\n"),
        ("123\n \n456\n", "789\n\n098\n"),
        ("a\n", ""),
    ])
}

fn lookup(input: &str) -> String {
    known_outputs().get(input).copied().unwrap_or_default().to_string()
}

#[test]
fn test_every_reference_fixture_passes() {
    let _ = fixture_harness::logging::init();
    assert_fixtures(fixtures_dir(), &LoadOptions::default(), lookup);
}

#[test]
fn test_meta_file_is_named_and_skipped() {
    let suites = collect(fixtures_dir(), &LoadOptions::default()).unwrap();
    assert_eq!(suites.len(), 4);

    let meta = suites.iter().find(|s| s.file.ends_with("meta.txt")).unwrap();
    assert_eq!(meta.name, "123");
    assert!(meta.skip);

    let headers = suites.iter().find(|s| s.name == "headers.txt").unwrap();
    let names: Vec<&str> = headers.cases.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["line 0", "header1", "header2"]);

    let report = run(&suites, lookup);
    assert_eq!(report.to_string(), "5 passed, 0 failed, 1 skipped");
}
