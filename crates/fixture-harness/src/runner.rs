//! Executes suites against a transform and reports mismatches.

use crate::{Suite, collect};
use fixture_fs::LoadOptions;
use similar::TextDiff;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Outcome of a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// Output differed from the expected block.
    Failed {
        actual: String,
        /// Unified diff from expected to actual.
        diff: String,
    },
    /// The suite was marked `skip`.
    Skipped,
}

/// A case outcome with enough context to locate the fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub suite: String,
    pub case: String,
    pub file: PathBuf,
    pub line: usize,
    pub outcome: Outcome,
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} > {} ({}:{})",
            self.suite,
            self.case,
            self.file.display(),
            self.line + 1
        )
    }
}

/// Results of running a set of suites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub results: Vec<CaseResult>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    /// True when no case failed. Skipped cases do not count as failures.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}

/// Run every case of every suite through `transform`.
///
/// Cases of skipped suites are recorded as [`Outcome::Skipped`] and
/// `transform` is not called for them.
pub fn run<F>(suites: &[Suite], mut transform: F) -> Report
where
    F: FnMut(&str) -> String,
{
    let mut results = Vec::new();

    for suite in suites {
        for case in &suite.cases {
            let outcome = if suite.skip {
                Outcome::Skipped
            } else {
                let actual = transform(&case.input);
                if actual == case.expected {
                    Outcome::Passed
                } else {
                    let diff = render_diff(&case.expected, &actual);
                    Outcome::Failed { actual, diff }
                }
            };

            results.push(CaseResult {
                suite: suite.name.clone(),
                case: case.name.clone(),
                file: suite.file.clone(),
                line: case.line,
                outcome,
            });
        }
    }

    let report = Report { results };
    info!(summary = %report, "Fixture run finished");
    report
}

fn render_diff(expected: &str, actual: &str) -> String {
    TextDiff::from_lines(expected, actual)
        .unified_diff()
        .header("expected", "actual")
        .to_string()
}

/// Load, run and assert every fixture below `root`.
///
/// # Panics
/// Panics if loading fails or any case fails, listing every failing case
/// with its diff.
pub fn assert_fixtures<F>(root: impl AsRef<Path>, options: &LoadOptions, transform: F)
where
    F: FnMut(&str) -> String,
{
    let root = root.as_ref();
    let suites = collect(root, options)
        .unwrap_or_else(|e| panic!("Could not load fixtures from {}: {e}", root.display()));

    let report = run(&suites, transform);
    if report.is_success() {
        return;
    }

    let mut message = format!("Fixture mismatches in {} ({report})\n", root.display());
    for failure in report.failures() {
        warn!(case = %failure, "Fixture failed");
        if let Outcome::Failed { diff, .. } = &failure.outcome {
            message.push_str(&format!("\n{failure}\n{diff}"));
        }
    }
    panic!("{message}");
}
