//! Line scanner for fixture text.
//!
//! Recognition is purely positional: any line equal to a configured separator
//! opens a fixture, and the same token closes each of its two blocks. There is
//! no escaping, so separator tokens cannot appear verbatim inside a block.

use crate::{Block, Fixture, ParsedText, Separators};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Matches a metadata fence: three or more dashes and nothing else.
static FENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-{3,}$").expect("Invalid fence regex"));

/// Returns true if `line` is a metadata fence.
pub fn is_fence(line: &str) -> bool {
    FENCE_REGEX.is_match(line)
}

/// Decodes fixture text.
///
/// Returns `None` when the text has neither metadata nor a complete fixture.
/// A fixture whose closing separator is missing is dropped silently and ends
/// the scan.
///
/// # Example
/// ```
/// use fixture_blocks::{decode, Separators};
///
/// let parsed = decode(".\n123\n.\n456\n.\n", &Separators::default()).unwrap();
/// assert_eq!(parsed.fixtures.len(), 1);
/// assert_eq!(parsed.fixtures[0].first.text, "123\n");
/// assert_eq!(parsed.fixtures[0].second.text, "456\n");
/// ```
pub fn decode(content: &str, separators: &Separators) -> Option<ParsedText> {
    let mut scanner = Scanner::new(content, separators);
    let meta = scanner.read_meta();
    let fixtures = scanner.by_ref().collect();

    let parsed = ParsedText { meta, fixtures };
    if parsed.is_empty() { None } else { Some(parsed) }
}

/// Scan state for a single decode call.
struct Scanner<'a> {
    lines: Vec<&'a str>,
    separators: &'a Separators,
    /// Next line to examine.
    cursor: usize,
    /// Header lookback never reads above this line.
    lower_bound: usize,
}

impl<'a> Scanner<'a> {
    fn new(content: &'a str, separators: &'a Separators) -> Self {
        let lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        Self {
            lines,
            separators,
            cursor: 0,
            lower_bound: 0,
        }
    }

    /// Consumes the metadata section if the text opens with a fence.
    ///
    /// Without a closing fence the metadata is abandoned and scanning restarts
    /// at line 1.
    fn read_meta(&mut self) -> String {
        if !self.lines.first().is_some_and(|line| is_fence(line)) {
            return String::new();
        }

        match (1..self.lines.len()).find(|&i| is_fence(self.lines[i])) {
            Some(close) => {
                self.cursor = close + 1;
                self.lower_bound = self.cursor;
                self.lines[1..close].join("\n")
            }
            None => {
                debug!("Metadata fence is never closed, ignoring metadata");
                self.cursor = 1;
                String::new()
            }
        }
    }

    /// Reads a block starting at `start`, closed by the next line equal to `token`.
    fn read_block(&self, start: usize, token: &str) -> Option<Block> {
        let end = (start..self.lines.len()).find(|&i| self.lines[i] == token)?;
        Some(Block::from_lines(&self.lines[start..end], start..end))
    }

    /// Finds the header for a fixture whose first block starts at `block_start`.
    ///
    /// Looks at most two lines above the opening separator, stopping at a
    /// separator line (it belongs to the previous fixture) or at the first
    /// non-blank line.
    fn header_for(&self, block_start: usize) -> String {
        let Some(upper) = block_start.checked_sub(2) else {
            return String::new();
        };
        let lower = self.lower_bound.max(block_start.saturating_sub(3));

        for i in (lower..=upper).rev() {
            let line = self.lines[i];
            if self.separators.contains(line) {
                break;
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }

        String::new()
    }

    fn truncate(&mut self, open: usize) {
        debug!(line = open, "Fixture is never closed, dropping it");
        self.cursor = self.lines.len();
    }
}

impl Iterator for Scanner<'_> {
    type Item = Fixture;

    fn next(&mut self) -> Option<Fixture> {
        let open = (self.cursor..self.lines.len()).find(|&i| self.separators.contains(self.lines[i]));
        let Some(open) = open else {
            self.cursor = self.lines.len();
            return None;
        };
        let token = self.lines[open];

        let Some(first) = self.read_block(open + 1, token) else {
            self.truncate(open);
            return None;
        };
        let Some(second) = self.read_block(first.range.end + 1, token) else {
            self.truncate(open);
            return None;
        };

        self.cursor = second.range.end + 1;
        let header = self.header_for(first.range.start);

        Some(Fixture {
            kind: token.to_string(),
            header,
            first,
            second,
        })
    }
}
