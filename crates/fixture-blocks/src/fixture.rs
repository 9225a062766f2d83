//! Decoded fixture types.

use serde::Serialize;
use std::ops::Range;

/// One block of a fixture: the text between two separator lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Block lines joined with `\n`, plus one trailing `\n` when non-empty.
    pub text: String,
    /// Half-open span of 0-based source line indices, separators excluded.
    pub range: Range<usize>,
}

impl Block {
    pub(crate) fn from_lines(lines: &[&str], range: Range<usize>) -> Self {
        let mut text = lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        Self { text, range }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of source lines spanned, including blank ones.
    pub fn line_count(&self) -> usize {
        self.range.len()
    }
}

/// An input/expected-output pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    /// The separator token that delimits both blocks.
    #[serde(rename = "type")]
    pub kind: String,
    /// Label found above the opening separator, or empty.
    pub header: String,
    pub first: Block,
    pub second: Block,
}

impl Fixture {
    /// 0-based line index of the separator that opens the first block.
    ///
    /// Saturates at 0 for hand-built fixtures whose first block starts at 0.
    pub fn separator_line(&self) -> usize {
        self.first.range.start.saturating_sub(1)
    }

    /// Human-readable name: the header, or `line N` when there is none.
    pub fn label(&self) -> String {
        if self.header.is_empty() {
            format!("line {}", self.separator_line())
        } else {
            self.header.clone()
        }
    }
}

/// Result of decoding one text: raw metadata plus fixtures in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedText {
    /// Text between the metadata fences, not yet decoded. Empty if absent.
    pub meta: String,
    pub fixtures: Vec<Fixture>,
}

impl ParsedText {
    pub fn has_meta(&self) -> bool {
        !self.meta.is_empty()
    }

    /// True when there is neither metadata text nor any fixture.
    pub fn is_empty(&self) -> bool {
        !self.has_meta() && self.fixtures.is_empty()
    }
}
