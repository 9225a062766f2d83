//! Decoder for separator-delimited fixture text.
//!
//! A fixture file pairs an input block with an expected-output block, each
//! pair optionally labelled by a header line and the whole file optionally
//! preceded by a YAML metadata section:
//!
//! ```text
//! ---
//! desc: paragraphs
//! ---
//! simple paragraph
//!
//! .
//! foo
//! .
//! <p>foo</p>
//! .
//! ```
//!
//! Decoding is pure: [`decode`] takes the raw text and a [`Separators`] set
//! and returns a [`ParsedText`] holding the raw metadata text and the
//! fixtures in source order. Metadata stays undecoded here; turning it into
//! YAML values is the job of the filesystem layer.

pub mod error;
pub mod fixture;
pub mod parser;
pub mod separators;

pub use error::{Error, Result};
pub use fixture::{Block, Fixture, ParsedText};
pub use parser::{decode, is_fence};
pub use separators::{SeparatorSpec, Separators};
