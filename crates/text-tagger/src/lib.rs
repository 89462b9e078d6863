//! Word Tokenization and Part-of-Speech Tagging
//!
//! Provides the linguistic front end for title feature extraction: a
//! deterministic word tokenizer and a lexicon-driven POS tagger emitting
//! Penn-style tags.

mod lexicon;
mod tagger;
mod tokenize;

pub use lexicon::builtin_lexicon;
pub use tagger::{TaggedToken, Tagger};
pub use tokenize::tokenize;

use thiserror::Error;

/// Errors during tagger setup
#[derive(Debug, Clone, Error)]
pub enum TaggerError {
    /// The lexicon resource contains no entries
    #[error("tagger lexicon is empty")]
    EmptyLexicon,
    /// A lexicon entry has an empty word or tag
    #[error("invalid lexicon entry: word={word:?} tag={tag:?}")]
    InvalidLexiconEntry { word: String, tag: String },
}
