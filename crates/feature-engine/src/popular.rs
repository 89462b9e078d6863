//! Popular-Word Indicator Feature

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How title tokens are matched against vocabulary words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchCase {
    /// Exact string match
    #[default]
    Sensitive,
    /// Both sides lowercased before comparison
    Insensitive,
}

/// Ordered popular-word vocabulary.
///
/// Position in the word list is the addressing scheme for the indicator
/// vector, so the list must stay fixed for the whole ablation run. The
/// list length is the single source of `n` from construction onward.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<String>,
    /// Exact word -> position
    index: HashMap<String, usize>,
    /// Lowercased word -> position of its first occurrence
    folded_index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build a vocabulary from an ordered word list.
    ///
    /// Words must be distinct; a duplicate would make the position
    /// addressing ambiguous and is rejected up front.
    pub fn new(words: Vec<String>) -> Result<Self, FeatureError> {
        let mut index = HashMap::with_capacity(words.len());
        let mut folded_index = HashMap::with_capacity(words.len());
        for (position, word) in words.iter().enumerate() {
            if index.insert(word.clone(), position).is_some() {
                return Err(FeatureError::DuplicateVocabularyWord {
                    word: word.clone(),
                    position,
                });
            }
            folded_index.entry(word.to_lowercase()).or_insert(position);
        }
        Ok(Self {
            words,
            index,
            folded_index,
        })
    }

    /// Number of vocabulary words (the indicator vector length `n`)
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in position order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Presence indicators over the title's tokens.
    ///
    /// Position `i` is 1 iff the word at position `i` appears among the
    /// tokens. Repeated occurrences still produce a single 1 (saturating,
    /// not counting); tokens outside the vocabulary contribute nothing.
    pub fn indicators(&self, tokens: &[String], match_case: MatchCase) -> Vec<f64> {
        let mut out = vec![0.0; self.words.len()];
        for token in tokens {
            let position = match match_case {
                MatchCase::Sensitive => self.index.get(token.as_str()),
                MatchCase::Insensitive => self.folded_index.get(token.to_lowercase().as_str()),
            };
            if let Some(&position) = position {
                out[position] = 1.0;
            }
        }
        out
    }
}
