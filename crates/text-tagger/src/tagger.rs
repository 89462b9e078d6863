//! Part-of-Speech Tagger
//!
//! Lexicon lookup with suffix-rule fallback, emitting Penn-style tags.
//! Tagging is a pure function of the token sequence once the tagger is
//! constructed, which is what makes ablation comparisons reproducible.

use crate::lexicon::builtin_lexicon;
use crate::tokenize::tokenize;
use crate::TaggerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// A token paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

/// Part-of-speech tagger over a fixed lexicon
pub struct Tagger {
    /// Lowercased word -> tag
    lexicon: HashMap<String, String>,
}

impl Tagger {
    /// Create a tagger over the built-in lexicon.
    ///
    /// Lexicon setup happens once here, before any tagging call; a broken
    /// resource surfaces as an error now rather than as silently empty
    /// features later.
    pub fn new() -> Result<Self, TaggerError> {
        Self::with_lexicon(builtin_lexicon())
    }

    /// Create a tagger over a caller-supplied lexicon of (word, tag) pairs.
    /// Words are matched case-insensitively; later entries for the same word
    /// override earlier ones.
    pub fn with_lexicon(entries: Vec<(String, String)>) -> Result<Self, TaggerError> {
        if entries.is_empty() {
            return Err(TaggerError::EmptyLexicon);
        }
        let mut lexicon = HashMap::with_capacity(entries.len());
        for (word, tag) in entries {
            if word.is_empty() || tag.is_empty() {
                return Err(TaggerError::InvalidLexiconEntry { word, tag });
            }
            lexicon.insert(word.to_lowercase(), tag);
        }
        debug!(entries = lexicon.len(), "tagger lexicon loaded");
        Ok(Self { lexicon })
    }

    /// Tag a token sequence, preserving token order.
    pub fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        tokens
            .iter()
            .map(|token| TaggedToken {
                token: token.clone(),
                tag: self.tag_token(token),
            })
            .collect()
    }

    /// Tokenize text and tag the resulting tokens.
    pub fn tag_text(&self, text: &str) -> Vec<TaggedToken> {
        self.tag(&tokenize(text))
    }

    fn tag_token(&self, token: &str) -> String {
        let lower = token.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }
        if lower.chars().all(|c| c.is_ascii_digit()) {
            return "CD".to_string();
        }
        suffix_tag(&lower).to_string()
    }
}

/// Suffix fallback for open-class words not in the lexicon. Rules are
/// checked most-specific first; the default is a singular noun.
fn suffix_tag(lower: &str) -> &'static str {
    const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish"];

    if lower.len() > 3 && lower.ends_with("ly") {
        return "RB";
    }
    if lower.len() > 4 && lower.ends_with("ing") {
        return "VBG";
    }
    if lower.len() > 3 && lower.ends_with("ed") {
        return "VBD";
    }
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|s| lower.len() > s.len() + 1 && lower.ends_with(s))
    {
        return "JJ";
    }
    if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
        return "NNS";
    }
    "NN"
}
