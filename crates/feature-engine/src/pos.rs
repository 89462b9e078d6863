//! Part-of-Speech Frequency Feature

use text_tagger::TaggedToken;

/// Width of the POS-frequency block
pub const POS_WIDTH: usize = 6;

/// Generalized part-of-speech categories, in vector-position order.
///
/// The order is part of the feature contract: a fixed-size model consumes
/// these counts by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosCategory {
    Adjectives,
    Nouns,
    Adverbs,
    Pronouns,
    Verbs,
    Determiners,
}

impl PosCategory {
    /// All categories in vector-position order
    pub const ALL: [PosCategory; POS_WIDTH] = [
        PosCategory::Adjectives,
        PosCategory::Nouns,
        PosCategory::Adverbs,
        PosCategory::Pronouns,
        PosCategory::Verbs,
        PosCategory::Determiners,
    ];

    /// Map a Penn-style tag to its category by prefix.
    ///
    /// Prefixes are checked in the fixed category order, so a tag maps to
    /// at most one category. Tags matching no prefix (prepositions,
    /// numerals, ...) belong to no bucket.
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag.starts_with("JJ") {
            Some(PosCategory::Adjectives)
        } else if tag.starts_with("NN") {
            Some(PosCategory::Nouns)
        } else if tag.starts_with("RB") {
            Some(PosCategory::Adverbs)
        } else if tag.starts_with("PRP") {
            Some(PosCategory::Pronouns)
        } else if tag.starts_with("VB") {
            Some(PosCategory::Verbs)
        } else if tag.starts_with("DT") {
            Some(PosCategory::Determiners)
        } else {
            None
        }
    }
}

/// Count category frequencies over a tagged title.
///
/// An empty title yields six zeros. Counts are non-negative and sum to at
/// most the token count, since each token increments at most one bucket.
pub fn frequencies(tagged: &[TaggedToken]) -> [u32; POS_WIDTH] {
    let mut counts = [0u32; POS_WIDTH];
    for tagged_token in tagged {
        if let Some(category) = PosCategory::from_tag(&tagged_token.tag) {
            counts[category as usize] += 1;
        }
    }
    counts
}
