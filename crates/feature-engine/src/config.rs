//! Vectorizer Configuration

use crate::popular::MatchCase;
use crate::time::TimeBasis;
use crate::vectorizer::{BlockSet, FeatureBlock};
use serde::{Deserialize, Serialize};

/// Configuration for one vectorizer variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Feature blocks included in the output vector
    pub blocks: BlockSet,

    /// Literal markers declaring original content, matched
    /// case-insensitively against the raw title
    pub originality_markers: Vec<String>,

    /// How popular-word matching treats letter case
    pub match_case: MatchCase,

    /// Time zone used for the temporal one-hot block
    pub time_basis: TimeBasis,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            blocks: BlockSet::all(),
            originality_markers: vec!["[oc]".to_string()],
            match_case: MatchCase::Sensitive,
            time_basis: TimeBasis::Local,
        }
    }
}

impl VectorizerConfig {
    /// The full variant: every block enabled
    pub fn full() -> Self {
        Self::default()
    }

    /// An ablated variant: every block except `block`
    pub fn ablated(block: FeatureBlock) -> Self {
        Self {
            blocks: BlockSet::all().without(block),
            ..Self::default()
        }
    }
}
