//! Feature Vector Assembly
//!
//! One configurable vectorizer replaces the family of near-identical
//! per-ablation functions: the full variant enables every block, and each
//! ablated variant disables exactly one. Disabling a block removes its
//! positions from the output entirely, so all variants agree bit-for-bit
//! on the blocks they share.

use crate::config::VectorizerConfig;
use crate::error::FeatureError;
use crate::popular::Vocabulary;
use crate::{pos, time};
use record_validator::PostRecord;
use serde::{Deserialize, Serialize};
use text_tagger::{tokenize, Tagger};
use tracing::debug;

/// Named feature blocks, in emission order.
///
/// The output vector is `[bias=1]` followed by the enabled blocks in this
/// order. Order is part of the contract: it defines the vector positions a
/// fixed-size model consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureBlock {
    /// Award score
    Score,
    /// Number of comments
    CommentCount,
    /// Character length of the title
    CharLength,
    /// Word count of the tokenized title
    WordCount,
    /// Original-content marker indicator
    Originality,
    /// Part-of-speech frequency counts
    PosFrequency,
    /// Hour and weekday n-1 one-hot encoding
    TimeOneHot,
    /// Popular-word presence indicators
    PopularWords,
}

impl FeatureBlock {
    /// All blocks in emission order
    pub const ALL: [FeatureBlock; 8] = [
        FeatureBlock::Score,
        FeatureBlock::CommentCount,
        FeatureBlock::CharLength,
        FeatureBlock::WordCount,
        FeatureBlock::Originality,
        FeatureBlock::PosFrequency,
        FeatureBlock::TimeOneHot,
        FeatureBlock::PopularWords,
    ];

    /// Fixed width of this block for a vocabulary of `vocab_len` words
    pub fn width(&self, vocab_len: usize) -> usize {
        match self {
            FeatureBlock::Score
            | FeatureBlock::CommentCount
            | FeatureBlock::CharLength
            | FeatureBlock::WordCount
            | FeatureBlock::Originality => 1,
            FeatureBlock::PosFrequency => pos::POS_WIDTH,
            FeatureBlock::TimeOneHot => time::TIME_WIDTH,
            FeatureBlock::PopularWords => vocab_len,
        }
    }

    /// Stable name for logs and ablation reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureBlock::Score => "score",
            FeatureBlock::CommentCount => "comment_count",
            FeatureBlock::CharLength => "char_length",
            FeatureBlock::WordCount => "word_count",
            FeatureBlock::Originality => "originality",
            FeatureBlock::PosFrequency => "pos_frequency",
            FeatureBlock::TimeOneHot => "time_one_hot",
            FeatureBlock::PopularWords => "popular_words",
        }
    }
}

/// Set of enabled feature blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSet {
    enabled: [bool; 8],
}

impl BlockSet {
    /// Every block enabled (the full vectorizer)
    pub fn all() -> Self {
        Self { enabled: [true; 8] }
    }

    /// This set minus one block
    pub fn without(mut self, block: FeatureBlock) -> Self {
        self.enabled[block as usize] = false;
        self
    }

    /// This set plus one block
    pub fn with(mut self, block: FeatureBlock) -> Self {
        self.enabled[block as usize] = true;
        self
    }

    /// Whether `block` is enabled
    pub fn contains(&self, block: FeatureBlock) -> bool {
        self.enabled[block as usize]
    }
}

impl Default for BlockSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Builds feature vectors for post records.
///
/// Pure over its inputs after construction: the vocabulary, lexicon, and
/// config are read-only, so one vectorizer may be shared across threads to
/// process records in parallel.
pub struct Vectorizer {
    config: VectorizerConfig,
    vocabulary: Vocabulary,
    tagger: Tagger,
    /// Lowercased originality markers
    markers: Vec<String>,
}

impl Vectorizer {
    /// Create a vectorizer.
    ///
    /// Performs the one-time tagger setup; a broken linguistic resource
    /// fails here, before any record is vectorized.
    pub fn new(config: VectorizerConfig, vocabulary: Vocabulary) -> Result<Self, FeatureError> {
        let tagger = Tagger::new()?;
        Ok(Self::with_tagger(config, vocabulary, tagger))
    }

    /// Create a vectorizer with a caller-supplied tagger.
    pub fn with_tagger(config: VectorizerConfig, vocabulary: Vocabulary, tagger: Tagger) -> Self {
        let markers = config
            .originality_markers
            .iter()
            .map(|m| m.to_lowercase())
            .collect();
        Self {
            config,
            vocabulary,
            tagger,
            markers,
        }
    }

    /// Length of every vector this vectorizer produces
    pub fn vector_len(&self) -> usize {
        1 + FeatureBlock::ALL
            .iter()
            .filter(|&&block| self.config.blocks.contains(block))
            .map(|block| block.width(self.vocabulary.len()))
            .sum::<usize>()
    }

    /// Build the feature vector for one record.
    ///
    /// Emits the bias term, then each enabled block in `FeatureBlock::ALL`
    /// order. The title is tokenized once and the tokens are reused by
    /// every block that needs them.
    pub fn vectorize(&self, record: &PostRecord) -> Result<Vec<f64>, FeatureError> {
        let tokens = tokenize(&record.title);
        let mut features = Vec::with_capacity(self.vector_len());
        features.push(1.0);

        for block in FeatureBlock::ALL {
            if !self.config.blocks.contains(block) {
                continue;
            }
            match block {
                FeatureBlock::Score => features.push(record.score as f64),
                FeatureBlock::CommentCount => features.push(record.number_of_comments as f64),
                FeatureBlock::CharLength => {
                    features.push(record.title.chars().count() as f64);
                }
                FeatureBlock::WordCount => features.push(tokens.len() as f64),
                FeatureBlock::Originality => {
                    features.push(if self.is_original(&record.title) { 1.0 } else { 0.0 });
                }
                FeatureBlock::PosFrequency => {
                    let tagged = self.tagger.tag(&tokens);
                    features.extend(pos::frequencies(&tagged).iter().map(|&c| f64::from(c)));
                }
                FeatureBlock::TimeOneHot => {
                    features.extend(time::encode(record.unixtime, self.config.time_basis)?);
                }
                FeatureBlock::PopularWords => {
                    features.extend(self.vocabulary.indicators(&tokens, self.config.match_case));
                }
            }
        }

        debug!(len = features.len(), "feature vector assembled");
        Ok(features)
    }

    fn is_original(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        self.markers.iter().any(|marker| lower.contains(marker.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::popular::MatchCase;
    use crate::time::TimeBasis;
    use serde_json::json;

    fn vocab(words: &[&str]) -> Vocabulary {
        Vocabulary::new(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    fn record(title: &str) -> PostRecord {
        PostRecord {
            title: title.to_string(),
            score: 10,
            number_of_comments: 3,
            unixtime: 1609459200.0,
        }
    }

    fn utc_config() -> VectorizerConfig {
        VectorizerConfig {
            time_basis: TimeBasis::Utc,
            ..VectorizerConfig::full()
        }
    }

    /// Start offset of each block in the full vector (after the bias term)
    fn block_span(block: FeatureBlock, vocab_len: usize) -> (usize, usize) {
        let mut offset = 1;
        for candidate in FeatureBlock::ALL {
            let width = candidate.width(vocab_len);
            if candidate == block {
                return (offset, width);
            }
            offset += width;
        }
        unreachable!("block is in ALL");
    }

    #[test]
    fn test_full_vector_layout() {
        let vocabulary = vocab(&["cat", "dog"]);
        let vectorizer = Vectorizer::new(utc_config(), vocabulary).unwrap();
        // 1 bias + 5 scalars + 6 POS + 29 time + 2 popular
        assert_eq!(vectorizer.vector_len(), 43);
        let vector = vectorizer.vectorize(&record("cat plays")).unwrap();
        assert_eq!(vector.len(), 43);
        assert_eq!(vector[0], 1.0);
        assert_eq!(vector[1], 10.0);
        assert_eq!(vector[2], 3.0);
    }

    #[test]
    fn test_end_to_end_example() {
        let config = VectorizerConfig {
            match_case: MatchCase::Insensitive,
            time_basis: TimeBasis::Utc,
            ..VectorizerConfig::full()
        };
        let raw = json!({
            "title": "Cat does a trick [OC]",
            "score": 120,
            "number_of_comments": 4,
            "unixtime": 1609459200,
        });
        let record = PostRecord::from_json(&raw).unwrap();
        let vectorizer = Vectorizer::new(config, vocab(&["cat", "trick"])).unwrap();
        let vector = vectorizer.vectorize(&record).unwrap();

        assert_eq!(vector[0], 1.0); // bias
        assert_eq!(vector[1], 120.0); // score
        assert_eq!(vector[2], 4.0); // comments
        assert_eq!(vector[3], 21.0); // character length
        assert_eq!(vector[4], 5.0); // word count
        assert_eq!(vector[5], 1.0); // [OC] marker present

        // POS block: Cat/trick/OC nouns, does verb, a determiner
        assert_eq!(&vector[6..12], &[0.0, 3.0, 0.0, 0.0, 1.0, 1.0]);

        // 2021-01-01 00:00:00 UTC: hour 0 all zeros, Friday sets week[3]
        let (time_start, time_width) = block_span(FeatureBlock::TimeOneHot, 2);
        let time_block = &vector[time_start..time_start + time_width];
        assert_eq!(time_block.iter().filter(|&&v| v == 1.0).count(), 1);
        assert_eq!(time_block[crate::time::HOUR_WIDTH + 3], 1.0);

        // Popular words: both vocabulary words present
        assert_eq!(&vector[41..43], &[1.0, 1.0]);
    }

    #[test]
    fn test_originality_marker_configurable() {
        let config = VectorizerConfig {
            originality_markers: vec!["[oc]".to_string(), "(oc)".to_string()],
            time_basis: TimeBasis::Utc,
            ..VectorizerConfig::full()
        };
        let vectorizer = Vectorizer::new(config, vocab(&[])).unwrap();
        let vector = vectorizer.vectorize(&record("my art (OC)")).unwrap();
        assert_eq!(vector[5], 1.0);
        let vector = vectorizer.vectorize(&record("my art")).unwrap();
        assert_eq!(vector[5], 0.0);
    }

    #[test]
    fn test_ablation_removes_exact_span() {
        let words = ["cat", "dog", "trick"];
        let full = Vectorizer::new(utc_config(), vocab(&words)).unwrap();
        let rec = record("The cat does a great trick [oc] again today");
        let full_vector = full.vectorize(&rec).unwrap();

        for block in FeatureBlock::ALL {
            let config = VectorizerConfig {
                blocks: BlockSet::all().without(block),
                time_basis: TimeBasis::Utc,
                ..VectorizerConfig::full()
            };
            let ablated = Vectorizer::new(config, vocab(&words)).unwrap();
            let ablated_vector = ablated.vectorize(&rec).unwrap();

            let (start, width) = block_span(block, words.len());
            assert_eq!(
                full_vector.len() - ablated_vector.len(),
                width,
                "wrong width removed for {}",
                block.as_str()
            );

            // Every retained position is unchanged
            let mut expected = full_vector.clone();
            expected.drain(start..start + width);
            assert_eq!(ablated_vector, expected, "values drifted for {}", block.as_str());
        }
    }

    #[test]
    fn test_vector_len_matches_output() {
        for block in FeatureBlock::ALL {
            let config = VectorizerConfig {
                blocks: BlockSet::all().without(block),
                time_basis: TimeBasis::Utc,
                ..VectorizerConfig::full()
            };
            let vectorizer = Vectorizer::new(config, vocab(&["cat"])).unwrap();
            let vector = vectorizer.vectorize(&record("a title")).unwrap();
            assert_eq!(vector.len(), vectorizer.vector_len());
        }
    }

    #[test]
    fn test_same_length_across_records() {
        let vectorizer = Vectorizer::new(utc_config(), vocab(&["cat", "dog"])).unwrap();
        let lens: Vec<usize> = ["", "one", "a much longer title with many words [OC]"]
            .iter()
            .map(|t| vectorizer.vectorize(&record(t)).unwrap().len())
            .collect();
        assert!(lens.iter().all(|&l| l == lens[0]));
    }

    #[test]
    fn test_deterministic_per_record() {
        let vectorizer = Vectorizer::new(utc_config(), vocab(&["cat"])).unwrap();
        let rec = record("My cat does tricks");
        assert_eq!(
            vectorizer.vectorize(&rec).unwrap(),
            vectorizer.vectorize(&rec).unwrap()
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// POS counts never exceed the token count.
            #[test]
            fn prop_pos_counts_bounded(title in "[a-zA-Z0-9 \\[\\]'!,.]{0,60}") {
                let tagger = Tagger::new().unwrap();
                let tokens = tokenize(&title);
                let counts = crate::pos::frequencies(&tagger.tag(&tokens));
                let total: u32 = counts.iter().sum();
                prop_assert!(total as usize <= tokens.len());
            }

            /// Every ablated variant shrinks the vector by exactly the
            /// omitted block's width and leaves other values unchanged.
            #[test]
            fn prop_ablation_invariant(
                title in "[a-zA-Z \\[\\]]{0,40}",
                score in -10_000i64..10_000,
                comments in 0i64..100_000,
                unixtime in 0i64..4_102_444_800,
            ) {
                let rec = PostRecord {
                    title,
                    score,
                    number_of_comments: comments,
                    unixtime: unixtime as f64,
                };
                let words = ["cat", "dog"];
                let full = Vectorizer::new(utc_config(), vocab(&words)).unwrap();
                let full_vector = full.vectorize(&rec).unwrap();

                for block in FeatureBlock::ALL {
                    let config = VectorizerConfig {
                        blocks: BlockSet::all().without(block),
                        time_basis: TimeBasis::Utc,
                        ..VectorizerConfig::full()
                    };
                    let ablated = Vectorizer::new(config, vocab(&words)).unwrap();
                    let ablated_vector = ablated.vectorize(&rec).unwrap();

                    let (start, width) = block_span(block, words.len());
                    prop_assert_eq!(full_vector.len() - ablated_vector.len(), width);
                    let mut expected = full_vector.clone();
                    expected.drain(start..start + width);
                    prop_assert_eq!(ablated_vector, expected);
                }
            }

            /// Popular-word ones are bounded by the vocabulary size.
            #[test]
            fn prop_popular_ones_bounded(title in "[a-z ]{0,60}") {
                let vocabulary = vocab(&["cat", "dog", "fish"]);
                let out = vocabulary.indicators(&tokenize(&title), MatchCase::Sensitive);
                let ones = out.iter().filter(|&&v| v == 1.0).count();
                prop_assert!(ones <= vocabulary.len());
            }
        }
    }
}
