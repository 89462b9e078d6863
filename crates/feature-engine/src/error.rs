//! Feature Extraction Error Types

use text_tagger::TaggerError;
use thiserror::Error;

/// Errors during feature extraction and evaluation
#[derive(Debug, Clone, Error)]
pub enum FeatureError {
    /// Hour outside [0, 23] reached the temporal encoder
    #[error("hour {0} is out of range [0, 23]")]
    HourOutOfRange(u32),

    /// Weekday outside [0, 6] reached the temporal encoder
    #[error("weekday {0} is out of range [0, 6]")]
    WeekdayOutOfRange(u32),

    /// Timestamp not representable in the configured time zone
    #[error("unixtime {0} is not a representable timestamp")]
    InvalidTimestamp(f64),

    /// Vocabulary contains the same word twice
    #[error("duplicate vocabulary word {word:?} at position {position}")]
    DuplicateVocabularyWord { word: String, position: usize },

    /// Prediction and label sequences differ in length
    #[error("length mismatch: {predictions} predictions vs {labels} labels")]
    LengthMismatch { predictions: usize, labels: usize },

    /// Error metric over empty sequences
    #[error("error metric requires non-empty inputs")]
    EmptyInput,

    /// Tagger setup failed
    #[error(transparent)]
    Tagger(#[from] TaggerError),
}
