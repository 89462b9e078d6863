//! Feature Engineering Engine
//!
//! Converts validated post records into fixed-length numeric feature
//! vectors for popularity regression, and provides the ablation family of
//! vectorizer variants that each omit one named feature block.

mod config;
mod error;
mod metrics;
mod popular;
mod pos;
mod time;
mod vectorizer;

pub use config::VectorizerConfig;
pub use error::FeatureError;
pub use metrics::mse;
pub use popular::{MatchCase, Vocabulary};
pub use pos::{frequencies, PosCategory, POS_WIDTH};
pub use time::{TimeBasis, HOUR_WIDTH, TIME_WIDTH, WEEKDAY_WIDTH};
pub use vectorizer::{BlockSet, FeatureBlock, Vectorizer};
