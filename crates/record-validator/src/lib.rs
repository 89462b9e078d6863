//! Post Record Model and Validation
//!
//! Defines the `PostRecord` input datum and strict coercion from the raw
//! record mapping produced by the dataset loader. Missing or non-numeric
//! fields are per-record errors, never silent defaults: a silently-zeroed
//! score would bias every downstream ablation comparison.

mod error;
mod record;

pub use error::RecordError;
pub use record::PostRecord;
