//! Post Record Coercion

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One raw social-media post, validated and ready for feature extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Post title text
    pub title: String,
    /// Award score
    pub score: i64,
    /// Number of comments on the post
    pub number_of_comments: i64,
    /// Posting time, seconds since the Unix epoch (fractional allowed)
    pub unixtime: f64,
}

impl PostRecord {
    /// Coerce a raw record mapping into a validated `PostRecord`.
    ///
    /// Numeric fields accept JSON numbers or numeric strings, since dataset
    /// loaders commonly hand every CSV column through as text. Fractional
    /// scores/comment counts are truncated toward zero; anything that fails
    /// to parse is a `RecordError`, not a default.
    pub fn from_json(value: &Value) -> Result<Self, RecordError> {
        let map = value.as_object().ok_or(RecordError::NotAnObject)?;

        let title_value = map
            .get("title")
            .ok_or(RecordError::MissingField("title"))?;
        let title = title_value
            .as_str()
            .ok_or_else(|| RecordError::InvalidTitle(title_value.to_string()))?
            .to_string();

        let score = coerce_i64("score", map.get("score"))?;
        let number_of_comments =
            coerce_i64("number_of_comments", map.get("number_of_comments"))?;
        let unixtime = coerce_f64("unixtime", map.get("unixtime"))?;

        debug!(score, number_of_comments, "record validated");
        Ok(Self {
            title,
            score,
            number_of_comments,
            unixtime,
        })
    }
}

fn coerce_i64(field: &'static str, value: Option<&Value>) -> Result<i64, RecordError> {
    let value = value.ok_or(RecordError::MissingField(field))?;
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| non_numeric(field, value)),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .or_else(|_| s.trim().parse::<f64>().map(|f| f as i64))
            .map_err(|_| non_numeric(field, value)),
        _ => Err(non_numeric(field, value)),
    }
}

fn coerce_f64(field: &'static str, value: Option<&Value>) -> Result<f64, RecordError> {
    let value = value.ok_or(RecordError::MissingField(field))?;
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| non_numeric(field, value)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| non_numeric(field, value)),
        _ => Err(non_numeric(field, value)),
    }
}

fn non_numeric(field: &'static str, value: &Value) -> RecordError {
    RecordError::NonNumeric {
        field,
        value: value.to_string(),
    }
}
