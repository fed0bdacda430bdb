//! Error types shared by every indicator entry point.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Errors raised at the call boundary of the indicator engine.
///
/// Insufficient history is deliberately absent: a window longer than the
/// series yields an all-undefined output instead of an error.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// The price series has no observations.
    #[error("empty input: {0} requires at least one observation")]
    EmptyInput(&'static str),

    /// A parameter is outside its valid domain.
    #[error("invalid config: {param} {reason}")]
    InvalidConfig {
        /// Parameter name as it appears in `IndicatorConfig`.
        param: &'static str,
        /// Human readable constraint that was violated.
        reason: String,
    },

    /// Index/value mismatch, unordered dates or non-finite observations.
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    /// A provider record lacks a required column.
    #[error("missing column: {0}")]
    MissingColumn(&'static str),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl IndicatorError {
    #[must_use]
    pub fn invalid_config(param: &'static str, reason: impl Into<String>) -> Self {
        IndicatorError::InvalidConfig {
            param,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_series(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidSeries(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_parameter() {
        let err = IndicatorError::invalid_config("window", "must be >= 1, got 0");
        assert_eq!(err.to_string(), "invalid config: window must be >= 1, got 0");

        let err = IndicatorError::EmptyInput("psar");
        assert_eq!(
            err.to_string(),
            "empty input: psar requires at least one observation"
        );
    }

    #[test]
    fn json_errors_convert() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: IndicatorError = parse.into();
        assert!(matches!(err, IndicatorError::Json(_)));
    }
}
