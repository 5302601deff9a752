//! Error types for the usbiz crate.

use chrono::NaiveDate;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BizDayError>;

/// Error type for all fallible operations in the usbiz crate.
///
/// Every condition is raised at the point of detection. Nothing is retried
/// and no partial result is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum BizDayError {
    /// The region code is neither a national code nor a known state.
    #[error("{code} is not a US state")]
    InvalidRegion {
        /// The code as supplied by the caller.
        code: String,
    },

    /// The date input could not be normalized.
    #[error("could not parse date {input:?}, expected a date formatted as 'YYYY-MM-DD'")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// A range whose start lies after its end.
    #[error("{start} is after {end}, provide a start date that is earlier than the end date")]
    InvalidRange {
        /// Start of the rejected range.
        start: NaiveDate,
        /// End of the rejected range.
        end: NaiveDate,
    },

    /// A custom holiday missing its rule or its name.
    #[error("custom holidays must include a rule and a name (rule: {rule:?}, name: {name:?})")]
    InvalidCustomHoliday {
        /// The supplied rule text.
        rule: String,
        /// The supplied name.
        name: String,
    },

    /// A holiday rule expression that does not parse.
    #[error("invalid holiday rule {rule:?}: {reason}")]
    InvalidRule {
        /// The rejected expression.
        rule: String,
        /// What went wrong.
        reason: String,
    },

    /// A numeric argument outside its accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An excluded holiday name that matches nothing (strict mode only).
    #[error("no holiday named {name:?} in this calendar")]
    UnknownHoliday {
        /// The unmatched name.
        name: String,
    },

    /// Date arithmetic left the representable range.
    #[error("date arithmetic overflowed past {date}")]
    OutOfRange {
        /// Last representable date reached.
        date: NaiveDate,
    },

    /// Calendar options could not be read.
    #[error("invalid calendar configuration: {reason}")]
    InvalidConfig {
        /// Underlying parse failure.
        reason: String,
    },
}

impl From<serde_json::Error> for BizDayError {
    fn from(err: serde_json::Error) -> Self {
        BizDayError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_region() {
        let err = BizDayError::InvalidRegion {
            code: "NZ".to_string(),
        };
        assert_eq!(err.to_string(), "NZ is not a US state");
    }

    #[test]
    fn error_invalid_range() {
        let err = BizDayError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2020, 12, 26).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 12, 23).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "2020-12-26 is after 2020-12-23, provide a start date that is earlier than the end date"
        );
    }

    #[test]
    fn error_from_serde_json() {
        let parse: std::result::Result<Vec<String>, _> = serde_json::from_str("[1,");
        let err: BizDayError = parse.unwrap_err().into();
        assert!(matches!(err, BizDayError::InvalidConfig { .. }));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<BizDayError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<BizDayError>();
    }
}
