//! Error types for the dateseq-calendar crate.

use chrono::NaiveDate;

/// Broad category of a [`SequenceError`].
///
/// Callers that only care whether input was malformed, a bound was hit, or
/// a layout was unusable can match on this instead of individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A date string could not be parsed.
    Parse,
    /// A generation request exceeded the allowed span or the calendar range.
    Range,
    /// A rendering layout was unusable.
    Format,
}

/// Error type for all fallible operations in the dateseq-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// Returned when a date string is not shaped like `YYYY-MM-DD`.
    #[error("invalid date {input:?}: expected YYYY-MM-DD")]
    InvalidFormat {
        /// The rejected input.
        input: String,
    },

    /// Returned when a well-shaped date string names a day that does not exist.
    #[error("invalid calendar date {input:?}")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// Returned when a step count exceeds the configured span limit.
    #[error("step count {steps} exceeds the limit of {max} days")]
    StepsOutOfRange {
        /// The requested step count.
        steps: i64,
        /// The configured limit.
        max: usize,
    },

    /// Returned when an explicit range covers more days than allowed.
    #[error("range of {days} days exceeds the limit of {max} days")]
    SpanOutOfRange {
        /// Number of days the range would contain.
        days: u64,
        /// The configured limit.
        max: usize,
    },

    /// Returned when a walk steps past the representable calendar.
    #[error("date arithmetic overflowed at {date}")]
    DateOverflow {
        /// The last representable date reached.
        date: NaiveDate,
    },

    /// Returned when a rendering layout contains an unusable specifier.
    #[error("invalid date layout {layout:?}")]
    InvalidLayout {
        /// The rejected layout.
        layout: String,
    },
}

impl SequenceError {
    /// Returns the category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } | Self::InvalidDate { .. } => ErrorKind::Parse,
            Self::StepsOutOfRange { .. }
            | Self::SpanOutOfRange { .. }
            | Self::DateOverflow { .. } => ErrorKind::Range,
            Self::InvalidLayout { .. } => ErrorKind::Format,
        }
    }
}
