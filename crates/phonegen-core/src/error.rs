//! Error type shared by generation, partitioning and sinks.

use crate::constants::exit_codes;

/// Boxed error returned by [`BatchSink`](crate::sink::BatchSink) implementations.
pub type SinkError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the generation pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PhoneGenError {
    /// Area code is empty, too short, or not numeric.
    #[error("invalid area code {0:?}: expected at least 2 digits")]
    InvalidAreaCode(String),

    /// Prefix is not exactly three digits.
    #[error("invalid prefix {0:?}: expected exactly 3 digits")]
    InvalidPrefix(String),

    /// No prefixes were supplied.
    #[error("prefix list is empty")]
    EmptyPrefixes,

    /// The same prefix was supplied twice.
    #[error("prefix {0} appears more than once")]
    DuplicatePrefix(String),

    /// Requested quantity is not positive.
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(usize),

    /// Batch size is not positive.
    #[error("batch size must be positive, got {0}")]
    InvalidBatchSize(usize),

    /// Range bounds are reversed.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: u64, end: u64 },

    /// Range expands to more values than allowed.
    #[error("range of {len} numbers exceeds the limit of {max}")]
    RangeTooLarge { len: u64, max: usize },

    /// Value is not a digit string.
    #[error("invalid phone number {0:?}: expected digits only")]
    InvalidNumber(String),

    /// The sink failed to persist a batch.
    #[error("failed to write batch {index}: {source}")]
    Sink {
        index: usize,
        #[source]
        source: SinkError,
    },
}

impl PhoneGenError {
    /// Whether the error is a precondition violation rather than a runtime failure.
    #[must_use]
    pub fn is_config(&self) -> bool {
        !matches!(self, Self::Sink { .. })
    }

    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_config() {
            exit_codes::ERROR_CONFIG
        } else {
            exit_codes::ERROR_GENERIC
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_map_to_config_exit_code() {
        assert_eq!(PhoneGenError::EmptyPrefixes.exit_code(), 4);
        assert_eq!(PhoneGenError::InvalidQuantity(0).exit_code(), 4);
        assert_eq!(
            PhoneGenError::InvalidRange { start: 2, end: 1 }.exit_code(),
            4
        );
    }

    #[test]
    fn sink_error_is_generic() {
        let err = PhoneGenError::Sink {
            index: 3,
            source: "disk full".into(),
        };
        assert!(!err.is_config());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "failed to write batch 3: disk full");
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            PhoneGenError::InvalidPrefix("99".into()).to_string(),
            "invalid prefix \"99\": expected exactly 3 digits"
        );
        assert_eq!(
            PhoneGenError::DuplicatePrefix("991".into()).to_string(),
            "prefix 991 appears more than once"
        );
    }
}
