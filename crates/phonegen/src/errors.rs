//! Error handling and exit codes.

use phonegen_core::{exit_codes, PhoneGenError};

/// Exit code for a failed run.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PhoneGenError>()
        .map_or(exit_codes::ERROR_GENERIC, PhoneGenError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(exit_code(&PhoneGenError::EmptyPrefixes.into()), 4);
        assert_eq!(exit_code(&PhoneGenError::InvalidBatchSize(0).into()), 4);
        let sink = PhoneGenError::Sink {
            index: 1,
            source: "disk full".into(),
        };
        assert_eq!(exit_code(&sink.into()), 1);
        assert_eq!(exit_code(&anyhow::anyhow!("io failure")), 1);
    }

    #[test]
    fn context_keeps_config_code() {
        let err = anyhow::Error::from(PhoneGenError::InvalidQuantity(0)).context("bad run");
        assert_eq!(exit_code(&err), 4);
    }
}
