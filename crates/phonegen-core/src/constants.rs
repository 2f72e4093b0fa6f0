//! Number format constants and run defaults.

/// Country code prepended to every generated number.
pub const COUNTRY_CODE: &str = "55";

/// Area code used when none is configured (Manaus/AM).
pub const DEFAULT_AREA_CODE: &str = "92";

/// Built-in prefix allow-list for the default area code.
pub const DEFAULT_PREFIXES: [&str; 10] = [
    "991", "992", "993", "994", "981", "982", "983", "984", "985", "986",
];

/// Total quantity requested when none is configured.
pub const DEFAULT_QUANTITY: usize = 1_000_000;

/// Numbers per output batch when none is configured.
pub const DEFAULT_BATCH_SIZE: usize = 5_000;

/// Required length of a prefix.
pub const PREFIX_LEN: usize = 3;

/// Minimum length of an area code.
pub const MIN_AREA_CODE_LEN: usize = 2;

/// Number of digits in a suffix.
pub const SUFFIX_DIGITS: usize = 6;

/// Largest suffix value (inclusive).
pub const SUFFIX_MAX: u32 = 999_999;

/// Count of distinct suffixes available to a single prefix.
pub const SUFFIX_SPACE: usize = SUFFIX_MAX as usize + 1;

/// Draws allowed per wanted suffix before a prefix gives up.
pub const RETRY_FACTOR: usize = 3;

/// Range sizes above this are logged as unusually large.
pub const RANGE_WARN_THRESHOLD: usize = 1_000_000;

/// Hard ceiling on the number of values a single range may expand to.
pub const MAX_RANGE_LEN: usize = 100_000_000;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error, including I/O failures while writing batches.
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefixes_are_three_digits() {
        for prefix in DEFAULT_PREFIXES {
            assert_eq!(prefix.len(), PREFIX_LEN);
            assert!(prefix.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn suffix_space_matches_digits() {
        assert_eq!(SUFFIX_SPACE, 10usize.pow(SUFFIX_DIGITS as u32));
    }

    #[test]
    fn default_area_code_is_valid() {
        assert!(DEFAULT_AREA_CODE.len() >= MIN_AREA_CODE_LEN);
        assert_eq!(COUNTRY_CODE.len(), 2);
    }
}
