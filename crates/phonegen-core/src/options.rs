//! Validated run options.

use crate::constants::{DEFAULT_BATCH_SIZE, DEFAULT_QUANTITY};
use crate::error::PhoneGenError;
use crate::number::{AreaCode, PrefixSet};

/// Inputs for a generation run.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Area code for every generated number.
    pub area_code: AreaCode,
    /// Allowed prefixes.
    pub prefixes: PrefixSet,
    /// Target number of unique numbers.
    pub quantity: usize,
    /// Numbers per output batch.
    pub batch_size: usize,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            area_code: AreaCode::default(),
            prefixes: PrefixSet::default(),
            quantity: DEFAULT_QUANTITY,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl GenerationOptions {
    /// Build options from raw inputs. `prefixes` of `None` selects the built-in list.
    pub fn new(
        area_code: &str,
        prefixes: Option<&str>,
        quantity: usize,
        batch_size: usize,
    ) -> Result<Self, PhoneGenError> {
        let prefixes = match prefixes {
            Some(list) => list.parse()?,
            None => PrefixSet::default(),
        };
        let opts = Self {
            area_code: AreaCode::new(area_code)?,
            prefixes,
            quantity,
            batch_size,
        };
        opts.validate()?;
        Ok(opts)
    }

    /// Check the numeric preconditions.
    pub fn validate(&self) -> Result<(), PhoneGenError> {
        if self.quantity == 0 {
            return Err(PhoneGenError::InvalidQuantity(self.quantity));
        }
        if self.batch_size == 0 {
            return Err(PhoneGenError::InvalidBatchSize(self.batch_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.area_code.as_str(), "92");
        assert_eq!(opts.prefixes.len(), 10);
        assert_eq!(opts.quantity, 1_000_000);
        assert_eq!(opts.batch_size, 5_000);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn custom_prefixes() {
        let opts = GenerationOptions::new("11", Some("971,972"), 100, 10).unwrap();
        assert_eq!(opts.prefixes.len(), 2);
        assert_eq!(opts.area_code.as_str(), "11");
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert!(matches!(
            GenerationOptions::new("92", None, 0, 10),
            Err(PhoneGenError::InvalidQuantity(0))
        ));
        assert!(matches!(
            GenerationOptions::new("92", None, 10, 0),
            Err(PhoneGenError::InvalidBatchSize(0))
        ));
    }

    #[test]
    fn rejects_bad_prefix_list() {
        assert!(GenerationOptions::new("92", Some("99"), 10, 10).is_err());
        assert!(GenerationOptions::new("92", Some(""), 10, 10).is_err());
    }
}
