//! # phonegen-core
//!
//! Synthetic mobile number generation for a fixed area code: deduplicated,
//! shuffled, and partitioned into fixed-size batches handed to a sink.

pub mod constants;
pub mod error;
pub mod generator;
pub mod number;
pub mod observer;
pub mod observers;
pub mod options;
pub mod partition;
pub mod range;
pub mod sink;

// Re-exports
pub use constants::{
    exit_codes, COUNTRY_CODE, DEFAULT_AREA_CODE, DEFAULT_BATCH_SIZE, DEFAULT_PREFIXES,
    DEFAULT_QUANTITY,
};
pub use error::{PhoneGenError, SinkError};
pub use generator::{generate, NumberGenerator};
pub use number::{AreaCode, PhoneNumber, Prefix, PrefixSet};
pub use observer::{ProgressObserver, ProgressSubject, ProgressUpdate};
pub use options::GenerationOptions;
pub use partition::{partition, Batch, Batches};
pub use range::generate_range;
pub use sink::{write_batches, BatchSink, MemorySink, WriteSummary};
