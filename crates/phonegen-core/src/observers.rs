//! Concrete observer implementations.

use tracing::{debug, info};

use crate::observer::{ProgressObserver, ProgressUpdate};

/// Observer that logs each batch at debug level and completion at info level.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            info!(
                written = update.written,
                batches = update.batch_count,
                "All batches written"
            );
        } else {
            debug!(
                batch = update.batch_index,
                of = update.batch_count,
                len = update.batch_len,
                progress = format!("{:.1}%", update.progress() * 100.0),
                "Batch written"
            );
        }
    }
}

/// Null object pattern: discards all progress updates.
#[derive(Debug, Default)]
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}
