//! Batch persistence boundary.
//!
//! [`write_batches`] partitions a sequence and hands each batch, in index
//! order, to a [`BatchSink`]. Only one batch is borrowed at a time. The first
//! sink failure stops the loop; batches already written are left in place.

use tracing::debug;

use crate::error::{PhoneGenError, SinkError};
use crate::number::PhoneNumber;
use crate::observer::{ProgressObserver, ProgressUpdate};
use crate::partition::{batch_count, partition, Batch};

/// Destination for partitioned batches.
pub trait BatchSink {
    /// Persist one batch.
    fn write_batch(&mut self, batch: &Batch<'_>) -> Result<(), SinkError>;
}

impl<F> BatchSink for F
where
    F: FnMut(&Batch<'_>) -> Result<(), SinkError>,
{
    fn write_batch(&mut self, batch: &Batch<'_>) -> Result<(), SinkError> {
        self(batch)
    }
}

/// Sink that keeps every batch in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    batches: Vec<(usize, Vec<PhoneNumber>)>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected `(index, numbers)` pairs, in write order.
    #[must_use]
    pub fn batches(&self) -> &[(usize, Vec<PhoneNumber>)] {
        &self.batches
    }

    /// All collected numbers, concatenated in write order.
    #[must_use]
    pub fn concatenated(&self) -> Vec<PhoneNumber> {
        self.batches
            .iter()
            .flat_map(|(_, numbers)| numbers.iter().cloned())
            .collect()
    }
}

impl BatchSink for MemorySink {
    fn write_batch(&mut self, batch: &Batch<'_>) -> Result<(), SinkError> {
        self.batches.push((batch.index, batch.numbers.to_vec()));
        Ok(())
    }
}

/// Outcome of a completed write loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    /// Batches handed to the sink.
    pub batches: usize,
    /// Numbers handed to the sink.
    pub written: usize,
}

/// Partition `numbers` and feed each batch to `sink`, reporting to `observer`.
pub fn write_batches(
    numbers: &[PhoneNumber],
    batch_size: usize,
    sink: &mut dyn BatchSink,
    observer: &dyn ProgressObserver,
) -> Result<WriteSummary, PhoneGenError> {
    let batches = partition(numbers, batch_size)?;
    let total = numbers.len();
    let count = batch_count(total, batch_size);
    let mut written = 0;

    for batch in batches {
        sink.write_batch(&batch)
            .map_err(|source| PhoneGenError::Sink {
                index: batch.index,
                source,
            })?;
        written += batch.len();
        debug!(index = batch.index, len = batch.len(), "Batch handed to sink");
        observer.on_progress(&ProgressUpdate::batch(
            batch.index,
            batch.len(),
            written,
            total,
            count,
        ));
    }

    observer.on_progress(&ProgressUpdate::done(written, count));
    Ok(WriteSummary {
        batches: count,
        written,
    })
}
