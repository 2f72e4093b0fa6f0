//! Slicing a number sequence into fixed-size, 1-indexed batches.

use std::iter::FusedIterator;
use std::slice::Chunks;

use crate::error::PhoneGenError;
use crate::number::PhoneNumber;

/// A contiguous slice of the output, tagged with its 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// 1-based batch index.
    pub index: usize,
    /// Numbers in this batch, in output order.
    pub numbers: &'a [PhoneNumber],
}

impl Batch<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Lazy iterator over the batches of a sequence.
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    chunks: Chunks<'a, PhoneNumber>,
    next_index: usize,
}

impl<'a> Iterator for Batches<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let numbers = self.chunks.next()?;
        let index = self.next_index;
        self.next_index += 1;
        Some(Batch { index, numbers })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}

/// Split `numbers` into batches of `batch_size`; the last batch holds the remainder.
///
/// An empty sequence yields no batches.
pub fn partition(
    numbers: &[PhoneNumber],
    batch_size: usize,
) -> Result<Batches<'_>, PhoneGenError> {
    if batch_size == 0 {
        return Err(PhoneGenError::InvalidBatchSize(batch_size));
    }
    Ok(Batches {
        chunks: numbers.chunks(batch_size),
        next_index: 1,
    })
}

/// Number of batches `total` items split into. `batch_size` must be positive.
#[must_use]
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    total.div_ceil(batch_size.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: u64) -> Vec<PhoneNumber> {
        (1..=n).map(PhoneNumber::from_value).collect()
    }

    #[test]
    fn twelve_by_five() {
        let input = numbers(12);
        let batches: Vec<Batch<'_>> = partition(&input, 5).unwrap().collect();
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].index, 1);
        assert_eq!(batches[0].numbers, &input[0..5]);
        assert_eq!(batches[1].index, 2);
        assert_eq!(batches[1].numbers, &input[5..10]);
        assert_eq!(batches[2].index, 3);
        assert_eq!(batches[2].numbers, &input[10..12]);
    }

    #[test]
    fn exact_multiple_has_full_last_batch() {
        let input = numbers(10);
        let batches: Vec<_> = partition(&input, 5).unwrap().collect();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[1].len(), 5);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(partition(&[], 5).unwrap().count(), 0);
    }

    #[test]
    fn zero_batch_size_rejected() {
        assert!(matches!(
            partition(&numbers(3), 0),
            Err(PhoneGenError::InvalidBatchSize(0))
        ));
    }

    #[test]
    fn exact_size_hint() {
        let input = numbers(11);
        let batches = partition(&input, 4).unwrap();
        assert_eq!(batches.len(), 3);
        assert_eq!(batch_count(11, 4), 3);
        assert_eq!(batch_count(0, 4), 0);
        assert_eq!(batch_count(8, 4), 2);
    }

    #[test]
    fn repeated_partition_is_identical() {
        let input = numbers(23);
        let first: Vec<_> = partition(&input, 7).unwrap().collect();
        let second: Vec<_> = partition(&input, 7).unwrap().collect();
        assert_eq!(first, second);
    }
}
