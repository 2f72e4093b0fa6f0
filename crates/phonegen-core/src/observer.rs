//! Observer pattern for batch write progress.

/// Progress update emitted after each persisted batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    /// Index of the batch just written (0 on the final update of an empty run).
    pub batch_index: usize,
    /// Numbers in that batch.
    pub batch_len: usize,
    /// Numbers written so far.
    pub written: usize,
    /// Numbers to write in total.
    pub total: usize,
    /// Total batch count.
    pub batch_count: usize,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Update for a written batch.
    #[must_use]
    pub fn batch(
        batch_index: usize,
        batch_len: usize,
        written: usize,
        total: usize,
        batch_count: usize,
    ) -> Self {
        Self {
            batch_index,
            batch_len,
            written,
            total,
            batch_count,
            done: false,
        }
    }

    /// Completion update.
    #[must_use]
    pub fn done(written: usize, batch_count: usize) -> Self {
        Self {
            batch_index: batch_count,
            batch_len: 0,
            written,
            total: written,
            batch_count,
            done: true,
        }
    }

    /// Fraction written, in `[0.0, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.written as f64 / self.total as f64
        }
    }
}

/// Receives progress updates from [`write_batches`](crate::sink::write_batches).
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Subject that fans updates out to a collection of observers.
#[derive(Default)]
pub struct ProgressSubject {
    observers: Vec<Box<dyn ProgressObserver>>,
}

impl ProgressSubject {
    /// Create a new subject with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn register(&mut self, observer: Box<dyn ProgressObserver>) {
        self.observers.push(observer);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.register(Box::new(observer));
        self
    }

    /// Get the number of registered observers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.observers.len()
    }
}

impl ProgressObserver for ProgressSubject {
    fn on_progress(&self, update: &ProgressUpdate) {
        for observer in &self.observers {
            observer.on_progress(update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingObserver(Arc<AtomicUsize>);

    impl ProgressObserver for CountingObserver {
        fn on_progress(&self, _update: &ProgressUpdate) {
            self.0.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn subject_notifies_all_observers() {
        let hits = Arc::new(AtomicUsize::new(0));
        let subject = ProgressSubject::new()
            .with(CountingObserver(Arc::clone(&hits)))
            .with(CountingObserver(Arc::clone(&hits)));
        assert_eq!(subject.count(), 2);

        subject.on_progress(&ProgressUpdate::batch(1, 1, 1, 2, 2));
        subject.on_progress(&ProgressUpdate::done(2, 2));
        assert_eq!(hits.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn empty_subject_is_silent() {
        let subject = ProgressSubject::new();
        subject.on_progress(&ProgressUpdate::done(0, 0));
        assert_eq!(subject.count(), 0);
    }

    #[test]
    fn progress_fraction() {
        let update = ProgressUpdate::batch(1, 5, 5, 20, 4);
        assert!((update.progress() - 0.25).abs() < f64::EPSILON);
        assert!(!update.done);
    }

    #[test]
    fn done_update() {
        let update = ProgressUpdate::done(12, 3);
        assert!(update.done);
        assert!((update.progress() - 1.0).abs() < f64::EPSILON);
        assert_eq!(update.batch_index, 3);
    }

    #[test]
    fn empty_run_is_complete() {
        let update = ProgressUpdate::done(0, 0);
        assert!((update.progress() - 1.0).abs() < f64::EPSILON);
    }
}
