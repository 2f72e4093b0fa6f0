//! Terminal progress for batch writes.

use indicatif::{ProgressBar, ProgressStyle};
use phonegen_core::{ProgressObserver, ProgressUpdate};
use phonegen_xlsx::batch_file_name;

use crate::output::format_count;

const BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Observer that drives an `indicatif` bar and lists each written file.
pub struct CLIProgressReporter {
    bar: ProgressBar,
    quiet: bool,
}

impl CLIProgressReporter {
    /// Reporter for a run writing `total` numbers. `quiet` hides everything.
    #[must_use]
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::with_template(BAR_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            bar
        };
        Self { bar, quiet }
    }
}

impl ProgressObserver for CLIProgressReporter {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            self.bar.finish_and_clear();
            return;
        }
        self.bar.set_length(update.total as u64);
        self.bar.set_position(update.written as u64);
        let name = batch_file_name(update.batch_index);
        if !self.quiet {
            let line = format!("  {name} ({})", format_count(update.batch_len));
            // suspend prints even when the bar is hidden.
            self.bar.suspend(|| println!("{line}"));
        }
        self.bar.set_message(name);
    }
}
