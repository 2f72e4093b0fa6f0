//! # phonegen-cli
//!
//! CLI output, progress display, run reports, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod report;
pub mod ui;

pub use presenter::{under_delivery_warning, CLIRunPresenter, JsonRunPresenter, RunPresenter};
pub use progress::CLIProgressReporter;
pub use report::{RunMode, RunPlan, RunSummary};
