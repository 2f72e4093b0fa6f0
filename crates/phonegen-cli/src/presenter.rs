//! Run presenters.

use crate::output::{format_count, format_duration, format_number};
use crate::report::{RunMode, RunPlan, RunSummary};
use crate::ui::{print_field, print_header, print_success, print_warning};

/// Trait for presenting a run to the user.
pub trait RunPresenter {
    /// Present the run before generation starts.
    fn present_plan(&self, plan: &RunPlan);

    /// Present the generation result, before files are written.
    fn present_generated(&self, requested: usize, generated: usize);

    /// Present the finished run.
    fn present_summary(&self, summary: &RunSummary);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Warning text for a run that produced fewer numbers than requested.
#[must_use]
pub fn under_delivery_warning(requested: usize, generated: usize) -> Option<String> {
    (generated < requested).then(|| {
        format!(
            "Only {} of {} requested could be generated",
            format_number(generated),
            format_number(requested)
        )
    })
}

/// Human-readable console presenter.
pub struct CLIRunPresenter {
    quiet: bool,
}

impl CLIRunPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl RunPresenter for CLIRunPresenter {
    fn present_plan(&self, plan: &RunPlan) {
        if self.quiet {
            return;
        }
        match (plan.mode, plan.range) {
            (RunMode::Range, Some((start, end))) => {
                print_header(&format!("Listing {}", format_count(plan.requested)));
                print_field("From", &start.to_string());
                print_field("To", &end.to_string());
            }
            _ => {
                print_header(&format!(
                    "Generating {} for area code {}",
                    format_count(plan.requested),
                    plan.area_code.as_deref().unwrap_or_default()
                ));
                print_field("Prefixes", &plan.prefixes.join(", "));
            }
        }
        print_field("Numbers per file", &format_number(plan.batch_size));
        print_field("Directory", &plan.output_dir);
        println!();
    }

    fn present_generated(&self, requested: usize, generated: usize) {
        // Shown even in quiet mode.
        if let Some(warning) = under_delivery_warning(requested, generated) {
            print_warning(&warning);
        }
        if !self.quiet {
            print_success(&format!("{} unique generated", format_count(generated)));
            println!("Writing files...");
        }
    }

    fn present_summary(&self, summary: &RunSummary) {
        if self.quiet {
            return;
        }
        println!();
        print_success("Done");
        print_field("Total numbers", &format_number(summary.generated));
        print_field("Total files", &format_number(summary.files));
        print_field("Directory", &summary.plan.output_dir);
        print_field(
            "Elapsed",
            &format_duration(std::time::Duration::from_millis(summary.elapsed_ms)),
        );
    }

    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}

/// Presenter that prints only the final summary, as JSON.
pub struct JsonRunPresenter;

impl RunPresenter for JsonRunPresenter {
    fn present_plan(&self, _plan: &RunPlan) {}

    fn present_generated(&self, requested: usize, generated: usize) {
        if generated < requested {
            tracing::warn!(requested, generated, "Under-delivered");
        }
    }

    fn present_summary(&self, summary: &RunSummary) {
        match summary.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => self.present_error(&format!("failed to encode summary: {e}")),
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
