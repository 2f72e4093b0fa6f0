//! Application entry point and dispatch.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use tracing::info;

use phonegen_cli::{
    CLIProgressReporter, CLIRunPresenter, JsonRunPresenter, RunPlan, RunPresenter, RunSummary,
};
use phonegen_core::observers::LoggingObserver;
use phonegen_core::{
    generate_range, write_batches, NumberGenerator, PhoneGenError, PhoneNumber, ProgressSubject,
    WriteSummary,
};
use phonegen_xlsx::{create_output_dir_now, XlsxBatchSink};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        phonegen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter: Box<dyn RunPresenter> = if config.json {
        Box::new(JsonRunPresenter)
    } else {
        Box::new(CLIRunPresenter::new(config.quiet))
    };
    let mut rng = config.rng();

    let result = match config.range() {
        Some((start, end)) => run_range(config, start, end, &mut rng, presenter.as_ref()),
        None => run_random(config, &mut rng, presenter.as_ref()),
    };
    if let Err(err) = &result {
        presenter.present_error(&format!("{err:#}"));
    }
    result
}

fn run_random(config: &AppConfig, rng: &mut StdRng, presenter: &dyn RunPresenter) -> Result<()> {
    let opts = config.generation_options()?;
    let started = Instant::now();

    let dir = create_run_dir(&config.output_dir)?;
    let plan = RunPlan::random(
        opts.area_code.as_str(),
        opts.prefixes.iter().map(ToString::to_string).collect(),
        opts.quantity,
        opts.batch_size,
        &dir,
    );
    presenter.present_plan(&plan);
    info!(
        area_code = %opts.area_code,
        prefixes = %opts.prefixes,
        quantity = opts.quantity,
        "Generating numbers"
    );

    let numbers = NumberGenerator::from_options(&opts).generate(opts.quantity, rng)?;
    presenter.present_generated(opts.quantity, numbers.len());

    let written = persist(config, &numbers, opts.batch_size, &dir)?;
    presenter.present_summary(&RunSummary::new(
        plan,
        written.written,
        written.batches,
        started.elapsed(),
    ));
    Ok(())
}

fn run_range(
    config: &AppConfig,
    start: u64,
    end: u64,
    rng: &mut StdRng,
    presenter: &dyn RunPresenter,
) -> Result<()> {
    if config.per_file == 0 {
        return Err(PhoneGenError::InvalidBatchSize(config.per_file).into());
    }
    let started = Instant::now();

    info!(start, end, "Listing range");
    let numbers = generate_range(start, end, rng)?;

    let dir = create_run_dir(&config.output_dir)?;
    let plan = RunPlan::range(start, end, numbers.len(), config.per_file, &dir);
    presenter.present_plan(&plan);
    presenter.present_generated(numbers.len(), numbers.len());

    let written = persist(config, &numbers, config.per_file, &dir)?;
    presenter.present_summary(&RunSummary::new(
        plan,
        written.written,
        written.batches,
        started.elapsed(),
    ));
    Ok(())
}

fn create_run_dir(parent: &Path) -> Result<PathBuf> {
    let dir = create_output_dir_now(parent).with_context(|| {
        format!("failed to create output directory under {}", parent.display())
    })?;
    info!(dir = %dir.display(), "Output directory ready");
    Ok(dir)
}

fn persist(
    config: &AppConfig,
    numbers: &[PhoneNumber],
    batch_size: usize,
    dir: &Path,
) -> Result<WriteSummary> {
    let mut sink = XlsxBatchSink::new(dir);
    let observers = ProgressSubject::new()
        .with(LoggingObserver::new())
        .with(CLIProgressReporter::new(
            numbers.len(),
            config.quiet || config.json,
        ));

    let summary = write_batches(numbers, batch_size, &mut sink, &observers)?;
    info!(
        files = sink.files().len(),
        written = summary.written,
        "Run complete"
    );
    Ok(summary)
}
