//! Application configuration from CLI flags.

use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use phonegen_core::{
    GenerationOptions, PhoneGenError, DEFAULT_AREA_CODE, DEFAULT_BATCH_SIZE, DEFAULT_QUANTITY,
};

/// phonegen — bulk synthetic mobile phone numbers, written to batched XLSX files.
#[derive(Parser, Debug)]
#[command(name = "phonegen", version, about)]
pub struct AppConfig {
    /// Area code (DDD) of the generated numbers.
    #[arg(long = "ddd", visible_alias = "area-code", default_value = DEFAULT_AREA_CODE)]
    pub area_code: String,

    /// Total quantity of numbers to generate.
    #[arg(short = 'n', long, visible_alias = "quantidade", default_value_t = DEFAULT_QUANTITY)]
    pub quantity: usize,

    /// Numbers per XLSX file.
    #[arg(short = 'b', long, visible_alias = "por-arquivo", default_value_t = DEFAULT_BATCH_SIZE)]
    pub per_file: usize,

    /// Comma-separated prefixes (e.g. "991,992"); empty selects the built-in list.
    #[arg(long, visible_alias = "prefixos")]
    pub prefixes: Option<String>,

    /// First number of an inclusive range to list instead of random generation.
    #[arg(long, requires = "to", value_name = "NUMBER")]
    pub from: Option<u64>,

    /// Last number of the range started by --from.
    #[arg(long, requires = "from", value_name = "NUMBER")]
    pub to: Option<u64>,

    /// Parent directory of the timestamped run directory.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the run summary as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,

    /// Quiet mode (errors and warnings only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validated options for random generation.
    pub fn generation_options(&self) -> Result<GenerationOptions, PhoneGenError> {
        let prefixes = self
            .prefixes
            .as_deref()
            .filter(|list| !list.trim().is_empty());
        GenerationOptions::new(&self.area_code, prefixes, self.quantity, self.per_file)
    }

    /// Range bounds when range mode is selected.
    #[must_use]
    pub fn range(&self) -> Option<(u64, u64)> {
        self.from.zip(self.to)
    }

    /// Random source: seeded when `--seed` is given, OS entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
