//! Run summary shared by the presenters.

use std::path::Path;
use std::time::Duration;

use serde::Serialize;

/// How the numbers were produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Random suffixes over a prefix list.
    Random,
    /// Every number in an inclusive range.
    Range,
}

/// What a run is about to do.
#[derive(Debug, Clone, Serialize)]
pub struct RunPlan {
    pub mode: RunMode,
    /// Area code (random mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    /// Prefixes in use (random mode only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,
    /// Range bounds (range mode only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(u64, u64)>,
    /// Numbers requested.
    pub requested: usize,
    /// Numbers per file.
    pub batch_size: usize,
    /// Run directory.
    pub output_dir: String,
}

impl RunPlan {
    #[must_use]
    pub fn random(
        area_code: &str,
        prefixes: Vec<String>,
        requested: usize,
        batch_size: usize,
        output_dir: &Path,
    ) -> Self {
        Self {
            mode: RunMode::Random,
            area_code: Some(area_code.to_string()),
            prefixes,
            range: None,
            requested,
            batch_size,
            output_dir: output_dir.display().to_string(),
        }
    }

    #[must_use]
    pub fn range(
        start: u64,
        end: u64,
        requested: usize,
        batch_size: usize,
        output_dir: &Path,
    ) -> Self {
        Self {
            mode: RunMode::Range,
            area_code: None,
            prefixes: Vec::new(),
            range: Some((start, end)),
            requested,
            batch_size,
            output_dir: output_dir.display().to_string(),
        }
    }
}

/// What a finished run produced.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    #[serde(flatten)]
    pub plan: RunPlan,
    /// Unique numbers generated and written.
    pub generated: usize,
    /// Workbooks written.
    pub files: usize,
    /// Wall-clock time in milliseconds.
    pub elapsed_ms: u64,
}

impl RunSummary {
    #[must_use]
    pub fn new(plan: RunPlan, generated: usize, files: usize, elapsed: Duration) -> Self {
        Self {
            plan,
            generated,
            files,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Whether fewer numbers were produced than requested.
    #[must_use]
    pub fn under_delivered(&self) -> bool {
        self.generated < self.plan.requested
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> RunPlan {
        RunPlan::random(
            "92",
            vec!["991".into(), "992".into()],
            10,
            5,
            Path::new("out/numeros_20240101_000000"),
        )
    }

    #[test]
    fn summary_json_fields() {
        let summary = RunSummary::new(plan(), 10, 2, Duration::from_millis(12));
        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["mode"], "random");
        assert_eq!(value["area_code"], "92");
        assert_eq!(value["generated"], 10);
        assert_eq!(value["files"], 2);
        assert_eq!(value["prefixes"][1], "992");
        assert!(value.get("range").is_none());
    }

    #[test]
    fn range_plan_omits_prefixes() {
        let plan = RunPlan::range(1, 100, 100, 50, Path::new("out"));
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["mode"], "range");
        assert!(json.get("prefixes").is_none());
        assert_eq!(json["range"][0], 1);
    }

    #[test]
    fn under_delivery_detection() {
        assert!(RunSummary::new(plan(), 9, 2, Duration::ZERO).under_delivered());
        assert!(!RunSummary::new(plan(), 10, 2, Duration::ZERO).under_delivered());
    }
}
