// ============================================================================
// ffcheck-core/src/report.rs
// ============================================================================
//
// REPORT: Validation result record and JSON serialization
//
// The `ValidationResults` record is built incrementally by the orchestrator
// (detectors never write into it) and serialized exactly once at the end of
// a run. Serialization is deterministic: keys follow field declaration
// order, so identical input produces byte-identical output. This supports
// golden-file comparisons in tests.

use crate::error::{CoreError, CoreResult};
use crate::system_info::SystemInfo;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the report file, written to the current working directory.
pub const REPORT_FILENAME: &str = "validation_report.json";

/// Aggregated results of one validation run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResults {
    pub ffmpeg_installed: bool,
    pub ffprobe_installed: bool,
    pub skill_installed: bool,
    pub test_passed: bool,
    pub system: SystemInfo,
}

/// Renders the results as pretty-printed JSON with stable key order.
pub fn render_report(results: &ValidationResults) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Writes the report to `dir/validation_report.json`, overwriting any prior
/// file, and returns the path written.
pub fn write_report(results: &ValidationResults, dir: &Path) -> CoreResult<PathBuf> {
    let path = dir.join(REPORT_FILENAME);
    let json = render_report(results)?;
    fs::write(&path, json).map_err(|e| CoreError::ReportWrite(path.display().to_string(), e))?;
    Ok(path)
}
