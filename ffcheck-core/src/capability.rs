// ============================================================================
// ffcheck-core/src/capability.rs
// ============================================================================
//
// CAPABILITY DETECTORS: FFmpeg presence, capability, and smoke-test checks
//
// This module implements the detector family built on the process invoker:
// tool presence checks, codec/format/hardware-acceleration probes, and the
// synthetic smoke test. Each detector makes exactly one invocation and
// returns its full result to the orchestrator; detectors never print and
// never touch shared state.
//
// KEY COMPONENTS:
// - Reference tables for codecs, container formats, and hw accelerators
// - Pure substring matching over captured probe output
// - ToolCheck / CapabilityProbe / SmokeTest detector result types
//
// Capability matching is a case-insensitive substring test of each id
// against the full captured text, NOT a parse of ffmpeg's table output.
// ffmpeg's listing format is informal and unstable; the substring policy is
// a deliberate approximation and must be preserved as such.

use crate::process::{CommandRunner, Outcome};
use std::time::Duration;

/// Name of the primary media-processing binary, located via PATH.
pub const FFMPEG_BIN: &str = "ffmpeg";

/// Name of the companion probing binary, located via PATH.
pub const FFPROBE_BIN: &str = "ffprobe";

/// Timeout for informational probes (version, codec/format/hwaccel lists).
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for the synthetic smoke-test transcode.
pub const SMOKE_TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Important codecs checked against `ffmpeg -codecs` output: (id, display name).
pub const REQUIRED_CODECS: &[(&str, &str)] = &[
    ("h264", "H.264/AVC"),
    ("hevc", "H.265/HEVC"),
    ("vp9", "VP9"),
    ("av1", "AV1"),
    ("aac", "AAC"),
    ("mp3", "MP3"),
    ("opus", "Opus"),
];

/// Important container formats checked against `ffmpeg -formats` output.
pub const CONTAINER_FORMATS: &[&str] = &["mp4", "webm", "mov", "avi", "mkv", "gif"];

/// Hardware acceleration methods checked against `ffmpeg -hwaccels` output:
/// (id, display name).
pub const HWACCEL_METHODS: &[(&str, &str)] = &[
    ("videotoolbox", "VideoToolbox (macOS)"),
    ("cuda", "NVIDIA CUDA"),
    ("qsv", "Intel Quick Sync"),
    ("vaapi", "VA-API (Linux)"),
    ("dxva2", "DXVA2 (Windows)"),
    ("d3d11va", "Direct3D 11 (Windows)"),
];

/// Arguments for the smoke test: generate one second of solid blue 320x240
/// video from the lavfi synthetic source and discard the output.
pub const SMOKE_TEST_ARGS: &[&str] = &[
    "-f",
    "lavfi",
    "-i",
    "color=c=blue:s=320x240:d=1",
    "-f",
    "null",
    "-",
];

/// Maximum number of error characters surfaced when the smoke test fails.
const ERROR_SNIPPET_CHARS: usize = 200;

/// Result of a presence check for an external tool.
#[derive(Debug, Clone)]
pub struct ToolCheck {
    /// Whether the tool responded successfully to `-version`.
    pub installed: bool,
    /// First line of the tool's version output, when available.
    pub version: Option<String>,
    /// Raw invocation outcome, for narration of failures.
    pub outcome: Outcome,
}

/// Found/missing capabilities, in reference-table order (not discovery order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityReport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Result of one capability probe invocation.
#[derive(Debug, Clone)]
pub struct CapabilityProbe {
    /// Raw invocation outcome.
    pub outcome: Outcome,
    /// Matched capabilities; `None` when the probe did not succeed.
    pub report: Option<CapabilityReport>,
}

/// Result of the smoke-test invocation.
#[derive(Debug, Clone)]
pub struct SmokeTest {
    /// Whether the synthetic transcode completed successfully.
    pub passed: bool,
    /// Raw invocation outcome.
    pub outcome: Outcome,
    /// Truncated stderr text, when the test failed with output.
    pub error_snippet: Option<String>,
}

/// Checks whether ffmpeg is installed and captures its version line.
pub fn check_ffmpeg(runner: &impl CommandRunner) -> ToolCheck {
    version_check(runner, FFMPEG_BIN)
}

/// Checks whether ffprobe is installed.
pub fn check_ffprobe(runner: &impl CommandRunner) -> ToolCheck {
    version_check(runner, FFPROBE_BIN)
}

fn version_check(runner: &impl CommandRunner, bin: &str) -> ToolCheck {
    let result = runner.run(bin, &["-version"], PROBE_TIMEOUT);
    let installed = result.succeeded();
    let version = if installed {
        result.stdout.lines().next().map(str::to_string)
    } else {
        None
    };
    ToolCheck {
        installed,
        version,
        outcome: result.outcome,
    }
}

/// Probes `ffmpeg -codecs` and matches the output against `REQUIRED_CODECS`.
pub fn probe_codecs(runner: &impl CommandRunner) -> CapabilityProbe {
    probe_with(runner, "-codecs", scan_codec_support)
}

/// Probes `ffmpeg -formats` and matches the output against `CONTAINER_FORMATS`.
pub fn probe_formats(runner: &impl CommandRunner) -> CapabilityProbe {
    probe_with(runner, "-formats", scan_format_support)
}

/// Probes `ffmpeg -hwaccels` and matches the output against `HWACCEL_METHODS`.
pub fn probe_hwaccels(runner: &impl CommandRunner) -> CapabilityProbe {
    probe_with(runner, "-hwaccels", scan_hwaccel_support)
}

fn probe_with(
    runner: &impl CommandRunner,
    flag: &str,
    scan: fn(&str) -> CapabilityReport,
) -> CapabilityProbe {
    let result = runner.run(FFMPEG_BIN, &[flag], PROBE_TIMEOUT);
    let report = if result.succeeded() {
        Some(scan(&result.stdout))
    } else {
        None
    };
    CapabilityProbe {
        outcome: result.outcome,
        report,
    }
}

/// Runs the synthetic smoke-test transcode.
pub fn run_smoke_test(runner: &impl CommandRunner) -> SmokeTest {
    let result = runner.run(FFMPEG_BIN, SMOKE_TEST_ARGS, SMOKE_TEST_TIMEOUT);
    let passed = result.succeeded();
    let error_snippet = if !passed && !result.stderr.is_empty() {
        Some(truncate_chars(&result.stderr, ERROR_SNIPPET_CHARS))
    } else {
        None
    };
    SmokeTest {
        passed,
        outcome: result.outcome,
        error_snippet,
    }
}

/// Matches codec ids against probe output. Pure function of the text.
pub fn scan_codec_support(output: &str) -> CapabilityReport {
    scan_named(output, REQUIRED_CODECS)
}

/// Matches hardware accelerator ids against probe output.
pub fn scan_hwaccel_support(output: &str) -> CapabilityReport {
    scan_named(output, HWACCEL_METHODS)
}

/// Matches container format ids against probe output.
pub fn scan_format_support(output: &str) -> CapabilityReport {
    let haystack = output.to_lowercase();
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for id in CONTAINER_FORMATS {
        if haystack.contains(id) {
            found.push((*id).to_string());
        } else {
            missing.push((*id).to_string());
        }
    }
    CapabilityReport { found, missing }
}

fn scan_named(output: &str, table: &[(&str, &str)]) -> CapabilityReport {
    let haystack = output.to_lowercase();
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for (id, name) in table {
        if haystack.contains(id) {
            found.push((*name).to_string());
        } else {
            missing.push((*name).to_string());
        }
    }
    CapabilityReport { found, missing }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
