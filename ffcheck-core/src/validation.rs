// ============================================================================
// ffcheck-core/src/validation.rs
// ============================================================================
//
// ORCHESTRATOR: Fixed validation sequence and verdict
//
// Drives the detectors in a fixed order, narrates every outcome to the
// console, builds the `ValidationResults` record, writes the JSON report,
// and computes the overall verdict.
//
// SEQUENCE:
// system info → ffmpeg check → (short-circuit on failure: installation
// suggestions, failed verdict) → ffprobe check → codec probe → format probe
// → hw-accel probe → skill check → smoke test → report → summary.
//
// POLICY:
// - Verdict = ffmpeg installed AND skill installed AND smoke test passed.
// - ffprobe and all capability probes are advisory: warnings only.
// - Detectors return their full result here; this module is the only writer
//   of `ValidationResults`, and the only place that prints.
// - Strictly sequential, one attempt per check, no retries.

use crate::capability::{self, CapabilityProbe, SmokeTest, ToolCheck};
use crate::error::CoreResult;
use crate::process::{CommandRunner, Outcome};
use crate::report::{self, ValidationResults};
use crate::skill::{self, SkillStatus};
use crate::system_info::SystemInfo;
use crate::terminal;
use std::path::{Path, PathBuf};

/// Banner title printed at the start of every run.
const BANNER_TITLE: &str = "FFmpeg Toolkit - System Validation";

/// Final state of a validation run.
#[derive(Debug, Clone)]
pub struct ValidationSummary {
    /// The aggregated result record (also serialized to the report file).
    pub results: ValidationResults,
    /// Overall verdict: ffmpeg installed && skill installed && test passed.
    pub passed: bool,
    /// Path of the written report; `None` when the run short-circuited
    /// before the report step.
    pub report_path: Option<PathBuf>,
}

/// Runs the full validation sequence.
///
/// `home_dir` locates the skill installation; `report_dir` receives the
/// JSON report (the current working directory in production). Returns an
/// error only for faults outside the detector taxonomy, such as a failed
/// report write.
pub fn run_validation(
    runner: &impl CommandRunner,
    home_dir: &Path,
    report_dir: &Path,
) -> CoreResult<ValidationSummary> {
    terminal::print_banner(BANNER_TITLE);

    let system = SystemInfo::collect();
    terminal::print_section("System Information");
    terminal::print_info(&format!("Operating System: {} {}", system.os, system.release));
    terminal::print_info(&format!("Architecture: {}", system.architecture));

    terminal::print_section("FFmpeg Installation");
    let ffmpeg = capability::check_ffmpeg(runner);
    narrate_ffmpeg_check(&ffmpeg);

    // ffmpeg gates everything downstream; stop early when it is absent.
    if !ffmpeg.installed {
        print_install_suggestions(&system.os);
        terminal::print_error("FFmpeg validation failed");
        let results = ValidationResults {
            ffmpeg_installed: false,
            ffprobe_installed: false,
            skill_installed: false,
            test_passed: false,
            system,
        };
        return Ok(ValidationSummary {
            results,
            passed: false,
            report_path: None,
        });
    }

    let ffprobe = capability::check_ffprobe(runner);
    narrate_ffprobe_check(&ffprobe);

    terminal::print_section("FFmpeg Capabilities");
    let codecs = capability::probe_codecs(runner);
    narrate_codec_probe(&codecs);
    let formats = capability::probe_formats(runner);
    narrate_format_probe(&formats);
    let hwaccels = capability::probe_hwaccels(runner);
    narrate_hwaccel_probe(&hwaccels);

    terminal::print_section("Skill Installation");
    let skill_status = skill::check_skill_install(home_dir);
    narrate_skill_status(&skill_status, home_dir);

    terminal::print_section("Running Test Command");
    let smoke = capability::run_smoke_test(runner);
    narrate_smoke_test(&smoke);

    let results = ValidationResults {
        ffmpeg_installed: ffmpeg.installed,
        ffprobe_installed: ffprobe.installed,
        skill_installed: skill_status.is_installed(),
        test_passed: smoke.passed,
        system,
    };

    let report_path = report::write_report(&results, report_dir)?;
    terminal::print_info(&format!("Report saved to: {}", report_path.display()));

    terminal::print_section("Validation Summary");
    let passed = results.ffmpeg_installed && results.skill_installed && results.test_passed;
    if passed {
        terminal::print_success("All checks passed!");
        terminal::print_info("You're ready to use the FFmpeg Toolkit skill");
    } else {
        terminal::print_warning("Some checks failed");
        if !results.skill_installed {
            terminal::print_info("Install the skill with: ./install.sh");
        }
    }

    Ok(ValidationSummary {
        results,
        passed,
        report_path: Some(report_path),
    })
}

fn narrate_ffmpeg_check(check: &ToolCheck) {
    if check.installed {
        let version = check.version.as_deref().unwrap_or("(version unknown)");
        terminal::print_success(&format!("ffmpeg installed: {}", version));
        return;
    }
    match &check.outcome {
        Outcome::NotFound => terminal::print_error("ffmpeg not found in PATH"),
        Outcome::TimedOut => terminal::print_error("ffmpeg command timed out"),
        Outcome::OtherError(msg) => {
            terminal::print_error(&format!("Error checking ffmpeg: {}", msg));
        }
        _ => terminal::print_error("ffmpeg command failed"),
    }
}

fn narrate_ffprobe_check(check: &ToolCheck) {
    if check.installed {
        terminal::print_success("ffprobe installed");
    } else if check.outcome == Outcome::NotFound {
        terminal::print_warning("ffprobe not found (optional but recommended)");
    } else {
        terminal::print_warning("ffprobe command failed");
    }
}

fn narrate_codec_probe(probe: &CapabilityProbe) {
    match &probe.report {
        Some(report) => {
            terminal::print_info(&format!("Supported codecs: {}", report.found.join(", ")));
            if !report.missing.is_empty() {
                terminal::print_warning(&format!("Missing codecs: {}", report.missing.join(", ")));
            }
        }
        None => terminal::print_warning("Could not retrieve codec information"),
    }
}

fn narrate_format_probe(probe: &CapabilityProbe) {
    match &probe.report {
        Some(report) => {
            terminal::print_info(&format!("Supported formats: {}", report.found.join(", ")));
        }
        None => terminal::print_warning("Could not retrieve format information"),
    }
}

fn narrate_hwaccel_probe(probe: &CapabilityProbe) {
    match &probe.report {
        Some(report) if !report.found.is_empty() => {
            terminal::print_success(&format!(
                "Hardware acceleration: {}",
                report.found.join(", ")
            ));
        }
        Some(_) => terminal::print_info("No hardware acceleration detected"),
        None => terminal::print_warning("Could not retrieve hardware acceleration information"),
    }
}

fn narrate_skill_status(status: &SkillStatus, home_dir: &Path) {
    match status {
        SkillStatus::Installed { marker_size } => {
            terminal::print_success(&format!(
                "Skill directory found: {}",
                skill::skill_dir(home_dir).display()
            ));
            terminal::print_success("SKILL.md file found");
            terminal::print_success(&format!("SKILL.md size: {} bytes", marker_size));
        }
        SkillStatus::DirMissing { expected } => {
            terminal::print_warning(&format!("Skill not installed in {}", expected.display()));
            terminal::print_info("Run install.sh to install the skill");
        }
        SkillStatus::MarkerMissing => {
            terminal::print_success(&format!(
                "Skill directory found: {}",
                skill::skill_dir(home_dir).display()
            ));
            terminal::print_error("SKILL.md not found");
        }
        SkillStatus::MarkerEmpty => {
            terminal::print_success(&format!(
                "Skill directory found: {}",
                skill::skill_dir(home_dir).display()
            ));
            terminal::print_success("SKILL.md file found");
            terminal::print_error("SKILL.md is empty");
        }
    }
}

fn narrate_smoke_test(smoke: &SmokeTest) {
    if smoke.passed {
        terminal::print_success("Test command executed successfully");
        return;
    }
    match &smoke.outcome {
        Outcome::TimedOut => terminal::print_error("Test command timed out"),
        Outcome::OtherError(msg) => {
            terminal::print_error(&format!("Test command error: {}", msg));
        }
        _ => terminal::print_error("Test command failed"),
    }
    if let Some(snippet) = &smoke.error_snippet {
        terminal::print_plain(&format!("  Error: {}", snippet));
    }
}

/// Prints install instructions for the detected OS family. Three recognized
/// families get package-manager commands; everything else gets the download
/// URL.
fn print_install_suggestions(os: &str) {
    terminal::print_section("Installation Instructions");
    match os {
        "macos" => {
            terminal::print_plain("macOS detected:");
            terminal::print_plain("  brew install ffmpeg");
        }
        "linux" => {
            terminal::print_plain("Linux detected:");
            terminal::print_plain("  Ubuntu/Debian: sudo apt-get install ffmpeg");
            terminal::print_plain("  Fedora:        sudo dnf install ffmpeg");
            terminal::print_plain("  Arch:          sudo pacman -S ffmpeg");
        }
        "windows" => {
            terminal::print_plain("Windows detected:");
            terminal::print_plain("  choco install ffmpeg");
            terminal::print_plain("  or download from: https://ffmpeg.org/download.html");
        }
        other => {
            terminal::print_plain(&format!("Unknown OS: {}", other));
            terminal::print_plain("  Visit: https://ffmpeg.org/download.html");
        }
    }
}
