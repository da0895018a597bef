//! Integration tests for the orchestrated validation flow.
//!
//! External invocations are scripted through the `CommandRunner` seam so the
//! full sequence, the short-circuit policy, and the verdict computation can
//! be exercised without ffmpeg on the test machine.

use ffcheck_core::{
    run_validation, skill_dir, CommandRunner, Outcome, ProcessResult, REPORT_FILENAME,
};
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

/// Scripted runner: answers each invocation from a fixed table keyed by the
/// first argument, and records the calls it receives.
struct ScriptedRunner {
    responses: Vec<(&'static str, ProcessResult)>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    fn new(responses: Vec<(&'static str, ProcessResult)>) -> Self {
        Self {
            responses,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, command: &str, args: &[&str], _timeout: Duration) -> ProcessResult {
        let key = args.first().copied().unwrap_or("");
        self.calls
            .borrow_mut()
            .push(format!("{} {}", command, key));
        // ffprobe shares the "-version" key with ffmpeg; disambiguate on the
        // command name first.
        for (expected, result) in &self.responses {
            if let Some(rest) = expected.strip_prefix(&format!("{} ", command)) {
                if rest == key {
                    return result.clone();
                }
            }
        }
        panic!("Unscripted invocation: {} {}", command, key);
    }
}

fn success(stdout: &str) -> ProcessResult {
    ProcessResult {
        exit_code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
        outcome: Outcome::Success,
    }
}

fn not_found() -> ProcessResult {
    ProcessResult {
        exit_code: None,
        stdout: String::new(),
        stderr: String::new(),
        outcome: Outcome::NotFound,
    }
}

fn full_probe_script(ffprobe: ProcessResult, smoke: ProcessResult) -> ScriptedRunner {
    ScriptedRunner::new(vec![
        ("ffmpeg -version", success("ffmpeg version 6.1.1\nbuilt with gcc\n")),
        ("ffprobe -version", ffprobe),
        ("ffmpeg -codecs", success("h264 hevc vp9 av1 aac mp3 opus")),
        ("ffmpeg -formats", success("mp4 webm mov avi mkv gif")),
        ("ffmpeg -hwaccels", success("Hardware acceleration methods:\ncuda\n")),
        ("ffmpeg -f", smoke),
    ])
}

fn install_skill(home: &Path) {
    let dir = skill_dir(home);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("SKILL.md"), "# FFmpeg Toolkit\n").unwrap();
}

// Scenario A: ffmpeg absent. The run must short-circuit after the first
// invocation, fail the verdict, and write no report.
#[test]
fn test_missing_ffmpeg_short_circuits() {
    let runner = ScriptedRunner::new(vec![("ffmpeg -version", not_found())]);
    let home = tempdir().unwrap();
    let report_dir = tempdir().unwrap();

    let summary = run_validation(&runner, home.path(), report_dir.path()).unwrap();

    assert!(!summary.passed);
    assert!(!summary.results.ffmpeg_installed);
    assert!(summary.report_path.is_none());
    assert_eq!(runner.call_count(), 1);
    assert!(!report_dir.path().join(REPORT_FILENAME).exists());
}

// Scenario B: ffmpeg present, ffprobe absent, probes succeed, skill marker
// present and non-empty, smoke test succeeds. Advisory ffprobe failure must
// not affect the verdict.
#[test]
fn test_full_pass_with_missing_ffprobe() {
    let runner = full_probe_script(not_found(), success(""));
    let home = tempdir().unwrap();
    install_skill(home.path());
    let report_dir = tempdir().unwrap();

    let summary = run_validation(&runner, home.path(), report_dir.path()).unwrap();

    assert!(summary.passed);
    assert!(summary.results.ffmpeg_installed);
    assert!(!summary.results.ffprobe_installed);
    assert!(summary.results.skill_installed);
    assert!(summary.results.test_passed);

    let report_path = summary.report_path.expect("report should be written");
    let json = fs::read_to_string(report_path).unwrap();
    assert!(json.contains("\"ffmpeg_installed\": true"));
    assert!(json.contains("\"ffprobe_installed\": false"));
    assert!(json.contains("\"skill_installed\": true"));
    assert!(json.contains("\"test_passed\": true"));
}

// Scenario C: skill marker missing fails the verdict even though the smoke
// test passes.
#[test]
fn test_missing_skill_marker_fails_verdict() {
    let runner = full_probe_script(success("ffprobe version 6.1.1\n"), success(""));
    let home = tempdir().unwrap();
    fs::create_dir_all(skill_dir(home.path())).unwrap(); // directory, no SKILL.md
    let report_dir = tempdir().unwrap();

    let summary = run_validation(&runner, home.path(), report_dir.path()).unwrap();

    assert!(!summary.passed);
    assert!(summary.results.ffmpeg_installed);
    assert!(!summary.results.skill_installed);
    assert!(summary.results.test_passed);
    // The report is still written on the non-short-circuit path.
    assert!(report_dir.path().join(REPORT_FILENAME).exists());
}

// Advisory probes: capability probe failures must not affect the verdict.
#[test]
fn test_probe_failures_are_advisory() {
    let timed_out = ProcessResult {
        exit_code: None,
        stdout: String::new(),
        stderr: String::new(),
        outcome: Outcome::TimedOut,
    };
    let runner = ScriptedRunner::new(vec![
        ("ffmpeg -version", success("ffmpeg version 6.1.1\n")),
        ("ffprobe -version", success("ffprobe version 6.1.1\n")),
        ("ffmpeg -codecs", timed_out.clone()),
        ("ffmpeg -formats", timed_out.clone()),
        ("ffmpeg -hwaccels", timed_out),
        ("ffmpeg -f", success("")),
    ]);
    let home = tempdir().unwrap();
    install_skill(home.path());
    let report_dir = tempdir().unwrap();

    let summary = run_validation(&runner, home.path(), report_dir.path()).unwrap();
    assert!(summary.passed);
}

// Smoke-test failure is fatal to the verdict.
#[test]
fn test_smoke_test_failure_fails_verdict() {
    let failed_smoke = ProcessResult {
        exit_code: Some(1),
        stdout: String::new(),
        stderr: "Unrecognized option 'lavfi'".to_string(),
        outcome: Outcome::NonZeroExit,
    };
    let runner = full_probe_script(success("ffprobe version 6.1.1\n"), failed_smoke);
    let home = tempdir().unwrap();
    install_skill(home.path());
    let report_dir = tempdir().unwrap();

    let summary = run_validation(&runner, home.path(), report_dir.path()).unwrap();

    assert!(!summary.passed);
    assert!(!summary.results.test_passed);
    let json = fs::read_to_string(report_dir.path().join(REPORT_FILENAME)).unwrap();
    assert!(json.contains("\"test_passed\": false"));
}
