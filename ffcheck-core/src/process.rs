// ============================================================================
// ffcheck-core/src/process.rs
// ============================================================================
//
// PROCESS INVOKER: Bounded external command execution
//
// This module runs external commands with captured output and a hard
// timeout, and classifies every possible outcome into a `ProcessResult`.
// Running a command is a total operation: the caller always receives a
// classified result and never has to handle a propagated fault.
//
// KEY COMPONENTS:
// - Outcome: Classification of an invocation (success, non-zero exit,
//   not found, timed out, other error)
// - ProcessResult: Captured output plus outcome for one invocation
// - CommandRunner: Trait seam for dependency injection in tests
// - SystemCommandRunner: Production implementation using std::process
//
// ARCHITECTURE:
// The trait-based design follows the dependency injection pattern so that
// detectors can be exercised against scripted invocation results without a
// real ffmpeg binary on the test machine.

use log::{debug, warn};
use std::io::{ErrorKind, Read};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Interval between exit-status polls while waiting on a child process.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Classification of a single external command invocation.
///
/// Every invocation maps to exactly one variant; there is no error path out
/// of the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran and exited with status zero.
    Success,
    /// The command ran and exited with a non-zero status.
    NonZeroExit,
    /// The command could not be located on the search path.
    NotFound,
    /// The command exceeded its allotted time and was killed.
    TimedOut,
    /// Any other invocation fault (permissions, broken pipes, ...).
    OtherError(String),
}

/// Captured result of one external command invocation.
///
/// Immutable after creation; owned solely by the calling detector.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    /// Exit code, when the process ran to completion and reported one.
    pub exit_code: Option<i32>,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
    /// Classified outcome of the invocation.
    pub outcome: Outcome,
}

impl ProcessResult {
    /// Builds a result for an invocation that produced no output.
    fn from_failure(outcome: Outcome) -> Self {
        Self {
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            outcome,
        }
    }

    /// Returns true if the invocation completed with exit status zero.
    pub fn succeeded(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Trait representing something that can run an external command.
///
/// The validation detectors are generic over this trait so tests can supply
/// scripted results instead of spawning real processes.
pub trait CommandRunner {
    /// Runs `command` with `args`, capturing output, bounded by `timeout`.
    fn run(&self, command: &str, args: &[&str], timeout: Duration) -> ProcessResult;
}

/// Production `CommandRunner` backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &str, args: &[&str], timeout: Duration) -> ProcessResult {
        run_with_timeout(command, args, timeout)
    }
}

/// Runs an external command with captured output and a hard timeout.
///
/// The child's pipes are drained on background threads so it cannot block on
/// a full pipe buffer while the exit status is polled. On timeout the child
/// is killed and the invocation is classified as `Outcome::TimedOut`.
pub fn run_with_timeout(command: &str, args: &[&str], timeout: Duration) -> ProcessResult {
    debug!("Running command: {} {}", command, args.join(" "));

    let mut child = match Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Command '{}' not found in PATH", command);
            return ProcessResult::from_failure(Outcome::NotFound);
        }
        Err(e) => {
            warn!("Failed to start command '{}': {}", command, e);
            return ProcessResult::from_failure(Outcome::OtherError(format!(
                "failed to start '{}': {}",
                command, e
            )));
        }
    };

    let stdout_handle = child.stdout.take().map(drain);
    let stderr_handle = child.stderr.take().map(drain);

    // Poll for completion instead of a blocking wait so the timeout can be
    // enforced without extra machinery.
    let start = Instant::now();
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    join_captured(stdout_handle);
                    join_captured(stderr_handle);
                    warn!(
                        "Command '{}' timed out after {} seconds",
                        command,
                        timeout.as_secs()
                    );
                    return ProcessResult::from_failure(Outcome::TimedOut);
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                join_captured(stdout_handle);
                join_captured(stderr_handle);
                return ProcessResult::from_failure(Outcome::OtherError(format!(
                    "error waiting for '{}': {}",
                    command, e
                )));
            }
        }
    };

    let stdout = join_captured(stdout_handle);
    let stderr = join_captured(stderr_handle);

    let outcome = if status.success() {
        Outcome::Success
    } else {
        debug!(
            "Command '{}' exited with status {:?}",
            command,
            status.code()
        );
        Outcome::NonZeroExit
    };

    ProcessResult {
        exit_code: status.code(),
        stdout,
        stderr,
        outcome,
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf).ok();
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn join_captured(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default()
}
