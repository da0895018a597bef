//! Core library for validating a local FFmpeg toolchain installation.
//!
//! This crate implements the ffcheck validation flow: bounded external
//! process invocation, ffmpeg/ffprobe presence checks, codec, format, and
//! hardware-acceleration capability probes, the companion skill installation
//! check, a synthetic smoke test, and a JSON validation report.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use ffcheck_core::{run_validation, SystemCommandRunner};
//! use std::path::Path;
//!
//! let summary = run_validation(
//!     &SystemCommandRunner,
//!     Path::new("/home/user"),
//!     Path::new("."),
//! ).unwrap();
//! std::process::exit(if summary.passed { 0 } else { 1 });
//! ```

pub mod capability;
pub mod error;
pub mod process;
pub mod report;
pub mod skill;
pub mod system_info;
pub mod terminal;
pub mod validation;

// Re-exports for public API
pub use capability::{CapabilityProbe, CapabilityReport, SmokeTest, ToolCheck};
pub use error::{CoreError, CoreResult};
pub use process::{run_with_timeout, CommandRunner, Outcome, ProcessResult, SystemCommandRunner};
pub use report::{render_report, write_report, ValidationResults, REPORT_FILENAME};
pub use skill::{check_skill_install, skill_dir, SkillStatus};
pub use system_info::SystemInfo;
pub use validation::{run_validation, ValidationSummary};
