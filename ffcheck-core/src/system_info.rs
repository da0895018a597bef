// ============================================================================
// ffcheck-core/src/system_info.rs
// ============================================================================
//
// SYSTEM INFO: Host platform identification for narration and the report

use serde::Serialize;

/// Host platform identification, collected once per run and embedded in the
/// validation report.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub os: String,
    pub release: String,
    pub architecture: String,
}

impl SystemInfo {
    pub fn collect() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            release: get_release(),
            architecture: std::env::consts::ARCH.to_string(),
        }
    }
}

fn get_release() -> String {
    #[cfg(unix)]
    {
        use std::process::Command;

        Command::new("uname")
            .arg("-r")
            .output()
            .ok()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .filter(|release| !release.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    }

    #[cfg(not(unix))]
    {
        "unknown".to_string()
    }
}
