// ============================================================================
// ffcheck-core/src/skill.rs
// ============================================================================
//
// INSTALLATION CHECKER: Companion skill package detection
//
// Filesystem-only check for the fixed skill install location under the
// user's home directory. The check distinguishes a missing directory (the
// skill was simply never installed) from a broken installation (directory
// present but the marker file absent or empty).

use std::fs;
use std::path::{Path, PathBuf};

/// Directory name of the skill package under `~/.claude/skills/`.
pub const SKILL_DIR_NAME: &str = "ffmpeg-toolkit";

/// Marker file whose presence and non-emptiness signals a complete install.
pub const SKILL_MARKER_FILE: &str = "SKILL.md";

/// Returns the fixed skill install directory for the given home directory.
pub fn skill_dir(home_dir: &Path) -> PathBuf {
    home_dir.join(".claude").join("skills").join(SKILL_DIR_NAME)
}

/// Outcome of the skill installation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillStatus {
    /// Directory and marker present, marker non-empty.
    Installed { marker_size: u64 },
    /// The skill directory does not exist (soft: skill never installed).
    DirMissing { expected: PathBuf },
    /// Directory present but the marker file is absent (broken install).
    MarkerMissing,
    /// Marker file present but zero bytes long (broken install).
    MarkerEmpty,
}

impl SkillStatus {
    /// True only for a complete, non-empty installation.
    pub fn is_installed(&self) -> bool {
        matches!(self, SkillStatus::Installed { .. })
    }
}

/// Checks whether the skill package is installed under `home_dir`.
pub fn check_skill_install(home_dir: &Path) -> SkillStatus {
    let dir = skill_dir(home_dir);
    if !dir.exists() {
        return SkillStatus::DirMissing { expected: dir };
    }

    let marker = dir.join(SKILL_MARKER_FILE);
    match fs::metadata(&marker) {
        Err(_) => SkillStatus::MarkerMissing,
        Ok(meta) if meta.len() == 0 => SkillStatus::MarkerEmpty,
        Ok(meta) => SkillStatus::Installed {
            marker_size: meta.len(),
        },
    }
}
