// ============================================================================
// ffcheck-core/src/error.rs
// ============================================================================
//
// CORE ERROR HANDLING: Error types for the validation flow
//
// This module defines the error type used by fallible operations in the core
// library. External process failures are deliberately NOT represented here:
// the process invoker classifies every invocation outcome into a
// `ProcessResult` and never surfaces an error to its caller.
//
// KEY COMPONENTS:
// - CoreError: Error enum covering I/O, serialization, and report writing
// - CoreResult: Type alias for core operations

use thiserror::Error;

/// Custom error types for ffcheck
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report serialization failed: {0}")]
    ReportSerialization(#[from] serde_json::Error),

    #[error("Failed to write report to '{0}': {1}")]
    ReportWrite(String, std::io::Error),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for ffcheck core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
