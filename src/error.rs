//! Error types shared by detection and the host collaborators.

use std::time::Duration;
use thiserror::Error;

/// Why a probe could not produce a detection result.
///
/// A missing executable is not an error: the probe reports it as a
/// not-installed [`DetectionResult`](crate::DetectionResult). These
/// variants cover the cases where the environment could not be queried
/// at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProbeError {
    /// The `--version` invocation did not finish in time.
    #[error("version check timed out after {0:?}")]
    Timeout(Duration),

    /// The executable exists but could not be run.
    #[error("permission denied running {path}")]
    PermissionDenied {
        /// The executable that was refused.
        path: String,
    },

    /// Spawning or reading from the executable failed.
    #[error("I/O error during detection: {message}")]
    Io {
        /// The underlying I/O error, rendered.
        message: String,
    },

    /// The executable ran but exited unsuccessfully.
    #[error("version check exited with code {code:?}")]
    NonZeroExit {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
    },

    /// Any other failure reported by a probe implementation.
    #[error("{0}")]
    Failed(String),
}

impl ProbeError {
    /// Short, user-facing description of the failure class.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rig_acp_capabilities::ProbeError;
    /// use std::time::Duration;
    ///
    /// let error = ProbeError::Timeout(Duration::from_secs(5));
    /// assert_eq!(error.description(), "Detection timed out");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "Detection timed out",
            Self::PermissionDenied { .. } => "Permission denied",
            Self::Io { .. } => "I/O error during detection",
            Self::NonZeroExit { .. } => "Version check failed",
            Self::Failed(_) => "Detection failed",
        }
    }
}

/// A failure reported by a host collaborator (notification surface or
/// terminal launcher).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HostError {
    /// Human-readable message from the host.
    pub message: String,
}

impl HostError {
    /// Create a host error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
