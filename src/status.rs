//! Detection results and the resolved capability snapshot.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::features::{feature_flags, is_version_supported, MIN_CLI_VERSION_FOR_SESSION_METHODS};

/// Outcome of a single probe of the environment.
///
/// Produced once per probe and never mutated afterwards; a new probe
/// yields a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Whether the CLI executable was found.
    pub is_installed: bool,

    /// Version string reported by the CLI, if one could be extracted.
    pub version: Option<String>,

    /// Where the executable was found.
    pub cli_path: Option<PathBuf>,

    /// Human-readable note about a partial failure (e.g. unparseable
    /// `--version` output).
    pub error: Option<String>,
}

impl DetectionResult {
    /// An installed CLI at `path` reporting `version`.
    ///
    /// ```rust
    /// use rig_acp_capabilities::DetectionResult;
    ///
    /// let result = DetectionResult::installed("/usr/bin/claude", Some("1.0.0".into()));
    /// assert!(result.is_installed);
    /// assert!(result.error.is_none());
    /// ```
    pub fn installed(path: impl Into<PathBuf>, version: Option<String>) -> Self {
        Self {
            is_installed: true,
            version,
            cli_path: Some(path.into()),
            error: None,
        }
    }

    /// A CLI that could not be found.
    pub fn not_installed(reason: impl Into<String>) -> Self {
        Self {
            is_installed: false,
            version: None,
            cli_path: None,
            error: Some(reason.into()),
        }
    }
}

/// Capabilities gated on the CLI version.
///
/// Always derived from a version string, never stored on its own.
/// `Default` is the all-false set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    /// The CLI answers `session/list`.
    pub supports_session_list: bool,
    /// The CLI answers `session/load`.
    pub supports_session_load: bool,
    /// The CLI answers `session/save`. Not shipped by any version yet.
    pub supports_session_save: bool,
}

impl FeatureFlags {
    /// Derive the flags for `version`. See [`feature_flags`].
    pub fn for_version(version: Option<&str>) -> Self {
        feature_flags(version)
    }
}

/// The resolved snapshot: detection plus everything derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Version reported by the CLI.
    pub version: Option<String>,
    /// Whether the version meets the session-methods minimum.
    pub is_supported: bool,
    /// Capabilities for this version.
    pub features: FeatureFlags,
    /// The detection this snapshot was derived from.
    pub detection_result: DetectionResult,
}

impl VersionInfo {
    /// Build a snapshot from a successful detection.
    ///
    /// ```rust
    /// use rig_acp_capabilities::{DetectionResult, VersionInfo};
    ///
    /// let info = VersionInfo::from_detection(
    ///     DetectionResult::installed("/usr/bin/gemini", Some("1.0.0".into())),
    /// );
    /// assert!(info.is_supported);
    /// assert!(info.features.supports_session_load);
    /// assert!(!info.features.supports_session_save);
    /// ```
    pub fn from_detection(detection_result: DetectionResult) -> Self {
        let version = detection_result.version.clone();
        Self {
            is_supported: is_version_supported(
                version.as_deref(),
                MIN_CLI_VERSION_FOR_SESSION_METHODS,
            ),
            features: feature_flags(version.as_deref()),
            version,
            detection_result,
        }
    }

    /// The fallback used when the probe itself fails: not installed,
    /// unsupported, no features.
    pub fn unavailable() -> Self {
        Self {
            version: None,
            is_supported: false,
            features: FeatureFlags::default(),
            detection_result: DetectionResult {
                is_installed: false,
                ..Default::default()
            },
        }
    }
}
