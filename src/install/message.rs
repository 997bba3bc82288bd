//! Messages published to the UI transport.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{DetectionResult, InstallationInstructions};

/// A message for the UI panel.
///
/// Serializes as `{"type": "<variant>", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
#[non_exhaustive]
pub enum PanelMessage {
    /// Result of an installation check.
    CliDetectionResult(CliDetectionData),
}

/// Payload of [`PanelMessage::CliDetectionResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliDetectionData {
    /// Whether the CLI was found.
    pub is_installed: bool,
    /// Where the executable was found.
    pub cli_path: Option<PathBuf>,
    /// Version reported by the CLI, if it could be parsed.
    pub version: Option<String>,
    /// Why detection came up short, if it did.
    pub error: Option<String>,
    /// Present only when the CLI is not installed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_instructions: Option<InstallationInstructions>,
}

impl CliDetectionData {
    /// Build the payload, attaching `instructions` only when the CLI is
    /// missing.
    pub fn new(result: DetectionResult, instructions: InstallationInstructions) -> Self {
        let install_instructions = (!result.is_installed).then_some(instructions);
        Self {
            is_installed: result.is_installed,
            cli_path: result.cli_path,
            version: result.version,
            error: result.error,
            install_instructions,
        }
    }
}
