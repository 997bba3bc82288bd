//! The probe seam and its system implementation.

use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

use super::{check_version, find_executable, parse_version};
use crate::{AgentKind, DetectOptions, DetectionResult, ProbeError};

/// A single attempt to locate and query the CLI.
///
/// Implementations return `Ok` with `is_installed: false` when the CLI is
/// simply absent, and `Err` only when the environment could not be
/// queried. Callers above the [`Detector`](crate::Detector) decide how
/// failures degrade.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Probe the environment once.
    async fn probe(&self) -> Result<DetectionResult, ProbeError>;
}

/// Probes the real system: PATH lookup followed by `--version`.
///
/// # Example
///
/// ```rust,no_run
/// use rig_acp_capabilities::{AgentKind, DetectOptions, Probe, SystemProbe};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let probe = SystemProbe::new(AgentKind::Codex, &DetectOptions::default());
///     match probe.probe().await {
///         Ok(result) => println!("installed: {}", result.is_installed),
///         Err(e) => eprintln!("probe failed: {}", e),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SystemProbe {
    kind: AgentKind,
    timeout: Duration,
    cli_path: Option<PathBuf>,
}

impl SystemProbe {
    /// Build a probe for `kind` using the timeout and explicit path from
    /// `options`.
    pub fn new(kind: AgentKind, options: &DetectOptions) -> Self {
        Self {
            kind,
            timeout: options.timeout,
            cli_path: options.cli_path.clone(),
        }
    }
}

#[async_trait]
impl Probe for SystemProbe {
    async fn probe(&self) -> Result<DetectionResult, ProbeError> {
        let name = self.kind.executable_name();

        // Not on disk: a normal outcome, not a probe failure
        let Some(path) = find_executable(name, self.cli_path.as_deref()) else {
            debug!(executable = name, "CLI not found");
            return Ok(DetectionResult::not_installed(format!(
                "{} CLI ({}) not found",
                self.kind.display_name(),
                name
            )));
        };

        // Found but unrunnable: surfaces as a probe error
        let output = check_version(&path, self.timeout).await?;

        let mut result = DetectionResult::installed(&path, parse_version(&output));
        // Installed with unrecognized output; keep the raw text for the UI
        if result.version.is_none() {
            result.error = Some(format!(
                "Failed to parse version from: {}",
                output.trim()
            ));
        }

        debug!(
            path = %path.display(),
            version = result.version.as_deref().unwrap_or("unknown"),
            "CLI detected"
        );
        Ok(result)
    }
}
