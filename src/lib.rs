//! # rig-acp-capabilities
//!
//! Version-gated capability resolution for ACP coding agent CLIs (Claude
//! Code, Codex, OpenCode, Gemini).
//!
//! This crate answers three questions about an agent CLI: is it
//! installed, which version is it, and which optional ACP methods does
//! that version support. Results are cached with explicit invalidation
//! and published to a context that can be queried synchronously. When the
//! CLI is missing, an installer flow can prompt the user to install it.
//!
//! ## Features
//!
//! - [`Detector`]: probes for the CLI (PATH lookup + `--version`) and
//!   caches raw results
//! - [`VersionResolver`]: compares versions, derives [`FeatureFlags`] and
//!   caches the resolved [`VersionInfo`] with a TTL
//! - [`CapabilityContext`]: the last published snapshot, for synchronous
//!   capability checks
//! - [`InstallerOrchestrator`]: check → prompt → install / docs / dismiss
//! - [`CliCapabilities`]: all of the above, wired together
//!
//! Detection failures never surface as errors from resolution: a CLI that
//! cannot be probed is treated as not installed and unsupported.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rig_acp_capabilities::{AgentKind, CliCapabilities, DetectOptions, ResolverOptions};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let caps = CliCapabilities::system(
//!         AgentKind::ClaudeCode,
//!         DetectOptions::default(),
//!         ResolverOptions::default(),
//!     );
//!
//!     let info = caps.refresh(false).await;
//!     println!("version: {:?}, supported: {}", info.version, info.is_supported);
//!
//!     if caps.context().supports_session_list() {
//!         println!("session/list is available");
//!     }
//! }
//! ```

mod agent_kind;
mod context;
mod detection;
mod detector;
mod error;
mod features;
mod install;
mod options;
mod resolver;
mod service;
mod status;

pub use agent_kind::AgentKind;
pub use context::CapabilityContext;
pub use detection::{Probe, SystemProbe};
pub use detector::Detector;
pub use error::{HostError, ProbeError};
pub use features::{
    compare_versions, feature_flags, is_version_supported, MIN_CLI_VERSION_FOR_SESSION_METHODS,
};
pub use install::{
    CheckOutcome, CliDetectionData, InstallChoice, InstallError, InstallFlowState,
    InstallProgress, InstallationInstructions, InstallerOrchestrator, NoopNotifier, Notifier,
    PanelMessage, PromptOutcome, ShellLauncher, TerminalLauncher,
};
pub use options::{DetectOptions, ResolverOptions};
pub use resolver::VersionResolver;
pub use service::CliCapabilities;
pub use status::{DetectionResult, FeatureFlags, VersionInfo};
