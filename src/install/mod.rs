//! Installation prompting for a missing CLI.
//!
//! The [`InstallerOrchestrator`] checks for the CLI, publishes the result
//! to the UI, and when asked, prompts the user to install it, open the
//! documentation or dismiss. The notification surface and the terminal
//! are host collaborators behind the [`Notifier`] and
//! [`TerminalLauncher`] traits.
//!
//! # Example
//!
//! ```rust,no_run
//! use rig_acp_capabilities::{
//!     AgentKind, CheckOutcome, DetectOptions, Detector, InstallerOrchestrator, NoopNotifier,
//!     ShellLauncher,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let detector = Arc::new(Detector::system(AgentKind::Codex, DetectOptions::default()));
//!     let installer = InstallerOrchestrator::new(
//!         detector,
//!         Arc::new(NoopNotifier),
//!         Arc::new(ShellLauncher),
//!     );
//!
//!     let outcome = installer
//!         .check_installation(|message| println!("{:?}", message))
//!         .await;
//!     if outcome == CheckOutcome::NotInstalled {
//!         let _ = installer.prompt_installation().await;
//!     }
//! }
//! ```

mod errors;
mod host;
mod instructions;
mod message;
mod orchestrator;
mod progress;

pub use errors::InstallError;
pub use host::{Notifier, NoopNotifier, ShellLauncher, TerminalLauncher};
pub use instructions::InstallationInstructions;
pub use message::{CliDetectionData, PanelMessage};
pub use orchestrator::{
    CheckOutcome, InstallChoice, InstallFlowState, InstallerOrchestrator, PromptOutcome,
};
pub use progress::InstallProgress;
