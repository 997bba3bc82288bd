//! Progress stages reported while dispatching an install.

use crate::AgentKind;

/// Progress stages of [`InstallerOrchestrator::install`](crate::InstallerOrchestrator::install).
///
/// Reported to [`Notifier::report_progress`](crate::Notifier::report_progress)
/// so the host can show feedback. Dispatch is the last stage: whether the
/// install actually succeeded is only known after the next detection.
///
/// # Example
///
/// ```rust
/// use rig_acp_capabilities::{AgentKind, InstallProgress};
///
/// fn on_progress(progress: &InstallProgress) {
///     match progress {
///         InstallProgress::Dispatching { command, .. } => println!("Running {}", command),
///         other => println!("{}", other.description()),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallProgress {
    /// The user chose to install.
    Started {
        /// The agent being installed.
        agent: AgentKind,
    },

    /// The install command is being handed to the terminal.
    Dispatching {
        /// The agent being installed.
        agent: AgentKind,
        /// The command line being run.
        command: String,
    },

    /// The terminal accepted the command.
    Dispatched {
        /// The agent being installed.
        agent: AgentKind,
    },

    /// The terminal refused the command.
    Failed {
        /// The agent being installed.
        agent: AgentKind,
        /// Why the launch failed.
        message: String,
    },
}

impl InstallProgress {
    /// Human-readable description of the stage.
    ///
    /// ```rust
    /// use rig_acp_capabilities::{AgentKind, InstallProgress};
    ///
    /// let progress = InstallProgress::Dispatched { agent: AgentKind::Codex };
    /// assert_eq!(progress.description(), "Install command sent to terminal");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::Started { .. } => "Starting installation",
            Self::Dispatching { .. } => "Running install command",
            Self::Dispatched { .. } => "Install command sent to terminal",
            Self::Failed { .. } => "Could not start install command",
        }
    }

    /// The agent this stage refers to.
    pub fn agent(&self) -> AgentKind {
        match self {
            Self::Started { agent }
            | Self::Dispatching { agent, .. }
            | Self::Dispatched { agent }
            | Self::Failed { agent, .. } => *agent,
        }
    }

    /// Whether this is the final stage reported, successful or not.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Dispatched { .. } | Self::Failed { .. })
    }
}
