//! The check → prompt → install flow.

use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::install::{
    CliDetectionData, InstallError, InstallProgress, Notifier, PanelMessage, TerminalLauncher,
};
use crate::{DetectionResult, Detector, ProbeError};

/// Where the installer is in its single user interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InstallFlowState {
    /// Nothing in progress. Also where failed steps land.
    #[default]
    Idle,
    /// A detection is running.
    Checking,
    /// The last check found the CLI.
    Installed,
    /// The last check did not find the CLI.
    NotInstalled,
    /// Waiting for the user to pick a choice.
    Prompting,
    /// The install command was handed to the terminal.
    Installing,
    /// The documentation link was opened.
    OpeningDocs,
    /// The user declined or closed the prompt.
    Dismissed,
}

/// The three buttons of the install prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum InstallChoice {
    /// Run the install command.
    InstallNow,
    /// Open the agent's documentation.
    ViewDocumentation,
    /// Do nothing for now.
    RemindMeLater,
}

impl InstallChoice {
    /// Button label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::InstallNow => "Install Now",
            Self::ViewDocumentation => "View Documentation",
            Self::RemindMeLater => "Remind Me Later",
        }
    }

    /// Map a label returned by the notifier back to a choice.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().find(|choice| choice.label() == label)
    }

    /// All choices, in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// What [`InstallerOrchestrator::check_installation`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Published: the CLI is installed.
    Installed,
    /// Published: the CLI is missing, with install instructions.
    NotInstalled,
    /// The probe failed; nothing was published.
    Suppressed,
}

/// Which side effect [`InstallerOrchestrator::prompt_installation`] ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The install command was dispatched.
    Installing,
    /// The documentation link was opened.
    OpenedDocumentation,
    /// "Remind Me Later", or the prompt was closed.
    Dismissed,
}

/// Whether a check result crosses the publish boundary.
///
/// Probe failures stay on this side: they are logged, not sent to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CheckClassification {
    Publish(CliDetectionData),
    Suppress(ProbeError),
}

pub(crate) fn classify_check(
    result: Result<DetectionResult, ProbeError>,
    detector: &Detector,
) -> CheckClassification {
    match result {
        Ok(detection) => CheckClassification::Publish(CliDetectionData::new(
            detection,
            detector.installation_instructions(),
        )),
        Err(e) => CheckClassification::Suppress(e),
    }
}

/// Drives installation checks and the install prompt for one CLI.
///
/// Does not verify installs: after [`install`](Self::install) the detector
/// cache is cleared, and the next check or resolution sees the result.
pub struct InstallerOrchestrator {
    detector: Arc<Detector>,
    notifier: Arc<dyn Notifier>,
    terminal: Arc<dyn TerminalLauncher>,
    state: Mutex<InstallFlowState>,
}

impl InstallerOrchestrator {
    /// Create an orchestrator checking through `detector` and talking to
    /// the user through `notifier`.
    pub fn new(
        detector: Arc<Detector>,
        notifier: Arc<dyn Notifier>,
        terminal: Arc<dyn TerminalLauncher>,
    ) -> Self {
        Self {
            detector,
            notifier,
            terminal,
            state: Mutex::new(InstallFlowState::Idle),
        }
    }

    /// Current state of the interaction.
    pub fn state(&self) -> InstallFlowState {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_state(&self, next: InstallFlowState) {
        debug!(state = ?next, "Install flow transition");
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = next;
    }

    /// Check whether the CLI is installed and publish the result.
    ///
    /// `publish` is called exactly once when the probe succeeds and not
    /// at all when it fails.
    pub async fn check_installation<F>(&self, publish: F) -> CheckOutcome
    where
        F: FnOnce(PanelMessage) + Send,
    {
        self.set_state(InstallFlowState::Checking);
        let result = self.detector.detect().await;

        match classify_check(result, &self.detector) {
            CheckClassification::Publish(data) => {
                let outcome = if data.is_installed {
                    self.set_state(InstallFlowState::Installed);
                    CheckOutcome::Installed
                } else {
                    self.set_state(InstallFlowState::NotInstalled);
                    CheckOutcome::NotInstalled
                };
                publish(PanelMessage::CliDetectionResult(data));
                outcome
            }
            CheckClassification::Suppress(e) => {
                warn!(error = %e, "Installation check failed; not publishing");
                self.set_state(InstallFlowState::Idle);
                CheckOutcome::Suppressed
            }
        }
    }

    /// Ask the user whether to install, and act on the answer.
    ///
    /// Exactly one of install, open documentation or nothing happens.
    pub async fn prompt_installation(&self) -> Result<PromptOutcome, InstallError> {
        let kind = self.detector.kind();
        self.set_state(InstallFlowState::Prompting);

        let message = format!(
            "{} is not installed. Install it to enable agent sessions.",
            kind.display_name()
        );
        let labels: Vec<&str> = InstallChoice::all().map(|choice| choice.label()).collect();

        let selected = match self.notifier.show_choice(&message, &labels).await {
            Ok(selected) => selected,
            Err(e) => {
                self.set_state(InstallFlowState::Idle);
                return Err(InstallError::Notification {
                    message: e.message,
                    fix: format!("Install manually with `{}`", kind.install_command()),
                });
            }
        };

        let choice = selected.as_deref().and_then(InstallChoice::from_label);
        info!(choice = ?choice, "Install prompt answered");

        match choice {
            Some(InstallChoice::InstallNow) => {
                self.install().await?;
                Ok(PromptOutcome::Installing)
            }
            Some(InstallChoice::ViewDocumentation) => {
                self.set_state(InstallFlowState::OpeningDocs);
                let url = kind.docs_url();
                if let Err(e) = self.notifier.open_link(url).await {
                    self.set_state(InstallFlowState::Idle);
                    return Err(InstallError::OpenLink {
                        url: url.to_string(),
                        message: e.message,
                        fix: format!("Open {} in a browser", url),
                    });
                }
                Ok(PromptOutcome::OpenedDocumentation)
            }
            Some(InstallChoice::RemindMeLater) | None => {
                self.set_state(InstallFlowState::Dismissed);
                Ok(PromptOutcome::Dismissed)
            }
        }
    }

    /// Dispatch the install command to the terminal.
    ///
    /// Reports progress through the notifier and clears the detector cache
    /// once the command is launched. Success of the install itself is not
    /// checked here. If the terminal refuses the command, a
    /// [`InstallProgress::Failed`] stage is reported and the flow returns
    /// to [`InstallFlowState::Idle`].
    pub async fn install(&self) -> Result<(), InstallError> {
        let agent = self.detector.kind();
        let command = agent.install_command();
        self.set_state(InstallFlowState::Installing);

        self.notifier.report_progress(&InstallProgress::Started { agent });
        self.notifier.report_progress(&InstallProgress::Dispatching {
            agent,
            command: command.clone(),
        });

        info!(command = %command, "Dispatching install command");
        if let Err(e) = self.terminal.run_install_command(&command).await {
            warn!(command = %command, error = %e, "Install command could not be started");
            self.set_state(InstallFlowState::Idle);
            self.notifier.report_progress(&InstallProgress::Failed {
                agent,
                message: e.message.clone(),
            });
            return Err(InstallError::Launch {
                fix: format!("Run `{}` in a terminal", command),
                command,
                message: e.message,
            });
        }

        self.detector.clear_cache();
        self.notifier.report_progress(&InstallProgress::Dispatched { agent });
        Ok(())
    }
}

impl std::fmt::Debug for InstallerOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallerOrchestrator")
            .field("detector", &self.detector)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
