//! Host collaborators: the notification surface and the terminal.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{info, warn};

use crate::install::InstallProgress;
use crate::HostError;

/// The user-facing notification surface.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show `message` with `options` as buttons and wait for a choice.
    ///
    /// Returns the selected label, or `None` if the prompt was dismissed.
    async fn show_choice(
        &self,
        message: &str,
        options: &[&str],
    ) -> Result<Option<String>, HostError>;

    /// Open `url` in the user's browser.
    async fn open_link(&self, url: &str) -> Result<(), HostError>;

    /// Show install progress. The default ignores it.
    fn report_progress(&self, _progress: &InstallProgress) {}
}

/// Launches an install command in a terminal.
#[async_trait]
pub trait TerminalLauncher: Send + Sync {
    /// Start `command_line`. Returns once the command is launched; the
    /// caller does not wait for it to finish.
    async fn run_install_command(&self, command_line: &str) -> Result<(), HostError>;
}

/// A notifier for headless hosts: every prompt is dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn show_choice(
        &self,
        _message: &str,
        _options: &[&str],
    ) -> Result<Option<String>, HostError> {
        Ok(None)
    }

    async fn open_link(&self, _url: &str) -> Result<(), HostError> {
        Ok(())
    }
}

/// Runs install commands through the platform shell.
///
/// The child runs detached; its exit status is logged when it finishes.
/// Must be called from within a Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellLauncher;

fn shell_command(command_line: &str) -> Command {
    let (shell, flag) = if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    };
    let mut command = Command::new(shell);
    command.args([flag, command_line]);
    command
}

#[async_trait]
impl TerminalLauncher for ShellLauncher {
    async fn run_install_command(&self, command_line: &str) -> Result<(), HostError> {
        let child = shell_command(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| HostError::new(e.to_string()))?;

        let command_line = command_line.to_string();
        tokio::spawn(async move {
            match child.wait_with_output().await {
                Ok(output) if output.status.success() => {
                    info!(command = %command_line, "Install command finished");
                }
                Ok(output) => {
                    warn!(
                        command = %command_line,
                        code = ?output.status.code(),
                        stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                        "Install command failed"
                    );
                }
                Err(e) => {
                    warn!(command = %command_line, error = %e, "Lost track of install command");
                }
            }
        });

        Ok(())
    }
}
