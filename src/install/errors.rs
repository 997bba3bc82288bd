//! Errors from the install prompt flow.
//!
//! Each variant carries an actionable fix suggestion, so hosts can show
//! something more useful than the raw collaborator message.

use thiserror::Error;

/// Errors that can occur while prompting for or dispatching an install.
///
/// A dismissed prompt is not an error; it resolves to
/// [`PromptOutcome::Dismissed`](crate::PromptOutcome::Dismissed).
///
/// # Example
///
/// ```rust
/// use rig_acp_capabilities::InstallError;
///
/// fn report(error: &InstallError) {
///     eprintln!("{}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallError {
    /// The notification surface could not show the prompt.
    #[error("Could not show install prompt: {message}")]
    Notification {
        /// Message from the notification surface.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The documentation link could not be opened.
    #[error("Could not open {url}: {message}")]
    OpenLink {
        /// The link that failed to open.
        url: String,
        /// Message from the notification surface.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The install command could not be launched.
    #[error("Could not launch `{command}`: {message}")]
    Launch {
        /// The command line that was dispatched.
        command: String,
        /// Message from the terminal launcher.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl InstallError {
    /// Get an actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::Notification { fix, .. } => fix,
            Self::OpenLink { fix, .. } => fix,
            Self::Launch { fix, .. } => fix,
        }
    }
}
