//! Manual installation instructions.

use serde::{Deserialize, Serialize};

use crate::AgentKind;

/// Minimum Node.js major version the npm-distributed CLIs require.
const NODE_REQUIREMENT: &str = "Node.js 18+";

/// Human-readable steps for installing a CLI by hand.
///
/// Built fresh on each call; nothing here touches the system.
///
/// # Example
///
/// ```rust
/// use rig_acp_capabilities::{AgentKind, InstallationInstructions};
///
/// let instructions = InstallationInstructions::for_agent(AgentKind::Gemini);
/// assert!(instructions
///     .steps
///     .iter()
///     .any(|step| step.contains("npm install -g @google/gemini-cli")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationInstructions {
    /// Heading for the instructions.
    pub title: String,
    /// Steps, in the order they should be followed.
    pub steps: Vec<String>,
    /// Official documentation for the CLI.
    pub documentation_url: String,
}

impl InstallationInstructions {
    /// Instructions for installing `kind` globally through npm.
    pub fn for_agent(kind: AgentKind) -> Self {
        Self {
            title: format!("Install {}", kind.display_name()),
            steps: vec![
                format!("Make sure {} and npm are installed (https://nodejs.org)", NODE_REQUIREMENT),
                format!("Run: {}", kind.install_command()),
                format!("Verify with: {} --version", kind.executable_name()),
                "Restart your editor or terminal so PATH changes take effect".to_string(),
            ],
            documentation_url: kind.docs_url().to_string(),
        }
    }
}
