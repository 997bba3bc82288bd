//! The ACP agent CLIs whose capabilities can be resolved.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The agent CLI whose installation and version gate its capabilities.
///
/// Each variant knows how it is invoked, how it is published to npm and
/// where its documentation lives. Those three facts are all the
/// detection and installation flows need.
///
/// This enum is marked `#[non_exhaustive]`; include a wildcard arm when
/// matching on it.
///
/// # Example
///
/// ```rust
/// use rig_acp_capabilities::AgentKind;
///
/// for kind in AgentKind::all() {
///     println!("{} -> {}", kind.display_name(), kind.install_command());
/// }
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[non_exhaustive]
pub enum AgentKind {
    /// Anthropic's Claude Code agent (claude CLI)
    #[default]
    ClaudeCode,
    /// OpenAI's Codex agent (codex CLI)
    Codex,
    /// OpenCode agent (opencode CLI)
    OpenCode,
    /// Google's Gemini agent (gemini CLI)
    Gemini,
}

impl AgentKind {
    /// The executable name looked up on PATH.
    ///
    /// ```rust
    /// use rig_acp_capabilities::AgentKind;
    ///
    /// assert_eq!(AgentKind::Gemini.executable_name(), "gemini");
    /// ```
    pub fn executable_name(&self) -> &'static str {
        match self {
            Self::ClaudeCode => "claude",
            Self::Codex => "codex",
            Self::OpenCode => "opencode",
            Self::Gemini => "gemini",
        }
    }

    /// Human-readable name for prompts and instructions.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ClaudeCode => "Claude Code",
            Self::Codex => "Codex",
            Self::OpenCode => "OpenCode",
            Self::Gemini => "Gemini CLI",
        }
    }

    /// The name the CLI is published under on npm.
    pub fn package_name(&self) -> &'static str {
        match self {
            Self::ClaudeCode => "@anthropic-ai/claude-code",
            Self::Codex => "@openai/codex",
            Self::OpenCode => "opencode-ai",
            Self::Gemini => "@google/gemini-cli",
        }
    }

    /// Official documentation for the CLI.
    pub fn docs_url(&self) -> &'static str {
        match self {
            Self::ClaudeCode => "https://docs.anthropic.com/en/docs/claude-code",
            Self::Codex => "https://github.com/openai/codex",
            Self::OpenCode => "https://github.com/anomalyco/opencode",
            Self::Gemini => "https://github.com/google-gemini/gemini-cli",
        }
    }

    /// Global install command line dispatched by the installer.
    ///
    /// ```rust
    /// use rig_acp_capabilities::AgentKind;
    ///
    /// assert_eq!(
    ///     AgentKind::Codex.install_command(),
    ///     "npm install -g @openai/codex"
    /// );
    /// ```
    pub fn install_command(&self) -> String {
        format!("npm install -g {}", self.package_name())
    }

    /// Iterator over every known agent.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
