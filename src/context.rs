//! The last published capability snapshot, for synchronous queries.

use std::sync::{OnceLock, RwLock, RwLockReadGuard};
use tracing::debug;

use crate::{FeatureFlags, VersionInfo};

/// Holds the most recently published [`VersionInfo`].
///
/// Resolution is async and happens in the
/// [`VersionResolver`](crate::VersionResolver); capability checks are
/// scattered and synchronous. This store sits between the two: it never
/// probes and never expires anything, it only answers from whatever was
/// last published. With no snapshot, every query answers "no".
///
/// # Example
///
/// ```rust
/// use rig_acp_capabilities::{CapabilityContext, DetectionResult, VersionInfo};
///
/// let context = CapabilityContext::new();
/// assert!(!context.supports_session_list());
///
/// context.set_current_version_info(Some(VersionInfo::from_detection(
///     DetectionResult::installed("/usr/bin/claude", Some("1.0.0".into())),
/// )));
/// assert!(context.supports_session_list());
/// assert_eq!(context.cli_version().as_deref(), Some("1.0.0"));
/// ```
#[derive(Debug, Default)]
pub struct CapabilityContext {
    current: RwLock<Option<VersionInfo>>,
}

impl CapabilityContext {
    /// An empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide context, created on first use.
    pub fn global() -> &'static CapabilityContext {
        static GLOBAL: OnceLock<CapabilityContext> = OnceLock::new();
        GLOBAL.get_or_init(CapabilityContext::new)
    }

    /// Replace the snapshot. `None` is the same as never having published.
    pub fn set_current_version_info(&self, info: Option<VersionInfo>) {
        debug!(
            published = info.is_some(),
            version = info.as_ref().and_then(|i| i.version.as_deref()).unwrap_or("none"),
            "Publishing capability snapshot"
        );
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = info;
    }

    /// The last published snapshot.
    pub fn current_version_info(&self) -> Option<VersionInfo> {
        self.read().clone()
    }

    /// Features of the snapshot, or all-false without one.
    pub fn current_features(&self) -> FeatureFlags {
        self.read()
            .as_ref()
            .map(|info| info.features)
            .unwrap_or_default()
    }

    /// Whether the snapshot's CLI answers `session/list`.
    pub fn supports_session_list(&self) -> bool {
        self.current_features().supports_session_list
    }

    /// Whether the snapshot's CLI answers `session/load`.
    pub fn supports_session_load(&self) -> bool {
        self.current_features().supports_session_load
    }

    /// Whether the snapshot's CLI answers `session/save`.
    pub fn supports_session_save(&self) -> bool {
        self.current_features().supports_session_save
    }

    /// Whether the snapshot saw the CLI installed.
    pub fn is_cli_installed(&self) -> bool {
        self.read()
            .as_ref()
            .is_some_and(|info| info.detection_result.is_installed)
    }

    /// The snapshot's CLI version, if any.
    pub fn cli_version(&self) -> Option<String> {
        self.read().as_ref().and_then(|info| info.version.clone())
    }

    /// Whether the snapshot's version meets the minimum.
    pub fn is_cli_version_supported(&self) -> bool {
        self.read().as_ref().is_some_and(|info| info.is_supported)
    }

    /// Forget the snapshot.
    pub fn clear_context(&self) {
        self.set_current_version_info(None);
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<VersionInfo>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
