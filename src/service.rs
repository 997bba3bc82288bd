//! One explicitly owned instance of the whole subsystem.

use std::sync::Arc;

use crate::detection::Probe;
use crate::{
    AgentKind, CapabilityContext, DetectOptions, Detector, InstallerOrchestrator, Notifier,
    ResolverOptions, TerminalLauncher, VersionInfo, VersionResolver,
};

/// The detector, resolver and context for one CLI, wired together.
///
/// Hosts construct one of these at startup and hand out clones of the
/// `Arc`s it owns, instead of reaching for
/// [`VersionResolver::global`] and [`CapabilityContext::global`].
///
/// # Example
///
/// ```rust,no_run
/// use rig_acp_capabilities::{AgentKind, CliCapabilities, DetectOptions, ResolverOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let caps = CliCapabilities::system(
///         AgentKind::ClaudeCode,
///         DetectOptions::default(),
///         ResolverOptions::default(),
///     );
///     caps.refresh(false).await;
///
///     // Anywhere else, synchronously:
///     if caps.context().supports_session_load() {
///         println!("session/load available");
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CliCapabilities {
    detector: Arc<Detector>,
    resolver: Arc<VersionResolver>,
    context: Arc<CapabilityContext>,
}

impl CliCapabilities {
    /// Wire up the subsystem over `probe`.
    pub fn new(
        kind: AgentKind,
        probe: Arc<dyn Probe>,
        detect_options: DetectOptions,
        resolver_options: ResolverOptions,
    ) -> Self {
        Self::from_detector(Detector::new(kind, probe, detect_options), resolver_options)
    }

    /// Wire up the subsystem over the real system probe.
    pub fn system(
        kind: AgentKind,
        detect_options: DetectOptions,
        resolver_options: ResolverOptions,
    ) -> Self {
        Self::from_detector(Detector::system(kind, detect_options), resolver_options)
    }

    fn from_detector(detector: Detector, resolver_options: ResolverOptions) -> Self {
        let detector = Arc::new(detector);
        Self {
            resolver: Arc::new(VersionResolver::new(detector.clone(), resolver_options)),
            context: Arc::new(CapabilityContext::new()),
            detector,
        }
    }

    /// The shared detector.
    pub fn detector(&self) -> &Arc<Detector> {
        &self.detector
    }

    /// The resolver over [`detector`](Self::detector).
    pub fn resolver(&self) -> &Arc<VersionResolver> {
        &self.resolver
    }

    /// The context [`refresh`](Self::refresh) publishes into.
    pub fn context(&self) -> &Arc<CapabilityContext> {
        &self.context
    }

    /// Resolve and publish the snapshot to the context.
    pub async fn refresh(&self, force_refresh: bool) -> VersionInfo {
        self.resolver.resolve_into(&self.context, force_refresh).await
    }

    /// Drop every cache and the published snapshot.
    pub fn invalidate(&self) {
        // Clears the detector's cache too.
        self.resolver.clear_cache();
        self.context.clear_context();
    }

    /// An installer sharing this subsystem's detector.
    pub fn installer(
        &self,
        notifier: Arc<dyn Notifier>,
        terminal: Arc<dyn TerminalLauncher>,
    ) -> InstallerOrchestrator {
        InstallerOrchestrator::new(self.detector.clone(), notifier, terminal)
    }
}
