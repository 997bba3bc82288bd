//! Cached CLI detection.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::detection::{Probe, SystemProbe};
use crate::{AgentKind, DetectOptions, DetectionResult, InstallationInstructions, ProbeError};

#[derive(Debug, Clone)]
struct CachedDetection {
    result: DetectionResult,
    probed_at: Instant,
}

/// Runs probes for one CLI and caches successful results.
///
/// [`detect`](Self::detect) serves a cached result while it is younger
/// than [`DetectOptions::cache_ttl`]; [`refresh`](Self::refresh) always
/// probes. Failed probes are returned to the caller and never cached.
///
/// # Example
///
/// ```rust,no_run
/// use rig_acp_capabilities::{AgentKind, DetectOptions, Detector};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let detector = Detector::system(AgentKind::Gemini, DetectOptions::default());
///     if let Ok(result) = detector.detect().await {
///         println!("{:?}", result.version);
///     }
/// }
/// ```
pub struct Detector {
    kind: AgentKind,
    probe: Arc<dyn Probe>,
    cache_ttl: Duration,
    cache: Mutex<Option<CachedDetection>>,
}

impl Detector {
    /// Create a detector for `kind` over an arbitrary probe.
    pub fn new(kind: AgentKind, probe: Arc<dyn Probe>, options: DetectOptions) -> Self {
        Self {
            kind,
            probe,
            cache_ttl: options.cache_ttl,
            cache: Mutex::new(None),
        }
    }

    /// Create a detector that probes the real system.
    pub fn system(kind: AgentKind, options: DetectOptions) -> Self {
        let probe = Arc::new(SystemProbe::new(kind, &options));
        Self::new(kind, probe, options)
    }

    /// The CLI this detector probes for.
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Detect the CLI, reusing a fresh cached result when available.
    pub async fn detect(&self) -> Result<DetectionResult, ProbeError> {
        let cached = self
            .lock_cache()
            .as_ref()
            .filter(|entry| entry.probed_at.elapsed() < self.cache_ttl)
            .map(|entry| entry.result.clone());

        // The cache guard is released above, before any await
        match cached {
            Some(result) => {
                debug!(agent = ?self.kind, "Using cached detection result");
                Ok(result)
            }
            None => self.refresh().await,
        }
    }

    /// Probe the CLI unconditionally and cache the result on success.
    pub async fn refresh(&self) -> Result<DetectionResult, ProbeError> {
        debug!(agent = ?self.kind, "Probing for CLI");
        // Errors return early and leave the previous entry in place
        let result = self.probe.probe().await?;

        *self.lock_cache() = Some(CachedDetection {
            result: result.clone(),
            probed_at: Instant::now(),
        });

        Ok(result)
    }

    /// Forget the cached result; the next [`detect`](Self::detect) probes.
    pub fn clear_cache(&self) {
        info!(agent = ?self.kind, "Clearing detection cache");
        *self.lock_cache() = None;
    }

    /// Steps for installing the CLI by hand.
    pub fn installation_instructions(&self) -> InstallationInstructions {
        InstallationInstructions::for_agent(self.kind)
    }

    fn lock_cache(&self) -> MutexGuard<'_, Option<CachedDetection>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector")
            .field("kind", &self.kind)
            .field("cache_ttl", &self.cache_ttl)
            .finish_non_exhaustive()
    }
}
