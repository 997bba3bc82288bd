//! Version resolution with a time-bounded cache.

use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::features::{feature_flags, is_version_supported};
use crate::{
    AgentKind, CapabilityContext, DetectOptions, Detector, FeatureFlags, ResolverOptions,
    VersionInfo,
};

#[derive(Debug, Clone)]
struct CachedResolution {
    value: VersionInfo,
    resolved_at: Instant,
}

/// Resolves the CLI's version and the capabilities it unlocks.
///
/// A resolved [`VersionInfo`] is cached for [`ResolverOptions::cache_ttl`].
/// Concurrent callers that miss the cache wait on a single refresh rather
/// than each probing. Probe failures never escape: they resolve to
/// [`VersionInfo::unavailable`] and are not cached.
///
/// # Example
///
/// ```rust,no_run
/// use rig_acp_capabilities::VersionResolver;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let resolver = VersionResolver::global();
///     if resolver.supports_session_list().await {
///         println!("session/list available");
///     }
/// }
/// ```
pub struct VersionResolver {
    detector: Arc<Detector>,
    cache_ttl: Duration,
    cache: RwLock<Option<CachedResolution>>,
    refresh_gate: AsyncMutex<()>,
}

impl VersionResolver {
    /// Create a resolver over `detector`.
    pub fn new(detector: Arc<Detector>, options: ResolverOptions) -> Self {
        Self {
            detector,
            cache_ttl: options.cache_ttl,
            cache: RwLock::new(None),
            refresh_gate: AsyncMutex::new(()),
        }
    }

    /// Process-wide resolver for the default agent, probing the real
    /// system. Built on first use; every call returns the same instance.
    ///
    /// Prefer constructing a resolver and sharing it explicitly (see
    /// [`CliCapabilities`](crate::CliCapabilities)); this accessor exists
    /// for call sites that have no owner to borrow from.
    pub fn global() -> &'static VersionResolver {
        static GLOBAL: OnceLock<VersionResolver> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let detector = Detector::system(AgentKind::default(), DetectOptions::default());
            VersionResolver::new(Arc::new(detector), ResolverOptions::default())
        })
    }

    /// The detector this resolver probes through.
    pub fn detector(&self) -> &Arc<Detector> {
        &self.detector
    }

    /// Resolve the current version info.
    ///
    /// Without `force_refresh`, a cached value younger than the TTL is
    /// returned without touching the detector, and a miss asks the detector
    /// for its own cached-or-fresh result. With `force_refresh`, the
    /// detector always probes.
    pub async fn resolve(&self, force_refresh: bool) -> VersionInfo {
        if !force_refresh {
            if let Some(info) = self.fresh_cached() {
                debug!("Using cached version info");
                return info;
            }
        }

        let _gate = self.refresh_gate.lock().await;

        // Another caller may have refreshed while we waited.
        if !force_refresh {
            if let Some(info) = self.fresh_cached() {
                debug!("Using version info resolved by a concurrent caller");
                return info;
            }
        }

        let detection = if force_refresh {
            self.detector.refresh().await
        } else {
            self.detector.detect().await
        };

        match detection {
            Ok(detection_result) => {
                let info = VersionInfo::from_detection(detection_result);
                info!(
                    version = info.version.as_deref().unwrap_or("none"),
                    supported = info.is_supported,
                    "Resolved CLI version"
                );
                *self.write_cache() = Some(CachedResolution {
                    value: info.clone(),
                    resolved_at: Instant::now(),
                });
                info
            }
            Err(e) => {
                warn!(error = %e, "CLI detection failed; treating as not installed");
                VersionInfo::unavailable()
            }
        }
    }

    /// Resolve and publish the result as the current snapshot of `context`.
    pub async fn resolve_into(
        &self,
        context: &CapabilityContext,
        force_refresh: bool,
    ) -> VersionInfo {
        let info = self.resolve(force_refresh).await;
        context.set_current_version_info(Some(info.clone()));
        info
    }

    /// Whether `version` meets `minimum`. See [`is_version_supported`].
    pub fn is_version_supported(version: Option<&str>, minimum: &str) -> bool {
        is_version_supported(version, minimum)
    }

    /// Capabilities for `version`. See [`feature_flags`].
    pub fn feature_flags(version: Option<&str>) -> FeatureFlags {
        feature_flags(version)
    }

    /// Whether the installed CLI answers `session/list`.
    pub async fn supports_session_list(&self) -> bool {
        self.resolve(false).await.features.supports_session_list
    }

    /// Whether the installed CLI answers `session/load`.
    pub async fn supports_session_load(&self) -> bool {
        self.resolve(false).await.features.supports_session_load
    }

    /// Whether the installed CLI answers `session/save`.
    pub async fn supports_session_save(&self) -> bool {
        self.resolve(false).await.features.supports_session_save
    }

    /// Drop the cached resolution and the detector's cached result; the
    /// next [`resolve`](Self::resolve) probes regardless of TTL.
    pub fn clear_cache(&self) {
        info!("Clearing version cache");
        *self.write_cache() = None;
        self.detector.clear_cache();
    }

    fn fresh_cached(&self) -> Option<VersionInfo> {
        self.read_cache()
            .as_ref()
            .filter(|entry| entry.resolved_at.elapsed() < self.cache_ttl)
            .map(|entry| entry.value.clone())
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Option<CachedResolution>> {
        self.cache.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Option<CachedResolution>> {
        self.cache.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for VersionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionResolver")
            .field("detector", &self.detector)
            .field("cache_ttl", &self.cache_ttl)
            .finish_non_exhaustive()
    }
}
