//! Configuration for detection and resolution.
//!
//! [`DetectOptions`] controls how the CLI is probed and how long a raw
//! detection stays cached. [`ResolverOptions`] controls how long a
//! resolved [`VersionInfo`](crate::VersionInfo) stays fresh.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration options for probing the CLI.
///
/// # Example
///
/// ```rust
/// use rig_acp_capabilities::DetectOptions;
/// use std::time::Duration;
///
/// // Point at a specific executable instead of searching PATH
/// let opts = DetectOptions {
///     cli_path: Some("/opt/tools/bin/claude".into()),
///     timeout: Duration::from_secs(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Maximum time to wait for `--version` to complete.
    ///
    /// Default: 5 seconds
    pub timeout: Duration,

    /// How long [`Detector::detect`](crate::Detector::detect) reuses a
    /// previous result before probing again.
    ///
    /// Default: 60 seconds
    pub cache_ttl: Duration,

    /// Explicit executable to probe. When set, PATH is not searched.
    ///
    /// Default: `None`
    pub cli_path: Option<PathBuf>,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            cache_ttl: Duration::from_secs(60),
            cli_path: None,
        }
    }
}

/// Configuration options for the version resolver.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// How long a resolved snapshot is served from cache.
    ///
    /// Default: 5 minutes
    pub cache_ttl: Duration,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
        }
    }
}
