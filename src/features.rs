//! Version comparison and the feature gates derived from it.
//!
//! Versions are dotted runs of non-negative integers (`0.2.4`,
//! `1.0.0.3`). There is no pre-release or build-metadata syntax; anything
//! that is not all digits between the dots is treated as malformed, and a
//! malformed version never meets a requirement.

use std::cmp::Ordering;

use crate::FeatureFlags;

/// Minimum CLI version answering `session/list` and `session/load`.
pub const MIN_CLI_VERSION_FOR_SESSION_METHODS: &str = "0.2.4";

/// `session/save` has not shipped in any CLI release. This is a policy
/// switch, not a version threshold.
const SESSION_SAVE_ENABLED: bool = false;

/// Split `version` into numeric components, leading zeros stripped.
///
/// Returns `None` if any component is empty or contains anything other
/// than ASCII digits. Components stay as digit strings, so there is no
/// upper bound on their size.
fn parse_components(version: &str) -> Option<Vec<&str>> {
    version
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Some(part.trim_start_matches('0'))
        })
        .collect()
}

/// Order two zero-stripped digit strings numerically.
fn compare_component(left: &str, right: &str) -> Ordering {
    // Without leading zeros, the longer run is the larger number.
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

/// Compare two dotted versions, padding the shorter one with zeros.
///
/// Returns `None` if either side is malformed.
///
/// ```rust
/// use rig_acp_capabilities::compare_versions;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_versions("0.2.4.1", "0.2.4"), Some(Ordering::Greater));
/// assert_eq!(compare_versions("1.0", "1.0.0"), Some(Ordering::Equal));
/// assert_eq!(compare_versions("1.x", "1.0"), None);
/// ```
pub fn compare_versions(left: &str, right: &str) -> Option<Ordering> {
    let left = parse_components(left)?;
    let right = parse_components(right)?;
    let len = left.len().max(right.len());

    for i in 0..len {
        // Missing components count as zero, which strips to "".
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        match compare_component(l, r) {
            Ordering::Equal => continue,
            decided => return Some(decided),
        }
    }

    Some(Ordering::Equal)
}

/// Whether `version` meets `minimum` (inclusive).
///
/// An absent or malformed version is never supported.
///
/// ```rust
/// use rig_acp_capabilities::is_version_supported;
///
/// assert!(is_version_supported(Some("0.2.4"), "0.2.4"));
/// assert!(is_version_supported(Some("0.2.4.1"), "0.2.4"));
/// assert!(!is_version_supported(Some("0.2"), "0.2.4"));
/// assert!(!is_version_supported(None, "0.2.4"));
/// ```
pub fn is_version_supported(version: Option<&str>, minimum: &str) -> bool {
    let Some(version) = version else {
        return false;
    };

    matches!(
        compare_versions(version, minimum),
        Some(Ordering::Greater | Ordering::Equal)
    )
}

/// Derive the capability set for `version`.
///
/// Session list and load share the [`MIN_CLI_VERSION_FOR_SESSION_METHODS`]
/// gate. Session save stays off for every version.
pub fn feature_flags(version: Option<&str>) -> FeatureFlags {
    let session_methods = is_version_supported(version, MIN_CLI_VERSION_FOR_SESSION_METHODS);

    FeatureFlags {
        supports_session_list: session_methods,
        supports_session_load: session_methods,
        supports_session_save: SESSION_SAVE_ENABLED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MALFORMED: &[&str] = &[
        "", ".", "1.", ".1", "1..2", "v1.0.0", "1.0.0-beta", "1.0.0+build", "abc", "1.-2",
        "+1.0", " 1.0", "1.0 ",
    ];

    #[test]
    fn test_absent_version_is_unsupported() {
        assert!(!is_version_supported(None, "0.0.0"));
        assert!(!is_version_supported(None, MIN_CLI_VERSION_FOR_SESSION_METHODS));
    }

    #[test]
    fn test_malformed_versions_are_unsupported() {
        for version in MALFORMED {
            assert!(
                !is_version_supported(Some(*version), "0.0.0"),
                "{:?} should be rejected",
                version
            );
        }
    }

    #[test]
    fn test_malformed_minimum_is_unmet() {
        assert!(!is_version_supported(Some("1.0.0"), "1.x"));
    }

    #[test]
    fn test_equal_is_supported() {
        for v in ["0", "0.2.4", "1.2.3.4", "10.0.1"] {
            assert!(is_version_supported(Some(v), v), "{} should meet itself", v);
        }
    }

    #[test]
    fn test_equal_after_padding_is_supported() {
        assert!(is_version_supported(Some("1.0"), "1.0.0"));
        assert!(is_version_supported(Some("1.0.0.0"), "1"));
        assert!(is_version_supported(Some("0.2.4.0"), "0.2.4"));
    }

    #[test]
    fn test_extra_component_above_minimum() {
        assert!(is_version_supported(Some("0.2.4.1"), "0.2.4"));
    }

    #[test]
    fn test_short_version_below_minimum() {
        assert!(!is_version_supported(Some("0.2"), "0.2.4"));
    }

    #[test]
    fn test_first_differing_component_decides() {
        assert!(is_version_supported(Some("0.10.0"), "0.9.99"));
        assert!(is_version_supported(Some("1.0.0"), "0.99.99"));
        assert!(!is_version_supported(Some("0.2.3"), "0.2.4"));
        assert!(!is_version_supported(Some("0.1.99"), "0.2.0"));
    }

    #[test]
    fn test_leading_zeros_are_numeric() {
        assert_eq!(compare_versions("0.02.4", "0.2.4"), Some(Ordering::Equal));
    }

    #[test]
    fn test_components_beyond_u64_compare_numerically() {
        let huge = "99999999999999999999999.0.0";

        assert!(is_version_supported(Some(huge), MIN_CLI_VERSION_FOR_SESSION_METHODS));
        assert!(is_version_supported(Some(huge), "1.0.0"));
        assert_eq!(
            compare_versions("1.99999999999999999999999", "1.100000000000000000000000"),
            Some(Ordering::Less)
        );
        assert_eq!(
            compare_versions("0.0099999999999999999999999", "0.99999999999999999999999"),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_all_zero_components_equal() {
        assert_eq!(compare_versions("0.00.000", "0"), Some(Ordering::Equal));
        assert!(is_version_supported(Some("000"), "0.0"));
    }

    #[test]
    fn test_monotonic_in_version() {
        let ladder = [
            "0.1.0",
            "0.2",
            "0.2.3",
            "0.2.4",
            "0.2.4.1",
            "0.2.5",
            "0.3",
            "1.0.0",
            "2.1.12",
            "18446744073709551616.0",
            "99999999999999999999999.0.0",
        ];
        let minimum = MIN_CLI_VERSION_FOR_SESSION_METHODS;

        for (i, lower) in ladder.iter().enumerate() {
            if !is_version_supported(Some(*lower), minimum) {
                continue;
            }
            for higher in &ladder[i..] {
                assert!(
                    is_version_supported(Some(*higher), minimum),
                    "{} supported but {} is not",
                    lower,
                    higher
                );
            }
        }
    }

    #[test]
    fn test_feature_flags_at_threshold() {
        let flags = feature_flags(Some("0.2.4"));
        assert!(flags.supports_session_list);
        assert!(flags.supports_session_load);
        assert!(!flags.supports_session_save);
    }

    #[test]
    fn test_feature_flags_below_threshold() {
        assert_eq!(feature_flags(Some("0.1.0")), FeatureFlags::default());
        assert_eq!(feature_flags(None), FeatureFlags::default());
    }

    #[test]
    fn test_session_save_never_enabled() {
        for v in ["0.0.1", "0.2.4", "1.0.0", "99.0.0", "999999.999999.999999"] {
            assert!(!feature_flags(Some(v)).supports_session_save);
        }
    }
}
