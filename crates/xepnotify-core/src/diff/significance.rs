//! Significance filter for version bumps.
//!
//! A bump is *editorial* when only the patch level (third component) or
//! anything below it changed. Components are compared as strings.

use serde::{Deserialize, Serialize};

/// Minimum number of components a decomposed version is padded to
const MIN_COMPONENTS: usize = 3;

/// Number of leading components that decide editorial vs. non-editorial
const SIGNIFICANT_COMPONENTS: usize = 2;

/// Which kinds of version bumps should be announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpFilter {
    pub include_editorial: bool,
    pub include_non_editorial: bool,
}

impl Default for BumpFilter {
    fn default() -> Self {
        Self {
            include_editorial: true,
            include_non_editorial: true,
        }
    }
}

/// Split a dotted version into components, padding with `"0"` to three
///
/// ```
/// use xepnotify_core::diff::decompose_version;
///
/// assert_eq!(decompose_version("1.2"), vec!["1", "2", "0"]);
/// assert_eq!(decompose_version("1.2.3.4"), vec!["1", "2", "3", "4"]);
/// ```
pub fn decompose_version(version: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = version.split('.').collect();
    if parts.len() < MIN_COMPONENTS {
        parts.resize(MIN_COMPONENTS, "0");
    }
    parts
}

/// Whether moving from `old` to `new` is an editorial-only bump
///
/// A version appearing from nothing, or disappearing, is never editorial.
pub fn is_editorial(old: Option<&str>, new: Option<&str>) -> bool {
    match (old, new) {
        (Some(old), Some(new)) => {
            let old = decompose_version(old);
            let new = decompose_version(new);
            old[..SIGNIFICANT_COMPONENTS] == new[..SIGNIFICANT_COMPONENTS]
        }
        _ => false,
    }
}

/// Whether an update from `old` to `new` passes `filter`
pub fn is_significant(old: Option<&str>, new: Option<&str>, filter: BumpFilter) -> bool {
    if is_editorial(old, new) {
        filter.include_editorial
    } else {
        filter.include_non_editorial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_pads_short_versions() {
        assert_eq!(decompose_version("1"), vec!["1", "0", "0"]);
        assert_eq!(decompose_version(""), vec!["", "0", "0"]);
    }

    #[test]
    fn test_padding_makes_short_and_long_forms_equal() {
        assert!(is_editorial(Some("1.2"), Some("1.2.1")));
        assert!(is_editorial(Some("1"), Some("1.0.5")));
    }

    #[test]
    fn test_components_compare_as_strings() {
        assert!(!is_editorial(Some("1.02.0"), Some("1.2.0")));
    }

    #[test]
    fn test_missing_new_version_is_non_editorial() {
        assert!(!is_editorial(Some("1.0.0"), None));
    }
}
