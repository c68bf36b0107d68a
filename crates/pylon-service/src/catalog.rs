//! Constant key→metadata catalogs.
//!
//! The original service resolved enum members to rich objects through
//! dynamic attribute access; here each catalog is an explicit mapping
//! built once at assembly time and resolved by lookup with an explicit
//! not-found outcome: an unknown key is an application failure with
//! status 400 and detail `Invalid key {key}`.

use indexmap::IndexMap;
use pylon_envelope::Failure;
use serde::Serialize;

/// Metadata for a supported social platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    /// Canonical lookup key.
    pub key: String,
    /// Human-readable platform name.
    pub display_name: String,
    /// Platform home URL.
    pub base_url: String,
}

/// The service's constant lookup catalogs.
#[derive(Debug, Clone)]
pub struct Catalog {
    platforms: IndexMap<String, PlatformInfo>,
    fruit_nicknames: IndexMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Builds the catalogs with their fixed contents.
    #[must_use]
    pub fn new() -> Self {
        let mut platforms = IndexMap::new();
        for (key, display_name, base_url) in [
            ("instagram", "Instagram", "https://www.instagram.com"),
            ("facebook", "Facebook", "https://www.facebook.com"),
            ("google", "Google", "https://www.google.com"),
        ] {
            platforms.insert(
                key.to_string(),
                PlatformInfo {
                    key: key.to_string(),
                    display_name: display_name.to_string(),
                    base_url: base_url.to_string(),
                },
            );
        }

        let mut fruit_nicknames = IndexMap::new();
        for (key, nickname) in [("mango", "aam"), ("banana", "kela"), ("apple", "seb")] {
            fruit_nicknames.insert(key.to_string(), nickname.to_string());
        }

        Self {
            platforms,
            fruit_nicknames,
        }
    }

    /// Returns the permitted platform keys, in catalog order.
    pub fn platform_keys(&self) -> impl Iterator<Item = &str> {
        self.platforms.keys().map(String::as_str)
    }

    /// Looks up a platform by key.
    ///
    /// # Errors
    ///
    /// Returns a 400 `Invalid key {key}` failure for an unknown key.
    pub fn platform(&self, key: &str) -> Result<&PlatformInfo, Failure> {
        self.platforms.get(key).ok_or_else(|| Failure::invalid_key(key))
    }

    /// Looks up a fruit nickname by key.
    ///
    /// # Errors
    ///
    /// Returns a 400 `Invalid key {key}` failure for an unknown key.
    pub fn fruit_nickname(&self, key: &str) -> Result<&str, Failure> {
        self.fruit_nicknames
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Failure::invalid_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_known_platform_lookup() {
        let catalog = Catalog::new();
        let info = catalog.platform("instagram").unwrap();
        assert_eq!(info.display_name, "Instagram");
        assert_eq!(info.base_url, "https://www.instagram.com");
    }

    #[test]
    fn test_unknown_platform_is_invalid_key() {
        let catalog = Catalog::new();
        let failure = catalog.platform("twitter").unwrap_err();
        assert_eq!(failure.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(failure.to_string(), "Invalid key twitter");
    }

    #[test]
    fn test_platform_lookup_is_case_sensitive() {
        let catalog = Catalog::new();
        assert!(catalog.platform("Instagram").is_err());
    }

    #[test]
    fn test_fruit_nickname_lookup() {
        let catalog = Catalog::new();
        assert_eq!(catalog.fruit_nickname("mango").unwrap(), "aam");
        assert!(catalog.fruit_nickname("durian").is_err());
    }

    #[test]
    fn test_platform_keys_order() {
        let catalog = Catalog::new();
        let keys: Vec<&str> = catalog.platform_keys().collect();
        assert_eq!(keys, vec!["instagram", "facebook", "google"]);
    }
}
