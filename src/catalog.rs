// SPDX-License-Identifier: MPL-2.0
//! Base catalogs bundled with the application.
//!
//! Every file in `assets/lang/` is one locale's base catalog, named with the
//! underscore form of its tag (`en_US.properties`). The supported locale set
//! is whatever that folder contains; adding a language means adding a file,
//! no code changes.

use crate::error::{Error, Result};
use crate::locale;
use crate::properties;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/lang/"]
struct CatalogAssets;

const CATALOG_SUFFIX: &str = ".properties";

/// Key to template mapping for a single locale.
///
/// After merging, a catalog always carries exactly the key set of the base
/// catalog it was built from. Values are opaque templates; rendering them is
/// the caller's concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from already-parsed entries.
    pub fn from_entries(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Returns the template for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over all key/template pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Access to the compiled-in base catalogs.
pub struct BaseCatalogs;

impl BaseCatalogs {
    /// Locale tags discovered in the embedded catalog folder, sorted for a
    /// deterministic load order.
    pub fn locales() -> Vec<LanguageIdentifier> {
        let mut locales: Vec<LanguageIdentifier> = CatalogAssets::iter()
            .filter_map(|file| {
                let stem = file.as_ref().strip_suffix(CATALOG_SUFFIX)?;
                locale::parse_tag(stem).ok()
            })
            .collect();
        locales.sort_by_key(|locale| locale.to_string());
        locales
    }

    /// Loads the base catalog for `locale`.
    ///
    /// Returns [`Error::MissingCatalog`] when no bundled resource exists for
    /// the tag. Embedded resources are trusted, so decoding is lossy.
    pub fn load(locale: &LanguageIdentifier) -> Result<Catalog> {
        let name = format!("{}{}", locale::file_tag(locale), CATALOG_SUFFIX);
        let file = CatalogAssets::get(&name)
            .ok_or_else(|| Error::MissingCatalog(locale.to_string()))?;
        let text = String::from_utf8_lossy(file.data.as_ref());
        Ok(Catalog::from_entries(properties::parse(&text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_accessors_reflect_entries() {
        let mut entries = HashMap::new();
        entries.insert("greeting".to_string(), "Hello".to_string());
        let catalog = Catalog::from_entries(entries);

        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("greeting"), Some("Hello"));
        assert_eq!(catalog.get("missing"), None);
    }

    #[test]
    fn empty_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }

    #[test]
    fn embedded_locales_include_the_default_language() {
        let locales = BaseCatalogs::locales();
        assert!(
            locales.iter().any(|l| l.to_string() == "en-US"),
            "bundled catalogs must include en-US"
        );
    }

    #[test]
    fn embedded_locales_are_sorted_and_unique() {
        let locales = BaseCatalogs::locales();
        let tags: Vec<String> = locales.iter().map(|l| l.to_string()).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
    }

    #[test]
    fn load_returns_the_english_catalog() {
        let locale = crate::locale::parse_tag("en_US").expect("failed to parse tag");
        let catalog = BaseCatalogs::load(&locale).expect("failed to load en_US catalog");

        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("menu.file.quit"), Some("Quit"));
    }

    #[test]
    fn load_unknown_locale_reports_missing_catalog() {
        let locale = crate::locale::parse_tag("xx_XX").expect("failed to parse tag");
        let err = BaseCatalogs::load(&locale).expect_err("xx_XX should have no catalog");
        assert!(matches!(err, Error::MissingCatalog(tag) if tag == "xx-XX"));
    }

    #[test]
    fn every_locale_shares_the_english_key_set() {
        let english = crate::locale::parse_tag("en_US").expect("failed to parse tag");
        let reference: HashSet<String> = BaseCatalogs::load(&english)
            .expect("failed to load en_US catalog")
            .keys()
            .map(String::from)
            .collect();

        for locale in BaseCatalogs::locales() {
            let catalog = BaseCatalogs::load(&locale).expect("failed to load catalog");
            let keys: HashSet<String> = catalog.keys().map(String::from).collect();
            assert_eq!(keys, reference, "key set mismatch for {locale}");
        }
    }
}
