// SPDX-License-Identifier: MPL-2.0
//! Registry of resolved catalogs, keyed by locale.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Holds the resolved catalog for every loaded locale plus the default
/// locale used when a caller asks for a locale that was never registered.
///
/// The registry is built once during startup and not mutated afterwards;
/// all contained data is owned, so a finished registry is `Send + Sync`
/// and can be shared freely between readers.
#[derive(Debug, Clone, Default)]
pub struct TranslationRegistry {
    catalogs: HashMap<LanguageIdentifier, Catalog>,
    default_locale: Option<LanguageIdentifier>,
}

impl TranslationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the resolved catalog for `locale`, replacing any earlier
    /// registration.
    pub fn register(&mut self, locale: LanguageIdentifier, catalog: Catalog) {
        self.catalogs.insert(locale, catalog);
    }

    /// Marks `locale` as the fallback for lookups against unregistered
    /// locales. Fails with [`Error::Config`] when `locale` has no catalog.
    pub fn set_default_locale(&mut self, locale: LanguageIdentifier) -> Result<()> {
        if !self.catalogs.contains_key(&locale) {
            return Err(Error::Config(format!(
                "default locale {locale} is not registered"
            )));
        }
        self.default_locale = Some(locale);
        Ok(())
    }

    /// Looks up `key` in the catalog registered for `locale`.
    ///
    /// An unregistered locale is answered from the default locale's catalog.
    /// A registered locale with no entry for `key` yields `None` without
    /// consulting any other catalog; the caller decides the fallback text.
    pub fn lookup(&self, locale: &LanguageIdentifier, key: &str) -> Option<&str> {
        match self.catalogs.get(locale) {
            Some(catalog) => catalog.get(key),
            None => self
                .default_catalog()
                .and_then(|catalog| catalog.get(key)),
        }
    }

    pub fn default_locale(&self) -> Option<&LanguageIdentifier> {
        self.default_locale.as_ref()
    }

    fn default_catalog(&self) -> Option<&Catalog> {
        self.default_locale
            .as_ref()
            .and_then(|locale| self.catalogs.get(locale))
    }

    /// Returns the catalog registered for `locale`, if any.
    pub fn catalog(&self, locale: &LanguageIdentifier) -> Option<&Catalog> {
        self.catalogs.get(locale)
    }

    /// All registered locales, sorted by tag for stable display.
    pub fn locales(&self) -> Vec<&LanguageIdentifier> {
        let mut locales: Vec<_> = self.catalogs.keys().collect();
        locales.sort_by_key(|locale| locale.to_string());
        locales
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> LanguageIdentifier {
        tag.parse().expect("failed to parse locale tag")
    }

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        Catalog::from_entries(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn lookup_finds_registered_values() {
        let mut registry = TranslationRegistry::new();
        registry.register(locale("en-US"), catalog(&[("greeting", "Hello")]));

        assert_eq!(registry.lookup(&locale("en-US"), "greeting"), Some("Hello"));
    }

    #[test]
    fn lookup_of_missing_key_is_none_even_with_default_set() {
        let mut registry = TranslationRegistry::new();
        registry.register(locale("en-US"), catalog(&[("greeting", "Hello")]));
        registry.register(locale("de-DE"), catalog(&[("farewell", "Tschüss")]));
        registry
            .set_default_locale(locale("en-US"))
            .expect("default locale should register");

        assert_eq!(registry.lookup(&locale("de-DE"), "greeting"), None);
    }

    #[test]
    fn unregistered_locale_is_served_from_the_default() {
        let mut registry = TranslationRegistry::new();
        registry.register(locale("en-US"), catalog(&[("greeting", "Hello")]));
        registry
            .set_default_locale(locale("en-US"))
            .expect("default locale should register");

        assert_eq!(registry.lookup(&locale("xx-XX"), "greeting"), Some("Hello"));
    }

    #[test]
    fn unregistered_locale_without_default_is_none() {
        let mut registry = TranslationRegistry::new();
        registry.register(locale("en-US"), catalog(&[("greeting", "Hello")]));

        assert_eq!(registry.lookup(&locale("xx-XX"), "greeting"), None);
    }

    #[test]
    fn default_locale_must_be_registered() {
        let mut registry = TranslationRegistry::new();
        let err = registry
            .set_default_locale(locale("en-US"))
            .expect_err("unregistered default should be rejected");

        assert!(matches!(err, Error::Config(_)));
        assert_eq!(registry.default_locale(), None);
    }

    #[test]
    fn registering_a_locale_again_replaces_its_catalog() {
        let mut registry = TranslationRegistry::new();
        registry.register(locale("en-US"), catalog(&[("greeting", "Hello")]));
        registry.register(locale("en-US"), catalog(&[("greeting", "Hi")]));

        assert_eq!(registry.lookup(&locale("en-US"), "greeting"), Some("Hi"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn locales_are_sorted_by_tag() {
        let mut registry = TranslationRegistry::new();
        registry.register(locale("fr-FR"), catalog(&[]));
        registry.register(locale("de-DE"), catalog(&[]));
        registry.register(locale("en-US"), catalog(&[]));

        let tags: Vec<String> = registry
            .locales()
            .iter()
            .map(|locale| locale.to_string())
            .collect();
        assert_eq!(tags, ["de-DE", "en-US", "fr-FR"]);
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranslationRegistry>();
    }
}
