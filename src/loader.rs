// SPDX-License-Identifier: MPL-2.0
//! Startup loading: seeds the override files, layers them over the embedded
//! base catalogs and produces the registry the application queries.

use crate::catalog::BaseCatalogs;
use crate::error::{Error, Result};
use crate::locale::parse_tag;
use crate::logging::Logger;
use crate::merge;
use crate::overrides::{self, OverrideMap};
use crate::registry::TranslationRegistry;
use crate::settings::{self, Settings};
use std::path::Path;

/// Loads every embedded locale, layered with the override files found under
/// `base_dir/lang/`, and returns the populated registry.
///
/// The load is forgiving: a failed seeding or a broken override file is
/// reported through `logger` and skipped, and a locale whose base catalog
/// cannot be produced is dropped for this run. Two conditions remain hard
/// failures, since lookups could not work without them: no locale loaded at
/// all, and a `default_tag` that does not name a registered locale.
pub fn load(base_dir: &Path, default_tag: &str, logger: &dyn Logger) -> Result<TranslationRegistry> {
    let lang_dir = base_dir.join(overrides::LANG_DIR);

    if let Err(err) = overrides::seed_default_overrides(&lang_dir, logger) {
        logger.error(&format!("could not create override files: {err}"));
    }

    let global_layer = overrides::load_layer(&lang_dir.join(overrides::GLOBAL_OVERRIDES_FILE), logger);

    let mut registry = TranslationRegistry::new();
    for locale in BaseCatalogs::locales() {
        let base = match BaseCatalogs::load(&locale) {
            Ok(catalog) => catalog,
            Err(err) => {
                logger.error(&format!("skipping locale {locale}: {err}"));
                continue;
            }
        };

        let locale_layer =
            overrides::load_layer(&lang_dir.join(overrides::override_file_name(&locale)), logger);

        let mut layers: Vec<&OverrideMap> = Vec::with_capacity(2);
        if let Some(global) = &global_layer {
            layers.push(global);
        }
        if let Some(local) = &locale_layer {
            layers.push(local);
        }

        registry.register(locale, merge::resolve(&base, &layers));
    }

    if registry.is_empty() {
        return Err(Error::Config("no locales could be loaded".to_string()));
    }

    let default_locale = parse_tag(default_tag)?;
    registry.set_default_locale(default_locale.clone())?;
    logger.info(&format!(
        "loaded {} locales, default locale {}",
        registry.len(),
        default_locale
    ));

    Ok(registry)
}

/// Like [`load`], but resolves the default locale from `settings` first.
///
/// `explicit_lang` (typically a CLI flag) takes priority, then the settings
/// file, then the OS locale, each validated against the embedded locales.
pub fn load_with_settings(
    base_dir: &Path,
    explicit_lang: Option<&str>,
    settings: &Settings,
    logger: &dyn Logger,
) -> Result<TranslationRegistry> {
    let default_tag =
        settings::resolve_default_tag(explicit_lang, settings, &BaseCatalogs::locales());
    load(base_dir, &default_tag, logger)
}
