// SPDX-License-Identifier: MPL-2.0
//! Override layers read from the operator-editable override directory.
//!
//! Overrides live as plain properties files under `<base>/lang/`. A layer
//! that does not exist on disk is simply absent; a layer that exists but
//! cannot be read is logged and treated as absent, so one broken file never
//! takes down the load.

use crate::error::{Error, Result};
use crate::locale::file_tag;
use crate::logging::Logger;
use crate::properties;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Bundled override templates seeded on first run.
#[derive(RustEmbed)]
#[folder = "assets/overrides/"]
struct TemplateAssets;

/// One parsed override layer.
pub type OverrideMap = HashMap<String, String>;

/// Directory under the base directory that holds override files.
pub const LANG_DIR: &str = "lang";

/// Override file applied to every locale.
pub const GLOBAL_OVERRIDES_FILE: &str = "global_overrides.properties";

/// Seeded per-locale override file for the shipped default locale.
pub const DEFAULT_LOCALE_OVERRIDES_FILE: &str = "en_US_overrides.properties";

/// Returns the override file name for `locale`, e.g. `de_DE_overrides.properties`.
pub fn override_file_name(locale: &LanguageIdentifier) -> String {
    format!("{}_overrides.properties", file_tag(locale))
}

fn read_layer(path: &Path) -> Result<OverrideMap> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|err| Error::Parse(format!("{}: {}", path.display(), err)))?;
    Ok(properties::parse(&text))
}

/// Loads the override layer at `path`, if there is one.
///
/// A missing file is the normal case and yields `None` silently. A file that
/// exists but cannot be read or decoded is reported through `logger` and also
/// yields `None`, so the caller falls back to the layers below it.
pub fn load_layer(path: &Path, logger: &dyn Logger) -> Option<OverrideMap> {
    if !path.exists() {
        return None;
    }

    match read_layer(path) {
        Ok(layer) => Some(layer),
        Err(err) => {
            logger.error(&format!(
                "failed to read overrides from {}: {}",
                path.display(),
                err
            ));
            None
        }
    }
}

fn write_template(dir: &Path, name: &str, logger: &dyn Logger) -> Result<()> {
    let path = dir.join(name);
    if path.exists() {
        return Ok(());
    }
    let template = TemplateAssets::get(name)
        .ok_or_else(|| Error::Io(format!("missing override template: {name}")))?;
    fs::write(&path, template.data.as_ref())?;
    logger.info(&format!("created {}", path.display()));
    Ok(())
}

/// Seeds the default override files into `dir` on first run.
///
/// The global override file acts as the marker: when it already exists the
/// directory is considered initialized and nothing is touched. Otherwise
/// `dir` (and its parents) are created and the bundled templates for the
/// global and default-locale override files are written out. A template is
/// only written when its file is missing, so operator edits survive even a
/// re-seed after the marker file was deleted.
pub fn seed_default_overrides(dir: &Path, logger: &dyn Logger) -> Result<()> {
    if dir.join(GLOBAL_OVERRIDES_FILE).exists() {
        return Ok(());
    }

    logger.info(&format!(
        "creating default override files in {}",
        dir.display()
    ));
    fs::create_dir_all(dir)?;
    write_template(dir, GLOBAL_OVERRIDES_FILE, logger)?;
    write_template(dir, DEFAULT_LOCALE_OVERRIDES_FILE, logger)?;
    Ok(())
}
