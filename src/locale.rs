// SPDX-License-Identifier: MPL-2.0
//! Locale tag handling.
//!
//! Catalog and override files are named with the underscore form (`en_US`),
//! while in-memory tags are [`LanguageIdentifier`] values. The two functions
//! here convert between the forms.

use crate::error::{Error, Result};
use unic_langid::LanguageIdentifier;

/// Parses a locale tag, accepting both `en_US` and `en-US` forms.
pub fn parse_tag(tag: &str) -> Result<LanguageIdentifier> {
    tag.replace('_', "-")
        .parse()
        .map_err(|_| Error::Config(format!("invalid locale tag: {tag}")))
}

/// Returns the underscore form used in file names, e.g. `en-US` -> `en_US`.
pub fn file_tag(locale: &LanguageIdentifier) -> String {
    locale.to_string().replace('-', "_")
}
