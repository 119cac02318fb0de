// SPDX-License-Identifier: MPL-2.0
//! `lingua_lens` loads per-locale translation catalogs and layers operator
//! overrides on top of them.
//!
//! Base catalogs ship embedded in the binary; a global override file and
//! optional per-locale override files under `<base>/lang/` refine them at
//! startup. The resolved catalogs end up in a [`registry::TranslationRegistry`]
//! that answers `lookup(locale, key)` queries, with a configurable default
//! locale backing lookups for locales that were never loaded.

#![doc(html_root_url = "https://docs.rs/lingua_lens/0.2.0")]

pub mod catalog;
pub mod error;
pub mod loader;
pub mod locale;
pub mod logging;
pub mod merge;
pub mod overrides;
pub mod properties;
pub mod registry;
pub mod settings;
