// SPDX-License-Identifier: MPL-2.0
//! Layered catalog resolution.
//!
//! A resolved catalog is the base catalog with override layers applied in
//! order of increasing specificity: the global layer first, then the
//! locale-specific layer. The last layer that defines a key supplies its
//! effective value.

use crate::catalog::Catalog;
use crate::overrides::OverrideMap;
use std::collections::HashMap;

/// Applies `layers` to `base` and returns the resolved catalog.
///
/// For each key in `base`, the value from the last layer containing that key
/// wins; keys no layer touches keep their base value. Keys that appear only
/// in a layer are dropped: hand-edited override files accumulate stale keys
/// after catalog changes, and dropping them keeps every resolved catalog on
/// its base key set.
///
/// The function is pure. Resolving the same inputs twice yields equal
/// catalogs.
pub fn resolve(base: &Catalog, layers: &[&OverrideMap]) -> Catalog {
    let mut entries = HashMap::with_capacity(base.len());

    for (key, base_value) in base.iter() {
        let mut value = base_value;
        for layer in layers {
            if let Some(overridden) = layer.get(key) {
                value = overridden.as_str();
            }
        }
        entries.insert(key.to_string(), value.to_string());
    }

    Catalog::from_entries(entries)
}
