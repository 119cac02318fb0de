// SPDX-License-Identifier: MPL-2.0
//! Parser for plain key=value properties text.
//!
//! The catalog and override files are UTF-8 text with one entry per line.
//! `#` or `!` starts a comment line, the first `=` or `:` separates key from
//! value, and whitespace around both is trimmed. A line without a separator
//! becomes a key with an empty value. Later duplicates of a key win.

use std::collections::HashMap;

/// Parses properties text into a key/value map.
pub fn parse(text: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        match line.find(['=', ':']) {
            Some(idx) => {
                let key = line[..idx].trim();
                let value = line[idx + 1..].trim();
                if !key.is_empty() {
                    entries.insert(key.to_string(), value.to_string());
                }
            }
            None => {
                entries.insert(line.to_string(), String::new());
            }
        }
    }

    entries
}
