// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised while loading catalogs and applying overrides.
///
/// Per-locale and per-file failures are logged and contained by the loader;
/// only an unusable end state (no default locale resolvable) reaches callers.
#[derive(Debug, Clone)]
pub enum Error {
    /// Filesystem failure while seeding or reading override files.
    Io(String),

    /// A file exists but its content could not be decoded.
    Parse(String),

    /// No bundled base catalog exists for the requested locale tag.
    MissingCatalog(String),

    /// Broken configuration, e.g. a default locale that was never registered.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::MissingCatalog(tag) => write!(f, "No base catalog for locale: {}", tag),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
