//! JSON resource bundles.
//!
//! A bundle maps locale tags to category tables whose values are raw
//! comma-separated strings:
//!
//! ```json
//! {
//!     "version": 1,
//!     "name": "address",
//!     "locales": {
//!         "root": {"cities": "Springfield,Riverton"},
//!         "zh-CN": {"cities": "北京,上海"}
//!     }
//! }
//! ```
//!
//! Lookups walk the locale's fallback chain, so `zh-CN` falls back to `zh`
//! and then to `root`.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;

use super::{ROOT_BUNDLE, ValueSource};
use crate::error::ValuesError;
use crate::locale::Locale;

/// Current supported bundle version.
pub const BUNDLE_VERSION: u32 = 1;

/// Data domains shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Streets, suffixes, and cities.
    Address,
    /// Given and family names.
    Names,
    /// Words, email hosts, and business types.
    Content,
}

impl Domain {
    /// File name used when loading this domain from a bundle directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Address => "address.json",
            Self::Names => "names.json",
            Self::Content => "content.json",
        }
    }

    const fn embedded_json(self) -> &'static str {
        match self {
            Self::Address => include_str!("../../data/address.json"),
            Self::Names => include_str!("../../data/names.json"),
            Self::Content => include_str!("../../data/content.json"),
        }
    }
}

/// A named set of locale-keyed category tables.
///
/// # Example
///
/// ```
/// use data_factory::{Locale, ResourceBundle, ValueSource};
///
/// let json = r#"{
///     "version": 1,
///     "name": "address",
///     "locales": {
///         "root": {"cities": "Springfield,Riverton"},
///         "zh": {"cities": "北京,上海"}
///     }
/// }"#;
///
/// let bundle = ResourceBundle::from_json(json).expect("valid bundle");
/// let locale = Locale::parse("zh-CN").expect("valid tag");
///
/// assert_eq!(bundle.lookup(&locale, "cities"), Some("北京,上海"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    name: String,
    tables: BTreeMap<String, BTreeMap<String, String>>,
}

impl ResourceBundle {
    /// Parses a bundle from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - A locale key is not a valid tag
    /// - Two locale keys normalise to the same tag
    /// - No locales are defined
    pub fn from_json(json: &str) -> Result<Self, ValuesError> {
        let raw: RawBundle = serde_json::from_str(json).map_err(|e| ValuesError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a bundle from a file below `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError`] if the file cannot be read or parsed.
    pub fn from_dir(dir: &Dir, path: &Utf8Path) -> Result<Self, ValuesError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| ValuesError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    /// Parses the bundle compiled into the crate for `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError`] if the embedded data fails validation.
    pub fn embedded(domain: Domain) -> Result<Self, ValuesError> {
        Self::from_json(domain.embedded_json())
    }

    fn from_raw(raw: RawBundle) -> Result<Self, ValuesError> {
        if raw.version != BUNDLE_VERSION {
            return Err(ValuesError::UnsupportedVersion {
                expected: BUNDLE_VERSION,
                actual: raw.version,
            });
        }

        if raw.locales.is_empty() {
            return Err(ValuesError::EmptyLocales { name: raw.name });
        }

        // Normalise tags so "zh_CN" in a file matches a parsed "zh-CN".
        let mut tables = BTreeMap::new();
        for (tag, table) in raw.locales {
            let key = if tag == ROOT_BUNDLE {
                tag
            } else {
                Locale::parse(&tag)?.to_string()
            };
            match tables.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(table);
                }
                Entry::Occupied(slot) => {
                    return Err(ValuesError::DuplicateLocale {
                        tag: slot.key().clone(),
                    });
                }
            }
        }

        Ok(Self {
            name: raw.name,
            tables,
        })
    }

    /// Returns the bundle name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the locale tags with their own table, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Returns the raw value stored under exactly `tag`, without walking
    /// the fallback chain. `tag` may be [`ROOT_BUNDLE`].
    #[must_use]
    pub fn table_value(&self, tag: &str, category: &str) -> Option<&str> {
        self.tables
            .get(tag)
            .and_then(|table| table.get(category))
            .map(String::as_str)
    }
}

impl ValueSource for ResourceBundle {
    fn lookup(&self, locale: &Locale, category: &str) -> Option<&str> {
        locale.fallback_chain().iter().find_map(|tag| {
            self.tables
                .get(tag)
                .and_then(|table| table.get(category))
                .map(String::as_str)
        })
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBundle {
    version: u32,
    name: String,
    locales: BTreeMap<String, BTreeMap<String, String>>,
}
