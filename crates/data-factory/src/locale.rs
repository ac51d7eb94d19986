//! Locale identifiers and their resolution order.

use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::ValuesError;

/// Language used when the host environment names no usable locale.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Environment variables consulted for the host locale, in priority order.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// A language with an optional region, such as `zh-CN` or `en`.
///
/// Tags are normalised on parse: the language is lowercased and the region
/// uppercased. Both `-` and `_` separate the parts, and POSIX encoding or
/// modifier suffixes (`.UTF-8`, `@euro`) are discarded.
///
/// # Example
///
/// ```
/// use data_factory::Locale;
///
/// let locale: Locale = "zh_CN.UTF-8".parse().expect("valid tag");
///
/// assert_eq!(locale.to_string(), "zh-CN");
/// assert_eq!(locale.language(), "zh");
/// assert_eq!(locale.region(), Some("CN"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Parses a locale tag.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::InvalidLocale`] when the language is missing or
    /// either part contains characters other than ASCII letters.
    pub fn parse(tag: &str) -> Result<Self, ValuesError> {
        let invalid = || ValuesError::InvalidLocale {
            value: tag.to_owned(),
        };
        let base = tag
            .split(['.', '@'])
            .next()
            .map(str::trim)
            .unwrap_or_default();
        let mut parts = base.split(['-', '_']);
        let language = parts
            .next()
            .filter(|part| is_alpha(part, 2..=3))
            .ok_or_else(invalid)?;
        let region = match parts.next() {
            None => None,
            Some(part) if is_alpha(part, 2..=3) => Some(part.to_ascii_uppercase()),
            Some(_) => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region,
        })
    }

    /// Reads the host locale from `LC_ALL`, `LC_MESSAGES`, then `LANG`.
    ///
    /// The first non-empty variable wins. `C` and `POSIX` (with any
    /// encoding or modifier, such as `C.UTF-8`) and tags that fail to parse
    /// resolve to [`FALLBACK_LANGUAGE`].
    #[must_use]
    pub fn from_env() -> Self {
        let tag = LOCALE_VARIABLES
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty());

        match tag.as_deref() {
            None => Self::fallback(),
            Some(value) if is_posix_default(value) => Self::fallback(),
            Some(value) => Self::parse(value).unwrap_or_else(|err| {
                warn!(tag = value, error = %err, "unusable host locale; using fallback");
                Self::fallback()
            }),
        }
    }

    /// Returns the lowercase language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the uppercase region subtag, if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the bundle keys to try, most specific first.
    ///
    /// `zh-CN` resolves through `zh-CN`, `zh`, then [`ROOT_BUNDLE`].
    ///
    /// [`ROOT_BUNDLE`]: crate::values::ROOT_BUNDLE
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = Vec::with_capacity(3);
        if self.region.is_some() {
            chain.push(self.to_string());
        }
        chain.push(self.language.clone());
        chain.push(crate::values::ROOT_BUNDLE.to_owned());
        chain
    }

    fn fallback() -> Self {
        Self {
            language: FALLBACK_LANGUAGE.to_owned(),
            region: None,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::from_env()
    }
}

impl FromStr for Locale {
    type Err = ValuesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

fn is_alpha(part: &str, lengths: std::ops::RangeInclusive<usize>) -> bool {
    lengths.contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphabetic())
}

/// Whether `tag` names the POSIX default locale, ignoring any `.encoding`
/// or `@modifier` suffix.
fn is_posix_default(tag: &str) -> bool {
    let base = tag.split(['.', '@']).next().map(str::trim);
    matches!(base, Some("C" | "POSIX"))
}
