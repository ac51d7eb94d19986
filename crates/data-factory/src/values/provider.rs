//! Memoized candidate lists and the bundle-backed capabilities.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::debug;

use super::{
    AddressValues, ContentValues, Domain, NameValues, ResourceBundle, ValueSource, category,
};
use crate::error::ValuesError;
use crate::locale::Locale;

/// Splits and caches candidate lists from a [`ValueSource`].
///
/// Each `(locale, category)` pair is looked up once; later calls return the
/// cached list. The cache lives as long as the provider and is never
/// invalidated.
///
/// # Example
///
/// ```
/// use data_factory::{Domain, Locale, ResourceBundle, ValueProvider};
///
/// let bundle = ResourceBundle::embedded(Domain::Address).expect("embedded bundle");
/// let mut provider = ValueProvider::new(bundle);
/// let locale = Locale::parse("zh-CN").expect("valid tag");
///
/// let cities = provider.get_values(&locale, "cities").expect("cities exist");
/// assert!(!cities.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ValueProvider<S> {
    source: S,
    cache: HashMap<(Locale, String), Vec<String>>,
}

impl<S> ValueProvider<S> {
    /// Creates a provider with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: HashMap::new(),
        }
    }

    /// Returns the number of cached `(locale, category)` lists.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl<S: ValueSource> ValueProvider<S> {
    /// Returns the candidate list for `category` in `locale`.
    ///
    /// Raw values are split on commas without trimming, so `"a, b"` yields
    /// `"a"` and `" b"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when the source has no value
    /// for the pair. Failed lookups are not cached.
    pub fn get_values(&mut self, locale: &Locale, category: &str) -> Result<&[String], ValuesError> {
        match self.cache.entry((locale.clone(), category.to_owned())) {
            Entry::Occupied(entry) => Ok(entry.into_mut().as_slice()),
            Entry::Vacant(entry) => {
                let raw = self.source.lookup(locale, category).ok_or_else(|| {
                    ValuesError::CategoryNotFound {
                        locale: locale.to_string(),
                        category: category.to_owned(),
                    }
                })?;
                let values: Vec<String> = raw.split(',').map(str::to_owned).collect();
                debug!(%locale, category, count = values.len(), "loaded candidate values");
                Ok(entry.insert(values).as_slice())
            }
        }
    }
}

/// Locale-bound values backed by any [`ValueSource`].
///
/// Implements every capability trait by mapping each method to its
/// [`category`] key.
#[derive(Debug, Clone)]
pub struct BundleValues<S> {
    locale: Locale,
    provider: ValueProvider<S>,
}

impl<S> BundleValues<S> {
    /// Binds `source` to `locale`.
    pub fn new(source: S, locale: Locale) -> Self {
        Self {
            locale,
            provider: ValueProvider::new(source),
        }
    }

    /// Returns the locale lookups resolve against.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl<S: ValueSource> BundleValues<S> {
    /// Returns the candidate list for an arbitrary category key.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    pub fn values(&mut self, category: &str) -> Result<&[String], ValuesError> {
        self.provider.get_values(&self.locale, category)
    }
}

impl BundleValues<ResourceBundle> {
    /// Binds the embedded bundle for `domain` to `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError`] if the embedded data fails validation.
    pub fn embedded(domain: Domain, locale: Locale) -> Result<Self, ValuesError> {
        ResourceBundle::embedded(domain).map(|bundle| Self::new(bundle, locale))
    }
}

impl<S: ValueSource> AddressValues for BundleValues<S> {
    fn street_names(&mut self) -> Result<&[String], ValuesError> {
        self.values(category::STREET_NAMES)
    }

    fn address_suffixes(&mut self) -> Result<&[String], ValuesError> {
        self.values(category::ADDRESS_SUFFIXES)
    }

    fn cities(&mut self) -> Result<&[String], ValuesError> {
        self.values(category::CITIES)
    }
}

impl<S: ValueSource> NameValues for BundleValues<S> {
    fn first_names(&mut self) -> Result<&[String], ValuesError> {
        self.values(category::FIRST_NAMES)
    }

    fn last_names(&mut self) -> Result<&[String], ValuesError> {
        self.values(category::LAST_NAMES)
    }
}

impl<S: ValueSource> ContentValues for BundleValues<S> {
    fn words(&mut self) -> Result<&[String], ValuesError> {
        self.values(category::WORDS)
    }

    fn email_hosts(&mut self) -> Result<&[String], ValuesError> {
        self.values(category::EMAIL_HOSTS)
    }

    fn business_types(&mut self) -> Result<&[String], ValuesError> {
        self.values(category::BUSINESS_TYPES)
    }
}
