//! The [`DataFactory`] facade.
//!
//! A factory owns one locale, one random source, and one lazily created
//! value provider per data domain. Every generation call takes `&mut self`,
//! so a factory cannot be shared across threads without external locking;
//! parallel callers should build one factory per worker.

use chrono::NaiveDateTime;

use crate::error::{GenerationError, ValuesError};
use crate::generators::{dates, text};
use crate::locale::Locale;
use crate::random::{RandomSource, SeededRandom};
use crate::selection;
use crate::values::{AddressValues, BundleValues, ContentValues, Domain, NameValues};

/// Entry point for locale-aware synthetic data.
///
/// # Example
///
/// ```
/// use data_factory::{DataFactory, Locale};
///
/// let locale = Locale::parse("zh-CN").expect("valid tag");
/// let mut factory = DataFactory::new(locale);
/// factory.reseed(2026);
///
/// let city = factory.city().expect("embedded cities");
/// let street = factory.street_name().expect("embedded streets");
///
/// factory.reseed(2026);
/// assert_eq!(factory.city().expect("embedded cities"), city);
/// assert_eq!(factory.street_name().expect("embedded streets"), street);
/// ```
pub struct DataFactory<R = SeededRandom> {
    locale: Locale,
    random: R,
    address_values: Option<Box<dyn AddressValues>>,
    name_values: Option<Box<dyn NameValues>>,
    content_values: Option<Box<dyn ContentValues>>,
}

impl DataFactory<SeededRandom> {
    /// Creates a factory for `locale` with the default-seeded random source.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self::with_random(locale, SeededRandom::default())
    }

    /// Creates a factory for the host locale.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Locale::from_env())
    }
}

impl Default for DataFactory<SeededRandom> {
    fn default() -> Self {
        Self::from_env()
    }
}

impl<R> DataFactory<R> {
    /// Creates a factory for `locale` drawing from `random`.
    #[must_use]
    pub const fn with_random(locale: Locale, random: R) -> Self {
        Self {
            locale,
            random,
            address_values: None,
            name_values: None,
            content_values: None,
        }
    }

    /// Replaces the address provider.
    #[must_use]
    pub fn with_address_values(mut self, values: impl AddressValues + 'static) -> Self {
        self.address_values = Some(Box::new(values));
        self
    }

    /// Replaces the name provider.
    #[must_use]
    pub fn with_name_values(mut self, values: impl NameValues + 'static) -> Self {
        self.name_values = Some(Box::new(values));
        self
    }

    /// Replaces the content provider.
    #[must_use]
    pub fn with_content_values(mut self, values: impl ContentValues + 'static) -> Self {
        self.content_values = Some(Box::new(values));
        self
    }

    /// Returns the locale providers resolve against.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl<R: RandomSource> DataFactory<R> {
    /// Resets the random source; later calls replay for the same seed.
    pub fn reseed(&mut self, seed: u64) {
        self.random.reseed(seed);
    }

    /// Returns `true` with a `probability` percent chance.
    ///
    /// # Errors
    ///
    /// Propagates failures from the random source.
    pub fn chance(&mut self, probability: i32) -> Result<bool, GenerationError> {
        selection::chance(&mut self.random, probability)
    }

    /// Picks one element uniformly.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] when `items` is absent or
    /// empty.
    pub fn choose<'a, T>(
        &mut self,
        items: impl Into<Option<&'a [T]>>,
    ) -> Result<&'a T, GenerationError> {
        selection::choose(&mut self.random, items)
    }

    /// Picks one element with a `probability` percent chance, otherwise
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] when `items` is absent or
    /// empty.
    pub fn choose_with_probability<'a, T>(
        &mut self,
        items: impl Into<Option<&'a [T]>>,
        probability: i32,
    ) -> Result<Option<&'a T>, GenerationError> {
        selection::choose_with_probability(&mut self.random, items, probability)
    }

    /// Picks one element with a `probability` percent chance, otherwise
    /// `default`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] when `items` is absent or
    /// empty.
    pub fn choose_or<'a, T>(
        &mut self,
        items: impl Into<Option<&'a [T]>>,
        probability: i32,
        default: &'a T,
    ) -> Result<&'a T, GenerationError> {
        selection::choose_or(&mut self.random, items, probability, default)
    }

    // address data

    /// Returns a street name without suffix.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when the locale has no street
    /// names.
    pub fn street_name(&mut self) -> Result<String, GenerationError> {
        let locale = &self.locale;
        let values = resolve(&mut self.address_values, || default_address_values(locale))?;
        pick_owned(&mut self.random, values.street_names()?)
    }

    /// Returns a street suffix such as "Road".
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when the locale has no suffixes.
    pub fn street_suffix(&mut self) -> Result<String, GenerationError> {
        let locale = &self.locale;
        let values = resolve(&mut self.address_values, || default_address_values(locale))?;
        pick_owned(&mut self.random, values.address_suffixes()?)
    }

    /// Returns a city name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when the locale has no cities.
    pub fn city(&mut self) -> Result<String, GenerationError> {
        let locale = &self.locale;
        let values = resolve(&mut self.address_values, || default_address_values(locale))?;
        pick_owned(&mut self.random, values.cities()?)
    }

    // name data

    /// Returns a given name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when the locale has no given
    /// names.
    pub fn first_name(&mut self) -> Result<String, GenerationError> {
        let locale = &self.locale;
        let values = resolve(&mut self.name_values, || default_name_values(locale))?;
        pick_owned(&mut self.random, values.first_names()?)
    }

    /// Returns a family name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when the locale has no family
    /// names.
    pub fn last_name(&mut self) -> Result<String, GenerationError> {
        let locale = &self.locale;
        let values = resolve(&mut self.name_values, || default_name_values(locale))?;
        pick_owned(&mut self.random, values.last_names()?)
    }

    /// Returns a given name and a family name separated by a space.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when either list is missing.
    pub fn name(&mut self) -> Result<String, GenerationError> {
        let first = self.first_name()?;
        let last = self.last_name()?;
        Ok(format!("{first} {last}"))
    }

    // content data

    /// Returns a vocabulary word.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when the locale has no words.
    pub fn word(&mut self) -> Result<String, GenerationError> {
        let locale = &self.locale;
        let values = resolve(&mut self.content_values, || default_content_values(locale))?;
        pick_owned(&mut self.random, values.words()?)
    }

    /// Returns a city followed by a business type, such as
    /// "Riverton Bakery".
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when either list is missing.
    pub fn business_name(&mut self) -> Result<String, GenerationError> {
        let city = self.city()?;
        let locale = &self.locale;
        let values = resolve(&mut self.content_values, || default_content_values(locale))?;
        let business_type = pick_owned(&mut self.random, values.business_types()?)?;
        Ok(format!("{city} {business_type}"))
    }

    /// Returns an address built from the initial of a given name, a family
    /// name, and an email host, all lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Values`] when any list is missing.
    pub fn email_address(&mut self) -> Result<String, GenerationError> {
        let first = self.first_name()?;
        let last = self.last_name()?;
        let locale = &self.locale;
        let values = resolve(&mut self.content_values, || default_content_values(locale))?;
        let host = pick_owned(&mut self.random, values.email_hosts()?)?;
        let initial: String = first.chars().take(1).collect();
        Ok(format!("{initial}{last}@{host}").to_lowercase())
    }

    // text

    /// Returns one lowercase ASCII letter.
    ///
    /// # Errors
    ///
    /// Propagates failures from the random source.
    pub fn random_char(&mut self) -> Result<char, GenerationError> {
        text::random_char(&mut self.random)
    }

    /// Returns exactly `length` lowercase letters.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `length` is negative.
    pub fn random_chars_exact(&mut self, length: i32) -> Result<String, GenerationError> {
        text::random_chars(&mut self.random, length, length)
    }

    /// Returns between `min_len` and `max_len` lowercase letters, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] for negative or inverted
    /// bounds.
    pub fn random_chars(&mut self, min_len: i32, max_len: i32) -> Result<String, GenerationError> {
        text::random_chars(&mut self.random, min_len, max_len)
    }

    /// Returns one CJK ideograph.
    ///
    /// # Errors
    ///
    /// Propagates failures from the random source.
    pub fn random_unicode_char(&mut self) -> Result<char, GenerationError> {
        text::random_unicode_char(&mut self.random)
    }

    /// Returns exactly `length` CJK ideographs.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `length` is negative.
    pub fn random_unicode_chars_exact(&mut self, length: i32) -> Result<String, GenerationError> {
        text::random_unicode_chars(&mut self.random, length, length)
    }

    /// Returns between `min_len` and `max_len` CJK ideographs, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] for negative or inverted
    /// bounds.
    pub fn random_unicode_chars(
        &mut self,
        min_len: i32,
        max_len: i32,
    ) -> Result<String, GenerationError> {
        text::random_unicode_chars(&mut self.random, min_len, max_len)
    }

    // dates

    /// Builds a date at midnight. `month` is one-based.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidDate`] when the date does not exist.
    pub fn date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDateTime, GenerationError> {
        dates::date(year, month, day)
    }

    /// Offsets `base` by a day count drawn from `[min_days, max_days)`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `max_days < min_days`.
    pub fn date_offset(
        &mut self,
        base: NaiveDateTime,
        min_days: i32,
        max_days: i32,
    ) -> Result<NaiveDateTime, GenerationError> {
        dates::date_offset(&mut self.random, base, min_days, max_days)
    }

    /// Returns an instant between `min` and `max` at one-second resolution.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `max < min`.
    pub fn date_between(
        &mut self,
        min: NaiveDateTime,
        max: NaiveDateTime,
    ) -> Result<NaiveDateTime, GenerationError> {
        dates::date_between(&mut self.random, min, max)
    }

    /// Returns a date within fifteen years either side of 1970-01-01.
    ///
    /// # Errors
    ///
    /// Propagates failures from the random source.
    pub fn birth_date(&mut self) -> Result<NaiveDateTime, GenerationError> {
        dates::birth_date(&mut self.random)
    }
}

/// Returns the provider in `slot`, creating it on first use.
fn resolve<'s, V>(
    slot: &'s mut Option<Box<V>>,
    create: impl FnOnce() -> Result<Box<V>, ValuesError>,
) -> Result<&'s mut V, ValuesError>
where
    V: ?Sized,
{
    let values = match slot.take() {
        Some(existing) => existing,
        None => create()?,
    };
    Ok(&mut **slot.insert(values))
}

fn default_address_values(locale: &Locale) -> Result<Box<dyn AddressValues>, ValuesError> {
    Ok(Box::new(BundleValues::embedded(Domain::Address, locale.clone())?))
}

fn default_name_values(locale: &Locale) -> Result<Box<dyn NameValues>, ValuesError> {
    Ok(Box::new(BundleValues::embedded(Domain::Names, locale.clone())?))
}

fn default_content_values(locale: &Locale) -> Result<Box<dyn ContentValues>, ValuesError> {
    Ok(Box::new(BundleValues::embedded(Domain::Content, locale.clone())?))
}

/// Draws one index from `candidates`. Unlike `choose_with_probability`
/// at [`selection::ALWAYS`], no gate value is drawn first, so each named
/// generator consumes exactly one value from the random source.
fn pick_owned<R>(random: &mut R, candidates: &[String]) -> Result<String, GenerationError>
where
    R: RandomSource + ?Sized,
{
    selection::choose(random, candidates).cloned()
}
