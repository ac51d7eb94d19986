//! Locale-scoped candidate values.
//!
//! A [`ValueSource`] answers raw lookups for a `(locale, category)` pair. A
//! [`ValueProvider`] splits and memoizes those answers, and the capability
//! traits ([`AddressValues`], [`NameValues`], [`ContentValues`]) name the
//! categories each data domain exposes. [`BundleValues`] implements every
//! capability on top of any source; callers may substitute their own
//! implementations.

mod bundle;
mod provider;

pub use bundle::{BUNDLE_VERSION, Domain, ResourceBundle};
pub use provider::{BundleValues, ValueProvider};

use crate::error::ValuesError;
use crate::locale::Locale;

/// Bundle key that every locale falls back to.
pub const ROOT_BUNDLE: &str = "root";

/// Category keys understood by the bundled data.
pub mod category {
    /// Street names, without suffix.
    pub const STREET_NAMES: &str = "streetNames";
    /// Street type suffixes such as "Road" or "街".
    pub const ADDRESS_SUFFIXES: &str = "addressSuffixes";
    /// City names.
    pub const CITIES: &str = "cities";
    /// Given names.
    pub const FIRST_NAMES: &str = "firstNames";
    /// Family names.
    pub const LAST_NAMES: &str = "lastNames";
    /// Free-text vocabulary.
    pub const WORDS: &str = "words";
    /// Domains used for generated email addresses.
    pub const EMAIL_HOSTS: &str = "emailHosts";
    /// Business type nouns such as "Bakery".
    pub const BUSINESS_TYPES: &str = "businessTypes";
}

/// Raw lookup of comma-separated category values.
pub trait ValueSource {
    /// Returns the raw value stored for `category`, resolved against
    /// `locale`, or `None` when no data exists.
    fn lookup(&self, locale: &Locale, category: &str) -> Option<&str>;
}

/// Address data capability.
pub trait AddressValues {
    /// Street names for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    fn street_names(&mut self) -> Result<&[String], ValuesError>;

    /// Street suffixes for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    fn address_suffixes(&mut self) -> Result<&[String], ValuesError>;

    /// City names for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    fn cities(&mut self) -> Result<&[String], ValuesError>;
}

/// Personal name capability.
pub trait NameValues {
    /// Given names for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    fn first_names(&mut self) -> Result<&[String], ValuesError>;

    /// Family names for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    fn last_names(&mut self) -> Result<&[String], ValuesError>;
}

/// Free-text content capability.
pub trait ContentValues {
    /// Vocabulary words for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    fn words(&mut self) -> Result<&[String], ValuesError>;

    /// Email host names.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    fn email_hosts(&mut self) -> Result<&[String], ValuesError>;

    /// Business type nouns for the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::CategoryNotFound`] when no data exists.
    fn business_types(&mut self) -> Result<&[String], ValuesError>;
}
