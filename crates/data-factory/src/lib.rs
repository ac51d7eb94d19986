//! Deterministic, locale-aware synthetic data.
//!
//! A [`DataFactory`] combines a seedable [`RandomSource`], the
//! [`selection`] helpers, and locale-scoped candidate lists to produce
//! addresses, names, text, and dates. Identical seeds and identical call
//! sequences reproduce identical output.
//!
//! Candidate lists come from JSON [`ResourceBundle`]s embedded in the crate.
//! Each bundle maps locale keys (`zh-CN`, `zh`, `root`) to categories whose
//! values are comma-separated strings. Lookups walk from the most specific
//! locale to `root`.
//!
//! # Example
//!
//! ```
//! use data_factory::{DataFactory, Locale};
//!
//! let mut factory = DataFactory::new(Locale::parse("en-GB").expect("valid tag"));
//! factory.reseed(7);
//!
//! let street = format!(
//!     "{} {}",
//!     factory.street_name().expect("street names"),
//!     factory.street_suffix().expect("street suffixes"),
//! );
//! let code = factory.random_chars(4, 8).expect("valid range");
//!
//! assert!(street.contains(' '));
//! assert!((4..=8).contains(&code.len()));
//! ```

mod config;
mod error;
mod factory;
pub mod generators;
mod locale;
mod random;
pub mod sample_cli;
pub mod selection;
pub mod values;

pub use config::{DEFAULT_COUNT, DataFactorySettings};
pub use error::{GenerationError, ValuesError};
pub use factory::DataFactory;
pub use locale::{FALLBACK_LANGUAGE, Locale};
pub use random::{DEFAULT_SEED, RandomSource, SeededRandom};
pub use values::{
    AddressValues, BundleValues, ContentValues, Domain, NameValues, ResourceBundle, ValueProvider,
    ValueSource, category,
};
