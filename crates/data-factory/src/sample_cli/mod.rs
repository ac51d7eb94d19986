//! CLI support for printing sample records.
//!
//! The `data-factory-sample` binary delegates to these helpers so argument
//! handling and rendering can be exercised in tests without spawning a
//! process. Flags parsed here override settings loaded from the
//! environment and configuration files.

mod error;

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ortho_config::OrthoConfig;
use tracing::debug;

pub use self::error::SampleError;
use crate::config::DataFactorySettings;
use crate::error::GenerationError;
use crate::factory::DataFactory;
use crate::random::RandomSource;

const PROGRAM_NAME: &str = "data-factory-sample";

/// `data-factory-sample` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "data-factory-sample",
    about = "Print deterministic, locale-aware sample records",
    version
)]
pub struct SampleArgs {
    /// Locale tag such as `zh-CN`. Falls back to `DATA_FACTORY_LOCALE`.
    #[arg(long, value_name = "tag")]
    pub locale: Option<String>,
    /// Seed applied before the first record. Falls back to
    /// `DATA_FACTORY_SEED`.
    #[arg(long, value_name = "seed")]
    pub seed: Option<u64>,
    /// Number of records to print. Falls back to `DATA_FACTORY_COUNT`.
    #[arg(long, value_name = "n")]
    pub count: Option<usize>,
    /// Directory of bundle overrides. Falls back to
    /// `DATA_FACTORY_BUNDLE_DIR`.
    #[arg(long = "bundle-dir", value_name = "path")]
    pub bundle_dir: Option<PathBuf>,
    /// Kind of record to print.
    #[arg(long, value_enum, default_value_t = SampleKind::Person)]
    pub kind: SampleKind,
}

impl SampleArgs {
    /// Overlays flags that were supplied onto `settings`.
    #[must_use]
    pub fn apply(&self, settings: DataFactorySettings) -> DataFactorySettings {
        DataFactorySettings {
            locale: self.locale.clone().or(settings.locale),
            seed: self.seed.or(settings.seed),
            count: self.count.unwrap_or(settings.count),
            bundle_dir: self.bundle_dir.clone().or(settings.bundle_dir),
        }
    }
}

/// Record layouts the sample binary can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    /// Full name, email address, and birth date.
    Person,
    /// Street, suffix, and city.
    Address,
    /// Business name and a vocabulary word.
    Business,
    /// Random letters and CJK ideographs.
    Text,
}

/// Renders one record of `kind`.
///
/// # Errors
///
/// Returns [`GenerationError`] when a generator call fails.
pub fn sample_line<R: RandomSource>(
    factory: &mut DataFactory<R>,
    kind: SampleKind,
) -> Result<String, GenerationError> {
    match kind {
        SampleKind::Person => {
            let name = factory.name()?;
            let email = factory.email_address()?;
            let born = factory.birth_date()?;
            Ok(format!("{name} <{email}> born {}", born.format("%Y-%m-%d")))
        }
        SampleKind::Address => {
            let street = factory.street_name()?;
            let suffix = factory.street_suffix()?;
            let city = factory.city()?;
            Ok(format!("{street} {suffix}, {city}"))
        }
        SampleKind::Business => {
            let business = factory.business_name()?;
            let word = factory.word()?;
            Ok(format!("{business} ({word})"))
        }
        SampleKind::Text => {
            let letters = factory.random_chars(4, 12)?;
            let ideographs = factory.random_unicode_chars(2, 6)?;
            Ok(format!("{letters} {ideographs}"))
        }
    }
}

/// Writes `count` records of `kind` to `out`, one per line.
///
/// # Errors
///
/// Returns [`SampleError`] when generation or writing fails.
pub fn write_samples<R, W>(
    out: &mut W,
    factory: &mut DataFactory<R>,
    kind: SampleKind,
    count: usize,
) -> Result<(), SampleError>
where
    R: RandomSource,
    W: Write,
{
    for _ in 0..count {
        let line = sample_line(factory, kind)?;
        writeln!(out, "{line}").map_err(|e| SampleError::Output {
            message: e.to_string(),
        })?;
    }
    Ok(())
}

/// Loads layered settings, applies `args`, and writes the records.
///
/// # Errors
///
/// Returns [`SampleError`] when configuration, setup, generation, or output
/// fails.
pub fn run(args: &SampleArgs, out: &mut impl Write) -> Result<(), SampleError> {
    let loaded = DataFactorySettings::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(
        |e| SampleError::Config {
            message: e.to_string(),
        },
    )?;
    let settings = args.apply(loaded);
    debug!(?settings, kind = ?args.kind, "resolved sample settings");

    let mut factory = settings.build_factory()?;
    write_samples(out, &mut factory, args.kind, settings.count())
}

#[cfg(test)]
mod tests;
