//! Factory configuration loaded via OrthoConfig.

use std::path::{Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ValuesError;
use crate::factory::DataFactory;
use crate::locale::Locale;
use crate::values::{BundleValues, Domain, ResourceBundle};

/// Number of sample records produced when no count is configured.
pub const DEFAULT_COUNT: usize = 10;

/// Settings controlling how a [`DataFactory`] is built.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DATA_FACTORY")]
pub struct DataFactorySettings {
    /// Locale tag such as `zh-CN`. Defaults to the host locale.
    pub locale: Option<String>,
    /// Seed applied after construction.
    pub seed: Option<u64>,
    /// Number of sample records to produce.
    #[ortho_config(default = 10)]
    pub count: usize,
    /// Directory holding `address.json`, `names.json`, and `content.json`
    /// overrides for the embedded bundles.
    pub bundle_dir: Option<PathBuf>,
}

impl Default for DataFactorySettings {
    fn default() -> Self {
        Self {
            locale: None,
            seed: None,
            count: DEFAULT_COUNT,
            bundle_dir: None,
        }
    }
}

impl DataFactorySettings {
    /// Returns the configured locale, falling back to the host locale.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError::InvalidLocale`] when the configured tag does
    /// not parse.
    pub fn locale(&self) -> Result<Locale, ValuesError> {
        self.locale
            .as_deref()
            .map_or_else(|| Ok(Locale::from_env()), Locale::parse)
    }

    /// Returns the configured record count, [`DEFAULT_COUNT`] unless
    /// overridden.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Builds a factory for these settings.
    ///
    /// Bundle files missing from `bundle_dir` fall back to the embedded
    /// data for that domain.
    ///
    /// # Errors
    ///
    /// Returns [`ValuesError`] when the locale is invalid or a bundle file
    /// cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```
    /// use data_factory::DataFactorySettings;
    ///
    /// let settings = DataFactorySettings {
    ///     locale: Some("en-GB".to_owned()),
    ///     seed: Some(42),
    ///     ..DataFactorySettings::default()
    /// };
    ///
    /// let mut first = settings.build_factory().expect("valid settings");
    /// let mut second = settings.build_factory().expect("valid settings");
    /// assert_eq!(first.name().expect("name"), second.name().expect("name"));
    /// ```
    pub fn build_factory(&self) -> Result<DataFactory, ValuesError> {
        let locale = self.locale()?;
        let mut factory = DataFactory::new(locale.clone());

        if let Some(path) = &self.bundle_dir {
            let dir = open_bundle_dir(path)?;
            factory = factory
                .with_address_values(load_values(&dir, path, Domain::Address, &locale)?)
                .with_name_values(load_values(&dir, path, Domain::Names, &locale)?)
                .with_content_values(load_values(&dir, path, Domain::Content, &locale)?);
        }
        if let Some(seed) = self.seed {
            factory.reseed(seed);
        }

        info!(%locale, seed = ?self.seed, "data factory ready");
        Ok(factory)
    }
}

fn open_bundle_dir(path: &Path) -> Result<Dir, ValuesError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|e| ValuesError::IoError {
        path: utf8_path(path),
        message: e.to_string(),
    })
}

fn load_values(
    dir: &Dir,
    dir_path: &Path,
    domain: Domain,
    locale: &Locale,
) -> Result<BundleValues<ResourceBundle>, ValuesError> {
    let file_name = domain.file_name();
    let bundle = if dir.exists(file_name) {
        let loaded = ResourceBundle::from_dir(dir, Utf8Path::new(file_name))?;
        info!(
            path = %dir_path.join(file_name).display(),
            bundle = loaded.name(),
            "loaded bundle override"
        );
        loaded
    } else {
        debug!(file_name, "bundle override missing; using embedded data");
        ResourceBundle::embedded(domain)?
    };

    Ok(BundleValues::new(bundle, locale.clone()))
}

fn utf8_path(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from(path.to_string_lossy().into_owned())
}
