// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

// local imports
use crate::cache::DEFAULT_CAPACITY;
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

/// Prefix of environment variables overriding settings, e.g. `EXTGLOB_CACHE__CAPACITY`.
pub const ENV_PREFIX: &str = "EXTGLOB";

// ---

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub cache: CacheSettings,
}

impl Settings {
    /// Loads settings from the embedded defaults, then each of `files` in order,
    /// then the environment.
    ///
    /// Files that do not exist are skipped, files that exist but cannot be parsed are an error.
    pub fn load<P: AsRef<Path>>(files: impl IntoIterator<Item = P>, no_default: bool) -> Result<Self> {
        let mut builder = Config::builder();

        if !no_default {
            builder = builder.add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        }

        for file in files {
            let file = file.as_ref();
            log::debug!("adding config source {}", file.display());
            builder = builder.add_source(File::from(file).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CacheSettings {
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default = "capacity_default")]
    pub capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: enabled_default(),
            capacity: capacity_default(),
        }
    }
}

fn enabled_default() -> bool {
    true
}

fn capacity_default() -> usize {
    DEFAULT_CAPACITY
}
