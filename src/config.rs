// std imports
use std::path::{Path, PathBuf};

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::{error::Result, settings::Settings};

// ---

pub const APP_NAME: &str = "extglob";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the process-wide settings.
///
/// If [`global::initialize`] was not called before, settings are loaded from the
/// embedded defaults and the environment.
pub fn get() -> &'static Settings {
    global::get()
}

/// Returns the built-in default settings.
pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Starts building settings from the given configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|p| p.as_ref().into()).collect())
}

/// Loads settings with the embedded defaults and the environment only.
pub fn load() -> Result<Settings> {
    Loader::new(Vec::new()).load()
}

// ---

/// Builder of [`Settings`] from a list of configuration files.
pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the embedded defaults if `value` is `true`.
    pub fn no_default(self, value: bool) -> Self {
        Self {
            no_default: value,
            ..self
        }
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(&self.paths, self.no_default)
    }
}

// ---

pub mod global {
    // third-party imports
    use once_cell::sync::OnceCell;

    // local imports
    use super::*;

    static CONFIG: OnceCell<Settings> = OnceCell::new();

    /// Installs `settings` as the process-wide settings.
    ///
    /// Has no effect if the settings were already initialized or used.
    pub fn initialize(settings: Settings) {
        if CONFIG.set(settings).is_err() {
            log::warn!("settings are already initialized, ignoring");
        }
    }

    pub fn get() -> &'static Settings {
        CONFIG.get_or_init(|| {
            super::load().unwrap_or_else(|e| {
                log::warn!("using default settings: {e}");
                Settings::default()
            })
        })
    }
}
