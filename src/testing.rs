//! Testing utilities for internal use.

// local imports
use crate::settings::{CacheSettings, Settings};

/// Trait that provides a method to generate a sample instance.
///
/// The `sample()` method should return a stable, deterministic instance
/// that differs from the default one.
pub trait Sample {
    /// Returns a sample instance of the implementing type.
    fn sample() -> Self;
}

impl Sample for Settings {
    fn sample() -> Self {
        Self {
            cache: CacheSettings {
                enabled: true,
                capacity: 2,
            },
        }
    }
}
