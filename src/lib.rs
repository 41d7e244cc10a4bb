//! Detection of extended glob (extglob) tokens such as `?(a|b)`, `@(a|b)`, `!(a)`, `+(a)` and `*(a)`.
//!
//! Glob matchers use it to decide whether a pattern needs extglob expansion or plain
//! wildcard matching is enough.
//!
//! ```
//! assert!(extglob::is_extglob("src/!(*.test).js"));
//! assert!(!extglob::is_extglob("src/**/*.js"));
//! ```

// public modules
pub mod cache;
pub mod cli;
pub mod config;
pub mod detect;
pub mod detector;
pub mod error;
pub mod settings;

// private modules
#[cfg(test)]
mod testing;

// public uses
pub use cache::{BoundedCache, Cache, DEFAULT_CAPACITY, NoCache, Stats};
pub use detect::{has_candidates, is_extglob};
pub use detector::{Detector, is_extglob_cached};
pub use settings::Settings;
