// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod startup;
pub mod target;

#[cfg(test)]
mod test_support;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use config::{ConfigError, Settings};
pub use dictionary::{
    parse, Dictionary, DictionarySource, Lookup, LookupService, SourceError,
};
pub use startup::{Notice, Notifier};
