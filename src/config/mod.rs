//! Configuration loading and management for the payroll preview.
//!
//! Rule tables (work schedule, contribution rates, SSS and tax brackets) are
//! loaded from YAML files, and service settings are read from the environment.
//!
//! # Example
//!
//! ```no_run
//! use payroll_preview::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph_preview").unwrap();
//! println!("Loaded rules: {}", config.metadata().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::Settings;
pub use types::{
    ContributionsConfig, PreviewRules, RulesMetadata, SssBracket, TaxBracket, TaxConfig, TaxRule,
    WorkSchedule,
};
