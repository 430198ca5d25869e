//! Statutory registry configuration for the PAYE engine.
//!
//! This module provides the bracket tables and statutory rates, either built
//! in ([`TaxTableRegistry::zimra_2025`]) or loaded from versioned YAML files
//! with [`ConfigLoader`].
//!
//! # Example
//!
//! ```no_run
//! use paye_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/zimra_2025").unwrap();
//! println!("Loaded registry: {}", loader.registry().version_label());
//! ```

mod defaults;
mod loader;
mod types;

pub use defaults::{zimra_2025_monthly_table, zimra_2025_rates};
pub use loader::ConfigLoader;
pub use types::{
    BracketDocument, LevySettings, MONTHS_PER_YEAR, PensionSettings, PerCurrency,
    RegistryDocument, RegistryMetadata, StatutoryRates, TaxBracket, TaxTable, TaxTableRegistry,
};
