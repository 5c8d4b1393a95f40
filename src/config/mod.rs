//! Policy configuration for the CMG simulation engine.
//!
//! This module provides the strongly-typed rule set (contribution rates,
//! subsidy constants, tax-credit caps, effort-rate table) consumed by every
//! calculation, plus a loader for YAML policy files so a future year's rules
//! can be swapped in without touching the algorithms.
//!
//! # Example
//!
//! ```no_run
//! use cmg_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/cmg/2025.yaml").unwrap();
//! println!("Loaded policy: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CmgRules, EffortRateTier, PayrollRates, PolicyConfig, PolicyMetadata, TaxCreditRules,
};
