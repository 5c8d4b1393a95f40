//! Policy file loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a simulation
//! rule set from a YAML policy file.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{CmgRules, PayrollRates, PolicyConfig, PolicyMetadata, TaxCreditRules};

/// The on-disk layout of a policy file.
#[derive(Debug, Deserialize)]
struct PolicyFile {
    metadata: PolicyMetadata,
    payroll: PayrollRates,
    cmg: CmgRules,
    tax_credit: TaxCreditRules,
}

/// Loads and provides access to a policy rule set.
///
/// The `ConfigLoader` reads one YAML policy file holding the metadata,
/// payroll rates, CMG parameters, and tax-credit caps for a given year.
/// The repository ships the 2025 rule set at `config/cmg/2025.yaml`;
/// alternate years are additional files with the same layout.
///
/// # Example
///
/// ```no_run
/// use cmg_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cmg/2025.yaml")?;
/// println!("Policy: {} ({})", loader.metadata().name, loader.metadata().version);
/// # Ok::<(), cmg_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads a policy rule set from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the file is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML or is missing required fields
    ///   (`ConfigParseError`)
    /// - the parsed values fail policy validation (`InvalidPolicy`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let file: PolicyFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let config = PolicyConfig::new(file.metadata, file.payroll, file.cmg, file.tax_credit)?;

        info!(
            path = %path_str,
            policy = %config.metadata().name,
            version = %config.metadata().version,
            "loaded policy rule set"
        );

        Ok(Self { config })
    }

    /// Returns the loaded policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the rule-set metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }
}
