//! Registry loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a statutory
//! registry from versioned YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Currency;

use super::types::{BracketDocument, RegistryDocument, TaxTable, TaxTableRegistry};

/// Loads a statutory registry from disk.
///
/// # Directory Structure
///
/// ```text
/// config/zimra_2025/
/// ├── registry.yaml        # Metadata and statutory rates
/// └── brackets/
///     ├── usd.yaml         # Monthly USD brackets
///     └── zig.yaml         # Monthly ZiG brackets
/// ```
///
/// Swapping tax years means pointing the loader at a different directory;
/// no calculation code changes.
///
/// # Example
///
/// ```no_run
/// use paye_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/zimra_2025")?;
/// println!("Loaded registry: {}", loader.registry().version_label());
/// # Ok::<(), paye_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    registry: TaxTableRegistry,
}

impl ConfigLoader {
    /// Loads and validates a registry from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a field (`ConfigParseError`)
    /// - A bracket table is malformed (`InvalidTaxTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let document = Self::load_yaml::<RegistryDocument>(&path.join("registry.yaml"))?;

        let brackets_dir = path.join("brackets");
        let usd = Self::load_table(&brackets_dir, Currency::Usd)?;
        let zig = Self::load_table(&brackets_dir, Currency::Zig)?;

        let registry = TaxTableRegistry::new(document.metadata, document.rates, usd, zig)?;

        info!(
            path = %path.display(),
            registry = %registry.version_label(),
            effective_date = %registry.metadata().effective_date,
            "Loaded statutory registry"
        );

        Ok(Self { registry })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn load_table(brackets_dir: &Path, currency: Currency) -> EngineResult<TaxTable> {
        let file = format!("{}.yaml", currency.code().to_lowercase());
        let document = Self::load_yaml::<BracketDocument>(&brackets_dir.join(file))?;
        Ok(TaxTable::new(document.brackets))
    }

    /// Returns the loaded registry.
    pub fn registry(&self) -> &TaxTableRegistry {
        &self.registry
    }

    /// Consumes the loader, returning the registry.
    pub fn into_registry(self) -> TaxTableRegistry {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/zimra_2025"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "paye_engine_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("brackets")).unwrap();
        dir
    }

    fn copy_shipped_config(dir: &Path) {
        for file in ["registry.yaml", "brackets/usd.yaml", "brackets/zig.yaml"] {
            fs::copy(Path::new(config_path()).join(file), dir.join(file)).unwrap();
        }
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.registry().metadata().jurisdiction, "ZIMRA");
        assert_eq!(loader.registry().metadata().tax_year, "2025");
    }

    #[test]
    fn test_shipped_files_match_builtin_registry() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let builtin = TaxTableRegistry::zimra_2025();

        assert_eq!(loader.registry().rates(), builtin.rates());
        for currency in Currency::ALL {
            assert_eq!(
                loader.registry().monthly_table(currency),
                builtin.monthly_table(currency)
            );
            assert_eq!(
                loader.registry().annual_table(currency),
                builtin.annual_table(currency)
            );
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("registry.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_bracket_file_returns_error() {
        let dir = scratch_dir("missing_brackets");
        copy_shipped_config(&dir);
        fs::remove_file(dir.join("brackets/zig.yaml")).unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("zig.yaml")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad_yaml");
        copy_shipped_config(&dir);
        fs::write(dir.join("registry.yaml"), "metadata: [unclosed").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("registry.yaml"))
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_gapped_bracket_file_is_rejected() {
        let dir = scratch_dir("gapped");
        copy_shipped_config(&dir);
        fs::write(
            dir.join("brackets/usd.yaml"),
            r#"
brackets:
  - { lower_bound: "0", upper_bound: "100", rate: "0" }
  - { lower_bound: "200", upper_bound: ~, rate: "0.20" }
"#,
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidTaxTable { currency, .. }) => {
                assert_eq!(currency, Currency::Usd)
            }
            other => panic!("Expected InvalidTaxTable, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_out_of_range_rate_is_rejected() {
        let dir = scratch_dir("bad_rate");
        copy_shipped_config(&dir);
        let registry = fs::read_to_string(dir.join("registry.yaml")).unwrap();
        fs::write(
            dir.join("registry.yaml"),
            registry.replace(
                r#"solidarity_levy_rate: "0.03""#,
                r#"solidarity_levy_rate: "3""#,
            ),
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidConfiguration { field, .. }) => {
                assert_eq!(field, "solidarity_levy_rate")
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
        let _ = fs::remove_dir_all(&dir);
    }
}
