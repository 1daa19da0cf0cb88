//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading preview rule
//! tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{ContributionsConfig, PreviewRules, RulesMetadata, TaxConfig, WorkSchedule};

/// Loads and provides access to preview rules.
///
/// # Directory Structure
///
/// ```text
/// config/ph_preview/
/// ├── rules.yaml          # Rule set metadata
/// ├── schedule.yaml       # Work schedule and pay multipliers
/// ├── contributions.yaml  # SSS table, PhilHealth and Pag-IBIG rates
/// └── tax.yaml            # Withholding tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_preview::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ph_preview").unwrap();
/// println!("Loaded rules: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rules: PreviewRules,
}

impl ConfigLoader {
    /// Loads rules from the specified directory.
    ///
    /// Fails if any required file is missing, contains invalid YAML, or
    /// describes tables that do not validate (empty, unordered, or without a
    /// single open-ended top bracket).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_preview::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ph_preview")?;
    /// # Ok::<(), payroll_preview::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<RulesMetadata>(&path.join("rules.yaml"))?;
        let schedule = Self::load_yaml::<WorkSchedule>(&path.join("schedule.yaml"))?;
        let contributions =
            Self::load_yaml::<ContributionsConfig>(&path.join("contributions.yaml"))?;
        let tax = Self::load_yaml::<TaxConfig>(&path.join("tax.yaml"))?;

        let rules = PreviewRules::new(metadata, schedule, contributions, tax)?;
        debug!(
            rules = %rules.metadata().name,
            version = %rules.metadata().version,
            sss_brackets = rules.sss_table().len(),
            tax_brackets = rules.tax_brackets().len(),
            "Loaded preview rules"
        );

        Ok(Self { rules })
    }

    /// Wraps the built-in reference rules.
    pub fn reference() -> Self {
        Self {
            rules: PreviewRules::reference(),
        }
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

    /// Returns the loaded rules.
    pub fn rules(&self) -> &PreviewRules {
        &self.rules
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RulesMetadata {
        self.rules.metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/ph_preview"
    }

    /// Copies the shipped rules into a scratch directory and overwrites one file.
    fn scratch_dir_with(name: &str, file: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll_preview_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        for entry in ["rules.yaml", "schedule.yaml", "contributions.yaml", "tax.yaml"] {
            fs::copy(Path::new(config_path()).join(entry), dir.join(entry)).unwrap();
        }
        fs::write(dir.join(file), content).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.metadata().name, "ph_preview");
    }

    #[test]
    fn test_shipped_rules_match_reference_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let reference = PreviewRules::reference();

        assert_eq!(loader.rules().schedule(), reference.schedule());
        assert_eq!(loader.rules().contributions(), reference.contributions());
        assert_eq!(loader.rules().tax_brackets(), reference.tax_brackets());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rules.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir_with("malformed", "tax.yaml", "brackets: [unterminated");
        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("tax.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_unordered_sss_table_is_rejected() {
        let dir = scratch_dir_with(
            "unordered",
            "contributions.yaml",
            r#"
philhealth_rate: 0.03
pagibig_rate: 0.02
sss:
  - { upper_bound: 2000, contribution: 100 }
  - { upper_bound: 1000, contribution: 50 }
  - { contribution: 500 }
"#,
        );
        let result = ConfigLoader::load(&dir);

        match result {
            Err(EngineError::InvalidRules { table, .. }) => assert_eq!(table, "sss"),
            other => panic!("Expected InvalidRules error, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_reference_loader_needs_no_files() {
        let loader = ConfigLoader::reference();
        assert_eq!(loader.metadata().version, "reference");
    }
}
