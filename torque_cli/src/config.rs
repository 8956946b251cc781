//! Optional TOML defaults for the CLI.
//!
//! ```toml
//! [defaults]
//! table_set = "extended"
//! unit = "N·m"
//! mode = "table"
//! removal_percent = 45
//! ```
//!
//! The file is only read. Command-line flags override every value in it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use torque_core::calculations::removal::DEFAULT_REMOVAL_PERCENT;
use torque_core::{ResolutionMode, TableSet, TorqueUnit};

use crate::error::{CliError, CliResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "torque.toml";

/// Raw file contents. Values are tokens, parsed leniently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: RawDefaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDefaults {
    pub table_set: Option<String>,
    pub unit: Option<String>,
    pub mode: Option<String>,
    pub removal_percent: Option<f64>,
}

/// Resolved defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub table_set: TableSet,
    pub unit: TorqueUnit,
    pub mode: ResolutionMode,
    pub removal_percent: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table_set: TableSet::Minimal,
            unit: TorqueUnit::InLb,
            mode: ResolutionMode::TableLookup,
            removal_percent: DEFAULT_REMOVAL_PERCENT,
        }
    }
}

impl ConfigFile {
    /// Parse TOML text
    pub fn parse(content: &str, path: &Path) -> CliResult<Self> {
        toml::from_str(content).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Turn tokens into typed settings
    pub fn into_settings(self) -> CliResult<Settings> {
        let d = self.defaults;
        let base = Settings::default();
        Ok(Settings {
            table_set: d
                .table_set
                .as_deref()
                .map(TableSet::from_str_flexible)
                .transpose()?
                .unwrap_or(base.table_set),
            unit: d
                .unit
                .as_deref()
                .map(TorqueUnit::from_str_flexible)
                .transpose()?
                .unwrap_or(base.unit),
            mode: d
                .mode
                .as_deref()
                .map(ResolutionMode::from_str_flexible)
                .transpose()?
                .unwrap_or(base.mode),
            removal_percent: d.removal_percent.unwrap_or(base.removal_percent),
        })
    }
}

/// Load settings.
///
/// An explicit path must exist. Without one, `torque.toml` in the working
/// directory is used if present, otherwise built-in defaults.
pub fn load(explicit: Option<&Path>) -> CliResult<Settings> {
    let path: PathBuf = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !fallback.exists() {
                return Ok(Settings::default());
            }
            fallback
        }
    };

    let content = fs::read_to_string(&path).map_err(|source| CliError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    ConfigFile::parse(&content, &path)?.into_settings()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(toml_text: &str) -> CliResult<Settings> {
        ConfigFile::parse(toml_text, Path::new("test.toml"))?.into_settings()
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(settings("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_defaults() {
        let s = settings(
            r#"
            [defaults]
            table_set = "vendor"
            unit = "N·m"
            mode = "rule"
            removal_percent = 45
            "#,
        )
        .unwrap();
        assert_eq!(s.table_set, TableSet::VendorExtended);
        assert_eq!(s.unit, TorqueUnit::NewtonMeter);
        assert_eq!(s.mode, ResolutionMode::FormulaFallback);
        assert_eq!(s.removal_percent, 45.0);
    }

    #[test]
    fn test_partial_defaults() {
        let s = settings("[defaults]\nunit = \"kgfcm\"\n").unwrap();
        assert_eq!(s.unit, TorqueUnit::KgfCm);
        assert_eq!(s.table_set, TableSet::Minimal);
    }

    #[test]
    fn test_bad_token() {
        let err = settings("[defaults]\nunit = \"psi\"\n").unwrap_err();
        assert!(err.to_string().contains("psi"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            settings("[defaults]\ncolour = \"blue\"\n"),
            Err(CliError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load(Some(Path::new("/definitely/not/here/torque.toml"))).unwrap_err();
        assert!(matches!(err, CliError::ConfigRead { .. }));
    }
}
