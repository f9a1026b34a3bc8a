//! Runtime configuration read from the environment.

use hexgrid_core::EnclosingSearch;

use crate::error::{Error, Result};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per result
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CliConfig {
    /// Output format (`HEXGRID_OUTPUT`)
    pub output: OutputFormat,

    /// Radius search used by `enclose` (`HEXGRID_SEARCH`)
    pub search: EnclosingSearch,
}

impl CliConfig {
    /// Create config from environment variables with defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var("HEXGRID_OUTPUT").ok().as_deref(),
            std::env::var("HEXGRID_SEARCH").ok().as_deref(),
        )
    }

    /// Build from raw variable values; `None` means unset.
    pub fn from_values(output: Option<&str>, search: Option<&str>) -> Result<Self> {
        let output = match output.map(str::trim) {
            None | Some("") => OutputFormat::default(),
            Some(v) if v.eq_ignore_ascii_case("text") => OutputFormat::Text,
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(v) => {
                return Err(Error::Config {
                    var: "HEXGRID_OUTPUT",
                    value: v.to_string(),
                })
            }
        };

        let search = match search.map(str::trim) {
            None | Some("") => EnclosingSearch::default(),
            Some(v) if v.eq_ignore_ascii_case("bisect") => EnclosingSearch::Bisect,
            Some(v) if v.eq_ignore_ascii_case("linear") => EnclosingSearch::Linear,
            Some(v) => {
                return Err(Error::Config {
                    var: "HEXGRID_SEARCH",
                    value: v.to_string(),
                })
            }
        };

        Ok(Self { output, search })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = CliConfig::from_values(None, None).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.search, EnclosingSearch::Bisect);
    }

    #[test]
    fn reads_values_case_insensitively() {
        let config = CliConfig::from_values(Some("JSON"), Some("Linear")).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.search, EnclosingSearch::Linear);
    }

    #[test]
    fn rejects_unknown_values() {
        let err = CliConfig::from_values(Some("yaml"), None).unwrap_err();
        assert!(matches!(err, Error::Config { var: "HEXGRID_OUTPUT", .. }));

        let err = CliConfig::from_values(None, Some("sampled")).unwrap_err();
        assert!(matches!(err, Error::Config { var: "HEXGRID_SEARCH", .. }));
    }
}
