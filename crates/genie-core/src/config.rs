//! Engine configuration.
//!
//! Configuration only shapes in-memory evaluation; filter composition is
//! fixed and never reads it.

use crate::value::{LikePattern, TextMode};
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid like escape {escape:?}: escape must not be a wildcard")]
    WildcardEscape { escape: char },
}

///
/// EngineConfig
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub like: LikeConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.like.validate()
    }
}

///
/// LikeConfig
///
/// Matching rules for `LIKE` comparisons during in-memory evaluation.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LikeConfig {
    /// Fold case on both sides before matching.
    pub case_insensitive: bool,

    /// Character that makes the next pattern character literal.
    pub escape: Option<char>,
}

impl LikeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.escape {
            Some(escape @ ('%' | '_')) => Err(ConfigError::WildcardEscape { escape }),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub const fn text_mode(&self) -> TextMode {
        if self.case_insensitive {
            TextMode::Ci
        } else {
            TextMode::Cs
        }
    }

    #[must_use]
    pub fn compile(&self, pattern: &str) -> LikePattern {
        LikePattern::compile(pattern, self.escape, self.text_mode())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = EngineConfig::from_toml_str("").expect("empty config parses");

        assert_eq!(config, EngineConfig::default());
        assert!(!config.like.case_insensitive);
        assert_eq!(config.like.escape, None);
    }

    #[test]
    fn like_section_is_read() {
        let config = EngineConfig::from_toml_str(
            r#"
            [like]
            case_insensitive = true
            escape = "\\"
            "#,
        )
        .expect("config parses");

        assert!(config.like.case_insensitive);
        assert_eq!(config.like.escape, Some('\\'));
        assert!(config.like.compile("H2\\_%").matches("h2_prod"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EngineConfig::from_toml_str("[like]\ncase = true\n").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn wildcard_escape_is_rejected() {
        let err = EngineConfig::from_toml_str("[like]\nescape = \"%\"\n").unwrap_err();

        assert!(matches!(err, ConfigError::WildcardEscape { escape: '%' }));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let err = EngineConfig::load("/nonexistent/genie.toml").unwrap_err();

        assert!(err.to_string().contains("/nonexistent/genie.toml"));
    }
}
