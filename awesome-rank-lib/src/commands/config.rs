use crate::Result;
use crate::facts::CollectionConfig;
use crate::facts::hosting::IssueState;
use crate::ranking::{FieldRanking, RankingConfig};
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up when no path is given
pub const CONFIG_FILE_NAME: &str = "awesome.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Host that index entries must link to
    #[serde(default = "default_host")]
    pub host: String,

    /// Base URL of the hosting service's REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Upper bound on the duration of each API request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    /// Length of the trailing issue window, in calendar months
    #[serde(default = "default_issue_window_months")]
    pub issue_window_months: u32,

    /// Which issues count toward activity
    #[serde(default)]
    pub issue_state: IssueState,

    /// Number of equal-population bins each ranking field is cut into
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Fields that make up the awesomeness score
    #[serde(default = "default_ranking_fields")]
    pub ranking_fields: Vec<FieldRanking>,
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_api_url() -> String {
    crate::facts::hosting::GITHUB_API_URL.to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(60)
}

/// Longest issue window accepted, in months
const MAX_ISSUE_WINDOW_MONTHS: u32 = 1200;

const fn default_issue_window_months() -> u32 {
    6
}

const fn default_bins() -> usize {
    10
}

fn default_ranking_fields() -> Vec<FieldRanking> {
    RankingConfig::default().fields
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// When `config_path` is `None`, `awesome.toml` in `base_dir` is used if it exists.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading awesome-rank configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading awesome-rank configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    #[must_use]
    pub const fn collection_config(&self) -> CollectionConfig {
        CollectionConfig {
            window_months: self.issue_window_months,
            issue_state: self.issue_state,
        }
    }

    #[must_use]
    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig {
            bins: self.bins,
            fields: self.ranking_fields.clone(),
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.bins < 2 {
            return Err(app_err!("bins must be at least 2, got {}", self.bins));
        }

        if self.issue_window_months == 0 {
            return Err(app_err!("issue_window_months must be at least 1"));
        }

        if self.issue_window_months > MAX_ISSUE_WINDOW_MONTHS {
            return Err(app_err!(
                "issue_window_months must be at most {MAX_ISSUE_WINDOW_MONTHS}, got {}",
                self.issue_window_months
            ));
        }

        if self.ranking_fields.is_empty() {
            return Err(app_err!("ranking_fields must name at least one field"));
        }

        let mut seen = HashSet::new();
        for ranking in &self.ranking_fields {
            if !seen.insert(ranking.field) {
                return Err(app_err!("ranking field '{}' is listed more than once", ranking.field));
            }
        }

        if self.host.trim().is_empty() {
            return Err(app_err!("host must not be empty"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{RankingField, SortDirection};

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
    }

    #[test]
    fn test_default_config_matches_built_in_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "github.com");
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.request_timeout, Duration::from_secs(60));
        assert_eq!(config.collection_config(), CollectionConfig::default());
        assert_eq!(config.ranking_config(), RankingConfig::default());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.bins, 10);
        assert_eq!(config.ranking_fields.len(), 4);
        assert_eq!(config.issue_state, IssueState::Open);
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            issue_state = "closed"
            request_timeout = "5s"
            bins = 4

            [[ranking_fields]]
            field = "stars"
            direction = "higher_is_better"
            "#,
        )
        .unwrap();

        config.validate().unwrap();
        assert_eq!(config.issue_state, IssueState::Closed);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(
            config.ranking_config().fields,
            [FieldRanking::new(RankingField::Stars, SortDirection::HigherIsBetter)]
        );
    }

    #[test]
    fn test_unknown_issue_state_becomes_open() {
        let config: Config = toml::from_str(r#"issue_state = "all""#).unwrap();
        assert_eq!(config.issue_state, IssueState::Open);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(toml::from_str::<Config>("cache_ttl = \"1d\"").is_err());
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let text = "[[ranking_fields]]\nfield = \"watchers\"\ndirection = \"higher_is_better\"\n";
        assert!(toml::from_str::<Config>(text).is_err());
    }

    #[test]
    fn test_validate_bins_too_small() {
        let config = Config { bins: 1, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_window() {
        let config = Config {
            issue_window_months: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_window_upper_bound() {
        let config = Config {
            issue_window_months: MAX_ISSUE_WINDOW_MONTHS,
            ..Config::default()
        };
        config.validate().unwrap();

        let config = Config {
            issue_window_months: u32::MAX,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("issue_window_months must be at most"));
    }

    #[test]
    fn test_validate_no_fields() {
        let config = Config {
            ranking_fields: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_duplicate_field() {
        let config = Config {
            ranking_fields: vec![
                FieldRanking::new(RankingField::Stars, SortDirection::HigherIsBetter),
                FieldRanking::new(RankingField::Stars, SortDirection::LowerIsBetter),
            ],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();

        let config = Config::load(base, None).unwrap();
        assert_eq!(config.bins, 10);
    }

    #[test]
    fn test_load_file_from_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        fs::write(base.join(CONFIG_FILE_NAME), "bins = 5\n").unwrap();

        let config = Config::load(base, None).unwrap();
        assert_eq!(config.bins, 5);
    }

    #[test]
    fn test_load_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        let missing = base.join("nope.toml");

        assert!(Config::load(base, Some(&missing)).is_err());
    }

    #[test]
    fn test_load_invalid_values_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        let path = base.join("bad.toml");
        fs::write(&path, "bins = 0\n").unwrap();

        assert!(Config::load(base, Some(&path)).is_err());
    }

    #[test]
    fn test_save_default_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8Path::from_path(dir.path()).unwrap();
        let path = base.join(CONFIG_FILE_NAME);

        Config::save_default(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);

        let config = Config::load(base, None).unwrap();
        assert_eq!(config.ranking_config(), RankingConfig::default());
    }
}
