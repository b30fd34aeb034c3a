//! Configuration files under the XDG config dir, plus shared config sections.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// XDG prefix for config and state files.
pub const APP_PREFIX: &str = "knotx-repository";

/// Registry config file name inside the config dir.
pub const REGISTRY_CONFIG_FILE: &str = "connectors.toml";

/// Retry policy parameters (optional `retry` section of a connector's options).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per fetch (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_secs: 0.25,
            max_delay_secs: 30,
        }
    }
}

impl RetryConfig {
    /// Fails on a negative, infinite or out-of-range base delay.
    pub fn to_policy(&self) -> Result<RetryPolicy> {
        let base_delay = Duration::try_from_secs_f64(self.base_delay_secs)
            .with_context(|| format!("invalid retry base_delay_secs {}", self.base_delay_secs))?;
        Ok(RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay,
            max_delay: Duration::from_secs(self.max_delay_secs),
        })
    }
}

pub fn config_path(file_name: &str) -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file(file_name)?)
}

/// Load `file_name` from the config dir, writing `T::default()` there if none exists.
pub fn load_or_init<T>(file_name: &str) -> Result<T>
where
    T: Default + Serialize + DeserializeOwned,
{
    let path = config_path(file_name)?;
    if !path.exists() {
        let default_cfg = T::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load a config file; `.json` files are parsed as JSON, everything else as TOML.
pub fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let cfg = if is_json {
        serde_json::from_str(&data)
            .with_context(|| format!("parse JSON config {}", path.display()))?
    } else {
        toml::from_str(&data).with_context(|| format!("parse TOML config {}", path.display()))?
    };
    Ok(cfg)
}

/// Deserialize a connector's `options` table into its typed options.
pub fn options_from_value<T: DeserializeOwned>(options: toml::Value) -> Result<T> {
    Ok(T::deserialize(options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        catalogue: String,
        #[serde(default)]
        retry: Option<RetryConfig>,
    }

    #[test]
    fn retry_config_to_policy() {
        let cfg = RetryConfig {
            max_attempts: 0,
            base_delay_secs: 0.5,
            max_delay_secs: 15,
        };
        let p = cfg.to_policy().unwrap();
        assert_eq!(p.max_attempts, 1);
        assert_eq!(p.base_delay, Duration::from_millis(500));
        assert_eq!(p.max_delay, Duration::from_secs(15));
    }

    #[test]
    fn retry_config_rejects_unrepresentable_delays() {
        for base_delay_secs in [f64::INFINITY, f64::NAN, -1.0, 1e300] {
            let cfg = RetryConfig {
                base_delay_secs,
                ..RetryConfig::default()
            };
            let err = cfg.to_policy().unwrap_err();
            assert!(err.to_string().contains("invalid retry base_delay_secs"));
        }
    }

    #[test]
    fn load_toml_file() {
        let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            f,
            r#"
            catalogue = "/srv/templates"

            [retry]
            max_attempts = 4
            base_delay_secs = 0.1
            max_delay_secs = 2
            "#
        )
        .unwrap();
        let cfg: Sample = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.catalogue, "/srv/templates");
        assert_eq!(cfg.retry.unwrap().max_attempts, 4);
    }

    #[test]
    fn load_json_file() {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(f, r#"{{"catalogue": "templates/"}}"#).unwrap();
        let cfg: Sample = load_from_path(f.path()).unwrap();
        assert_eq!(cfg.catalogue, "templates/");
        assert!(cfg.retry.is_none());
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let mut f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(f, "catalogue = [").unwrap();
        let err = load_from_path::<Sample>(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse TOML config"));
    }

    #[test]
    fn options_from_empty_table_uses_defaults() {
        let value = toml::Value::Table(toml::map::Map::new());
        let cfg: Sample = options_from_value(value).unwrap();
        assert_eq!(cfg, Sample::default());
    }
}
