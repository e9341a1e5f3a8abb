use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Deserializer};

/// Generated audio storage configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory generated audio is written to and served from
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Delete generated audio older than this (e.g. `"24h"`); keep forever when unset
    #[serde(default, deserialize_with = "deserialize_optional_duration")]
    pub retention: Option<Duration>,
    /// How often expired audio is swept when `retention` is set
    #[serde(default = "default_sweep_interval", deserialize_with = "deserialize_duration")]
    pub sweep_interval: Duration,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            retention: None,
            sweep_interval: default_sweep_interval(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("outputs")
}

const fn default_sweep_interval() -> Duration {
    Duration::from_secs(600)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    duration_str::parse(&s).map_err(|e| serde::de::Error::custom(format!("invalid duration '{s}': {e}")))
}

fn deserialize_optional_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_duration(deserializer).map(Some)
}
