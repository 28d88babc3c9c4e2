use std::fs;
use std::io;
use std::path::PathBuf;

use log::warn;
use serde::Deserialize;

use crate::estimator::DEFAULT_UPDATE_INTERVAL;

#[derive(Clone)]
pub struct HudConfig {
    pub update_interval: f32,
}

impl HudConfig {
    pub fn load() -> Self {
        let path = default_config_path();
        match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<RawConfig>(&bytes) {
                Ok(raw) => HudConfig::from_raw(raw),
                Err(err) => {
                    warn!("Failed to parse config file {}: {}", path.display(), err);
                    HudConfig::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => HudConfig::default(),
            Err(err) => {
                warn!("Failed to read config file {}: {}", path.display(), err);
                HudConfig::default()
            }
        }
    }

    fn from_raw(raw: RawConfig) -> Self {
        let mut update_interval = raw.update_interval.unwrap_or(DEFAULT_UPDATE_INTERVAL);
        if !update_interval.is_finite() || update_interval <= 0.0 {
            warn!(
                "Invalid update_interval {}; falling back to default",
                update_interval
            );
            update_interval = DEFAULT_UPDATE_INTERVAL;
        }

        Self { update_interval }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            update_interval: DEFAULT_UPDATE_INTERVAL,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawConfig {
    update_interval: Option<f32>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            update_interval: None,
        }
    }
}

fn default_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fps_hud.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_uses_default() {
        let raw: RawConfig = serde_json::from_str("{}").expect("valid json");
        let config = HudConfig::from_raw(raw);
        assert_eq!(config.update_interval, DEFAULT_UPDATE_INTERVAL);
    }

    #[test]
    fn valid_interval_is_kept() {
        let raw: RawConfig =
            serde_json::from_str(r#"{"update_interval": 1.5}"#).expect("valid json");
        let config = HudConfig::from_raw(raw);
        assert_eq!(config.update_interval, 1.5);
    }

    #[test]
    fn non_positive_interval_falls_back() {
        for json in [
            r#"{"update_interval": 0.0}"#,
            r#"{"update_interval": -2.0}"#,
        ] {
            let raw: RawConfig = serde_json::from_str(json).expect("valid json");
            let config = HudConfig::from_raw(raw);
            assert_eq!(config.update_interval, DEFAULT_UPDATE_INTERVAL);
        }
    }
}
