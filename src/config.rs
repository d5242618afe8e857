use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use snafu::ResultExt;

use crate::error::{ApplicationError, ConfigLoadSnafu};

/// Load the configuration from the environment, see [Config] for the variable names.
pub fn load() -> Result<Config, ApplicationError> {
    envy::from_env::<Config>().context(ConfigLoadSnafu)
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "host_address")]
    pub host: SocketAddr,
    /// directory containing `channel_stats.csv` and `video_data.csv`
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub log_dir: PathBuf,
    /// reload the page whenever the server restarts
    pub live_reload: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: SocketAddr::from(([127, 0, 0, 1], 2000)),
            data_dir: PathBuf::from("./data"),
            assets_dir: PathBuf::from("./assets"),
            log_dir: PathBuf::from("./logs"),
            live_reload: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config: Config = envy::from_iter(vars(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.host.port(), 2000);
    }

    #[test]
    fn read_overrides_from_environment() {
        let config: Config = envy::from_iter(vars(&[
            ("HOST_ADDRESS", "0.0.0.0:8050"),
            ("DATA_DIR", "/srv/youtube"),
            ("LIVE_RELOAD", "true"),
        ]))
        .unwrap();

        assert_eq!(config.host, SocketAddr::from(([0, 0, 0, 0], 8050)));
        assert_eq!(config.data_dir, PathBuf::from("/srv/youtube"));
        assert_eq!(config.assets_dir, PathBuf::from("./assets"));
        assert!(config.live_reload);
    }

    #[test]
    fn reject_invalid_address() {
        let result = envy::from_iter::<_, Config>(vars(&[("HOST_ADDRESS", "not an address")]));
        assert!(result.is_err());
    }
}
