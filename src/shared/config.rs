use std::env;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATASET_PATH: &str = "Preprocessed_DataJobSeeker.csv";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    pub dataset_path: PathBuf,
}

impl DashboardConfig {
    /// Load dashboard configuration from environment variables.
    /// The caller is expected to have loaded the `.env` files already.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let dataset_path = lookup("DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));

        Ok(Self {
            host,
            port,
            dataset_path,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = DashboardConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.dataset_path,
            PathBuf::from("Preprocessed_DataJobSeeker.csv")
        );
        assert_eq!(config.server_url(), "127.0.0.1:8080");
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("DATASET_PATH", "/data/jobseekers.csv"),
        ]))
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:9000");
        assert_eq!(config.dataset_path, PathBuf::from("/data/jobseekers.csv"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = DashboardConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidPort("eighty".to_string())
        );
    }
}
