use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

/// Knobs for the simulated inventory/pricing providers.
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    #[serde(default = "default_jitter_band")]
    pub jitter_band: f64,
    #[serde(default = "default_max_taken_seats")]
    pub max_taken_seats: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            jitter_band: default_jitter_band(),
            max_taken_seats: default_max_taken_seats(),
        }
    }
}

fn default_jitter_band() -> f64 {
    0.1
}

fn default_max_taken_seats() -> usize {
    4
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Path to a trips JSON file; the embedded seed is used when unset.
    #[serde(default)]
    pub trips_file: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of TANA)
            // Eg.. `TANA__SERVER__PORT=9090` would set the server port
            .add_source(config::Environment::with_prefix("TANA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaulted_sections() {
        let raw = r#"
            [server]
            port = 8080

            [auth]
            jwt_secret = "test-secret"
            jwt_expiration_seconds = 3600
        "#;
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.simulation.jitter_band, 0.1);
        assert_eq!(cfg.simulation.max_taken_seats, 4);
        assert!(cfg.catalog.trips_file.is_none());
    }

    #[test]
    fn explicit_simulation_values_override_defaults() {
        let raw = r#"
            [server]
            port = 8080

            [auth]
            jwt_secret = "test-secret"
            jwt_expiration_seconds = 3600

            [simulation]
            jitter_band = 0.05
            max_taken_seats = 2

            [catalog]
            trips_file = "data/custom.json"
        "#;
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(cfg.simulation.jitter_band, 0.05);
        assert_eq!(cfg.simulation.max_taken_seats, 2);
        assert_eq!(cfg.catalog.trips_file.as_deref(), Some("data/custom.json"));
    }
}
