//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Planning configuration.
    #[serde(default)]
    pub planning: PlanningConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Planning configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanningConfig {
    /// Default number of months shown in the trend view.
    #[serde(default = "default_trend_months")]
    pub trend_months: u32,
    /// Number of trailing full months fed into the savings forecast.
    #[serde(default = "default_forecast_history_months")]
    pub forecast_history_months: u32,
}

fn default_trend_months() -> u32 {
    6
}

fn default_forecast_history_months() -> u32 {
    6
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            trend_months: default_trend_months(),
            forecast_history_months: default_forecast_history_months(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINPLAN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
