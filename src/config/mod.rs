use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the CLI and library consumers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    /// Optional default catalog CSV; the built-in seed is used when unset.
    pub catalog_csv: Option<PathBuf>,
    /// Upper bound on universities in one comparison.
    pub max_compare: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog_csv = env::var("APP_CATALOG_CSV")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let max_compare = match env::var("APP_MAX_COMPARE") {
            Ok(value) => {
                let parsed = value
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidMaxCompare { value: value.clone() })?;
                if parsed < 2 {
                    return Err(ConfigError::InvalidMaxCompare { value });
                }
                parsed
            }
            Err(_) => 4,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            catalog_csv,
            max_compare,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMaxCompare { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMaxCompare { value } => {
                write!(f, "APP_MAX_COMPARE must be an integer of at least 2, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_CATALOG_CSV");
        env::remove_var("APP_MAX_COMPARE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.catalog_csv.is_none());
        assert_eq!(config.max_compare, 4);
    }

    #[test]
    fn blank_catalog_path_counts_as_unset() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_CATALOG_CSV", "   ");
        let config = AppConfig::load().expect("config loads");
        assert!(config.catalog_csv.is_none());
    }

    #[test]
    fn rejects_max_compare_below_two() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MAX_COMPARE", "1");
        let error = AppConfig::load().expect_err("must reject");
        assert!(matches!(error, ConfigError::InvalidMaxCompare { .. }));
    }

    #[test]
    fn recognises_production_aliases() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
    }
}
