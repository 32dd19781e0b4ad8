use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::salary::check_growth_rate;
pub use crate::workflows::salary::MAX_GROWTH_RATE_PERCENT;

/// Distinguishes runtime behavior for different stages of the service.
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

pub const DEFAULT_MODEL_PATH: &str = "models/salary_model.json";
pub const DEFAULT_GROWTH_RATE_PERCENT: f64 = 7.0;
pub const DEFAULT_PROJECTION_YEARS: u32 = 10;
/// Every cycle materializes `horizon + 1` projection points.
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub model: ModelConfig,
    pub projection: ProjectionConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let artifact_path = env::var("SALARY_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        let growth_rate_percent = match env::var("SALARY_GROWTH_RATE") {
            Ok(raw) => parse_growth_rate(&raw)?,
            Err(_) => DEFAULT_GROWTH_RATE_PERCENT,
        };

        let horizon_years = match env::var("SALARY_PROJECTION_YEARS") {
            Ok(raw) => parse_horizon(&raw)?,
            Err(_) => DEFAULT_PROJECTION_YEARS,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            model: ModelConfig { artifact_path },
            projection: ProjectionConfig {
                growth_rate_percent,
                horizon_years,
            },
        })
    }
}

/// Parses a growth percentage and checks it against the accepted range.
pub fn parse_growth_rate(raw: &str) -> Result<f64, ConfigError> {
    let invalid = || ConfigError::InvalidGrowthRate {
        value: raw.to_string(),
    };
    let rate = raw.trim().parse::<f64>().map_err(|_| invalid())?;
    check_growth_rate(rate).map_err(|_| invalid())
}

fn parse_horizon(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|years| *years <= MAX_PROJECTION_YEARS)
        .ok_or_else(|| ConfigError::InvalidHorizon {
            value: raw.to_string(),
        })
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the serialized regression model lives on disk.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub artifact_path: PathBuf,
}

/// Defaults applied to every prediction cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    pub growth_rate_percent: f64,
    pub horizon_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            growth_rate_percent: DEFAULT_GROWTH_RATE_PERCENT,
            horizon_years: DEFAULT_PROJECTION_YEARS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidGrowthRate { value: String },
    InvalidHorizon { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidGrowthRate { value } => write!(
                f,
                "growth rate must be a percentage between 0 and {MAX_GROWTH_RATE_PERCENT} (got '{value}')"
            ),
            ConfigError::InvalidHorizon { value } => write!(
                f,
                "SALARY_PROJECTION_YEARS must be an integer between 0 and {MAX_PROJECTION_YEARS} (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidGrowthRate { .. }
            | ConfigError::InvalidHorizon { .. } => None,
        }
    }
}

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
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("SALARY_MODEL_PATH");
        env::remove_var("SALARY_GROWTH_RATE");
        env::remove_var("SALARY_PROJECTION_YEARS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.model.artifact_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(config.projection, ProjectionConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_projection_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("SALARY_GROWTH_RATE", "12.5");
        env::set_var("SALARY_PROJECTION_YEARS", "5");
        env::set_var("SALARY_MODEL_PATH", "/opt/models/forest.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.projection.growth_rate_percent, 12.5);
        assert_eq!(config.projection.horizon_years, 5);
        assert_eq!(
            config.model.artifact_path,
            PathBuf::from("/opt/models/forest.json")
        );
        reset_env();
    }

    #[test]
    fn rejects_growth_rate_outside_slider_range() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SALARY_GROWTH_RATE", "25");
        let err = AppConfig::load().expect_err("growth rate above 20 rejected");
        assert!(matches!(err, ConfigError::InvalidGrowthRate { .. }));
        reset_env();
    }

    #[test]
    fn rejects_negative_horizon() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SALARY_PROJECTION_YEARS", "-3");
        let err = AppConfig::load().expect_err("negative horizon rejected");
        assert!(matches!(err, ConfigError::InvalidHorizon { .. }));
        reset_env();
    }

    #[test]
    fn rejects_horizon_beyond_cap() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SALARY_PROJECTION_YEARS", "4000000000");
        let err = AppConfig::load().expect_err("huge horizon rejected");
        assert!(matches!(err, ConfigError::InvalidHorizon { .. }));

        env::set_var("SALARY_PROJECTION_YEARS", "50");
        let config = AppConfig::load().expect("cap itself is accepted");
        assert_eq!(config.projection.horizon_years, MAX_PROJECTION_YEARS);
        reset_env();
    }

    #[test]
    fn growth_rate_parser_rejects_nan_and_garbage() {
        assert_eq!(parse_growth_rate(" 7.5 ").ok(), Some(7.5));
        assert!(matches!(
            parse_growth_rate("NaN"),
            Err(ConfigError::InvalidGrowthRate { .. })
        ));
        assert!(parse_growth_rate("-1").is_err());
        assert!(parse_growth_rate("fast").is_err());
    }
}
