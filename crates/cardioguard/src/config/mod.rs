use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub risk: RiskConfig,
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

        let risk = RiskConfig::from_env()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            risk,
        })
    }
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Risk tier thresholds applied to the ensemble probability.
///
/// The published calibration uses 0.30/0.60; earlier drafts circulated a
/// 0.40/0.70 pair, so the boundaries stay overridable per deployment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskConfig {
    pub moderate_threshold: f64,
    pub high_threshold: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            moderate_threshold: 0.30,
            high_threshold: 0.60,
        }
    }
}

impl RiskConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let moderate_threshold = read_threshold("APP_RISK_MODERATE", defaults.moderate_threshold)?;
        let high_threshold = read_threshold("APP_RISK_HIGH", defaults.high_threshold)?;

        let config = Self {
            moderate_threshold,
            high_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ordered = 0.0 < self.moderate_threshold
            && self.moderate_threshold < self.high_threshold
            && self.high_threshold < 1.0;
        if ordered {
            Ok(())
        } else {
            Err(ConfigError::InvalidThresholds {
                moderate: self.moderate_threshold,
                high: self.high_threshold,
            })
        }
    }
}

fn read_threshold(key: &str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<f64>().map_err(|_| ConfigError::InvalidThreshold {
            key: key.to_string(),
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold { key: String, value: String },
    InvalidThresholds { moderate: f64, high: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold { key, value } => {
                write!(f, "{key} must be a decimal probability, got '{value}'")
            }
            ConfigError::InvalidThresholds { moderate, high } => {
                write!(
                    f,
                    "risk thresholds must satisfy 0 < moderate ({moderate}) < high ({high}) < 1"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
