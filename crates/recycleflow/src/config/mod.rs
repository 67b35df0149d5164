use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::workflows::talent::DeskSettings;

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
    pub talent: TalentConfig,
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

        let public_origin = env::var("APP_PUBLIC_ORIGIN").ok();
        let evaluation_latency_ms = env::var("APP_EVALUATION_LATENCY_MS")
            .unwrap_or_else(|_| DEFAULT_EVALUATION_LATENCY_MS.to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidLatency)?;
        let random_seed = env::var("APP_RANDOM_SEED")
            .ok()
            .map(|raw| raw.trim().parse::<u64>())
            .transpose()
            .map_err(|_| ConfigError::InvalidSeed)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            talent: TalentConfig {
                public_origin,
                evaluation_latency: Duration::from_millis(evaluation_latency_ms),
                random_seed,
            },
        })
    }

    /// Desk settings with the share origin resolved against the server binding.
    pub fn desk_settings(&self) -> DeskSettings {
        let public_origin = self
            .talent
            .public_origin
            .clone()
            .unwrap_or_else(|| self.server.origin());

        DeskSettings {
            evaluation_latency: self.talent.evaluation_latency,
            public_origin,
        }
    }
}

const DEFAULT_EVALUATION_LATENCY_MS: u64 = 1500;

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

    pub fn origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Knobs for the mock talent desk.
#[derive(Debug, Clone)]
pub struct TalentConfig {
    /// Origin used when building shareable candidate links.
    pub public_origin: Option<String>,
    pub evaluation_latency: Duration,
    /// Fixed seed for reproducible rosters; entropy-seeded when absent.
    pub random_seed: Option<u64>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLatency,
    InvalidSeed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLatency => {
                write!(f, "APP_EVALUATION_LATENCY_MS must be a whole number of milliseconds")
            }
            ConfigError::InvalidSeed => write!(f, "APP_RANDOM_SEED must be a valid u64"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort | ConfigError::InvalidLatency | ConfigError::InvalidSeed => {
                None
            }
        }
    }
}
