use crate::ConfigError;
use std::{collections::HashMap, env, time::Duration};

/// Default TVMaze API endpoint
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.tvmaze.com";

/// Resolved show lists live for one hour
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Upper bound on cached actors to keep memory bounded
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1000;

/// Per-attempt timeout for catalog requests, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_MAX_RETRIES: u32 = 3;

pub const DEFAULT_BACKOFF_FACTOR: f64 = 1.0;

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid(name, &raw, "not a valid number")),
        None => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
    pub cache: CacheConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_var)
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_vars(&lookup)?,
            logging: LoggingConfig::from_vars(&lookup),
            catalog: CatalogConfig::from_vars(&lookup)?,
            cache: CacheConfig::from_vars(&lookup)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_vars<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(lookup, "SERVER_PORT", 5000)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Logging Configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub modules: HashMap<String, String>,
}

impl LoggingConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(&env_var)
    }

    pub fn from_vars<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut modules = HashMap::new();

        // Module-specific overrides go through the same level mapping
        if let Some(level) = lookup("LOG_MODULE_API") {
            modules.insert("api".to_string(), parse_log_level(&level).to_string());
        }
        if let Some(level) = lookup("LOG_MODULE_SERVICES") {
            modules.insert("services".to_string(), parse_log_level(&level).to_string());
        }

        Self {
            level: parse_log_level(&lookup("LOG_LEVEL").unwrap_or_default()).to_string(),
            format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            modules,
        }
    }

    /// Build an `EnvFilter` directive such as `info,api=debug`
    pub fn filter_directive(&self) -> String {
        let mut filter = self.level.clone();

        let mut modules: Vec<_> = self.modules.iter().collect();
        modules.sort();
        for (module, level) in modules {
            filter.push_str(&format!(",{}={}", module, level));
        }

        filter
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            modules: HashMap::new(),
        }
    }
}

/// Map a user supplied level name onto a tracing level.
///
/// Accepts the usual severity names in any case, including `warning` and
/// `critical`. Anything unrecognized falls back to `info`.
pub fn parse_log_level(raw: &str) -> &'static str {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" | "fatal" => "error",
        _ => "info",
    }
}

/// Settings for the outbound catalog (TVMaze) client
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Applied to every attempt, retries included
    pub request_timeout: Duration,
    pub max_retries: u32,
    /// Seconds; retry `n` waits `factor * 2^(n-1)` (first retry is immediate)
    pub backoff_factor: f64,
}

impl CatalogConfig {
    pub fn from_vars<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: f64 = parse_var(
            lookup,
            "CATALOG_REQUEST_TIMEOUT",
            DEFAULT_REQUEST_TIMEOUT_SECS as f64,
        )?;
        if !timeout_secs.is_finite() || timeout_secs <= 0.0 {
            return Err(ConfigError::invalid(
                "CATALOG_REQUEST_TIMEOUT",
                &timeout_secs.to_string(),
                "must be a positive number of seconds",
            ));
        }

        let request_timeout = Duration::try_from_secs_f64(timeout_secs).map_err(|_| {
            ConfigError::invalid(
                "CATALOG_REQUEST_TIMEOUT",
                &timeout_secs.to_string(),
                "too large to be a duration",
            )
        })?;

        let backoff_factor: f64 =
            parse_var(lookup, "CATALOG_BACKOFF_FACTOR", DEFAULT_BACKOFF_FACTOR)?;
        if !backoff_factor.is_finite() || backoff_factor < 0.0 {
            return Err(ConfigError::invalid(
                "CATALOG_BACKOFF_FACTOR",
                &backoff_factor.to_string(),
                "must be zero or positive",
            ));
        }

        Ok(Self {
            base_url: lookup("CATALOG_BASE_URL")
                .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            request_timeout,
            max_retries: parse_var(lookup, "CATALOG_MAX_RETRIES", DEFAULT_MAX_RETRIES)?,
            backoff_factor,
        })
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
        }
    }
}

/// Settings for the resolved-show cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub ttl: Duration,
    pub max_entries: usize,
}

impl CacheConfig {
    pub fn from_vars<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_entries: usize =
            parse_var(lookup, "CACHE_MAX_ENTRIES", DEFAULT_CACHE_MAX_ENTRIES)?;
        if max_entries == 0 {
            return Err(ConfigError::invalid(
                "CACHE_MAX_ENTRIES",
                "0",
                "must hold at least one entry",
            ));
        }

        Ok(Self {
            ttl: Duration::from_secs(parse_var(
                lookup,
                "CACHE_TTL_SECONDS",
                DEFAULT_CACHE_TTL_SECS,
            )?),
            max_entries,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}
