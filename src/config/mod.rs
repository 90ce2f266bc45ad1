//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `FIBERSHEET_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

/// Service configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `FIBERSHEET_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// External datasheet search endpoint.
    pub search_url: String,

    /// External endpoint that stores ("configures") datasheet records.
    pub configure_url: String,

    /// External master-data endpoint listing valid values per parameter.
    pub parameter_url: String,

    /// Optional bearer token sent to the external API.
    pub api_key: Option<String>,

    /// Per-request timeout for external calls. Default: 30 seconds.
    pub request_timeout: Duration,

    /// Accept self-signed TLS certificates. Default: `true` (the test API uses one).
    pub accept_invalid_certs: bool,

    /// Pause between records when publishing a batch. Default: 1 second.
    pub publish_delay: Duration,

    /// How long fetched filter values are cached. Default: 5 minutes.
    pub options_ttl: Duration,
}

/// Base URL of the external datasheet API.
pub const DEFAULT_API_BASE: &str = "https://www.hfcl.com/testapiforsap/api/datasheet";

/// Default search endpoint used when `FIBERSHEET_SEARCH_URL` is not set.
pub const DEFAULT_SEARCH_URL: &str =
    "https://www.hfcl.com/testapiforsap/api/datasheet/searchDatasheet";

/// Default configure endpoint used when `FIBERSHEET_CONFIGURE_URL` is not set.
pub const DEFAULT_CONFIGURE_URL: &str =
    "https://www.hfcl.com/testapiforsap/api/datasheet/configureDatasheet";

/// Default parameter lookup endpoint used when `FIBERSHEET_PARAMETER_URL` is not set.
pub const DEFAULT_PARAMETER_URL: &str =
    "https://www.hfcl.com/testapiforsap/api/datasheet/getParameterValues";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            configure_url: DEFAULT_CONFIGURE_URL.to_string(),
            parameter_url: DEFAULT_PARAMETER_URL.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(30),
            accept_invalid_certs: true,
            publish_delay: Duration::from_millis(1000),
            options_ttl: Duration::from_secs(300),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "FIBERSHEET_PORT";
    const ENV_BIND_ADDR: &'static str = "FIBERSHEET_BIND_ADDR";
    const ENV_SEARCH_URL: &'static str = "FIBERSHEET_SEARCH_URL";
    const ENV_CONFIGURE_URL: &'static str = "FIBERSHEET_CONFIGURE_URL";
    const ENV_PARAMETER_URL: &'static str = "FIBERSHEET_PARAMETER_URL";
    const ENV_API_KEY: &'static str = "FIBERSHEET_API_KEY";
    const ENV_REQUEST_TIMEOUT_SECS: &'static str = "FIBERSHEET_REQUEST_TIMEOUT_SECS";
    const ENV_ACCEPT_INVALID_CERTS: &'static str = "FIBERSHEET_ACCEPT_INVALID_CERTS";
    const ENV_PUBLISH_DELAY_MS: &'static str = "FIBERSHEET_PUBLISH_DELAY_MS";
    const ENV_OPTIONS_TTL_SECS: &'static str = "FIBERSHEET_OPTIONS_TTL_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let search_url = Self::parse_string_from_env(Self::ENV_SEARCH_URL, defaults.search_url);
        let configure_url =
            Self::parse_string_from_env(Self::ENV_CONFIGURE_URL, defaults.configure_url);
        let parameter_url =
            Self::parse_string_from_env(Self::ENV_PARAMETER_URL, defaults.parameter_url);
        let api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY);
        let request_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_REQUEST_TIMEOUT_SECS,
            defaults.request_timeout.as_secs(),
        )?);
        let accept_invalid_certs =
            Self::parse_bool_from_env(Self::ENV_ACCEPT_INVALID_CERTS, defaults.accept_invalid_certs)?;
        let publish_delay = Duration::from_millis(Self::parse_u64_from_env(
            Self::ENV_PUBLISH_DELAY_MS,
            defaults.publish_delay.as_millis() as u64,
        )?);
        let options_ttl = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_OPTIONS_TTL_SECS,
            defaults.options_ttl.as_secs(),
        )?);

        Ok(Self {
            port,
            bind_addr,
            search_url,
            configure_url,
            parameter_url,
            api_key,
            request_timeout,
            accept_invalid_certs,
            publish_delay,
            options_ttl,
        })
    }

    /// Validates URLs and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            (Self::ENV_SEARCH_URL, &self.search_url),
            (Self::ENV_CONFIGURE_URL, &self.configure_url),
            (Self::ENV_PARAMETER_URL, &self.parameter_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    name,
                    value: url.clone(),
                });
            }
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(name: &'static str, default: u64) -> Result<u64, ConfigError> {
        match env::var(name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool { name, value }),
            },
            Err(_) => Ok(default),
        }
    }
}
