//! Environment-driven application settings.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use confdeck_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha};

use crate::error::{AppError, AppResult};

const ENV_BIND_ADDR: &str = "CONFDECK_BIND_ADDR";
const ENV_HTTP_PORT: &str = "CONFDECK_HTTP_PORT";
const ENV_ALLOW_REMOTE: &str = "CONFDECK_ALLOW_REMOTE";
const ENV_LOG_LEVEL: &str = "CONFDECK_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "CONFDECK_LOG_FORMAT";
const ENV_UI_DIR: &str = "CONFDECK_UI_DIR";
const ENV_SEED_PATH: &str = "CONFDECK_SEED_PATH";

/// Port used when `CONFDECK_HTTP_PORT` is unset.
pub const DEFAULT_HTTP_PORT: u16 = 7070;

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Listener address.
    pub bind_addr: IpAddr,
    /// Listener port, never zero.
    pub http_port: u16,
    /// Whether a non-loopback `bind_addr` is permitted.
    pub allow_remote: bool,
    /// Log level directive used when `RUST_LOG` is absent.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// Optional UI bundle directory.
    pub ui_dir: Option<PathBuf>,
    /// Optional JSON seed replacing the built-in catalog.
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] when a variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`; blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidConfig`] when a variable cannot be parsed or
    /// a non-loopback address is requested without `CONFDECK_ALLOW_REMOTE`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_addr = match get(ENV_BIND_ADDR) {
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
            Some(raw) => raw.parse().map_err(|_| AppError::InvalidConfig {
                field: ENV_BIND_ADDR,
                reason: "not_an_ip_address",
                value: Some(raw),
            })?,
        };

        let http_port = match get(ENV_HTTP_PORT) {
            None => DEFAULT_HTTP_PORT,
            Some(raw) => parse_port(raw)?,
        };

        let allow_remote = env_flag_value(get(ENV_ALLOW_REMOTE).as_deref());
        enforce_loopback_guard(bind_addr, allow_remote)?;

        let log_format = match get(ENV_LOG_FORMAT) {
            None => LogFormat::infer(),
            Some(raw) => LogFormat::parse(&raw).ok_or_else(|| AppError::InvalidConfig {
                field: ENV_LOG_FORMAT,
                reason: "unknown_format",
                value: Some(raw),
            })?,
        };

        Ok(Self {
            bind_addr,
            http_port,
            allow_remote,
            log_level: get(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_format,
            ui_dir: get(ENV_UI_DIR).map(PathBuf::from),
            seed_path: get(ENV_SEED_PATH).map(PathBuf::from),
        })
    }

    /// Address the API listener binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }

    /// Logging settings derived from this configuration.
    #[must_use]
    pub fn logging(&self) -> LoggingConfig<'_> {
        LoggingConfig {
            level: &self.log_level,
            format: self.log_format,
            build_sha: build_sha(),
        }
    }
}

fn parse_port(raw: String) -> AppResult<u16> {
    match raw.parse::<u16>() {
        Ok(0) => Err(AppError::InvalidConfig {
            field: ENV_HTTP_PORT,
            reason: "zero",
            value: Some(raw),
        }),
        Ok(port) => Ok(port),
        Err(_) => Err(AppError::InvalidConfig {
            field: ENV_HTTP_PORT,
            reason: "out_of_range",
            value: Some(raw),
        }),
    }
}

fn env_flag_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn enforce_loopback_guard(bind_addr: IpAddr, allow_remote: bool) -> AppResult<()> {
    if !allow_remote && !bind_addr.is_loopback() {
        return Err(AppError::InvalidConfig {
            field: ENV_BIND_ADDR,
            reason: "non_loopback_without_allow_remote",
            value: Some(bind_addr.to_string()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() -> AppResult<()> {
        let config = AppConfig::from_lookup(lookup(&[]))?;
        assert_eq!(config.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 7070)));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_format, LogFormat::infer());
        assert!(config.ui_dir.is_none());
        assert!(config.seed_path.is_none());
        Ok(())
    }

    #[test]
    fn explicit_values_override_defaults() -> AppResult<()> {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_BIND_ADDR, "0.0.0.0"),
            (ENV_ALLOW_REMOTE, "yes"),
            (ENV_HTTP_PORT, " 8080 "),
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_UI_DIR, "dist"),
            (ENV_SEED_PATH, ""),
        ]))?;
        assert_eq!(config.socket_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.logging().level, "debug");
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(config.ui_dir, Some(PathBuf::from("dist")));
        assert!(config.seed_path.is_none());
        Ok(())
    }

    #[test]
    fn invalid_ports_are_rejected() {
        for (raw, reason) in [("0", "zero"), ("70000", "out_of_range"), ("http", "out_of_range")] {
            let err = AppConfig::from_lookup(lookup(&[(ENV_HTTP_PORT, raw)]))
                .expect_err("port must be rejected");
            assert!(
                matches!(err, AppError::InvalidConfig { field: ENV_HTTP_PORT, reason: r, .. } if r == reason),
                "{raw} -> {err:?}"
            );
        }
    }

    #[test]
    fn non_loopback_requires_opt_in() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_BIND_ADDR, "192.168.1.10")]))
            .expect_err("remote bind without opt-in");
        assert!(matches!(
            err,
            AppError::InvalidConfig {
                reason: "non_loopback_without_allow_remote",
                ..
            }
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_LOG_FORMAT, "xml")]))
            .expect_err("unknown format");
        assert!(matches!(
            err,
            AppError::InvalidConfig {
                field: ENV_LOG_FORMAT,
                ..
            }
        ));
    }

    #[test]
    fn env_flag_handles_truthy_and_falsey() {
        assert!(env_flag_value(Some("TrUe")));
        assert!(!env_flag_value(Some("no")));
        assert!(!env_flag_value(None));
    }
}
