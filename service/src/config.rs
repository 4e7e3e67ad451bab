// service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

/// `DATABASE_URL` value that selects the in-process store instead of SQLite.
pub const MEMORY_DATABASE_URL: &str = "memory://";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://products.db?mode=rwc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Text,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "text" | "" => Ok(LogFormat::Text),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected 'text' or 'json'", other))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any variable source; `from_env` passes the process environment.
  pub fn from_lookup<F>(get_env: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")
      .filter(|url| !url.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
    let log_format = match get_env("LOG_FORMAT") {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => LogFormat::default(),
    };

    Ok(Self {
      server_host,
      server_port,
      database_url,
      log_format,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }

  pub fn uses_memory_store(&self) -> bool {
    self.database_url == MEMORY_DATABASE_URL
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|name| vars.get(name).cloned())
  }

  #[test]
  fn defaults_apply_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.server_address(), "127.0.0.1:8080");
    assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    assert_eq!(config.log_format, LogFormat::Text);
    assert!(!config.uses_memory_store());
  }

  #[test]
  fn explicit_values_win() {
    let config = config_from(&[
      ("SERVER_HOST", "0.0.0.0"),
      ("SERVER_PORT", "9000"),
      ("DATABASE_URL", MEMORY_DATABASE_URL),
      ("LOG_FORMAT", "JSON"),
    ])
    .unwrap();
    assert_eq!(config.server_address(), "0.0.0.0:9000");
    assert!(config.uses_memory_store());
    assert_eq!(config.log_format, LogFormat::Json);
  }

  #[test]
  fn invalid_values_are_config_errors() {
    assert!(matches!(config_from(&[("SERVER_PORT", "eighty")]), Err(AppError::Config(_))));
    assert!(matches!(config_from(&[("LOG_FORMAT", "xml")]), Err(AppError::Config(_))));
  }
}
