use std::fmt;
use std::fmt::Formatter;
use chrono::RoundingError;
use crate::manager_mail::errors::MailError;
use crate::manager_store::errors::StoreError;
use crate::manager_weather::errors::WeatherError;

/// Raised when the configuration file cannot be read, parsed or
/// validated, and when logging setup fails. Fatal at process start.
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}

/// Raised when a manager cannot be constructed or the store schema
/// cannot be bootstrapped. Fatal at process start.
pub struct InitError(pub String);

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "InitError: {}", self.0)
    }
}
impl From<WeatherError> for InitError {
    fn from(e: WeatherError) -> Self {
        InitError(e.to_string())
    }
}
impl From<StoreError> for InitError {
    fn from(e: StoreError) -> Self {
        InitError(e.to_string())
    }
}
impl From<MailError> for InitError {
    fn from(e: MailError) -> Self { InitError(e.to_string()) }
}

/// Raised when one fetch and store cycle cannot complete. The loop
/// logs it and keeps running; a one shot run exits with it.
pub struct CycleError(pub String);

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "CycleError: {}", self.0)
    }
}
impl From<WeatherError> for CycleError {
    fn from(e: WeatherError) -> Self {
        CycleError(e.to_string())
    }
}
impl From<StoreError> for CycleError {
    fn from(e: StoreError) -> Self {
        CycleError(e.to_string())
    }
}
impl From<RoundingError> for CycleError {
    fn from(e: RoundingError) -> Self { CycleError(e.to_string()) }
}
