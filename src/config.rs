use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct WeatherParameters {
    pub api_key: String,
    pub city: String,
}

#[derive(Deserialize)]
pub struct DatabaseParameters {
    pub url: String,
}

#[derive(Deserialize)]
pub struct MailParameters {
    pub smtp_user: String,
    pub smtp_password: String,
    pub smtp_endpoint: String,
    pub smtp_port: u16,
    pub from: String,
    pub to: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub weather: WeatherParameters,
    pub database: DatabaseParameters,
    pub mail: MailParameters,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;

    parse_config(&toml)
}

/// Parses and validates configuration document text
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;
    validate(&config)?;

    Ok(config)
}

/// Checks that every required configuration value is present so that a
/// misconfigured deployment stops at startup rather than mid cycle
///
/// # Arguments
///
/// * 'config' - the parsed configuration
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.weather.api_key.is_empty() { Err("weather.api_key is not set")? }
    if config.weather.city.is_empty() { Err("weather.city is not set")? }
    if config.database.url.is_empty() { Err("database.url is not set")? }
    if config.mail.smtp_user.is_empty() { Err("mail.smtp_user is not set")? }
    if config.mail.smtp_password.is_empty() { Err("mail.smtp_password is not set")? }
    if config.mail.smtp_endpoint.is_empty() { Err("mail.smtp_endpoint is not set")? }
    if config.mail.from.is_empty() { Err("mail.from is not set")? }
    if config.mail.to.is_empty() { Err("mail.to is not set")? }
    if config.general.log_path.is_empty() { Err("general.log_path is not set")? }

    Ok(())
}
