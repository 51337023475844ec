use std::env;
use anyhow::{anyhow, Result};
use log::info;
use crate::config::load_config;
use crate::manager_weather::Weather;

mod accumulation;
mod alert;
mod config;
mod errors;
mod initialization;
mod logging;
mod manager_mail;
mod manager_store;
mod manager_weather;
mod models;
mod worker;

/// Configuration file used when no path is given on the command line
const DEFAULT_CONFIG_PATH: &str = "config/rainwatch.toml";

enum Mode {
    Loop,
    Once,
    Probe,
}

fn main() -> Result<()> {
    let mut mode = Mode::Loop;
    let mut config_path = DEFAULT_CONFIG_PATH.to_string();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--once" => mode = Mode::Once,
            "--probe" => mode = Mode::Probe,
            path => config_path = path.to_string(),
        }
    }

    let config = load_config(&config_path).map_err(|e| anyhow!("{}", e))?;
    logging::init_logging(&config.general).map_err(|e| anyhow!("{}", e))?;

    info!("rainwatch version: {}", env!("CARGO_PKG_VERSION"));

    match mode {
        Mode::Probe => {
            let weather = Weather::new(
                config.weather.api_key.clone(),
                config.weather.city.clone(),
            )
            .map_err(|e| anyhow!("{}", e))?;
            worker::probe(&weather).map_err(|e| anyhow!("{}", e))?;
        }
        Mode::Once => {
            let mgr = initialization::init(&config).map_err(|e| anyhow!("{}", e))?;
            worker::run_cycle(&config, &mgr).map_err(|e| anyhow!("{}", e))?;
        }
        Mode::Loop => {
            let mgr = initialization::init(&config).map_err(|e| anyhow!("{}", e))?;
            worker::run(&config, &mgr).map_err(|e| anyhow!("{}", e))?;
        }
    }

    Ok(())
}
