use crate::config::Config;
use crate::errors::InitError;
use crate::manager_mail::Mail;
use crate::manager_store::Store;
use crate::manager_weather::Weather;

/// Container for the collaborating managers used by the worker
pub struct Mgr {
    pub weather: Weather,
    pub store: Store,
    pub mail: Mail,
}

/// Initializes the Weather, Store and Mail managers and makes sure the
/// weather table exists
///
/// # Arguments
///
/// * 'config' - the application configuration
pub fn init(config: &Config) -> Result<Mgr, InitError> {
    let weather = Weather::new(
        config.weather.api_key.clone(),
        config.weather.city.clone(),
    )?;

    let store = Store::new(&config.database.url);
    store.ensure_schema()?;

    let mail = Mail::new(&config.mail)?;

    Ok(Mgr { weather, store, mail })
}
