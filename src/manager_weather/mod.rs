pub mod errors;

use std::thread;
use std::time::Duration;
use chrono::DateTime;
use log::warn;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use crate::manager_weather::errors::WeatherError;
use crate::models::observation::Reading;
use crate::models::openweather::CurrentConditions;

const ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Number of fetch attempts before a connection problem is given up on
const MAX_RETRIES: usize = 3;

/// Pause between fetch attempts
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Upper bound on a single request, connect and read included
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Struct for fetching current weather observations from OpenWeather
pub struct Weather {
    client: Client,
    api_key: String,
    city: String,
}

impl Weather {
    /// Returns a Weather struct ready for fetching observations for the
    /// given city
    ///
    /// # Arguments
    ///
    /// * 'api_key' - the api key for OpenWeather
    /// * 'city' - the city to observe
    pub fn new(api_key: String, city: String) -> Result<Weather, WeatherError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Weather { client, api_key, city })
    }

    /// Fetches the current observation for the configured city.
    ///
    /// Connection and timeout problems are retried a fixed number of
    /// times with a fixed delay in between. HTTP errors and malformed
    /// documents are returned immediately since retrying cannot help.
    pub fn current_reading(&self) -> Result<Reading, WeatherError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.fetch_once() {
                Err(e) if e.is_transient() && attempt < MAX_RETRIES => {
                    warn!(
                        "weather fetch attempt {}/{} failed: {}",
                        attempt, MAX_RETRIES, e
                    );
                    thread::sleep(RETRY_DELAY);
                }
                other => return other,
            }
        }
    }

    /// Performs one request against the current weather endpoint
    fn fetch_once(&self) -> Result<Reading, WeatherError> {
        let query = vec![
            ("q", self.city.as_str()),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ];

        let res = self.client.get(ENDPOINT).query(&query).send()?;

        if res.status() != StatusCode::OK {
            return Err(WeatherError::Permanent(format!(
                "http status {}",
                res.status()
            )));
        }

        let json = res.text()?;
        let conditions: CurrentConditions = serde_json::from_str(&json)?;

        reading_from(conditions)
    }
}

/// Turns a provider document into a Reading: the epoch second becomes a
/// naive civil time and negative rain volumes are clamped to zero
///
/// # Arguments
///
/// * 'conditions' - the parsed provider document
fn reading_from(conditions: CurrentConditions) -> Result<Reading, WeatherError> {
    let observed_at = DateTime::from_timestamp(conditions.dt, 0)
        .ok_or_else(|| {
            WeatherError::Document(format!("observation time {} out of range", conditions.dt))
        })?
        .naive_utc();

    let mut rainfall = conditions.rain.map_or(0.0, |r| r.last_hour);
    if rainfall < 0.0 {
        warn!("provider reported negative rainfall {} mm, treating as 0", rainfall);
        rainfall = 0.0;
    }

    Ok(Reading {
        temperature: conditions.main.temp,
        humidity: conditions.main.humidity,
        rainfall,
        observed_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::openweather::{MainConditions, RainVolume};
    use chrono::NaiveDate;

    fn conditions(rain: Option<RainVolume>) -> CurrentConditions {
        CurrentConditions {
            main: MainConditions { temp: 22.5, humidity: 64 },
            rain,
            // 2024-05-01 10:00:00 UTC
            dt: 1714557600,
        }
    }

    #[test]
    fn test_epoch_second_becomes_naive_civil_time() {
        let reading = reading_from(conditions(None)).expect("conversion should succeed");
        let expected = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(reading.observed_at, expected);
    }

    #[test]
    fn test_missing_rain_block_reads_as_zero_rainfall() {
        let reading = reading_from(conditions(None)).expect("conversion should succeed");
        assert_eq!(reading.rainfall, 0.0);
    }

    #[test]
    fn test_negative_rainfall_is_clamped_to_zero() {
        let reading = reading_from(conditions(Some(RainVolume { last_hour: -0.4 })))
            .expect("conversion should succeed");
        assert_eq!(reading.rainfall, 0.0);
    }

    #[test]
    fn test_rainfall_and_readings_carry_through() {
        let reading = reading_from(conditions(Some(RainVolume { last_hour: 2.8 })))
            .expect("conversion should succeed");
        assert_eq!(reading.rainfall, 2.8);
        assert_eq!(reading.temperature, 22.5);
        assert_eq!(reading.humidity, 64);
    }

    #[test]
    fn test_out_of_range_observation_time_is_a_document_error() {
        let mut bad = conditions(None);
        bad.dt = i64::MAX;
        let result = reading_from(bad);
        assert!(
            matches!(result, Err(WeatherError::Document(_))),
            "unrepresentable time should be a document error, got {:?}",
            result
        );
    }
}
