use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// Connection or timeout problem, retried up to the fetch bound
    #[error("connection problem talking to the weather provider: {0}")]
    Transient(String),
    /// Provider side refusal or other non retryable transport failure
    #[error("weather provider rejected the request: {0}")]
    Permanent(String),
    /// The response document could not be understood
    #[error("malformed weather document: {0}")]
    Document(String),
}

impl WeatherError {
    pub fn is_transient(&self) -> bool {
        matches!(self, WeatherError::Transient(_))
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(e: serde_json::Error) -> WeatherError {
        WeatherError::Document(e.to_string())
    }
}
impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> WeatherError {
        if e.is_timeout() || e.is_connect() {
            WeatherError::Transient(e.to_string())
        } else {
            WeatherError::Permanent(e.to_string())
        }
    }
}
