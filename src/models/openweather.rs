use serde::Deserialize;

/// Response document from the OpenWeather current weather endpoint,
/// reduced to the fields the service consumes
#[derive(Deserialize)]
pub struct CurrentConditions {
    pub main: MainConditions,
    pub rain: Option<RainVolume>,
    pub dt: i64,
}

#[derive(Deserialize)]
pub struct MainConditions {
    pub temp: f64,
    pub humidity: i32,
}

/// Rain volumes are only present in the document when there was rain,
/// and the one hour volume may be missing even then
#[derive(Deserialize)]
pub struct RainVolume {
    #[serde(rename = "1h", default)]
    pub last_hour: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document_parses() {
        let json = r#"{
            "coord": {"lon": 25.9086, "lat": -24.6581},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 21.4, "feels_like": 21.2, "temp_min": 21.4, "temp_max": 21.4,
                     "pressure": 1018, "humidity": 73},
            "rain": {"1h": 0.66},
            "dt": 1714557600,
            "name": "Gaborone",
            "cod": 200
        }"#;

        let conditions: CurrentConditions =
            serde_json::from_str(json).expect("well-formed document should parse");
        assert_eq!(conditions.main.temp, 21.4);
        assert_eq!(conditions.main.humidity, 73);
        assert_eq!(conditions.dt, 1714557600);
        assert_eq!(conditions.rain.expect("rain block present").last_hour, 0.66);
    }

    #[test]
    fn test_dry_document_has_no_rain_block() {
        let json = r#"{
            "main": {"temp": 28.0, "humidity": 22},
            "dt": 1714557600
        }"#;

        let conditions: CurrentConditions =
            serde_json::from_str(json).expect("document without rain should parse");
        assert!(conditions.rain.is_none());
    }

    #[test]
    fn test_rain_block_without_hourly_volume_defaults_to_zero() {
        let json = r#"{
            "main": {"temp": 19.5, "humidity": 88},
            "rain": {},
            "dt": 1714557600
        }"#;

        let conditions: CurrentConditions =
            serde_json::from_str(json).expect("empty rain block should parse");
        assert_eq!(conditions.rain.expect("rain block present").last_hour, 0.0);
    }

    #[test]
    fn test_document_without_main_block_is_rejected() {
        let json = r#"{"rain": {"1h": 1.2}, "dt": 1714557600}"#;

        let result = serde_json::from_str::<CurrentConditions>(json);
        assert!(result.is_err(), "missing main block should fail to parse");
    }
}
