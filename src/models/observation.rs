use chrono::NaiveDateTime;

/// Timestamp layout used for stored observations. The layout sorts
/// lexicographically in chronological order, which the store relies on
/// when comparing the timestamp column as text.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d,%H:%M:%S";

/// One instantaneous reading as delivered by the weather provider
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub humidity: i32,
    pub rainfall: f64,
    pub observed_at: NaiveDateTime,
}

/// One complete observation as persisted in the weather log, including
/// the flood data derived at creation time
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub city: String,
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub humidity: i32,
    pub rainfall: f64,
    pub flood_alert: String,
    pub rain_streak: i32,
}

impl Observation {
    /// Returns the timestamp in the stored string layout
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation_at(timestamp: NaiveDateTime) -> Observation {
        Observation {
            city: "Gaborone".to_string(),
            timestamp,
            temperature: 24.3,
            humidity: 61,
            rainfall: 0.8,
            flood_alert: "Level 0 - No flood risk".to_string(),
            rain_streak: 0,
        }
    }

    #[test]
    fn test_timestamp_string_uses_stored_layout() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 5, 9)
            .unwrap();
        assert_eq!(observation_at(ts).timestamp_string(), "2024/05/01,12:05:09");
    }

    #[test]
    fn test_timestamp_layout_sorts_chronologically() {
        // The store compares the timestamp column as text, so the string
        // order must match the time order across day and month boundaries.
        let earlier = [
            (2024, 4, 30, 23, 59, 59),
            (2024, 5, 1, 9, 59, 59),
            (2024, 9, 30, 12, 0, 0),
        ];
        let later = [
            (2024, 5, 1, 0, 0, 0),
            (2024, 5, 1, 10, 0, 0),
            (2024, 10, 1, 12, 0, 0),
        ];

        for (&(y1, mo1, d1, h1, mi1, s1), &(y2, mo2, d2, h2, mi2, s2)) in
            earlier.iter().zip(later.iter())
        {
            let a = NaiveDate::from_ymd_opt(y1, mo1, d1)
                .unwrap()
                .and_hms_opt(h1, mi1, s1)
                .unwrap();
            let b = NaiveDate::from_ymd_opt(y2, mo2, d2)
                .unwrap()
                .and_hms_opt(h2, mi2, s2)
                .unwrap();

            let a_str = observation_at(a).timestamp_string();
            let b_str = observation_at(b).timestamp_string();
            assert!(
                a_str < b_str,
                "'{}' should sort before '{}'",
                a_str,
                b_str
            );
        }
    }
}
