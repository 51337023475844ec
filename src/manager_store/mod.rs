pub mod errors;

use chrono::{NaiveDate, NaiveDateTime};
use postgres::{Client, NoTls};
use crate::manager_store::errors::StoreError;
use crate::models::observation::{Observation, TIMESTAMP_FORMAT};

/// Day part of the stored timestamp layout, used for calendar grouping
const DAY_FORMAT: &str = "%Y/%m/%d";

/// Struct for managing the append only weather observation log.
///
/// Every operation opens its own short lived connection; the job runs
/// one cycle at a time so there is no pooling or writer coordination.
pub struct Store {
    conn_str: String,
}

impl Store {
    /// Returns a Store struct for the given connection string
    ///
    /// # Arguments
    ///
    /// * 'conn_str' - postgres connection string
    pub fn new(conn_str: &str) -> Store {
        Store { conn_str: conn_str.to_string() }
    }

    /// Opens a connection for one logical operation
    fn connect(&self) -> Result<Client, StoreError> {
        Ok(Client::connect(&self.conn_str, NoTls)?)
    }

    /// Creates the weather table if it does not exist
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        let mut client = self.connect()?;
        client.batch_execute(
            "CREATE TABLE IF NOT EXISTS weather (
                id SERIAL PRIMARY KEY,
                city TEXT NOT NULL,
                timestamp TEXT NOT NULL,
                temperature DOUBLE PRECISION NOT NULL,
                humidity INTEGER NOT NULL,
                rainfall DOUBLE PRECISION NOT NULL,
                flood_alert TEXT NOT NULL,
                rain_streak INTEGER NOT NULL
            )",
        )?;

        Ok(())
    }

    /// Appends one observation to the log as a single row
    ///
    /// # Arguments
    ///
    /// * 'observation' - the observation to persist
    pub fn append(&self, observation: &Observation) -> Result<(), StoreError> {
        let mut client = self.connect()?;
        client.execute(
            "INSERT INTO weather
                (city, timestamp, temperature, humidity, rainfall, flood_alert, rain_streak)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
            &[
                &observation.city,
                &observation.timestamp_string(),
                &observation.temperature,
                &observation.humidity,
                &observation.rainfall,
                &observation.flood_alert,
                &observation.rain_streak,
            ],
        )?;

        Ok(())
    }

    /// Sums rainfall over observations strictly newer than the cutoff.
    /// No matching rows yields zero. The stored timestamp layout sorts
    /// lexicographically in time order, so the comparison runs directly
    /// on the text column.
    ///
    /// # Arguments
    ///
    /// * 'cutoff' - start of the accumulation window
    pub fn sum_rainfall_since(&self, cutoff: NaiveDateTime) -> Result<f64, StoreError> {
        let cutoff = cutoff.format(TIMESTAMP_FORMAT).to_string();

        let mut client = self.connect()?;
        let row = client.query_one(
            "SELECT COALESCE(SUM(rainfall), 0.0) FROM weather WHERE timestamp > $1",
            &[&cutoff],
        )?;

        Ok(row.get(0))
    }

    /// Returns rainfall totals for the most recent calendar days having
    /// any observations, most recent first
    ///
    /// # Arguments
    ///
    /// * 'limit' - maximum number of days to return
    pub fn daily_rainfall_totals(&self, limit: i64) -> Result<Vec<(NaiveDate, f64)>, StoreError> {
        let mut client = self.connect()?;
        let rows = client.query(
            "SELECT SUBSTR(timestamp, 1, 10) AS day, SUM(rainfall)
             FROM weather
             GROUP BY day
             ORDER BY day DESC
             LIMIT $1",
            &[&limit],
        )?;

        let mut totals = Vec::with_capacity(rows.len());
        for row in rows {
            let day: String = row.get(0);
            let total: f64 = row.get(1);
            totals.push((parse_day(&day)?, total));
        }

        Ok(totals)
    }
}

/// Parses the day prefix of a stored timestamp into a calendar date
///
/// # Arguments
///
/// * 'day' - the day string in stored layout
fn parse_day(day: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(day, DAY_FORMAT)
        .map_err(|e| StoreError(format!("malformed day '{}' in weather log: {}", day, e)))
}
