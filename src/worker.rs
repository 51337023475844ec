use std::thread;
use chrono::{DateTime, DurationRound, Local, TimeDelta};
use log::{error, info};
use crate::accumulation::{rainy_streak, window_start, STREAK_LOOKBACK_DAYS};
use crate::alert::classify;
use crate::config::Config;
use crate::errors::CycleError;
use crate::initialization::Mgr;
use crate::manager_weather::Weather;
use crate::models::observation::Observation;

/// Pause between scheduler wake ups
const POLL_SLEEP: std::time::Duration = std::time::Duration::from_secs(10);

/// Runs the hourly fetch, classify, store and notify loop.
///
/// A cycle is started on entering a wall clock hour that has not been
/// visited yet, so the first cycle runs right away at startup. A failed
/// cycle is logged and the loop keeps running; each run is expected to
/// finish well within the hour, so cycles never overlap.
///
/// # Arguments
///
/// * 'config' - the application configuration
/// * 'mgr' - the collaborating managers
pub fn run(config: &Config, mgr: &Mgr) -> Result<(), CycleError> {
    let mut last_cycle: Option<DateTime<Local>> = None;

    loop {
        let local_now = Local::now();
        let this_hour = local_now.duration_trunc(TimeDelta::hours(1))?;

        if last_cycle.is_none_or(|h| h < this_hour) {
            if let Err(e) = run_cycle(config, mgr) {
                error!("cycle aborted: {}", e);
            }
            last_cycle = Some(this_hour);
        }

        thread::sleep(POLL_SLEEP);
    }
}

/// Runs one fetch, derive, classify, persist, notify sequence.
///
/// A fetch failure aborts the whole cycle before anything is written.
/// Aggregate reads that fail degrade to zero so that classification
/// always completes. The observation is persisted as one row; a failed
/// write is logged but the notification still goes out, since the alert
/// was derived from values already in hand. Mail delivery failures are
/// logged without affecting the stored data.
///
/// # Arguments
///
/// * 'config' - the application configuration
/// * 'mgr' - the collaborating managers
pub fn run_cycle(config: &Config, mgr: &Mgr) -> Result<(), CycleError> {
    info!("starting weather fetch and store cycle");

    let reading = mgr.weather.current_reading()?;
    info!(
        "extracted: time: {}, temp: {}, humidity: {}, rain (1h): {} mm",
        reading.observed_at, reading.temperature, reading.humidity, reading.rainfall
    );

    let daily_mm = match mgr.store.sum_rainfall_since(window_start(reading.observed_at)) {
        Ok(total) => total,
        Err(e) => {
            error!("24h rainfall aggregation failed, using 0: {}", e);
            0.0
        }
    };

    let streak = match mgr.store.daily_rainfall_totals(STREAK_LOOKBACK_DAYS) {
        Ok(days) => rainy_streak(&days),
        Err(e) => {
            error!("daily rainfall aggregation failed, using streak 0: {}", e);
            0
        }
    };

    let level = classify(reading.rainfall, daily_mm, streak);
    info!("daily total rain (24h): {} mm", daily_mm);
    info!("rainy streak (significant days): {} consecutive day(s)", streak);
    info!("flood alert: {}", level);

    let observation = Observation {
        city: config.weather.city.clone(),
        timestamp: reading.observed_at,
        temperature: reading.temperature,
        humidity: reading.humidity,
        rainfall: reading.rainfall,
        flood_alert: level.to_string(),
        rain_streak: streak as i32,
    };

    match mgr.store.append(&observation) {
        Ok(()) => info!("observation saved"),
        Err(e) => error!("failed to persist observation: {}", e),
    }

    if level.requires_notification() {
        info!("flood alert triggered: {}", observation.flood_alert);
        if let Err(e) = mgr.mail.send_alert(&observation.flood_alert) {
            error!("failed to send alert mail: {}", e);
        }
    }

    Ok(())
}

/// Fetches and logs the current conditions without touching the store
/// or sending any mail
///
/// # Arguments
///
/// * 'weather' - the weather manager
pub fn probe(weather: &Weather) -> Result<(), CycleError> {
    let reading = weather.current_reading()?;
    info!(
        "current conditions: time: {}, temp: {} C, humidity: {} %, rain (1h): {} mm",
        reading.observed_at, reading.temperature, reading.humidity, reading.rainfall
    );

    Ok(())
}
