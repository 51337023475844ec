use std::fmt;
use std::fmt::Formatter;

/// Hourly rainfall thresholds in mm for flash flooding
const HOURLY_ADVISORY_MM: f64 = 3.0;
const HOURLY_WATCH_MM: f64 = 8.0;
const HOURLY_WARNING_MM: f64 = 15.0;

/// Trailing 24 hour rainfall thresholds in mm
const DAILY_ADVISORY_MM: f64 = 15.0;
const DAILY_WATCH_MM: f64 = 20.0;
const DAILY_WARNING_MM: f64 = 40.0;

/// Rainy streak thresholds in consecutive significant days
const STREAK_ADVISORY_DAYS: u32 = 1;
const STREAK_WATCH_DAYS: u32 = 2;
const STREAK_WARNING_DAYS: u32 = 4;

/// Flood alert severities in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    None,
    Advisory,
    Watch,
    Warning,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl AlertLevel {
    /// Returns the numeric level, 0 through 3
    pub fn level(&self) -> u8 {
        match self {
            AlertLevel::None => 0,
            AlertLevel::Advisory => 1,
            AlertLevel::Watch => 2,
            AlertLevel::Warning => 3,
        }
    }

    /// Returns the stable label stored with each observation and used
    /// as the alert mail text
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::None => "Level 0 - No flood risk",
            AlertLevel::Advisory => {
                "Level 1 - ADVISORY: Possible localized flooding - Stay vigilant."
            }
            AlertLevel::Watch => {
                "Level 2 - WATCH: Moderate to high flood risk - Prepare for action."
            }
            AlertLevel::Warning => {
                "Level 3 - WARNING: Severe risk of flooding - Immediate action required."
            }
        }
    }

    /// Returns true for the levels that warrant an operator notification
    pub fn requires_notification(&self) -> bool {
        *self >= AlertLevel::Watch
    }
}

/// Determines the flood alert level from hourly rainfall intensity,
/// accumulated 24 hour rainfall and consecutive days of significant
/// rain. The cascade checks the most severe level first and the first
/// match wins, so the function is total and monotone in each input.
///
/// # Arguments
///
/// * 'hourly_mm' - rainfall in mm over the last hour
/// * 'daily_mm' - rainfall in mm over the trailing 24 hours
/// * 'streak' - consecutive days with significant rainfall
pub fn classify(hourly_mm: f64, daily_mm: f64, streak: u32) -> AlertLevel {
    if hourly_mm >= HOURLY_WARNING_MM
        || daily_mm >= DAILY_WARNING_MM
        || streak >= STREAK_WARNING_DAYS
    {
        AlertLevel::Warning
    } else if hourly_mm >= HOURLY_WATCH_MM
        || daily_mm >= DAILY_WATCH_MM
        || streak >= STREAK_WATCH_DAYS
    {
        AlertLevel::Watch
    } else if hourly_mm >= HOURLY_ADVISORY_MM
        || daily_mm >= DAILY_ADVISORY_MM
        || streak >= STREAK_ADVISORY_DAYS
    {
        AlertLevel::Advisory
    } else {
        AlertLevel::None
    }
}
