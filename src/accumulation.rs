use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Daily rainfall in mm at or above which a day counts towards the
/// rainy streak
pub const SIGNIFICANT_DAILY_MM: f64 = 10.0;

/// Number of calendar days the streak walk looks back over, which also
/// caps the streak itself
pub const STREAK_LOOKBACK_DAYS: i64 = 7;

/// Length of the trailing accumulation window in hours
const TRAILING_WINDOW_HOURS: i64 = 24;

/// Returns the start of the trailing accumulation window for an
/// observation time. Rainfall strictly after this instant counts
/// towards the 24 hour total.
///
/// # Arguments
///
/// * 'observed_at' - the observation time anchoring the window
pub fn window_start(observed_at: NaiveDateTime) -> NaiveDateTime {
    observed_at - TimeDelta::hours(TRAILING_WINDOW_HOURS)
}

/// Counts consecutive days of significant rainfall, walking backward
/// from the most recent day with any data.
///
/// The input is the per day rainfall totals as returned by the store,
/// most recent first. For index i the expected day is the anchor minus
/// i days; a day earlier than expected means a day without data was
/// skipped over, which ends the streak, as does a day below the
/// significance threshold. The grouped store query yields distinct,
/// strictly descending days, so a day later than expected only occurs
/// on a malformed log; such a record is skipped without ending the walk.
///
/// # Arguments
///
/// * 'daily_totals' - (day, rainfall sum) pairs, most recent first
pub fn rainy_streak(daily_totals: &[(NaiveDate, f64)]) -> u32 {
    let Some(&(anchor, _)) = daily_totals.first() else {
        return 0;
    };

    let mut streak = 0;
    for (i, &(day, total)) in daily_totals.iter().enumerate() {
        let expected = anchor - TimeDelta::days(i as i64);

        if day == expected && total >= SIGNIFICANT_DAILY_MM {
            streak += 1;
        } else if day > expected {
            continue;
        } else {
            break;
        }
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn anchor_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    /// Builds a totals list from (days before the anchor, rainfall) pairs
    fn totals(offsets: &[(i64, f64)]) -> Vec<(NaiveDate, f64)> {
        offsets
            .iter()
            .map(|&(back, mm)| (anchor_day() - TimeDelta::days(back), mm))
            .collect()
    }

    #[test]
    fn test_no_history_gives_zero_streak() {
        assert_eq!(rainy_streak(&[]), 0);
    }

    #[test]
    fn test_contiguous_significant_days_count_until_first_dry_day() {
        // Day 2 is below the threshold and ends the streak even though
        // day 3 would qualify again.
        let days = totals(&[(0, 12.0), (1, 11.0), (2, 5.0), (3, 20.0)]);
        assert_eq!(rainy_streak(&days), 2);
    }

    #[test]
    fn test_missing_day_ends_the_streak() {
        // The day before the anchor has no data at all, so only the
        // anchor day counts.
        let days = totals(&[(0, 20.0), (2, 20.0)]);
        assert_eq!(rainy_streak(&days), 1);
    }

    #[test]
    fn test_dry_most_recent_day_gives_zero_streak() {
        let days = totals(&[(0, 4.5), (1, 25.0), (2, 25.0)]);
        assert_eq!(rainy_streak(&days), 0);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(rainy_streak(&totals(&[(0, 10.0)])), 1);
        assert_eq!(rainy_streak(&totals(&[(0, 9.99)])), 0);
    }

    #[test]
    fn test_full_lookback_week_counts_seven() {
        let days = totals(&[
            (0, 12.0),
            (1, 14.5),
            (2, 10.0),
            (3, 31.0),
            (4, 11.2),
            (5, 18.0),
            (6, 10.1),
        ]);
        assert_eq!(rainy_streak(&days), 7);
    }

    #[test]
    fn test_duplicate_day_is_skipped_without_ending_the_walk() {
        // Duplicate days cannot come out of the grouped store query;
        // a malformed log must not corrupt the count.
        let days = totals(&[(0, 12.0), (0, 11.0), (1, 20.0)]);
        assert_eq!(rainy_streak(&days), 1);
    }

    #[test]
    fn test_window_start_is_24_hours_back() {
        let observed = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 4, 30)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(window_start(observed), expected);
    }

    #[test]
    fn test_window_start_crosses_month_boundary() {
        let observed = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        assert_eq!(window_start(observed), expected);
    }
}
