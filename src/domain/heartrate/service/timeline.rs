//! Calendar-date reconstruction for the vendor's date-less `HH:MM` samples.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::domain::heartrate::model::NormalizeError;

/// The date/time range requested from the vendor for one fetch cycle.
///
/// Spans `look_back_hours` ending at "now" in the caller's UTC offset. The
/// date and time strings are in the exact shape the intraday endpoint wants
/// (`YYYY-MM-DD` and `HH:MM`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWindow {
    pub start_date: NaiveDate,
    pub start_time: String,
    pub end_date: NaiveDate,
    pub end_time: String,
    pub look_back_hours: i64,
}

impl QueryWindow {
    /// Build the window ending at `now`, reaching back `look_back_hours`.
    pub fn ending_at(now: DateTime<FixedOffset>, look_back_hours: i64) -> Self {
        let start = now - Duration::hours(look_back_hours);
        Self {
            start_date: start.date_naive(),
            start_time: start.format("%H:%M").to_string(),
            end_date: now.date_naive(),
            end_time: now.format("%H:%M").to_string(),
            look_back_hours,
        }
    }

    /// True when the window starts on the previous calendar day.
    pub fn crosses_midnight(&self) -> bool {
        self.start_date != self.end_date
    }
}

/// Attach the correct calendar date to a raw `HH:MM` sample.
///
/// The vendor omits the date component, so when the query window crosses
/// midnight the day has to be inferred: a sample whose hour is strictly
/// greater than the look-back hours can only have come from the previous
/// day. The comparison of an hour against a duration is an approximation
/// that holds because look-back windows are small whole-hour spans; it is
/// preserved as-is for vendor compatibility and breaks down for windows
/// over 24 h or fractional-hour spans (neither is supported).
///
/// The resulting instant is composed in UTC from the inferred date plus the
/// verbatim hour/minute; the caller already requested the series in the
/// desired zone offset, so no conversion happens here.
pub fn resolve_timestamp(
    clock_time: &str,
    window: &QueryWindow,
    now: DateTime<FixedOffset>,
) -> Result<DateTime<Utc>, NormalizeError> {
    let (hour, minute) = parse_clock_time(clock_time)?;

    let mut day = now.date_naive();
    if window.crosses_midnight() && hour > window.look_back_hours as u32 {
        day = (now - Duration::hours(24)).date_naive();
    }

    Utc.with_ymd_and_hms(day.year(), day.month(), day.day(), hour, minute, 0)
        .single()
        .ok_or_else(|| NormalizeError::Parse {
            raw: clock_time.to_string(),
            reason: "resolved to an invalid calendar instant".into(),
        })
}

/// Split `HH:MM` (the vendor also sends `HH:MM:SS`) into numeric parts.
fn parse_clock_time(raw: &str) -> Result<(u32, u32), NormalizeError> {
    let mut parts = raw.split(':');

    let hour = parse_component(raw, parts.next(), "hour")?;
    let minute = parse_component(raw, parts.next(), "minute")?;

    if hour > 23 || minute > 59 {
        return Err(NormalizeError::Parse {
            raw: raw.to_string(),
            reason: format!("out-of-range components {hour}:{minute}"),
        });
    }

    Ok((hour, minute))
}

fn parse_component(
    raw: &str,
    part: Option<&str>,
    which: &str,
) -> Result<u32, NormalizeError> {
    let text = part.ok_or_else(|| NormalizeError::Parse {
        raw: raw.to_string(),
        reason: format!("missing {which} component"),
    })?;

    text.parse::<u32>().map_err(|_| NormalizeError::Parse {
        raw: raw.to_string(),
        reason: format!("non-numeric {which} component {text:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn fixed_now(hour: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2021, 3, 7, hour, 30, 0)
            .unwrap()
    }

    #[test]
    fn window_ending_at_now_spans_look_back() {
        let now = fixed_now(12);
        let window = QueryWindow::ending_at(now, 4);

        assert_eq!(window.start_time, "08:30");
        assert_eq!(window.end_time, "12:30");
        assert_eq!(window.start_date, window.end_date);
        assert!(!window.crosses_midnight());
    }

    #[test]
    fn window_crossing_midnight_starts_yesterday() {
        let now = fixed_now(2);
        let window = QueryWindow::ending_at(now, 4);

        assert_eq!(window.start_time, "22:30");
        assert!(window.crosses_midnight());
    }

    #[test]
    fn sample_after_threshold_resolves_to_yesterday() {
        // Window 22:30 yesterday -> 02:30 today, look-back 4 h. Hour 5 > 4,
        // so a 05:12 sample can only be from the previous day.
        let now = fixed_now(2);
        let window = QueryWindow::ending_at(now, 4);

        let resolved = resolve_timestamp("05:12", &window, now).unwrap();
        assert_eq!(resolved.date_naive(), NaiveDate::from_ymd_opt(2021, 3, 6).unwrap());
        assert_eq!((resolved.hour(), resolved.minute()), (5, 12));
    }

    #[test]
    fn sample_within_threshold_resolves_to_today() {
        let now = fixed_now(2);
        let window = QueryWindow::ending_at(now, 4);

        let resolved = resolve_timestamp("02:05", &window, now).unwrap();
        assert_eq!(resolved.date_naive(), NaiveDate::from_ymd_opt(2021, 3, 7).unwrap());
    }

    #[test]
    fn same_day_window_never_shifts_the_date() {
        let now = fixed_now(12);
        let window = QueryWindow::ending_at(now, 4);

        // Hour 23 > 4, but the window never crossed midnight.
        let resolved = resolve_timestamp("23:59", &window, now).unwrap();
        assert_eq!(resolved.date_naive(), NaiveDate::from_ymd_opt(2021, 3, 7).unwrap());
    }

    #[test]
    fn seconds_component_is_tolerated() {
        let now = fixed_now(12);
        let window = QueryWindow::ending_at(now, 4);

        let resolved = resolve_timestamp("14:39:00", &window, now).unwrap();
        assert_eq!((resolved.hour(), resolved.minute()), (14, 39));
    }

    #[test]
    fn malformed_clock_times_fail_with_parse_error() {
        let now = fixed_now(12);
        let window = QueryWindow::ending_at(now, 4);

        for raw in ["", "14", "aa:30", "14:bb", "25:00", "14:75"] {
            let err = resolve_timestamp(raw, &window, now).unwrap_err();
            assert!(
                matches!(err, NormalizeError::Parse { .. }),
                "expected parse error for {raw:?}, got {err:?}"
            );
        }
    }
}
