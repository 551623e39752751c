//! Axis tick generation over the gap-filled series.
//!
//! Works purely on unix timestamps: because the series is phase-anchored to
//! its first sample, hour and quarter-hour marks are exactly the samples
//! whose timestamp is divisible by 3600/900.

use chrono::DateTime;

/// One tick mark on the time axis. `label == None` renders a minor tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub timestamp: i64,
    pub label: Option<String>,
}

/// Two hours; below this span the quarter-hour marks get labels.
const SHORT_SPAN_SECS: i64 = 3600 * 2;

pub fn generate_ticks(timestamps: &[i64]) -> Vec<Tick> {
    let (Some(&first), Some(&last)) = (timestamps.first(), timestamps.last()) else {
        return Vec::new();
    };

    let mut ticks = Vec::new();
    if last - first <= SHORT_SPAN_SECS {
        for (i, &ts) in timestamps.iter().enumerate() {
            if i == 0 {
                // First tick always labelled, minute precision.
                ticks.push(Tick {
                    timestamp: ts,
                    label: Some(format_label(ts)),
                });
            } else if ts % 900 == 0 {
                ticks.push(Tick {
                    timestamp: ts,
                    label: Some(format_label(ts)),
                });
            }
        }
        return ticks;
    }

    for &ts in timestamps {
        if ts % 3600 == 0 {
            ticks.push(Tick {
                timestamp: ts,
                label: Some(format_label(ts)),
            });
        } else if ts % 900 == 0 {
            ticks.push(Tick {
                timestamp: ts,
                label: None,
            });
        }
    }
    ticks
}

fn format_label(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minute_series(start: i64, minutes: i64) -> Vec<i64> {
        (0..minutes).map(|i| start + i * 60).collect()
    }

    #[test]
    fn empty_series_has_no_ticks() {
        assert!(generate_ticks(&[]).is_empty());
    }

    #[test]
    fn long_span_labels_hours_and_marks_quarters() {
        // 16:30 -> 20:30 UTC on 2021-03-06.
        let start = 1_615_048_200;
        let ticks = generate_ticks(&minute_series(start, 241));

        let labelled: Vec<&Tick> = ticks.iter().filter(|t| t.label.is_some()).collect();
        let minor: Vec<&Tick> = ticks.iter().filter(|t| t.label.is_none()).collect();

        assert_eq!(labelled.len(), 4); // 17:00 18:00 19:00 20:00
        assert_eq!(labelled[0].label.as_deref(), Some("17:00"));
        assert!(labelled.iter().all(|t| t.timestamp % 3600 == 0));
        assert!(minor.iter().all(|t| t.timestamp % 900 == 0 && t.timestamp % 3600 != 0));
    }

    #[test]
    fn short_span_labels_quarter_hours_and_the_first_point() {
        // 90 minutes starting off a quarter boundary at 16:34.
        let start = 1_615_048_200 + 4 * 60;
        let ticks = generate_ticks(&minute_series(start, 91));

        assert!(ticks.iter().all(|t| t.label.is_some()));
        assert_eq!(ticks[0].timestamp, start);
        assert_eq!(ticks[0].label.as_deref(), Some("16:34"));
        assert!(ticks[1..].iter().all(|t| t.timestamp % 900 == 0));
    }

    #[test]
    fn phase_anchoring_puts_ticks_on_sample_timestamps() {
        let start = 1_615_048_200; // 16:30, on a 900s boundary
        let ticks = generate_ticks(&minute_series(start, 241));
        let series = minute_series(start, 241);
        assert!(ticks.iter().all(|t| series.contains(&t.timestamp)));
    }
}
