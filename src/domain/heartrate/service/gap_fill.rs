//! Gap filling over the resolved minute series.
//!
//! The vendor skips minutes where no reading synced; the plot axis needs one
//! sample per interval so tick marks can be derived purely from timestamp
//! modulo arithmetic. Missing slots are synthesized by carrying the previous
//! value forward, never by interpolating.

use crate::domain::heartrate::model::{NormalizeError, Sample};

/// Fill every missing slot so adjacent samples differ by exactly
/// `gap_interval` seconds.
///
/// The scan is anchored to the first sample's phase: `expected` advances by
/// one interval per step regardless of insertions, which keeps every output
/// timestamp on the same modular boundary as the first data point. Downstream
/// tick generation relies on that (`ts % 3600` / `ts % 900`).
///
/// The output is built into a fresh buffer and bounded by
/// `(last - first) / gap_interval + 1`; input that never lands on the
/// expected phase (clock skew, non-minute-aligned vendor data) surfaces as
/// [`NormalizeError::DataQuality`] instead of inserting without bound.
pub fn fill_gaps(samples: Vec<Sample>, gap_interval: i64) -> Result<Vec<Sample>, NormalizeError> {
    if samples.len() <= 1 {
        return Ok(samples);
    }

    let first = samples[0].timestamp.timestamp();
    let last = samples[samples.len() - 1].timestamp.timestamp();
    if last <= first {
        // Misdated input, e.g. a cross-midnight sample resolved onto the
        // wrong day. The length bound below is meaningless for it.
        return Err(NormalizeError::DataQuality {
            max_len: samples.len(),
            detail: format!("series not ascending: first unix {first}, last unix {last}"),
        });
    }
    let max_len = ((last - first) / gap_interval + 1) as usize;

    let mut filled: Vec<Sample> = Vec::with_capacity(max_len);
    let mut iter = samples.into_iter();
    let Some(head) = iter.next() else {
        return Ok(filled);
    };
    filled.push(head);

    let mut expected = first + gap_interval;
    for sample in iter {
        let ts = sample.timestamp.timestamp();

        while expected < ts {
            if filled.len() >= max_len {
                return Err(NormalizeError::DataQuality {
                    max_len,
                    detail: format!(
                        "synthesizing past sample at unix {ts}, expected slot {expected}"
                    ),
                });
            }
            let carried = filled[filled.len() - 1].value;
            filled.push(Sample::synthesized(timestamp_from_unix(expected), carried));
            expected += gap_interval;
        }

        if ts != expected {
            // expected stepped over the sample: it sits off-phase between
            // two slots, or repeats/precedes an earlier timestamp.
            return Err(NormalizeError::DataQuality {
                max_len,
                detail: format!(
                    "sample at unix {ts} misaligned with expected slot {expected}"
                ),
            });
        }

        filled.push(sample);
        expected += gap_interval;
    }

    Ok(filled)
}

fn timestamp_from_unix(unix: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp(unix, 0).expect("unix seconds within chrono range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(unix: i64, value: i32) -> Sample {
        // A real (non-synthesized) sample carries its vendor clock time.
        let clock = format!("{:02}:{:02}", (unix / 3600) % 24, (unix / 60) % 60);
        Sample::new(clock, timestamp_from_unix(unix), value)
    }

    fn assert_uniform_spacing(filled: &[Sample], interval: i64) {
        for pair in filled.windows(2) {
            assert_eq!(
                pair[1].timestamp.timestamp() - pair[0].timestamp.timestamp(),
                interval,
                "non-uniform gap between {} and {}",
                pair[0].timestamp,
                pair[1].timestamp
            );
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(fill_gaps(Vec::new(), 60).unwrap(), Vec::new());
    }

    #[test]
    fn single_sample_is_untouched() {
        let input = vec![sample(60, 72)];
        assert_eq!(fill_gaps(input.clone(), 60).unwrap(), input);
    }

    #[test]
    fn contiguous_input_is_returned_unchanged() {
        let input: Vec<Sample> = (1..=6).map(|i| sample(i * 60, 60 + i as i32)).collect();
        let filled = fill_gaps(input.clone(), 60).unwrap();
        assert_eq!(filled, input);
        assert!(filled.iter().all(|s| !s.is_synthesized()));
    }

    #[test]
    fn gaps_carry_the_previous_value_forward() {
        // Minutes 1, 2, 6: slots 3-5 are missing and must repeat 120.
        let input = vec![sample(60, 60), sample(120, 120), sample(360, 360)];
        let filled = fill_gaps(input, 60).unwrap();

        let got: Vec<(i64, i32)> = filled
            .iter()
            .map(|s| (s.timestamp.timestamp(), s.value))
            .collect();
        assert_eq!(
            got,
            vec![(60, 60), (120, 120), (180, 120), (240, 120), (300, 120), (360, 360)]
        );

        assert!(!filled[1].is_synthesized());
        assert!(filled[2].is_synthesized());
        assert!(filled[3].is_synthesized());
        assert!(filled[4].is_synthesized());
        assert!(!filled[5].is_synthesized());
    }

    #[test]
    fn length_law_holds_for_sparse_input() {
        // 100 contiguous minutes with six interior samples removed.
        let original: Vec<Sample> = (0..100).map(|i| sample(i * 60, 70)).collect();
        let mut sparse = original.clone();
        for idx in [67, 25, 8, 7, 6, 5] {
            sparse.remove(idx);
        }

        let filled = fill_gaps(sparse, 60).unwrap();
        assert_eq!(filled.len(), original.len());
        for (got, want) in filled.iter().zip(&original) {
            assert_eq!(got.timestamp, want.timestamp);
        }
        assert_uniform_spacing(&filled, 60);
    }

    #[test]
    fn fifteen_minute_outage_is_filled() {
        let base = Utc.with_ymd_and_hms(2021, 3, 6, 16, 49, 0).unwrap();
        let input = vec![
            Sample::new("16:49", base, 5),
            Sample::new("16:50", base + chrono::Duration::minutes(1), 8),
            Sample::new("17:05", base + chrono::Duration::minutes(16), 8),
            Sample::new("17:06", base + chrono::Duration::minutes(17), 8),
        ];

        let filled = fill_gaps(input, 60).unwrap();
        assert_eq!(filled.len(), 18);
        assert_uniform_spacing(&filled, 60);
        // Everything synthesized in the outage repeats the last real reading.
        assert!(filled[2..16].iter().all(|s| s.is_synthesized() && s.value == 8));
    }

    #[test]
    fn misaligned_sample_is_a_data_quality_error() {
        // 90 is off the 60-second phase anchored at 60.
        let input = vec![sample(60, 70), sample(90, 71), sample(180, 72)];
        let err = fill_gaps(input, 60).unwrap_err();
        assert!(matches!(err, NormalizeError::DataQuality { .. }));
    }

    #[test]
    fn descending_input_is_a_data_quality_error() {
        // A 06:00 sample misdated onto today precedes today's 01:00 sample.
        let input = vec![sample(21_600, 70), sample(3_600, 71)];
        let err = fill_gaps(input, 60).unwrap_err();
        assert!(matches!(err, NormalizeError::DataQuality { .. }));
    }

    #[test]
    fn duplicate_timestamp_is_a_data_quality_error() {
        let input = vec![sample(60, 70), sample(120, 71), sample(120, 72)];
        let err = fill_gaps(input, 60).unwrap_err();
        assert!(matches!(err, NormalizeError::DataQuality { .. }));
    }
}
