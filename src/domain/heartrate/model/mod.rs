use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One heart-rate observation with a fully resolved timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Wall-clock time of day as the vendor reported it (`HH:MM`).
    /// Empty for samples synthesized by the gap-fill scan.
    pub clock_time: String,
    /// Absolute instant; the authoritative ordering key.
    pub timestamp: DateTime<Utc>,
    /// Beats per minute, never negative.
    pub value: i32,
}

impl Sample {
    pub fn new(clock_time: impl Into<String>, timestamp: DateTime<Utc>, value: i32) -> Self {
        Self {
            clock_time: clock_time.into(),
            timestamp,
            value,
        }
    }

    /// A gap-fill insertion carrying forward the previous value.
    pub fn synthesized(timestamp: DateTime<Utc>, value: i32) -> Self {
        Self {
            clock_time: String::new(),
            timestamp,
            value,
        }
    }

    pub fn is_synthesized(&self) -> bool {
        self.clock_time.is_empty()
    }
}

/// Failures while normalizing the raw vendor series.
///
/// Both are local and non-fatal: the caller falls back to the placeholder
/// banner instead of failing the serving process.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A raw clock-time string could not be split into numeric hour/minute.
    #[error("unparseable clock time {raw:?}: {reason}")]
    Parse { raw: String, reason: String },

    /// The gap-fill scan would exceed its bounded output length, meaning the
    /// input never realigns with the expected sample phase.
    #[error("gap fill exceeded bounded length of {max_len} samples: {detail}")]
    DataQuality { max_len: usize, detail: String },
}
