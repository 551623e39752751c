//! The fetch → resolve → gap-fill pipeline behind every banner render.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, info};

use crate::core::client::fitbit_client::{FetchError, FitbitClient, RawDatapoint};
use crate::core::persistence::credentials::credential_repository::CredentialApiRepository;
use crate::core::persistence::settings::banner_setting_entity::BannerSettingEntity;
use crate::domain::heartrate::model::{NormalizeError, Sample};
use crate::domain::heartrate::service::gap_fill::fill_gaps;
use crate::domain::heartrate::service::timeline::{resolve_timestamp, QueryWindow};

/// The vendor returns 1-minute granularity.
pub const GAP_INTERVAL_SECS: i64 = 60;

/// Fetch the configured look-back of heart-rate data and normalize it into a
/// gap-free minute series. On the vendor's token-expired signal the refresh
/// grant runs once, the renewed credentials are persisted, and the fetch is
/// retried.
pub async fn heart_rate_series(
    client: &FitbitClient,
    credentials: &dyn CredentialApiRepository,
    settings: &BannerSettingEntity,
) -> Result<Vec<Sample>> {
    let app = credentials.app_adapter().read()?;
    if !app.is_configured() {
        return Err(anyhow!("app credentials not configured; run setup first"));
    }
    let user = credentials.user_adapter().read()?;
    if !user.is_configured() {
        return Err(anyhow!("user credentials not configured; run setup first"));
    }

    let offset = FixedOffset::east_opt(settings.utc_offset_hours * 3600)
        .ok_or_else(|| anyhow!("invalid UTC offset {}", settings.utc_offset_hours))?;
    let now = Utc::now().with_timezone(&offset);
    let window = QueryWindow::ending_at(now, settings.look_back_hours);
    debug!(
        start = %window.start_date, end = %window.end_date,
        "fetching intraday series {} -> {}", window.start_time, window.end_time
    );

    let raw = match client.fetch_intraday(&user, &window).await {
        Ok(series) => series,
        Err(FetchError::TokenExpired) => {
            info!("access token expired, running refresh grant");
            let renewed = client
                .refresh_credentials(&app, &user.refresh_token)
                .await
                .context("error refreshing tokens and credentials")?;
            credentials
                .user_adapter()
                .write(&renewed)
                .context("error persisting refreshed credentials")?;
            client
                .fetch_intraday(&renewed, &window)
                .await
                .context("error grabbing heartrate data after token refresh")?
        }
        Err(e) => return Err(anyhow!(e).context("error grabbing heartrate data")),
    };

    let samples = normalize_dataset(raw.intraday.dataset, &window, now)?;
    Ok(samples)
}

/// Pure half of the pipeline: attach dates to the raw datapoints, then fill
/// the gaps. Split out so it is testable without a network.
pub fn normalize_dataset(
    dataset: Vec<RawDatapoint>,
    window: &QueryWindow,
    now: DateTime<FixedOffset>,
) -> Result<Vec<Sample>, NormalizeError> {
    let mut samples = Vec::with_capacity(dataset.len());
    for point in dataset {
        let timestamp = resolve_timestamp(&point.time, window, now)?;
        samples.push(Sample::new(point.time, timestamp, point.value));
    }

    fill_gaps(samples, GAP_INTERVAL_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn raw(time: &str, value: i32) -> RawDatapoint {
        RawDatapoint {
            time: time.to_string(),
            value,
        }
    }

    #[test]
    fn pipeline_future_is_send() {
        use crate::core::persistence::credentials::credential_repository::CredentialRepository;

        fn assert_send<F: Send>(_f: F) {}

        let client = FitbitClient::default();
        let repo = CredentialRepository::new();
        let settings = BannerSettingEntity::default();
        assert_send(heart_rate_series(&client, &repo, &settings));
    }

    #[test]
    fn dataset_is_dated_and_gap_filled() {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2021, 3, 6, 16, 0, 0)
            .unwrap();
        let window = QueryWindow::ending_at(now, 4);

        let dataset = vec![raw("15:41:00", 77), raw("15:42:00", 76), raw("15:45:00", 81)];
        let samples = normalize_dataset(dataset, &window, now).unwrap();

        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].clock_time, "15:41:00");
        assert!(samples[2].is_synthesized());
        assert!(samples[3].is_synthesized());
        assert_eq!(samples[2].value, 76);
        assert_eq!(samples[3].value, 76);
        assert_eq!(samples[4].value, 81);
        assert_eq!(
            samples[4].timestamp,
            Utc.with_ymd_and_hms(2021, 3, 6, 15, 45, 0).unwrap()
        );
    }

    #[test]
    fn empty_dataset_yields_empty_series() {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2021, 3, 6, 16, 0, 0)
            .unwrap();
        let window = QueryWindow::ending_at(now, 4);

        let samples = normalize_dataset(Vec::new(), &window, now).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn bad_clock_time_surfaces_parse_error() {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2021, 3, 6, 16, 0, 0)
            .unwrap();
        let window = QueryWindow::ending_at(now, 4);

        let err = normalize_dataset(vec![raw("xx:00", 70)], &window, now).unwrap_err();
        assert!(matches!(err, NormalizeError::Parse { .. }));
    }
}
