use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

/// In-memory cache of the most recent render, shared across requests.
///
/// One slot is enough: a deployment serves exactly one banner. Requests
/// inside the TTL get the cached markup without touching the vendor API.
pub struct BannerCache {
    slot: RwLock<Option<CachedBanner>>,
}

#[derive(Clone)]
struct CachedBanner {
    svg: String,
    generated_at: DateTime<Utc>,
}

impl BannerCache {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// The cached SVG if it is younger than `ttl_secs`.
    pub async fn get_fresh(&self, ttl_secs: i64) -> Option<String> {
        let slot = self.slot.read().await;
        slot.as_ref().and_then(|cached| {
            if Utc::now() - cached.generated_at < Duration::seconds(ttl_secs) {
                Some(cached.svg.clone())
            } else {
                None
            }
        })
    }

    pub async fn store(&self, svg: String) {
        let mut slot = self.slot.write().await;
        *slot = Some(CachedBanner {
            svg,
            generated_at: Utc::now(),
        });
    }
}

impl Default for BannerCache {
    fn default() -> Self {
        Self::new()
    }
}
