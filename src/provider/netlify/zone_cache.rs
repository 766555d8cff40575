use std::collections::HashMap;
use std::future::Future;

use tokio::sync::Mutex;

use crate::error::Result;

use super::serializer::NetlifyZone;

/// Zones resolved so far, keyed by normalized zone name. Entries are never
/// evicted. A single lock is held for a whole lookup-or-fetch, so two
/// resolutions never race, even for different names.
#[derive(Debug, Default)]
pub struct ZoneCache {
    zones: Mutex<HashMap<String, NetlifyZone>>,
}

impl ZoneCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached zone for `name`, or runs `fetch` and stores its
    /// result. A failed fetch leaves the cache untouched.
    pub async fn get_or_try_insert<F, Fut>(&self, name: &str, fetch: F) -> Result<NetlifyZone>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<NetlifyZone>>,
    {
        let mut zones = self.zones.lock().await;

        if let Some(zone) = zones.get(name) {
            log::debug!("zone cache hit: {}", name);
            return Ok(zone.clone());
        }

        let zone = fetch().await?;
        zones.insert(name.to_string(), zone.clone());
        Ok(zone)
    }

    pub async fn get(&self, name: &str) -> Option<NetlifyZone> {
        self.zones.lock().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.zones.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.zones.lock().await.is_empty()
    }
}
