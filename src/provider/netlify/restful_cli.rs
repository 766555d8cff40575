use std::sync::Arc;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::record::{Record, absolute_name, normalize_zone_name};
use crate::wrapper::http::{Client, Header, HeaderKey, HttpSend, Method, Request};

use super::netlify::Auth;
use super::serializer::{NetlifyRecord, NetlifyZone, RecordPatch};
use super::zone_cache::ZoneCache;

pub const BASE_URL: &str = "https://api.netlify.com/api/v1";

impl From<&Auth> for Header {
    fn from(auth: &Auth) -> Self {
        match auth {
            Auth::ApiToken(api_token) => {
                Header::new(HeaderKey::Authorization, format!("Bearer {}", api_token))
            }
        }
    }
}

/// Low-level Netlify DNS client working on wire records.
///
/// Every call is a single attempt: failed requests are reported, never
/// retried. Dropping a returned future aborts the request in flight.
pub struct NetlifyClient {
    auth: Auth,
    base_url: String,
    cli: Arc<dyn HttpSend>,
    zones: ZoneCache,
}

impl NetlifyClient {
    pub fn new(auth: Auth) -> Self {
        Self {
            auth,
            base_url: BASE_URL.to_string(),
            cli: Arc::new(Client::new()),
            zones: ZoneCache::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_http(mut self, cli: Arc<dyn HttpSend>) -> Self {
        self.cli = cli;
        self
    }

    pub fn zone_cache(&self) -> &ZoneCache {
        &self.zones
    }

    /// Appends each of `segments` to the base url as one escaped path segment.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::ParseError(format!("bad base url {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::ParseError(format!("base url cannot have a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Attaches credentials, performs the round trip and returns the raw
    /// body of any response with a status below 400.
    async fn do_api_request(&self, mut req: Request) -> Result<Vec<u8>> {
        req.headers.push(Header::from(&self.auth));

        let method = req.method;
        let url = req.url.clone();
        log::debug!("{} {}", method.as_str(), url);

        let resp = self
            .cli
            .send(req)
            .await
            .inspect_err(|e| log::error!("{} {} failed: {}", method.as_str(), url, e))?;
        log::debug!("{} {} -> HTTP {}", method.as_str(), url, resp.status);

        resp.into_body()
            .inspect_err(|e| log::error!("{} {}: {}", method.as_str(), url, e))
    }

    async fn request_json<T: DeserializeOwned>(&self, req: Request) -> Result<T> {
        let body = self.do_api_request(req).await?;
        serde_json::from_slice(&body).map_err(|e| {
            log::error!("cannot decode netlify response: {}", e);
            Error::DecodeError(e.to_string())
        })
    }

    fn encode<T: serde::Serialize>(value: &T) -> Result<String> {
        serde_json::to_string(value).map_err(|e| {
            log::error!("cannot encode netlify request: {}", e);
            Error::EncodeError(e.to_string())
        })
    }
}

////////////////////////////////////////////////////////////
// Zones
////////////////////////////////////////////////////////////
impl NetlifyClient {
    /// Maps a zone name to its Netlify zone, hitting the API only the first
    /// time a name is seen by this client.
    pub async fn resolve_zone(&self, name: &str) -> Result<NetlifyZone> {
        let name = normalize_zone_name(name);
        self.zones
            .get_or_try_insert(name, || self.fetch_zone(name))
            .await
    }

    async fn fetch_zone(&self, name: &str) -> Result<NetlifyZone> {
        let url = self.endpoint(&["dns_zones"], &[("name", name)])?;
        let zones: Vec<NetlifyZone> = self.request_json(Request::new(Method::Get, url)).await?;

        if zones.len() != 1 {
            let err = Error::ZoneLookupError {
                name: name.to_string(),
                count: zones.len(),
            };
            log::error!("{}", err);
            return Err(err);
        }

        Ok(zones.into_iter().next().unwrap_or_default())
    }
}

////////////////////////////////////////////////////////////
// Records
////////////////////////////////////////////////////////////
impl NetlifyClient {
    /// Lists the zone's records matching `record`'s type and absolute name,
    /// and also its value when `match_content` is set.
    pub async fn list_records(
        &self,
        zone: &NetlifyZone,
        record: &Record,
        match_content: bool,
    ) -> Result<Vec<NetlifyRecord>> {
        let name = absolute_name(&record.name, &zone.name);
        let mut query = vec![("type", record.r#type.as_str()), ("name", name.as_str())];
        if match_content {
            query.push(("content", record.value.as_str()));
        }

        let url = self.endpoint(&["zones", zone.id.as_str(), "dns_records"], &query)?;
        self.request_json(Request::new(Method::Get, url)).await
    }

    /// Creates `record` in `zone`. Not idempotent: calling it twice creates
    /// two records.
    pub async fn create_record(&self, zone: &NetlifyZone, record: &Record) -> Result<NetlifyRecord> {
        let body = Self::encode(&NetlifyRecord::from_record(record, zone))?;
        let url = self.endpoint(&["dns_zones", zone.id.as_str(), "dns_records"], &[])?;
        self.request_json(Request::new(Method::Post, url).with_json(body))
            .await
    }

    /// Applies `patch` to `old`, which must carry both its record ID and zone
    /// ID (as returned by [`list_records`](Self::list_records) or
    /// [`create_record`](Self::create_record)).
    pub async fn update_record(
        &self,
        old: &NetlifyRecord,
        patch: &RecordPatch,
    ) -> Result<NetlifyRecord> {
        let id = old.id.as_deref().filter(|id| !id.is_empty());
        let zone_id = old.dns_zone_id.as_deref().filter(|id| !id.is_empty());
        let (Some(id), Some(zone_id)) = (id, zone_id) else {
            let err = Error::InvalidRecord(format!(
                "record to update needs an id and a zone id: {:?}",
                old
            ));
            log::error!("{}", err);
            return Err(err);
        };

        let body = Self::encode(patch)?;
        let url = self.endpoint(&["dns_zones", zone_id, "dns_records", id], &[])?;

        // PUT would reset every field left out of the body
        self.request_json(Request::new(Method::Patch, url).with_json(body))
            .await
    }
}
