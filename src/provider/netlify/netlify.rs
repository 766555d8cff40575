use async_trait::async_trait;
use serde::Deserialize;
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::record::Record;

use super::restful_cli::{BASE_URL, NetlifyClient};
use super::serializer::{NetlifyRecord, NetlifyZone, RecordPatch};

#[derive(Clone, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Auth {
    #[serde(alias = "api_token", alias = "personal_access_token")]
    ApiToken(String),
}

// keep tokens out of logs
impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Auth::ApiToken(_) => f.write_str("ApiToken(***)"),
        }
    }
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetlifyCfg {
    pub authentication: Auth,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl TryFrom<YamlValue> for NetlifyCfg {
    type Error = Error;

    fn try_from(yaml: YamlValue) -> std::result::Result<Self, Self::Error> {
        let cfg: NetlifyCfg = serde_yaml::from_value(yaml)?;
        Ok(cfg)
    }
}

/// Netlify DNS behind the provider-agnostic [`Provider`] interface.
pub struct Netlify {
    cli: NetlifyClient,
}

impl Netlify {
    pub fn new(cli: NetlifyClient) -> Self {
        Self { cli }
    }

    pub fn from_cfg(cfg: NetlifyCfg) -> Self {
        let cli = NetlifyClient::new(cfg.authentication).with_base_url(&cfg.base_url);
        Self { cli }
    }

    pub fn client(&self) -> &NetlifyClient {
        &self.cli
    }

    pub async fn resolve_zone(&self, name: &str) -> Result<NetlifyZone> {
        self.cli.resolve_zone(name).await
    }
}

#[async_trait]
impl Provider for Netlify {
    async fn get_records(
        &self,
        zone: &str,
        template: &Record,
        match_content: bool,
    ) -> Result<Vec<Record>> {
        let zone = self.cli.resolve_zone(zone).await?;
        let records = self.cli.list_records(&zone, template, match_content).await?;
        Ok(records.into_iter().map(|r| r.into_record(&zone)).collect())
    }

    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record> {
        let zone = self.cli.resolve_zone(zone).await?;
        let created = self.cli.create_record(&zone, record).await?;
        Ok(created.into_record(&zone))
    }

    async fn update_record(&self, zone: &str, old: &Record, new: &Record) -> Result<Record> {
        let zone = self.cli.resolve_zone(zone).await?;
        let target = NetlifyRecord {
            id: old.id.clone(),
            dns_zone_id: Some(zone.id.clone()),
            ..Default::default()
        };
        let patch = RecordPatch::from_record(new, &zone);
        let updated = self.cli.update_record(&target, &patch).await?;
        Ok(updated.into_record(&zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_netlify_cfg_parse() {
        let yaml = r#"
authentication:
  type: api_token
  value: "nfp_1234567890"
"#;
        let value: YamlValue = serde_yaml::from_str(yaml).unwrap();
        let cfg = NetlifyCfg::try_from(value).unwrap();
        assert_eq!(cfg.base_url, BASE_URL);
        let Auth::ApiToken(token) = cfg.authentication;
        assert_eq!(token, "nfp_1234567890");
    }

    #[test]
    fn test_netlify_cfg_custom_base_url() {
        let yaml = r#"
authentication:
  type: ApiToken
  value: "abc"
base_url: "http://127.0.0.1:8080/api/v1"
"#;
        let cfg: NetlifyCfg = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.base_url, "http://127.0.0.1:8080/api/v1");
    }

    #[test]
    fn test_auth_debug_hides_token() {
        let auth = Auth::ApiToken("secret".to_string());
        assert!(!format!("{:?}", auth).contains("secret"));
    }
}
