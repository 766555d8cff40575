use serde::{Deserialize, Serialize};

use crate::record::{Record, absolute_name, relative_name};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetlifyZone {
    pub id: String,
    pub name: String,
}

/// A record as the Netlify API sends and receives it. `name` is absolute;
/// `id` and `dns_zone_id` only exist once the record has been created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetlifyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_zone_id: Option<String>,

    #[serde(default)]
    pub r#type: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl NetlifyRecord {
    pub fn from_record(record: &Record, zone: &NetlifyZone) -> Self {
        Self {
            id: None,
            dns_zone_id: None,
            r#type: record.r#type.clone(),
            name: absolute_name(&record.name, &zone.name),
            content: record.value.clone(),
            ttl: (record.ttl != 0).then_some(record.ttl),
        }
    }

    pub fn into_record(self, zone: &NetlifyZone) -> Record {
        Record {
            id: self.id,
            r#type: self.r#type,
            name: relative_name(&self.name, &zone.name),
            value: self.content,
            ttl: self.ttl.unwrap_or_default(),
        }
    }
}

/// Body of a partial update. Only `Some` fields go on the wire, so a PATCH
/// never resets a field the caller did not mean to touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.r#type.is_none() && self.name.is_none() && self.content.is_none() && self.ttl.is_none()
    }

    /// Builds a patch from a caller record, treating empty strings and a
    /// zero TTL as "leave unchanged".
    pub fn from_record(record: &Record, zone: &NetlifyZone) -> Self {
        Self {
            r#type: non_empty(&record.r#type),
            name: non_empty(&record.name).map(|name| absolute_name(&name, &zone.name)),
            content: non_empty(&record.value),
            ttl: (record.ttl != 0).then_some(record.ttl),
        }
    }
}

impl From<&NetlifyRecord> for RecordPatch {
    fn from(record: &NetlifyRecord) -> Self {
        Self {
            r#type: non_empty(&record.r#type),
            name: non_empty(&record.name),
            content: non_empty(&record.content),
            ttl: record.ttl.filter(|ttl| *ttl != 0),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
