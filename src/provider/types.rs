use async_trait::async_trait;

use crate::error::Result;
use crate::record::Record;

/// Provider-agnostic record management for one DNS hosting provider.
/// Zones are addressed by name; record names are relative to the zone.
#[async_trait]
pub trait Provider {
    /// Records in `zone` sharing `template`'s type and name, and its value
    /// too when `match_content` is set.
    async fn get_records(
        &self,
        zone: &str,
        template: &Record,
        match_content: bool,
    ) -> Result<Vec<Record>>;

    async fn create_record(&self, zone: &str, record: &Record) -> Result<Record>;

    /// Changes the non-empty fields of `new` on the record identified by
    /// `old.id`.
    async fn update_record(&self, zone: &str, old: &Record, new: &Record) -> Result<Record>;

    /// Creates every record in order, stopping at the first failure.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            created.push(self.create_record(zone, record).await?);
        }
        Ok(created)
    }

    /// Upserts every record: updates the first existing record with the
    /// same type and name, or creates one when there is none.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut ret = Vec::with_capacity(records.len());
        for record in records {
            let existing = self.get_records(zone, record, false).await?;
            let rec = match existing.into_iter().next() {
                Some(old) => self.update_record(zone, &old, record).await?,
                None => self.create_record(zone, record).await?,
            };
            ret.push(rec);
        }
        Ok(ret)
    }
}
