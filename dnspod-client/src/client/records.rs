//! `Record.*` actions
//!
//! API docs: <https://www.dnspod.cn/docs/records.html>
//!
//! Only [`get_record`](DnspodClient::get_record) folds alias fields; list,
//! create and modify hand back the records exactly as decoded.

use std::collections::HashMap;

use crate::codec::{Normalize, reshape_lines};
use crate::error::Result;
use crate::types::{Record, RecordLine, RecordPage, RecordQuery, RecordsInfo};
use crate::utils::lenient::LooseValue;

use super::{DnspodClient, Resource};

impl DnspodClient {
    /// List records (`Record.List`).
    ///
    /// The page echoes `query.current_page` / `query.page_size`; records keep
    /// server order and are not normalized.
    pub async fn list_records(&self, query: &RecordQuery) -> Result<RecordPage> {
        let mut payload = self.payload();
        payload.record_query(query);

        let envelope = self
            .call(Resource::Record, "List", &payload, "could not list records")
            .await?;
        let info: RecordsInfo = envelope.optional("info")?;
        let list: Vec<Record> = envelope.optional("records")?;

        Ok(RecordPage {
            current_page: query.current_page,
            page_size: query.page_size,
            total: info.record_total,
            list,
        })
    }

    /// Create a record (`Record.Create`) under `domain_id`.
    pub async fn create_record(&self, domain_id: &str, record: &Record) -> Result<Record> {
        let mut payload = self.payload();
        payload.set("domain_id", domain_id).record_attributes(record);

        let envelope = self
            .call(Resource::Record, "Create", &payload, "could not create record")
            .await?;
        envelope.required("record")
    }

    /// Fetch one record (`Record.Info`), with alias fields folded into
    /// `name`, `type`, `line` and `line_id`.
    pub async fn get_record(&self, domain_id: &str, record_id: &str) -> Result<Record> {
        let mut payload = self.payload();
        payload
            .set("domain_id", domain_id)
            .set("record_id", record_id);

        let envelope = self
            .call(Resource::Record, "Info", &payload, "could not get record")
            .await?;
        let record: Record = envelope.required("record")?;
        Ok(record.normalize())
    }

    /// Modify a record (`Record.Modify`). Empty attributes are not sent.
    pub async fn update_record(
        &self,
        domain_id: &str,
        record_id: &str,
        record: &Record,
    ) -> Result<Record> {
        let mut payload = self.payload();
        payload
            .set("domain_id", domain_id)
            .set("record_id", record_id)
            .record_attributes(record);

        let envelope = self
            .call(Resource::Record, "Modify", &payload, "could not update record")
            .await?;
        envelope.required("record")
    }

    /// Delete a record (`Record.Remove`).
    pub async fn delete_record(&self, domain_id: &str, record_id: &str) -> Result<()> {
        let mut payload = self.payload();
        payload
            .set("domain_id", domain_id)
            .set("record_id", record_id);

        self.call(Resource::Record, "Remove", &payload, "could not delete record")
            .await?;
        Ok(())
    }

    /// Enable or disable a record (`Record.Status`).
    pub async fn update_record_status(
        &self,
        domain_id: &str,
        record_id: &str,
        status: &str,
    ) -> Result<()> {
        let mut payload = self.payload();
        payload
            .set("domain_id", domain_id)
            .set("record_id", record_id)
            .set("status", status);

        self.call(
            Resource::Record,
            "Status",
            &payload,
            "could not change record status",
        )
        .await?;
        Ok(())
    }

    /// Routing lines available to a domain of the given grade (`Record.Line`).
    ///
    /// Order is unspecified.
    pub async fn get_record_lines(
        &self,
        domain_grade: &str,
        domain_id: &str,
    ) -> Result<Vec<RecordLine>> {
        let mut payload = self.payload();
        payload
            .set("domain_grade", domain_grade)
            .set("domain_id", domain_id);

        let envelope = self
            .call(Resource::Record, "Line", &payload, "could not get record line")
            .await?;
        let line_ids: HashMap<String, LooseValue> = envelope.optional("line_ids")?;
        Ok(reshape_lines(line_ids))
    }
}
