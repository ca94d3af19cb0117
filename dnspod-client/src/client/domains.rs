//! `Domain.*` actions
//!
//! API docs: <https://www.dnspod.cn/docs/domains.html>

use crate::error::Result;
use crate::types::{Domain, DomainQuery};

use super::{DnspodClient, Resource};

impl DnspodClient {
    /// List domains (`Domain.List`). Entries are returned as sent, in server order.
    pub async fn list_domains(&self, query: &DomainQuery) -> Result<Vec<Domain>> {
        let mut payload = self.payload();
        payload.domain_query(query);

        let envelope = self
            .call(Resource::Domain, "List", &payload, "could not list domains")
            .await?;
        envelope.optional("domains")
    }

    /// Create a domain (`Domain.Create`) from its `name`, `group_id` and `is_mark`.
    pub async fn create_domain(&self, domain: &Domain) -> Result<Domain> {
        let mut payload = self.payload();
        payload.domain_attributes(domain);

        let envelope = self
            .call(Resource::Domain, "Create", &payload, "could not create domain")
            .await?;
        envelope.required("domain")
    }

    /// Fetch one domain (`Domain.Info`).
    pub async fn get_domain(&self, domain_id: &str) -> Result<Domain> {
        let mut payload = self.payload();
        payload.set("domain_id", domain_id);

        let envelope = self
            .call(Resource::Domain, "Info", &payload, "could not get domain")
            .await?;
        envelope.required("domain")
    }

    /// Delete a domain (`Domain.Remove`).
    pub async fn delete_domain(&self, domain_id: &str) -> Result<()> {
        let mut payload = self.payload();
        payload.set("domain_id", domain_id);

        self.call(Resource::Domain, "Remove", &payload, "could not delete domain")
            .await?;
        Ok(())
    }

    /// Enable or pause a domain (`Domain.Status`), `status` is `enable` or `disable`.
    pub async fn update_domain_status(&self, domain_id: &str, status: &str) -> Result<()> {
        let mut payload = self.payload();
        payload.set("domain_id", domain_id).set("status", status);

        self.call(
            Resource::Domain,
            "Status",
            &payload,
            "could not change domain status",
        )
        .await?;
        Ok(())
    }
}
