//! DNSPod API 客户端

mod domains;
mod records;
mod user;

use std::fmt;
use std::sync::Arc;

use crate::codec::{Envelope, Payload};
use crate::config::{ClientConfig, CommonParams};
use crate::error::Result;
use crate::http_client::{HttpTransport, Transport};

/// API resource an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Domain,
    Record,
    User,
}

impl Resource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Record => "Record",
            Self::User => "User",
        }
    }

    /// Action used when none is given.
    pub fn default_action(self) -> &'static str {
        match self {
            Self::Domain | Self::Record => "List",
            Self::User => "Info",
        }
    }

    /// Resolve the action path, e.g. `Record.Modify`.
    ///
    /// An empty `action` resolves to [`default_action`](Self::default_action).
    pub fn action(self, action: &str) -> String {
        let action = if action.is_empty() {
            self.default_action()
        } else {
            action
        };
        format!("{}.{action}", self.as_str())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client for the DNSPod form API.
///
/// Cheap to clone; clones share the transport and the common parameters.
#[derive(Clone)]
pub struct DnspodClient {
    transport: Arc<dyn Transport>,
    common: Arc<CommonParams>,
}

/// [`DnspodClient`] builder.
pub struct DnspodClientBuilder {
    common: CommonParams,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl DnspodClientBuilder {
    fn new(common: CommonParams) -> Self {
        Self {
            common,
            config: ClientConfig::default(),
            transport: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Use a custom transport. The [`ClientConfig`] is ignored in that case.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<DnspodClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(self.config)?),
        };
        Ok(DnspodClient {
            transport,
            common: Arc::new(self.common),
        })
    }
}

impl DnspodClient {
    /// Client with the default endpoint and timeouts.
    pub fn new(common: CommonParams) -> Result<Self> {
        Self::builder(common).build()
    }

    pub fn builder(common: CommonParams) -> DnspodClientBuilder {
        DnspodClientBuilder::new(common)
    }

    pub fn common_params(&self) -> &CommonParams {
        &self.common
    }

    /// Fresh payload seeded with the common parameters.
    pub(crate) fn payload(&self) -> Payload {
        Payload::new(&self.common)
    }

    /// POST `payload` to `resource.action` and return the checked envelope.
    ///
    /// A rejected status becomes an `Api` error prefixed with `context`.
    pub(crate) async fn call(
        &self,
        resource: Resource,
        action: &str,
        payload: &Payload,
        context: &str,
    ) -> Result<Envelope> {
        let path = resource.action(action);
        let body = self.transport.post_form(&path, payload).await?;
        let envelope = Envelope::parse(&body)?;
        if let Some(status) = envelope.status() {
            log::debug!("[dnspod] {path} status={} {}", status.code_text(), status.message);
        }
        envelope.check(context)
    }
}

impl fmt::Debug for DnspodClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnspodClient")
            .field("format", &self.common.format)
            .field("lang", &self.common.lang)
            .field("user_id", &self.common.user_id)
            .finish_non_exhaustive()
    }
}
