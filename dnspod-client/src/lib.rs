//! # dnspod-client
//!
//! Typed client for the [DNSPod](https://www.dnspod.cn/) form-encoded API
//! (`https://dnsapi.cn/<Resource>.<Action>`): domains, records, routing lines
//! and the account owner.
//!
//! Requests are flat `application/x-www-form-urlencoded` forms; responses are
//! a JSON envelope `{"status": {...}, <payload>}`. The provider is loose about
//! types and names, and this crate smooths that over:
//!
//! - numeric-looking fields arrive as JSON numbers or strings and are always
//!   exposed as text;
//! - `Record.Info` may name fields `sub_domain` / `record_type` /
//!   `record_line` / `record_line_id` instead of `name` / `type` / `line` /
//!   `line_id`; [`DnspodClient::get_record`] folds them ([`Normalize`]);
//! - `Record.Line` returns the default line id as a bare `0` among string ids;
//!   [`reshape_lines`] turns it into `"0"`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnspod_client::{CommonParams, DnspodClient, Record, RecordQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DnspodClient::new(CommonParams::new("13490,6b5976c68aba5b14a0558b77c17c3932"))?;
//!
//!     let user = client.get_user_info().await?;
//!     println!("{} ({})", user.nick, user.user_grade);
//!
//!     let page = client
//!         .list_records(&RecordQuery {
//!             domain_id: "2317346".to_string(),
//!             ..Default::default()
//!         })
//!         .await?;
//!     for record in &page.list {
//!         println!("{} {} {}", record.name, record.r#type, record.value);
//!     }
//!
//!     let created = client
//!         .create_record(
//!             "2317346",
//!             &Record {
//!                 name: "www".to_string(),
//!                 r#type: "A".to_string(),
//!                 line: "默认".to_string(),
//!                 value: "192.0.2.1".to_string(),
//!                 ..Default::default()
//!             },
//!         )
//!         .await?;
//!     println!("created {}", created.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, ClientError>`](ClientError):
//!
//! - transport failures ([`ClientError::Network`], [`ClientError::Timeout`],
//!   [`ClientError::HttpStatus`]) carry the status line when there is one;
//! - [`ClientError::Decode`] means the body was not the expected JSON;
//! - [`ClientError::Api`] means the provider said no, and carries its message
//!   verbatim.
//!
//! Nothing is retried.

mod client;
mod codec;
mod config;
mod error;
mod http_client;
mod types;
mod utils;

pub use error::{ClientError, Result};

pub use config::{
    ClientConfig, CommonParams, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub use http_client::{HttpTransport, Transport};

pub use client::{DnspodClient, DnspodClientBuilder, Resource};

pub use codec::{
    DEFAULT_LINE, DEFAULT_LINE_ID, Envelope, FieldAlias, Normalize, Payload, RECORD_ALIASES,
    SUCCESS_CODE, Status, reshape_lines, resolve,
};

pub use types::{
    Domain, DomainQuery, Record, RecordLine, RecordPage, RecordQuery, RecordsInfo, User,
};

pub use utils::lenient::LooseValue;
pub use utils::datetime;
