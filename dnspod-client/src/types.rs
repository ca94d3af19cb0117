use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::datetime::parse_api_timestamp;
use crate::utils::lenient;

// ============ Domain ============

/// A domain (zone) as returned by the `Domain.*` actions.
///
/// Every scalar is kept as text: the provider sends `id` and `group_id` as a
/// number from one endpoint and as a string from another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub punycode: String,
    /// Plan grade, e.g. `DP_Free`.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub grade: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub grade_title: String,
    /// `enable` / `pause` / `spam` / `lock`.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub ext_status: String,
    /// Number of records in the zone.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub records: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub group_id: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub is_mark: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub remark: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub is_vip: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub searchengine_push: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub created_on: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub updated_on: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub ttl: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub cname_speedup: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub owner: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub auth_to_anquanbao: bool,
}

/// Filters for `Domain.List`. The default sends no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainQuery {
    /// `all` / `mine` / `share` / `ismark` / `pause` / `vip` / `recent` / `share_out`.
    #[serde(rename = "type")]
    pub kind: String,
    pub offset: u32,
    pub length: u32,
    pub group_id: String,
    pub keyword: String,
}

// ============ Record ============

/// A DNS record as returned by the `Record.*` actions.
///
/// The provider names some attributes differently depending on the action:
/// `name`/`sub_domain`, `type`/`record_type`, `line`/`record_line` and
/// `line_id`/`record_line_id`. Both spellings are kept side by side here;
/// [`Normalize`](crate::Normalize) folds the alias into the primary field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Host label, `@` for the apex.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Routing line name, e.g. `默认`.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub line: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub line_id: String,
    /// DNS type, e.g. `A`, `MX`.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub r#type: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub ttl: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// MX priority.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub mx: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub enabled: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub monitor_status: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub remark: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub updated_on: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub use_aqb: String,

    // Alias spellings used by `Record.Info` and some write actions.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub sub_domain: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub record_line: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub record_line_id: String,
}

impl Record {
    /// `updated_on` as a timestamp, `None` when absent or malformed.
    pub fn updated_on_time(&self) -> Option<NaiveDateTime> {
        parse_api_timestamp(&self.updated_on)
    }
}

/// Counters attached to `Record.List` responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsInfo {
    #[serde(deserialize_with = "lenient::integer")]
    pub sub_domains: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub record_total: i64,
}

/// Filters and paging for `Record.List`.
///
/// `offset`/`length` are only sent when `page_size` is non-zero, and
/// `current_page` travels as `offset` unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordQuery {
    pub domain_id: String,
    pub domain: String,
    pub current_page: u32,
    pub page_size: u32,
    pub sub_domain: String,
    pub keyword: String,
    pub record_type: String,
    pub record_line: String,
}

/// One page of `Record.List`.
///
/// The provider does not echo paging parameters, so `current_page` and
/// `page_size` are the values the caller asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPage {
    pub current_page: u32,
    pub page_size: u32,
    pub total: i64,
    pub list: Vec<Record>,
}

// ============ Line ============

/// An ISP routing line usable for a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordLine {
    /// Human-readable name, e.g. `电信`.
    pub line: String,
    /// Provider identifier, e.g. `10=1`. `"0"` for the default line.
    pub line_id: String,
}

impl RecordLine {
    pub fn new(line: impl Into<String>, line_id: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            line_id: line_id.into(),
        }
    }
}

// ============ User ============

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// Account details from `User.Detail`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub real_name: String,
    /// `personal` / `enterprise`.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub user_type: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub telephone: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub im: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub nick: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub email_verified: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub telephone_verified: String,
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub weixin_binded: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub agent_pending: bool,
    #[serde(deserialize_with = "lenient::integer", skip_serializing_if = "is_zero")]
    pub balance: i64,
    #[serde(deserialize_with = "lenient::integer", skip_serializing_if = "is_zero")]
    pub smsbalance: i64,
    /// Account tier, e.g. `DP_Free`.
    #[serde(deserialize_with = "lenient::text", skip_serializing_if = "String::is_empty")]
    pub user_grade: String,
}
