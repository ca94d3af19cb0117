//! 请求参数编码
//!
//! Every action takes a flat form. A field left at its zero value (empty
//! text, numeric zero) means "unset" and is omitted, so there is no way to
//! send an explicit empty string.

use std::fmt::Display;

use crate::config::CommonParams;
use crate::types::{Domain, DomainQuery, Record, RecordQuery};

/// Ordered form parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    pairs: Vec<(String, String)>,
}

impl Payload {
    /// Start a payload from the common parameter base.
    pub fn new(common: &CommonParams) -> Self {
        let mut payload = Self::default();
        payload.extend_non_empty(common.pairs());
        payload
    }

    /// Insert or replace `key`, keeping its original position on replace.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// [`set`](Self::set) only when `value` is non-empty.
    pub fn set_non_empty(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.set(key, value);
        }
        self
    }

    /// Render `value` in decimal and [`set`](Self::set) it unless it is zero.
    pub fn set_non_zero<N>(&mut self, key: &str, value: N) -> &mut Self
    where
        N: Display + Default + PartialEq,
    {
        if value != N::default() {
            self.set(key, value.to_string());
        }
        self
    }

    pub fn extend_non_empty<'a, I>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in fields {
            self.set_non_empty(key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pairs in insertion order, ready for `application/x-www-form-urlencoded`.
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    // ============ Entity encoders ============

    /// Writable record attributes for `Record.Create` / `Record.Modify`.
    pub(crate) fn record_attributes(&mut self, record: &Record) -> &mut Self {
        self.extend_non_empty([
            ("sub_domain", record.name.as_str()),
            ("record_type", record.r#type.as_str()),
            ("record_line", record.line.as_str()),
            ("record_line_id", record.line_id.as_str()),
            ("value", record.value.as_str()),
            ("mx", record.mx.as_str()),
            ("ttl", record.ttl.as_str()),
            ("status", record.status.as_str()),
        ])
    }

    pub(crate) fn domain_attributes(&mut self, domain: &Domain) -> &mut Self {
        self.extend_non_empty([
            ("domain", domain.name.as_str()),
            ("group_id", domain.group_id.as_str()),
            ("is_mark", domain.is_mark.as_str()),
        ])
    }

    pub(crate) fn record_query(&mut self, query: &RecordQuery) -> &mut Self {
        self.set_non_empty("domain_id", &query.domain_id)
            .set_non_empty("domain", &query.domain);
        if query.page_size != 0 {
            self.set("offset", query.current_page.to_string())
                .set("length", query.page_size.to_string());
        }
        self.extend_non_empty([
            ("sub_domain", query.sub_domain.as_str()),
            ("keyword", query.keyword.as_str()),
            ("record_type", query.record_type.as_str()),
            ("record_line", query.record_line.as_str()),
        ])
    }

    pub(crate) fn domain_query(&mut self, query: &DomainQuery) -> &mut Self {
        self.set_non_empty("type", &query.kind)
            .set_non_zero("offset", query.offset)
            .set_non_zero("length", query.length)
            .set_non_empty("group_id", &query.group_id)
            .set_non_empty("keyword", &query.keyword)
    }
}
