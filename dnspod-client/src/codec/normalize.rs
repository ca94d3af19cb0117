//! Alias folding for entities the provider names inconsistently.
//!
//! Runs after JSON decoding, never during it: the raw entity keeps every
//! spelling it was sent, and only [`Normalize::normalize`] collapses them.
//! Domains and users come in a single spelling and need no table.

use crate::types::Record;

/// One canonical field and the wire keys it is read from, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAlias {
    pub canonical: &'static str,
    pub sources: &'static [&'static str],
}

/// Alias table of [`Record`].
pub const RECORD_ALIASES: &[FieldAlias] = &[
    FieldAlias {
        canonical: "name",
        sources: &["name", "sub_domain"],
    },
    FieldAlias {
        canonical: "type",
        sources: &["type", "record_type"],
    },
    FieldAlias {
        canonical: "line",
        sources: &["line", "record_line"],
    },
    FieldAlias {
        canonical: "line_id",
        sources: &["line_id", "record_line_id"],
    },
];

/// An entity whose canonical fields can be resolved from an alias table.
pub trait Normalize: Sized {
    const ALIASES: &'static [FieldAlias];

    /// Value stored under a wire key, `""` for unknown keys.
    fn source(&self, key: &str) -> &str;

    fn canonical_mut(&mut self, key: &str) -> Option<&mut String>;

    /// Fill each canonical field with the first non-empty source.
    ///
    /// A non-empty primary is never overwritten and values are never merged,
    /// so normalizing twice is the same as normalizing once.
    #[must_use]
    fn normalize(mut self) -> Self {
        for alias in Self::ALIASES {
            let Some(value) = resolve(&self, alias).map(str::to_owned) else {
                continue;
            };
            if let Some(slot) = self.canonical_mut(alias.canonical) {
                *slot = value;
            }
        }
        self
    }
}

/// First non-empty source value for `alias`.
pub fn resolve<'a, T: Normalize>(entity: &'a T, alias: &FieldAlias) -> Option<&'a str> {
    alias
        .sources
        .iter()
        .map(|key| entity.source(key))
        .find(|value| !value.is_empty())
}

impl Normalize for Record {
    const ALIASES: &'static [FieldAlias] = RECORD_ALIASES;

    fn source(&self, key: &str) -> &str {
        match key {
            "name" => &self.name,
            "sub_domain" => &self.sub_domain,
            "type" => &self.r#type,
            "record_type" => &self.record_type,
            "line" => &self.line,
            "record_line" => &self.record_line,
            "line_id" => &self.line_id,
            "record_line_id" => &self.record_line_id,
            _ => "",
        }
    }

    fn canonical_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "name" => Some(&mut self.name),
            "type" => Some(&mut self.r#type),
            "line" => Some(&mut self.line),
            "line_id" => Some(&mut self.line_id),
            _ => None,
        }
    }
}
