//! `Record.Line` response reshaping
//!
//! `line_ids` maps line names to identifiers. Identifiers are strings, except
//! that the default line comes back as a bare `0`. Only that one entry is
//! coerced; any other non-string value is dropped.

use std::collections::HashMap;

use crate::types::RecordLine;
use crate::utils::lenient::LooseValue;

/// Name of the default routing line.
pub const DEFAULT_LINE: &str = "默认";
/// Identifier substituted for [`DEFAULT_LINE`] when it is not sent as text.
pub const DEFAULT_LINE_ID: &str = "0";

/// Convert the `line_ids` map into line/identifier pairs.
///
/// Output order follows map iteration and is not stable.
pub fn reshape_lines(line_ids: HashMap<String, LooseValue>) -> Vec<RecordLine> {
    line_ids
        .into_iter()
        .filter_map(|(line, value)| {
            let line_id = match value.as_text() {
                Some(text) => text.to_string(),
                None if line == DEFAULT_LINE => DEFAULT_LINE_ID.to_string(),
                None => return None,
            };
            Some(RecordLine { line, line_id })
        })
        .collect()
}
