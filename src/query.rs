//! Query assembly from the bar text and helper toggles.
//!
//! The bar emits a finished query string on demand; the toggles wrap it
//! with fixed jq fragments before evaluation. Nothing here evaluates the
//! query, that belongs to the host.

/// Output-shaping toggles applied around the typed query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryFlags {
    /// Append `|keys`
    pub keys: bool,
    /// Append `|select(.!=null)`
    pub filter_nulls: bool,
    /// Wrap as `[q]|sort|.[]`; ignored while `unique` is set, which sorts
    /// on its own
    pub sort: bool,
    /// Wrap as `[q]|unique|.[]`
    pub unique: bool,
}

/// Assemble the query that actually runs.
///
/// An empty or all-whitespace bar means the identity query `.`. Appends
/// come before wraps, so `keys` and `filter_nulls` apply per input while
/// `sort`/`unique` reshape the collected output.
pub fn effective_query(raw: &str, flags: QueryFlags) -> String {
    let mut query = raw.trim().to_string();
    if query.is_empty() {
        query = ".".to_string();
    }
    if flags.keys {
        query.push_str("|keys");
    }
    if flags.filter_nulls {
        query.push_str("|select(.!=null)");
    }
    if flags.sort && !flags.unique {
        query = format!("[{}]|sort|.[]", query);
    }
    if flags.unique {
        query = format!("[{}]|unique|.[]", query);
    }
    query
}
