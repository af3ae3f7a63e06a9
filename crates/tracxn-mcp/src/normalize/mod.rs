//! Response normalizers.
//!
//! Each normalizer reduces a raw Tracxn response to a small, stable projection
//! with defaults for anything missing. The contract is uniform:
//! - upstream failure -> one line of text prefixed with the operation
//! - zero results -> a per-tool informational message
//! - otherwise -> a JSON document with `total_count`, the echoed filter, and
//!   a `pagination` block

mod companies;
mod deals;
mod investors;
pub mod path;
mod taxonomy;

pub use companies::{
    COMPANIES, company_lookup, company_name_search, funded_companies, search_companies,
};
pub use deals::{ACQUISITIONS, TRANSACTIONS, search_acquisitions, search_transactions};
pub use investors::{INVESTORS, search_investors};
pub use taxonomy::{
    BUSINESS_MODELS, FEEDS, PRACTICE_AREAS, search_business_models, search_feeds,
    search_practice_areas,
};

use serde_json::{Value, json};

use crate::error::{ClientError, ClientResult};
use crate::query::UpstreamQuery;

/// Output of a normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Structured result.
    Document(Value),
    /// Error or empty-result text.
    Message(String),
}

impl Normalized {
    /// Render for the caller: 2-space indented JSON or the plain message.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Document(doc) => {
                serde_json::to_string_pretty(doc).unwrap_or_else(|e| format!("Error: {e}"))
            }
            Self::Message(text) => text.clone(),
        }
    }

    #[must_use]
    pub const fn document(&self) -> Option<&Value> {
        match self {
            Self::Document(doc) => Some(doc),
            Self::Message(_) => None,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Document(_) => None,
            Self::Message(text) => Some(text),
        }
    }
}

/// Wording and output key for one entity type.
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    /// Key holding the projected list in the output document.
    pub key: &'static str,
    /// Prefix for upstream failures.
    pub error_prefix: &'static str,
    /// Message when the result list is empty.
    pub empty_message: &'static str,
    /// Whether the applied sort is echoed back.
    pub echoes_sort: bool,
}

impl Entity {
    #[must_use]
    pub fn failure(&self, err: &ClientError) -> Normalized {
        Normalized::Message(format!("{}: {err}", self.error_prefix))
    }
}

/// Pagination block: `has_more` when results remain past this page.
#[must_use]
pub fn pagination(total_count: u64, from: u32, size: u32) -> Value {
    json!({
        "from": from,
        "size": size,
        "has_more": total_count > u64::from(from) + u64::from(size),
    })
}

/// Upstream `total_count`, 0 when absent or not a number.
#[must_use]
pub fn total_count(response: &Value) -> u64 {
    path::at(response, &["total_count"])
        .and_then(path::as_number)
        .filter(|n| *n > 0.0)
        .map_or(0, |n| n as u64)
}

/// The upstream result list.
#[must_use]
pub fn results(response: &Value) -> &[Value] {
    path::list(response, &["result"])
}

/// Shared driver for paged list endpoints.
fn paged(
    entity: &Entity,
    result: &ClientResult<Value>,
    query: &UpstreamQuery,
    project: impl Fn(&Value) -> Value,
) -> Normalized {
    let response = match result {
        Ok(response) => response,
        Err(err) => return entity.failure(err),
    };

    let items = results(response);
    if items.is_empty() {
        return Normalized::Message(entity.empty_message.to_string());
    }

    let total = total_count(response);
    let mut doc = json!({
        "total_count": total,
        "filters_applied": query.filter.to_value(),
        "pagination": pagination(total, query.from.unwrap_or(0), query.size.unwrap_or(0)),
    });
    doc[entity.key] = Value::Array(items.iter().map(project).collect());
    if entity.echoes_sort {
        doc["sort"] = query.sort_echo();
    }
    Normalized::Document(doc)
}
