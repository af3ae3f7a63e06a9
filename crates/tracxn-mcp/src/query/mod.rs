//! Upstream query model.
//!
//! An [`UpstreamQuery`] is the typed form of a Tracxn search body. Builders in
//! [`builders`] produce one per tool; [`UpstreamQuery::body`] renders the JSON
//! that is POSTed.
//!
//! Tracxn routes disagree on how sorting is encoded. The companies/investors
//! family takes `"sort": [{"field": "order"}]`; the transactions/acquisitions
//! family takes top-level `sortField` and `sortOrder`. [`Sort::for_endpoint`]
//! picks the encoding from the endpoint so a builder cannot mix them.

pub mod builders;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::config::api;

/// Tracxn routes used by the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Companies,
    CompanyNameSearch,
    Transactions,
    Investors,
    Acquisitions,
    PracticeAreas,
    Feeds,
    BusinessModels,
}

/// Sort encoding convention shared by a group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointFamily {
    /// `sort: [{field: order}]`
    SortList,
    /// `sortField` + `sortOrder`
    SortFields,
}

impl Endpoint {
    /// Path appended to the API root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::CompanyNameSearch => "companies/search",
            Self::Transactions => "transactions",
            Self::Investors => "investors",
            Self::Acquisitions => "acquisitiontransactions",
            Self::PracticeAreas => "practiceareas",
            Self::Feeds => "feeds",
            Self::BusinessModels => "businessmodels",
        }
    }

    /// Sort encoding this route expects.
    #[must_use]
    pub const fn family(self) -> EndpointFamily {
        match self {
            Self::Transactions | Self::Acquisitions => EndpointFamily::SortFields,
            _ => EndpointFamily::SortList,
        }
    }

    /// Resolve a path back to an endpoint.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim().trim_matches('/');
        [
            Self::Companies,
            Self::CompanyNameSearch,
            Self::Transactions,
            Self::Investors,
            Self::Acquisitions,
            Self::PracticeAreas,
            Self::Feeds,
            Self::BusinessModels,
        ]
        .into_iter()
        .find(|e| e.path() == path)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A sort clause in the encoding of its endpoint family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sort {
    List { field: String, order: SortOrder },
    Fields { field: String, order: SortOrder },
}

impl Sort {
    /// Build a sort clause in the encoding `endpoint` expects.
    #[must_use]
    pub fn for_endpoint(endpoint: Endpoint, field: impl Into<String>, order: SortOrder) -> Self {
        let field = field.into();
        match endpoint.family() {
            EndpointFamily::SortList => Self::List { field, order },
            EndpointFamily::SortFields => Self::Fields { field, order },
        }
    }

    fn write_into(&self, body: &mut Map<String, Value>) {
        match self {
            Self::List { field, order } => {
                body.insert("sort".into(), sort_list(field, *order));
            }
            Self::Fields { field, order } => {
                body.insert("sortField".into(), json!(field));
                body.insert("sortOrder".into(), json!(order.as_str()));
            }
        }
    }

    /// The sort as echoed back to callers in normalized output.
    #[must_use]
    pub fn echo(&self) -> Value {
        match self {
            Self::List { field, order } => sort_list(field, *order),
            Self::Fields { field, order } => {
                json!({ "sortField": field, "sortOrder": order.as_str() })
            }
        }
    }
}

/// `[{field: order}]`
fn sort_list(field: &str, order: SortOrder) -> Value {
    let mut clause = Map::new();
    clause.insert(field.to_string(), json!(order.as_str()));
    Value::Array(vec![Value::Object(clause)])
}

/// The `filter` object of a request body. Only populated keys are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Map<String, Value>);

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key: [value]` when `value` is present and not blank.
    pub fn list(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = present(value) {
            self.0.insert(key.to_string(), json!([v]));
        }
        self
    }

    /// Insert `key: {min, max}` with whichever bounds are given.
    pub fn range(&mut self, key: &str, min: Option<Value>, max: Option<Value>) -> &mut Self {
        let mut bounds = Map::new();
        if let Some(min) = min {
            bounds.insert("min".into(), min);
        }
        if let Some(max) = max {
            bounds.insert("max".into(), max);
        }
        if !bounds.is_empty() {
            self.0.insert(key.to_string(), Value::Object(bounds));
        }
        self
    }

    /// Insert a raw value.
    pub fn insert(&mut self, key: &str, value: Value) -> &mut Self {
        self.0.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// A fully built request for one Tracxn route.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamQuery {
    pub endpoint: Endpoint,
    pub filter: Filter,
    pub size: Option<u32>,
    pub from: Option<u32>,
    pub sort: Option<Sort>,
}

impl UpstreamQuery {
    /// A paged query with no filter and no sort.
    #[must_use]
    pub fn paged(endpoint: Endpoint, size: u32, from: u32) -> Self {
        Self { endpoint, filter: Filter::new(), size: Some(size), from: Some(from), sort: None }
    }

    /// Render the JSON body. `filter` is omitted when empty.
    #[must_use]
    pub fn body(&self) -> Value {
        let mut body = Map::new();
        if !self.filter.is_empty() {
            body.insert("filter".into(), self.filter.to_value());
        }
        if let Some(size) = self.size {
            body.insert("size".into(), json!(size));
        }
        if let Some(from) = self.from {
            body.insert("from".into(), json!(from));
        }
        if let Some(sort) = &self.sort {
            sort.write_into(&mut body);
        }
        Value::Object(body)
    }

    /// Sort as echoed in normalized output; `[]` when unsorted.
    #[must_use]
    pub fn sort_echo(&self) -> Value {
        self.sort.as_ref().map_or_else(|| json!([]), Sort::echo)
    }
}

/// Trimmed value when present and non-blank.
#[must_use]
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Clamp a caller's `limit` into `[0, 20]`, defaulting to 5.
#[must_use]
pub fn clamp_limit(limit: Option<i64>) -> u32 {
    limit.unwrap_or(api::DEFAULT_PAGE_SIZE).clamp(0, api::MAX_PAGE_SIZE) as u32
}

/// Clamp a caller's offset to be non-negative, defaulting to 0.
#[must_use]
pub fn clamp_offset(offset: Option<i64>) -> u32 {
    offset.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32
}
