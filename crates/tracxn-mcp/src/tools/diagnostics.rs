//! Troubleshooting tools: `diagnose_api_request` and `debug_api_call`.
//!
//! Tracxn routes disagree on sort and domain encodings and report the mismatch
//! only as a failed request. `diagnose_api_request` sends the caller's body
//! unchanged and, when that fails, replays each reformulation produced by
//! [`TRANSFORMS`]. Every transform works on its own copy of the body.

use serde_json::{Map, Value, json};

use super::ToolContext;
use crate::error::{ClientResult, ToolError, ToolResult};
use crate::models::{DebugCallInput, DiagnoseRequestInput};
use crate::normalize::path::is_truthy;
use crate::query::present;

/// Endpoint used by `debug_api_call` when none is given.
pub const DEFAULT_DEBUG_ENDPOINT: &str = "companies";

/// A reformulated request body.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub description: &'static str,
    pub data: Value,
}

/// A named body rewrite. Returns `None` when it does not apply.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub name: &'static str,
    pub apply: fn(&Value) -> Option<Candidate>,
}

/// Rewrites tried, in order, after a failed request.
pub const TRANSFORMS: &[Transform] = &[
    Transform { name: "sort-list-to-fields", apply: sort_list_to_fields },
    Transform { name: "sort-fields-to-list", apply: sort_fields_to_list },
    Transform { name: "domain-encoding-swap", apply: domain_encoding_swap },
];

/// Every applicable candidate for `body`, in [`TRANSFORMS`] order.
#[must_use]
pub fn candidates(body: &Value) -> Vec<(&'static str, Candidate)> {
    TRANSFORMS.iter().filter_map(|t| (t.apply)(body).map(|c| (t.name, c))).collect()
}

/// `sort: [{field: order}]` -> `sortField` + `sortOrder`.
fn sort_list_to_fields(body: &Value) -> Option<Candidate> {
    let obj = body.as_object()?;
    if !obj.contains_key("sort") || obj.contains_key("sortField") {
        return None;
    }

    let clause = obj
        .get("sort")
        .and_then(Value::as_array)
        .and_then(|list| list.first())
        .and_then(Value::as_object);
    let (field, order) = clause
        .and_then(|c| c.iter().next())
        .map_or(("defaultSortField".to_string(), json!("desc")), |(k, v)| (k.clone(), v.clone()));

    let mut data = obj.clone();
    data.remove("sort");
    data.insert("sortField".into(), Value::String(field));
    data.insert("sortOrder".into(), order);

    Some(Candidate {
        description: "Converted 'sort' array to 'sortField' and 'sortOrder'",
        data: Value::Object(data),
    })
}

/// `sortField` + `sortOrder` -> `sort: [{field: order}]`.
fn sort_fields_to_list(body: &Value) -> Option<Candidate> {
    let obj = body.as_object()?;
    if obj.contains_key("sort") {
        return None;
    }
    let field = obj.get("sortField")?.as_str()?.to_string();
    let order = obj.get("sortOrder").cloned().unwrap_or_else(|| json!("desc"));

    let mut clause = Map::new();
    clause.insert(field, order);

    let mut data = obj.clone();
    data.remove("sortField");
    data.remove("sortOrder");
    data.insert("sort".into(), Value::Array(vec![Value::Object(clause)]));

    Some(Candidate {
        description: "Converted 'sortField' and 'sortOrder' to 'sort' array",
        data: Value::Object(data),
    })
}

/// `filter.domain` list <-> string.
fn domain_encoding_swap(body: &Value) -> Option<Candidate> {
    let domain = body.get("filter")?.get("domain")?;

    let (swapped, description) = match domain {
        Value::Array(list) => (
            list.first().cloned().unwrap_or_else(|| json!("")),
            "Converted 'domain' from list to string",
        ),
        other => (json!([other]), "Converted 'domain' from string to list"),
    };

    let mut data = body.clone();
    data["filter"]["domain"] = swapped;
    Some(Candidate { description, data })
}

fn outcome(result: &ClientResult<Value>) -> Value {
    match result {
        Ok(body) => body.clone(),
        Err(err) => json!({ "error": err.to_string() }),
    }
}

/// Send the body as given and, if it fails, every applicable reformulation.
///
/// # Errors
///
/// Returns [`ToolError::MissingArgument`] when either argument is absent or
/// empty.
pub async fn diagnose_api_request(
    ctx: &ToolContext,
    input: DiagnoseRequestInput,
) -> ToolResult<String> {
    let endpoint = present(input.endpoint.as_deref());
    let data = input.request_data.filter(is_truthy);
    let (Some(endpoint), Some(data)) = (endpoint, data) else {
        return Err(ToolError::missing("Both endpoint and request_data are required"));
    };

    tracing::info!(endpoint, "Diagnosing API request format");
    let original = ctx.client.post_json(endpoint, &data).await;

    let mut variations = Vec::new();
    if let Err(err) = &original {
        tracing::info!(endpoint, error = %err, "Original request failed, trying variations");
        for (name, candidate) in candidates(&data) {
            tracing::info!(endpoint, transform = name, body = %candidate.data, "Trying variation");
            let result = ctx.client.post_json(endpoint, &candidate.data).await;
            variations.push(json!({
                "description": candidate.description,
                "data": candidate.data,
                "result": outcome(&result),
            }));
        }
    }

    let report = json!({
        "original_request": { "data": data, "result": outcome(&original) },
        "variations": variations,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Body sent by `debug_api_call` when none is given.
#[must_use]
pub fn default_debug_body() -> Value {
    json!({ "filter": { "feedName": ["Cybersecurity"] }, "size": 1 })
}

/// Send one request and report the full exchange.
///
/// # Errors
///
/// Only fails if the report cannot be serialized.
pub async fn debug_api_call(ctx: &ToolContext, input: DebugCallInput) -> ToolResult<String> {
    let endpoint = present(input.endpoint.as_deref()).unwrap_or(DEFAULT_DEBUG_ENDPOINT);
    let data = input.data.unwrap_or_else(default_debug_body);

    let report = match ctx.client.exchange(endpoint, &data).await {
        Ok(exchange) => serde_json::to_value(&exchange)?,
        Err(err) => json!({ "error": err.to_string() }),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_list_to_fields() {
        let body = json!({"sort": [{"foundedYear": "asc"}], "size": 5});
        let candidate = sort_list_to_fields(&body).unwrap();
        assert_eq!(candidate.data, json!({"sortField": "foundedYear", "sortOrder": "asc", "size": 5}));
        assert_eq!(body["sort"][0]["foundedYear"], "asc");
    }

    #[test]
    fn test_sort_list_to_fields_empty_list() {
        let candidate = sort_list_to_fields(&json!({"sort": []})).unwrap();
        assert_eq!(candidate.data, json!({"sortField": "defaultSortField", "sortOrder": "desc"}));
    }

    #[test]
    fn test_sort_list_to_fields_skips_when_fields_present() {
        assert!(sort_list_to_fields(&json!({"sort": [], "sortField": "x"})).is_none());
        assert!(sort_list_to_fields(&json!({"size": 1})).is_none());
    }

    #[test]
    fn test_sort_fields_to_list() {
        let body = json!({"sortField": "announcementDate"});
        let candidate = sort_fields_to_list(&body).unwrap();
        assert_eq!(candidate.data, json!({"sort": [{"announcementDate": "desc"}]}));
        assert!(sort_fields_to_list(&json!({"sortField": "a", "sort": []})).is_none());
    }

    #[test]
    fn test_domain_swap_both_ways() {
        let list = json!({"filter": {"domain": ["a.com"]}, "size": 1});
        let c = domain_encoding_swap(&list).unwrap();
        assert_eq!(c.data["filter"]["domain"], "a.com");
        assert_eq!(c.description, "Converted 'domain' from list to string");
        assert_eq!(list["filter"]["domain"], json!(["a.com"]));

        let text = json!({"filter": {"domain": "a.com"}});
        let c = domain_encoding_swap(&text).unwrap();
        assert_eq!(c.data["filter"]["domain"], json!(["a.com"]));

        let empty = json!({"filter": {"domain": []}});
        assert_eq!(domain_encoding_swap(&empty).unwrap().data["filter"]["domain"], "");
    }

    #[test]
    fn test_domain_swap_on_null_domain() {
        let body = json!({"filter": {"domain": null}});
        let c = domain_encoding_swap(&body).unwrap();
        assert_eq!(c.description, "Converted 'domain' from string to list");
        assert_eq!(c.data["filter"]["domain"], json!([null]));
        assert!(domain_encoding_swap(&json!({"filter": {}})).is_none());
        assert!(domain_encoding_swap(&json!({"filter": null})).is_none());
    }

    #[test]
    fn test_candidates_order() {
        let body = json!({"sort": [{"x": "asc"}], "filter": {"domain": "a.com"}});
        let names: Vec<&str> = candidates(&body).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["sort-list-to-fields", "domain-encoding-swap"]);
        assert!(candidates(&json!({"size": 1})).is_empty());
    }
}
