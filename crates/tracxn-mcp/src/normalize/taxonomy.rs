//! Practice areas, feeds and business models: the Tracxn classification tree.
//!
//! None of these echo a sort.

use serde_json::{Value, json};

use super::path::{list, or_na, truthy};
use super::{Entity, Normalized, paged};
use crate::error::ClientResult;
use crate::query::UpstreamQuery;

pub const PRACTICE_AREAS: Entity = Entity {
    key: "practice_areas",
    error_prefix: "Error retrieving practice areas",
    empty_message: "No practice areas found matching the criteria",
    echoes_sort: false,
};

pub const FEEDS: Entity = Entity {
    key: "feeds",
    error_prefix: "Error retrieving feeds",
    empty_message: "No feeds found matching the criteria",
    echoes_sort: false,
};

pub const BUSINESS_MODELS: Entity = Entity {
    key: "business_models",
    error_prefix: "Error retrieving business models",
    empty_message: "No business models found matching the criteria",
    echoes_sort: false,
};

#[must_use]
pub fn search_practice_areas(result: &ClientResult<Value>, query: &UpstreamQuery) -> Normalized {
    paged(&PRACTICE_AREAS, result, query, |area| {
        let mut obj = json!({
            "id": or_na(area, &["id"]),
            "name": or_na(area, &["name"]),
            "category": or_na(area, &["category"]),
            "tracxn_id": or_na(area, &["tracxnId"]),
            "companies_url": or_na(area, &["companiesInEntireTreeUrl"]),
        });
        let feeds = id_name_pairs(list(area, &["feedList"]), 5);
        if !feeds.is_empty() {
            obj["feeds"] = Value::Array(feeds);
        }
        obj
    })
}

#[must_use]
pub fn search_feeds(result: &ClientResult<Value>, query: &UpstreamQuery) -> Normalized {
    paged(&FEEDS, result, query, |feed| {
        let mut obj = json!({
            "id": or_na(feed, &["id"]),
            "name": or_na(feed, &["name"]),
            "tracxn_id": or_na(feed, &["tracxnId"]),
            "primary_geo": or_na(feed, &["primaryGeo"]),
            "curation_type": or_na(feed, &["curationType"]),
            "companies_url": or_na(feed, &["companiesInEntireTreeUrl"]),
        });
        copy_truthy(feed, &mut obj, "description", "description");
        let areas = id_name_pairs(list(feed, &["practiceAreaList"]), 3);
        if !areas.is_empty() {
            obj["practice_areas"] = Value::Array(areas);
        }
        obj
    })
}

#[must_use]
pub fn search_business_models(result: &ClientResult<Value>, query: &UpstreamQuery) -> Normalized {
    paged(&BUSINESS_MODELS, result, query, |model| {
        let mut obj = json!({
            "id": or_na(model, &["id"]),
            "name": or_na(model, &["name"]),
            "node_type": or_na(model, &["nodeType"]),
            "tracxn_id": or_na(model, &["tracxnId"]),
            "feed_id": or_na(model, &["feedId"]),
            "feed_name": or_na(model, &["feedName"]),
            "absolute_name": or_na(model, &["absoluteName"]),
            "companies_in_node_url": or_na(model, &["companiesInNodeOnlyUrl"]),
            "companies_in_tree_url": or_na(model, &["companiesInEntireTreeUrl"]),
        });
        copy_truthy(model, &mut obj, "description", "description");
        copy_truthy(model, &mut obj, "fullPathString", "full_path");
        copy_truthy(model, &mut obj, "notableCompanies", "notable_companies");
        obj
    })
}

fn id_name_pairs(items: &[Value], cap: usize) -> Vec<Value> {
    items
        .iter()
        .take(cap)
        .map(|item| json!({ "id": or_na(item, &["id"]), "name": or_na(item, &["name"]) }))
        .collect()
}

fn copy_truthy(source: &Value, target: &mut Value, from: &str, to: &str) {
    if let Some(value) = truthy(source, &[from]) {
        target[to] = value.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::query::Endpoint;

    #[test]
    fn test_practice_area_feeds_capped() {
        let feeds: Vec<Value> = (0..8).map(|i| json!({"id": i, "name": format!("f{i}")})).collect();
        let response = json!({"total_count": 1, "result": [{"name": "Fintech", "feedList": feeds}]});
        let q = UpstreamQuery::paged(Endpoint::PracticeAreas, 5, 0);
        let doc = search_practice_areas(&Ok(response), &q);
        let doc = doc.document().cloned().unwrap_or_default();
        assert_eq!(doc["practice_areas"][0]["feeds"].as_array().map(Vec::len), Some(5));
        assert_eq!(doc["practice_areas"][0]["category"], "N/A");
        assert!(doc.get("sort").is_none());
    }

    #[test]
    fn test_feed_optional_fields() {
        let response = json!({"result": [{"name": "Neobanks", "description": "", "practiceAreaList": []}]});
        let q = UpstreamQuery::paged(Endpoint::Feeds, 5, 0);
        let doc = search_feeds(&Ok(response), &q);
        let feed = doc.document().map(|d| d["feeds"][0].clone()).unwrap_or_default();
        assert!(feed.get("description").is_none());
        assert!(feed.get("practice_areas").is_none());
        assert_eq!(feed["primary_geo"], "N/A");
    }

    #[test]
    fn test_business_model_extras() {
        let response = json!({"total_count": 1, "result": [{
            "name": "Payments",
            "fullPathString": "Fintech > Payments",
            "notableCompanies": ["Stripe"],
        }]});
        let q = UpstreamQuery::paged(Endpoint::BusinessModels, 5, 0);
        let doc = search_business_models(&Ok(response), &q);
        let model = doc.document().map(|d| d["business_models"][0].clone()).unwrap_or_default();
        assert_eq!(model["full_path"], "Fintech > Payments");
        assert_eq!(model["notable_companies"], json!(["Stripe"]));
        assert!(model.get("description").is_none());
    }

    #[test]
    fn test_empty_and_failure_messages() {
        let q = UpstreamQuery::paged(Endpoint::Feeds, 5, 0);
        let empty = search_feeds(&Ok(json!({"result": []})), &q);
        assert_eq!(empty.message(), Some("No feeds found matching the criteria"));

        let failed = search_practice_areas(&Err(ClientError::RateLimited), &q);
        assert_eq!(
            failed.message(),
            Some("Error retrieving practice areas: Tracxn API rate limit exceeded. Please try again later.")
        );
    }
}
