use serde_json::{Value, json};

use super::path::{list, or_na, truthy};
use super::{Entity, Normalized, paged};
use crate::error::ClientResult;
use crate::query::UpstreamQuery;

pub const INVESTORS: Entity = Entity {
    key: "investors",
    error_prefix: "Error retrieving investors",
    empty_message: "No investors found matching the criteria",
    echoes_sort: true,
};

/// `search_investors` result. Locations are capped at three.
#[must_use]
pub fn search_investors(result: &ClientResult<Value>, query: &UpstreamQuery) -> Normalized {
    paged(&INVESTORS, result, query, |investor| {
        let mut obj = json!({
            "name": or_na(investor, &["name"]),
            "domain": or_na(investor, &["domain"]),
            "type": or_na(investor, &["type"]),
            "investor_type": or_na(investor, &["investorType"]),
        });
        let locations: Vec<Value> = list(investor, &["locations"])
            .iter()
            .take(3)
            .map(|loc| {
                json!({
                    "country": or_na(loc, &["country"]),
                    "city": or_na(loc, &["city"]),
                    "state": or_na(loc, &["state"]),
                })
            })
            .collect();
        if !locations.is_empty() {
            obj["locations"] = Value::Array(locations);
        }
        if truthy(investor, &["description"]).is_some() {
            obj["description"] = or_na(investor, &["description", "short"]);
        }
        if let Some(score) = truthy(investor, &["tracxnInvestmentScore"]) {
            obj["investment_score"] = score.clone();
        }
        obj
    })
}
