//! Funding rounds and acquisitions.

use serde_json::{Value, json};

use super::path::{at, list, or_na, truthy};
use super::{Entity, Normalized, paged};
use crate::error::ClientResult;
use crate::query::UpstreamQuery;

pub const TRANSACTIONS: Entity = Entity {
    key: "transactions",
    error_prefix: "Error retrieving transactions",
    empty_message: "No transactions found matching the criteria",
    echoes_sort: true,
};

pub const ACQUISITIONS: Entity = Entity {
    key: "acquisitions",
    error_prefix: "Error retrieving acquisitions",
    empty_message: "No acquisitions found matching the criteria",
    echoes_sort: true,
};

#[must_use]
pub fn search_transactions(result: &ClientResult<Value>, query: &UpstreamQuery) -> Normalized {
    paged(&TRANSACTIONS, result, query, |round| {
        let mut obj = json!({
            "id": or_na(round, &["id"]),
            "type": or_na(round, &["type"]),
            "name": or_na(round, &["name"]),
            "funding_date": or_na(round, &["fundingDate"]),
            "company": {
                "name": or_na(round, &["companyDetails", "name"]),
                "domain": or_na(round, &["companyDetails", "domain"]),
                "location": at(round, &["companyDetails", "location"]).cloned().unwrap_or_else(|| json!({})),
            },
        });
        if truthy(round, &["amount", "USD"]).is_some() {
            obj["amount_usd"] = usd_value(round, &["amount", "USD", "value"]);
        }
        let investors: Vec<Value> = list(round, &["investorList"])
            .iter()
            .take(5)
            .map(|investor| {
                json!({
                    "name": or_na(investor, &["name"]),
                    "domain": or_na(investor, &["domain"]),
                    "type": or_na(investor, &["type"]),
                    "is_lead": at(investor, &["isLead"]).cloned().unwrap_or(Value::Bool(false)),
                })
            })
            .collect();
        if !investors.is_empty() {
            obj["investors"] = Value::Array(investors);
        }
        obj
    })
}

#[must_use]
pub fn search_acquisitions(result: &ClientResult<Value>, query: &UpstreamQuery) -> Normalized {
    paged(&ACQUISITIONS, result, query, |deal| {
        let acquirers: Vec<Value> = list(deal, &["acquirerList"])
            .iter()
            .take(3)
            .map(|acquirer| {
                json!({
                    "name": or_na(acquirer, &["name"]),
                    "domain": or_na(acquirer, &["domain"]),
                })
            })
            .collect();
        let mut obj = json!({
            "id": or_na(deal, &["id"]),
            "status": or_na(deal, &["status"]),
            "company": {
                "name": or_na(deal, &["company", "name"]),
                "domain": or_na(deal, &["company", "domain"]),
            },
            "acquirers": acquirers,
            "announcement_date": or_na(deal, &["basicRoundDetail", "announcementDate"]),
            "acquisition_type": or_na(deal, &["basicRoundDetail", "acquisitionType"]),
        });
        if truthy(deal, &["basicRoundDetail", "normalizedAmount", "USD"]).is_some() {
            obj["amount_usd"] = usd_value(deal, &["basicRoundDetail", "normalizedAmount", "USD", "value"]);
        }
        if let Some(stake) = truthy(deal, &["basicRoundDetail", "stakesAcquired"]) {
            obj["stake_acquired"] = stake.clone();
        }
        obj
    })
}

/// USD amount under a present currency block; `null` when it has no value.
fn usd_value(item: &Value, path: &[&str]) -> Value {
    at(item, path).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::query::{Endpoint, Sort, SortOrder};

    fn transactions_query() -> UpstreamQuery {
        let mut q = UpstreamQuery::paged(Endpoint::Transactions, 10, 0);
        q.sort = Some(Sort::for_endpoint(Endpoint::Transactions, "transactionFundingRoundDate", SortOrder::Desc));
        q
    }

    #[test]
    fn test_transaction_projection() {
        let response = json!({
            "total_count": 1,
            "result": [{
                "id": "t1",
                "fundingDate": "2024-01-02",
                "amount": {"USD": {"value": 5_000_000, "currency": "USD"}},
                "companyDetails": {"name": "Acme"},
                "investorList": [{"name": "Fund A", "isLead": true}, {"name": "Fund B"}],
            }],
        });
        let doc = search_transactions(&Ok(response), &transactions_query());
        let doc = doc.document().cloned().unwrap_or_default();
        let t = &doc["transactions"][0];
        assert_eq!(t["amount_usd"], 5_000_000);
        assert_eq!(t["company"]["domain"], "N/A");
        assert_eq!(t["company"]["location"], json!({}));
        assert_eq!(t["investors"][0]["is_lead"], true);
        assert_eq!(t["investors"][1]["is_lead"], false);
        assert_eq!(doc["sort"], json!({"sortField": "transactionFundingRoundDate", "sortOrder": "desc"}));
    }

    #[test]
    fn test_transaction_without_amount_or_investors() {
        let response = json!({"result": [{"amount": {"USD": {}}, "investorList": []}]});
        let doc = search_transactions(&Ok(response), &transactions_query());
        let t = doc.document().map(|d| d["transactions"][0].clone()).unwrap_or_default();
        assert!(t.get("amount_usd").is_none());
        assert!(t.get("investors").is_none());
        assert_eq!(t["type"], "N/A");
    }

    #[test]
    fn test_transaction_currency_block_without_value() {
        let response = json!({"result": [{"amount": {"USD": {"currency": "USD"}}}]});
        let doc = search_transactions(&Ok(response), &transactions_query());
        let t = doc.document().map(|d| d["transactions"][0].clone()).unwrap_or_default();
        assert_eq!(t.get("amount_usd"), Some(&Value::Null));
    }

    #[test]
    fn test_acquisition_projection_caps_acquirers() {
        let response = json!({
            "total_count": 1,
            "result": [{
                "company": {"name": "Mandiant", "domain": "mandiant.com"},
                "acquirerList": [{"name": "A"}, {"name": "B"}, {"name": "C"}, {"name": "D"}],
                "basicRoundDetail": {
                    "normalizedAmount": {"USD": {"value": 5_400_000_000_u64}},
                    "stakesAcquired": "100%"
                },
            }],
        });
        let q = UpstreamQuery::paged(Endpoint::Acquisitions, 5, 0);
        let doc = search_acquisitions(&Ok(response), &q);
        let a = doc.document().map(|d| d["acquisitions"][0].clone()).unwrap_or_default();
        assert_eq!(a["acquirers"].as_array().map(Vec::len), Some(3));
        assert_eq!(a["company"], json!({"name": "Mandiant", "domain": "mandiant.com"}));
        assert_eq!(a["amount_usd"], 5_400_000_000_u64);
        assert_eq!(a["stake_acquired"], "100%");
        assert_eq!(a["announcement_date"], "N/A");
    }

    #[test]
    fn test_acquisition_zero_amount_kept_and_top_level_stake_ignored() {
        let response = json!({
            "result": [{
                "companyDetails": {"name": "Wrong place"},
                "stakesAcquired": "51%",
                "basicRoundDetail": {"normalizedAmount": {"USD": {"value": 0}}},
            }],
        });
        let q = UpstreamQuery::paged(Endpoint::Acquisitions, 5, 0);
        let doc = search_acquisitions(&Ok(response), &q);
        let a = doc.document().map(|d| d["acquisitions"][0].clone()).unwrap_or_default();
        assert_eq!(a["amount_usd"], 0);
        assert_eq!(a["company"]["name"], "N/A");
        assert!(a.get("stake_acquired").is_none());
    }

    #[test]
    fn test_acquisition_failure_text() {
        let q = UpstreamQuery::paged(Endpoint::Acquisitions, 5, 0);
        let out = search_acquisitions(&Err(ClientError::http(500, "boom")), &q);
        assert_eq!(out.message(), Some("Error retrieving acquisitions: API returned status code 500: boom"));
    }
}
