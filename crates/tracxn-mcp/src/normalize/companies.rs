//! Company projections: sector search, domain lookup, name search and the
//! locally filtered funding search.

use std::cmp::Ordering;

use serde_json::{Value, json};

use super::path::{self, EQUITY_FUNDING_USD, at, list, or_default, or_na, truthy};
use super::{Entity, Normalized, paged, results};
use crate::error::ClientResult;
use crate::query::builders::{FundedCompaniesPlan, FundedSort};
use crate::query::{SortOrder, UpstreamQuery};

pub const COMPANIES: Entity = Entity {
    key: "companies",
    error_prefix: "Error retrieving companies",
    empty_message: "No companies found matching the criteria",
    echoes_sort: true,
};

/// Funding fields probed, in order, when the equity funding path is absent.
const FALLBACK_FUNDING_PATHS: &[&[&str]] =
    &[&["funding", "amount"], &["totalFunding"], &["fundingAmount"]];

const FUNDING_UNAVAILABLE: &str = "Funding information not available";

/// `search_companies` result.
#[must_use]
pub fn search_companies(result: &ClientResult<Value>, query: &UpstreamQuery) -> Normalized {
    paged(&COMPANIES, result, query, |company| {
        let mut obj = json!({
            "name": or_default(company, &["name"], "Unknown"),
            "domain": or_na(company, &["domain"]),
            "founded_year": or_na(company, &["foundedYear"]),
            "location": location(company, true),
            "stage": or_na(company, &["stage"]),
            "description": or_na(company, &["description", "short"]),
            "business_models": business_models(company, 5),
        });
        if let Some(funding) = truthy(company, EQUITY_FUNDING_USD) {
            obj["total_funding"] = funding.clone();
        }
        obj
    })
}

/// `company_lookup` result: the first match, with the long description.
#[must_use]
pub fn company_lookup(result: &ClientResult<Value>, domain: &str) -> Normalized {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            return Normalized::Message(format!("Error retrieving company information: {err}"));
        }
    };

    let Some(company) = results(response).first() else {
        return Normalized::Message(format!("No company found with domain {domain}"));
    };

    Normalized::Document(json!({
        "name": or_default(company, &["name"], "Unknown"),
        "domain": or_na(company, &["domain"]),
        "founded_year": or_na(company, &["foundedYear"]),
        "location": location(company, true),
        "stage": or_na(company, &["stage"]),
        "total_funding": at(company, EQUITY_FUNDING_USD).cloned().unwrap_or(Value::Null),
        "description": or_na(company, &["description", "long"]),
        "business_models": business_models(company, 5),
    }))
}

/// `search_companies_by_name` result: ids and domains only.
#[must_use]
pub fn company_name_search(result: &ClientResult<Value>, company_name: &str) -> Normalized {
    let response = match result {
        Ok(response) => response,
        Err(err) => return Normalized::Message(format!("Error searching for company: {err}")),
    };

    let companies = results(response);
    if companies.is_empty() {
        return Normalized::Message(format!("No companies found matching name: {company_name}"));
    }

    let projected: Vec<Value> = companies
        .iter()
        .map(|company| {
            json!({
                "id": or_default(company, &["id"], "Unknown"),
                "name": or_default(company, &["name"], "Unknown"),
                "domain": or_na(company, &["domain"]),
            })
        })
        .collect();

    Normalized::Document(json!({
        "count": projected.len(),
        "search_term": company_name,
        "companies": projected,
    }))
}

/// `funded_companies` result: keep companies whose funding falls in the
/// window, sort, and cut to the caller's limit.
///
/// When nothing in the fetched page matches, the first `limit` companies are
/// returned with a note instead. This cannot tell "no company in range" from
/// "funding not reported".
#[must_use]
pub fn funded_companies(result: &ClientResult<Value>, plan: &FundedCompaniesPlan) -> Normalized {
    let response = match result {
        Ok(response) => response,
        Err(err) => {
            let body = serde_json::to_string_pretty(&plan.query.body()).unwrap_or_default();
            return Normalized::Message(format!(
                "Error retrieving {} companies: {err}\n\nRequest data: {body}",
                plan.sector
            ));
        }
    };

    let companies = results(response);
    if companies.is_empty() {
        return Normalized::Message(format!("No {} companies found", plan.sector));
    }

    let min = plan.min_funding.as_f64().unwrap_or(f64::MIN);
    let max = plan.max_funding.as_f64().unwrap_or(f64::MAX);
    let criteria = json!({ "min": plan.min_funding, "max": plan.max_funding });

    let mut matched: Vec<Value> = companies
        .iter()
        .filter_map(|company| {
            let funding = probe_funding(company)?;
            let amount = path::as_number(funding)?;
            (min..=max).contains(&amount).then(|| {
                json!({
                    "name": or_default(company, &["name"], "Unknown"),
                    "domain": or_na(company, &["domain"]),
                    "founded_year": or_na(company, &["foundedYear"]),
                    "location": location(company, false),
                    "stage": or_na(company, &["stage"]),
                    "total_funding": funding,
                    "business_model": business_models(company, 2),
                })
            })
        })
        .collect();

    if matched.is_empty() {
        let fallback: Vec<Value> = companies
            .iter()
            .take(plan.limit as usize)
            .map(|company| {
                json!({
                    "name": or_default(company, &["name"], "Unknown"),
                    "domain": or_na(company, &["domain"]),
                    "founded_year": or_na(company, &["foundedYear"]),
                    "location": location(company, false),
                    "stage": or_na(company, &["stage"]),
                    "note": FUNDING_UNAVAILABLE,
                })
            })
            .collect();
        return Normalized::Document(json!({
            "note": "Couldn't find companies matching the funding criteria. Showing top companies regardless of funding.",
            "sector": plan.sector,
            "funding_criteria": criteria,
            "companies": fallback,
        }));
    }

    sort_funded(&mut matched, plan.sort_by, plan.sort_order);
    matched.truncate(plan.limit as usize);

    Normalized::Document(json!({
        "total_found": matched.len(),
        "sector": plan.sector,
        "funding_criteria": criteria,
        "companies": matched,
    }))
}

/// Funding reported for a company: the equity funding path when present,
/// otherwise the first truthy fallback field. Falsy amounts count as unknown.
#[must_use]
pub fn probe_funding(company: &Value) -> Option<&Value> {
    let found = match at(company, EQUITY_FUNDING_USD) {
        Some(value) => Some(value),
        None => FALLBACK_FUNDING_PATHS.iter().find_map(|p| truthy(company, p)),
    };
    found.filter(|v| path::is_truthy(v))
}

fn sort_funded(companies: &mut [Value], by: FundedSort, order: SortOrder) {
    companies.sort_by(|a, b| {
        let ordering = match by {
            FundedSort::TotalMoneyRaised => numeric_key(a, "total_funding", b),
            FundedSort::FoundedYear => numeric_key(a, "founded_year", b),
            FundedSort::CompanyName => {
                let name = |v: &Value| v["name"].as_str().map(str::to_lowercase);
                name(a).cmp(&name(b))
            }
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn numeric_key(a: &Value, key: &str, b: &Value) -> Ordering {
    let ka = path::as_number(&a[key]);
    let kb = path::as_number(&b[key]);
    match (ka, kb) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn location(company: &Value, with_state: bool) -> Value {
    let mut loc = json!({
        "country": or_na(company, &["location", "country"]),
        "city": or_na(company, &["location", "city"]),
    });
    if with_state {
        loc["state"] = or_na(company, &["location", "state"]);
    }
    loc
}

/// Distinct business model names in first-seen order, capped.
fn business_models(company: &Value, cap: usize) -> Vec<Value> {
    let mut names: Vec<Value> = Vec::new();
    for model in list(company, &["businessModelList"]) {
        let name = or_na(model, &["name"]);
        if !names.contains(&name) {
            names.push(name);
        }
        if names.len() == cap {
            break;
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_models_dedup_and_cap() {
        let company = json!({"businessModelList": [
            {"name": "B2B"}, {"name": "SaaS"}, {"name": "B2B"}, {}, {"name": "API"}
        ]});
        assert_eq!(business_models(&company, 5), vec![json!("B2B"), json!("SaaS"), json!("N/A"), json!("API")]);
        assert_eq!(business_models(&company, 2), vec![json!("B2B"), json!("SaaS")]);
    }

    #[test]
    fn test_probe_funding_order() {
        let equity = json!({"totalEquityFunding": {"amount": {"USD": {"value": 5}}}, "totalFunding": 9});
        assert_eq!(probe_funding(&equity), Some(&json!(5)));

        let fallback = json!({"funding": {"amount": 0}, "totalFunding": 9});
        assert_eq!(probe_funding(&fallback), Some(&json!(9)));

        let zero = json!({"totalEquityFunding": {"amount": {"USD": {"value": 0}}}, "totalFunding": 9});
        assert_eq!(probe_funding(&zero), None);

        assert_eq!(probe_funding(&json!({})), None);
    }

    #[test]
    fn test_sort_funded_desc_puts_unknown_last() {
        let mut xs = vec![
            json!({"total_funding": 1}),
            json!({"total_funding": "n/a"}),
            json!({"total_funding": 3}),
        ];
        sort_funded(&mut xs, FundedSort::TotalMoneyRaised, SortOrder::Desc);
        assert_eq!(xs[0]["total_funding"], 3);
        assert_eq!(xs[1]["total_funding"], 1);
        assert_eq!(xs[2]["total_funding"], "n/a");
    }

    #[test]
    fn test_location_without_state() {
        let loc = location(&json!({"location": {"country": "US", "state": "CA"}}), false);
        assert_eq!(loc, json!({"country": "US", "city": "N/A"}));
    }
}
