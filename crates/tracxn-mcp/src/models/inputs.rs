//! Input models for MCP tool parameters.
//!
//! Field names match the snake_case keys advertised in each tool's input schema.
//! Every field is optional at the serde level; required-ness is checked by the
//! dispatcher so a missing argument yields a typed error instead of a parse error.
//! Unknown keys are ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::query::SortOrder;

/// Input for `search_companies`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCompaniesInput {
    /// Sector (feed) name; only a fixed set of sectors is accepted.
    pub sector: Option<String>,

    /// Results per page, clamped to [0, 20].
    #[serde(deserialize_with = "lenient_int")]
    pub limit: Option<i64>,

    /// Pagination offset, clamped to >= 0.
    #[serde(deserialize_with = "lenient_int")]
    pub from: Option<i64>,

    /// Upstream sort field (e.g. `totalMoneyRaised`).
    pub sort_by: Option<String>,

    /// Sort direction, `desc` when omitted.
    pub sort_order: Option<SortOrder>,

    pub country: Option<String>,
    pub city: Option<String>,

    /// Founded year; numbers are accepted and kept as text.
    #[serde(deserialize_with = "string_or_number")]
    pub founded_year: Option<String>,

    pub min_funding: Option<Number>,
    pub max_funding: Option<Number>,
}

/// Input for `company_lookup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyLookupInput {
    /// Company domain, with or without scheme and `www.`.
    pub domain: Option<String>,
}

/// Input for `funded_companies`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FundedCompaniesInput {
    /// Minimum total funding in USD (default 10M).
    pub min_funding: Option<Number>,

    /// Maximum total funding in USD (default 100M).
    pub max_funding: Option<Number>,

    pub sector: Option<String>,

    #[serde(deserialize_with = "lenient_int")]
    pub limit: Option<i64>,

    /// Local sort key: `totalMoneyRaised`, `foundedYear` or `companyName`.
    pub sort_by: Option<String>,

    pub sort_order: Option<SortOrder>,

    pub country: Option<String>,
}

/// Input for `search_companies_by_name`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyNameSearchInput {
    pub company_name: Option<String>,
}

/// Input for `search_transactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchTransactionsInput {
    pub sector: Option<String>,

    /// Funding round category (e.g. "Series A").
    pub round_type: Option<String>,

    pub min_amount: Option<Number>,
    pub max_amount: Option<Number>,

    /// Start of the funding date range (dd/mm/yyyy).
    pub start_date: Option<String>,

    /// End of the funding date range (dd/mm/yyyy).
    pub end_date: Option<String>,

    pub investor_domain: Option<String>,
    pub country: Option<String>,

    #[serde(deserialize_with = "lenient_int")]
    pub limit: Option<i64>,

    #[serde(deserialize_with = "lenient_int")]
    pub offset: Option<i64>,

    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// Input for `search_investors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchInvestorsInput {
    pub investor_name: Option<String>,

    /// Investor type (e.g. "Venture Capital Funds").
    pub investor_type: Option<String>,

    pub investor_country: Option<String>,

    /// Sector present in the investor's portfolio.
    pub portfolio_sector: Option<String>,

    #[serde(deserialize_with = "lenient_int")]
    pub limit: Option<i64>,

    #[serde(deserialize_with = "lenient_int")]
    pub offset: Option<i64>,

    /// Minimum Tracxn investment score (0-100).
    pub min_investment_score: Option<Number>,
}

/// Input for `search_acquisitions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchAcquisitionsInput {
    pub acquisition_type: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub acquirer_domain: Option<String>,
    pub sector: Option<String>,
    pub min_amount: Option<Number>,
    pub max_amount: Option<Number>,
    pub country: Option<String>,

    #[serde(deserialize_with = "lenient_int")]
    pub limit: Option<i64>,

    #[serde(deserialize_with = "lenient_int")]
    pub offset: Option<i64>,

    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// Input shared by `search_practice_areas` and `search_business_models`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomySearchInput {
    pub name: Option<String>,

    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,

    #[serde(deserialize_with = "lenient_int")]
    pub limit: Option<i64>,

    #[serde(deserialize_with = "lenient_int")]
    pub offset: Option<i64>,
}

/// Input for `search_feeds`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSearchInput {
    pub name: Option<String>,

    /// Primary geography (e.g. "Global").
    pub primary_geography: Option<String>,

    #[serde(deserialize_with = "string_or_number")]
    pub id: Option<String>,

    #[serde(deserialize_with = "lenient_int")]
    pub limit: Option<i64>,

    #[serde(deserialize_with = "lenient_int")]
    pub offset: Option<i64>,
}

/// Input for `diagnose_api_request`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnoseRequestInput {
    pub endpoint: Option<String>,
    pub request_data: Option<Value>,
}

/// Input for `debug_api_call`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugCallInput {
    pub endpoint: Option<String>,
    pub data: Option<Value>,
}

/// Accept integers, floats (truncated), and numeric strings. Out-of-range values
/// saturate so later clamping still applies.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(number_to_i64(&n))),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(|f| Some(saturate_f64(f)))
                .map_err(|_| serde::de::Error::custom(format!("expected an integer, got '{s}'")))
        }
        Some(other) => Err(serde::de::Error::custom(format!("expected an integer, got {other}"))),
    }
}

fn number_to_i64(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        i
    } else if n.as_u64().is_some() {
        i64::MAX
    } else {
        saturate_f64(n.as_f64().unwrap_or(0.0))
    }
}

fn saturate_f64(f: f64) -> i64 {
    if f.is_nan() {
        0
    } else if f >= i64::MAX as f64 {
        i64::MAX
    } else if f <= i64::MIN as f64 {
        i64::MIN
    } else {
        f.trunc() as i64
    }
}

/// Accept a string or a number and keep it as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!("expected a string, got {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_keys_ignored() {
        let input: SearchCompaniesInput =
            serde_json::from_value(json!({"sector": "Fintech", "bogus": 1})).unwrap();
        assert_eq!(input.sector.as_deref(), Some("Fintech"));
    }

    #[test]
    fn test_lenient_int_forms() {
        let input: TaxonomySearchInput =
            serde_json::from_value(json!({"limit": 7.9, "offset": "3"})).unwrap();
        assert_eq!(input.limit, Some(7));
        assert_eq!(input.offset, Some(3));

        let input: TaxonomySearchInput =
            serde_json::from_value(json!({"limit": 18_446_744_073_709_551_615_u64})).unwrap();
        assert_eq!(input.limit, Some(i64::MAX));

        let input: TaxonomySearchInput = serde_json::from_value(json!({"limit": -1e30})).unwrap();
        assert_eq!(input.limit, Some(i64::MIN));
    }

    #[test]
    fn test_lenient_int_rejects_garbage() {
        let result = serde_json::from_value::<TaxonomySearchInput>(json!({"limit": "lots"}));
        assert!(result.is_err());
        let result = serde_json::from_value::<TaxonomySearchInput>(json!({"limit": [1]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_string_or_number() {
        let input: SearchCompaniesInput =
            serde_json::from_value(json!({"founded_year": 2020})).unwrap();
        assert_eq!(input.founded_year.as_deref(), Some("2020"));

        let input: TaxonomySearchInput = serde_json::from_value(json!({"id": "abc"})).unwrap();
        assert_eq!(input.id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_sort_order_parses_lowercase() {
        let input: SearchTransactionsInput =
            serde_json::from_value(json!({"sort_order": "asc"})).unwrap();
        assert_eq!(input.sort_order, Some(SortOrder::Asc));
    }
}
