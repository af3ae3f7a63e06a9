//! Request bodies produced for each tool.

use serde_json::json;

use tracxn_mcp::models::{
    CompanyNameSearchInput, FeedSearchInput, SearchAcquisitionsInput, SearchCompaniesInput,
    SearchInvestorsInput, SearchTransactionsInput, TaxonomySearchInput,
};
use tracxn_mcp::query::builders::{self, DomainEncoding};
use tracxn_mcp::query::{Endpoint, SortOrder};

fn input<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_search_companies_minimal_body() {
    let q = builders::search_companies(&SearchCompaniesInput::default());
    assert_eq!(q.endpoint, Endpoint::Companies);
    assert_eq!(q.body(), json!({"filter": {"feedName": ["Cybersecurity"]}, "size": 5, "from": 0}));
}

#[test]
fn test_search_companies_skips_blank_optionals() {
    let q = builders::search_companies(&input::<SearchCompaniesInput>(json!({
        "sector": "Cloud Infrastructure",
        "country": "",
        "city": "   ",
        "founded_year": 2019,
        "sort_by": ""
    })));
    assert_eq!(
        q.body(),
        json!({"filter": {"feedName": ["Cloud Infrastructure"], "foundedYear": ["2019"]}, "size": 5, "from": 0})
    );
}

#[test]
fn test_search_companies_partial_funding_range() {
    let q = builders::search_companies(&input::<SearchCompaniesInput>(json!({"max_funding": 2.5e7})));
    assert_eq!(q.filter.get("totalMoneyRaised"), Some(&json!({"max": 2.5e7})));
}

#[test]
fn test_search_companies_sort_defaults_to_desc() {
    let q = builders::search_companies(&input::<SearchCompaniesInput>(json!({"sort_by": "tracxnScore"})));
    assert_eq!(q.body()["sort"], json!([{"tracxnScore": "desc"}]));
}

#[test]
fn test_lookup_body_has_no_from() {
    let body = builders::company_lookup("acme.io", DomainEncoding::List).body();
    assert_eq!(body, json!({"filter": {"domain": ["acme.io"]}, "size": 1}));
}

#[test]
fn test_name_search_body() {
    let q = builders::company_name_search(&CompanyNameSearchInput { company_name: Some("Stripe".into()) }).unwrap();
    assert_eq!(q.endpoint.path(), "companies/search");
    assert_eq!(q.body(), json!({"filter": {"companyName": "Stripe"}}));
    assert!(builders::company_name_search(&CompanyNameSearchInput::default()).is_err());
}

#[test]
fn test_transactions_defaults_and_amounts() {
    let q = builders::search_transactions(&input::<SearchTransactionsInput>(json!({
        "min_amount": 1000,
        "max_amount": 2000,
        "end_date": "31/12/2024",
        "sort_by": "transactionFundingRoundAmount",
        "sort_order": "asc",
        "limit": "7"
    })));
    assert_eq!(
        q.body(),
        json!({
            "filter": {
                "transactionFundingRoundAmount": {"min": 1000, "max": 2000},
                "transactionFundingRoundDate": {"max": "31/12/2024"}
            },
            "size": 7,
            "from": 0,
            "sortField": "transactionFundingRoundAmount",
            "sortOrder": "asc"
        })
    );
}

#[test]
fn test_investors_never_sort() {
    let q = builders::search_investors(&SearchInvestorsInput {
        investor_name: Some("sequoiacap.com".into()),
        portfolio_sector: Some("Fintech".into()),
        ..Default::default()
    });
    let body = q.body();
    assert_eq!(body["filter"]["investorDomainName"], json!(["sequoiacap.com"]));
    assert_eq!(body["filter"]["feedName"], json!(["Fintech"]));
    assert!(body.get("sort").is_none());
    assert!(body.get("sortField").is_none());
}

#[test]
fn test_acquisitions_default_sort() {
    let q = builders::search_acquisitions(&SearchAcquisitionsInput {
        acquisition_type: Some("Business Acquisition".into()),
        sort_order: Some(SortOrder::Desc),
        ..Default::default()
    });
    assert_eq!(q.endpoint.path(), "acquisitiontransactions");
    let body = q.body();
    assert_eq!(body["sortField"], "announcementDate");
    assert_eq!(body["sortOrder"], "desc");
    assert_eq!(body["filter"]["acquisitionType"], json!(["Business Acquisition"]));
}

#[test]
fn test_taxonomy_filters() {
    let q = builders::search_practice_areas(&TaxonomySearchInput { id: Some("pa-1".into()), ..Default::default() });
    assert_eq!(q.body(), json!({"filter": {"id": ["pa-1"]}, "size": 5, "from": 0}));

    let q = builders::search_feeds(&FeedSearchInput {
        name: Some("Neobanks".into()),
        primary_geography: Some("Global".into()),
        offset: Some(10),
        ..Default::default()
    });
    assert_eq!(
        q.body(),
        json!({"filter": {"name": ["Neobanks"], "primaryGeography": ["Global"]}, "size": 5, "from": 10})
    );

    let err = builders::search_business_models(&TaxonomySearchInput {
        name: Some(" ".into()),
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "At least one of 'name' or 'id' is required for business model search");
}
