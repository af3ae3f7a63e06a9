#![no_main]

use libfuzzer_sys::fuzz_target;
use tracxn_mcp::models::FundedCompaniesInput;
use tracxn_mcp::normalize;
use tracxn_mcp::query::builders;
use tracxn_mcp::query::{Endpoint, UpstreamQuery};

fuzz_target!(|data: &[u8]| {
    let Ok(response) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let ok = Ok(response);
    let query = UpstreamQuery::paged(Endpoint::Companies, 20, 0);
    let plan = builders::funded_companies(&FundedCompaniesInput::default());

    let _ = normalize::search_companies(&ok, &query).render();
    let _ = normalize::company_lookup(&ok, "example.com").render();
    let _ = normalize::company_name_search(&ok, "Example").render();
    let _ = normalize::funded_companies(&ok, &plan).render();
    let _ = normalize::search_transactions(&ok, &query).render();
    let _ = normalize::search_investors(&ok, &query).render();
    let _ = normalize::search_acquisitions(&ok, &query).render();
    let _ = normalize::search_practice_areas(&ok, &query).render();
    let _ = normalize::search_feeds(&ok, &query).render();
    let _ = normalize::search_business_models(&ok, &query).render();
});
