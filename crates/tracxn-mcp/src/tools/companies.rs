//! Company tools: search_companies, company_lookup, funded_companies,
//! search_companies_by_name.

use super::ToolContext;
use crate::error::{ToolError, ToolResult};
use crate::models::{
    CompanyLookupInput, CompanyNameSearchInput, FundedCompaniesInput, SearchCompaniesInput,
};
use crate::normalize;
use crate::query::builders::{self, DomainEncoding};
use crate::query::present;

pub async fn search_companies(ctx: &ToolContext, input: &SearchCompaniesInput) -> String {
    let query = builders::search_companies(input);
    tracing::info!(
        sector = ?query.filter.get("feedName"),
        size = ?query.size,
        from = ?query.from,
        "Searching companies"
    );
    let result = ctx.fetch(&query).await;
    normalize::search_companies(&result, &query).render()
}

/// Look a company up by domain. When the list-encoded domain filter is
/// rejected with a domain-related error, the string encoding is tried once.
pub async fn company_lookup(ctx: &ToolContext, input: &CompanyLookupInput) -> ToolResult<String> {
    let raw = present(input.domain.as_deref()).ok_or_else(|| ToolError::required("domain"))?;
    let domain = builders::normalize_domain(raw);
    tracing::info!(domain = %domain, "Looking up company");

    let query = builders::company_lookup(&domain, DomainEncoding::List);
    let mut result = ctx.fetch(&query).await;

    if result.as_ref().is_err_and(|e| e.to_string().contains("domain")) {
        tracing::warn!(domain = %domain, "Domain filter rejected, retrying with string encoding");
        let retry = builders::company_lookup(&domain, DomainEncoding::Text);
        result = ctx.fetch(&retry).await;
    }

    Ok(normalize::company_lookup(&result, &domain).render())
}

pub async fn funded_companies(ctx: &ToolContext, input: &FundedCompaniesInput) -> String {
    let plan = builders::funded_companies(input);
    tracing::info!(
        sector = %plan.sector,
        min_funding = %plan.min_funding,
        max_funding = %plan.max_funding,
        fetch = ?plan.query.size,
        "Searching funded companies"
    );
    let result = ctx.fetch(&plan.query).await;
    normalize::funded_companies(&result, &plan).render()
}

pub async fn search_by_name(ctx: &ToolContext, input: &CompanyNameSearchInput) -> ToolResult<String> {
    let query = builders::company_name_search(input)?;
    let name = input.company_name.as_deref().map(str::trim).unwrap_or_default();
    tracing::info!(company_name = %name, "Searching companies by name");
    let result = ctx.fetch(&query).await;
    Ok(normalize::company_name_search(&result, name).render())
}
