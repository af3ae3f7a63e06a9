//! One query builder per tool.
//!
//! Builders are pure: they take validated tool input and return the
//! [`UpstreamQuery`] to send. The ones that can reject input return
//! [`ToolResult`] so no request is made for an invalid call.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Number, Value, json};

use super::{Endpoint, Filter, Sort, SortOrder, UpstreamQuery, clamp_limit, clamp_offset, present};
use crate::config::api;
use crate::error::{ToolError, ToolResult};
use crate::models::{
    CompanyNameSearchInput, FeedSearchInput, FundedCompaniesInput, SearchAcquisitionsInput,
    SearchCompaniesInput, SearchInvestorsInput, SearchTransactionsInput, TaxonomySearchInput,
};

/// Sectors accepted by `search_companies`.
pub const SUPPORTED_SECTORS: &[&str] =
    &["Cybersecurity", "Fintech", "Enterprise Infrastructure", "Cloud Infrastructure"];

/// Sector used when none (or an unsupported one) is given.
pub const DEFAULT_SECTOR: &str = "Cybersecurity";

/// Default funding window for `funded_companies`, in USD.
pub const DEFAULT_MIN_FUNDING: u64 = 10_000_000;
pub const DEFAULT_MAX_FUNDING: u64 = 100_000_000;

/// Default sort fields for the `sortField` family.
pub const TRANSACTIONS_SORT_FIELD: &str = "transactionFundingRoundDate";
pub const ACQUISITIONS_SORT_FIELD: &str = "announcementDate";

/// Leading scheme and `www.` label.
static DOMAIN_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://)?(?:www\.)?").expect("valid domain prefix regex"));

/// How `filter.domain` is encoded. Tracxn has accepted both over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainEncoding {
    /// `["example.com"]`
    List,
    /// `"example.com"`
    Text,
}

/// `search_companies`: sector search with optional location, year and funding filters.
#[must_use]
pub fn search_companies(input: &SearchCompaniesInput) -> UpstreamQuery {
    let sector = supported_sector(input.sector.as_deref());

    let mut query = UpstreamQuery::paged(
        Endpoint::Companies,
        clamp_limit(input.limit),
        clamp_offset(input.from),
    );
    query
        .filter
        .list("feedName", Some(sector))
        .list("country", input.country.as_deref())
        .list("city", input.city.as_deref())
        .list("foundedYear", input.founded_year.as_deref())
        .range("totalMoneyRaised", number(input.min_funding.as_ref()), number(input.max_funding.as_ref()));

    if let Some(field) = present(input.sort_by.as_deref()) {
        query.sort = Some(Sort::for_endpoint(
            Endpoint::Companies,
            field,
            input.sort_order.unwrap_or_default(),
        ));
    }

    query
}

/// Resolve a sector against [`SUPPORTED_SECTORS`], falling back to [`DEFAULT_SECTOR`].
#[must_use]
pub fn supported_sector(sector: Option<&str>) -> &'static str {
    present(sector)
        .and_then(|s| SUPPORTED_SECTORS.iter().find(|known| **known == s))
        .copied()
        .unwrap_or(DEFAULT_SECTOR)
}

/// Lower-case a domain and strip a leading scheme and `www.`.
#[must_use]
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    DOMAIN_PREFIX.replace(&lowered, "").into_owned()
}

/// `company_lookup`: a single company by its (already normalized) domain.
#[must_use]
pub fn company_lookup(domain: &str, encoding: DomainEncoding) -> UpstreamQuery {
    let value = match encoding {
        DomainEncoding::List => json!([domain]),
        DomainEncoding::Text => json!(domain),
    };
    let mut filter = Filter::new();
    filter.insert("domain", value);
    UpstreamQuery { endpoint: Endpoint::Companies, filter, size: Some(1), from: None, sort: None }
}

/// Local criteria for `funded_companies`, applied after the sector fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FundedCompaniesPlan {
    /// Sector-only fetch, over-sized to leave room for local filtering.
    pub query: UpstreamQuery,
    pub sector: String,
    pub min_funding: Number,
    pub max_funding: Number,
    /// Caller's clamped limit.
    pub limit: u32,
    pub sort_by: FundedSort,
    pub sort_order: SortOrder,
}

/// Local sort keys for `funded_companies`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FundedSort {
    #[default]
    TotalMoneyRaised,
    FoundedYear,
    CompanyName,
}

impl FundedSort {
    /// Unknown keys sort by funding.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match present(value) {
            Some("foundedYear") => Self::FoundedYear,
            Some("companyName") => Self::CompanyName,
            _ => Self::TotalMoneyRaised,
        }
    }
}

/// `funded_companies`: upstream funding filters are unreliable, so only the
/// sector (and country) go upstream and funding is filtered locally.
#[must_use]
pub fn funded_companies(input: &FundedCompaniesInput) -> FundedCompaniesPlan {
    let sector = present(input.sector.as_deref()).unwrap_or(DEFAULT_SECTOR).to_string();
    let limit = clamp_limit(input.limit);
    let fetch = (limit * 5).min(api::MAX_FUNDED_FETCH);

    let mut query = UpstreamQuery::paged(Endpoint::Companies, fetch, 0);
    query.filter.list("feedName", Some(sector.as_str())).list("country", input.country.as_deref());

    FundedCompaniesPlan {
        query,
        sector,
        min_funding: input.min_funding.clone().unwrap_or_else(|| DEFAULT_MIN_FUNDING.into()),
        max_funding: input.max_funding.clone().unwrap_or_else(|| DEFAULT_MAX_FUNDING.into()),
        limit,
        sort_by: FundedSort::parse(input.sort_by.as_deref()),
        sort_order: input.sort_order.unwrap_or_default(),
    }
}

/// `search_companies_by_name`: requires a non-blank name.
pub fn company_name_search(input: &CompanyNameSearchInput) -> ToolResult<UpstreamQuery> {
    let name = present(input.company_name.as_deref()).ok_or_else(|| ToolError::required("company_name"))?;
    let mut filter = Filter::new();
    filter.insert("companyName", json!(name));
    Ok(UpstreamQuery {
        endpoint: Endpoint::CompanyNameSearch,
        filter,
        size: None,
        from: None,
        sort: None,
    })
}

/// `search_transactions`: funding rounds, sorted with `sortField`/`sortOrder`.
#[must_use]
pub fn search_transactions(input: &SearchTransactionsInput) -> UpstreamQuery {
    let mut query = UpstreamQuery::paged(
        Endpoint::Transactions,
        clamp_limit(input.limit),
        clamp_offset(input.offset),
    );
    query
        .filter
        .list("feedName", input.sector.as_deref())
        .list("transactionFundingRoundCategory", input.round_type.as_deref())
        .range("transactionFundingRoundDate", text(input.start_date.as_deref()), text(input.end_date.as_deref()))
        .range("transactionFundingRoundAmount", number(input.min_amount.as_ref()), number(input.max_amount.as_ref()))
        .list("country", input.country.as_deref());

    if let Some(domain) = present(input.investor_domain.as_deref()) {
        query.filter.insert(
            "transactionInvestor",
            json!({ "transactionInstitutionalInvestorDomain": [domain] }),
        );
    }

    let field = present(input.sort_by.as_deref()).unwrap_or(TRANSACTIONS_SORT_FIELD);
    query.sort =
        Some(Sort::for_endpoint(Endpoint::Transactions, field, input.sort_order.unwrap_or_default()));
    query
}

/// `search_investors`: investor directory search. No sort is sent.
#[must_use]
pub fn search_investors(input: &SearchInvestorsInput) -> UpstreamQuery {
    let mut query = UpstreamQuery::paged(
        Endpoint::Investors,
        clamp_limit(input.limit),
        clamp_offset(input.offset),
    );
    query
        .filter
        .list("investorDomainName", input.investor_name.as_deref())
        .list("investorType", input.investor_type.as_deref())
        .list("investorCountry", input.investor_country.as_deref())
        .list("feedName", input.portfolio_sector.as_deref())
        .range("tracxnInvestmentScore", number(input.min_investment_score.as_ref()), None);
    query
}

/// `search_acquisitions`: acquisition transactions, sorted with `sortField`/`sortOrder`.
#[must_use]
pub fn search_acquisitions(input: &SearchAcquisitionsInput) -> UpstreamQuery {
    let mut query = UpstreamQuery::paged(
        Endpoint::Acquisitions,
        clamp_limit(input.limit),
        clamp_offset(input.offset),
    );
    query
        .filter
        .list("acquisitionType", input.acquisition_type.as_deref())
        .range("announcementDate", text(input.start_date.as_deref()), text(input.end_date.as_deref()))
        .list("acquirerListDomain", input.acquirer_domain.as_deref())
        .list("feedName", input.sector.as_deref())
        .range("acquisitionAmount", number(input.min_amount.as_ref()), number(input.max_amount.as_ref()))
        .list("country", input.country.as_deref());

    let field = present(input.sort_by.as_deref()).unwrap_or(ACQUISITIONS_SORT_FIELD);
    query.sort =
        Some(Sort::for_endpoint(Endpoint::Acquisitions, field, input.sort_order.unwrap_or_default()));
    query
}

/// `search_practice_areas`: name and/or id; both optional.
#[must_use]
pub fn search_practice_areas(input: &TaxonomySearchInput) -> UpstreamQuery {
    taxonomy(Endpoint::PracticeAreas, input.name.as_deref(), input.id.as_deref(), input.limit, input.offset)
}

/// `search_feeds`: name, geography and/or id; all optional.
#[must_use]
pub fn search_feeds(input: &FeedSearchInput) -> UpstreamQuery {
    let mut query =
        taxonomy(Endpoint::Feeds, input.name.as_deref(), input.id.as_deref(), input.limit, input.offset);
    query.filter.list("primaryGeography", input.primary_geography.as_deref());
    query
}

/// `search_business_models`: the route rejects unfiltered queries, so a name or
/// id is required.
pub fn search_business_models(input: &TaxonomySearchInput) -> ToolResult<UpstreamQuery> {
    let query = taxonomy(
        Endpoint::BusinessModels,
        input.name.as_deref(),
        input.id.as_deref(),
        input.limit,
        input.offset,
    );
    if query.filter.is_empty() {
        return Err(ToolError::missing(
            "At least one of 'name' or 'id' is required for business model search",
        ));
    }
    Ok(query)
}

fn taxonomy(
    endpoint: Endpoint,
    name: Option<&str>,
    id: Option<&str>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> UpstreamQuery {
    let mut query = UpstreamQuery::paged(endpoint, clamp_limit(limit), clamp_offset(offset));
    query.filter.list("name", name).list("id", id);
    query
}

fn number(value: Option<&Number>) -> Option<Value> {
    value.cloned().map(Value::Number)
}

fn text(value: Option<&str>) -> Option<Value> {
    present(value).map(Value::from)
}
