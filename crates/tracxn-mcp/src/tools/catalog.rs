//! Tool catalogue served by `tools/list`.

use serde_json::{Value, json};

/// Every tool the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    SearchCompanies,
    CompanyLookup,
    FundedCompanies,
    DebugApiCall,
    SearchCompaniesByName,
    SearchTransactions,
    SearchInvestors,
    SearchAcquisitions,
    SearchPracticeAreas,
    SearchFeeds,
    SearchBusinessModels,
    DiagnoseApiRequest,
}

const LIMIT_DESCRIPTION: &str = "Number of results to retrieve (max 20)";
const OFFSET_DESCRIPTION: &str = "Pagination offset";
const SORT_ORDER_DESCRIPTION: &str = "Sort order (ascending or descending)";

impl ToolKind {
    /// Listing order.
    pub const ALL: &'static [Self] = &[
        Self::SearchCompanies,
        Self::CompanyLookup,
        Self::FundedCompanies,
        Self::DebugApiCall,
        Self::SearchCompaniesByName,
        Self::SearchTransactions,
        Self::SearchInvestors,
        Self::SearchAcquisitions,
        Self::SearchPracticeAreas,
        Self::SearchFeeds,
        Self::SearchBusinessModels,
        Self::DiagnoseApiRequest,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SearchCompanies => "search_companies",
            Self::CompanyLookup => "company_lookup",
            Self::FundedCompanies => "funded_companies",
            Self::DebugApiCall => "debug_api_call",
            Self::SearchCompaniesByName => "search_companies_by_name",
            Self::SearchTransactions => "search_transactions",
            Self::SearchInvestors => "search_investors",
            Self::SearchAcquisitions => "search_acquisitions",
            Self::SearchPracticeAreas => "search_practice_areas",
            Self::SearchFeeds => "search_feeds",
            Self::SearchBusinessModels => "search_business_models",
            Self::DiagnoseApiRequest => "diagnose_api_request",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Tool description for LLM.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SearchCompanies => {
                "Search for companies in Tracxn database by sector and other criteria"
            }
            Self::CompanyLookup => "Look up detailed information about a company by domain",
            Self::FundedCompanies => "Find companies with specific funding amounts",
            Self::DebugApiCall => "Debug an API call to Tracxn for troubleshooting",
            Self::SearchCompaniesByName => {
                "Search for companies by name to get their IDs and domains"
            }
            Self::SearchTransactions => {
                "Search for funding rounds/transactions in the Tracxn database"
            }
            Self::SearchInvestors => "Search for investors in the Tracxn database",
            Self::SearchAcquisitions => "Search for acquisitions in the Tracxn database",
            Self::SearchPracticeAreas => "Search for practice areas in the Tracxn database",
            Self::SearchFeeds => "Search for feeds in the Tracxn database",
            Self::SearchBusinessModels => "Search for business models in the Tracxn database",
            Self::DiagnoseApiRequest => {
                "Diagnose API request format issues by trying different variations"
            }
        }
    }

    /// JSON Schema for input parameters.
    #[must_use]
    pub fn input_schema(self) -> Value {
        match self {
            Self::SearchCompanies => json!({
                "type": "object",
                "properties": {
                    "sector": {"type": "string", "default": "Cybersecurity", "description": "Sector name (e.g., 'Cybersecurity', 'Fintech')"},
                    "limit": {"type": "integer", "default": 5, "description": LIMIT_DESCRIPTION},
                    "from": {"type": "integer", "default": 0, "description": OFFSET_DESCRIPTION},
                    "sort_by": {
                        "type": "string",
                        "enum": ["relevance", "companyName", "foundedYear", "totalMoneyRaised", "editorRating", "tracxnScore"],
                        "default": "relevance",
                        "description": "Field to sort results by"
                    },
                    "sort_order": {"type": "string", "enum": ["asc", "desc"], "default": "desc", "description": SORT_ORDER_DESCRIPTION},
                    "country": {"type": "string", "description": "Filter by country (e.g., 'United States')"},
                    "city": {"type": "string", "description": "Filter by city (e.g., 'San Francisco')"},
                    "founded_year": {"type": "string", "description": "Filter by founded year (e.g., '2020')"},
                    "min_funding": {"type": "number", "description": "Minimum total funding in USD"},
                    "max_funding": {"type": "number", "description": "Maximum total funding in USD"}
                },
                "required": ["sector"]
            }),
            Self::CompanyLookup => json!({
                "type": "object",
                "properties": {
                    "domain": {"type": "string", "description": "Company domain (e.g., 'crowdstrike.com')"}
                },
                "required": ["domain"]
            }),
            Self::FundedCompanies => json!({
                "type": "object",
                "properties": {
                    "min_funding": {"type": "integer", "default": 10_000_000, "description": "Minimum funding amount in USD"},
                    "max_funding": {"type": "integer", "default": 100_000_000, "description": "Maximum funding amount in USD"},
                    "sector": {"type": "string", "default": "Cybersecurity", "description": "Sector to filter by (e.g., 'Cybersecurity')"},
                    "limit": {"type": "integer", "default": 5, "description": LIMIT_DESCRIPTION},
                    "sort_by": {
                        "type": "string",
                        "enum": ["totalMoneyRaised", "foundedYear", "companyName"],
                        "default": "totalMoneyRaised",
                        "description": "Field to sort results by"
                    },
                    "sort_order": {"type": "string", "enum": ["asc", "desc"], "default": "desc", "description": SORT_ORDER_DESCRIPTION},
                    "country": {"type": "string", "description": "Filter by country (e.g., 'United States')"}
                },
                "required": ["min_funding", "max_funding"]
            }),
            Self::DebugApiCall => json!({
                "type": "object",
                "properties": {
                    "endpoint": {"type": "string", "default": "companies", "description": "API endpoint to call"},
                    "data": {"type": "object", "description": "Request data to send to the API"}
                }
            }),
            Self::SearchCompaniesByName => json!({
                "type": "object",
                "properties": {
                    "company_name": {"type": "string", "description": "Company name to search for (e.g., 'Apple')"}
                },
                "required": ["company_name"]
            }),
            Self::SearchTransactions => json!({
                "type": "object",
                "properties": {
                    "sector": {"type": "string", "description": "Sector/feed name (e.g., 'Cybersecurity')"},
                    "round_type": {"type": "string", "description": "Funding round type (e.g., 'Series A', 'Series B')"},
                    "min_amount": {"type": "integer", "description": "Minimum funding amount in USD"},
                    "max_amount": {"type": "integer", "description": "Maximum funding amount in USD"},
                    "start_date": {"type": "string", "description": "Start date for funding rounds (dd/mm/yyyy)"},
                    "end_date": {"type": "string", "description": "End date for funding rounds (dd/mm/yyyy)"},
                    "investor_domain": {"type": "string", "description": "Investor domain to filter by (e.g., 'sequoiacap.com')"},
                    "country": {"type": "string", "description": "Country to filter by"},
                    "limit": {"type": "integer", "default": 5, "description": LIMIT_DESCRIPTION},
                    "offset": {"type": "integer", "default": 0, "description": OFFSET_DESCRIPTION},
                    "sort_by": {
                        "type": "string",
                        "enum": ["transactionFundingRoundAmount", "transactionFundingRoundDate"],
                        "default": "transactionFundingRoundDate",
                        "description": "Field to sort results by"
                    },
                    "sort_order": {"type": "string", "enum": ["asc", "desc"], "default": "desc", "description": SORT_ORDER_DESCRIPTION}
                }
            }),
            Self::SearchInvestors => json!({
                "type": "object",
                "properties": {
                    "investor_name": {"type": "string", "description": "Investor name to search for"},
                    "investor_type": {"type": "string", "description": "Type of investor (e.g., 'Venture Capital Funds', 'Corporate Investors')"},
                    "investor_country": {"type": "string", "description": "Country where the investor is based"},
                    "portfolio_sector": {"type": "string", "description": "Sector/feed name in their portfolio (e.g., 'Cybersecurity')"},
                    "limit": {"type": "integer", "default": 5, "description": LIMIT_DESCRIPTION},
                    "offset": {"type": "integer", "default": 0, "description": OFFSET_DESCRIPTION},
                    "min_investment_score": {"type": "integer", "description": "Minimum investment score (0-100)"}
                }
            }),
            Self::SearchAcquisitions => json!({
                "type": "object",
                "properties": {
                    "acquisition_type": {"type": "string", "description": "Type of acquisition (e.g., 'Business Acquisition')"},
                    "start_date": {"type": "string", "description": "Start date for acquisitions (dd/mm/yyyy)"},
                    "end_date": {"type": "string", "description": "End date for acquisitions (dd/mm/yyyy)"},
                    "acquirer_domain": {"type": "string", "description": "Domain of the acquirer (e.g., 'google.com')"},
                    "sector": {"type": "string", "description": "Sector/feed name (e.g., 'Cybersecurity')"},
                    "min_amount": {"type": "integer", "description": "Minimum acquisition amount in USD"},
                    "max_amount": {"type": "integer", "description": "Maximum acquisition amount in USD"},
                    "country": {"type": "string", "description": "Country to filter by"},
                    "limit": {"type": "integer", "default": 5, "description": LIMIT_DESCRIPTION},
                    "offset": {"type": "integer", "default": 0, "description": OFFSET_DESCRIPTION},
                    "sort_by": {
                        "type": "string",
                        "enum": ["announcementDate", "acquisitiontransactionNormalizedAmount"],
                        "default": "announcementDate",
                        "description": "Field to sort results by"
                    },
                    "sort_order": {"type": "string", "enum": ["asc", "desc"], "default": "desc", "description": SORT_ORDER_DESCRIPTION}
                }
            }),
            Self::SearchPracticeAreas => json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Practice area name to search for (e.g., 'Enterprise Infrastructure')"},
                    "id": {"type": "string", "description": "Practice area ID to search for"},
                    "limit": {"type": "integer", "default": 5, "description": LIMIT_DESCRIPTION},
                    "offset": {"type": "integer", "default": 0, "description": OFFSET_DESCRIPTION}
                }
            }),
            Self::SearchFeeds => json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Feed name to search for (e.g., 'Aviation Software')"},
                    "primary_geography": {"type": "string", "description": "Primary geography (e.g., 'Global')"},
                    "id": {"type": "string", "description": "Feed ID to search for"},
                    "limit": {"type": "integer", "default": 5, "description": LIMIT_DESCRIPTION},
                    "offset": {"type": "integer", "default": 0, "description": OFFSET_DESCRIPTION}
                }
            }),
            Self::SearchBusinessModels => json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Business model name to search for"},
                    "id": {"type": "string", "description": "Business model ID to search for"},
                    "limit": {"type": "integer", "default": 5, "description": LIMIT_DESCRIPTION},
                    "offset": {"type": "integer", "default": 0, "description": OFFSET_DESCRIPTION}
                },
                "anyOf": [
                    {"required": ["name"]},
                    {"required": ["id"]}
                ]
            }),
            Self::DiagnoseApiRequest => json!({
                "type": "object",
                "properties": {
                    "endpoint": {"type": "string", "description": "API endpoint to test"},
                    "request_data": {"type": "object", "description": "Initial request data to test"}
                },
                "required": ["endpoint", "request_data"]
            }),
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
