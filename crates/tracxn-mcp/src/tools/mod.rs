//! MCP tool implementations.
//!
//! A call is parsed once at the boundary into a [`ToolCall`] carrying its typed
//! input, then run through its pipeline:
//! 1. Build the upstream query (required arguments are checked here)
//! 2. POST it with the Tracxn client
//! 3. Normalize the response to text
//!
//! Upstream failures are folded into the normalized text. Only dispatch
//! problems (unknown tool, bad or missing arguments) surface as [`ToolError`].

mod catalog;
mod companies;
mod deals;
pub mod diagnostics;
mod taxonomy;

pub use catalog::ToolKind;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::TracxnClient;
use crate::error::{ClientResult, ToolError, ToolResult};
use crate::models::{
    CompanyLookupInput, CompanyNameSearchInput, DebugCallInput, DiagnoseRequestInput,
    FeedSearchInput, FundedCompaniesInput, SearchAcquisitionsInput, SearchCompaniesInput,
    SearchInvestorsInput, SearchTransactionsInput, TaxonomySearchInput,
};
use crate::query::UpstreamQuery;

/// Tool execution context.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// API client.
    pub client: Arc<TracxnClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub const fn new(client: Arc<TracxnClient>) -> Self {
        Self { client }
    }

    /// POST a built query to its endpoint.
    async fn fetch(&self, query: &UpstreamQuery) -> ClientResult<Value> {
        self.client.post_json(query.endpoint.path(), &query.body()).await
    }
}

/// A parsed tool invocation.
#[derive(Debug, Clone)]
pub enum ToolCall {
    SearchCompanies(SearchCompaniesInput),
    CompanyLookup(CompanyLookupInput),
    FundedCompanies(FundedCompaniesInput),
    SearchCompaniesByName(CompanyNameSearchInput),
    SearchTransactions(SearchTransactionsInput),
    SearchInvestors(SearchInvestorsInput),
    SearchAcquisitions(SearchAcquisitionsInput),
    SearchPracticeAreas(TaxonomySearchInput),
    SearchFeeds(FeedSearchInput),
    SearchBusinessModels(TaxonomySearchInput),
    DiagnoseApiRequest(DiagnoseRequestInput),
    DebugApiCall(DebugCallInput),
}

impl ToolCall {
    /// Resolve a tool name and decode its arguments.
    ///
    /// `null` arguments are read as an empty object.
    ///
    /// # Errors
    ///
    /// [`ToolError::UnknownTool`] for an unregistered name,
    /// [`ToolError::InvalidArguments`] when a field has the wrong type.
    pub fn parse(name: &str, arguments: Value) -> ToolResult<Self> {
        let kind = ToolKind::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let args = if arguments.is_null() { Value::Object(serde_json::Map::new()) } else { arguments };

        Ok(match kind {
            ToolKind::SearchCompanies => Self::SearchCompanies(decode(args)?),
            ToolKind::CompanyLookup => Self::CompanyLookup(decode(args)?),
            ToolKind::FundedCompanies => Self::FundedCompanies(decode(args)?),
            ToolKind::SearchCompaniesByName => Self::SearchCompaniesByName(decode(args)?),
            ToolKind::SearchTransactions => Self::SearchTransactions(decode(args)?),
            ToolKind::SearchInvestors => Self::SearchInvestors(decode(args)?),
            ToolKind::SearchAcquisitions => Self::SearchAcquisitions(decode(args)?),
            ToolKind::SearchPracticeAreas => Self::SearchPracticeAreas(decode(args)?),
            ToolKind::SearchFeeds => Self::SearchFeeds(decode(args)?),
            ToolKind::SearchBusinessModels => Self::SearchBusinessModels(decode(args)?),
            ToolKind::DiagnoseApiRequest => Self::DiagnoseApiRequest(decode(args)?),
            ToolKind::DebugApiCall => Self::DebugApiCall(decode(args)?),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ToolKind {
        match self {
            Self::SearchCompanies(_) => ToolKind::SearchCompanies,
            Self::CompanyLookup(_) => ToolKind::CompanyLookup,
            Self::FundedCompanies(_) => ToolKind::FundedCompanies,
            Self::SearchCompaniesByName(_) => ToolKind::SearchCompaniesByName,
            Self::SearchTransactions(_) => ToolKind::SearchTransactions,
            Self::SearchInvestors(_) => ToolKind::SearchInvestors,
            Self::SearchAcquisitions(_) => ToolKind::SearchAcquisitions,
            Self::SearchPracticeAreas(_) => ToolKind::SearchPracticeAreas,
            Self::SearchFeeds(_) => ToolKind::SearchFeeds,
            Self::SearchBusinessModels(_) => ToolKind::SearchBusinessModels,
            Self::DiagnoseApiRequest(_) => ToolKind::DiagnoseApiRequest,
            Self::DebugApiCall(_) => ToolKind::DebugApiCall,
        }
    }

    /// Run the pipeline for this call.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::MissingArgument`] before any request when a
    /// required argument is absent.
    pub async fn execute(self, ctx: &ToolContext) -> ToolResult<String> {
        match self {
            Self::SearchCompanies(input) => Ok(companies::search_companies(ctx, &input).await),
            Self::CompanyLookup(input) => companies::company_lookup(ctx, &input).await,
            Self::FundedCompanies(input) => Ok(companies::funded_companies(ctx, &input).await),
            Self::SearchCompaniesByName(input) => companies::search_by_name(ctx, &input).await,
            Self::SearchTransactions(input) => Ok(deals::search_transactions(ctx, &input).await),
            Self::SearchInvestors(input) => Ok(deals::search_investors(ctx, &input).await),
            Self::SearchAcquisitions(input) => Ok(deals::search_acquisitions(ctx, &input).await),
            Self::SearchPracticeAreas(input) => Ok(taxonomy::search_practice_areas(ctx, &input).await),
            Self::SearchFeeds(input) => Ok(taxonomy::search_feeds(ctx, &input).await),
            Self::SearchBusinessModels(input) => taxonomy::search_business_models(ctx, &input).await,
            Self::DiagnoseApiRequest(input) => diagnostics::diagnose_api_request(ctx, input).await,
            Self::DebugApiCall(input) => diagnostics::debug_api_call(ctx, input).await,
        }
    }
}

/// Parse and run a tool call by name.
///
/// # Errors
///
/// Returns any [`ToolError`] from [`ToolCall::parse`] or [`ToolCall::execute`].
pub async fn dispatch(ctx: &ToolContext, name: &str, arguments: Value) -> ToolResult<String> {
    let call = ToolCall::parse(name, arguments)?;
    tracing::info!(tool = call.kind().name(), "Executing tool");
    call.execute(ctx).await
}

fn decode<T: DeserializeOwned>(args: Value) -> ToolResult<T> {
    serde_json::from_value(args).map_err(ToolError::InvalidArguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_unknown_tool() {
        let err = ToolCall::parse("nope", json!({})).unwrap_err();
        assert_eq!(err.to_user_message(), "Error: Unknown tool 'nope'");
    }

    #[test]
    fn test_parse_null_arguments() {
        let call = ToolCall::parse("search_feeds", Value::Null).unwrap();
        assert_eq!(call.kind(), ToolKind::SearchFeeds);
    }

    #[test]
    fn test_parse_type_mismatch() {
        let err = ToolCall::parse("company_lookup", json!({"domain": {"nested": true}})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn test_every_kind_parses_empty_object() {
        for kind in ToolKind::ALL {
            let call = ToolCall::parse(kind.name(), json!({})).unwrap();
            assert_eq!(call.kind(), *kind);
        }
    }
}
