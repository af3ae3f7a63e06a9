//! Deal-flow tools: transactions, investors, acquisitions.

use super::ToolContext;
use crate::models::{SearchAcquisitionsInput, SearchInvestorsInput, SearchTransactionsInput};
use crate::normalize;
use crate::query::builders;

pub async fn search_transactions(ctx: &ToolContext, input: &SearchTransactionsInput) -> String {
    let query = builders::search_transactions(input);
    tracing::info!(filter = %query.filter.to_value(), "Searching transactions");
    let result = ctx.fetch(&query).await;
    normalize::search_transactions(&result, &query).render()
}

pub async fn search_investors(ctx: &ToolContext, input: &SearchInvestorsInput) -> String {
    let query = builders::search_investors(input);
    tracing::info!(filter = %query.filter.to_value(), "Searching investors");
    let result = ctx.fetch(&query).await;
    normalize::search_investors(&result, &query).render()
}

pub async fn search_acquisitions(ctx: &ToolContext, input: &SearchAcquisitionsInput) -> String {
    let query = builders::search_acquisitions(input);
    tracing::info!(filter = %query.filter.to_value(), "Searching acquisitions");
    let result = ctx.fetch(&query).await;
    normalize::search_acquisitions(&result, &query).render()
}
