//! Classification tools: practice areas, feeds, business models.

use super::ToolContext;
use crate::error::ToolResult;
use crate::models::{FeedSearchInput, TaxonomySearchInput};
use crate::normalize;
use crate::query::builders;

pub async fn search_practice_areas(ctx: &ToolContext, input: &TaxonomySearchInput) -> String {
    let query = builders::search_practice_areas(input);
    tracing::info!(name = ?input.name, id = ?input.id, "Searching practice areas");
    let result = ctx.fetch(&query).await;
    normalize::search_practice_areas(&result, &query).render()
}

pub async fn search_feeds(ctx: &ToolContext, input: &FeedSearchInput) -> String {
    let query = builders::search_feeds(input);
    tracing::info!(
        name = ?input.name,
        primary_geography = ?input.primary_geography,
        id = ?input.id,
        "Searching feeds"
    );
    let result = ctx.fetch(&query).await;
    normalize::search_feeds(&result, &query).render()
}

pub async fn search_business_models(
    ctx: &ToolContext,
    input: &TaxonomySearchInput,
) -> ToolResult<String> {
    let query = builders::search_business_models(input)?;
    tracing::info!(name = ?input.name, id = ?input.id, "Searching business models");
    let result = ctx.fetch(&query).await;
    Ok(normalize::search_business_models(&result, &query).render())
}
