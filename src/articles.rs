//! Shapes article rows fetched by the storage layer into what the public
//! pages serve: listings with previews, search results and article details.
use crate::configuration::PreviewSettings;
use crate::dates::format_timestamp_long;
use crate::domain::{
    ArticleDetail, ArticleRecord, ArticleSummary, Category, CategoryFilter, ResultLimit,
    SearchQuery,
};
use crate::error_chain_fmt;
use crate::preview::normalize_preview;
use anyhow::Context;

#[derive(thiserror::Error)]
pub enum ArticleError {
    #[error("{0}")]
    ValidationError(String),

    #[error("article not found")]
    NotFound,

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ArticleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Decodes the JSON array a query API returns for the `posts` table.
pub fn decode_records(rows: serde_json::Value) -> Result<Vec<ArticleRecord>, ArticleError> {
    let records = serde_json::from_value(rows).context("Failed to decode article rows")?;
    Ok(records)
}

/// Published articles, newest first, optionally restricted to one category.
#[tracing::instrument(skip(records, settings), fields(records = records.len()))]
pub fn list_published(
    records: &[ArticleRecord],
    category: Option<&str>,
    limit: Option<i64>,
    settings: &PreviewSettings,
) -> Result<Vec<ArticleSummary>, ArticleError> {
    let filter = CategoryFilter::parse(category).map_err(ArticleError::ValidationError)?;
    let limit = limit.filter(|l| *l > 0).map(|l| ResultLimit::parse(Some(l), 0));

    Ok(summarize(
        records,
        |record| filter.admits(record.category),
        limit,
        settings,
    ))
}

/// Published articles of a single category. Unlike [`list_published`],
/// `"all"` is not a category here.
#[tracing::instrument(skip(records, settings), fields(records = records.len()))]
pub fn list_by_category(
    records: &[ArticleRecord],
    category: &str,
    settings: &PreviewSettings,
) -> Result<Vec<ArticleSummary>, ArticleError> {
    let category = Category::parse(category).map_err(ArticleError::ValidationError)?;

    Ok(summarize(
        records,
        |record| record.category == category,
        None,
        settings,
    ))
}

/// Published articles whose title contains `query`. A blank query finds
/// nothing rather than everything.
#[tracing::instrument(skip(records, query, settings), fields(records = records.len(), query = %query))]
pub fn search(
    records: &[ArticleRecord],
    query: String,
    limit: Option<i64>,
    settings: &PreviewSettings,
) -> Result<Vec<ArticleSummary>, ArticleError> {
    let query = match SearchQuery::parse(query) {
        Ok(Some(query)) => query,
        Ok(None) => return Ok(Vec::new()),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected search query");
            return Err(ArticleError::ValidationError(e));
        }
    };
    let limit = ResultLimit::parse(limit, settings.search_limit);

    Ok(summarize(
        records,
        |record| query.matches(&record.title),
        Some(limit),
        settings,
    ))
}

/// The article page payload. Drafts are indistinguishable from missing rows.
#[tracing::instrument(skip(record, settings), fields(id = ?record.map(|r| r.id)))]
pub fn detail(
    record: Option<&ArticleRecord>,
    settings: &PreviewSettings,
) -> Result<ArticleDetail, ArticleError> {
    let record = record
        .filter(|r| r.is_published())
        .ok_or(ArticleError::NotFound)?;
    let published_at = record.shown_at();

    Ok(ArticleDetail {
        id: record.id,
        title: record.title.clone(),
        content: record.content.clone(),
        category: record.category,
        category_label: record.category.label(),
        published_at,
        published_on: format_timestamp_long(published_at),
        description: normalize_preview(&record.content, settings.description_length),
    })
}

fn summarize<F>(
    records: &[ArticleRecord],
    wanted: F,
    limit: Option<ResultLimit>,
    settings: &PreviewSettings,
) -> Vec<ArticleSummary>
where
    F: Fn(&ArticleRecord) -> bool,
{
    let mut selected: Vec<&ArticleRecord> = records
        .iter()
        .filter(|r| r.is_published() && wanted(*r))
        .collect();
    selected.sort_by(|a, b| b.shown_at().cmp(&a.shown_at()));

    let take = limit.map_or(selected.len(), |l| l.value());

    selected
        .into_iter()
        .take(take)
        .map(|record| ArticleSummary {
            id: record.id,
            title: record.title.clone(),
            category: record.category,
            preview: normalize_preview(&record.content, settings.list_length),
            published_at: record.shown_at(),
        })
        .collect()
}
