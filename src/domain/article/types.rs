use super::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

/// An article row as handed over by the storage layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArticleRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub status: PostStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
}

impl ArticleRecord {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Publication time, or creation time for rows published before the
    /// column existed.
    pub fn shown_at(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }
}

/// One entry of a public article listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummary {
    pub id: Uuid,
    pub title: String,
    pub category: Category,
    pub preview: String,
    pub published_at: DateTime<Utc>,
}

/// A published article with the metadata its page needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetail {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub category_label: &'static str,
    pub published_at: DateTime<Utc>,
    pub published_on: String,
    /// Plain-text summary for link previews and `<meta name="description">`.
    pub description: String,
}
