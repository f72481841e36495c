use crate::helpers::{TestArticle, assert_clean_preview, init_tracing};
use clubpress::articles::{ArticleError, detail, list_by_category, list_published};
use clubpress::configuration::PreviewSettings;
use clubpress::domain::Category;

fn feed() -> Vec<clubpress::domain::ArticleRecord> {
    vec![
        TestArticle::generate(Category::News).titled("Oldest news").record(),
        TestArticle::generate(Category::Column).titled("Column").days_later(1).record(),
        TestArticle::generate(Category::News).titled("Newest news").days_later(3).record(),
        TestArticle::generate(Category::Interview).titled("Hidden draft").days_later(4).draft().record(),
    ]
}

// ============================================================================
// Home feed
// ============================================================================

#[test]
fn home_feed_lists_published_articles_newest_first() {
    init_tracing();

    let summaries = list_published(&feed(), None, None, &PreviewSettings::default())
        .expect("Failed to list articles");

    let titles: Vec<&str> = summaries.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Newest news", "Column", "Oldest news"]);
}

#[test]
fn home_feed_previews_use_the_list_length() {
    init_tracing();

    let settings = PreviewSettings::default();
    let summaries = list_published(&feed(), None, None, &settings).expect("Failed to list articles");

    for summary in &summaries {
        assert_clean_preview(&summary.preview, settings.list_length);
    }
}

#[test]
fn home_feed_serializes_to_the_public_json_shape() {
    init_tracing();

    let summaries = list_published(&feed(), Some("news"), Some(1), &PreviewSettings::default())
        .expect("Failed to list articles");
    let body = serde_json::to_value(&summaries).expect("Failed to serialize summaries");

    let entries = body.as_array().expect("array body");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "Newest news");
    assert_eq!(entries[0]["category"], "news");
    assert!(entries[0]["preview"].is_string());
    assert!(entries[0]["published_at"].is_string());
}

// ============================================================================
// Category pages
// ============================================================================

#[test]
fn category_page_rejects_unknown_categories() {
    init_tracing();

    let result = list_by_category(&feed(), "sports", &PreviewSettings::default());
    assert!(matches!(result, Err(ArticleError::ValidationError(_))));
}

#[test]
fn category_page_hides_drafts() {
    init_tracing();

    let summaries = list_by_category(&feed(), "interview", &PreviewSettings::default())
        .expect("Failed to list category");
    assert!(summaries.is_empty());
}

// ============================================================================
// Article detail
// ============================================================================

#[test]
fn detail_description_uses_the_description_length() {
    init_tracing();

    let settings = PreviewSettings {
        description_length: 40,
        ..PreviewSettings::default()
    };
    let records = feed();

    let article = detail(records.first(), &settings).expect("Failed to build detail");
    assert_clean_preview(&article.description, 40);
    assert_eq!(article.published_on, "2024年5月1日");
    assert_eq!(article.category_label, "ニュース");
}

#[test]
fn detail_of_a_draft_is_not_found() {
    init_tracing();

    let records = feed();
    let result = detail(records.last(), &PreviewSettings::default());
    assert!(matches!(result, Err(ArticleError::NotFound)));
}
