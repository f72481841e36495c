use chrono::{DateTime, Duration, TimeZone, Utc};
use clubpress::domain::{ArticleRecord, Category, PostStatus};
use clubpress::telemetry;
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use std::sync::OnceLock;
use uuid::Uuid;

static TRACING: OnceLock<()> = OnceLock::new();

pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let default_filter_level = "info".to_string();
        let subscriber_name = "test".to_string();

        if std::env::var("TEST_LOG").is_ok() {
            let subscriber = telemetry::get_subscriber(
                subscriber_name.clone(),
                default_filter_level.clone(),
                std::io::stdout,
            );
            telemetry::init_subscriber(subscriber).expect("Failed to install subscriber");
        } else {
            let subscriber = telemetry::get_subscriber(
                subscriber_name.clone(),
                default_filter_level.clone(),
                std::io::sink,
            );
            telemetry::init_subscriber(subscriber).expect("Failed to install subscriber");
        };
    });
}

/// An article body exercising every construct a preview has to strip.
pub fn kitchen_sink_markdown(lead: &str) -> String {
    let words: Vec<String> = Words(3..6).fake();
    format!(
        "# {lead}\n\n\
         {para}\n\n\
         > **Quote:** _{quote}_\n\n\
         - [first link](https://example.com/one)\n\
         - ~~struck~~ item\n\n\
         1. ordered `inline` item\n\n\
         ![club photo](https://example.com/photo.png)\n\n\
         ```rust\nfn hidden() {{}}\n```\n\n\
         | year | members |\n|------|:-------:|\n| 2024 | 42 |\n\n\
         ---\n\n\
         <div>{html}</div>\n",
        para = Paragraph(1..3).fake::<String>(),
        quote = Sentence(3..6).fake::<String>(),
        html = words.join(" "),
    )
}

pub struct TestArticle {
    title: String,
    content: String,
    category: Category,
    status: PostStatus,
    published_at: DateTime<Utc>,
}

impl TestArticle {
    pub fn generate(category: Category) -> Self {
        Self {
            title: Sentence(2..5).fake(),
            content: kitchen_sink_markdown(&Sentence(2..4).fake::<String>()),
            category,
            status: PostStatus::Published,
            published_at: Utc
                .with_ymd_and_hms(2024, 5, 1, 3, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn draft(mut self) -> Self {
        self.status = PostStatus::Draft;
        self
    }

    pub fn days_later(mut self, days: i64) -> Self {
        self.published_at += Duration::days(days);
        self
    }

    pub fn record(self) -> ArticleRecord {
        ArticleRecord {
            id: Uuid::new_v4(),
            title: self.title,
            content: self.content,
            category: self.category,
            status: self.status,
            published_at: Some(self.published_at),
            created_at: self.published_at,
            updated_at: self.published_at,
            author_id: Some(Uuid::new_v4()),
        }
    }
}

/// Checks the shape every preview must have, whatever the input.
pub fn assert_clean_preview(preview: &str, max_length: usize) {
    assert!(preview.chars().count() <= max_length + 3, "too long: {preview:?}");
    assert_eq!(preview.trim(), preview, "outer whitespace in {preview:?}");
    assert!(!preview.contains("  "), "double space in {preview:?}");
    assert!(!preview.contains("\n\n\n"), "blank line run in {preview:?}");
    for marker in ["**", "```", "](", "![", "~~", "|", "<div", "# "] {
        assert!(!preview.contains(marker), "{marker:?} leaked into {preview:?}");
    }
}
