use crate::helpers::{assert_clean_preview, init_tracing, kitchen_sink_markdown};
use clubpress::preview::{DEFAULT_PREVIEW_LENGTH, markdown_to_plain_text};
use clubpress::{normalize_preview, normalize_preview_default};

// ============================================================================
// Full article bodies
// ============================================================================

#[test]
fn kitchen_sink_article_produces_a_clean_preview() {
    init_tracing();

    for _ in 0..20 {
        let content = kitchen_sink_markdown("Spring Recruiting");
        let preview = normalize_preview(&content, 150);
        assert_clean_preview(&preview, 150);
        assert!(preview.starts_with("Spring Recruiting\n"), "{preview:?}");
    }
}

#[test]
fn kitchen_sink_article_hides_code_tables_and_images() {
    init_tracing();

    let plain = markdown_to_plain_text(&kitchen_sink_markdown("Club news"));
    assert!(!plain.contains("fn hidden"));
    assert!(!plain.contains("members"));
    assert!(!plain.contains("club photo"));
    assert!(!plain.contains("https://"));
    assert!(plain.contains("first link"));
    assert!(plain.contains("struck item"));
    assert!(plain.contains("ordered inline item"));
}

#[test]
fn japanese_article_is_cut_by_characters() {
    init_tracing();

    let content = format!("## 新歓のお知らせ\n\n{}", "春の新歓イベントを開催します。".repeat(20));
    let preview = normalize_preview_default(&content);
    assert_eq!(preview.chars().count(), DEFAULT_PREVIEW_LENGTH + 3);
    assert!(preview.starts_with("新歓のお知らせ\n春の新歓"));
    assert!(preview.ends_with("..."));
}

// ============================================================================
// Degenerate input
// ============================================================================

#[test]
fn whitespace_only_content_gives_an_empty_preview() {
    init_tracing();

    assert_eq!(normalize_preview(" \n\t\n\u{3000} ", 50), "");
}

#[test]
fn markup_only_content_gives_an_empty_preview() {
    init_tracing();

    let content = "```\ncode only\n```\n\n---\n\n![img](https://example.com/a.png)\n";
    assert_eq!(normalize_preview(content, 50), "");
}

#[test]
fn malformed_markdown_never_panics() {
    init_tracing();

    let inputs = [
        "[unclosed link(",
        "**bold _mixed** nesting_",
        "```\nnever closed fence",
        "<div><p>unclosed",
        "> > > deeply\n> > nested",
        "| lone | pipes |\n|---",
        "\u{0}\u{feff}\r\n\r\n",
    ];

    for input in inputs {
        let preview = normalize_preview(input, 40);
        assert!(preview.chars().count() <= 43);
        assert_eq!(preview.trim(), preview);
    }
}

#[test]
fn previews_are_deterministic() {
    init_tracing();

    let content = kitchen_sink_markdown("Determinism");
    assert_eq!(normalize_preview(&content, 90), normalize_preview(&content, 90));
}
