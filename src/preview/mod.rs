//! Plain-text previews of Markdown article bodies.
//!
//! The Markdown is parsed with `pulldown-cmark` and only text-bearing events
//! are kept. Code blocks, tables, images and footnotes are skipped as whole
//! subtrees, so nothing removed early can resurface as live syntax later.
mod html;
mod markdown;
mod text;

use std::panic;

pub use text::{collapse_whitespace, truncate_with_ellipsis};

/// Preview length used when the caller has no opinion.
pub const DEFAULT_PREVIEW_LENGTH: usize = 160;

/// Marker appended to previews that were cut short.
pub const ELLIPSIS: &str = "...";

/// Turns Markdown `content` into a single plain-text preview of at most
/// `max_length` characters, plus [`ELLIPSIS`] when the text had to be cut.
///
/// Lengths are counted in Unicode scalar values, not bytes. A `max_length`
/// of zero yields `""` for empty content and `"..."` for anything else.
///
/// This never fails: malformed Markdown degrades to best-effort plain text.
#[tracing::instrument(level = "trace", skip(content), fields(content_len = content.len()))]
pub fn normalize_preview(content: &str, max_length: usize) -> String {
    let cleaned = markdown_to_plain_text(content);
    truncate_with_ellipsis(&cleaned, max_length)
}

/// [`normalize_preview`] with [`DEFAULT_PREVIEW_LENGTH`].
pub fn normalize_preview_default(content: &str) -> String {
    normalize_preview(content, DEFAULT_PREVIEW_LENGTH)
}

/// Strips Markdown syntax from `content` and collapses whitespace, without
/// truncating.
pub fn markdown_to_plain_text(content: &str) -> String {
    match panic::catch_unwind(|| markdown::extract_text(content)) {
        Ok(extracted) => squeeze(&extracted),
        Err(_) => fallback(content),
    }
}

/// Plain text for content the Markdown walk could not handle: the raw input
/// with its whitespace collapsed.
fn fallback(content: &str) -> String {
    tracing::warn!(
        content_len = content.len(),
        "Markdown extraction panicked, falling back to raw content"
    );
    squeeze(content)
}

fn squeeze(text: &str) -> String {
    collapse_whitespace(text).trim().to_string()
}
