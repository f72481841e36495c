use std::fmt;
use std::fmt::{Display, Formatter};
use unicode_segmentation::UnicodeSegmentation;

pub const MAX_SEARCH_QUERY_LENGTH: usize = 100;

/// A trimmed, non-empty title search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// A blank query means "no search" and yields `Ok(None)`.
    pub fn parse(s: String) -> Result<Option<Self>, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Ok(None);
        }

        if trimmed.graphemes(true).count() > MAX_SEARCH_QUERY_LENGTH {
            return Err("Invalid search query: cannot be longer than 100 characters.".to_string());
        }

        Ok(Some(Self(trimmed.to_string())))
    }

    /// `%term%` with LIKE wildcards and the escape character escaped, for
    /// stores that match titles with `LIKE`/`ILIKE`.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }

    /// Case-insensitive substring match against an article title.
    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.0.to_lowercase())
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
