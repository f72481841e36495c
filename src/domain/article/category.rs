use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Badge classes for categories the site does not know about.
pub const DEFAULT_CATEGORY_COLOR: &str = "bg-gray-100 text-gray-800";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Column,
    Interview,
    Survey,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::News,
        Category::Column,
        Category::Interview,
        Category::Survey,
    ];

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "news" => Ok(Self::News),
            "column" => Ok(Self::Column),
            "interview" => Ok(Self::Interview),
            "survey" => Ok(Self::Survey),
            other => Err(format!("Invalid category: {other:?} is not a known category.")),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Column => "column",
            Self::Interview => "interview",
            Self::Survey => "survey",
        }
    }

    /// Display label shown on category badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::News => "ニュース",
            Self::Column => "コラム",
            Self::Interview => "インタビュー",
            Self::Survey => "アンケート企画",
        }
    }

    /// Tailwind classes for the category badge.
    pub fn color(&self) -> &'static str {
        match self {
            Self::News => "bg-red-100 text-red-800",
            Self::Column => "bg-blue-100 text-blue-800",
            Self::Interview => "bg-green-100 text-green-800",
            Self::Survey => "bg-purple-100 text-purple-800",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for a raw category value, or the raw value itself when unknown.
pub fn category_label(raw: &str) -> &str {
    match Category::parse(raw) {
        Ok(category) => category.label(),
        Err(_) => raw,
    }
}

/// Badge classes for a raw category value, gray when unknown.
pub fn category_color(raw: &str) -> &'static str {
    Category::parse(raw)
        .map(|c| c.color())
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
}

/// Category restriction for article listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// `None`, an empty value and `"all"` mean no restriction. Names match
    /// exactly, with no trimming or case folding.
    pub fn parse(raw: Option<&str>) -> Result<Self, String> {
        match raw {
            None | Some("") | Some("all") => Ok(Self::All),
            Some(value) => Category::parse(value).map(Self::Only),
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}
