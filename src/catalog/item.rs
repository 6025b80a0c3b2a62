//! Page data handed to the gallery views

use super::error::CatalogError;

/// `<category>/<item>` address of an item page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRef {
    pub category: String,
    pub item: String,
}

impl ItemRef {
    pub fn new(category: impl Into<String>, item: impl Into<String>) -> Self {
        Self { category: category.into(), item: item.into() }
    }

    /// Parse `category/item`. Segments past the second are ignored.
    pub fn parse(path: &str) -> Result<Self, CatalogError> {
        let mut parts = path.trim_start_matches('/').split('/');
        match (parts.next(), parts.next()) {
            (Some(category), Some(item)) => Ok(Self::new(category, item)),
            _ => Err(CatalogError::InvalidPath(path.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPage {
    pub category: String,
    pub items: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPage {
    pub category: String,
    pub item: String,
    pub description: String,
    /// File names inside the item directory
    pub images: Vec<String>,
}
