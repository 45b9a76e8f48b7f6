//! Category records.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category shown in the home screen strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// URL-friendly slug used to list the category's products.
    #[serde(default)]
    pub slug: String,
    /// Relative image filename.
    #[serde(default)]
    pub image: Option<String>,
}

impl Category {
    /// Create a category without an image.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            image: None,
        }
    }

    /// Check if the category can be used to filter products.
    pub fn has_slug(&self) -> bool {
        !self.slug.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_api_json() {
        let json = r#"{"id": 3, "name": "Consoles", "slug": "consoles", "image": "ps5.png", "status": 1}"#;
        let category: Category = serde_json::from_str(json).unwrap();

        assert_eq!(category.id, CategoryId::new(3));
        assert_eq!(category.image.as_deref(), Some("ps5.png"));
        assert!(category.has_slug());
    }

    #[test]
    fn test_category_without_slug() {
        let category: Category = serde_json::from_str(r#"{"id": 1, "name": "Misc"}"#).unwrap();
        assert!(!category.has_slug());
        assert!(category.image.is_none());
    }
}
