//! Product categories as returned by `wc/v3/products/categories`.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ImageId};

/// A product category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: Option<CategoryImage>,
    /// Number of published products in the category.
    pub count: u64,
}

/// Category thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryImage {
    pub id: ImageId,
    pub src: String,
    pub alt: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_category_without_image() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "id": 15,
            "name": "Uncategorized",
            "slug": "uncategorized",
            "description": "",
            "image": null,
            "count": 3
        }))
        .unwrap();
        assert_eq!(category.id, CategoryId::new(15));
        assert!(category.image.is_none());
        assert_eq!(category.count, 3);
    }
}
