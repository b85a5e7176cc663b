use crate::shared::ApiResponse;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Category
// ============================================================================

/// Top-level product category. The backend identifies categories by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Subcategory
// ============================================================================

/// Subcategory name, unique only within its parent category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subcategory(pub String);

impl Subcategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Subcategories together with the category they were loaded for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategorySet {
    pub category: Category,
    pub items: Vec<Subcategory>,
}

impl SubcategorySet {
    pub fn new(category: Category, items: Vec<Subcategory>) -> Self {
        Self { category, items }
    }

    pub fn belongs_to(&self, category_name: &str) -> bool {
        self.category.name() == category_name
    }

    pub fn contains(&self, subcategory_name: &str) -> bool {
        self.items.iter().any(|s| s.name() == subcategory_name)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// `GET /categories`
pub type CategoryListResponse = ApiResponse<Vec<Category>>;

/// `GET /categories/subcategories?categoryName=..`
pub type SubcategoryListResponse = ApiResponse<Vec<Subcategory>>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_categories_are_plain_strings_on_the_wire() {
        let resp: CategoryListResponse =
            serde_json::from_value(json!({ "success": true, "data": ["Dairy", "Frozen food"] }))
                .unwrap();
        assert_eq!(
            resp.into_data().unwrap(),
            vec![Category::new("Dairy"), Category::new("Frozen food")]
        );
    }

    #[test]
    fn test_subcategory_set_membership() {
        let set = SubcategorySet::new(
            Category::new("Dairy"),
            vec![Subcategory::new("Milk"), Subcategory::new("Cheese")],
        );
        assert!(set.belongs_to("Dairy"));
        assert!(!set.belongs_to("Bakery"));
        assert!(set.contains("Cheese"));
        assert!(!set.contains("Bread"));
    }
}
