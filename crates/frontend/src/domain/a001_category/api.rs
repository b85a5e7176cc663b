use crate::shared::api_utils::{get_json, ApiEndpoints, ApiError};
use contracts::domain::a001_category::{Category, CategoryListResponse, SubcategoryListResponse};

/// Fetch all categories
pub async fn fetch_categories(endpoints: &ApiEndpoints) -> Result<CategoryListResponse, ApiError> {
    get_json(&endpoints.categories()).await
}

/// Fetch the subcategories of one category
pub async fn fetch_subcategories(
    endpoints: &ApiEndpoints,
    category: &Category,
) -> Result<SubcategoryListResponse, ApiError> {
    get_json(&endpoints.subcategories(category.name())).await
}
