use crate::shared::api_utils::{post_json, ApiEndpoints, ApiError};
use contracts::domain::a002_product::{CreateProductRequest, CreateProductResponse};

pub async fn create_product(
    endpoints: &ApiEndpoints,
    request: &CreateProductRequest,
) -> Result<CreateProductResponse, ApiError> {
    post_json(&endpoints.products(), request).await
}
