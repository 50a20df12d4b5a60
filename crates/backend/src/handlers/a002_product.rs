use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_product::{Product, ProductWizard};
use contracts::shared::wizard::SubmissionPayload;

use crate::domain::a002_product;
use crate::shared::error::ServiceError;
use crate::shared::mock;

/// GET /api/product
pub async fn list_all() -> Result<Json<Vec<Product>>, StatusCode> {
    mock::simulate_latency().await;
    match a002_product::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/product/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a002_product::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/product
pub async fn create(
    Json(payload): Json<SubmissionPayload<ProductWizard>>,
) -> Result<(StatusCode, Json<Product>), ServiceError> {
    let product = a002_product::service::create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// DELETE /api/product/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a002_product::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
