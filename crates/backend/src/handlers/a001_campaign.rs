use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_campaign::{Campaign, CampaignWizard};
use contracts::shared::wizard::SubmissionPayload;

use crate::domain::a001_campaign;
use crate::shared::error::ServiceError;
use crate::shared::mock;

/// GET /api/campaign
pub async fn list_all() -> Result<Json<Vec<Campaign>>, StatusCode> {
    mock::simulate_latency().await;
    match a001_campaign::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/campaign/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Campaign>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a001_campaign::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/campaign
pub async fn create(
    Json(payload): Json<SubmissionPayload<CampaignWizard>>,
) -> Result<(StatusCode, Json<Campaign>), ServiceError> {
    let campaign = a001_campaign::service::create(payload).await?;
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// DELETE /api/campaign/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a001_campaign::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
