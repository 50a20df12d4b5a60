use contracts::domain::a001_campaign::CampaignWizard;
use contracts::domain::a002_product::Product;
use contracts::shared::wizard::SubmissionPayload;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

/// Отправить результат мастера кампании
pub async fn submit(payload: SubmissionPayload<CampaignWizard>) -> Result<(), String> {
    let response = Request::post(&api_url("/api/campaign"))
        .json(&payload)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// Продукты для сегментации по подписчикам
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/product"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
