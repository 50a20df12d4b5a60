use contracts::domain::a002_product::ProductWizard;
use contracts::shared::wizard::SubmissionPayload;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, error_message};

/// Отправить результат мастера продукта
pub async fn submit(payload: SubmissionPayload<ProductWizard>) -> Result<(), String> {
    let response = Request::post(&api_url("/api/product"))
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
