use axum::{routing::get, Router};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Campaign handlers
        .route(
            "/api/campaign",
            get(handlers::a001_campaign::list_all).post(handlers::a001_campaign::create),
        )
        .route(
            "/api/campaign/:id",
            get(handlers::a001_campaign::get_by_id).delete(handlers::a001_campaign::delete),
        )
        // A002 Product handlers
        .route(
            "/api/product",
            get(handlers::a002_product::list_all).post(handlers::a002_product::create),
        )
        .route(
            "/api/product/:id",
            get(handlers::a002_product::get_by_id).delete(handlers::a002_product::delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = configure_routes().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let response = configure_routes().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_campaign_is_unprocessable() {
        let (status, body) = send(post(
            "/api/campaign",
            json!({
                "aggregateFields": {
                    "campaignName": "",
                    "description": "promo",
                    "channel": "sms"
                },
                "childEntities": [],
                "generatedAt": "2025-11-01T10:00:00Z"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"],
            "complete all required fields: Campaign name"
        );
    }

    #[tokio::test]
    async fn test_product_create_then_fetch() {
        let (status, body) = send(post(
            "/api/product",
            json!({
                "aggregateFields": {
                    "provider": "Acme",
                    "productName": "Daily News",
                    "description": "news",
                    "category": "",
                    "price": 0.99,
                    "currency": "USD"
                },
                "childEntities": [{
                    "id": "kw-1",
                    "keyword": "NEWS",
                    "hasTrial": false,
                    "trialDays": null,
                    "chargePeriod": "daily"
                }],
                "generatedAt": "2025-11-01T10:00:00Z"
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let id = body["id"].as_str().unwrap().to_string();
        let request = Request::get(format!("/api/product/{}", id))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keywords"][0]["keyword"], "NEWS");
    }

    #[tokio::test]
    async fn test_duplicate_child_ids_are_unprocessable() {
        let keyword = json!({
            "id": "kw-1",
            "keyword": "NEWS",
            "hasTrial": false,
            "trialDays": null,
            "chargePeriod": "daily"
        });
        let mut second = keyword.clone();
        second["keyword"] = json!("SPORT");

        let (status, body) = send(post(
            "/api/product",
            json!({
                "aggregateFields": {
                    "provider": "Acme",
                    "productName": "Daily News",
                    "description": "news",
                    "category": "",
                    "price": 0.99,
                    "currency": "USD"
                },
                "childEntities": [keyword, second],
                "generatedAt": "2025-11-01T10:00:00Z"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Id \"kw-1\" is already used");
    }

    #[tokio::test]
    async fn test_bad_id_and_unknown_id() {
        let request = Request::get("/api/campaign/not-a-uuid")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(request).await.0, StatusCode::BAD_REQUEST);

        let request = Request::delete(format!("/api/campaign/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(request).await.0, StatusCode::NOT_FOUND);
    }
}
