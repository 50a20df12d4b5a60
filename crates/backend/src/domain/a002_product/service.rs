use chrono::Utc;
use contracts::domain::a002_product::{ActivationKeyword, ChargePeriod, Product, ProductFields, ProductWizard};
use contracts::shared::wizard::{validate_payload, SubmissionPayload};
use uuid::Uuid;

use super::repository;
use crate::shared::error::ServiceError;

/// Создание продукта из результата мастера
///
/// Данные проверяются теми же правилами, что и в мастере.
pub async fn create(payload: SubmissionPayload<ProductWizard>) -> Result<Product, ServiceError> {
    validate_payload(&payload)?;

    let aggregate = Product::from_submission(payload);
    repository::insert(&aggregate).await?;

    tracing::info!(
        "Product {} '{}' created with {} keyword(s)",
        aggregate.base.code,
        aggregate.base.description,
        aggregate.keywords.len()
    );
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::delete(id).await?;
    if deleted {
        tracing::info!("Product {} deleted", id);
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    repository::list_all().await
}

fn keyword(id: &str, word: &str, trial_days: Option<u32>, period: ChargePeriod) -> ActivationKeyword {
    ActivationKeyword {
        id: id.to_string(),
        keyword: word.to_string(),
        has_trial: trial_days.is_some(),
        trial_days,
        charge_period: period,
    }
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<Vec<Product>> {
    let data = vec![
        (
            ProductFields {
                provider: "Acme Media".into(),
                name: "Daily News".into(),
                description: "Morning headlines by SMS".into(),
                category: "News".into(),
                price: Some(0.99),
                currency: "USD".into(),
            },
            vec![
                keyword("kw-1", "NEWS", Some(3), ChargePeriod::Daily),
                keyword("kw-2", "HEADLINES", None, ChargePeriod::Daily),
            ],
        ),
        (
            ProductFields {
                provider: "Goal Sports".into(),
                name: "Football Alerts".into(),
                description: "Live scores and match alerts".into(),
                category: "Sports".into(),
                price: Some(2.49),
                currency: "USD".into(),
            },
            vec![keyword("kw-1", "GOAL", Some(7), ChargePeriod::Weekly)],
        ),
        (
            ProductFields {
                provider: "Stars Inc".into(),
                name: "Horoscope".into(),
                description: "Daily horoscope".into(),
                category: String::new(),
                price: Some(4.99),
                currency: "EUR".into(),
            },
            vec![keyword("kw-1", "STARS", None, ChargePeriod::Monthly)],
        ),
    ];

    let mut created = Vec::with_capacity(data.len());
    for (fields, children) in data {
        let payload = SubmissionPayload {
            fields,
            children,
            generated_at: Utc::now(),
        };
        created.push(create(payload).await?);
    }

    tracing::info!("Seeded {} product(s)", created.len());
    Ok(created)
}
