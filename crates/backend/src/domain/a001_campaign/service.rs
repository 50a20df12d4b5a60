use chrono::{Duration, NaiveTime, Utc};
use contracts::domain::a001_campaign::{
    Campaign, CampaignChannel, CampaignFields, CampaignSend, CampaignWizard, Schedule,
    SegmentationType,
};
use contracts::domain::a002_product::Product;
use contracts::shared::wizard::{validate_payload, SubmissionPayload};
use uuid::Uuid;

use super::repository;
use crate::shared::error::ServiceError;

/// Создание кампании из результата мастера
pub async fn create(payload: SubmissionPayload<CampaignWizard>) -> Result<Campaign, ServiceError> {
    validate_payload(&payload)?;

    let aggregate = Campaign::from_submission(payload);
    repository::insert(&aggregate).await?;

    tracing::info!(
        "Campaign {} '{}' created with {} send(s)",
        aggregate.base.code,
        aggregate.base.description,
        aggregate.sends.len()
    );
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    let deleted = repository::delete(id).await?;
    if deleted {
        tracing::info!("Campaign {} deleted", id);
    }
    Ok(deleted)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Campaign>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Campaign>> {
    repository::list_all().await
}

/// Вставка тестовых данных; рассылки ссылаются на переданные продукты
pub async fn insert_test_data(products: &[Product]) -> anyhow::Result<usize> {
    let today = Utc::now().date_naive();
    let ten_am = NaiveTime::from_hms_opt(10, 0, 0);
    let product_ids: Vec<String> = products.iter().map(|p| p.base.id.0.to_string()).collect();

    let mut data = Vec::new();

    if !product_ids.is_empty() {
        let mut send = CampaignSend::new("send-1".into());
        send.short_code = "12345".into();
        send.sms_text = "Black Friday: 50% off all subscriptions!".into();
        send.segmentation = SegmentationType::ActiveUsers;
        send.product_ids = product_ids.iter().take(2).cloned().collect();
        send.schedules = vec![
            Schedule {
                date: Some(today + Duration::days(3)),
                time: ten_am,
                ..Default::default()
            },
            Schedule {
                date: Some(today + Duration::days(10)),
                time: ten_am,
                ..Default::default()
            },
        ];

        data.push((
            CampaignFields {
                name: "Black Friday".into(),
                description: "Seasonal promo for active subscribers".into(),
                channel: CampaignChannel::Sms,
                execution_date: Some(today + Duration::days(3)),
                end_date: send.latest_date(),
            },
            vec![send],
        ));
    }

    let mut send = CampaignSend::new("send-1".into());
    send.short_code = "777".into();
    send.sms_text = "We miss you! Come back and get a free week.".into();
    send.segmentation = SegmentationType::FileUpload;
    send.schedules = vec![Schedule {
        date: Some(today - Duration::days(20)),
        time: NaiveTime::from_hms_opt(18, 30, 0),
        quantity: Some(5000),
        file: Some("uploads/winback.csv".into()),
    }];
    data.push((
        CampaignFields {
            name: "Win-back".into(),
            description: "Reactivation of churned users".into(),
            channel: CampaignChannel::Sms,
            execution_date: Some(today - Duration::days(20)),
            end_date: send.latest_date(),
        },
        vec![send],
    ));

    let count = data.len();
    for (fields, children) in data {
        let payload = SubmissionPayload {
            fields,
            children,
            generated_at: Utc::now(),
        };
        create(payload).await?;
    }

    tracing::info!("Seeded {} campaign(s)", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use contracts::shared::wizard::ValidationReason;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn valid_send() -> CampaignSend {
        let mut send = CampaignSend::new("send-1".into());
        send.short_code = "12345".into();
        send.sms_text = "Hello".into();
        send.product_ids = vec!["prod-1".into()];
        send.schedules[0].date = Some(date("2025-11-05"));
        send.schedules[0].time = NaiveTime::from_hms_opt(10, 0, 0);
        send
    }

    fn payload(children: Vec<CampaignSend>) -> SubmissionPayload<CampaignWizard> {
        SubmissionPayload {
            fields: CampaignFields {
                name: "Black Friday".into(),
                description: "promo".into(),
                execution_date: Some(date("2025-11-01")),
                end_date: Some(date("2025-11-05")),
                ..Default::default()
            },
            children,
            generated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_stores_campaign() {
        let campaign = create(payload(vec![valid_send()])).await.unwrap();
        let stored = get_by_id(campaign.base.id.0).await.unwrap().unwrap();
        assert_eq!(stored.sends.len(), 1);
        assert!(stored.base.code.starts_with("CMP-"));
        assert!(list_all()
            .await
            .unwrap()
            .iter()
            .any(|c| c.base.id == campaign.base.id));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload() {
        let result = create(payload(Vec::new())).await;
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "must create at least one send");

        let mut send = valid_send();
        send.sms_text = "x".repeat(161);
        assert!(matches!(
            create(payload(vec![send])).await,
            Err(ServiceError::Validation(ValidationReason::InvalidValue { .. }))
        ));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_send_ids() {
        let mut second = valid_send();
        second.sms_text = "Second wave".into();
        let err = create(payload(vec![valid_send(), second])).await.unwrap_err();
        assert!(matches!(
            &err,
            ServiceError::Validation(ValidationReason::DuplicateValue { label: "Id", value })
                if value == "send-1"
        ));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        assert!(!delete(Uuid::new_v4()).await.unwrap());
    }
}
