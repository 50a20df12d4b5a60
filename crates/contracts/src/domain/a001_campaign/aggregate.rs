use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::wizard::CampaignWizard;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::wizard::{ChildEntity, SubmissionPayload};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор кампании
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(pub Uuid);

impl AggregateId for CampaignId {
    fn value(&self) -> Uuid {
        self.0
    }

    fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Канал кампании
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignChannel {
    #[default]
    Sms,
    Push,
    Digital,
}

impl CampaignChannel {
    pub const ALL: [CampaignChannel; 3] = [Self::Sms, Self::Push, Self::Digital];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Push => "push",
            Self::Digital => "digital",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Push => "Push",
            Self::Digital => "Digital",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

/// Способ сегментации аудитории рассылки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentationType {
    /// Активные подписчики выбранных продуктов
    #[default]
    ActiveUsers,
    /// Неактивные (отписавшиеся) подписчики выбранных продуктов
    InactiveUsers,
    /// База номеров из загруженного файла
    FileUpload,
}

impl SegmentationType {
    pub const ALL: [SegmentationType; 3] =
        [Self::ActiveUsers, Self::InactiveUsers, Self::FileUpload];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActiveUsers => "active-users",
            Self::InactiveUsers => "inactive-users",
            Self::FileUpload => "file-upload",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ActiveUsers => "Active users",
            Self::InactiveUsers => "Inactive users",
            Self::FileUpload => "File upload",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == code)
    }

    /// Аудитория определяется выбранными продуктами (а не файлом)
    pub fn requires_products(&self) -> bool {
        !matches!(self, Self::FileUpload)
    }
}

/// Статус кампании относительно даты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Scheduled,
    Running,
    Finished,
}

// ============================================================================
// Child entities
// ============================================================================

/// Расписание отправки
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// Количество сообщений в партии
    pub quantity: Option<u32>,
    /// Ссылка на загруженный CSV с номерами (не интерпретируется)
    pub file: Option<String>,
}

impl Schedule {
    pub fn has_file(&self) -> bool {
        self.file.as_deref().is_some_and(|f| !f.trim().is_empty())
    }
}

/// Рассылка (send), дочерняя запись кампании
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSend {
    pub id: String,
    /// Короткий номер отправителя
    pub short_code: String,
    pub sms_text: String,
    #[serde(rename = "segmentationType")]
    pub segmentation: SegmentationType,
    /// ID продуктов для сегментации по подписчикам
    pub product_ids: Vec<String>,
    pub schedules: Vec<Schedule>,
}

impl CampaignSend {
    pub fn new(id: String) -> Self {
        Self {
            id,
            short_code: String::new(),
            sms_text: String::new(),
            segmentation: SegmentationType::default(),
            product_ids: Vec::new(),
            schedules: vec![Schedule::default()],
        }
    }

    /// Самая поздняя дата в расписаниях
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.schedules.iter().filter_map(|s| s.date).max()
    }

    pub fn total_quantity(&self) -> u32 {
        self.schedules
            .iter()
            .filter_map(|s| s.quantity)
            .fold(0, u32::saturating_add)
    }
}

impl ChildEntity for CampaignSend {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Wizard fields
// ============================================================================

/// Поля кампании, заполняемые в мастере
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignFields {
    #[serde(rename = "campaignName")]
    pub name: String,
    pub description: String,
    pub channel: CampaignChannel,
    pub execution_date: Option<NaiveDate>,
    /// Вычисляется по расписаниям при уходе с шага рассылок
    pub end_date: Option<NaiveDate>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Кампания (SMS/Push/Digital)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(flatten)]
    pub base: BaseAggregate<CampaignId>,

    pub channel: CampaignChannel,
    #[serde(rename = "executionDate")]
    pub execution_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub sends: Vec<CampaignSend>,
}

impl Campaign {
    pub const CODE_PREFIX: &'static str = "CMP";

    /// Создать кампанию из результата мастера
    pub fn from_submission(payload: SubmissionPayload<CampaignWizard>) -> Self {
        let SubmissionPayload {
            fields,
            children,
            generated_at,
        } = payload;

        Self {
            base: BaseAggregate::generate(
                Self::CODE_PREFIX,
                fields.name.trim().to_string(),
                Some(fields.description),
                generated_at,
            ),
            channel: fields.channel,
            execution_date: fields.execution_date,
            end_date: fields.end_date,
            sends: children,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.metadata.created_at
    }

    pub fn status(&self, today: NaiveDate) -> CampaignStatus {
        match (self.execution_date, self.end_date) {
            (Some(start), _) if today < start => CampaignStatus::Scheduled,
            (_, Some(end)) if today > end => CampaignStatus::Finished,
            (None, None) => CampaignStatus::Scheduled,
            _ => CampaignStatus::Running,
        }
    }

    pub fn total_quantity(&self) -> u32 {
        self.sends
            .iter()
            .map(CampaignSend::total_quantity)
            .fold(0, u32::saturating_add)
    }
}

impl AggregateRoot for Campaign {
    type Id = CampaignId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "campaign"
    }

    fn list_name() -> &'static str {
        "Campaigns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_from_submission() {
        let mut send = CampaignSend::new("s1".into());
        send.schedules[0].quantity = Some(100);
        let payload = SubmissionPayload::<CampaignWizard> {
            fields: CampaignFields {
                name: " Black Friday ".into(),
                description: "promo".into(),
                channel: CampaignChannel::Sms,
                execution_date: Some(date("2025-11-01")),
                end_date: Some(date("2025-11-30")),
            },
            children: vec![send],
            generated_at: Utc::now(),
        };

        let campaign = Campaign::from_submission(payload);
        assert_eq!(campaign.base.description, "Black Friday");
        assert_eq!(campaign.base.comment.as_deref(), Some("promo"));
        assert!(campaign.base.code.starts_with("CMP-"));
        assert_eq!(campaign.base.code.len(), 12);
        assert_eq!(campaign.total_quantity(), 100);
        assert_eq!(Campaign::full_name(), "a001_campaign");
    }

    #[test]
    fn test_total_quantity_saturates() {
        let mut send = CampaignSend::new("s1".into());
        send.schedules[0].quantity = Some(u32::MAX);
        send.schedules.push(Schedule {
            quantity: Some(10),
            ..Default::default()
        });
        assert_eq!(send.total_quantity(), u32::MAX);

        let payload = SubmissionPayload::<CampaignWizard> {
            fields: CampaignFields::default(),
            children: vec![send.clone(), send],
            generated_at: Utc::now(),
        };
        assert_eq!(Campaign::from_submission(payload).total_quantity(), u32::MAX);
    }

    #[test]
    fn test_status() {
        let payload = SubmissionPayload::<CampaignWizard> {
            fields: CampaignFields {
                name: "X".into(),
                execution_date: Some(date("2025-11-01")),
                end_date: Some(date("2025-11-30")),
                ..Default::default()
            },
            children: Vec::new(),
            generated_at: Utc::now(),
        };
        let campaign = Campaign::from_submission(payload);
        assert_eq!(campaign.status(date("2025-10-31")), CampaignStatus::Scheduled);
        assert_eq!(campaign.status(date("2025-11-15")), CampaignStatus::Running);
        assert_eq!(campaign.status(date("2025-12-01")), CampaignStatus::Finished);
    }

    #[test]
    fn test_segmentation_wire_names() {
        assert_eq!(
            serde_json::to_value(SegmentationType::ActiveUsers).unwrap(),
            "active-users"
        );
        assert_eq!(
            SegmentationType::from_code("file-upload"),
            Some(SegmentationType::FileUpload)
        );
        assert!(!SegmentationType::FileUpload.requires_products());
    }
}
