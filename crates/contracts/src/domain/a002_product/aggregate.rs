use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::wizard::ProductWizard;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::wizard::{ChildEntity, SubmissionPayload};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор продукта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl AggregateId for ProductId {
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

/// Периодичность списания подписки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargePeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl ChargePeriod {
    pub const ALL: [ChargePeriod; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == code)
    }
}

// ============================================================================
// Child entities
// ============================================================================

/// Ключевое слово активации подписки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationKeyword {
    pub id: String,
    pub keyword: String,
    pub has_trial: bool,
    /// Длительность пробного периода; учитывается только при has_trial
    pub trial_days: Option<u32>,
    pub charge_period: ChargePeriod,
}

impl ActivationKeyword {
    pub fn new(id: String) -> Self {
        Self {
            id,
            keyword: String::new(),
            has_trial: false,
            trial_days: None,
            charge_period: ChargePeriod::default(),
        }
    }

    /// Ключевое слово для сравнения (без регистра и пробелов по краям)
    pub fn normalized(&self) -> String {
        self.keyword.trim().to_uppercase()
    }
}

impl ChildEntity for ActivationKeyword {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Wizard fields
// ============================================================================

/// Поля продукта, заполняемые в мастере
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub provider: String,
    #[serde(rename = "productName")]
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Option<f64>,
    pub currency: String,
}

impl Default for ProductFields {
    fn default() -> Self {
        Self {
            provider: String::new(),
            name: String::new(),
            description: String::new(),
            category: String::new(),
            price: None,
            currency: "USD".to_string(),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Продукт (подписка) с ключевыми словами активации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub provider: String,
    pub category: Option<String>,
    pub price: f64,
    pub currency: String,
    pub keywords: Vec<ActivationKeyword>,
}

impl Product {
    pub const CODE_PREFIX: &'static str = "PRD";

    /// Создать продукт из результата мастера
    pub fn from_submission(payload: SubmissionPayload<ProductWizard>) -> Self {
        let SubmissionPayload {
            fields,
            children,
            generated_at,
        } = payload;

        let category = Some(fields.category.trim().to_string()).filter(|c| !c.is_empty());

        Self {
            base: BaseAggregate::generate(
                Self::CODE_PREFIX,
                fields.name.trim().to_string(),
                Some(fields.description),
                generated_at,
            ),
            provider: fields.provider.trim().to_string(),
            category,
            price: fields.price.unwrap_or_default(),
            currency: fields.currency.trim().to_uppercase(),
            keywords: children,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.metadata.created_at
    }

    pub fn has_trial(&self) -> bool {
        self.keywords.iter().any(|k| k.has_trial)
    }

    /// Цена для отображения: "4.99 USD"
    pub fn price_label(&self) -> String {
        format!("{:.2} {}", self.price, self.currency)
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}
