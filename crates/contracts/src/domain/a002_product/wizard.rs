//! Мастер создания продукта: описание, тарификация, ключевые слова, сводка

use super::aggregate::{ActivationKeyword, ChargePeriod, ProductFields};
use crate::shared::metadata::{FieldRule, ValidationRules};
use crate::shared::wizard::{
    ApplyUpdate, ChildSummary, StepKind, SummaryRow, ValidationReason, WizardFlow,
};

const PROVIDER: FieldRule = FieldRule::new(
    "Provider",
    ValidationRules::required().with_max_length(80),
);
const NAME: FieldRule = FieldRule::new(
    "Product name",
    ValidationRules::required().with_max_length(120),
);
const DESCRIPTION: FieldRule = FieldRule::new(
    "Description",
    ValidationRules::required().with_max_length(500),
);
const CATEGORY: FieldRule = FieldRule::new("Category", ValidationRules::none().with_max_length(60));
const PRICE: FieldRule = FieldRule::new(
    "Price",
    ValidationRules::required().with_min(0.01).with_max(10_000.0),
);
const CURRENCY: FieldRule = FieldRule::new(
    "Currency",
    ValidationRules::required().with_min_length(3).with_max_length(3),
);
const KEYWORD: FieldRule = FieldRule::new(
    "Keyword",
    ValidationRules::required().with_max_length(20),
);
const TRIAL_DAYS: FieldRule = FieldRule::new(
    "Trial days",
    ValidationRules::required().with_min(1.0).with_max(90.0),
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductWizard;

/// Изменение поля продукта
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFieldUpdate {
    Provider(String),
    Name(String),
    Description(String),
    Category(String),
    Price(Option<f64>),
    Currency(String),
}

impl ApplyUpdate<ProductFields> for ProductFieldUpdate {
    fn apply_to(self, target: &mut ProductFields) {
        match self {
            Self::Provider(v) => target.provider = v,
            Self::Name(v) => target.name = v,
            Self::Description(v) => target.description = v,
            Self::Category(v) => target.category = v,
            Self::Price(v) => target.price = v,
            Self::Currency(v) => target.currency = v,
        }
    }
}

/// Изменение черновика ключевого слова
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordFieldUpdate {
    Keyword(String),
    /// Выключение пробного периода сбрасывает его длительность
    HasTrial(bool),
    TrialDays(Option<u32>),
    ChargePeriod(ChargePeriod),
}

impl ApplyUpdate<ActivationKeyword> for KeywordFieldUpdate {
    fn apply_to(self, target: &mut ActivationKeyword) {
        match self {
            Self::Keyword(v) => target.keyword = v,
            Self::HasTrial(v) => {
                target.has_trial = v;
                if !v {
                    target.trial_days = None;
                }
            }
            Self::TrialDays(v) => target.trial_days = v,
            Self::ChargePeriod(v) => target.charge_period = v,
        }
    }
}

impl WizardFlow for ProductWizard {
    type Fields = ProductFields;
    type Child = ActivationKeyword;
    type FieldUpdate = ProductFieldUpdate;
    type DraftUpdate = KeywordFieldUpdate;

    const TITLE: &'static str = "New product";
    const CHILD_LABEL: &'static str = "keyword";
    const TOTAL_STEPS: u8 = 4;

    fn step_kind(step: u8) -> StepKind {
        match step {
            1 | 2 => StepKind::Define,
            3 => StepKind::AuthorChildren,
            _ => StepKind::Summary,
        }
    }

    fn step_title(step: u8) -> &'static str {
        match step {
            1 => "Product details",
            2 => "Billing",
            3 => "Activation keywords",
            _ => "Summary",
        }
    }

    fn validate_fields(step: u8, fields: &ProductFields) -> Result<(), ValidationReason> {
        match step {
            1 => {
                PROVIDER.check_str(&fields.provider)?;
                NAME.check_str(&fields.name)?;
                DESCRIPTION.check_str(&fields.description)?;
                CATEGORY.check_str(&fields.category)
            }
            2 => {
                PRICE.check_number(fields.price)?;
                CURRENCY.check_str(&fields.currency)?;
                if !fields.currency.trim().chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ValidationReason::InvalidValue {
                        label: CURRENCY.label,
                        message: "must be a three-letter code".to_string(),
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn blank_child(id: String) -> ActivationKeyword {
        ActivationKeyword::new(id)
    }

    fn validate_draft(
        draft: &ActivationKeyword,
        siblings: &[ActivationKeyword],
    ) -> Result<(), ValidationReason> {
        KEYWORD.check_str(&draft.keyword)?;
        if draft.keyword.trim().chars().any(char::is_whitespace) {
            return Err(ValidationReason::InvalidValue {
                label: KEYWORD.label,
                message: "must be a single word".to_string(),
            });
        }

        let normalized = draft.normalized();
        if siblings.iter().any(|k| k.normalized() == normalized) {
            return Err(ValidationReason::DuplicateValue {
                label: KEYWORD.label,
                value: draft.keyword.trim().to_string(),
            });
        }

        if draft.has_trial {
            TRIAL_DAYS.check_number(draft.trial_days.map(f64::from))?;
        }
        Ok(())
    }

    fn summarize_fields(fields: &ProductFields) -> Vec<SummaryRow> {
        vec![
            SummaryRow::text("Provider", fields.provider.clone()),
            SummaryRow::text("Product name", fields.name.clone()),
            SummaryRow::text("Description", fields.description.clone()),
            SummaryRow::text("Category", fields.category.clone()),
            SummaryRow::optional("Price", fields.price.map(|p| format!("{:.2}", p))),
            SummaryRow::text("Currency", fields.currency.trim().to_uppercase()),
        ]
    }

    fn summarize_child(child: &ActivationKeyword) -> ChildSummary {
        let trial = if child.has_trial {
            SummaryRow::optional("Trial days", child.trial_days)
        } else {
            SummaryRow::text("Trial days", "no trial")
        };

        ChildSummary {
            id: child.id.clone(),
            title: child.keyword.trim().to_uppercase(),
            rows: vec![
                trial,
                SummaryRow::text("Charge period", child.charge_period.label()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{
        validate_payload, CollectingPort, TransitionRejection, WizardController,
        WizardError,
    };

    fn described() -> WizardController<ProductWizard> {
        let mut wizard = WizardController::<ProductWizard>::open();
        wizard.update_aggregate_field(ProductFieldUpdate::Provider("Acme".into()));
        wizard.update_aggregate_field(ProductFieldUpdate::Name("Daily News".into()));
        wizard.update_aggregate_field(ProductFieldUpdate::Description("news digest".into()));
        wizard
    }

    fn add_keyword(wizard: &mut WizardController<ProductWizard>, id: &str, keyword: &str) {
        wizard.start_create(id).unwrap();
        wizard
            .update_draft_field(KeywordFieldUpdate::Keyword(keyword.into()))
            .unwrap();
        wizard.save().unwrap();
    }

    #[test]
    fn test_full_flow() {
        let mut wizard = described();
        assert_eq!(wizard.go_next().unwrap(), 2);
        assert_eq!(wizard.step_kind(), StepKind::Define);

        assert_eq!(
            wizard.go_next().unwrap_err().user_message(),
            "complete all required fields: Price"
        );
        wizard.update_aggregate_field(ProductFieldUpdate::Price(Some(4.99)));
        assert_eq!(wizard.go_next().unwrap(), 3);

        assert_eq!(
            wizard.go_next().unwrap_err().user_message(),
            "must create at least one keyword"
        );
        add_keyword(&mut wizard, "k1", "NEWS");
        assert_eq!(wizard.go_next().unwrap(), 4);

        let summary = wizard.summary();
        assert_eq!(summary.field("Price"), Some("4.99"));
        assert_eq!(summary.field("Category"), Some("—"));
        assert_eq!(summary.children[0].title, "NEWS");

        let mut port = CollectingPort::new();
        assert_eq!(wizard.submit(&mut port).unwrap(), 1);
        assert!(validate_payload(&port.submitted()[0]).is_ok());
    }

    #[test]
    fn test_billing_rules() {
        let mut fields = ProductFields {
            price: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            ProductWizard::validate_fields(2, &fields),
            Err(ValidationReason::InvalidValue { label: "Price", .. })
        ));

        fields.price = Some(9.99);
        assert!(ProductWizard::validate_fields(2, &fields).is_ok());

        fields.currency = "US1".into();
        assert!(ProductWizard::validate_fields(2, &fields).is_err());
        fields.currency = "EURO".into();
        assert!(ProductWizard::validate_fields(2, &fields).is_err());
    }

    #[test]
    fn test_keyword_must_be_single_token() {
        let mut keyword = ActivationKeyword::new("k1".into());
        keyword.keyword = "daily news".into();
        assert!(matches!(
            ProductWizard::validate_draft(&keyword, &[]),
            Err(ValidationReason::InvalidValue { label: "Keyword", .. })
        ));

        keyword.keyword = "  NEWS ".into();
        assert!(ProductWizard::validate_draft(&keyword, &[]).is_ok());
    }

    #[test]
    fn test_keyword_unique_case_insensitive() {
        let mut wizard = described();
        wizard.update_aggregate_field(ProductFieldUpdate::Price(Some(1.0)));
        wizard.go_next().unwrap();
        wizard.go_next().unwrap();
        add_keyword(&mut wizard, "k1", "NEWS");

        wizard.start_create("k2").unwrap();
        wizard
            .update_draft_field(KeywordFieldUpdate::Keyword("news".into()))
            .unwrap();
        assert_eq!(
            wizard.save().unwrap_err(),
            WizardError::Validation(ValidationReason::DuplicateValue {
                label: "Keyword",
                value: "news".into(),
            })
        );
        assert!(wizard.session().is_some());
        wizard.cancel_edit().unwrap();

        // Сохранение без изменений не конфликтует само с собой
        wizard.start_edit(0).unwrap();
        assert_eq!(wizard.save().unwrap(), 0);
    }

    #[test]
    fn test_trial_requires_days() {
        let mut keyword = ActivationKeyword::new("k1".into());
        keyword.keyword = "NEWS".into();
        KeywordFieldUpdate::HasTrial(true).apply_to(&mut keyword);
        assert_eq!(
            ProductWizard::validate_draft(&keyword, &[]),
            Err(ValidationReason::MissingField { label: "Trial days" })
        );

        KeywordFieldUpdate::TrialDays(Some(0)).apply_to(&mut keyword);
        assert!(ProductWizard::validate_draft(&keyword, &[]).is_err());

        KeywordFieldUpdate::TrialDays(Some(7)).apply_to(&mut keyword);
        assert!(ProductWizard::validate_draft(&keyword, &[]).is_ok());

        KeywordFieldUpdate::HasTrial(false).apply_to(&mut keyword);
        assert_eq!(keyword.trial_days, None);
    }

    #[test]
    fn test_keywords_locked_outside_authoring_step() {
        let mut wizard = described();
        assert_eq!(
            wizard.start_create("k1").unwrap_err(),
            WizardError::InvalidTransition(TransitionRejection::NotAuthoringStep {
                current: 1,
                authoring: 3,
            })
        );
    }
}
