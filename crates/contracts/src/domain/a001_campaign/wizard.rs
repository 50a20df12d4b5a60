//! Мастер создания кампании: параметры, рассылки, сводка

use chrono::{NaiveDate, NaiveTime};

use super::aggregate::{CampaignChannel, CampaignFields, CampaignSend, Schedule, SegmentationType};
use crate::shared::metadata::{FieldRule, ValidationRules};
use crate::shared::wizard::{
    ApplyUpdate, ChildSummary, StepKind, SummaryRow, ValidationReason, WizardFlow, PLACEHOLDER,
};

/// Максимальная длина одного SMS
pub const SMS_MAX_LENGTH: usize = 160;

/// Максимальное количество сообщений в одной партии расписания
pub const SCHEDULE_MAX_QUANTITY: u32 = 1_000_000;

const NAME: FieldRule = FieldRule::new(
    "Campaign name",
    ValidationRules::required().with_max_length(120),
);
const DESCRIPTION: FieldRule = FieldRule::new(
    "Description",
    ValidationRules::required().with_max_length(500),
);
const EXECUTION_DATE: FieldRule = FieldRule::new("Execution date", ValidationRules::required());
const SHORT_CODE: FieldRule = FieldRule::new(
    "Short code",
    ValidationRules::required().with_min_length(3).with_max_length(8),
);
const SMS_TEXT: FieldRule = FieldRule::new(
    "Message text",
    ValidationRules::required().with_max_length(SMS_MAX_LENGTH),
);
const PRODUCTS: FieldRule = FieldRule::new("Products", ValidationRules::required());
const SCHEDULE: FieldRule = FieldRule::new("Schedule", ValidationRules::required());
const SCHEDULE_DATE: FieldRule = FieldRule::new("Schedule date", ValidationRules::required());
const SCHEDULE_TIME: FieldRule = FieldRule::new("Schedule time", ValidationRules::required());
const SCHEDULE_QUANTITY: FieldRule = FieldRule::new(
    "Schedule quantity",
    ValidationRules::required()
        .with_min(1.0)
        .with_max(SCHEDULE_MAX_QUANTITY as f64),
);
const SEGMENTATION_FILE: FieldRule =
    FieldRule::new("Segmentation file", ValidationRules::required());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CampaignWizard;

/// Изменение поля кампании
#[derive(Debug, Clone, PartialEq)]
pub enum CampaignFieldUpdate {
    Name(String),
    Description(String),
    Channel(CampaignChannel),
    ExecutionDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
}

impl ApplyUpdate<CampaignFields> for CampaignFieldUpdate {
    fn apply_to(self, target: &mut CampaignFields) {
        match self {
            Self::Name(v) => target.name = v,
            Self::Description(v) => target.description = v,
            Self::Channel(v) => target.channel = v,
            Self::ExecutionDate(v) => target.execution_date = v,
            Self::EndDate(v) => target.end_date = v,
        }
    }
}

/// Изменение одного расписания
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleUpdate {
    Date(Option<NaiveDate>),
    Time(Option<NaiveTime>),
    Quantity(Option<u32>),
    File(Option<String>),
}

impl ApplyUpdate<Schedule> for ScheduleUpdate {
    fn apply_to(self, target: &mut Schedule) {
        match self {
            Self::Date(v) => target.date = v,
            Self::Time(v) => target.time = v,
            Self::Quantity(v) => target.quantity = v,
            Self::File(v) => target.file = v,
        }
    }
}

/// Изменение черновика рассылки
#[derive(Debug, Clone, PartialEq)]
pub enum SendFieldUpdate {
    ShortCode(String),
    SmsText(String),
    Segmentation(SegmentationType),
    /// Добавить продукт в выборку или убрать, если уже выбран
    ToggleProduct(String),
    AddSchedule,
    /// Индекс вне диапазона игнорируется
    RemoveSchedule(usize),
    Schedule { index: usize, update: ScheduleUpdate },
}

impl ApplyUpdate<CampaignSend> for SendFieldUpdate {
    fn apply_to(self, target: &mut CampaignSend) {
        match self {
            Self::ShortCode(v) => target.short_code = v,
            Self::SmsText(v) => target.sms_text = v,
            Self::Segmentation(v) => target.segmentation = v,
            Self::ToggleProduct(id) => {
                if let Some(pos) = target.product_ids.iter().position(|p| *p == id) {
                    target.product_ids.remove(pos);
                } else {
                    target.product_ids.push(id);
                }
            }
            Self::AddSchedule => target.schedules.push(Schedule::default()),
            Self::RemoveSchedule(index) => {
                if index < target.schedules.len() {
                    target.schedules.remove(index);
                }
            }
            Self::Schedule { index, update } => {
                if let Some(schedule) = target.schedules.get_mut(index) {
                    update.apply_to(schedule);
                }
            }
        }
    }
}

impl WizardFlow for CampaignWizard {
    type Fields = CampaignFields;
    type Child = CampaignSend;
    type FieldUpdate = CampaignFieldUpdate;
    type DraftUpdate = SendFieldUpdate;

    const TITLE: &'static str = "New campaign";
    const CHILD_LABEL: &'static str = "send";
    const TOTAL_STEPS: u8 = 3;

    fn step_kind(step: u8) -> StepKind {
        match step {
            1 => StepKind::Define,
            2 => StepKind::AuthorChildren,
            _ => StepKind::Summary,
        }
    }

    fn step_title(step: u8) -> &'static str {
        match step {
            1 => "Campaign details",
            2 => "Sends",
            _ => "Summary",
        }
    }

    fn validate_fields(step: u8, fields: &CampaignFields) -> Result<(), ValidationReason> {
        if step != 1 {
            return Ok(());
        }
        NAME.check_str(&fields.name)?;
        DESCRIPTION.check_str(&fields.description)?;
        let execution_date = EXECUTION_DATE.require(fields.execution_date)?;
        if let Some(end_date) = fields.end_date {
            if end_date < execution_date {
                return Err(ValidationReason::InvalidValue {
                    label: "End date",
                    message: "must not be before the execution date".to_string(),
                });
            }
        }
        Ok(())
    }

    fn blank_child(id: String) -> CampaignSend {
        CampaignSend::new(id)
    }

    fn validate_draft(
        draft: &CampaignSend,
        _siblings: &[CampaignSend],
    ) -> Result<(), ValidationReason> {
        SHORT_CODE.check_str(&draft.short_code)?;
        if !draft.short_code.trim().chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationReason::InvalidValue {
                label: SHORT_CODE.label,
                message: "must contain digits only".to_string(),
            });
        }
        SMS_TEXT.check_str(&draft.sms_text)?;

        if draft.schedules.is_empty() {
            return Err(ValidationReason::MissingField {
                label: SCHEDULE.label,
            });
        }

        if draft.segmentation.requires_products() {
            if draft.product_ids.is_empty() {
                return Err(ValidationReason::MissingField {
                    label: PRODUCTS.label,
                });
            }
            for schedule in &draft.schedules {
                SCHEDULE_DATE.require(schedule.date)?;
                SCHEDULE_TIME.require(schedule.time)?;
                if let Some(quantity) = schedule.quantity {
                    SCHEDULE_QUANTITY.check_number(Some(quantity as f64))?;
                }
            }
        } else {
            for schedule in &draft.schedules {
                SCHEDULE_DATE.require(schedule.date)?;
                SCHEDULE_TIME.require(schedule.time)?;
                SCHEDULE_QUANTITY.check_number(schedule.quantity.map(|q| q as f64))?;
                if !schedule.has_file() {
                    return Err(ValidationReason::MissingField {
                        label: SEGMENTATION_FILE.label,
                    });
                }
            }
        }
        Ok(())
    }

    /// Расписания не раньше даты запуска кампании
    fn validate_authoring(
        fields: &CampaignFields,
        children: &[CampaignSend],
    ) -> Result<(), ValidationReason> {
        let Some(execution_date) = fields.execution_date else {
            return Ok(());
        };
        let early = children.iter().find_map(|send| {
            send.schedules
                .iter()
                .filter_map(|s| s.date)
                .find(|date| *date < execution_date)
                .map(|date| (send, date))
        });
        match early {
            Some((send, date)) => Err(ValidationReason::InvalidValue {
                label: SCHEDULE_DATE.label,
                message: format!(
                    "{} in send {} is before the execution date {}",
                    date,
                    send.short_code.trim(),
                    execution_date
                ),
            }),
            None => Ok(()),
        }
    }

    /// Дата окончания = самая поздняя дата расписаний всех рассылок
    fn derive_after_authoring(fields: &mut CampaignFields, children: &[CampaignSend]) {
        if let Some(latest) = children.iter().filter_map(CampaignSend::latest_date).max() {
            fields.end_date = Some(latest);
        }
    }

    fn summarize_fields(fields: &CampaignFields) -> Vec<SummaryRow> {
        vec![
            SummaryRow::text("Campaign name", fields.name.clone()),
            SummaryRow::text("Description", fields.description.clone()),
            SummaryRow::text("Channel", fields.channel.label()),
            SummaryRow::optional("Execution date", fields.execution_date),
            SummaryRow::optional("End date", fields.end_date),
        ]
    }

    fn summarize_child(child: &CampaignSend) -> ChildSummary {
        let mut rows = vec![
            SummaryRow::text("Message text", child.sms_text.clone()),
            SummaryRow::text("Segmentation", child.segmentation.label()),
        ];
        if child.segmentation.requires_products() {
            rows.push(SummaryRow::list("Products", &child.product_ids));
        }
        for schedule in &child.schedules {
            rows.push(SummaryRow::text("Schedule", describe_schedule(schedule)));
        }

        ChildSummary {
            id: child.id.clone(),
            title: if child.short_code.trim().is_empty() {
                child.segmentation.label().to_string()
            } else {
                format!("{} · {}", child.short_code.trim(), child.segmentation.label())
            },
            rows,
        }
    }
}

fn describe_schedule(schedule: &Schedule) -> String {
    let date = schedule
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let time = schedule
        .time
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    let mut text = format!("{} {}", date, time);
    if let Some(quantity) = schedule.quantity {
        text.push_str(&format!(" · {} msgs", quantity));
    }
    if let Some(file) = schedule.file.as_deref().filter(|f| !f.trim().is_empty()) {
        text.push_str(&format!(" · {}", file));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::{
        validate_payload, CollectingPort, TransitionRejection, WizardController, WizardError,
    };

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn black_friday() -> WizardController<CampaignWizard> {
        let mut wizard = WizardController::<CampaignWizard>::open();
        wizard.update_aggregate_field(CampaignFieldUpdate::Name("Black Friday".into()));
        wizard.update_aggregate_field(CampaignFieldUpdate::Description("promo".into()));
        wizard.update_aggregate_field(CampaignFieldUpdate::ExecutionDate(Some(date(
            "2025-11-01",
        ))));
        wizard.update_aggregate_field(CampaignFieldUpdate::EndDate(Some(date("2025-11-30"))));
        wizard
    }

    fn fill_send(wizard: &mut WizardController<CampaignWizard>, day: &str) {
        for update in [
            SendFieldUpdate::ShortCode("12345".into()),
            SendFieldUpdate::SmsText("Hello".into()),
            SendFieldUpdate::Segmentation(SegmentationType::ActiveUsers),
            SendFieldUpdate::ToggleProduct("prod-1".into()),
            SendFieldUpdate::Schedule {
                index: 0,
                update: ScheduleUpdate::Date(Some(date(day))),
            },
            SendFieldUpdate::Schedule {
                index: 0,
                update: ScheduleUpdate::Time(Some(time("10:00"))),
            },
        ] {
            wizard.update_draft_field(update).unwrap();
        }
    }

    #[test]
    fn test_black_friday_scenario() {
        let mut wizard = black_friday();
        assert_eq!(wizard.go_next().unwrap(), 2);

        let err = wizard.go_next().unwrap_err();
        assert_eq!(err.user_message(), "must create at least one send");
        assert_eq!(wizard.current_step(), 2);

        wizard.start_create("send-1700000000000").unwrap();
        fill_send(&mut wizard, "2025-11-05");
        wizard.save().unwrap();
        assert_eq!(wizard.children().len(), 1);

        assert_eq!(wizard.go_next().unwrap(), 3);
        let summary = wizard.summary();
        assert_eq!(summary.child_count(), 1);
        assert_eq!(summary.field("Campaign name"), Some("Black Friday"));

        let mut port = CollectingPort::new();
        wizard.submit(&mut port).unwrap();
        let payload = port.take_last().unwrap();
        assert_eq!(payload.children.len(), 1);
        assert!(validate_payload(&payload).is_ok());
    }

    #[test]
    fn test_end_date_derived_from_latest_schedule() {
        let mut wizard = black_friday();
        wizard.go_next().unwrap();

        wizard.start_create("s1").unwrap();
        fill_send(&mut wizard, "2025-11-05");
        wizard
            .update_draft_field(SendFieldUpdate::AddSchedule)
            .unwrap();
        for update in [
            ScheduleUpdate::Date(Some(date("2025-12-10"))),
            ScheduleUpdate::Time(Some(time("09:30"))),
        ] {
            wizard
                .update_draft_field(SendFieldUpdate::Schedule { index: 1, update })
                .unwrap();
        }
        wizard.save().unwrap();

        wizard.go_next().unwrap();
        assert_eq!(wizard.fields().end_date, Some(date("2025-12-10")));
    }

    #[test]
    fn test_schedule_before_execution_date_blocks_sends_step() {
        let mut wizard = black_friday();
        wizard.go_next().unwrap();

        wizard.start_create("s1").unwrap();
        fill_send(&mut wizard, "2025-10-20");
        wizard.save().unwrap();

        let err = wizard.go_next().unwrap_err();
        assert!(matches!(
            err,
            WizardError::Validation(ValidationReason::InvalidValue { label: "Schedule date", .. })
        ));
        assert!(err.user_message().contains("2025-10-20"));
        assert_eq!(wizard.current_step(), 2);
        assert_eq!(wizard.fields().end_date, Some(date("2025-11-30")));

        wizard.start_edit(0).unwrap();
        wizard
            .update_draft_field(SendFieldUpdate::Schedule {
                index: 0,
                update: ScheduleUpdate::Date(Some(date("2025-11-05"))),
            })
            .unwrap();
        wizard.save().unwrap();
        assert_eq!(wizard.go_next().unwrap(), 3);
        assert_eq!(wizard.fields().end_date, Some(date("2025-11-05")));

        let mut port = CollectingPort::new();
        wizard.submit(&mut port).unwrap();
        assert!(validate_payload(&port.take_last().unwrap()).is_ok());
    }

    #[test]
    fn test_payload_with_early_schedule_rejected() {
        let mut wizard = black_friday();
        wizard.go_next().unwrap();
        wizard.start_create("s1").unwrap();
        fill_send(&mut wizard, "2025-11-05");
        wizard.save().unwrap();
        wizard.go_next().unwrap();

        let mut port = CollectingPort::new();
        wizard.submit(&mut port).unwrap();
        let mut payload = port.take_last().unwrap();
        payload.fields.end_date = None;
        payload.children[0].schedules[0].date = Some(date("2025-10-20"));
        assert!(matches!(
            validate_payload(&payload),
            Err(ValidationReason::InvalidValue { label: "Schedule date", .. })
        ));
    }

    #[test]
    fn test_end_date_kept_without_schedule_dates() {
        let mut fields = CampaignFields {
            end_date: Some(date("2025-11-30")),
            ..Default::default()
        };
        CampaignWizard::derive_after_authoring(&mut fields, &[CampaignSend::new("s1".into())]);
        assert_eq!(fields.end_date, Some(date("2025-11-30")));
    }

    #[test]
    fn test_step_one_rules() {
        let mut wizard = WizardController::<CampaignWizard>::open();
        assert_eq!(
            wizard.go_next().unwrap_err(),
            WizardError::Validation(ValidationReason::MissingField {
                label: "Campaign name"
            })
        );

        let mut wizard = black_friday();
        wizard.update_aggregate_field(CampaignFieldUpdate::ExecutionDate(None));
        assert_eq!(
            wizard.go_next().unwrap_err().user_message(),
            "complete all required fields: Execution date"
        );

        let mut wizard = black_friday();
        wizard.update_aggregate_field(CampaignFieldUpdate::EndDate(Some(date("2025-10-01"))));
        assert!(matches!(
            wizard.go_next().unwrap_err(),
            WizardError::Validation(ValidationReason::InvalidValue { label: "End date", .. })
        ));
    }

    #[test]
    fn test_send_requires_products_for_subscriber_segmentation() {
        let mut send = CampaignSend::new("s1".into());
        send.short_code = "12345".into();
        send.sms_text = "Hello".into();
        send.schedules[0].date = Some(date("2025-11-05"));
        send.schedules[0].time = Some(time("10:00"));
        assert_eq!(
            CampaignWizard::validate_draft(&send, &[]),
            Err(ValidationReason::MissingField { label: "Products" })
        );

        send.product_ids.push("prod-1".into());
        assert!(CampaignWizard::validate_draft(&send, &[]).is_ok());
    }

    #[test]
    fn test_file_segmentation_requires_complete_schedule() {
        let mut send = CampaignSend::new("s1".into());
        send.short_code = "12345".into();
        send.sms_text = "Hello".into();
        send.segmentation = SegmentationType::FileUpload;
        send.schedules[0].date = Some(date("2025-11-05"));
        send.schedules[0].time = Some(time("10:00"));
        assert_eq!(
            CampaignWizard::validate_draft(&send, &[]),
            Err(ValidationReason::MissingField {
                label: "Schedule quantity"
            })
        );

        send.schedules[0].quantity = Some(1000);
        assert_eq!(
            CampaignWizard::validate_draft(&send, &[]),
            Err(ValidationReason::MissingField {
                label: "Segmentation file"
            })
        );

        send.schedules[0].file = Some("uploads/base.csv".into());
        assert!(CampaignWizard::validate_draft(&send, &[]).is_ok());
    }

    #[test]
    fn test_schedule_quantity_is_bounded() {
        let mut send = CampaignSend::new("s1".into());
        send.short_code = "12345".into();
        send.sms_text = "Hello".into();
        send.segmentation = SegmentationType::FileUpload;
        send.schedules[0].date = Some(date("2025-11-05"));
        send.schedules[0].time = Some(time("10:00"));
        send.schedules[0].file = Some("uploads/base.csv".into());

        send.schedules[0].quantity = Some(SCHEDULE_MAX_QUANTITY + 1);
        assert!(matches!(
            CampaignWizard::validate_draft(&send, &[]),
            Err(ValidationReason::InvalidValue { label: "Schedule quantity", .. })
        ));

        send.schedules[0].quantity = Some(SCHEDULE_MAX_QUANTITY);
        assert!(CampaignWizard::validate_draft(&send, &[]).is_ok());
    }

    #[test]
    fn test_send_text_and_code_rules() {
        let mut send = CampaignSend::new("s1".into());
        assert_eq!(
            CampaignWizard::validate_draft(&send, &[]),
            Err(ValidationReason::MissingField { label: "Short code" })
        );

        send.short_code = "12a45".into();
        assert!(matches!(
            CampaignWizard::validate_draft(&send, &[]),
            Err(ValidationReason::InvalidValue { label: "Short code", .. })
        ));

        send.short_code = "12345".into();
        send.sms_text = "x".repeat(SMS_MAX_LENGTH + 1);
        assert!(matches!(
            CampaignWizard::validate_draft(&send, &[]),
            Err(ValidationReason::InvalidValue { label: "Message text", .. })
        ));

        send.sms_text = "Hello".into();
        send.schedules.clear();
        assert_eq!(
            CampaignWizard::validate_draft(&send, &[]),
            Err(ValidationReason::MissingField { label: "Schedule" })
        );
    }

    #[test]
    fn test_toggle_product_and_schedules() {
        let mut send = CampaignSend::new("s1".into());
        SendFieldUpdate::ToggleProduct("p1".into()).apply_to(&mut send);
        SendFieldUpdate::ToggleProduct("p2".into()).apply_to(&mut send);
        SendFieldUpdate::ToggleProduct("p1".into()).apply_to(&mut send);
        assert_eq!(send.product_ids, vec!["p2".to_string()]);

        SendFieldUpdate::AddSchedule.apply_to(&mut send);
        assert_eq!(send.schedules.len(), 2);
        SendFieldUpdate::RemoveSchedule(5).apply_to(&mut send);
        assert_eq!(send.schedules.len(), 2);
        SendFieldUpdate::RemoveSchedule(0).apply_to(&mut send);
        assert_eq!(send.schedules.len(), 1);
    }

    #[test]
    fn test_deletion_blocked_during_edit() {
        let mut wizard = black_friday();
        wizard.go_next().unwrap();
        for id in ["s1", "s2"] {
            wizard.start_create(id).unwrap();
            fill_send(&mut wizard, "2025-11-05");
            wizard.save().unwrap();
        }

        wizard.start_edit(0).unwrap();
        assert_eq!(
            wizard.delete_entity(1).unwrap_err(),
            WizardError::InvalidTransition(TransitionRejection::EditSessionOpen)
        );
        assert_eq!(wizard.children().len(), 2);

        wizard.cancel_edit().unwrap();
        wizard.delete_entity(1).unwrap();
        assert_eq!(wizard.children().len(), 1);
        assert_eq!(wizard.children()[0].id, "s1");
    }

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let wizard = WizardController::<CampaignWizard>::open();
        let summary = wizard.summary();
        assert_eq!(summary.field("Campaign name"), Some("—"));
        assert_eq!(summary.field("End date"), Some("—"));
        assert_eq!(summary.child_count(), 0);

        let child = CampaignWizard::summarize_child(&CampaignSend::new("s1".into()));
        assert_eq!(child.title, "Active users");
        assert!(child.rows.iter().any(|r| r.value == "— —"));
    }
}
