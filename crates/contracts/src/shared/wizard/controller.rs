use chrono::{DateTime, Utc};

use super::error::{TransitionRejection, ValidationReason, WizardError};
use super::flow::{ApplyUpdate, StepKind, WizardFlow};
use super::port::{SubmissionPayload, SubmissionPort};
use super::state::{EditSession, WizardState};
use super::summary::{render_summary, Summary};
use super::validator::validate_step;

/// Контроллер мастера: владеет состоянием и проверяет каждый переход
///
/// Все операции синхронные. Пока открыта сессия редактирования дочерней
/// записи, переходы между шагами и отправка отклоняются.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardController<F: WizardFlow> {
    pub(super) state: WizardState<F>,
}

impl<F: WizardFlow> WizardController<F> {
    /// Открыть мастер с пустым состоянием на первом шаге
    pub fn open() -> Self {
        log::debug!("wizard '{}' opened ({} steps)", F::TITLE, F::TOTAL_STEPS);
        Self {
            state: WizardState::new(),
        }
    }

    pub fn state(&self) -> &WizardState<F> {
        &self.state
    }

    pub fn current_step(&self) -> u8 {
        self.state.current_step
    }

    pub fn total_steps(&self) -> u8 {
        F::TOTAL_STEPS
    }

    pub fn step_kind(&self) -> StepKind {
        F::step_kind(self.state.current_step)
    }

    pub fn step_title(&self) -> &'static str {
        F::step_title(self.state.current_step)
    }

    pub fn is_final_step(&self) -> bool {
        self.state.current_step == F::TOTAL_STEPS
    }

    pub fn fields(&self) -> &F::Fields {
        &self.state.fields
    }

    pub fn children(&self) -> &[F::Child] {
        &self.state.children
    }

    pub fn session(&self) -> Option<&EditSession<F::Child>> {
        self.state.session.as_ref()
    }

    pub fn draft(&self) -> Option<&F::Child> {
        self.state.session.as_ref().map(|s| &s.draft)
    }

    pub fn is_submitted(&self) -> bool {
        self.state.submitted
    }

    /// Проверка текущего шага без перехода (подсказка на кнопке "Далее")
    pub fn can_go_next(&self) -> Result<(), ValidationReason> {
        validate_step(self.state.current_step, &self.state)
    }

    pub fn summary(&self) -> Summary {
        render_summary(&self.state)
    }

    /// Перейти на следующий шаг
    ///
    /// При уходе с шага дочерних записей пересчитываются производные поля
    /// (например, дата окончания кампании).
    pub fn go_next(&mut self) -> Result<u8, WizardError> {
        self.ensure_not_submitted()?;
        if self.state.session.is_some() {
            return Err(ValidationReason::EditSessionOpen {
                child: F::CHILD_LABEL,
            }
            .into());
        }

        let step = self.state.current_step;
        if step >= F::TOTAL_STEPS {
            return Err(TransitionRejection::LastStep {
                total: F::TOTAL_STEPS,
            }
            .into());
        }

        if let Err(reason) = validate_step(step, &self.state) {
            log::debug!("wizard '{}': step {} rejected: {}", F::TITLE, step, reason);
            return Err(reason.into());
        }

        if F::step_kind(step) == StepKind::AuthorChildren {
            F::derive_after_authoring(&mut self.state.fields, &self.state.children);
        }

        self.state.current_step = step + 1;
        log::debug!(
            "wizard '{}': step {} -> {}",
            F::TITLE,
            step,
            self.state.current_step
        );
        Ok(self.state.current_step)
    }

    /// Вернуться на предыдущий шаг, без проверки; на первом шаге ничего не делает
    pub fn go_previous(&mut self) -> Result<u8, WizardError> {
        self.ensure_not_submitted()?;
        if self.state.session.is_some() {
            return Err(TransitionRejection::EditSessionOpen.into());
        }
        if self.state.current_step > 1 {
            self.state.current_step -= 1;
        }
        Ok(self.state.current_step)
    }

    pub fn update_aggregate_field(&mut self, update: F::FieldUpdate) {
        update.apply_to(&mut self.state.fields);
    }

    /// Отправить результат через порт с текущим временем формирования
    pub fn submit<P: SubmissionPort<F>>(&mut self, port: &mut P) -> Result<P::Output, WizardError> {
        self.submit_at(port, Utc::now())
    }

    /// Отправить результат с заданным временем формирования
    ///
    /// Допустимо только на последнем шаге. Все шаги проверяются повторно:
    /// поля основной сущности могли измениться после прохождения их шага.
    pub fn submit_at<P: SubmissionPort<F>>(
        &mut self,
        port: &mut P,
        generated_at: DateTime<Utc>,
    ) -> Result<P::Output, WizardError> {
        self.ensure_not_submitted()?;
        if self.state.session.is_some() {
            return Err(TransitionRejection::EditSessionOpen.into());
        }
        if !self.is_final_step() {
            return Err(TransitionRejection::NotFinalStep {
                current: self.state.current_step,
                total: F::TOTAL_STEPS,
            }
            .into());
        }
        for step in 1..F::TOTAL_STEPS {
            validate_step(step, &self.state)?;
        }

        let payload = SubmissionPayload {
            fields: self.state.fields.clone(),
            children: self.state.children.clone(),
            generated_at,
        };
        let output = port.submit(payload);
        self.state.submitted = true;
        log::info!(
            "wizard '{}' submitted with {} {}(s)",
            F::TITLE,
            self.state.children.len(),
            F::CHILD_LABEL
        );
        Ok(output)
    }

    /// Закрыть мастер без сохранения, состояние отбрасывается целиком
    pub fn cancel(self) {
        log::debug!(
            "wizard '{}' cancelled on step {}",
            F::TITLE,
            self.state.current_step
        );
    }

    pub(super) fn ensure_not_submitted(&self) -> Result<(), WizardError> {
        if self.state.submitted {
            return Err(TransitionRejection::AlreadySubmitted.into());
        }
        Ok(())
    }
}

impl<F: WizardFlow> Default for WizardController<F> {
    fn default() -> Self {
        Self::open()
    }
}

#[cfg(test)]
mod tests {
    use super::super::port::CollectingPort;
    use super::super::test_flow::{NoteFieldUpdate, NoteUpdate, NoteWizard};
    use super::*;

    fn wizard_on_authoring_step() -> WizardController<NoteWizard> {
        let mut wizard = WizardController::<NoteWizard>::open();
        wizard.update_aggregate_field(NoteFieldUpdate::Title("Notes".into()));
        wizard.go_next().unwrap();
        wizard
    }

    fn add_note(wizard: &mut WizardController<NoteWizard>, id: &str, text: &str) {
        wizard.start_create(id).unwrap();
        wizard
            .update_draft_field(NoteUpdate::Text(text.into()))
            .unwrap();
        wizard.save().unwrap();
    }

    #[test]
    fn test_go_next_requires_valid_step() {
        let mut wizard = WizardController::<NoteWizard>::open();
        let err = wizard.go_next().unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation(ValidationReason::MissingField { label: "Title" })
        );
        assert_eq!(wizard.current_step(), 1);

        wizard.update_aggregate_field(NoteFieldUpdate::Title("Notes".into()));
        assert_eq!(wizard.go_next().unwrap(), 2);
    }

    #[test]
    fn test_authoring_step_requires_children() {
        let mut wizard = wizard_on_authoring_step();
        let err = wizard.go_next().unwrap_err();
        assert_eq!(err.user_message(), "must create at least one note");
        assert_eq!(wizard.current_step(), 2);

        add_note(&mut wizard, "n1", "first");
        assert_eq!(wizard.go_next().unwrap(), 3);
    }

    #[test]
    fn test_go_next_and_submit_blocked_by_open_session() {
        let mut wizard = wizard_on_authoring_step();
        add_note(&mut wizard, "n1", "first");
        wizard.start_edit(0).unwrap();
        let before = wizard.clone();

        let err = wizard.go_next().unwrap_err();
        assert_eq!(
            err.user_message(),
            "save or cancel the current note before continuing"
        );
        assert_eq!(wizard, before);

        let mut port = CollectingPort::new();
        assert!(wizard.submit(&mut port).is_err());
        assert_eq!(wizard, before);
        assert!(port.submitted().is_empty());

        assert_eq!(
            wizard.go_previous().unwrap_err(),
            WizardError::InvalidTransition(TransitionRejection::EditSessionOpen)
        );
    }

    #[test]
    fn test_can_go_next_previews_without_moving() {
        let wizard = wizard_on_authoring_step();
        let before = wizard.clone();
        assert_eq!(
            wizard.can_go_next(),
            Err(ValidationReason::NoChildren { child: "note" })
        );
        assert_eq!(wizard, before);

        let mut wizard = wizard;
        add_note(&mut wizard, "n1", "first");
        assert_eq!(wizard.can_go_next(), Ok(()));
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_go_previous_is_floored() {
        let mut wizard = WizardController::<NoteWizard>::open();
        assert_eq!(wizard.go_previous().unwrap(), 1);
        assert_eq!(wizard.go_previous().unwrap(), 1);

        let mut wizard = wizard_on_authoring_step();
        assert_eq!(wizard.go_previous().unwrap(), 1);
    }

    #[test]
    fn test_go_previous_skips_validation() {
        let mut wizard = wizard_on_authoring_step();
        add_note(&mut wizard, "n1", "first");
        wizard.go_next().unwrap();
        wizard.update_aggregate_field(NoteFieldUpdate::Title(String::new()));
        assert_eq!(wizard.go_previous().unwrap(), 2);
        assert_eq!(wizard.go_previous().unwrap(), 1);
    }

    #[test]
    fn test_derived_fields_recomputed_when_leaving_authoring_step() {
        let mut wizard = wizard_on_authoring_step();
        add_note(&mut wizard, "n1", "first");
        add_note(&mut wizard, "n2", "second");
        wizard.go_next().unwrap();
        assert_eq!(wizard.fields().note_count, 2);

        wizard.go_previous().unwrap();
        wizard.delete_entity(0).unwrap();
        assert_eq!(wizard.fields().note_count, 2);
        wizard.go_next().unwrap();
        assert_eq!(wizard.fields().note_count, 1);
    }

    #[test]
    fn test_go_next_on_last_step_rejected() {
        let mut wizard = wizard_on_authoring_step();
        add_note(&mut wizard, "n1", "first");
        wizard.go_next().unwrap();
        assert_eq!(
            wizard.go_next().unwrap_err(),
            WizardError::InvalidTransition(TransitionRejection::LastStep { total: 3 })
        );
    }

    #[test]
    fn test_submit_only_on_final_step() {
        let mut wizard = wizard_on_authoring_step();
        add_note(&mut wizard, "n1", "first");
        let mut port = CollectingPort::new();
        assert_eq!(
            wizard.submit(&mut port).unwrap_err(),
            WizardError::InvalidTransition(TransitionRejection::NotFinalStep {
                current: 2,
                total: 3
            })
        );

        wizard.go_next().unwrap();
        let at = chrono::DateTime::parse_from_rfc3339("2025-11-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(wizard.submit_at(&mut port, at).unwrap(), 1);

        let payload = &port.submitted()[0];
        assert_eq!(payload.generated_at, at);
        assert_eq!(payload.children.len(), 1);
        assert_eq!(payload.fields.title, "Notes");

        assert_eq!(
            wizard.submit(&mut port).unwrap_err(),
            WizardError::InvalidTransition(TransitionRejection::AlreadySubmitted)
        );
        assert_eq!(port.submitted().len(), 1);
    }

    #[test]
    fn test_submit_revalidates_earlier_steps() {
        let mut wizard = wizard_on_authoring_step();
        add_note(&mut wizard, "n1", "first");
        wizard.go_next().unwrap();
        wizard.update_aggregate_field(NoteFieldUpdate::Title(" ".into()));

        let mut port = CollectingPort::new();
        assert_eq!(
            wizard.submit(&mut port).unwrap_err(),
            WizardError::Validation(ValidationReason::MissingField { label: "Title" })
        );
        assert!(!wizard.is_submitted());
    }

    #[test]
    fn test_payload_wire_names() {
        let mut wizard = wizard_on_authoring_step();
        add_note(&mut wizard, "n1", "first");
        wizard.go_next().unwrap();
        let mut port = CollectingPort::new();
        wizard.submit(&mut port).unwrap();

        let json = serde_json::to_value(&port.submitted()[0]).unwrap();
        assert!(json.get("aggregateFields").is_some());
        assert_eq!(json["childEntities"][0]["id"], "n1");
        assert!(json.get("generatedAt").is_some());
    }
}
