//! Сессии редактирования дочерних записей
//!
//! Машина состояний сессии: `closed -> creating | editing -> closed`
//! (через сохранение или отмену). Одновременно открыта не более одной сессии.

use super::controller::WizardController;
use super::error::{TransitionRejection, WizardError};
use super::flow::{ApplyUpdate, ChildEntity, StepKind, WizardFlow};
use super::state::{EditSession, SessionMode};

impl<F: WizardFlow> WizardController<F> {
    /// Открыть сессию создания новой записи с идентификатором `id`
    pub fn start_create(&mut self, id: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_children_editable()?;
        let id = id.into();
        if self.state.children.iter().any(|child| child.id() == id) {
            return Err(TransitionRejection::DuplicateChildId(id).into());
        }
        log::debug!("wizard '{}': creating {} '{}'", F::TITLE, F::CHILD_LABEL, id);
        self.state.session = Some(EditSession::create(F::blank_child(id)));
        Ok(())
    }

    /// Открыть сессию редактирования записи `index` (черновик является копией записи)
    pub fn start_edit(&mut self, index: usize) -> Result<(), WizardError> {
        self.ensure_children_editable()?;
        let draft = self
            .state
            .children
            .get(index)
            .cloned()
            .ok_or(TransitionRejection::IndexOutOfBounds {
                index,
                len: self.state.children.len(),
            })?;
        log::debug!("wizard '{}': editing {} #{}", F::TITLE, F::CHILD_LABEL, index);
        self.state.session = Some(EditSession::edit(index, draft));
        Ok(())
    }

    pub fn update_draft_field(&mut self, update: F::DraftUpdate) -> Result<(), WizardError> {
        let session = self
            .state
            .session
            .as_mut()
            .ok_or(TransitionRejection::NoEditSession)?;
        update.apply_to(&mut session.draft);
        Ok(())
    }

    /// Проверить черновик и зафиксировать его
    ///
    /// При ошибке проверки сессия остаётся открытой. Возвращает позицию
    /// сохранённой записи.
    pub fn save(&mut self) -> Result<usize, WizardError> {
        let session = self
            .state
            .session
            .take()
            .ok_or(TransitionRejection::NoEditSession)?;

        let siblings: Vec<F::Child> = match session.mode {
            SessionMode::Create => self.state.children.clone(),
            SessionMode::Edit { target_index } => self
                .state
                .children
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != target_index)
                .map(|(_, child)| child.clone())
                .collect(),
        };

        if let Err(reason) = F::validate_draft(&session.draft, &siblings) {
            log::debug!("wizard '{}': draft rejected: {}", F::TITLE, reason);
            self.state.session = Some(session);
            return Err(reason.into());
        }

        let index = match session.mode {
            SessionMode::Create => {
                self.state.children.push(session.draft);
                self.state.children.len() - 1
            }
            SessionMode::Edit { target_index } => {
                let len = self.state.children.len();
                match self.state.children.get_mut(target_index) {
                    Some(slot) => *slot = session.draft,
                    None => {
                        return Err(TransitionRejection::IndexOutOfBounds {
                            index: target_index,
                            len,
                        }
                        .into())
                    }
                }
                target_index
            }
        };
        log::debug!("wizard '{}': {} #{} saved", F::TITLE, F::CHILD_LABEL, index);
        Ok(index)
    }

    /// Закрыть сессию без изменений в списке записей
    pub fn cancel_edit(&mut self) -> Result<(), WizardError> {
        self.state
            .session
            .take()
            .map(|_| ())
            .ok_or_else(|| TransitionRejection::NoEditSession.into())
    }

    /// Удалить запись; запрещено, пока открыта любая сессия (индексы бы сдвинулись)
    pub fn delete_entity(&mut self, index: usize) -> Result<F::Child, WizardError> {
        self.ensure_children_editable()?;
        let len = self.state.children.len();
        if index >= len {
            return Err(TransitionRejection::IndexOutOfBounds { index, len }.into());
        }
        let removed = self.state.children.remove(index);
        log::debug!(
            "wizard '{}': {} '{}' deleted",
            F::TITLE,
            F::CHILD_LABEL,
            removed.id()
        );
        Ok(removed)
    }

    fn ensure_children_editable(&self) -> Result<(), WizardError> {
        self.ensure_not_submitted()?;
        if self.state.session.is_some() {
            return Err(TransitionRejection::EditSessionOpen.into());
        }
        if F::step_kind(self.state.current_step) != StepKind::AuthorChildren {
            return Err(TransitionRejection::NotAuthoringStep {
                current: self.state.current_step,
                authoring: F::authoring_step(),
            }
            .into());
        }
        Ok(())
    }
}
