//! Чистые проверки шагов мастера, без побочных эффектов

use std::collections::HashSet;

use super::error::ValidationReason;
use super::flow::{StepKind, WizardFlow};
use super::port::SubmissionPayload;
use super::state::WizardState;

/// Проверка шага `step` для текущего состояния
pub fn validate_step<F: WizardFlow>(
    step: u8,
    state: &WizardState<F>,
) -> Result<(), ValidationReason> {
    match F::step_kind(step) {
        StepKind::Define => F::validate_fields(step, state.fields()),
        StepKind::AuthorChildren => {
            if state.session().is_some() {
                return Err(ValidationReason::EditSessionOpen {
                    child: F::CHILD_LABEL,
                });
            }
            if state.children().is_empty() {
                return Err(ValidationReason::NoChildren {
                    child: F::CHILD_LABEL,
                });
            }
            F::validate_authoring(state.fields(), state.children())
        }
        StepKind::Summary => Ok(()),
    }
}

/// Повторная проверка уже собранного результата (например, на сервере)
pub fn validate_payload<F: WizardFlow>(
    payload: &SubmissionPayload<F>,
) -> Result<(), ValidationReason> {
    for step in 1..=F::TOTAL_STEPS {
        match F::step_kind(step) {
            StepKind::Define => F::validate_fields(step, &payload.fields)?,
            StepKind::AuthorChildren => {
                validate_children::<F>(&payload.children)?;
                F::validate_authoring(&payload.fields, &payload.children)?;
            }
            StepKind::Summary => {}
        }
    }
    Ok(())
}

fn validate_children<F: WizardFlow>(children: &[F::Child]) -> Result<(), ValidationReason> {
    use super::flow::ChildEntity;

    if children.is_empty() {
        return Err(ValidationReason::NoChildren {
            child: F::CHILD_LABEL,
        });
    }

    let mut ids = HashSet::new();
    for (index, child) in children.iter().enumerate() {
        if !ids.insert(child.id()) {
            return Err(ValidationReason::DuplicateValue {
                label: "Id",
                value: child.id().to_string(),
            });
        }
        let siblings: Vec<F::Child> = children
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| c.clone())
            .collect();
        F::validate_draft(child, &siblings)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::wizard::test_flow::{Note, NoteFields, NoteWizard};
    use chrono::Utc;

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.into(),
            text: text.into(),
        }
    }

    fn payload(children: Vec<Note>) -> SubmissionPayload<NoteWizard> {
        SubmissionPayload {
            fields: NoteFields {
                title: "Groceries".into(),
                note_count: children.len(),
            },
            children,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_payload_accepts_distinct_children() {
        assert_eq!(
            validate_payload(&payload(vec![note("n1", "milk"), note("n2", "bread")])),
            Ok(())
        );
    }

    #[test]
    fn test_payload_rejects_duplicate_child_ids() {
        assert_eq!(
            validate_payload(&payload(vec![note("n1", "milk"), note("n1", "bread")])),
            Err(ValidationReason::DuplicateValue {
                label: "Id",
                value: "n1".into()
            })
        );
    }

    #[test]
    fn test_payload_checks_every_child() {
        assert_eq!(
            validate_payload(&payload(vec![note("n1", "milk"), note("n2", " ")])),
            Err(ValidationReason::MissingField { label: "Text" })
        );
        assert_eq!(
            validate_payload(&payload(vec![note("n1", "milk"), note("n2", "milk")])),
            Err(ValidationReason::DuplicateValue {
                label: "Text",
                value: "milk".into()
            })
        );
    }

    #[test]
    fn test_payload_checks_fields_and_children_presence() {
        let mut empty_title = payload(vec![note("n1", "milk")]);
        empty_title.fields.title.clear();
        assert_eq!(
            validate_payload(&empty_title),
            Err(ValidationReason::MissingField { label: "Title" })
        );

        assert_eq!(
            validate_payload(&payload(Vec::new())),
            Err(ValidationReason::NoChildren { child: "note" })
        );
    }
}
