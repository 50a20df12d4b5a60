//! Минимальный мастер для тестов движка

use serde::{Deserialize, Serialize};

use super::error::ValidationReason;
use super::flow::{ApplyUpdate, ChildEntity, StepKind, WizardFlow};
use super::summary::{ChildSummary, SummaryRow};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: String,
    pub note_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub text: String,
}

impl ChildEntity for Note {
    fn id(&self) -> &str {
        &self.id
    }
}

pub enum NoteFieldUpdate {
    Title(String),
}

impl ApplyUpdate<NoteFields> for NoteFieldUpdate {
    fn apply_to(self, target: &mut NoteFields) {
        match self {
            NoteFieldUpdate::Title(v) => target.title = v,
        }
    }
}

pub enum NoteUpdate {
    Text(String),
}

impl ApplyUpdate<Note> for NoteUpdate {
    fn apply_to(self, target: &mut Note) {
        match self {
            NoteUpdate::Text(v) => target.text = v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoteWizard;

impl WizardFlow for NoteWizard {
    type Fields = NoteFields;
    type Child = Note;
    type FieldUpdate = NoteFieldUpdate;
    type DraftUpdate = NoteUpdate;

    const TITLE: &'static str = "Notes";
    const CHILD_LABEL: &'static str = "note";
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
            1 => "Title",
            2 => "Notes",
            _ => "Summary",
        }
    }

    fn validate_fields(_step: u8, fields: &NoteFields) -> Result<(), ValidationReason> {
        if fields.title.trim().is_empty() {
            return Err(ValidationReason::MissingField { label: "Title" });
        }
        Ok(())
    }

    fn blank_child(id: String) -> Note {
        Note {
            id,
            text: String::new(),
        }
    }

    fn validate_draft(draft: &Note, siblings: &[Note]) -> Result<(), ValidationReason> {
        if draft.text.trim().is_empty() {
            return Err(ValidationReason::MissingField { label: "Text" });
        }
        if siblings.iter().any(|n| n.text == draft.text) {
            return Err(ValidationReason::DuplicateValue {
                label: "Text",
                value: draft.text.clone(),
            });
        }
        Ok(())
    }

    fn derive_after_authoring(fields: &mut NoteFields, children: &[Note]) {
        fields.note_count = children.len();
    }

    fn summarize_fields(fields: &NoteFields) -> Vec<SummaryRow> {
        vec![SummaryRow::text("Title", fields.title.clone())]
    }

    fn summarize_child(child: &Note) -> ChildSummary {
        ChildSummary {
            id: child.id.clone(),
            title: child.text.clone(),
            rows: Vec::new(),
        }
    }
}
