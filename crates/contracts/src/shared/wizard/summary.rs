use serde::Serialize;
use std::fmt::Display;

use super::flow::WizardFlow;
use super::state::WizardState;

/// Заглушка для незаполненных необязательных полей
pub const PLACEHOLDER: &str = "—";

/// Строка сводки "подпись: значение"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

impl SummaryRow {
    /// Пустое (или из одних пробелов) значение заменяется заглушкой
    pub fn text(label: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = if value.trim().is_empty() {
            PLACEHOLDER.to_string()
        } else {
            value
        };
        Self { label, value }
    }

    pub fn optional<T: Display>(label: &'static str, value: Option<T>) -> Self {
        Self {
            label,
            value: value
                .map(|v| v.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }

    pub fn list<T: AsRef<str>>(label: &'static str, values: &[T]) -> Self {
        let joined = values
            .iter()
            .map(|v| v.as_ref().trim())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        Self::text(label, joined)
    }
}

/// Сводка по одной дочерней записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildSummary {
    pub id: String,
    pub title: String,
    pub rows: Vec<SummaryRow>,
}

/// Проекция состояния мастера для итогового шага (только чтение)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub title: &'static str,
    pub fields: Vec<SummaryRow>,
    pub child_label: &'static str,
    pub children: Vec<ChildSummary>,
}

impl Summary {
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

pub fn render_summary<F: WizardFlow>(state: &WizardState<F>) -> Summary {
    Summary {
        title: F::TITLE,
        fields: F::summarize_fields(state.fields()),
        child_label: F::CHILD_LABEL,
        children: state.children().iter().map(F::summarize_child).collect(),
    }
}
