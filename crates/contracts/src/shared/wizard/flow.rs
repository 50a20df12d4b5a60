use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt::Debug;

use super::error::ValidationReason;
use super::summary::{ChildSummary, SummaryRow};

/// Тип шага мастера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Заполнение полей основной сущности
    Define,
    /// Создание дочерних записей (рассылки, ключевые слова)
    AuthorChildren,
    /// Итоговый просмотр, только чтение
    Summary,
}

/// Дочерняя запись, создаваемая внутри мастера
pub trait ChildEntity: Clone + PartialEq + Debug {
    /// Идентификатор, уникальный в пределах мастера
    fn id(&self) -> &str;
}

/// Типизированное изменение одного поля (вместо пары "имя поля / значение")
pub trait ApplyUpdate<T> {
    fn apply_to(self, target: &mut T);
}

/// Описание конкретного мастера: состав полей, шаги и правила
///
/// Реализуется маркерным типом (`CampaignWizard`, `ProductWizard`),
/// контроллер и сессии редактирования общие для всех мастеров.
pub trait WizardFlow: Clone + PartialEq + Debug + Sized + 'static {
    /// Поля основной сущности
    type Fields: Clone + Default + PartialEq + Debug + Serialize + DeserializeOwned;
    /// Дочерняя запись
    type Child: ChildEntity + Serialize + DeserializeOwned;
    /// Изменение поля основной сущности
    type FieldUpdate: ApplyUpdate<Self::Fields>;
    /// Изменение поля черновика дочерней записи
    type DraftUpdate: ApplyUpdate<Self::Child>;

    /// Заголовок мастера
    const TITLE: &'static str;
    /// Имя дочерней записи для сообщений ("send", "activation keyword")
    const CHILD_LABEL: &'static str;
    /// Количество шагов (шаги нумеруются с 1)
    const TOTAL_STEPS: u8;

    fn step_kind(step: u8) -> StepKind;

    fn step_title(step: u8) -> &'static str;

    /// Проверка полей для шага типа `Define`
    fn validate_fields(step: u8, fields: &Self::Fields) -> Result<(), ValidationReason>;

    /// Пустой черновик для новой дочерней записи
    fn blank_child(id: String) -> Self::Child;

    /// Проверка черновика перед сохранением.
    /// `siblings`: остальные записи, без редактируемой.
    fn validate_draft(draft: &Self::Child, siblings: &[Self::Child])
        -> Result<(), ValidationReason>;

    /// Проверка дочерних записей вместе с полями основной сущности
    /// на шаге дочерних записей
    fn validate_authoring(
        _fields: &Self::Fields,
        _children: &[Self::Child],
    ) -> Result<(), ValidationReason> {
        Ok(())
    }

    /// Пересчёт производных полей при уходе с шага дочерних записей
    fn derive_after_authoring(_fields: &mut Self::Fields, _children: &[Self::Child]) {}

    fn summarize_fields(fields: &Self::Fields) -> Vec<SummaryRow>;

    fn summarize_child(child: &Self::Child) -> ChildSummary;

    /// Номер шага, на котором создаются дочерние записи
    fn authoring_step() -> u8 {
        (1..=Self::TOTAL_STEPS)
            .find(|step| Self::step_kind(*step) == StepKind::AuthorChildren)
            .unwrap_or(Self::TOTAL_STEPS)
    }
}
