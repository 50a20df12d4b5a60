use super::flow::WizardFlow;

/// Режим сессии редактирования
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Новая запись, при сохранении добавляется в конец списка
    Create,
    /// Существующая запись, при сохранении заменяет элемент `target_index`
    Edit { target_index: usize },
}

/// Открытая сессия редактирования одной дочерней записи
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<C> {
    pub(super) mode: SessionMode,
    pub(super) draft: C,
}

impl<C> EditSession<C> {
    pub(super) fn create(draft: C) -> Self {
        Self {
            mode: SessionMode::Create,
            draft,
        }
    }

    pub(super) fn edit(target_index: usize, draft: C) -> Self {
        Self {
            mode: SessionMode::Edit { target_index },
            draft,
        }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn draft(&self) -> &C {
        &self.draft
    }

    pub fn target_index(&self) -> Option<usize> {
        match self.mode {
            SessionMode::Create => None,
            SessionMode::Edit { target_index } => Some(target_index),
        }
    }

    pub fn is_create(&self) -> bool {
        self.mode == SessionMode::Create
    }
}

/// Полное состояние мастера
///
/// Создаётся при открытии мастера, отбрасывается при закрытии без отправки.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState<F: WizardFlow> {
    pub(super) current_step: u8,
    pub(super) fields: F::Fields,
    pub(super) children: Vec<F::Child>,
    pub(super) session: Option<EditSession<F::Child>>,
    pub(super) submitted: bool,
}

impl<F: WizardFlow> WizardState<F> {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            fields: F::Fields::default(),
            children: Vec::new(),
            session: None,
            submitted: false,
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn fields(&self) -> &F::Fields {
        &self.fields
    }

    pub fn children(&self) -> &[F::Child] {
        &self.children
    }

    pub fn session(&self) -> Option<&EditSession<F::Child>> {
        self.session.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

impl<F: WizardFlow> Default for WizardState<F> {
    fn default() -> Self {
        Self::new()
    }
}
