use thiserror::Error;

/// Причина, по которой шаг или черновик не прошли проверку.
///
/// `Display` возвращает сообщение для пользователя.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("save or cancel the current {child} before continuing")]
    EditSessionOpen { child: &'static str },

    #[error("must create at least one {child}")]
    NoChildren { child: &'static str },

    #[error("complete all required fields: {label}")]
    MissingField { label: &'static str },

    #[error("{label}: {message}")]
    InvalidValue { label: &'static str, message: String },

    #[error("{label} \"{value}\" is already used")]
    DuplicateValue { label: &'static str, value: String },
}

/// Вызов, запрещённый инвариантами мастера (ошибка связывания UI)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionRejection {
    #[error("save or cancel the open edit session first")]
    EditSessionOpen,

    #[error("no edit session is open")]
    NoEditSession,

    #[error("index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("submit is only allowed on the final step (step {current} of {total})")]
    NotFinalStep { current: u8, total: u8 },

    #[error("already on the final step ({total})")]
    LastStep { total: u8 },

    #[error("child records can only be changed on step {authoring} (current step {current})")]
    NotAuthoringStep { current: u8, authoring: u8 },

    #[error("child id \"{0}\" is already used")]
    DuplicateChildId(String),

    #[error("the wizard has already been submitted")]
    AlreadySubmitted,
}

/// Ошибки движка мастеров
///
/// Обе категории исправимы пользователем; фатальных ошибок у движка нет.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationReason),

    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] TransitionRejection),
}

impl WizardError {
    /// Сообщение для показа пользователю
    pub fn user_message(&self) -> String {
        match self {
            WizardError::Validation(reason) => reason.to_string(),
            WizardError::InvalidTransition(rejection) => rejection.to_string(),
        }
    }
}
