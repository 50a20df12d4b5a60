//! Движок пошаговых мастеров (wizard flow engine)
//!
//! Общая машина состояний для мастеров создания кампаний и продуктов:
//! - `flow.rs`: трейт `WizardFlow`, описание конкретного мастера
//! - `state.rs`: явное состояние мастера и сессия редактирования дочерней записи
//! - `controller.rs`: переходы между шагами, отправка, отмена
//! - `session.rs`: создание/редактирование/удаление дочерних записей
//! - `validator.rs`: чистые проверки шагов и отправленных данных
//! - `summary.rs`: проекция состояния для итогового шага
//! - `port.rs`: порт отправки результата внешнему получателю
//!
//! ```rust,ignore
//! let mut wizard = WizardController::<CampaignWizard>::open();
//! wizard.update_aggregate_field(CampaignFieldUpdate::Name("Black Friday".into()));
//! wizard.go_next()?;
//! ```

mod controller;
mod error;
mod flow;
mod port;
mod session;
mod state;
mod summary;
mod validator;

pub use controller::WizardController;
pub use error::{TransitionRejection, ValidationReason, WizardError};
pub use flow::{ApplyUpdate, ChildEntity, StepKind, WizardFlow};
pub use port::{CallbackPort, CollectingPort, SubmissionPayload, SubmissionPort};
pub use state::{EditSession, SessionMode, WizardState};
pub use summary::{render_summary, ChildSummary, Summary, SummaryRow, PLACEHOLDER};
pub use validator::{validate_payload, validate_step};

#[cfg(test)]
pub(crate) mod test_flow;
