//! Общие части экранов-мастеров
//!
//! - `host.rs`: состояние мастера в сигналах и команды движка
//! - `components.rs`: прогресс шагов, ошибка, подвал с кнопками, сводка

mod components;
mod host;

pub use components::{ErrorBox, SummaryView, WizardFooter, WizardProgress};
pub use host::WizardHost;
