use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::flow::WizardFlow;

/// Результат мастера, передаваемый внешнему получателю
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct SubmissionPayload<F: WizardFlow> {
    #[serde(rename = "aggregateFields")]
    pub fields: F::Fields,
    #[serde(rename = "childEntities")]
    pub children: Vec<F::Child>,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}

/// Порт отправки: экран-хозяин сохраняет результат и закрывает мастер
pub trait SubmissionPort<F: WizardFlow> {
    type Output;

    fn submit(&mut self, payload: SubmissionPayload<F>) -> Self::Output;
}

/// Порт, складывающий результаты в память
#[derive(Debug, Clone)]
pub struct CollectingPort<F: WizardFlow> {
    submitted: Vec<SubmissionPayload<F>>,
}

impl<F: WizardFlow> CollectingPort<F> {
    pub fn new() -> Self {
        Self {
            submitted: Vec::new(),
        }
    }

    pub fn submitted(&self) -> &[SubmissionPayload<F>] {
        &self.submitted
    }

    pub fn take_last(&mut self) -> Option<SubmissionPayload<F>> {
        self.submitted.pop()
    }
}

impl<F: WizardFlow> Default for CollectingPort<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: WizardFlow> SubmissionPort<F> for CollectingPort<F> {
    type Output = usize;

    fn submit(&mut self, payload: SubmissionPayload<F>) -> usize {
        self.submitted.push(payload);
        self.submitted.len()
    }
}

/// Порт-обёртка над замыканием
pub struct CallbackPort<C>(pub C);

impl<F, C, T> SubmissionPort<F> for CallbackPort<C>
where
    F: WizardFlow,
    C: FnMut(SubmissionPayload<F>) -> T,
{
    type Output = T;

    fn submit(&mut self, payload: SubmissionPayload<F>) -> T {
        (self.0)(payload)
    }
}
