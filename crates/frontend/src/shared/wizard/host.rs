use std::future::Future;

use contracts::shared::wizard::{
    CallbackPort, StepKind, Summary, SubmissionPayload, WizardController, WizardError,
    WizardFlow,
};
use leptos::prelude::*;

/// Мастер в реактивном состоянии + команды, превращающие ошибки движка
/// в сообщение для пользователя
pub struct WizardHost<F: WizardFlow> {
    pub wizard: RwSignal<WizardController<F>>,
    pub error: RwSignal<Option<String>>,
    /// Идёт отправка на сервер
    pub busy: RwSignal<bool>,
}

impl<F: WizardFlow> Clone for WizardHost<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: WizardFlow> Copy for WizardHost<F> {}

impl<F> WizardHost<F>
where
    F: WizardFlow,
    WizardController<F>: Send + Sync,
{
    pub fn open() -> Self {
        Self {
            wizard: RwSignal::new(WizardController::open()),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
        }
    }

    fn run<T>(
        &self,
        op: impl FnOnce(&mut WizardController<F>) -> Result<T, WizardError>,
    ) -> Option<T> {
        match self.wizard.try_update(op)? {
            Ok(value) => {
                self.error.set(None);
                Some(value)
            }
            Err(e) => {
                log::debug!("{}: {}", F::TITLE, e);
                self.error.set(Some(e.user_message()));
                None
            }
        }
    }

    // ---- чтение ----

    pub fn current_step(&self) -> u8 {
        self.wizard.with(|w| w.current_step())
    }

    pub fn step_kind(&self) -> StepKind {
        self.wizard.with(|w| w.step_kind())
    }

    pub fn is_final_step(&self) -> bool {
        self.wizard.with(|w| w.is_final_step())
    }

    pub fn has_session(&self) -> bool {
        self.wizard.with(|w| w.session().is_some())
    }

    pub fn fields(&self) -> F::Fields {
        self.wizard.with(|w| w.fields().clone())
    }

    pub fn children(&self) -> Vec<F::Child> {
        self.wizard.with(|w| w.children().to_vec())
    }

    pub fn draft(&self) -> Option<F::Child> {
        self.wizard.with(|w| w.draft().cloned())
    }

    /// Сообщение, с которым будет отклонён переход на следующий шаг
    pub fn next_blocker(&self) -> Option<String> {
        self.wizard
            .with(|w| w.can_go_next().err().map(|reason| reason.to_string()))
    }

    pub fn summary(&self) -> Summary {
        self.wizard.with(|w| w.summary())
    }

    // ---- команды ----

    pub fn next(&self) {
        self.run(|w| w.go_next());
    }

    pub fn previous(&self) {
        self.run(|w| w.go_previous());
    }

    pub fn update_field(&self, update: F::FieldUpdate) {
        self.wizard.update(|w| w.update_aggregate_field(update));
    }

    pub fn start_create(&self) {
        let id = format!("{}-{}", F::CHILD_LABEL, uuid::Uuid::new_v4().simple());
        self.run(|w| w.start_create(id));
    }

    pub fn start_edit(&self, index: usize) {
        self.run(|w| w.start_edit(index));
    }

    pub fn update_draft(&self, update: F::DraftUpdate) {
        self.run(|w| w.update_draft_field(update));
    }

    pub fn save_draft(&self) {
        self.run(|w| w.save());
    }

    pub fn cancel_draft(&self) {
        self.run(|w| w.cancel_edit());
    }

    pub fn delete(&self, index: usize) {
        self.run(|w| w.delete_entity(index));
    }

    /// Отправить результат через `send`
    ///
    /// Движок фиксирует отправку на копии состояния; копия становится
    /// текущей только после успешного ответа, иначе мастер остаётся
    /// на итоговом шаге с сообщением об ошибке.
    pub fn submit<S, Fut>(&self, send: S, on_submitted: Callback<()>)
    where
        S: FnOnce(SubmissionPayload<F>) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        if self.busy.get_untracked() {
            return;
        }

        let mut next = self.wizard.get_untracked();
        let mut captured = None;
        let result = next.submit(&mut CallbackPort(|payload: SubmissionPayload<F>| {
            captured = Some(payload);
        }));
        if let Err(e) = result {
            self.error.set(Some(e.user_message()));
            return;
        }
        let Some(payload) = captured else {
            return;
        };

        let host = *self;
        host.busy.set(true);
        host.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match send(payload).await {
                Ok(()) => {
                    host.wizard.set(next);
                    on_submitted.run(());
                }
                Err(e) => {
                    log::warn!("{}: submission failed: {}", F::TITLE, e);
                    host.error.set(Some(e));
                }
            }
            host.busy.set(false);
        });
    }

    pub fn cancel(&self, on_cancel: Callback<()>) {
        self.wizard.get_untracked().cancel();
        on_cancel.run(());
    }
}
