use contracts::shared::wizard::Summary;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Полоса шагов мастера
#[component]
pub fn WizardProgress(
    current: Signal<u8>,
    /// Заголовки шагов по порядку
    titles: Vec<&'static str>,
) -> impl IntoView {
    let total = titles.len();
    view! {
        <ol class="wizard-progress">
            {titles
                .into_iter()
                .enumerate()
                .map(|(i, title)| {
                    let step = (i + 1) as u8;
                    view! {
                        <li
                            class="wizard-progress__step"
                            class:wizard-progress__step--active=move || current.get() == step
                            class:wizard-progress__step--done={move || current.get() > step}
                        >
                            <span class="wizard-progress__number">{format!("{}/{}", step, total)}</span>
                            <span class="wizard-progress__title">{title}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
pub fn ErrorBox(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
    }
}

/// Кнопки навигации: Отмена / Назад / Далее или Отправить
#[component]
pub fn WizardFooter(
    current: Signal<u8>,
    is_final: Signal<bool>,
    /// Открыта сессия редактирования или идёт отправка
    locked: Signal<bool>,
    busy: Signal<bool>,
    /// Причина, по которой переход вперёд сейчас не пройдёт
    blocker: Signal<Option<String>>,
    on_back: Callback<()>,
    on_next: Callback<()>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="wizard-footer">
            <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                {icon("x")}
                "Cancel"
            </button>
            <div class="wizard-footer__nav">
                <button
                    class="button button--secondary"
                    disabled=move || current.get() <= 1 || locked.get()
                    on:click=move |_| on_back.run(())
                >
                    {icon("chevron-left")}
                    "Back"
                </button>
                <Show
                    when=move || is_final.get()
                    fallback=move || view! {
                        <button
                            class="button button--primary"
                            class:button--muted=move || blocker.get().is_some()
                            title=move || blocker.get().unwrap_or_default()
                            disabled=move || locked.get()
                            on:click=move |_| on_next.run(())
                        >
                            "Next"
                            {icon("chevron-right")}
                        </button>
                    }
                >
                    <button
                        class="button button--primary"
                        disabled=move || locked.get() || busy.get()
                        on:click=move |_| on_submit.run(())
                    >
                        {icon("check")}
                        {move || if busy.get() { "Submitting..." } else { "Submit" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}

/// Итоговый шаг: поля агрегата и карточки дочерних записей
#[component]
pub fn SummaryView(summary: Signal<Summary>) -> impl IntoView {
    view! {
        {move || {
            let summary = summary.get();
            let heading = format!("{} ({})", plural_title(summary.child_label), summary.child_count());
            view! {
                <div class="wizard-summary">
                    <dl class="summary-fields">
                        {summary
                            .fields
                            .into_iter()
                            .map(|row| view! {
                                <dt>{row.label}</dt>
                                <dd>{row.value}</dd>
                            })
                            .collect_view()}
                    </dl>
                    <h4>{heading}</h4>
                    {summary
                        .children
                        .into_iter()
                        .map(|child| view! {
                            <div class="summary-card">
                                <div class="summary-card__title">{child.title}</div>
                                <dl class="summary-card__rows">
                                    {child
                                        .rows
                                        .into_iter()
                                        .map(|row| view! {
                                            <dt>{row.label}</dt>
                                            <dd>{row.value}</dd>
                                        })
                                        .collect_view()}
                                </dl>
                            </div>
                        })
                        .collect_view()}
                </div>
            }
        }}
    }
}

fn plural_title(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => format!("{}s", first.to_uppercase().chain(chars).collect::<String>()),
        None => String::new(),
    }
}
