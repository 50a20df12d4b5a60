use super::view_model::{ProductWizardViewModel, CURRENCIES};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::wizard::{ErrorBox, SummaryView, WizardFooter, WizardProgress};
use contracts::domain::a002_product::{
    ActivationKeyword, ChargePeriod, KeywordFieldUpdate, ProductFieldUpdate, ProductWizard,
};
use contracts::shared::wizard::WizardFlow;
use leptos::prelude::*;

/// Мастер создания продукта в модальном окне
#[component]
pub fn ProductWizardView(on_submitted: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = ProductWizardViewModel::new();
    let host = vm.host;

    let step = Memo::new(move |_| host.current_step());
    let titles = (1..=ProductWizard::TOTAL_STEPS)
        .map(ProductWizard::step_title)
        .collect::<Vec<_>>();

    view! {
        <Modal
            title=ProductWizard::TITLE.to_string()
            on_close=Callback::new(move |_| host.cancel(on_cancel))
            ignore_overlay=true
        >
            <div class="wizard product-wizard">
                <WizardProgress current=Signal::derive(move || step.get()) titles=titles />
                <ErrorBox error=host.error />

                {move || match step.get() {
                    1 => view! { <DetailsStep vm=vm /> }.into_any(),
                    2 => view! { <BillingStep vm=vm /> }.into_any(),
                    3 => view! { <KeywordsStep vm=vm /> }.into_any(),
                    _ => view! { <SummaryView summary=Signal::derive(move || host.summary()) /> }.into_any(),
                }}

                <WizardFooter
                    current=Signal::derive(move || step.get())
                    is_final=Signal::derive(move || host.is_final_step())
                    locked=Signal::derive(move || host.has_session())
                    busy=Signal::derive(move || host.busy.get())
                    blocker=Signal::derive(move || host.next_blocker())
                    on_back=Callback::new(move |_| host.previous())
                    on_next=Callback::new(move |_| host.next())
                    on_submit=Callback::new(move |_| vm.submit(on_submitted))
                    on_cancel=Callback::new(move |_| host.cancel(on_cancel))
                />
            </div>
        </Modal>
    }
}

#[component]
fn DetailsStep(vm: ProductWizardViewModel) -> impl IntoView {
    let fields = Memo::new(move |_| vm.host.fields());

    view! {
        <div class="details-form">
            <div class="form-group">
                <label for="product-provider">"Provider"</label>
                <input
                    type="text"
                    id="product-provider"
                    prop:value=move || fields.get().provider
                    on:input=move |ev| vm.set_field(ProductFieldUpdate::Provider(event_target_value(&ev)))
                />
            </div>
            <div class="form-group">
                <label for="product-name">"Product name"</label>
                <input
                    type="text"
                    id="product-name"
                    prop:value=move || fields.get().name
                    on:input=move |ev| vm.set_field(ProductFieldUpdate::Name(event_target_value(&ev)))
                />
            </div>
            <div class="form-group">
                <label for="product-description">"Description"</label>
                <textarea
                    id="product-description"
                    rows="3"
                    prop:value=move || fields.get().description
                    on:input=move |ev| vm.set_field(ProductFieldUpdate::Description(event_target_value(&ev)))
                />
            </div>
            <div class="form-group">
                <label for="product-category">"Category"</label>
                <input
                    type="text"
                    id="product-category"
                    placeholder="optional"
                    prop:value=move || fields.get().category
                    on:input=move |ev| vm.set_field(ProductFieldUpdate::Category(event_target_value(&ev)))
                />
            </div>
        </div>
    }
}

#[component]
fn BillingStep(vm: ProductWizardViewModel) -> impl IntoView {
    let fields = Memo::new(move |_| vm.host.fields());
    // Только начальное значение, дальше поле ведёт пользователь
    let initial_price = fields
        .get_untracked()
        .price
        .map(|p| p.to_string())
        .unwrap_or_default();

    view! {
        <div class="details-form">
            <div class="form-row">
                <div class="form-group">
                    <label for="product-price">"Price"</label>
                    <input
                        type="text"
                        inputmode="decimal"
                        id="product-price"
                        placeholder="0.00"
                        value=initial_price
                        on:input=move |ev| vm.set_price(&event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="product-currency">"Currency"</label>
                    <select
                        id="product-currency"
                        on:change=move |ev| vm.set_field(ProductFieldUpdate::Currency(event_target_value(&ev)))
                    >
                        {CURRENCIES
                            .into_iter()
                            .map(|code| view! {
                                <option value=code selected=move || fields.get().currency == code>{code}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </div>
    }
}

#[component]
fn KeywordsStep(vm: ProductWizardViewModel) -> impl IntoView {
    let host = vm.host;
    let keywords = Memo::new(move |_| host.children());
    let editing = Memo::new(move |_| host.has_session());

    view! {
        <div class="wizard-children">
            <div class="wizard-children__header">
                <h4>"Activation keywords"</h4>
                <button
                    class="button button--primary"
                    disabled=move || editing.get()
                    on:click=move |_| host.start_create()
                >
                    {icon("plus")}
                    "Add keyword"
                </button>
            </div>

            {move || {
                let items = keywords.get();
                if items.is_empty() {
                    return view! { <p class="muted">"No keywords yet"</p> }.into_any();
                }
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, keyword)| view! { <KeywordCard vm=vm index=index keyword=keyword locked=editing /> })
                    .collect_view()
                    .into_any()
            }}

            <Show when=move || editing.get()>
                <KeywordEditor vm=vm />
            </Show>
        </div>
    }
}

fn describe_keyword(keyword: &ActivationKeyword) -> String {
    let trial = match (keyword.has_trial, keyword.trial_days) {
        (true, Some(days)) => format!("{} day trial", days),
        (true, None) => "trial".to_string(),
        (false, _) => "no trial".to_string(),
    };
    format!("{}, {}", keyword.charge_period.label(), trial)
}

#[component]
fn KeywordCard(
    vm: ProductWizardViewModel,
    index: usize,
    keyword: ActivationKeyword,
    locked: Memo<bool>,
) -> impl IntoView {
    let host = vm.host;
    let meta = describe_keyword(&keyword);

    view! {
        <div class="child-card">
            <div class="child-card__body">
                <div class="child-card__title">{keyword.keyword.trim().to_uppercase()}</div>
                <div class="child-card__meta">{meta}</div>
            </div>
            <div class="child-card__actions">
                <button
                    class="button button--icon"
                    title="Edit"
                    disabled=move || locked.get()
                    on:click=move |_| host.start_edit(index)
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--icon"
                    title="Delete"
                    disabled=move || locked.get()
                    on:click=move |_| host.delete(index)
                >
                    {icon("delete")}
                </button>
            </div>
        </div>
    }
}

#[component]
fn KeywordEditor(vm: ProductWizardViewModel) -> impl IntoView {
    let host = vm.host;
    let draft = Memo::new(move |_| host.draft());
    let has_trial = Memo::new(move |_| draft.get().is_some_and(|d| d.has_trial));

    view! {
        <div class="child-editor">
            <div class="form-row">
                <div class="form-group">
                    <label for="keyword-text">"Keyword"</label>
                    <input
                        type="text"
                        id="keyword-text"
                        placeholder="NEWS"
                        prop:value=move || draft.get().map(|d| d.keyword).unwrap_or_default()
                        on:input=move |ev| vm.edit_keyword(KeywordFieldUpdate::Keyword(event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label for="keyword-period">"Charge period"</label>
                    <select
                        id="keyword-period"
                        on:change=move |ev| {
                            if let Some(period) = ChargePeriod::from_code(&event_target_value(&ev)) {
                                vm.edit_keyword(KeywordFieldUpdate::ChargePeriod(period));
                            }
                        }
                    >
                        {ChargePeriod::ALL
                            .into_iter()
                            .map(|period| view! {
                                <option
                                    value=period.as_str()
                                    selected=move || draft.get().is_some_and(|d| d.charge_period == period)
                                >
                                    {period.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-row">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || has_trial.get()
                        on:change=move |ev| vm.edit_keyword(KeywordFieldUpdate::HasTrial(event_target_checked(&ev)))
                    />
                    "Trial period"
                </label>
                <Show when=move || has_trial.get()>
                    <input
                        type="number"
                        min="1"
                        placeholder="Days"
                        prop:value=move || {
                            draft
                                .get()
                                .and_then(|d| d.trial_days)
                                .map(|days| days.to_string())
                                .unwrap_or_default()
                        }
                        on:input=move |ev| vm.edit_keyword(KeywordFieldUpdate::TrialDays(
                            event_target_value(&ev).trim().parse().ok(),
                        ))
                    />
                </Show>
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=move |_| host.save_draft()>
                    {icon("check")}
                    "Save keyword"
                </button>
                <button class="button button--secondary" on:click=move |_| host.cancel_draft()>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_keyword() {
        let mut keyword = ActivationKeyword::new("k1".into());
        assert_eq!(describe_keyword(&keyword), "Monthly, no trial");

        keyword.has_trial = true;
        keyword.trial_days = Some(7);
        keyword.charge_period = ChargePeriod::Weekly;
        assert_eq!(describe_keyword(&keyword), "Weekly, 7 day trial");
    }
}
