use super::view_model::{CampaignWizardViewModel, SHORT_CODES};
use crate::shared::date_utils::{
    date_input_value, parse_date_input, parse_time_input, time_input_value,
};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::wizard::{ErrorBox, SummaryView, WizardFooter, WizardProgress};
use contracts::domain::a001_campaign::wizard::{SCHEDULE_MAX_QUANTITY, SMS_MAX_LENGTH};
use contracts::domain::a001_campaign::{
    CampaignChannel, CampaignFieldUpdate, CampaignSend, CampaignWizard, ScheduleUpdate,
    SegmentationType, SendFieldUpdate,
};
use contracts::shared::wizard::WizardFlow;
use leptos::prelude::*;

/// Мастер создания кампании в модальном окне
#[component]
pub fn CampaignWizardView(on_submitted: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = CampaignWizardViewModel::new();
    vm.load_products();
    let host = vm.host;

    // Тело шага зависит только от номера шага
    let step = Memo::new(move |_| host.current_step());
    let titles = (1..=CampaignWizard::TOTAL_STEPS)
        .map(CampaignWizard::step_title)
        .collect::<Vec<_>>();

    view! {
        <Modal
            title=CampaignWizard::TITLE.to_string()
            on_close=Callback::new(move |_| host.cancel(on_cancel))
            ignore_overlay=true
        >
            <div class="wizard campaign-wizard">
                <WizardProgress current=Signal::derive(move || step.get()) titles=titles />
                <ErrorBox error=host.error />

                {move || match step.get() {
                    1 => view! { <DetailsStep vm=vm /> }.into_any(),
                    2 => view! { <SendsStep vm=vm /> }.into_any(),
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
fn DetailsStep(vm: CampaignWizardViewModel) -> impl IntoView {
    let fields = Memo::new(move |_| vm.host.fields());

    view! {
        <div class="details-form">
            <div class="form-group">
                <label for="campaign-name">"Campaign name"</label>
                <input
                    type="text"
                    id="campaign-name"
                    prop:value=move || fields.get().name
                    on:input=move |ev| vm.set_field(CampaignFieldUpdate::Name(event_target_value(&ev)))
                    placeholder="Black Friday"
                />
            </div>

            <div class="form-group">
                <label for="campaign-description">"Description"</label>
                <textarea
                    id="campaign-description"
                    prop:value=move || fields.get().description
                    on:input=move |ev| vm.set_field(CampaignFieldUpdate::Description(event_target_value(&ev)))
                    rows="3"
                />
            </div>

            <div class="form-group">
                <label for="campaign-channel">"Channel"</label>
                <select
                    id="campaign-channel"
                    on:change=move |ev| {
                        if let Some(channel) = CampaignChannel::from_code(&event_target_value(&ev)) {
                            vm.set_field(CampaignFieldUpdate::Channel(channel));
                        }
                    }
                >
                    {CampaignChannel::ALL
                        .into_iter()
                        .map(|channel| view! {
                            <option value=channel.as_str() selected=move || fields.get().channel == channel>
                                {channel.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="campaign-execution-date">"Execution date"</label>
                    <input
                        type="date"
                        id="campaign-execution-date"
                        prop:value=move || date_input_value(fields.get().execution_date)
                        on:change=move |ev| vm.set_field(CampaignFieldUpdate::ExecutionDate(
                            parse_date_input(&event_target_value(&ev)),
                        ))
                    />
                </div>
                <div class="form-group">
                    <label for="campaign-end-date">"End date"</label>
                    <input
                        type="date"
                        id="campaign-end-date"
                        prop:value=move || date_input_value(fields.get().end_date)
                        on:change=move |ev| vm.set_field(CampaignFieldUpdate::EndDate(
                            parse_date_input(&event_target_value(&ev)),
                        ))
                    />
                    <small class="hint">"Recalculated from the latest send schedule"</small>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SendsStep(vm: CampaignWizardViewModel) -> impl IntoView {
    let host = vm.host;
    let sends = Memo::new(move |_| host.children());
    let editing = Memo::new(move |_| host.has_session());

    view! {
        <div class="wizard-children">
            <div class="wizard-children__header">
                <h4>"Sends"</h4>
                <button
                    class="button button--primary"
                    disabled=move || editing.get()
                    on:click=move |_| host.start_create()
                >
                    {icon("plus")}
                    "Add send"
                </button>
            </div>

            {move || {
                let items = sends.get();
                if items.is_empty() {
                    return view! { <p class="muted">"No sends yet"</p> }.into_any();
                }
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, send)| view! { <SendCard vm=vm index=index send=send locked=editing /> })
                    .collect_view()
                    .into_any()
            }}

            <Show when=move || editing.get()>
                <SendEditor vm=vm />
            </Show>
        </div>
    }
}

#[component]
fn SendCard(
    vm: CampaignWizardViewModel,
    index: usize,
    send: CampaignSend,
    locked: Memo<bool>,
) -> impl IntoView {
    let host = vm.host;
    let products = send
        .product_ids
        .iter()
        .map(|id| vm.product_name(id))
        .collect::<Vec<_>>()
        .join(", ");
    let audience = if send.segmentation.requires_products() {
        format!("{}: {}", send.segmentation.label(), products)
    } else {
        send.segmentation.label().to_string()
    };
    let schedules = send
        .schedules
        .iter()
        .map(|s| {
            format!(
                "{} {}",
                date_input_value(s.date),
                time_input_value(s.time)
            )
        })
        .collect::<Vec<_>>()
        .join("; ");

    view! {
        <div class="child-card">
            <div class="child-card__body">
                <div class="child-card__title">{format!("{} · {}", send.short_code, send.sms_text)}</div>
                <div class="child-card__meta">{audience}</div>
                <div class="child-card__meta">{schedules}</div>
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
fn SendEditor(vm: CampaignWizardViewModel) -> impl IntoView {
    let host = vm.host;
    let draft = Memo::new(move |_| host.draft());
    let is_create = Memo::new(move |_| {
        host.wizard
            .with(|w| w.session().map(|s| s.is_create()).unwrap_or(true))
    });
    let segmentation = Memo::new(move |_| draft.get().map(|d| d.segmentation).unwrap_or_default());
    let schedule_count = Memo::new(move |_| draft.get().map(|d| d.schedules.len()).unwrap_or(0));
    let text_length = move || {
        draft
            .get()
            .map(|d| d.sms_text.chars().count())
            .unwrap_or(0)
    };

    view! {
        <div class="child-editor">
            <h4>{move || if is_create.get() { "New send" } else { "Edit send" }}</h4>

            <div class="form-row">
                <div class="form-group">
                    <label for="send-short-code">"Short code"</label>
                    <select
                        id="send-short-code"
                        on:change=move |ev| vm.edit_send(SendFieldUpdate::ShortCode(event_target_value(&ev)))
                    >
                        <option value="" selected=move || draft.get().is_some_and(|d| d.short_code.is_empty())>
                            "Select..."
                        </option>
                        {SHORT_CODES
                            .into_iter()
                            .map(|code| view! {
                                <option value=code selected=move || draft.get().is_some_and(|d| d.short_code == code)>
                                    {code}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="send-segmentation">"Segmentation"</label>
                    <select
                        id="send-segmentation"
                        on:change=move |ev| {
                            if let Some(s) = SegmentationType::from_code(&event_target_value(&ev)) {
                                vm.edit_send(SendFieldUpdate::Segmentation(s));
                            }
                        }
                    >
                        {SegmentationType::ALL
                            .into_iter()
                            .map(|s| view! {
                                <option value=s.as_str() selected=move || segmentation.get() == s>
                                    {s.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-group">
                <label for="send-text">"Message text"</label>
                <textarea
                    id="send-text"
                    rows="3"
                    prop:value=move || draft.get().map(|d| d.sms_text).unwrap_or_default()
                    on:input=move |ev| vm.edit_send(SendFieldUpdate::SmsText(event_target_value(&ev)))
                />
                <small
                    class="hint"
                    class:hint--error={move || text_length() > SMS_MAX_LENGTH}
                >
                    {move || format!("{}/{}", text_length(), SMS_MAX_LENGTH)}
                </small>
            </div>

            {move || segmentation.get().requires_products().then(|| view! { <ProductPicker vm=vm draft=draft /> })}

            <div class="form-group">
                <label>"Schedules"</label>
                {move || {
                    (0..schedule_count.get())
                        .map(|index| view! { <ScheduleRow vm=vm draft=draft index=index /> })
                        .collect_view()
                }}
                <button
                    class="button button--secondary"
                    on:click=move |_| vm.edit_send(SendFieldUpdate::AddSchedule)
                >
                    {icon("plus")}
                    "Add schedule"
                </button>
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=move |_| host.save_draft()>
                    {icon("check")}
                    "Save send"
                </button>
                <button class="button button--secondary" on:click=move |_| host.cancel_draft()>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ProductPicker(vm: CampaignWizardViewModel, draft: Memo<Option<CampaignSend>>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>"Products"</label>
            <div class="checkbox-list">
                {move || {
                    let products = vm.products.get();
                    if products.is_empty() {
                        return view! { <p class="muted">"No products available"</p> }.into_any();
                    }
                    products
                        .into_iter()
                        .map(|product| {
                            let id = product.base.id.0.to_string();
                            let id_checked = id.clone();
                            view! {
                                <label class="checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            draft.get().is_some_and(|d| d.product_ids.contains(&id_checked))
                                        }
                                        on:change=move |_| vm.edit_send(SendFieldUpdate::ToggleProduct(id.clone()))
                                    />
                                    {product.base.description}
                                </label>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}

#[component]
fn ScheduleRow(
    vm: CampaignWizardViewModel,
    draft: Memo<Option<CampaignSend>>,
    index: usize,
) -> impl IntoView {
    let schedule = move || {
        draft
            .get()
            .and_then(|d| d.schedules.get(index).cloned())
            .unwrap_or_default()
    };
    let with_file = move || {
        draft
            .get()
            .is_some_and(|d| !d.segmentation.requires_products())
    };

    view! {
        <div class="schedule-row">
            <input
                type="date"
                prop:value=move || date_input_value(schedule().date)
                on:change=move |ev| vm.edit_schedule(index, ScheduleUpdate::Date(parse_date_input(&event_target_value(&ev))))
            />
            <input
                type="time"
                prop:value=move || time_input_value(schedule().time)
                on:change=move |ev| vm.edit_schedule(index, ScheduleUpdate::Time(parse_time_input(&event_target_value(&ev))))
            />
            <input
                type="number"
                min="1"
                max=SCHEDULE_MAX_QUANTITY.to_string()
                placeholder="Quantity"
                prop:value=move || schedule().quantity.map(|q| q.to_string()).unwrap_or_default()
                on:input=move |ev| vm.edit_schedule(index, ScheduleUpdate::Quantity(event_target_value(&ev).trim().parse().ok()))
            />
            <Show when=with_file>
                <input
                    type="text"
                    placeholder="uploads/base.csv"
                    prop:value=move || schedule().file.unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        let file = Some(value.trim().to_string()).filter(|f| !f.is_empty());
                        vm.edit_schedule(index, ScheduleUpdate::File(file));
                    }
                />
            </Show>
            <button
                class="button button--icon"
                title="Remove schedule"
                on:click=move |_| vm.edit_send(SendFieldUpdate::RemoveSchedule(index))
            >
                {icon("x")}
            </button>
        </div>
    }
}
