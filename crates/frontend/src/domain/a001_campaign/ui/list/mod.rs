use crate::domain::a001_campaign::ui::wizard::CampaignWizardView;
use crate::shared::api_utils::api_url;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::a001_campaign::{Campaign, CampaignStatus};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CampaignRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub channel: String,
    pub execution_date: String,
    pub end_date: String,
    pub sends: usize,
    pub quantity: u32,
    pub status: CampaignStatus,
    pub created_at: String,
}

impl From<Campaign> for CampaignRow {
    fn from(c: Campaign) -> Self {
        let status = c.status(Utc::now().date_naive());
        Self {
            id: c.base.id.as_string(),
            quantity: c.total_quantity(),
            code: c.base.code,
            name: c.base.description,
            channel: c.channel.label().to_string(),
            execution_date: format_date(c.execution_date),
            end_date: format_date(c.end_date),
            sends: c.sends.len(),
            status,
            created_at: format_datetime(c.base.metadata.created_at),
        }
    }
}

fn status_label(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Scheduled => "Scheduled",
        CampaignStatus::Running => "Running",
        CampaignStatus::Finished => "Finished",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CampaignList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CampaignRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_wizard, set_show_wizard) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_campaigns().await {
                Ok(v) => {
                    let rows: Vec<CampaignRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let delete_row = move |row: CampaignRow| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Delete campaign \"{}\"?", row.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match delete_campaign(&row.id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let on_submitted = Callback::new(move |_| {
        set_show_wizard.set(false);
        fetch();
    });
    let on_cancel = Callback::new(move |_| set_show_wizard.set(false));

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Campaigns"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_wizard.set(true)>
                        {icon("plus")}
                        "New campaign"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || loading.get()>
                        {icon("refresh")}
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Channel"</th>
                            <th class="table__header-cell">"Execution"</th>
                            <th class="table__header-cell">"End"</th>
                            <th class="table__header-cell">"Sends"</th>
                            <th class="table__header-cell">"Messages"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let row_for_delete = row.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.channel}</td>
                                    <td class="table__cell">{row.execution_date}</td>
                                    <td class="table__cell">{row.end_date}</td>
                                    <td class="table__cell">{row.sends}</td>
                                    <td class="table__cell">{row.quantity}</td>
                                    <td class="table__cell">{status_label(row.status)}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--icon"
                                            title="Delete"
                                            on:click=move |_| delete_row(row_for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_wizard.get()>
                <CampaignWizardView on_submitted=on_submitted on_cancel=on_cancel />
            </Show>
        </div>
    }
}

async fn fetch_campaigns() -> Result<Vec<Campaign>, String> {
    let response = Request::get(&api_url("/api/campaign"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn delete_campaign(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/campaign/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
