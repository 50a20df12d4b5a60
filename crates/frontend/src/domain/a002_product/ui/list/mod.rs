use crate::domain::a002_product::ui::wizard::ProductWizardView;
use crate::shared::api_utils::api_url;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::a002_product::Product;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub provider: String,
    pub category: String,
    pub price: String,
    pub keywords: String,
    pub created_at: String,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.base.id.as_string(),
            price: p.price_label(),
            keywords: p
                .keywords
                .iter()
                .map(|k| k.keyword.trim().to_uppercase())
                .collect::<Vec<_>>()
                .join(", "),
            code: p.base.code,
            name: p.base.description,
            provider: p.provider,
            category: p.category.unwrap_or_else(|| "-".to_string()),
            created_at: format_datetime(p.base.metadata.created_at),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (show_wizard, set_show_wizard) = signal(false);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_products().await {
                Ok(v) => {
                    let rows: Vec<ProductRow> = v.into_iter().map(Into::into).collect();
                    set_items.set(rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let delete_row = move |row: ProductRow| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Delete product \"{}\"?", row.name))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match delete_product(&row.id).await {
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
                    <h1 class="header__title">"Products"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_wizard.set(true)>
                        {icon("plus")}
                        "New product"
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
                            <th class="table__header-cell">"Provider"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Keywords"</th>
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
                                    <td class="table__cell">{row.provider}</td>
                                    <td class="table__cell">{row.category}</td>
                                    <td class="table__cell">{row.price}</td>
                                    <td class="table__cell">{row.keywords}</td>
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
                <ProductWizardView on_submitted=on_submitted on_cancel=on_cancel />
            </Show>
        </div>
    }
}

async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/product"))
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

async fn delete_product(id: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/product/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
