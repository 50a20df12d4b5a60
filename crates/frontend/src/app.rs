use crate::domain::a001_campaign::ui::list::CampaignList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::shared::icons::icon;
use contracts::domain::a001_campaign::Campaign;
use contracts::domain::a002_product::Product;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

/// Раздел консоли, открытый в основной области.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Campaigns,
    Products,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Campaigns, Section::Products];

    pub fn title(self) -> &'static str {
        match self {
            Section::Campaigns => Campaign::list_name(),
            Section::Products => Product::list_name(),
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Section::Campaigns => "campaigns",
            Section::Products => "products",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (section, set_section) = signal(Section::default());

    view! {
        <div class="app">
            <nav class="app__nav">
                <div class="app__brand">"MSCP"</div>
                {Section::ALL.into_iter().map(|item| view! {
                    <button
                        class="app__nav-item"
                        class:app__nav-item--active=move || section.get() == item
                        on:click=move |_| set_section.set(item)
                    >
                        {icon(item.icon_name())}
                        <span>{item.title()}</span>
                    </button>
                }).collect_view()}
            </nav>
            <main class="app__content">
                {move || match section.get() {
                    Section::Campaigns => view! { <CampaignList /> }.into_any(),
                    Section::Products => view! { <ProductList /> }.into_any(),
                }}
            </main>
        </div>
    }
}
