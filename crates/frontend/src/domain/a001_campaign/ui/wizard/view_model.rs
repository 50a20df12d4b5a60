use super::model;
use crate::shared::wizard::WizardHost;
use contracts::domain::a001_campaign::{
    CampaignFieldUpdate, CampaignWizard, ScheduleUpdate, SendFieldUpdate,
};
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

/// Короткие номера, доступные для рассылок
pub const SHORT_CODES: [&str; 3] = ["12345", "777", "5555"];

/// ViewModel мастера кампании
#[derive(Clone, Copy)]
pub struct CampaignWizardViewModel {
    pub host: WizardHost<CampaignWizard>,
    pub products: RwSignal<Vec<Product>>,
}

impl CampaignWizardViewModel {
    pub fn new() -> Self {
        Self {
            host: WizardHost::open(),
            products: RwSignal::new(Vec::new()),
        }
    }

    pub fn load_products(&self) {
        let products = self.products;
        let error = self.host.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_products().await {
                Ok(v) => products.set(v),
                Err(e) => error.set(Some(format!("Failed to load products: {}", e))),
            }
        });
    }

    pub fn set_field(&self, update: CampaignFieldUpdate) {
        self.host.update_field(update);
    }

    pub fn edit_send(&self, update: SendFieldUpdate) {
        self.host.update_draft(update);
    }

    pub fn edit_schedule(&self, index: usize, update: ScheduleUpdate) {
        self.host
            .update_draft(SendFieldUpdate::Schedule { index, update });
    }

    /// Название продукта по ID (для карточек рассылок)
    pub fn product_name(&self, id: &str) -> String {
        self.products.with(|products| {
            products
                .iter()
                .find(|p| p.base.id.0.to_string() == id)
                .map(|p| p.base.description.clone())
                .unwrap_or_else(|| id.to_string())
        })
    }

    pub fn submit(&self, on_submitted: Callback<()>) {
        self.host.submit(model::submit, on_submitted);
    }
}

impl Default for CampaignWizardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
