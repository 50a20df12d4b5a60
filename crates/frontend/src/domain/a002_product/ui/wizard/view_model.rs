use super::model;
use crate::shared::wizard::WizardHost;
use contracts::domain::a002_product::{KeywordFieldUpdate, ProductFieldUpdate, ProductWizard};
use leptos::prelude::*;

/// Валюты в выпадающем списке
pub const CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

/// ViewModel мастера продукта
#[derive(Clone, Copy)]
pub struct ProductWizardViewModel {
    pub host: WizardHost<ProductWizard>,
}

impl ProductWizardViewModel {
    pub fn new() -> Self {
        Self {
            host: WizardHost::open(),
        }
    }

    pub fn set_field(&self, update: ProductFieldUpdate) {
        self.host.update_field(update);
    }

    /// Цена из поля ввода; пустая строка или не число сбрасывают цену
    pub fn set_price(&self, raw: &str) {
        let price = raw.trim().replace(',', ".").parse::<f64>().ok();
        self.set_field(ProductFieldUpdate::Price(price));
    }

    pub fn edit_keyword(&self, update: KeywordFieldUpdate) {
        self.host.update_draft(update);
    }

    pub fn submit(&self, on_submitted: Callback<()>) {
        self.host.submit(model::submit, on_submitted);
    }
}

impl Default for ProductWizardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
