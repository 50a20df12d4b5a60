//! Campaign Wizard UI Module
//!
//! MVVM pattern implementation:
//! - model.rs: API functions (submit, products)
//! - view_model.rs: ViewModel over the wizard engine
//! - view.rs: Leptos components (pure UI)

mod model;
mod view;
mod view_model;

pub use view::CampaignWizardView;
pub use view_model::CampaignWizardViewModel;
