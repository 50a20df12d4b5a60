//! Product Wizard UI Module
//!
//! - model.rs: API functions
//! - view_model.rs: ViewModel over the wizard engine
//! - view.rs: Leptos components

mod model;
mod view;
mod view_model;

pub use view::ProductWizardView;
pub use view_model::ProductWizardViewModel;
