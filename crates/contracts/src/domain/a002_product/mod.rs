pub mod aggregate;
pub mod wizard;

pub use aggregate::{ActivationKeyword, ChargePeriod, Product, ProductFields, ProductId};
pub use wizard::{KeywordFieldUpdate, ProductFieldUpdate, ProductWizard};
