//! Field rules shared by the wizard flows
//!
//! ```rust,ignore
//! const NAME: FieldRule = FieldRule::new("Campaign name", ValidationRules::required());
//! NAME.check_str(&fields.name)?;
//! ```

mod validation;

pub use validation::{FieldRule, ValidationRules};
