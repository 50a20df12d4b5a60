//! Validation rules for wizard fields

use crate::shared::wizard::ValidationReason;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    /// Lengths are counted in characters, not bytes.
    pub fn validate_string(&self, value: &str, label: &'static str) -> Result<(), ValidationReason> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(ValidationReason::MissingField { label });
            }
            return Ok(());
        }

        let length = trimmed.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(ValidationReason::InvalidValue {
                    label,
                    message: format!("must contain at least {} characters", min),
                });
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationReason::InvalidValue {
                    label,
                    message: format!("must not exceed {} characters", max),
                });
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, label: &'static str) -> Result<(), ValidationReason> {
        if !value.is_finite() {
            return Err(ValidationReason::InvalidValue {
                label,
                message: "must be a number".to_string(),
            });
        }

        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationReason::InvalidValue {
                    label,
                    message: format!("must be at least {}", min),
                });
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(ValidationReason::InvalidValue {
                    label,
                    message: format!("must be at most {}", max),
                });
            }
        }

        Ok(())
    }
}

/// Declared field: UI label plus its rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub label: &'static str,
    pub rules: ValidationRules,
}

impl FieldRule {
    pub const fn new(label: &'static str, rules: ValidationRules) -> Self {
        Self { label, rules }
    }

    pub fn check_str(&self, value: &str) -> Result<(), ValidationReason> {
        self.rules.validate_string(value, self.label)
    }

    pub fn check_number(&self, value: Option<f64>) -> Result<(), ValidationReason> {
        match value {
            Some(v) => self.rules.validate_number(v, self.label),
            None if self.rules.required => Err(ValidationReason::MissingField { label: self.label }),
            None => Ok(()),
        }
    }

    /// Required value of any type (date, time, selection)
    pub fn require<T>(&self, value: Option<T>) -> Result<T, ValidationReason> {
        value.ok_or(ValidationReason::MissingField { label: self.label })
    }
}
