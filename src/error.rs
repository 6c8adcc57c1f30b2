//! Error handling for the application

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Amount out of range while applying {step}")]
    Overflow { step: &'static str },
}

impl PricingError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Turn a `checked_*` result into a pricing result.
pub(crate) fn in_range<T>(value: Option<T>, step: &'static str) -> std::result::Result<T, PricingError> {
    value.ok_or(PricingError::Overflow { step })
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
