//! Pricing service functions.
//!
//! Glue between serialized quote requests and the pure calculators.

use crate::error::PricingError;

use super::calculators::{quote, round_money};
use super::models::CustomerProfile;
use super::requests::QuoteRequest;
use super::responses::{MoneyResponse, PricingErrorResponse, QuoteResponse};
use super::strategy::{PriceBand, PricingStrategy};

/// Quote a serialized reservation request.
///
/// Converts the request into validated models, prices it, applies the
/// requested strategy (weekday when absent or unknown) and rounds the final
/// amount to cents.
///
/// # Arguments
/// * `request` - Reservation, customer, optional strategy name and currency
///
/// # Returns
/// `QuoteResponse` with the unrounded breakdown and the rounded final price
pub fn quote_reservation(request: &QuoteRequest) -> Result<QuoteResponse, PricingError> {
    let reservation = request.reservation.to_model()?;
    let customer = CustomerProfile::from(&request.customer);

    let breakdown = quote(&reservation, &customer)?;

    let strategy = PricingStrategy::from_optional(request.strategy.as_deref());
    let final_amount = round_money(strategy.apply(breakdown.total)?, 2);

    Ok(QuoteResponse {
        breakdown,
        strategy,
        final_price: MoneyResponse {
            amount: final_amount,
            currency: request.currency.clone(),
        },
        band: PriceBand::classify(final_amount),
    })
}

impl From<&PricingError> for PricingErrorResponse {
    fn from(err: &PricingError) -> Self {
        match err {
            PricingError::InvalidInput { field, reason } => PricingErrorResponse {
                error_type: "invalid_input".to_string(),
                message: err.to_string(),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },
            PricingError::Overflow { step } => PricingErrorResponse {
                error_type: "overflow".to_string(),
                message: err.to_string(),
                details: Some(serde_json::json!({ "step": step })),
            },
        }
    }
}
