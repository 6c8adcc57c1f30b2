//! Response DTOs for pricing calls.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::pricing::calculators::PriceBreakdown;
use crate::pricing::strategy::{PriceBand, PricingStrategy};

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

/// Response for a reservation quote
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub breakdown: PriceBreakdown,
    pub strategy: PricingStrategy,
    pub final_price: MoneyResponse,
    pub band: PriceBand,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
