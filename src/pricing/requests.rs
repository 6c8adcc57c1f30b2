//! Request DTOs for pricing calls.
//!
//! Money and rates travel as decimal strings so no precision is lost before
//! the engine sees them.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::PricingError;
use crate::pricing::models::{CustomerProfile, ReservationRequest, RoomType};

/// Request to quote a reservation
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRequest {
    pub reservation: ReservationInput,
    pub customer: CustomerInput,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

/// Reservation part of a quote request
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationInput {
    pub room_type: String,
    pub nights: i32,
    pub base_price: String,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: String,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub airport_pickup: bool,
    #[serde(default)]
    pub adults: i32,
}

fn default_tax_rate() -> String {
    "0".to_string()
}

/// Customer part of a quote request
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerInput {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub loyalty_points: i32,
}

impl ReservationInput {
    /// Parse the string fields and build a validated reservation.
    pub fn to_model(&self) -> Result<ReservationRequest, PricingError> {
        let request = ReservationRequest {
            room_type: RoomType::from(self.room_type.clone()),
            nights: self.nights,
            base_price: parse_decimal("base_price", &self.base_price)?,
            tax_rate: parse_decimal("tax_rate", &self.tax_rate)?,
            coupon_code: self.coupon_code.clone(),
            includes_breakfast: self.breakfast,
            includes_airport_pickup: self.airport_pickup,
            adult_count: self.adults,
        };
        request.validate()?;
        Ok(request)
    }
}

impl From<&CustomerInput> for CustomerProfile {
    fn from(input: &CustomerInput) -> Self {
        CustomerProfile::new(input.country.clone(), input.city.clone(), input.loyalty_points)
    }
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<Decimal, PricingError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|e| PricingError::invalid(field, format!("'{}' is not a decimal: {}", raw, e)))
}
