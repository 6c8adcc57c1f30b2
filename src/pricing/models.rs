//! Value types consumed by the pricing engine.
//!
//! Requests and customer profiles are built once per calculation and never
//! mutated by the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// Room category of a reservation.
///
/// Names are matched exactly (`"SUITE"`, not `"suite"`); anything else is kept
/// verbatim as `Other` and earns no surcharge. `Other` can only be obtained by
/// parsing, so it never carries one of the listed names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
    Executive,
    Economy,
    Other(UnlistedRoom),
}

/// Name of a room category outside the priced list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnlistedRoom(String);

impl UnlistedRoom {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RoomType {
    pub fn as_str(&self) -> &str {
        match self {
            RoomType::Single => "SINGLE",
            RoomType::Double => "DOUBLE",
            RoomType::Suite => "SUITE",
            RoomType::Deluxe => "DELUXE",
            RoomType::Executive => "EXECUTIVE",
            RoomType::Economy => "ECONOMY",
            RoomType::Other(name) => name.as_str(),
        }
    }
}

impl FromStr for RoomType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "SINGLE" => RoomType::Single,
            "DOUBLE" => RoomType::Double,
            "SUITE" => RoomType::Suite,
            "DELUXE" => RoomType::Deluxe,
            "EXECUTIVE" => RoomType::Executive,
            "ECONOMY" => RoomType::Economy,
            other => RoomType::Other(UnlistedRoom(other.to_string())),
        })
    }
}

impl From<String> for RoomType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(room_type) => room_type,
            Err(never) => match never {},
        }
    }
}

impl From<RoomType> for String {
    fn from(value: RoomType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discount tier derived from a coupon code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coupon {
    Vip,
    Loyal,
    None,
}

impl Coupon {
    /// Classify a raw coupon code. The prefix check is case-sensitive and
    /// "VIP" wins over "LOYAL". Blank codes count as no coupon.
    pub fn classify(code: Option<&str>) -> Self {
        match code {
            Some(code) if code.trim().is_empty() => Coupon::None,
            Some(code) if code.starts_with("VIP") => Coupon::Vip,
            Some(code) if code.starts_with("LOYAL") => Coupon::Loyal,
            _ => Coupon::None,
        }
    }
}

/// A reservation to be priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub room_type: RoomType,
    pub nights: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax_rate: Decimal,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub includes_breakfast: bool,
    #[serde(default)]
    pub includes_airport_pickup: bool,
    #[serde(default)]
    pub adult_count: i32,
}

impl ReservationRequest {
    /// Start a request with no tax, no coupon, no options and no adults.
    pub fn new(room_type: RoomType, nights: i32, base_price: Decimal) -> Self {
        Self {
            room_type,
            nights,
            base_price,
            tax_rate: Decimal::ZERO,
            coupon_code: None,
            includes_breakfast: false,
            includes_airport_pickup: false,
            adult_count: 0,
        }
    }

    /// Start a request from floating point amounts, as produced by callers
    /// that keep prices in `f64`. NaN and infinities are rejected.
    pub fn from_f64(
        room_type: RoomType,
        nights: i32,
        base_price: f64,
        tax_rate: f64,
    ) -> Result<Self, PricingError> {
        let base_price = decimal_from_f64("base_price", base_price)?;
        let tax_rate = decimal_from_f64("tax_rate", tax_rate)?;
        Ok(Self::new(room_type, nights, base_price).with_tax_rate(tax_rate))
    }

    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_coupon(mut self, code: impl Into<String>) -> Self {
        self.coupon_code = Some(code.into());
        self
    }

    pub fn with_breakfast(mut self, adult_count: i32) -> Self {
        self.includes_breakfast = true;
        self.adult_count = adult_count;
        self
    }

    pub fn with_airport_pickup(mut self) -> Self {
        self.includes_airport_pickup = true;
        self
    }

    pub fn coupon(&self) -> Coupon {
        Coupon::classify(self.coupon_code.as_deref())
    }

    /// Reject values the engine refuses to price.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.base_price < Decimal::ZERO {
            return Err(PricingError::invalid("base_price", "must not be negative"));
        }
        if self.nights < 0 {
            return Err(PricingError::invalid("nights", "must not be negative"));
        }
        if self.adult_count < 0 {
            return Err(PricingError::invalid("adult_count", "must not be negative"));
        }
        if self.tax_rate < Decimal::ZERO {
            return Err(PricingError::invalid("tax_rate", "must not be negative"));
        }
        Ok(())
    }
}

/// The customer a reservation is priced for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub loyalty_points: i32,
}

impl CustomerProfile {
    pub fn new(country: impl Into<String>, city: impl Into<String>, loyalty_points: i32) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            loyalty_points,
        }
    }

    /// Case-insensitive match on both country and city.
    pub fn lives_in(&self, country: &str, city: &str) -> bool {
        eq_ignore_case(&self.country, country) && eq_ignore_case(&self.city, city)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Convert a floating point amount into a `Decimal`, rejecting NaN and infinities.
pub fn decimal_from_f64(field: &'static str, value: f64) -> Result<Decimal, PricingError> {
    if !value.is_finite() {
        return Err(PricingError::invalid(field, "must be a finite number"));
    }
    Decimal::try_from(value).map_err(|e| PricingError::invalid(field, e.to_string()))
}
