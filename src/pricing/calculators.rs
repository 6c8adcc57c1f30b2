//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no logging, no shared state.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{in_range, PricingError};
use crate::pricing::models::{Coupon, CustomerProfile, ReservationRequest, RoomType};

const SUITE_NIGHTLY_SURCHARGE: Decimal = dec!(40);
const DELUXE_NIGHTLY_SURCHARGE: Decimal = dec!(25);
const EXECUTIVE_NIGHTLY_SURCHARGE: Decimal = dec!(15);

const BREAKFAST_PER_ADULT: Decimal = dec!(12.5);
const AIRPORT_PICKUP: Decimal = dec!(30);

const VIP_COUPON_FACTOR: Decimal = dec!(0.85);
const LOYAL_COUPON_FACTOR: Decimal = dec!(0.90);

/// Customers need strictly more points than this for the loyalty discount.
const LOYALTY_POINTS_THRESHOLD: i32 = 50;
const LOYALTY_FACTOR: Decimal = dec!(0.95);

const BONUS_COUNTRY: &str = "France";
const BONUS_CITY: &str = "Lille";
const LOCATION_BONUS: Decimal = dec!(1.23);

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use hotel_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Every adjustment applied while pricing a reservation, in application order.
///
/// Discounts are reported as positive amounts that were subtracted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub room_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub options_surcharge: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub coupon_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub loyalty_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub location_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/// Price a reservation for a customer.
///
/// Adjustments are applied in a fixed order: room surcharge, option
/// surcharges, coupon, loyalty discount, tax, location bonus. The result is
/// not rounded.
///
/// # Errors
/// `PricingError::InvalidInput` when the request carries a negative base
/// price, night count, adult count or tax rate. `PricingError::Overflow`
/// when an intermediate amount exceeds what a `Decimal` can hold.
pub fn compute_final_price(
    request: &ReservationRequest,
    customer: &CustomerProfile,
) -> Result<Decimal, PricingError> {
    quote(request, customer).map(|breakdown| breakdown.total)
}

/// Price a reservation and report each intermediate adjustment.
///
/// `quote(..).total` is always identical to `compute_final_price(..)`.
pub fn quote(
    request: &ReservationRequest,
    customer: &CustomerProfile,
) -> Result<PriceBreakdown, PricingError> {
    request.validate()?;

    let room_surcharge = room_surcharge(&request.room_type, request.nights)?;
    let options_surcharge = options_surcharge(request)?;
    let subtotal = in_range(
        request
            .base_price
            .checked_add(room_surcharge)
            .and_then(|amount| amount.checked_add(options_surcharge)),
        "surcharges",
    )?;

    // Discount factors are at most one, so the subtractions below cannot overflow.
    let after_coupon = in_range(subtotal.checked_mul(coupon_factor(request.coupon())), "coupon")?;
    let coupon_discount = subtotal - after_coupon;

    let after_loyalty = if customer.loyalty_points > LOYALTY_POINTS_THRESHOLD {
        in_range(after_coupon.checked_mul(LOYALTY_FACTOR), "loyalty discount")?
    } else {
        after_coupon
    };
    let loyalty_discount = after_coupon - after_loyalty;

    let tax = in_range(after_loyalty.checked_mul(request.tax_rate), "tax")?;
    let taxed = in_range(after_loyalty.checked_add(tax), "tax")?;

    let location_bonus = if customer.lives_in(BONUS_COUNTRY, BONUS_CITY) {
        LOCATION_BONUS
    } else {
        Decimal::ZERO
    };
    let total = in_range(taxed.checked_add(location_bonus), "location bonus")?;

    Ok(PriceBreakdown {
        base_price: request.base_price,
        room_surcharge,
        options_surcharge,
        subtotal,
        coupon_discount,
        loyalty_discount,
        tax,
        location_bonus,
        total,
    })
}

/// Per-night surcharge for the room category. Only one category applies.
pub fn room_surcharge(room_type: &RoomType, nights: i32) -> Result<Decimal, PricingError> {
    let nightly = match room_type {
        RoomType::Suite => SUITE_NIGHTLY_SURCHARGE,
        RoomType::Deluxe => DELUXE_NIGHTLY_SURCHARGE,
        RoomType::Executive => EXECUTIVE_NIGHTLY_SURCHARGE,
        _ => return Ok(Decimal::ZERO),
    };
    in_range(nightly.checked_mul(Decimal::from(nights)), "room surcharge")
}

fn options_surcharge(request: &ReservationRequest) -> Result<Decimal, PricingError> {
    let mut surcharge = Decimal::ZERO;
    if request.includes_breakfast {
        // Breakfast is billed for at least one adult.
        let adults = Decimal::from(request.adult_count.max(1));
        surcharge = in_range(BREAKFAST_PER_ADULT.checked_mul(adults), "breakfast")?;
    }
    if request.includes_airport_pickup {
        surcharge = in_range(surcharge.checked_add(AIRPORT_PICKUP), "airport pickup")?;
    }
    Ok(surcharge)
}

fn coupon_factor(coupon: Coupon) -> Decimal {
    match coupon {
        Coupon::Vip => VIP_COUPON_FACTOR,
        Coupon::Loyal => LOYAL_COUPON_FACTOR,
        Coupon::None => Decimal::ONE,
    }
}
