//! Reservation pricing engine.
//!
//! `calculators` holds the pure pricing math; `services` wraps it for callers
//! working with serialized requests.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;
pub mod strategy;

// Re-export commonly used items
pub use calculators::{compute_final_price, quote, round_money, PriceBreakdown};
pub use models::{Coupon, CustomerProfile, ReservationRequest, RoomType, UnlistedRoom};
pub use services::quote_reservation;
pub use strategy::{PriceBand, PricingStrategy};
