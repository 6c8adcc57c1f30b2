//! In-memory booking ledger
//!
//! Keeps priced bookings in registration order and aggregates them into a
//! summary. Nothing is persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::PricingError;
use crate::pricing::{compute_final_price, CustomerProfile, PriceBand, ReservationRequest};

/// Room types always present in a summary, even with no bookings.
const SUMMARY_ROOM_TYPES: [&str; 5] = ["SINGLE", "DOUBLE", "SUITE", "DELUXE", "ECONOMY"];

/// A reservation priced at registration time
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: Uuid,
    pub guest_name: String,
    pub created_on: NaiveDate,
    pub request: ReservationRequest,
    pub customer: CustomerProfile,
    #[serde(with = "rust_decimal::serde::str")]
    pub final_price: Decimal,
}

/// Ledger of registered bookings
#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Price and store a booking.
    ///
    /// Invalid reservations are rejected and nothing is stored.
    pub fn register(
        &mut self,
        guest_name: impl Into<String>,
        request: ReservationRequest,
        customer: CustomerProfile,
        created_on: NaiveDate,
    ) -> Result<&Booking, PricingError> {
        let final_price = compute_final_price(&request, &customer)?;
        let booking = Booking {
            id: Uuid::new_v4(),
            guest_name: guest_name.into(),
            created_on,
            request,
            customer,
            final_price,
        };
        info!(
            "Registered booking {} for {} ({}, {} nights): {}",
            booking.id,
            booking.guest_name,
            booking.request.room_type,
            booking.request.nights,
            booking.final_price
        );
        self.bookings.push(booking);
        Ok(&self.bookings[self.bookings.len() - 1])
    }

    pub fn get(&self, id: Uuid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Remove a booking, returning it if it was present
    pub fn remove(&mut self, id: Uuid) -> Option<Booking> {
        let index = self.bookings.iter().position(|b| b.id == id)?;
        debug!("Removed booking {}", id);
        Some(self.bookings.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Drop every booking
    pub fn clear(&mut self) {
        self.bookings.clear();
        info!("Booking ledger cleared");
    }

    /// Aggregate revenue, option counts, room counts and price bands.
    ///
    /// Revenue saturates at `Decimal::MAX`.
    pub fn summary(&self) -> LedgerSummary {
        let mut room_counts: BTreeMap<String, usize> = SUMMARY_ROOM_TYPES
            .iter()
            .map(|name| (name.to_string(), 0))
            .collect();
        let mut bands = BTreeMap::new();
        let mut revenue = Decimal::ZERO;
        let mut breakfasts = 0;
        let mut airport_pickups = 0;

        for booking in &self.bookings {
            revenue = revenue.saturating_add(booking.final_price);
            if booking.request.includes_breakfast {
                breakfasts += 1;
            }
            if booking.request.includes_airport_pickup {
                airport_pickups += 1;
            }
            *room_counts
                .entry(booking.request.room_type.to_string())
                .or_insert(0) += 1;
            *bands.entry(PriceBand::classify(booking.final_price)).or_insert(0) += 1;
        }

        LedgerSummary {
            booking_count: self.bookings.len(),
            revenue,
            breakfasts,
            airport_pickups,
            room_counts,
            bands,
        }
    }
}

/// Aggregate view of a ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub booking_count: usize,
    #[serde(with = "rust_decimal::serde::str")]
    pub revenue: Decimal,
    pub breakfasts: usize,
    pub airport_pickups: usize,
    pub room_counts: BTreeMap<String, usize>,
    pub bands: BTreeMap<PriceBand, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::RoomType;
    use rust_decimal_macros::dec;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn lille() -> CustomerProfile {
        CustomerProfile::new("France", "Lille", 0)
    }

    fn demo_ledger() -> BookingLedger {
        let mut ledger = BookingLedger::new();
        ledger
            .register(
                "Alice",
                ReservationRequest::new(RoomType::Suite, 3, dec!(150))
                    .with_breakfast(2)
                    .with_tax_rate(dec!(0.2))
                    .with_coupon("VIP2025"),
                lille(),
                day(),
            )
            .unwrap();
        ledger
            .register(
                "Bob",
                ReservationRequest::new(RoomType::Double, 1, dec!(80))
                    .with_airport_pickup()
                    .with_tax_rate(dec!(0.2)),
                lille(),
                day(),
            )
            .unwrap();
        ledger
    }

    #[test]
    fn test_register_prices_booking() {
        let mut ledger = BookingLedger::new();
        let booking = ledger
            .register(
                "Bob",
                ReservationRequest::new(RoomType::Double, 1, dec!(80))
                    .with_airport_pickup()
                    .with_tax_rate(dec!(0.2)),
                lille(),
                day(),
            )
            .unwrap();
        assert_eq!(booking.final_price, dec!(133.23));
        assert_eq!(booking.guest_name, "Bob");

        let id = booking.id;
        assert_eq!(ledger.get(id).map(|b| b.created_on), Some(day()));
    }

    #[test]
    fn test_register_rejects_invalid_request() {
        let mut ledger = BookingLedger::new();
        let result = ledger.register(
            "Mallory",
            ReservationRequest::new(RoomType::Single, 1, dec!(-10)),
            lille(),
            day(),
        );
        assert!(result.is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_iter_keeps_registration_order() {
        let ledger = demo_ledger();
        let names: Vec<&str> = ledger.iter().map(|b| b.guest_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_summary_aggregates() {
        let summary = demo_ledger().summary();
        assert_eq!(summary.booking_count, 2);
        assert_eq!(summary.revenue, dec!(435.36)); // 302.13 + 133.23
        assert_eq!(summary.breakfasts, 1);
        assert_eq!(summary.airport_pickups, 1);
        assert_eq!(summary.room_counts["SUITE"], 1);
        assert_eq!(summary.room_counts["DOUBLE"], 1);
        assert_eq!(summary.room_counts["SINGLE"], 0);
        assert_eq!(summary.bands.get(&PriceBand::High), Some(&1));
        assert_eq!(summary.bands.get(&PriceBand::Mid), Some(&1));
        assert_eq!(summary.bands.get(&PriceBand::Low), None);
    }

    #[test]
    fn test_summary_of_empty_ledger_seeds_room_types() {
        let summary = BookingLedger::new().summary();
        assert_eq!(summary.booking_count, 0);
        assert_eq!(summary.revenue, Decimal::ZERO);
        assert_eq!(summary.room_counts.len(), 5);
        assert!(summary.room_counts.values().all(|count| *count == 0));
    }

    #[test]
    fn test_summary_counts_unlisted_room_types() {
        let mut ledger = BookingLedger::new();
        ledger
            .register(
                "Dana",
                ReservationRequest::new(RoomType::Executive, 1, dec!(100)),
                lille(),
                day(),
            )
            .unwrap();
        let summary = ledger.summary();
        assert_eq!(summary.room_counts["EXECUTIVE"], 1);
        assert_eq!(summary.room_counts.len(), 6);
    }

    #[test]
    fn test_summary_keys_unlisted_room_by_its_own_name() {
        let mut ledger = BookingLedger::new();
        ledger
            .register(
                "Gina",
                ReservationRequest::new("LOFT".parse().unwrap(), 2, dec!(100)),
                lille(),
                day(),
            )
            .unwrap();
        let summary = ledger.summary();
        assert_eq!(summary.room_counts["LOFT"], 1);
        assert_eq!(summary.room_counts["SUITE"], 0);
        assert_eq!(summary.revenue, dec!(101.23));
    }

    #[test]
    fn test_summary_revenue_saturates() {
        let mut ledger = BookingLedger::new();
        for guest in ["Erin", "Frank"] {
            ledger
                .register(
                    guest,
                    ReservationRequest::new(RoomType::Single, 1, Decimal::MAX),
                    CustomerProfile::new("Spain", "Madrid", 0),
                    day(),
                )
                .unwrap();
        }
        let summary = ledger.summary();
        assert_eq!(summary.booking_count, 2);
        assert_eq!(summary.revenue, Decimal::MAX);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut ledger = demo_ledger();
        let first = ledger.iter().next().map(|b| b.id).unwrap();

        let removed = ledger.remove(first).unwrap();
        assert_eq!(removed.guest_name, "Alice");
        assert!(ledger.get(first).is_none());
        assert!(ledger.remove(first).is_none());
        assert_eq!(ledger.len(), 1);

        ledger.clear();
        assert!(ledger.is_empty());
    }
}
