use anyhow::Context;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use hotel_pricing::config::Config;
use hotel_pricing::ledger::{Booking, BookingLedger, LedgerSummary};
use hotel_pricing::pricing::responses::{MoneyResponse, PricingErrorResponse};
use hotel_pricing::pricing::{round_money, CustomerProfile, ReservationRequest, RoomType};
use hotel_pricing::PricingError;

#[derive(Serialize)]
struct DemoOutput<'a> {
    bookings: Vec<DemoQuote<'a>>,
    rejected: Vec<RejectedBooking>,
    summary: LedgerSummary,
}

#[derive(Serialize)]
struct DemoQuote<'a> {
    guest: &'a str,
    room_type: String,
    price: MoneyResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    with_strategy: Option<MoneyResponse>,
}

#[derive(Serialize)]
struct RejectedBooking {
    guest: String,
    error: PricingErrorResponse,
}

/// Demo booking as entered at the front desk, with prices in `f64`.
struct DemoBooking {
    guest: &'static str,
    room_type: RoomType,
    nights: i32,
    base_price: f64,
    tax_rate: f64,
    coupon: &'static str,
    breakfast_adults: Option<i32>,
    airport_pickup: bool,
}

impl DemoBooking {
    fn to_request(&self) -> Result<ReservationRequest, PricingError> {
        let mut request = ReservationRequest::from_f64(
            self.room_type.clone(),
            self.nights,
            self.base_price,
            self.tax_rate,
        )?
        .with_coupon(self.coupon);
        if let Some(adults) = self.breakfast_adults {
            request = request.with_breakfast(adults);
        }
        if self.airport_pickup {
            request = request.with_airport_pickup();
        }
        Ok(request)
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    init_logging(&config.log_level);

    info!(
        "Pricing demo bookings in {} with {} strategy",
        config.currency, config.strategy
    );

    let today = Local::now().date_naive();
    let lille = CustomerProfile::new("France", "Lille", 0);

    let demo = [
        DemoBooking {
            guest: "Alice",
            room_type: RoomType::Suite,
            nights: 3,
            base_price: 150.0,
            tax_rate: 0.2,
            coupon: "VIP2025",
            breakfast_adults: Some(2),
            airport_pickup: false,
        },
        DemoBooking {
            guest: "Bob",
            room_type: RoomType::Double,
            nights: 1,
            base_price: 80.0,
            tax_rate: 0.2,
            coupon: "",
            breakfast_adults: None,
            airport_pickup: true,
        },
        DemoBooking {
            guest: "Charlie",
            room_type: RoomType::Deluxe,
            nights: 2,
            base_price: 120.0,
            tax_rate: 0.2,
            coupon: "LOYAL10",
            breakfast_adults: Some(1),
            airport_pickup: true,
        },
    ];

    let mut ledger = BookingLedger::new();
    let mut rejected = Vec::new();
    for booking in &demo {
        if let Err(e) = register(&mut ledger, booking, &lille, today) {
            warn!("Rejected booking for {}: {}", booking.guest, e);
            rejected.push(RejectedBooking {
                guest: booking.guest.to_string(),
                error: PricingErrorResponse::from(&e),
            });
        }
    }

    let bookings = ledger
        .iter()
        .map(|booking| quote_for(booking, &config))
        .collect();
    let output = DemoOutput {
        bookings,
        rejected,
        summary: ledger.summary(),
    };

    info!(
        "Priced {} bookings ({} rejected), revenue {}",
        output.summary.booking_count,
        output.rejected.len(),
        round_money(output.summary.revenue, 2)
    );

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn register(
    ledger: &mut BookingLedger,
    booking: &DemoBooking,
    customer: &CustomerProfile,
    created_on: NaiveDate,
) -> Result<(), PricingError> {
    let request = booking.to_request()?;
    ledger.register(booking.guest, request, customer.clone(), created_on)?;
    Ok(())
}

fn quote_for<'a>(booking: &'a Booking, config: &Config) -> DemoQuote<'a> {
    let with_strategy = match config.strategy.apply(booking.final_price) {
        Ok(amount) => Some(MoneyResponse {
            amount: round_money(amount, 2),
            currency: config.currency.clone(),
        }),
        Err(e) => {
            warn!("Cannot apply {} to {}: {}", config.strategy, booking.guest_name, e);
            None
        }
    };

    DemoQuote {
        guest: &booking.guest_name,
        room_type: booking.request.room_type.to_string(),
        price: MoneyResponse {
            amount: round_money(booking.final_price, 2),
            currency: config.currency.clone(),
        },
        with_strategy,
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
