//! Hotel reservation pricing.
//!
//! The pricing engine lives in [`pricing`]; [`ledger`] and [`config`] are
//! caller-side collaborators used by the demo binary.

pub mod config;
pub mod error;
pub mod ledger;
pub mod pricing;

pub use error::{AppError, PricingError, Result};
