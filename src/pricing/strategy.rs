//! Caller-selected pricing policies and coarse price classification.
//!
//! Neither is part of `compute_final_price`; callers apply them afterwards.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{in_range, PricingError};

/// Multiplier policy applied on top of a computed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingStrategy {
    #[default]
    Weekday,
    Weekend,
    Loyalty,
    BlackFriday,
    LastMinute,
}

impl PricingStrategy {
    pub fn multiplier(self) -> Decimal {
        match self {
            PricingStrategy::Weekday => Decimal::ONE,
            PricingStrategy::Weekend => dec!(1.10),
            PricingStrategy::Loyalty => dec!(0.90),
            PricingStrategy::BlackFriday => dec!(0.60),
            PricingStrategy::LastMinute => dec!(0.80),
        }
    }

    pub fn apply(self, amount: Decimal) -> Result<Decimal, PricingError> {
        in_range(amount.checked_mul(self.multiplier()), self.as_str())
    }

    /// Absent and unknown names both resolve to `Weekday`.
    pub fn from_optional(name: Option<&str>) -> Self {
        name.map(|n| n.parse().unwrap_or_default()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PricingStrategy::Weekday => "WEEKDAY",
            PricingStrategy::Weekend => "WEEKEND",
            PricingStrategy::Loyalty => "LOYALTY",
            PricingStrategy::BlackFriday => "BLACK_FRIDAY",
            PricingStrategy::LastMinute => "LAST_MINUTE",
        }
    }
}

impl FromStr for PricingStrategy {
    type Err = std::convert::Infallible;

    /// Unknown names fall back to `Weekday`, which leaves the amount unchanged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "WEEKEND" => PricingStrategy::Weekend,
            "LOYALTY" => PricingStrategy::Loyalty,
            "BLACK_FRIDAY" => PricingStrategy::BlackFriday,
            "LAST_MINUTE" => PricingStrategy::LastMinute,
            _ => PricingStrategy::Weekday,
        })
    }
}

impl fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of a final price in hundreds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceBand {
    Low,
    Mid,
    High,
}

impl PriceBand {
    /// `floor(price / 100)`: 0 or less is Low, 1-2 is Mid, 3 and up is High.
    pub fn classify(price: Decimal) -> Self {
        let hundreds = (price / dec!(100)).floor();
        if hundreds <= Decimal::ZERO {
            PriceBand::Low
        } else if hundreds < dec!(3) {
            PriceBand::Mid
        } else {
            PriceBand::High
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriceBand::Low => "LOW",
            PriceBand::Mid => "MID",
            PriceBand::High => "HIGH",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_multipliers() {
        assert_eq!(PricingStrategy::Weekday.apply(dec!(100)), Ok(dec!(100)));
        assert_eq!(PricingStrategy::Weekend.apply(dec!(100)), Ok(dec!(110)));
        assert_eq!(PricingStrategy::Loyalty.apply(dec!(100)), Ok(dec!(90)));
        assert_eq!(PricingStrategy::BlackFriday.apply(dec!(100)), Ok(dec!(60)));
        assert_eq!(PricingStrategy::LastMinute.apply(dec!(100)), Ok(dec!(80)));
    }

    #[test]
    fn test_weekend_on_max_amount_is_out_of_range() {
        assert_eq!(
            PricingStrategy::Weekend.apply(Decimal::MAX),
            Err(PricingError::Overflow { step: "WEEKEND" })
        );
        assert_eq!(PricingStrategy::Weekday.apply(Decimal::MAX), Ok(Decimal::MAX));
    }

    #[test]
    fn test_strategy_parse_falls_back_to_weekday() {
        assert_eq!(
            "BLACK_FRIDAY".parse::<PricingStrategy>().unwrap(),
            PricingStrategy::BlackFriday
        );
        assert_eq!(
            "last_minute".parse::<PricingStrategy>().unwrap(),
            PricingStrategy::Weekday
        );
        assert_eq!("".parse::<PricingStrategy>().unwrap(), PricingStrategy::Weekday);
    }

    #[test]
    fn test_strategy_from_optional() {
        assert_eq!(PricingStrategy::from_optional(None), PricingStrategy::Weekday);
        assert_eq!(
            PricingStrategy::from_optional(Some("WEEKEND")),
            PricingStrategy::Weekend
        );
    }

    #[test]
    fn test_strategy_serde_names() {
        let json = serde_json::to_string(&PricingStrategy::LastMinute).unwrap();
        assert_eq!(json, "\"LAST_MINUTE\"");
        let parsed: PricingStrategy = serde_json::from_str("\"WEEKEND\"").unwrap();
        assert_eq!(parsed, PricingStrategy::Weekend);
    }

    #[test]
    fn test_price_band_boundaries() {
        assert_eq!(PriceBand::classify(dec!(0)), PriceBand::Low);
        assert_eq!(PriceBand::classify(dec!(99.99)), PriceBand::Low);
        assert_eq!(PriceBand::classify(dec!(100)), PriceBand::Mid);
        assert_eq!(PriceBand::classify(dec!(299.99)), PriceBand::Mid);
        assert_eq!(PriceBand::classify(dec!(300)), PriceBand::High);
        assert_eq!(PriceBand::classify(dec!(-50)), PriceBand::Low);
    }
}
