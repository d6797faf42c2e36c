use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

pub const DISCOUNT_RATE: f64 = 0.10;
// GST
pub const TAX_RATE: f64 = 0.05;
pub const SERVICE_FEE: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FareType {
    Standard,
    Discounted,
}

impl fmt::Display for FareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("Standard"),
            Self::Discounted => f.write_str("Discounted"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FareBreakdown {
    pub fare_type: FareType,
    pub base_fare: f64,
    pub discounted_fare: f64,
    pub tax: f64,
    pub service_fee: f64,
    pub food_charge: f64,
    pub total: f64,
}

impl FareBreakdown {
    /// `food_charge` is expected to have passed [`validate_food_charge`].
    pub fn compute(base_fare: f64, apply_discount: bool, food_charge: f64) -> Self {
        let (fare_type, discount) = match apply_discount {
            true => (FareType::Discounted, DISCOUNT_RATE * base_fare),
            false => (FareType::Standard, 0.0),
        };

        let discounted_fare = base_fare - discount;
        let tax = discounted_fare * TAX_RATE;
        let total = discounted_fare + tax + SERVICE_FEE + food_charge;

        Self {
            fare_type,
            base_fare,
            discounted_fare,
            tax,
            service_fee: SERVICE_FEE,
            food_charge,
            total,
        }
    }
}

pub fn validate_food_charge(food_charge: f64) -> Result<f64, Error> {
    if !food_charge.is_finite() || food_charge < 0.0 {
        return Err(error::invalid_food_charge_error(food_charge.to_string()));
    }

    Ok(food_charge)
}

/// Parses a food charge as typed by a user. Blank input means no food.
pub fn parse_food_charge(input: &str) -> Result<f64, Error> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(0.0);
    }

    let food_charge: f64 = input
        .parse()
        .map_err(|_| error::invalid_food_charge_error(input.into()))?;

    validate_food_charge(food_charge).map_err(|_| error::invalid_food_charge_error(input.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn standard_fare() {
        let fare = FareBreakdown::compute(3000.0, false, 0.0);

        assert_eq!(fare.fare_type, FareType::Standard);
        assert_close(fare.discounted_fare, 3000.0);
        assert_close(fare.tax, 150.0);
        assert_close(fare.service_fee, 200.0);
        assert_close(fare.total, 3350.0);
    }

    #[test]
    fn discounted_fare() {
        let fare = FareBreakdown::compute(3000.0, true, 250.0);

        assert_eq!(fare.fare_type, FareType::Discounted);
        assert_close(fare.base_fare, 3000.0);
        assert_close(fare.discounted_fare, 2700.0);
        assert_close(fare.tax, 135.0);
        assert_close(fare.total, 2700.0 + 135.0 + 200.0 + 250.0);
    }

    #[test]
    fn total_is_sum_of_parts() {
        for base in [2000.0, 4500.0, 7000.0, 9000.0] {
            for apply_discount in [false, true] {
                let fare = FareBreakdown::compute(base, apply_discount, 99.5);
                let discount = if apply_discount { 0.1 * base } else { 0.0 };

                assert_close(fare.discounted_fare, base - discount);
                assert_close(fare.tax, 0.05 * (base - discount));
                assert_close(
                    fare.total,
                    fare.discounted_fare + fare.tax + fare.service_fee + fare.food_charge,
                );
            }
        }
    }

    #[test]
    fn parses_food_charges() {
        assert_eq!(parse_food_charge("0").unwrap(), 0.0);
        assert_eq!(parse_food_charge(" 150.5 ").unwrap(), 150.5);
        assert_eq!(parse_food_charge("").unwrap(), 0.0);
    }

    #[test]
    fn rejects_malformed_food_charges() {
        for input in ["abc", "12abc", "-5", "NaN", "inf"] {
            let err = parse_food_charge(input).unwrap_err();
            assert!(err.is_invalid_food_charge_error(), "{input} was accepted");
        }
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert!(validate_food_charge(f64::NAN).is_err());
        assert!(validate_food_charge(f64::INFINITY).is_err());
        assert!(validate_food_charge(-0.5).is_err());
        assert_eq!(validate_food_charge(12.0).unwrap(), 12.0);
    }
}
