use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::fare::parse_food_charge;
use crate::error::{self, Error};

/// Everything collected from a passenger before a booking is attempted.
///
/// `class` stays a free string so that unrecognized classes reach the
/// flight and are refused there like a full class would be.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub passenger_name: String,
    pub flight_number: String,
    pub class: String,
    #[serde(default)]
    pub apply_discount: bool,
    #[serde(default)]
    pub food_charge: f64,
}

impl BookingRequest {
    pub fn new(passenger_name: &str, flight_number: &str, class: &str) -> Self {
        Self {
            passenger_name: passenger_name.into(),
            flight_number: flight_number.into(),
            class: class.into(),
            apply_discount: false,
            food_charge: 0.0,
        }
    }

    pub fn with_discount(mut self, apply_discount: bool) -> Self {
        self.apply_discount = apply_discount;
        self
    }

    pub fn with_food_charge(mut self, food_charge: f64) -> Self {
        self.food_charge = food_charge;
        self
    }

    /// Decodes a request body. The food charge may be a number or the text
    /// a user typed; anything that is not a number is an invalid food charge.
    pub fn from_json(mut body: Value) -> Result<Self, Error> {
        if let Some(fields) = body.as_object_mut() {
            let food_charge = match fields.get("food_charge") {
                None | Some(Value::Null) => 0.0,
                Some(Value::Number(number)) => number
                    .as_f64()
                    .ok_or_else(|| error::invalid_food_charge_error(number.to_string()))?,
                Some(Value::String(input)) => parse_food_charge(input)?,
                Some(other) => return Err(error::invalid_food_charge_error(other.to_string())),
            };

            fields.insert("food_charge".into(), json!(food_charge));
        }

        serde_json::from_value(body)
            .map_err(|err| error::invalid_input_error(format!("invalid booking request: {}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default() {
        let request: BookingRequest = serde_json::from_str(
            r#"{"passenger_name":"Alice","flight_number":"A101","class":"Economy"}"#,
        )
        .unwrap();

        assert_eq!(request, BookingRequest::new("Alice", "A101", "Economy"));
    }

    #[test]
    fn decodes_food_charge_from_number_or_text() {
        let numeric = BookingRequest::from_json(json!({
            "passenger_name": "Alice",
            "flight_number": "A101",
            "class": "Economy",
            "food_charge": 50,
        }))
        .unwrap();
        let typed = BookingRequest::from_json(json!({
            "passenger_name": "Alice",
            "flight_number": "A101",
            "class": "Economy",
            "food_charge": " 50 ",
        }))
        .unwrap();

        assert_eq!(numeric.food_charge, 50.0);
        assert_eq!(typed, numeric);
    }

    #[test]
    fn non_numeric_food_charge_is_rejected() {
        for food_charge in [json!("abc"), json!(true), json!([1])] {
            let err = BookingRequest::from_json(json!({
                "passenger_name": "Alice",
                "flight_number": "A101",
                "class": "Economy",
                "food_charge": food_charge,
            }))
            .unwrap_err();

            assert!(err.is_invalid_food_charge_error(), "{err}");
        }
    }

    #[test]
    fn missing_fields_are_invalid_input() {
        let err = BookingRequest::from_json(json!({ "passenger_name": "Alice" })).unwrap_err();

        assert!(err.is_invalid_input_error());

        let err = BookingRequest::from_json(json!("Alice")).unwrap_err();

        assert!(err.is_invalid_input_error());
    }
}
