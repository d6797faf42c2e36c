use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt;

const INVALID_INPUT: i32 = 101;
const INVALID_FOOD_CHARGE: i32 = 102;
const FLIGHT_NOT_FOUND: i32 = 103;
const RESERVATION_NOT_FOUND: i32 = 104;
const NO_SEATS_AVAILABLE: i32 = 105;
const NOT_FOUND: i32 = 106;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn is_internal_error(&self) -> bool {
        (1..=99).contains(&self.code)
    }

    pub fn is_invalid_input_error(&self) -> bool {
        self.code == INVALID_INPUT
    }

    pub fn is_invalid_food_charge_error(&self) -> bool {
        self.code == INVALID_FOOD_CHARGE
    }

    pub fn is_flight_not_found_error(&self) -> bool {
        self.code == FLIGHT_NOT_FOUND
    }

    pub fn is_reservation_not_found_error(&self) -> bool {
        self.code == RESERVATION_NOT_FOUND
    }

    pub fn is_not_found_error(&self) -> bool {
        matches!(
            self.code,
            FLIGHT_NOT_FOUND | RESERVATION_NOT_FOUND | NOT_FOUND
        )
    }

    pub fn is_no_seats_available_error(&self) -> bool {
        self.code == NO_SEATS_AVAILABLE
    }

    pub fn status_code(&self) -> StatusCode {
        match self.code {
            FLIGHT_NOT_FOUND | RESERVATION_NOT_FOUND | NOT_FOUND => StatusCode::NOT_FOUND,
            NO_SEATS_AVAILABLE => StatusCode::CONFLICT,
            100..=i32::MAX => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Process exit code for the command line client.
    pub fn exit_code(&self) -> i32 {
        match self.code {
            FLIGHT_NOT_FOUND | RESERVATION_NOT_FOUND | NOT_FOUND => 2,
            NO_SEATS_AVAILABLE => 3,
            INVALID_INPUT | INVALID_FOOD_CHARGE => 4,
            _ => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        config_error(format!("environment variable error: {}", err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        io_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self.is_internal_error() {
            true => "Internal Server Error",
            false => self.message.as_str(),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn from_code(code: i32, message: String) -> Error {
    Error { code, message }
}

pub fn invalid_input_error(message: String) -> Error {
    Error {
        code: INVALID_INPUT,
        message,
    }
}

pub fn invalid_food_charge_error(input: String) -> Error {
    Error {
        code: INVALID_FOOD_CHARGE,
        message: format!("invalid food charge: {}", input),
    }
}

pub fn flight_not_found_error(flight_number: &str) -> Error {
    Error {
        code: FLIGHT_NOT_FOUND,
        message: format!("Flight not found: {}", flight_number),
    }
}

pub fn reservation_not_found_error(passenger_name: &str) -> Error {
    Error {
        code: RESERVATION_NOT_FOUND,
        message: format!("No reservation found for: {}", passenger_name),
    }
}

pub fn no_seats_available_error(class: &str) -> Error {
    Error {
        code: NO_SEATS_AVAILABLE,
        message: format!("No available seats in {} class.", class),
    }
}

pub fn not_found_error(message: String) -> Error {
    Error {
        code: NOT_FOUND,
        message,
    }
}

pub fn config_error(message: String) -> Error {
    Error { code: 1, message }
}

pub fn io_error(err: std::io::Error) -> Error {
    Error {
        code: 2,
        message: format!("io error: {}", err),
    }
}

pub fn upstream_error(message: String) -> Error {
    Error { code: 3, message }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    Error {
        code: 4,
        message: format!("request error: {}", err),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}
