use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

pub const ADDR_VAR: &str = "SEAT_BOOKING_ADDR";
pub const CANCEL_POLICY_VAR: &str = "SEAT_BOOKING_CANCEL_POLICY";
pub const URL_VAR: &str = "SEAT_BOOKING_URL";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_URL: &str = "http://127.0.0.1:3000";

/// What a cancellation does to the seat the reservation held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelPolicy {
    /// Give the seat back to the class that was booked.
    #[default]
    RestoreBookedClass,
    /// Hand the flight number to the seat restore in place of a class.
    /// No class ever matches, so the seat is never returned.
    FlightNumberAsClass,
}

impl CancelPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RestoreBookedClass => "restore_booked_class",
            Self::FlightNumberAsClass => "flight_number_as_class",
        }
    }
}

impl fmt::Display for CancelPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CancelPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "restore_booked_class" => Ok(Self::RestoreBookedClass),
            "flight_number_as_class" => Ok(Self::FlightNumberAsClass),
            other => Err(error::config_error(format!(
                "unknown cancel policy: {}",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub addr: SocketAddr,
    pub cancel_policy: CancelPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            cancel_policy: CancelPolicy::default(),
        }
    }
}

impl Config {
    /// Reads the server configuration from the environment, after loading
    /// a `.env` file if one is present.
    #[tracing::instrument]
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_vars(
            env::var(ADDR_VAR).ok().as_deref(),
            env::var(CANCEL_POLICY_VAR).ok().as_deref(),
        )
    }

    pub fn from_vars(addr: Option<&str>, cancel_policy: Option<&str>) -> Result<Self, Error> {
        let addr = addr
            .unwrap_or(DEFAULT_ADDR)
            .parse::<SocketAddr>()
            .map_err(|err| error::config_error(format!("invalid {}: {}", ADDR_VAR, err)))?;

        let cancel_policy = match cancel_policy {
            Some(value) => value.parse()?,
            None => CancelPolicy::default(),
        };

        Ok(Self {
            addr,
            cancel_policy,
        })
    }
}

pub fn client_url_from_env() -> String {
    dotenv::dotenv().ok();

    env::var(URL_VAR).unwrap_or_else(|_| DEFAULT_URL.into())
}
