use std::sync::Arc;

use async_trait::async_trait;

use crate::entities::{BookingRequest, Flight, ReservationDetails};
use crate::error::Error;

#[async_trait]
pub trait FlightAPI {
    async fn list_flights(&self) -> Result<Vec<Flight>, Error>;
    async fn find_flight(&self, flight_number: String) -> Result<Flight, Error>;
}

#[async_trait]
pub trait ReservationAPI {
    async fn book(&self, request: BookingRequest) -> Result<ReservationDetails, Error>;
    async fn cancel(&self, passenger_name: String) -> Result<ReservationDetails, Error>;
    async fn find_reservation(&self, passenger_name: String) -> Result<ReservationDetails, Error>;
    async fn list_reservations(&self) -> Result<Vec<ReservationDetails>, Error>;
}

pub trait API: FlightAPI + ReservationAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
