use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{FareBreakdown, FareClass, Flight};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub passenger_name: String,
    pub flight_id: Uuid,
    pub flight_number: String,
    pub class: FareClass,
    pub fare: FareBreakdown,
    pub booked_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(passenger_name: &str, flight: &Flight, class: FareClass, fare: FareBreakdown) -> Self {
        Self {
            id: Uuid::new_v4(),
            passenger_name: passenger_name.into(),
            flight_id: flight.id,
            flight_number: flight.flight_number.clone(),
            class,
            fare,
            booked_at: Utc::now(),
        }
    }

    pub fn matches_passenger(&self, passenger_name: &str) -> bool {
        self.passenger_name.to_lowercase() == passenger_name.to_lowercase()
    }

    pub fn summary(&self, flight: &Flight) -> String {
        let fare = &self.fare;

        [
            "--- Reservation Details ---".to_string(),
            format!("Passenger Name: {}", self.passenger_name),
            format!("Flight Number: {}", self.flight_number),
            format!("Class: {}", self.class),
            format!("Fare Type: {}", fare.fare_type),
            format!("Base Fare: ${:.2}", fare.base_fare),
            format!("Discounted Fare: ${:.2}", fare.discounted_fare),
            format!("Taxes (5% GST): ${:.2}", fare.tax),
            format!("Additional Charges (Service Fee): ${:.2}", fare.service_fee),
            format!("Food Charges: ${:.2}", fare.food_charge),
            format!("Total Amount: ${:.2}", fare.total),
            format!("Origin: {}", flight.origin),
            format!("Destination: {}", flight.destination),
            format!("Date: {}", flight.date),
            format!("Time: {}", flight.time),
        ]
        .join("\n")
    }
}

/// A reservation together with the flight fields it is displayed with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub summary: String,
}

impl ReservationDetails {
    pub fn new(reservation: Reservation, flight: &Flight) -> Self {
        let summary = reservation.summary(flight);

        Self {
            reservation,
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            date: flight.date.clone(),
            time: flight.time.clone(),
            summary,
        }
    }
}
