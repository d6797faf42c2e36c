mod flight_api;
mod registry;
mod reservation_api;
pub mod seed;

pub use registry::BookingRegistry;

use tokio::sync::Mutex;

use crate::{api::API, config::CancelPolicy};

/// Serves the API from one [`BookingRegistry`]. Flights and reservations
/// sit behind the same lock, so each operation sees and leaves both lists
/// consistent.
#[derive(Debug)]
pub struct Engine {
    registry: Mutex<BookingRegistry>,
}

impl Engine {
    pub fn new(registry: BookingRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    #[tracing::instrument(name = "Engine::seeded")]
    pub fn seeded(cancel_policy: CancelPolicy) -> Self {
        let flights = seed::flights();

        tracing::info!(flights = flights.len(), %cancel_policy, "seeding engine");

        Self::new(BookingRegistry::new(flights, cancel_policy))
    }
}

impl API for Engine {}

#[cfg(test)]
mod tests {
    use tokio_test::block_on;

    use super::*;
    use crate::api::{FlightAPI, ReservationAPI};
    use crate::entities::{BookingRequest, FareClass};

    #[test]
    fn seeded_engine_lists_flights() {
        let engine = Engine::seeded(CancelPolicy::default());

        let flights = block_on(engine.list_flights()).unwrap();

        assert_eq!(flights.len(), 3);
        assert_eq!(flights[2].flight_number, "C303");
    }

    #[test]
    fn find_flight_reports_missing_number() {
        let engine = Engine::seeded(CancelPolicy::default());

        assert_eq!(
            block_on(engine.find_flight("c303".into())).unwrap().destination,
            "Lucknow"
        );
        assert!(block_on(engine.find_flight("X1".into()))
            .unwrap_err()
            .is_flight_not_found_error());
    }

    #[test]
    fn book_and_cancel_round_trip() {
        let engine = Engine::seeded(CancelPolicy::RestoreBookedClass);

        let booked = block_on(engine.book(BookingRequest::new("Alice", "A101", "Economy"))).unwrap();
        assert_eq!(booked.origin, "Gorakhpur");
        assert!(booked.summary.contains("Total Amount: $3350.00"));

        let flight = block_on(engine.find_flight("A101".into())).unwrap();
        assert_eq!(flight.available_seats(FareClass::Economy), 4);

        let found = block_on(engine.find_reservation("alice".into())).unwrap();
        assert_eq!(found.reservation.id, booked.reservation.id);

        let cancelled = block_on(engine.cancel("Alice".into())).unwrap();
        assert_eq!(cancelled.reservation.id, booked.reservation.id);

        let flight = block_on(engine.find_flight("A101".into())).unwrap();
        assert_eq!(flight.available_seats(FareClass::Economy), 5);
        assert!(block_on(engine.list_reservations()).unwrap().is_empty());
    }

    #[test]
    fn second_first_class_booking_on_c303_fails() {
        let engine = Engine::seeded(CancelPolicy::default());

        block_on(engine.book(BookingRequest::new("Alice", "C303", "First Class"))).unwrap();
        let err = block_on(engine.book(BookingRequest::new("Bob", "C303", "First Class")))
            .unwrap_err();

        assert!(err.is_no_seats_available_error());
        assert_eq!(block_on(engine.list_reservations()).unwrap().len(), 1);
    }

    #[test]
    fn missing_reservation() {
        let engine = Engine::seeded(CancelPolicy::default());

        assert!(block_on(engine.cancel("Nobody".into()))
            .unwrap_err()
            .is_reservation_not_found_error());
        assert!(block_on(engine.find_reservation("Nobody".into()))
            .unwrap_err()
            .is_reservation_not_found_error());
    }

    #[test]
    fn lists_reservations_in_booking_order() {
        let engine = Engine::seeded(CancelPolicy::default());

        for (name, flight) in [("Ann", "B202"), ("Ben", "A101"), ("Cat", "C303")] {
            block_on(engine.book(BookingRequest::new(name, flight, "Economy"))).unwrap();
        }

        let names: Vec<_> = block_on(engine.list_reservations())
            .unwrap()
            .into_iter()
            .map(|details| details.reservation.passenger_name)
            .collect();

        assert_eq!(names, ["Ann", "Ben", "Cat"]);
    }
}
