use uuid::Uuid;

use crate::{
    config::CancelPolicy,
    entities::{
        validate_food_charge, BookingRequest, FareBreakdown, FareClass, Flight, Reservation,
        ReservationDetails,
    },
    error::{self, Error},
};

/// Authoritative in-memory store of flights and reservations.
///
/// All seat changes go through [`Flight`]; callers needing shared access
/// must wrap the whole registry in a single lock.
#[derive(Debug)]
pub struct BookingRegistry {
    flights: Vec<Flight>,
    reservations: Vec<Reservation>,
    cancel_policy: CancelPolicy,
}

impl BookingRegistry {
    pub fn new(flights: Vec<Flight>, cancel_policy: CancelPolicy) -> Self {
        Self {
            flights,
            reservations: Vec::new(),
            cancel_policy,
        }
    }

    pub fn list_flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn list_reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn find_flight(&self, flight_number: &str) -> Option<&Flight> {
        self.flights
            .iter()
            .find(|flight| flight.matches_number(flight_number))
    }

    pub fn flight(&self, id: Uuid) -> Option<&Flight> {
        self.flights.iter().find(|flight| flight.id == id)
    }

    pub fn find_reservation(&self, passenger_name: &str) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.matches_passenger(passenger_name))
    }

    /// Books one seat. Every check runs before the seat is taken, so a
    /// rejected booking leaves the registry untouched.
    #[tracing::instrument(skip(self))]
    pub fn book(&mut self, request: &BookingRequest) -> Result<Reservation, Error> {
        // cancel and find address reservations by name
        if request.passenger_name.trim().is_empty() {
            return Err(error::invalid_input_error(
                "passenger name must not be blank".into(),
            ));
        }

        let food_charge = validate_food_charge(request.food_charge)?;

        let index = self
            .flights
            .iter()
            .position(|flight| flight.matches_number(&request.flight_number))
            .ok_or_else(|| error::flight_not_found_error(&request.flight_number))?;

        let flight = &mut self.flights[index];

        let class = match request.class.parse::<FareClass>() {
            Ok(class) if flight.has_seat(class) => class,
            _ => {
                tracing::warn!(
                    flight = %flight.flight_number,
                    class = %request.class,
                    "no seats available"
                );
                return Err(error::no_seats_available_error(&request.class));
            }
        };

        let fare =
            FareBreakdown::compute(flight.base_fare(class), request.apply_discount, food_charge);

        if !flight.book_seat(class) {
            return Err(error::no_seats_available_error(&request.class));
        }

        let reservation = Reservation::new(&request.passenger_name, flight, class, fare);
        self.reservations.push(reservation.clone());

        tracing::info!(
            passenger = %reservation.passenger_name,
            flight = %reservation.flight_number,
            class = %reservation.class,
            total = reservation.fare.total,
            "reservation booked"
        );

        Ok(reservation)
    }

    /// Cancels the first reservation held under `passenger_name`.
    #[tracing::instrument(skip(self))]
    pub fn cancel(&mut self, passenger_name: &str) -> Result<Reservation, Error> {
        let index = self
            .reservations
            .iter()
            .position(|reservation| reservation.matches_passenger(passenger_name))
            .ok_or_else(|| error::reservation_not_found_error(passenger_name))?;

        let reservation = self.reservations.remove(index);

        match self
            .flights
            .iter_mut()
            .find(|flight| flight.id == reservation.flight_id)
        {
            Some(flight) => {
                let restored = match self.cancel_policy {
                    CancelPolicy::RestoreBookedClass => flight.cancel_seat(reservation.class),
                    CancelPolicy::FlightNumberAsClass => {
                        let flight_number = flight.flight_number.clone();
                        flight.cancel_seat_for(&flight_number)
                    }
                };

                tracing::info!(
                    passenger = %reservation.passenger_name,
                    flight = %reservation.flight_number,
                    restored,
                    "reservation cancelled"
                );
            }
            None => tracing::warn!(
                flight = %reservation.flight_number,
                "cancelled reservation has no flight"
            ),
        }

        Ok(reservation)
    }

    pub fn details(&self, reservation: Reservation) -> Result<ReservationDetails, Error> {
        let flight = self
            .flight(reservation.flight_id)
            .ok_or_else(error::unexpected_error)?;

        Ok(ReservationDetails::new(reservation, flight))
    }
}
