use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{ClassTable, FareClass};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: Uuid,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub base_fares: ClassTable<f64>,
    pub capacity: ClassTable<u32>,
    pub seats: ClassTable<u32>,
}

impl Flight {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_number: &str,
        origin: &str,
        destination: &str,
        date: &str,
        time: &str,
        duration: &str,
        capacity: ClassTable<u32>,
        base_fares: ClassTable<f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
            time: time.into(),
            duration: duration.into(),
            base_fares,
            capacity,
            seats: capacity,
        }
    }

    pub fn matches_number(&self, flight_number: &str) -> bool {
        self.flight_number.eq_ignore_ascii_case(flight_number)
    }

    pub fn base_fare(&self, class: FareClass) -> f64 {
        *self.base_fares.get(class)
    }

    pub fn available_seats(&self, class: FareClass) -> u32 {
        *self.seats.get(class)
    }

    pub fn capacity(&self, class: FareClass) -> u32 {
        *self.capacity.get(class)
    }

    pub fn has_seat(&self, class: FareClass) -> bool {
        self.available_seats(class) > 0
    }

    pub fn book_seat(&mut self, class: FareClass) -> bool {
        let seats = self.seats.get_mut(class);

        if *seats == 0 {
            return false;
        }

        *seats -= 1;
        true
    }

    /// Returns one seat to `class`. The count never exceeds the class's
    /// capacity; returns whether a seat was actually restored.
    pub fn cancel_seat(&mut self, class: FareClass) -> bool {
        let capacity = self.capacity(class);
        let seats = self.seats.get_mut(class);

        if *seats >= capacity {
            return false;
        }

        *seats += 1;
        true
    }

    /// Unrecognized classes are priced as Economy.
    pub fn base_fare_for(&self, class: &str) -> f64 {
        match class.parse::<FareClass>() {
            Ok(class) => self.base_fare(class),
            Err(_) => self.base_fare(FareClass::Economy),
        }
    }

    pub fn available_seats_for(&self, class: &str) -> u32 {
        class
            .parse::<FareClass>()
            .map(|class| self.available_seats(class))
            .unwrap_or(0)
    }

    pub fn book_seat_for(&mut self, class: &str) -> bool {
        match class.parse::<FareClass>() {
            Ok(class) => self.book_seat(class),
            Err(_) => false,
        }
    }

    pub fn cancel_seat_for(&mut self, class: &str) -> bool {
        match class.parse::<FareClass>() {
            Ok(class) => self.cancel_seat(class),
            Err(_) => false,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Flight Number: {}, Origin: {}, Destination: {}, Date: {}, Time: {}, Duration: {}, \
             Available Seats - Economy: {}, Premium Economy: {}, Business: {}, First Class: {}",
            self.flight_number,
            self.origin,
            self.destination,
            self.date,
            self.time,
            self.duration,
            self.seats.economy,
            self.seats.premium_economy,
            self.seats.business,
            self.seats.first_class,
        )
    }
}
