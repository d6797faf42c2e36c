mod booking_request;
mod fare;
mod fare_class;
mod flight;
mod reservation;

pub use booking_request::BookingRequest;
pub use fare::{
    parse_food_charge, validate_food_charge, FareBreakdown, FareType, DISCOUNT_RATE, SERVICE_FEE,
    TAX_RATE,
};
pub use fare_class::{ClassTable, FareClass, UnknownFareClass};
pub use flight::Flight;
pub use reservation::{Reservation, ReservationDetails};
