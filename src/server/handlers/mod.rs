pub mod flights;
pub mod reservations;
