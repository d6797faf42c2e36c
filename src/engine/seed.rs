use crate::entities::{ClassTable, Flight};

/// The fixed flight schedule every engine starts with.
pub fn flights() -> Vec<Flight> {
    vec![
        Flight::new(
            "A101",
            "Gorakhpur",
            "Banglore",
            "2024-10-20",
            "08:00 AM",
            "5h 30m",
            ClassTable::new(5, 3, 2, 1),
            ClassTable::new(3000.0, 4500.0, 6000.0, 8000.0),
        ),
        Flight::new(
            "B202",
            "Gorakhpur",
            "Hyderabad",
            "2024-10-21",
            "09:30 AM",
            "3h 15m",
            ClassTable::new(10, 5, 3, 2),
            ClassTable::new(2000.0, 3500.0, 5000.0, 7000.0),
        ),
        Flight::new(
            "C303",
            "Gorakhpur",
            "Lucknow",
            "2024-10-22",
            "11:00 AM",
            "6h 0m",
            ClassTable::new(8, 4, 2, 1),
            ClassTable::new(4000.0, 5500.0, 7000.0, 9000.0),
        ),
    ]
}
