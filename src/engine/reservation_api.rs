use async_trait::async_trait;

use super::Engine;

use crate::{
    api::ReservationAPI,
    entities::{BookingRequest, ReservationDetails},
    error::{self, Error},
};

#[async_trait]
impl ReservationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn book(&self, request: BookingRequest) -> Result<ReservationDetails, Error> {
        let mut registry = self.registry.lock().await;

        let reservation = registry.book(&request)?;

        registry.details(reservation)
    }

    #[tracing::instrument(skip(self))]
    async fn cancel(&self, passenger_name: String) -> Result<ReservationDetails, Error> {
        let mut registry = self.registry.lock().await;

        let reservation = registry.cancel(&passenger_name)?;

        registry.details(reservation)
    }

    #[tracing::instrument(skip(self))]
    async fn find_reservation(&self, passenger_name: String) -> Result<ReservationDetails, Error> {
        let registry = self.registry.lock().await;

        let reservation = registry
            .find_reservation(&passenger_name)
            .cloned()
            .ok_or_else(|| error::reservation_not_found_error(&passenger_name))?;

        registry.details(reservation)
    }

    #[tracing::instrument(skip(self))]
    async fn list_reservations(&self) -> Result<Vec<ReservationDetails>, Error> {
        let registry = self.registry.lock().await;

        registry
            .list_reservations()
            .iter()
            .cloned()
            .map(|reservation| registry.details(reservation))
            .collect()
    }
}
