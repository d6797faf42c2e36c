use async_trait::async_trait;

use super::Engine;

use crate::{
    api::FlightAPI,
    entities::Flight,
    error::{self, Error},
};

#[async_trait]
impl FlightAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_flights(&self) -> Result<Vec<Flight>, Error> {
        let registry = self.registry.lock().await;

        Ok(registry.list_flights().to_vec())
    }

    #[tracing::instrument(skip(self))]
    async fn find_flight(&self, flight_number: String) -> Result<Flight, Error> {
        let registry = self.registry.lock().await;

        registry
            .find_flight(&flight_number)
            .cloned()
            .ok_or_else(|| error::flight_not_found_error(&flight_number))
    }
}
