use axum::extract::{Extension, Json, Path};

use crate::api::DynAPI;
use crate::entities::Flight;
use crate::error::Error;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Flight>>, Error> {
    let flights = api.list_flights().await?;

    Ok(flights.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(flight_number): Path<String>,
) -> Result<Json<Flight>, Error> {
    let flight = api.find_flight(flight_number).await?;

    Ok(flight.into())
}
