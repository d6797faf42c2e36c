use axum::extract::{rejection::JsonRejection, Extension, Json, Path};
use serde_json::Value;

use crate::api::DynAPI;
use crate::entities::{BookingRequest, ReservationDetails};
use crate::error::{self, Error};

pub async fn create(
    Extension(api): Extension<DynAPI>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReservationDetails>, Error> {
    let Json(body) =
        body.map_err(|_| error::invalid_input_error("expected a JSON request body".into()))?;

    let details = api.book(BookingRequest::from_json(body)?).await?;

    Ok(details.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<Vec<ReservationDetails>>, Error> {
    let reservations = api.list_reservations().await?;

    Ok(reservations.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(passenger_name): Path<String>,
) -> Result<Json<ReservationDetails>, Error> {
    let details = api.find_reservation(passenger_name).await?;

    Ok(details.into())
}

pub async fn cancel(
    Extension(api): Extension<DynAPI>,
    Path(passenger_name): Path<String>,
) -> Result<Json<ReservationDetails>, Error> {
    let details = api.cancel(passenger_name).await?;

    Ok(details.into())
}
