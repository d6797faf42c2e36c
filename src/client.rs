use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{
    entities::{BookingRequest, Flight, ReservationDetails},
    error::{self, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ErrorBody {
    code: i32,
    error: String,
}

/// HTTP client for a running booking server.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_flights(&self) -> Result<Vec<Flight>, Error> {
        send(self.http.get(self.url("/flights"))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_flight(&self, flight_number: &str) -> Result<Flight, Error> {
        send(self.http.get(self.resource_url("flights", flight_number)?)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn book(&self, request: &BookingRequest) -> Result<ReservationDetails, Error> {
        send(self.http.post(self.url("/reservations")).json(request)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_reservations(&self) -> Result<Vec<ReservationDetails>, Error> {
        send(self.http.get(self.url("/reservations"))).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn find_reservation(&self, passenger_name: &str) -> Result<ReservationDetails, Error> {
        send(self.http.get(self.resource_url("reservations", passenger_name)?)).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn cancel(&self, passenger_name: &str) -> Result<ReservationDetails, Error> {
        send(self.http.delete(self.resource_url("reservations", passenger_name)?)).await
    }

    // passenger names are free text and need escaping
    fn resource_url(&self, collection: &str, key: &str) -> Result<reqwest::Url, Error> {
        let mut url = reqwest::Url::parse(&self.url("/"))
            .map_err(|err| error::config_error(format!("invalid server url: {}", err)))?;

        url.path_segments_mut()
            .map_err(|_| error::config_error("invalid server url".into()))?
            .pop_if_empty()
            .push(collection)
            .push(key);

        Ok(url)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Error> {
    let res = request.send().await?;
    let status = res.status();

    if status.is_success() {
        return Ok(res.json().await?);
    }

    match res.json::<ErrorBody>().await {
        Ok(body) => Err(error::from_code(body.code, body.error)),
        Err(_) => Err(status_error(status)),
    }
}

fn status_error(status: StatusCode) -> Error {
    match status.as_u16() {
        404 => error::not_found_error(format!("not found: {}", status)),
        400..=499 => error::invalid_input_error(format!("request rejected: {}", status)),
        _ => error::upstream_error(format!("server error: {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_passenger_names() {
        let client = Client::new("http://127.0.0.1:3000/");

        let url = client
            .resource_url("reservations", "Mary Ann/Smith")
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:3000/reservations/Mary%20Ann%2FSmith"
        );
    }

    #[test]
    fn maps_bare_statuses() {
        assert!(status_error(StatusCode::UNPROCESSABLE_ENTITY).is_invalid_input_error());
        assert!(status_error(StatusCode::NOT_FOUND).is_not_found_error());
        assert_eq!(status_error(StatusCode::NOT_FOUND).exit_code(), 2);
        assert!(status_error(StatusCode::BAD_GATEWAY).is_internal_error());
    }

    #[test]
    fn error_body_matches_server_shape() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"code":105,"error":"No available seats in Business class."}"#)
                .unwrap();

        assert!(error::from_code(body.code, body.error).is_no_seats_available_error());
    }
}
