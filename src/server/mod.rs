mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{self, Error};
use crate::server::handlers::{flights, reservations};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/flights", get(flights::list))
        .route("/flights/:flight_number", get(flights::find))
        .route(
            "/reservations",
            post(reservations::create).get(reservations::list),
        )
        .route(
            "/reservations/:passenger_name",
            get(reservations::find).delete(reservations::cancel),
        )
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    let server = axum::Server::try_bind(&addr)
        .map_err(|err| error::config_error(format!("cannot bind {}: {}", addr, err)))?;

    tracing::info!("listening on {}", addr);

    server
        .serve(app.into_make_service())
        .await
        .map_err(|err| error::upstream_error(format!("server error: {}", err)))
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use serde_json::{json, Value};
    use tokio_test::block_on;

    use super::*;
    use crate::config::CancelPolicy;
    use crate::engine::Engine;

    fn spawn_server() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let api = Arc::new(Engine::seeded(CancelPolicy::default())) as DynAPI;

        let server = axum::Server::from_tcp(listener)
            .unwrap()
            .serve(router(api).into_make_service());
        tokio::spawn(server);

        addr
    }

    #[test]
    fn non_numeric_food_charge_is_bad_request() {
        block_on(async {
            let addr = spawn_server();

            let res = reqwest::Client::new()
                .post(format!("http://{}/reservations", addr))
                .json(&json!({
                    "passenger_name": "Alice",
                    "flight_number": "A101",
                    "class": "Economy",
                    "food_charge": "abc",
                }))
                .send()
                .await
                .unwrap();

            assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

            let body: Value = res.json().await.unwrap();
            assert_eq!(body["code"], 102);
        });
    }

    #[test]
    fn malformed_body_is_bad_request() {
        block_on(async {
            let addr = spawn_server();

            let res = reqwest::Client::new()
                .post(format!("http://{}/reservations", addr))
                .header("content-type", "application/json")
                .body("{not json")
                .send()
                .await
                .unwrap();

            assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);

            let body: Value = res.json().await.unwrap();
            assert_eq!(body["code"], 101);
        });
    }
}
