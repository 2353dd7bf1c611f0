//! Shared helpers for HTTP integration tests backed by a temporary SQLite
//! database.

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use clinic_backend::Trace;
use clinic_backend::inbound::http::configure;
use clinic_backend::inbound::http::health::HealthState;
use clinic_backend::test_support::TestDatabase;
use serde_json::Value;

/// Build the full application wired to `database`.
pub async fn init_app(
    database: &TestDatabase,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(database.http_state()))
            .app_data(web::Data::new(HealthState::new()))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

/// Send `req` and return the status with the JSON body, if any.
pub async fn send<S>(app: &S, req: test::TestRequest) -> (StatusCode, Option<Value>)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    (status, parse_json_body(&bytes))
}

fn parse_json_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(bytes).expect("json body"))
    }
}
