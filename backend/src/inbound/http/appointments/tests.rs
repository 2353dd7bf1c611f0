//! Handler tests for the appointment endpoints using mocked ports.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::Error;
use crate::domain::ports::{MockAppointmentCommand, MockAppointmentQuery, MockDirectoryQuery};
use crate::inbound::http::validation::{json_config, path_config, query_config};

fn stored(id: i64, phone: &str) -> Appointment {
    Appointment {
        id: AppointmentId::new(id),
        clinic_id: ClinicId::new(1),
        doctor_id: DoctorId::new(2),
        date: "2025-02-15".to_owned(),
        time: "10:00".to_owned(),
        user_name: "John Doe".to_owned(),
        user_phone: phone.to_owned(),
    }
}

fn valid_body() -> Value {
    json!({
        "clinic_id": 1,
        "doctor_id": 2,
        "date": "2025-02-15",
        "time": "10:00",
        "user_name": "John Doe",
        "user_phone": "+1234567890"
    })
}

async fn send(
    command: MockAppointmentCommand,
    query: MockAppointmentQuery,
    req: test::TestRequest,
) -> (StatusCode, Option<Value>) {
    let state = web::Data::new(HttpState::new(
        Arc::new(MockDirectoryQuery::new()),
        Arc::new(command),
        Arc::new(query),
    ));
    let app = test::init_service(
        App::new()
            .app_data(state)
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config())
            .service(make_appointment)
            .service(make_appointment_legacy)
            .service(list_appointments)
            .service(cancel_appointment),
    )
    .await;
    let res = test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let bytes = test::read_body(res).await;
    let body = (!bytes.is_empty())
        .then(|| serde_json::from_slice(&bytes).expect("JSON body"));
    (status, body)
}

#[rstest]
#[case("/make-appointment")]
#[case("/make-appointmet")]
#[actix_web::test]
async fn both_booking_routes_create_appointments(#[case] uri: &str) {
    let mut command = MockAppointmentCommand::new();
    command
        .expect_book()
        .withf(|draft| draft.clinic_id() == ClinicId::new(1) && draft.user_name() == "John Doe")
        .times(1)
        .returning(|_| Ok(stored(9, "+1234567890")));

    let (status, body) = send(
        command,
        MockAppointmentQuery::new(),
        test::TestRequest::post().uri(uri).set_json(valid_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let body = body.expect("body");
    assert_eq!(body["id"], 9);
    assert_eq!(body["doctor_id"], 2);
    assert_eq!(body["user_phone"], "+1234567890");
}

#[rstest]
#[case::missing_field(json!({"clinic_id": 1, "doctor_id": 2, "date": "2025-02-15"}))]
#[case::wrong_type(json!({
    "clinic_id": "one",
    "doctor_id": 2,
    "date": "2025-02-15",
    "time": "10:00",
    "user_name": "John Doe",
    "user_phone": "+1234567890"
}))]
#[actix_web::test]
async fn invalid_bodies_are_rejected_before_booking(#[case] payload: Value) {
    let mut command = MockAppointmentCommand::new();
    command.expect_book().never();

    let (status, body) = send(
        command,
        MockAppointmentQuery::new(),
        test::TestRequest::post()
            .uri("/make-appointment")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.expect("body")["code"], "validation_failed");
}

#[rstest]
#[case::padded(" John Doe ", "+1234567890 ")]
#[case::empty("", "")]
#[actix_web::test]
async fn text_fields_reach_the_booking_unchanged(
    #[case] name: &'static str,
    #[case] phone: &'static str,
) {
    let mut command = MockAppointmentCommand::new();
    command
        .expect_book()
        .withf(move |draft| draft.user_name() == name && draft.user_phone() == phone)
        .times(1)
        .returning(move |_| Ok(stored(3, phone)));
    let mut body = valid_body();
    body["user_name"] = json!(name);
    body["user_phone"] = json!(phone);

    let (status, body) = send(
        command,
        MockAppointmentQuery::new(),
        test::TestRequest::post().uri("/make-appointment").set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.expect("body")["user_phone"], phone);
}

#[rstest]
#[case(Error::not_found("Clinic not found"), StatusCode::NOT_FOUND)]
#[case(Error::not_found("Doctor not found"), StatusCode::NOT_FOUND)]
#[case(
    Error::invalid_request("Doctor does not belong to the specified clinic"),
    StatusCode::BAD_REQUEST
)]
#[actix_web::test]
async fn booking_failures_keep_their_message(#[case] failure: Error, #[case] status: StatusCode) {
    let message = failure.message().to_owned();
    let mut command = MockAppointmentCommand::new();
    command
        .expect_book()
        .returning(move |_| Err(failure.clone()));

    let (actual, body) = send(
        command,
        MockAppointmentQuery::new(),
        test::TestRequest::post()
            .uri("/make-appointment")
            .set_json(valid_body()),
    )
    .await;

    assert_eq!(actual, status);
    assert_eq!(body.expect("body")["message"], message);
}

#[rstest]
#[case("/appointments?user_phone=%2B1234567890", Some("+1234567890"))]
#[case("/appointments?user_phone=", None)]
#[case("/appointments", None)]
#[actix_web::test]
async fn listing_forwards_the_phone_filter(
    #[case] uri: &str,
    #[case] expected: Option<&'static str>,
) {
    let mut query = MockAppointmentQuery::new();
    query
        .expect_list_appointments()
        .withf(move |search| search.user_phone() == expected)
        .times(1)
        .returning(|_| Ok(vec![stored(2, "+1234567890"), stored(1, "+1234567890")]));

    let (status, body) = send(
        MockAppointmentCommand::new(),
        query,
        test::TestRequest::get().uri(uri),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body = body.expect("body");
    assert_eq!(body[0]["id"], 2);
    assert_eq!(body[1]["id"], 1);
}

#[rstest]
#[actix_web::test]
async fn cancelling_returns_no_content() {
    let mut command = MockAppointmentCommand::new();
    command
        .expect_cancel()
        .withf(|id| *id == AppointmentId::new(7))
        .returning(|_| Ok(()));

    let (status, body) = send(
        command,
        MockAppointmentQuery::new(),
        test::TestRequest::delete().uri("/appointments/7"),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());
}

#[rstest]
#[case("/appointments/999", StatusCode::NOT_FOUND)]
#[case("/appointments/abc", StatusCode::UNPROCESSABLE_ENTITY)]
#[actix_web::test]
async fn cancelling_reports_bad_ids(#[case] uri: &str, #[case] status: StatusCode) {
    let mut command = MockAppointmentCommand::new();
    command
        .expect_cancel()
        .returning(|_| Err(Error::not_found("Appointment not found")));

    let (actual, body) = send(
        command,
        MockAppointmentQuery::new(),
        test::TestRequest::delete().uri(uri),
    )
    .await;

    assert_eq!(actual, status);
    assert!(body.expect("body")["code"].is_string());
}
