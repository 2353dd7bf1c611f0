//! End-to-end tests for booking, listing and cancelling appointments.

#[path = "support/app.rs"]
mod app_support;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use app_support::{init_app, send};
use clinic_backend::test_support::TestDatabase;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
async fn database() -> TestDatabase {
    TestDatabase::with_small_directory()
        .await
        .expect("seeded test database")
}

fn booking(clinic_id: i64, doctor_id: i64, phone: &str) -> Value {
    json!({
        "clinic_id": clinic_id,
        "doctor_id": doctor_id,
        "date": "2025-02-15",
        "time": "10:00",
        "user_name": "John Doe",
        "user_phone": phone
    })
}

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect()
}

#[rstest]
#[case("/make-appointment")]
#[case("/make-appointmet")]
#[actix_web::test]
async fn booking_persists_the_appointment(#[future] database: TestDatabase, #[case] uri: &str) {
    let database = database.await;
    let app = init_app(&database).await;

    let (status, created) = send(
        &app,
        TestRequest::post()
            .uri(uri)
            .set_json(booking(1, 2, "+1234567890")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created = created.expect("body");
    assert_eq!(created["id"], 1);
    assert_eq!(created["clinic_id"], 1);
    assert_eq!(created["doctor_id"], 2);
    assert_eq!(created["date"], "2025-02-15");
    assert_eq!(created["time"], "10:00");

    let (_, listed) = send(&app, TestRequest::get().uri("/appointments")).await;
    assert_eq!(listed.expect("body"), Value::Array(vec![created]));
}

#[rstest]
#[case(9, 1, StatusCode::NOT_FOUND, "Clinic not found")]
#[case(1, 99, StatusCode::NOT_FOUND, "Doctor not found")]
#[case(9, 99, StatusCode::NOT_FOUND, "Clinic not found")]
#[case(1, 4, StatusCode::BAD_REQUEST, "Doctor does not belong to the specified clinic")]
#[case(4_294_967_296, 1, StatusCode::NOT_FOUND, "Clinic not found")]
#[case(1, 4_294_967_296, StatusCode::NOT_FOUND, "Doctor not found")]
#[case(9, 4_294_967_296, StatusCode::NOT_FOUND, "Clinic not found")]
#[actix_web::test]
async fn rejected_bookings_leave_no_rows(
    #[future] database: TestDatabase,
    #[case] clinic_id: i64,
    #[case] doctor_id: i64,
    #[case] status: StatusCode,
    #[case] message: &str,
) {
    let database = database.await;
    let app = init_app(&database).await;

    let (actual, body) = send(
        &app,
        TestRequest::post()
            .uri("/make-appointment")
            .set_json(booking(clinic_id, doctor_id, "+1234567890")),
    )
    .await;

    assert_eq!(actual, status);
    assert_eq!(body.expect("body")["message"], message);
    let (_, listed) = send(&app, TestRequest::get().uri("/appointments")).await;
    assert_eq!(listed.expect("body"), Value::Array(Vec::new()));
}

#[rstest]
#[actix_web::test]
async fn mismatch_details_name_the_doctors_clinic(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;

    let (_, body) = send(
        &app,
        TestRequest::post()
            .uri("/make-appointment")
            .set_json(booking(1, 5, "+1234567890")),
    )
    .await;

    let details = &body.expect("body")["details"];
    assert_eq!(details["clinic_id"], 1);
    assert_eq!(details["doctor_id"], 5);
    assert_eq!(details["doctor_clinic_id"], 2);
}

#[rstest]
#[case::string_id(json!({
    "clinic_id": "1",
    "doctor_id": 2,
    "date": "2025-02-15",
    "time": "10:00",
    "user_name": "John Doe",
    "user_phone": "+1234567890"
}))]
#[case::missing_phone(json!({
    "clinic_id": 1,
    "doctor_id": 2,
    "date": "2025-02-15",
    "time": "10:00",
    "user_name": "John Doe"
}))]
#[case::id_wider_than_sqlite(json!({
    "clinic_id": u64::MAX,
    "doctor_id": 2,
    "date": "2025-02-15",
    "time": "10:00",
    "user_name": "John Doe",
    "user_phone": "+1234567890"
}))]
#[actix_web::test]
async fn malformed_bookings_are_unprocessable(
    #[future] database: TestDatabase,
    #[case] payload: Value,
) {
    let database = database.await;
    let app = init_app(&database).await;

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/make-appointment")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.expect("body")["code"], "validation_failed");
}

#[rstest]
#[actix_web::test]
async fn padded_values_are_stored_as_sent(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;
    let mut payload = booking(1, 2, "+1 ");
    payload["user_name"] = json!(" John ");
    payload["time"] = json!(" 10:00");

    let (status, created) = send(
        &app,
        TestRequest::post()
            .uri("/make-appointment")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created = created.expect("body");
    assert_eq!(created["user_name"], " John ");
    assert_eq!(created["user_phone"], "+1 ");
    assert_eq!(created["time"], " 10:00");

    let (_, padded) = send(
        &app,
        TestRequest::get().uri("/appointments?user_phone=%2B1%20"),
    )
    .await;
    assert_eq!(padded.expect("body"), Value::Array(vec![created]));

    let (_, trimmed) = send(&app, TestRequest::get().uri("/appointments?user_phone=%2B1")).await;
    assert!(ids(&trimmed.expect("body")).is_empty());
}

#[rstest]
#[actix_web::test]
async fn empty_text_fields_are_accepted(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;
    let payload = json!({
        "clinic_id": 2,
        "doctor_id": 4,
        "date": "",
        "time": "",
        "user_name": "",
        "user_phone": ""
    });

    let (status, created) = send(
        &app,
        TestRequest::post()
            .uri("/make-appointment")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let created = created.expect("body");
    assert_eq!(created["date"], "");
    assert_eq!(created["user_name"], "");
    assert_eq!(created["user_phone"], "");
}

#[rstest]
#[actix_web::test]
async fn double_booking_is_permitted(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;

    for _ in 0..2 {
        let (status, _) = send(
            &app,
            TestRequest::post()
                .uri("/make-appointment")
                .set_json(booking(1, 2, "+1234567890")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, listed) = send(&app, TestRequest::get().uri("/appointments")).await;
    assert_eq!(ids(&listed.expect("body")), [2, 1]);
}

#[rstest]
#[actix_web::test]
async fn listing_is_newest_first_and_filters_by_phone(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;
    for (clinic, doctor, phone) in [
        (1, 1, "+1111111111"),
        (2, 4, "+2222222222"),
        (1, 3, "+1111111111"),
    ] {
        let (status, _) = send(
            &app,
            TestRequest::post()
                .uri("/make-appointment")
                .set_json(booking(clinic, doctor, phone)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, all) = send(&app, TestRequest::get().uri("/appointments")).await;
    assert_eq!(ids(&all.expect("body")), [3, 2, 1]);

    let (_, mine) = send(
        &app,
        TestRequest::get().uri("/appointments?user_phone=%2B1111111111"),
    )
    .await;
    assert_eq!(ids(&mine.expect("body")), [3, 1]);

    let (_, nobody) = send(
        &app,
        TestRequest::get().uri("/appointments?user_phone=%2B9999999999"),
    )
    .await;
    assert!(ids(&nobody.expect("body")).is_empty());
}

#[rstest]
#[actix_web::test]
async fn cancelling_removes_the_appointment_once(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;
    let (_, created) = send(
        &app,
        TestRequest::post()
            .uri("/make-appointment")
            .set_json(booking(2, 6, "+1234567890")),
    )
    .await;
    let id = created.expect("body")["id"].as_i64().expect("id");
    let uri = format!("/appointments/{id}");

    let (status, body) = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());

    let (_, listed) = send(&app, TestRequest::get().uri("/appointments")).await;
    assert!(ids(&listed.expect("body")).is_empty());

    let (again, body) = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(again, StatusCode::NOT_FOUND);
    assert_eq!(body.expect("body")["message"], "Appointment not found");
}

#[rstest]
#[case("/appointments/4294967296")]
#[case("/appointments/-4294967296")]
#[actix_web::test]
async fn cancelling_an_id_beyond_32_bits_is_not_found(
    #[future] database: TestDatabase,
    #[case] uri: &str,
) {
    let database = database.await;
    let app = init_app(&database).await;

    let (status, body) = send(&app, TestRequest::delete().uri(uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.expect("body")["message"], "Appointment not found");
}

#[rstest]
#[actix_web::test]
async fn error_bodies_echo_the_trace_header(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;
    let trace_id = "5f0c6f8e-3d2a-4a7b-9b1e-2f4d6c8a0b13";

    let (status, body) = send(
        &app,
        TestRequest::delete()
            .uri("/appointments/404")
            .insert_header(("trace-id", trace_id)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.expect("body")["trace_id"], trace_id);
}
