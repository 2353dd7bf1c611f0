//! End-to-end tests for `GET /clinics` and `GET /doctors` over SQLite.

#[path = "support/app.rs"]
mod app_support;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use app_support::{init_app, send};
use clinic_backend::test_support::TestDatabase;
use rstest::{fixture, rstest};
use serde_json::Value;

#[fixture]
async fn database() -> TestDatabase {
    TestDatabase::with_small_directory()
        .await
        .expect("seeded test database")
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["name"].as_str().expect("name"))
        .collect()
}

#[rstest]
#[actix_web::test]
async fn clinics_are_listed_with_their_doctors(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;

    let (status, body) = send(&app, TestRequest::get().uri("/clinics")).await;

    assert_eq!(status, StatusCode::OK);
    let body = body.expect("body");
    assert_eq!(
        names(&body),
        ["Sunrise Family Clinic", "Riverside Medical Center"]
    );
    let doctors = body[0]["doctors"].as_array().expect("doctors");
    assert_eq!(doctors.len(), 3);
    assert_eq!(doctors[0]["name"], "Dr. Alex Morgan (Sunrise Family Clinic)");
    assert_eq!(doctors[0]["specialty"], "General Practice");
    assert!(doctors.iter().all(|doctor| doctor["clinic_id"] == 1));
}

#[rstest]
#[case("/clinics?q=RIVER", &["Riverside Medical Center"])]
#[case("/clinics?q=clinic", &["Sunrise Family Clinic"])]
#[case("/clinics?q=", &["Sunrise Family Clinic", "Riverside Medical Center"])]
#[case("/clinics?q=%25", &[])]
#[case("/clinics?q=nowhere", &[])]
#[case("/clinics?q=Clinic%20", &[])]
#[case("/clinics?q=%20Medical%20", &["Riverside Medical Center"])]
#[actix_web::test]
async fn clinic_name_filter_is_a_case_insensitive_substring(
    #[future] database: TestDatabase,
    #[case] uri: &str,
    #[case] expected: &[&str],
) {
    let database = database.await;
    let app = init_app(&database).await;

    let (status, body) = send(&app, TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body.expect("body")), expected);
}

#[rstest]
#[actix_web::test]
async fn doctors_can_be_filtered_by_clinic_and_name(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;

    let (_, all) = send(&app, TestRequest::get().uri("/doctors")).await;
    assert_eq!(all.expect("body").as_array().expect("array").len(), 6);

    let (_, clinic_two) = send(&app, TestRequest::get().uri("/doctors?clinic_id=2")).await;
    let clinic_two = clinic_two.expect("body");
    let ids: Vec<_> = clinic_two
        .as_array()
        .expect("array")
        .iter()
        .map(|doctor| doctor["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, [4, 5, 6]);

    let (_, shah) = send(
        &app,
        TestRequest::get().uri("/doctors?clinic_id=2&q=shah"),
    )
    .await;
    assert_eq!(
        names(&shah.expect("body")),
        ["Dr. Priya Shah (Riverside Medical Center)"]
    );
}

#[rstest]
#[case("/doctors?clinic_id=99")]
#[case("/doctors?clinic_id=4294967296")]
#[case("/doctors?clinic_id=-1")]
#[actix_web::test]
async fn unknown_clinic_yields_no_doctors(#[future] database: TestDatabase, #[case] uri: &str) {
    let database = database.await;
    let app = init_app(&database).await;

    let (status, body) = send(&app, TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("body"), Value::Array(Vec::new()));
}

#[rstest]
#[actix_web::test]
async fn non_integer_clinic_filter_is_rejected(#[future] database: TestDatabase) {
    let database = database.await;
    let app = init_app(&database).await;

    let (status, body) = send(&app, TestRequest::get().uri("/doctors?clinic_id=abc")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.expect("body")["code"], "validation_failed");
}

#[rstest]
#[actix_web::test]
async fn empty_directory_lists_nothing() {
    let database = TestDatabase::migrated().await.expect("migrated database");
    let app = init_app(&database).await;

    let (status, body) = send(&app, TestRequest::get().uri("/clinics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("body"), Value::Array(Vec::new()));
}
